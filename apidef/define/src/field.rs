//! Request-body fields, their validators and tagged test values.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::DefineError;

/// Expected outcome a test value was registered with.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use apidef_define::TestOutcome;
///
/// assert_eq!(TestOutcome::Pass.to_string(), "pass");
/// assert_eq!(TestOutcome::from_str("fail").unwrap(), TestOutcome::Fail);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TestOutcome {
    /// Registered through [`Field::pass_with`].
    Pass,
    /// Registered through [`Field::fail_with`].
    Fail,
}

impl TestOutcome {
    /// Returns `true` for [`TestOutcome::Pass`].
    pub fn is_pass(self) -> bool {
        matches!(self, TestOutcome::Pass)
    }
}

/// A concrete sample value for a field and the outcome it should produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestValue {
    value: String,
    outcome: TestOutcome,
}

impl TestValue {
    /// The literal value placed in the generated request body.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The outcome this value was registered with.
    pub fn outcome(&self) -> TestOutcome {
        self.outcome
    }

    /// Shorthand for `self.outcome().is_pass()`.
    pub fn is_passing(&self) -> bool {
        self.outcome.is_pass()
    }
}

/// A named validation rule with ordered string parameters.
///
/// Renders as `name` without parameters, or `name(p1|p2)` with them.
///
/// ```
/// use apidef_define::Endpoint;
///
/// let mut endpoint = Endpoint::new("/signup", "POST").unwrap();
/// let field = endpoint
///     .add_field("name", "string")
///     .unwrap()
///     .validator("alphanumeric")
///     .unwrap()
///     .add_validator("length", ["8", "64"])
///     .unwrap();
///
/// let rendered: Vec<String> = field.validators().iter().map(|v| v.to_string()).collect();
/// assert_eq!(rendered, ["alphanumeric", "length(8|64)"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validator {
    name: String,
    params: Vec<String>,
}

impl Validator {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

impl std::fmt::Display for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_params() {
            write!(f, "{}({})", self.name, self.params.join("|"))
        } else {
            f.write_str(&self.name)
        }
    }
}

/// A typed request-body member.
///
/// Fields are created through [`Endpoint::add_field`](crate::Endpoint::add_field)
/// and only ever grow: validators and test values are appended in call order
/// and that order is the order used in all generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    validators: Vec<Validator>,
    test_values: Vec<TestValue>,
}

impl Field {
    pub(crate) fn new(name: String, ty: String) -> Self {
        Self {
            name,
            ty,
            validators: Vec::new(),
            test_values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's type as written in the generated struct.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Test values in registration order.
    pub fn test_values(&self) -> &[TestValue] {
        &self.test_values
    }

    /// Appends a validator with the given parameters.
    ///
    /// ## Errors
    ///
    /// Returns [`DefineError::InvalidName`] if `name` is empty.
    pub fn add_validator<I, S>(
        &mut self,
        name: impl Into<String>,
        params: I,
    ) -> Result<&mut Self, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(DefineError::InvalidName {
                context: format!("validator on field '{}'", self.name),
            });
        }

        self.validators.push(Validator {
            name,
            params: params.into_iter().map(Into::into).collect(),
        });
        Ok(self)
    }

    /// Appends a validator that takes no parameters.
    pub fn validator(&mut self, name: impl Into<String>) -> Result<&mut Self, DefineError> {
        self.add_validator(name, std::iter::empty::<String>())
    }

    /// Registers values that are expected to pass validation.
    ///
    /// ## Errors
    ///
    /// Returns [`DefineError::EmptyValueList`] if `values` is empty; the field
    /// is left unchanged.
    pub fn pass_with<I, S>(&mut self, values: I) -> Result<&mut Self, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(values, TestOutcome::Pass)
    }

    /// Registers values that are expected to fail validation.
    ///
    /// ## Errors
    ///
    /// Returns [`DefineError::EmptyValueList`] if `values` is empty; the field
    /// is left unchanged.
    pub fn fail_with<I, S>(&mut self, values: I) -> Result<&mut Self, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(values, TestOutcome::Fail)
    }

    fn register<I, S>(&mut self, values: I, outcome: TestOutcome) -> Result<&mut Self, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<TestValue> = values
            .into_iter()
            .map(|value| TestValue {
                value: value.into(),
                outcome,
            })
            .collect();

        if values.is_empty() {
            return Err(DefineError::EmptyValueList {
                field: self.name.clone(),
                outcome,
            });
        }

        self.test_values.extend(values);
        Ok(self)
    }
}
