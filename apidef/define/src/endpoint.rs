//! The endpoint definition root.

use serde::Serialize;

use crate::error::DefineError;
use crate::field::Field;

/// An API route identified by `(path, method)`, owning its request-body fields.
///
/// ## Examples
///
/// ```
/// use apidef_define::Endpoint;
///
/// let mut endpoint = Endpoint::new("/signup", "POST").unwrap();
/// endpoint
///     .add_field("email", "string")
///     .unwrap()
///     .validator("email")
///     .unwrap()
///     .pass_with(["user@email.com"])
///     .unwrap()
///     .fail_with(["notanemail"])
///     .unwrap();
///
/// assert_eq!(endpoint.fields().len(), 1);
/// assert_eq!(endpoint.fields()[0].test_values().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    path: String,
    method: String,
    fields: Vec<Field>,
}

impl Endpoint {
    /// Creates an endpoint with no fields.
    ///
    /// ## Errors
    ///
    /// - [`DefineError::InvalidPath`] if `path` is empty
    /// - [`DefineError::InvalidMethod`] if `method` is empty
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Result<Self, DefineError> {
        let path = path.into();
        let method = method.into();

        if path.is_empty() {
            return Err(DefineError::InvalidPath { method });
        }
        if method.is_empty() {
            return Err(DefineError::InvalidMethod { path });
        }

        Ok(Self {
            path,
            method,
            fields: Vec::new(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns `true` if this endpoint is identified by `(path, method)`.
    pub fn matches(&self, path: &str, method: &str) -> bool {
        self.path == path && self.method == method
    }

    /// Appends a field and returns it for further configuration.
    ///
    /// ## Errors
    ///
    /// - [`DefineError::InvalidName`] if `name` is empty
    /// - [`DefineError::InvalidType`] if `ty` is empty
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
    ) -> Result<&mut Field, DefineError> {
        let name = name.into();
        let ty = ty.into();

        if name.is_empty() {
            return Err(DefineError::InvalidName {
                context: format!("field on endpoint {} {}", self.method, self.path),
            });
        }
        if ty.is_empty() {
            return Err(DefineError::InvalidType { field: name });
        }

        self.fields.push(Field::new(name, ty));
        let idx = self.fields.len() - 1;
        Ok(&mut self.fields[idx])
    }
}
