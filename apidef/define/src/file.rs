//! Serializable definition documents.
//!
//! These types mirror the model in a shape that deserializes cleanly from
//! configuration files. They are converted into an [`Endpoint`] only through
//! the builder operations, so a document is subject to exactly the same
//! checks as code that calls the builder directly.
//!
//! ## Examples
//!
//! ```
//! use apidef_define::file::{DefinitionFile, EndpointDef, FieldDef, ValidatorDef};
//!
//! let doc = DefinitionFile {
//!     endpoint: vec![EndpointDef {
//!         path: "/signup".to_string(),
//!         method: "POST".to_string(),
//!         field: vec![FieldDef {
//!             name: "name".to_string(),
//!             ty: "string".to_string(),
//!             validators: vec![ValidatorDef {
//!                 name: "length".to_string(),
//!                 params: vec!["8".to_string(), "64".to_string()],
//!             }],
//!             pass: vec!["James123".to_string()],
//!             fail: vec!["user123".to_string()],
//!         }],
//!     }],
//! };
//!
//! let catalog = doc.into_catalog().unwrap();
//! assert_eq!(catalog.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::endpoint::Endpoint;
use crate::error::DefineError;

/// Top-level document: a list of endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionFile {
    #[serde(default)]
    pub endpoint: Vec<EndpointDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointDef {
    pub path: String,
    pub method: String,
    #[serde(default)]
    pub field: Vec<FieldDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub validators: Vec<ValidatorDef>,
    /// Values expected to pass. An empty list means no registration call.
    #[serde(default)]
    pub pass: Vec<String>,
    /// Values expected to fail. An empty list means no registration call.
    #[serde(default)]
    pub fail: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorDef {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl DefinitionFile {
    /// Builds every endpoint and collects them into a [`Catalog`].
    ///
    /// ## Errors
    ///
    /// Returns the first [`DefineError`] raised by the builder, or
    /// [`DefineError::DuplicateEndpoint`] for repeated `(path, method)` keys.
    pub fn into_catalog(self) -> Result<Catalog, DefineError> {
        let mut catalog = Catalog::new();
        for def in self.endpoint {
            catalog.insert(def.into_endpoint()?)?;
        }
        Ok(catalog)
    }
}

impl EndpointDef {
    pub fn into_endpoint(self) -> Result<Endpoint, DefineError> {
        let mut endpoint = Endpoint::new(self.path, self.method)?;
        for def in self.field {
            let field = endpoint.add_field(def.name, def.ty)?;
            for validator in def.validators {
                field.add_validator(validator.name, validator.params)?;
            }
            if !def.pass.is_empty() {
                field.pass_with(def.pass)?;
            }
            if !def.fail.is_empty() {
                field.fail_with(def.fail)?;
            }
        }
        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::TestOutcome;

    fn field_def(name: &str) -> FieldDef {
        FieldDef {
            name: name.to_string(),
            ty: "string".to_string(),
            validators: vec![],
            pass: vec!["p".to_string()],
            fail: vec!["f".to_string()],
        }
    }

    #[test]
    fn pass_values_precede_fail_values() {
        let ep = EndpointDef {
            path: "/a".to_string(),
            method: "POST".to_string(),
            field: vec![field_def("x")],
        }
        .into_endpoint()
        .unwrap();

        let outcomes: Vec<_> = ep.fields()[0]
            .test_values()
            .iter()
            .map(|t| t.outcome())
            .collect();
        assert_eq!(outcomes, [TestOutcome::Pass, TestOutcome::Fail]);
    }

    #[test]
    fn builder_errors_surface_from_documents() {
        let mut bad = field_def("x");
        bad.ty = String::new();
        let err = EndpointDef {
            path: "/a".to_string(),
            method: "POST".to_string(),
            field: vec![bad],
        }
        .into_endpoint()
        .unwrap_err();
        assert_eq!(
            err,
            DefineError::InvalidType {
                field: "x".to_string()
            }
        );
    }

    #[test]
    fn empty_path_in_document_is_rejected() {
        let err = EndpointDef {
            path: String::new(),
            method: "POST".to_string(),
            field: vec![],
        }
        .into_endpoint()
        .unwrap_err();
        assert!(matches!(err, DefineError::InvalidPath { .. }));
    }

    #[test]
    fn deserializes_from_json_with_defaults() {
        let json = r#"{
            "endpoint": [{
                "path": "/a",
                "method": "POST",
                "field": [{ "name": "x", "type": "int", "pass": ["1"] }]
            }]
        }"#;
        let doc: DefinitionFile = serde_json::from_str(json).unwrap();
        let field = &doc.endpoint[0].field[0];
        assert_eq!(field.ty, "int");
        assert!(field.validators.is_empty());
        assert!(field.fail.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let json = r#"{ "endpoint": [{ "path": "/a", "method": "POST", "verb": "x" }] }"#;
        assert!(serde_json::from_str::<DefinitionFile>(json).is_err());
    }
}
