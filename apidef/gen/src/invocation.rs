//! Validation of a generation request and endpoint lookup.
//!
//! The CLI collects raw flag values; this module turns them into a
//! [`GenerateRequest`] or one of the named invocation errors, so the rules
//! are the same no matter which front end calls the generator.

use apidef_define::{Catalog, Endpoint};
use strum::{Display, EnumString};

use crate::errors::GeneratorError;

/// Which artifact to produce. The two are never produced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum GenerateMode {
    /// The request-body struct with validation tags.
    Structs,
    /// The exhaustive test-case table.
    Tests,
}

impl GenerateMode {
    /// Resolves the mode from the two mutually exclusive flags.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::InvalidGenerateParameters`] if both or
    /// neither flag is set.
    pub fn from_flags(gen_tests: bool, gen_structs: bool) -> Result<Self, GeneratorError> {
        match (gen_tests, gen_structs) {
            (true, false) => Ok(GenerateMode::Tests),
            (false, true) => Ok(GenerateMode::Structs),
            _ => Err(GeneratorError::InvalidGenerateParameters),
        }
    }
}

/// A validated request to generate one artifact for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub path: String,
    pub method: String,
    pub mode: GenerateMode,
}

impl GenerateRequest {
    /// Validates raw flag values.
    ///
    /// Missing and empty path/method are treated the same. Endpoint
    /// parameters are checked before the generation flags.
    ///
    /// ## Errors
    ///
    /// - [`GeneratorError::InvalidEndpointParameters`]
    /// - [`GeneratorError::InvalidGenerateParameters`]
    pub fn new(
        path: Option<String>,
        method: Option<String>,
        gen_tests: bool,
        gen_structs: bool,
    ) -> Result<Self, GeneratorError> {
        let (Some(path), Some(method)) = (non_empty(path), non_empty(method)) else {
            return Err(GeneratorError::InvalidEndpointParameters);
        };
        let mode = GenerateMode::from_flags(gen_tests, gen_structs)?;
        Ok(Self { path, method, mode })
    }

    /// Finds the endpoint this request targets.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::ApiEndpointNotFound`] if no endpoint in
    /// `catalog` matches `(path, method)`.
    pub fn select<'c>(&self, catalog: &'c Catalog) -> Result<&'c Endpoint, GeneratorError> {
        catalog
            .find(&self.path, &self.method)
            .ok_or_else(|| GeneratorError::ApiEndpointNotFound {
                path: self.path.clone(),
                method: self.method.clone(),
            })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
