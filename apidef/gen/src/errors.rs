//! Error types for the apidef generator.

use apidef_define::DefineError;
use thiserror::Error;

/// Errors that can occur while selecting an endpoint or generating code.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Path or method was not supplied.
    #[error("a path and method must be passed via the --path and --method flags")]
    InvalidEndpointParameters,

    /// Both or neither of the generation flags were set.
    #[error("exactly one of --gen-tests or --gen-structs must be set")]
    InvalidGenerateParameters,

    /// No definition matches the requested `(path, method)`.
    #[error("the API endpoint {method} {path} is not defined")]
    ApiEndpointNotFound { path: String, method: String },

    /// Test generation was requested for an endpoint without fields.
    #[error("endpoint {method} {path} has no fields to generate tests for")]
    NoFields { path: String, method: String },

    /// A field has no pass/fail values, which would collapse the product.
    #[error("field '{field}' has no test values; register values with pass_with or fail_with")]
    NoTestValues { field: String },

    /// The number of combinations does not fit in `usize`.
    #[error("endpoint {method} {path} produces more test cases than can be counted")]
    CaseCountOverflow { path: String, method: String },

    /// A definition was rejected by the builder.
    #[error(transparent)]
    Definition(#[from] DefineError),

    /// Failed to read a definitions file.
    #[error("failed to read definitions file '{path}': {source}")]
    DefinitionFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A definitions file is not valid TOML for the expected shape.
    #[error("failed to parse definitions file '{path}': {source}")]
    ParseDefinitions {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output sink failed.
    #[error("failed to write generated output: {0}")]
    Io(#[from] std::io::Error),
}
