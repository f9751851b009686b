//! Definition-time errors.
//!
//! Every builder operation in this crate validates its arguments before
//! touching the model, so an `Err` always means the model is unchanged.

use thiserror::Error;

use crate::field::TestOutcome;

/// Errors raised while building an endpoint definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineError {
    /// The endpoint path was empty.
    #[error("path must be a non-empty string (method: '{method}')")]
    InvalidPath {
        /// Method supplied alongside the empty path.
        method: String,
    },

    /// The endpoint method was empty.
    #[error("method must be a non-empty string (path: '{path}')")]
    InvalidMethod {
        /// Path supplied alongside the empty method.
        path: String,
    },

    /// A field or validator name was empty.
    ///
    /// `context` names the owner: the endpoint for a field, the field for
    /// a validator.
    #[error("name must be a non-empty string ({context})")]
    InvalidName {
        /// Where the empty name was supplied.
        context: String,
    },

    /// A field type was empty.
    #[error("type of field '{field}' must be a non-empty string")]
    InvalidType {
        /// The field whose type was empty.
        field: String,
    },

    /// A pass/fail registration call supplied no values.
    #[error("field '{field}' received an empty {outcome} value list")]
    EmptyValueList {
        /// The field the registration targeted.
        field: String,
        /// Which registration call was made.
        outcome: TestOutcome,
    },

    /// Two endpoints with the same `(path, method)` were added to a catalog.
    #[error("endpoint {method} {path} is already defined")]
    DuplicateEndpoint {
        /// Path of the duplicate endpoint.
        path: String,
        /// Method of the duplicate endpoint.
        method: String,
    },
}
