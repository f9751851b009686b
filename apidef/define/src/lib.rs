//! apidef Definition Library
//!
//! Types for describing an HTTP API endpoint's request body: its fields,
//! the validation rules attached to each field, and sample values that are
//! expected to pass or fail those rules. Definitions are consumed by the
//! `apidef-gen` binary to generate a validated request struct and an
//! exhaustive table of test cases.
//!
//! ## Core Types
//!
//! - [`Endpoint`] - A route identified by path and method, owning its fields
//! - [`Field`] - A named, typed request-body member
//! - [`Validator`] - A named, optionally parameterized validation rule
//! - [`TestValue`] - A sample value tagged with its [`TestOutcome`]
//! - [`Catalog`] - Endpoints keyed by `(path, method)`
//! - [`DefineError`] - Errors raised while building definitions
//!
//! ## Examples
//!
//! ```
//! use apidef_define::Endpoint;
//!
//! # fn main() -> Result<(), apidef_define::DefineError> {
//! let mut endpoint = Endpoint::new("/signup", "POST")?;
//! endpoint
//!     .add_field("name", "string")?
//!     .validator("alphanumeric")?
//!     .add_validator("length", ["8", "64"])?
//!     .pass_with(["James123"])?
//!     .fail_with(["user123"])?;
//!
//! assert_eq!(endpoint.fields()[0].validators().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Builder calls only append. Everything is stored in insertion-ordered
//! vectors, so the order of calls is the order of generated output.

pub mod catalog;
pub mod endpoint;
pub mod error;
pub mod field;
pub mod file;
pub mod prelude;

pub use catalog::Catalog;
pub use endpoint::Endpoint;
pub use error::DefineError;
pub use field::{Field, TestOutcome, TestValue, Validator};
