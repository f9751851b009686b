//! apidef code generator library.
//!
//! Turns an [`apidef_define::Endpoint`] into one of two text artifacts:
//!
//! - A request-body struct whose fields carry validation tags
//! - An exhaustive table of test cases, one per combination of the fields'
//!   registered pass/fail values, each with its expected outcome
//!
//! ## Modules
//!
//! - [`combinations`] - Cartesian-product enumeration of test values
//! - [`emit`] - Text rendering of the struct and the test table
//! - [`invocation`] - Flag validation, mode selection and endpoint lookup
//! - [`loader`] - Endpoint definitions from TOML files
//! - [`output`] - Mode dispatch and atomic file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use apidef_definitions::define_signup_endpoint;
//! use apidef_gen::invocation::GenerateMode;
//! use apidef_gen::output::generate_to_string;
//!
//! let endpoint = define_signup_endpoint().unwrap();
//! let tests = generate_to_string(&endpoint, GenerateMode::Tests).unwrap();
//! assert!(tests.starts_with("type POSTsignupTest struct {"));
//! ```
//!
//! Output is deterministic: the same definition always produces the same
//! bytes, in the same case order.

pub mod combinations;
pub mod emit;
pub mod errors;
pub mod invocation;
pub mod loader;
pub mod output;
