//! Convenient re-exports for writing endpoint definitions.
//!
//! ```
//! use apidef_define::prelude::*;
//!
//! let mut endpoint = Endpoint::new("/login", "POST").unwrap();
//! endpoint.add_field("password", "string").unwrap();
//! ```

pub use crate::catalog::Catalog;
pub use crate::endpoint::Endpoint;
pub use crate::error::DefineError;
pub use crate::field::{Field, TestOutcome, TestValue, Validator};
