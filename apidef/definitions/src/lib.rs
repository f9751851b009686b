//! apidef Endpoint Definitions
//!
//! Endpoint definitions written with the primitives from `apidef-define`.
//! These make up the built-in catalog the `apidef-gen` binary searches when
//! no definitions file is given.
//!
//! ## Available Endpoints
//!
//! - [`account::define_signup_endpoint`] - `POST /signup`
//! - [`account::define_login_endpoint`] - `POST /login`
//!
//! ## Examples
//!
//! ```
//! use apidef_definitions::define_catalog;
//!
//! let catalog = define_catalog().unwrap();
//! assert!(catalog.find("/signup", "POST").is_some());
//! ```

pub mod account;

pub use account::{define_login_endpoint, define_signup_endpoint};

use apidef_define::{Catalog, DefineError};

/// Builds the catalog of every built-in endpoint.
pub fn define_catalog() -> Result<Catalog, DefineError> {
    Catalog::try_from(vec![define_signup_endpoint()?, define_login_endpoint()?])
}
