//! Text emitters for generated artifacts.
//!
//! Both emitters are plain string assembly against a fixed template. The
//! output is consumed by a downstream compiler, so it must match the
//! template byte for byte.
//!
//! ## Submodules
//!
//! - [`body_struct`] - The request-body struct with validation tags
//! - [`test_table`] - The table of generated test cases
//!
//! Emitters write to any [`std::io::Write`] sink; see [`crate::output`] for
//! mode dispatch and file writing.

pub mod body_struct;
pub mod test_table;

pub use body_struct::{render_struct, write_struct};
pub use test_table::{render_tests, test_type_name, write_tests};
