//! Test-table emission.
//!
//! Produces a test-case type declaration followed by one literal entry per
//! generated case:
//!
//! ```text
//! type POSTsignupTest struct {
//!     req *http.Request
//!     passing bool
//! }
//! tests := []*POSTsignupTest{
//!     &POSTsignupTest{
//!         httptest.NewRequest(POST, "/signup",
//!             strings.NewReader(`{
//!                 "name": "James123",
//!                 "email": "user@email.com"
//!             }`)),
//!         true,
//!     },
//! }
//! ```
//!
//! Indentation in the real output is tabs.

use std::io::Write;

use apidef_define::Endpoint;
use tracing::trace;

use crate::combinations::{Case, combinations};
use crate::errors::GeneratorError;

/// Name of the generated test-case type.
///
/// Uppercased method, then the path without its leading `/`, then `Test`.
///
/// ```
/// use apidef_define::Endpoint;
/// use apidef_gen::emit::test_type_name;
///
/// let endpoint = Endpoint::new("/signup", "post").unwrap();
/// assert_eq!(test_type_name(&endpoint), "POSTsignupTest");
/// ```
pub fn test_type_name(endpoint: &Endpoint) -> String {
    let path = endpoint.path();
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}Test", endpoint.method().to_uppercase(), path)
}

/// Writes the test table for `endpoint` to `w`.
///
/// The endpoint is checked before anything is written, so an invalid
/// endpoint never leaves partial output in the sink.
///
/// ## Errors
///
/// - Any error from [`combinations`]
/// - [`GeneratorError::Io`] if the sink fails
pub fn write_tests<W: Write>(endpoint: &Endpoint, w: &mut W) -> Result<(), GeneratorError> {
    let cases = combinations(endpoint)?;
    let type_name = test_type_name(endpoint);

    write!(
        w,
        "type {type_name} struct {{\n\treq *http.Request\n\tpassing bool\n}}\n"
    )?;
    writeln!(w, "tests := []*{type_name}{{")?;
    for case in cases {
        trace!(passing = case.passing(), "emitting case");
        write_case(endpoint, &type_name, &case, w)?;
    }
    writeln!(w, "}}")?;
    Ok(())
}

/// Renders the test table for `endpoint` into a string.
pub fn render_tests(endpoint: &Endpoint) -> Result<String, GeneratorError> {
    let mut buf = Vec::new();
    write_tests(endpoint, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_case<W: Write>(
    endpoint: &Endpoint,
    type_name: &str,
    case: &Case<'_>,
    w: &mut W,
) -> Result<(), GeneratorError> {
    let body = case
        .assignments()
        .iter()
        .map(|a| format!("\t\t\t\t\"{}\": \"{}\"", a.field, a.value))
        .collect::<Vec<_>>()
        .join(",\n");

    write!(
        w,
        "\t&{type_name}{{\n\
         \t\thttptest.NewRequest({method}, \"{path}\",\n\
         \t\t\tstrings.NewReader(`{{\n\
         {body}\n\
         \t\t\t}}`)),\n\
         \t\t{passing},\n\
         \t}},\n",
        method = endpoint.method(),
        path = endpoint.path(),
        passing = case.passing(),
    )?;
    Ok(())
}
