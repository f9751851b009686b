//! Request-body struct emission.
//!
//! ```text
//! type body struct {
//!     name string `valid: "alphanumeric,length(8|64)"`
//! }
//! ```
//!
//! Field lines are indented with a single tab.

use std::io::{self, Write};

use apidef_define::{Endpoint, Field};

/// Writes the struct block for `endpoint` to `w`.
pub fn write_struct<W: Write>(endpoint: &Endpoint, w: &mut W) -> io::Result<()> {
    writeln!(w, "type body struct {{")?;
    for field in endpoint.fields() {
        writeln!(w, "{}", field_line(field))?;
    }
    writeln!(w, "}}")
}

/// Renders the struct block for `endpoint` into a string.
pub fn render_struct(endpoint: &Endpoint) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_struct(endpoint, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn field_line(field: &Field) -> String {
    format!(
        "\t{} {} `valid: \"{}\"`",
        field.name(),
        field.ty(),
        validation_tag(field)
    )
}

/// Comma-joins the rendering of each validator in registration order.
fn validation_tag(field: &Field) -> String {
    field
        .validators()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_field() {
        let mut ep = Endpoint::new("/signup", "POST").unwrap();
        ep.add_field("name", "string")
            .unwrap()
            .validator("alphanumeric")
            .unwrap()
            .add_validator("length", ["8", "64"])
            .unwrap();
        ep.add_field("age", "int")
            .unwrap()
            .add_validator("range", ["18", "130"])
            .unwrap();

        assert_eq!(
            render_struct(&ep),
            "type body struct {\n\
             \tname string `valid: \"alphanumeric,length(8|64)\"`\n\
             \tage int `valid: \"range(18|130)\"`\n\
             }\n"
        );
    }

    #[test]
    fn field_without_validators_has_empty_tag() {
        let mut ep = Endpoint::new("/a", "POST").unwrap();
        ep.add_field("note", "string").unwrap();
        assert_eq!(
            render_struct(&ep),
            "type body struct {\n\tnote string `valid: \"\"`\n}\n"
        );
    }

    #[test]
    fn endpoint_without_fields_renders_empty_struct() {
        let ep = Endpoint::new("/a", "POST").unwrap();
        assert_eq!(render_struct(&ep), "type body struct {\n}\n");
    }

    #[test]
    fn validator_params_keep_registration_order() {
        let mut ep = Endpoint::new("/a", "POST").unwrap();
        ep.add_field("kind", "string")
            .unwrap()
            .add_validator("in", ["c", "a", "b"])
            .unwrap();
        assert!(render_struct(&ep).contains("`valid: \"in(c|a|b)\"`"));
    }
}
