//! Account endpoints: registration and login.

use apidef_define::{DefineError, Endpoint};

/// Defines `POST /signup`.
///
/// ## Fields
///
/// - `name` - alphanumeric, 8 to 64 characters
/// - `email` - a valid address, 8 to 64 characters
///
/// ```
/// use apidef_definitions::define_signup_endpoint;
///
/// let endpoint = define_signup_endpoint().unwrap();
/// assert_eq!(endpoint.fields().len(), 2);
/// ```
pub fn define_signup_endpoint() -> Result<Endpoint, DefineError> {
    let mut endpoint = Endpoint::new("/signup", "POST")?;

    endpoint
        .add_field("name", "string")?
        .validator("alphanumeric")?
        .add_validator("length", ["8", "64"])?
        .pass_with(["James123"])?
        .fail_with(["user123"])?;

    endpoint
        .add_field("email", "string")?
        .validator("email")?
        .add_validator("length", ["8", "64"])?
        .pass_with(["user@email.com"])?
        .fail_with(["notanemail"])?;

    Ok(endpoint)
}

/// Defines `POST /login`.
pub fn define_login_endpoint() -> Result<Endpoint, DefineError> {
    let mut endpoint = Endpoint::new("/login", "POST")?;

    endpoint
        .add_field("email", "string")?
        .validator("required")?
        .validator("email")?
        .pass_with(["user@email.com"])?
        .fail_with(["", "user@"])?;

    endpoint
        .add_field("password", "string")?
        .validator("required")?
        .add_validator("length", ["12", "128"])?
        .pass_with(["correct-horse-battery"])?
        .fail_with(["short"])?;

    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_registers_pass_before_fail() {
        let endpoint = define_signup_endpoint().unwrap();
        let name = &endpoint.fields()[0];
        assert_eq!(name.name(), "name");
        assert!(name.test_values()[0].is_passing());
        assert!(!name.test_values()[1].is_passing());
    }

    #[test]
    fn login_has_three_email_values() {
        let endpoint = define_login_endpoint().unwrap();
        assert_eq!(endpoint.fields()[0].test_values().len(), 3);
        assert_eq!(endpoint.fields()[1].validators()[1].to_string(), "length(12|128)");
    }

    #[test]
    fn catalog_contains_both_endpoints_in_order() {
        let catalog = crate::define_catalog().unwrap();
        let paths: Vec<_> = catalog.endpoints().iter().map(Endpoint::path).collect();
        assert_eq!(paths, ["/signup", "/login"]);
    }
}
