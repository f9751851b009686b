//! Loading endpoint definitions from TOML files.
//!
//! ```toml
//! [[endpoint]]
//! path = "/signup"
//! method = "POST"
//!
//! [[endpoint.field]]
//! name = "name"
//! type = "string"
//! pass = ["James123"]
//! fail = ["user123"]
//! validators = [{ name = "alphanumeric" }, { name = "length", params = ["8", "64"] }]
//! ```

use std::fs;
use std::path::Path;

use apidef_define::Catalog;
use apidef_define::file::DefinitionFile;
use tracing::debug;

use crate::errors::GeneratorError;

/// Reads and builds every endpoint in a definitions file.
///
/// ## Errors
///
/// - [`GeneratorError::DefinitionFile`] if the file cannot be read
/// - [`GeneratorError::ParseDefinitions`] if it is not a valid document
/// - [`GeneratorError::Definition`] if a definition breaks a builder rule
pub fn load_definitions(path: &Path) -> Result<Catalog, GeneratorError> {
    let content = fs::read_to_string(path).map_err(|e| GeneratorError::DefinitionFile {
        path: path.display().to_string(),
        source: e,
    })?;
    let catalog = parse_definitions(&content, &path.display().to_string())?;
    debug!(file = %path.display(), endpoints = catalog.len(), "loaded definitions");
    Ok(catalog)
}

/// Parses a definitions document; `origin` names it in error messages.
pub fn parse_definitions(content: &str, origin: &str) -> Result<Catalog, GeneratorError> {
    let doc: DefinitionFile =
        toml::from_str(content).map_err(|e| GeneratorError::ParseDefinitions {
            path: origin.to_string(),
            source: e,
        })?;
    Ok(doc.into_catalog()?)
}
