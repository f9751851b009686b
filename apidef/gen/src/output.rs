//! Mode dispatch and output writing.
//!
//! ## Safety Guarantees
//!
//! - **Validation first**: endpoints are checked before any text is written
//! - **Atomic writes**: file output uses temp file + rename so a failed run
//!   never leaves a half-written file behind

use std::fs;
use std::io::Write;
use std::path::Path;

use apidef_define::Endpoint;
use tracing::debug;

use crate::combinations::case_count;
use crate::emit::{write_struct, write_tests};
use crate::errors::GeneratorError;
use crate::invocation::GenerateMode;

/// Writes the artifact selected by `mode` for `endpoint` to `sink`.
///
/// ## Errors
///
/// - Test mode: any validation error from [`crate::combinations`]
/// - [`GeneratorError::Io`] if the sink fails
pub fn generate<W: Write>(
    endpoint: &Endpoint,
    mode: GenerateMode,
    sink: &mut W,
) -> Result<(), GeneratorError> {
    match mode {
        GenerateMode::Structs => {
            debug!(
                method = endpoint.method(),
                path = endpoint.path(),
                fields = endpoint.fields().len(),
                "generating request struct"
            );
            write_struct(endpoint, sink)?;
        }
        GenerateMode::Tests => {
            let cases = case_count(endpoint)?;
            debug!(
                method = endpoint.method(),
                path = endpoint.path(),
                cases,
                "generating test table"
            );
            write_tests(endpoint, sink)?;
        }
    }
    Ok(())
}

/// Same as [`generate`], collected into a string.
pub fn generate_to_string(
    endpoint: &Endpoint,
    mode: GenerateMode,
) -> Result<String, GeneratorError> {
    let mut buf = Vec::new();
    generate(endpoint, mode, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates the artifact and writes it to `path` atomically.
pub fn generate_to_file(
    endpoint: &Endpoint,
    mode: GenerateMode,
    path: &Path,
) -> Result<(), GeneratorError> {
    let content = generate_to_string(endpoint, mode)?;
    write_atomic(path, &content)?;
    debug!(file = %path.display(), bytes = content.len(), "wrote generated output");
    Ok(())
}
