use std::fs;
use std::path::Path;

use super::types::{PathMap, SpecDocument, SpecFormat};
use crate::error::GenError;

/// Parse a document and return its `paths` map.
///
/// Everything except the top-level `paths` field is ignored. A missing or
/// `null` `paths` field, and `null` path items, parse as empty.
///
/// # Errors
///
/// Returns [`GenError::Parse`] when `bytes` are not well-formed in `format`
/// or when `paths` does not have the path → method → operation shape.
pub fn load_spec_bytes(bytes: &[u8], format: SpecFormat) -> Result<PathMap, GenError> {
    let doc: SpecDocument = match format {
        SpecFormat::Yaml => serde_yaml::from_slice(bytes).map_err(|e| GenError::Parse {
            format,
            message: e.to_string(),
        })?,
        SpecFormat::Json => serde_json::from_slice(bytes).map_err(|e| GenError::Parse {
            format,
            message: e.to_string(),
        })?,
    };

    Ok(doc
        .paths
        .into_iter()
        .map(|(path, methods)| (path, methods.unwrap_or_default()))
        .collect())
}

/// Parse a document held in a string.
///
/// # Errors
///
/// See [`load_spec_bytes`].
pub fn load_spec_str(content: &str, format: SpecFormat) -> Result<PathMap, GenError> {
    load_spec_bytes(content.as_bytes(), format)
}

/// Read and parse the document at `file_path`.
///
/// The format is taken from the extension before the file is opened, so an
/// unsupported extension fails without any I/O.
///
/// # Errors
///
/// Returns [`GenError::UnsupportedFormat`], [`GenError::Io`] or
/// [`GenError::Parse`].
pub fn load_spec(file_path: &Path) -> Result<PathMap, GenError> {
    let format = SpecFormat::from_path(file_path)?;
    let content =
        fs::read(file_path).map_err(|e| GenError::io("failed to read input file", file_path, e))?;
    tracing::debug!(
        path = %file_path.display(),
        %format,
        bytes = content.len(),
        "Loaded API description"
    );
    load_spec_bytes(&content, format)
}
