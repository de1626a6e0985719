//! Error types for route generation
//!
//! Every stage of the pipeline (load, derive, render, write) reports failures
//! through [`GenError`]. None of them are recoverable: the binary prints the
//! diagnostic and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

use crate::spec::SpecFormat;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GenError {
    /// Required input was not supplied
    #[error("usage error: {0}")]
    Usage(String),

    /// Input file extension is neither YAML nor JSON
    #[error("unsupported file extension: {extension:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { extension: String },

    /// Input bytes are not well-formed in the declared format
    #[error("failed to parse {format} document: {message}")]
    Parse { format: SpecFormat, message: String },

    /// Reading the input or writing the output failed
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The built-in template failed to render
    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),

    /// Post-generation formatting failed
    #[error("formatting failed: {0}")]
    Format(String),
}

impl GenError {
    /// Wrap an I/O error with the action and path that caused it.
    pub fn io(action: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            context: format!("{action} {:?}", path.into()),
            source,
        }
    }

    /// Process exit status the binary reports for this error.
    ///
    /// Usage errors mirror clap's status so a missing flag and a rejected
    /// flag look the same to calling scripts.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::Usage(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_context_names_path() {
        let err = GenError::io(
            "failed to read",
            "/tmp/missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("/tmp/missing.yaml"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(GenError::Usage("missing --file".into()).exit_code(), 2);
        assert_eq!(
            GenError::UnsupportedFormat {
                extension: ".txt".into()
            }
            .exit_code(),
            1
        );
    }
}
