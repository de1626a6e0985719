use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::format::format_go_file;
use crate::error::{GenError, GenResult};
use crate::generator::templates::render_routes;
use crate::spec::{derive_routes, load_spec, RouteDescriptor};

/// Package name used when none is given
pub const DEFAULT_PACKAGE_NAME: &str = "main";

/// Inputs of one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// API description to read (`.yaml`, `.yml` or `.json`)
    pub file: PathBuf,
    /// Destination file; `None` writes to stdout
    pub out: Option<PathBuf>,
    /// Go package name of the generated file
    pub package_name: String,
    /// Run `gofmt -w` on the written file
    pub gofmt: bool,
}

impl GenerateOptions {
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            file: file.into(),
            out: None,
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            gofmt: false,
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Routes (distinct paths) emitted
    pub routes: usize,
    /// Router registrations emitted, one per route and method
    pub registrations: usize,
    /// File written, or `None` for stdout
    pub output: Option<PathBuf>,
}

/// Load a document and derive its routes.
///
/// # Errors
///
/// See [`load_spec`].
pub fn load_routes(file: &Path) -> GenResult<Vec<RouteDescriptor>> {
    let paths = load_spec(file)?;
    let routes = derive_routes(&paths);
    tracing::info!(
        file = %file.display(),
        paths = paths.len(),
        routes = routes.len(),
        "Derived routes from API description"
    );
    Ok(routes)
}

/// Write rendered source to `out`, or to stdout when `out` is `None`.
///
/// Missing parent directories of `out` are created first.
///
/// # Errors
///
/// Returns [`GenError::Io`] if a directory or the file cannot be written.
pub fn write_output(rendered: &str, out: Option<&Path>) -> GenResult<()> {
    match out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .map_err(|e| GenError::io("failed to create output directory", dir, e))?;
            }
            fs::write(path, rendered)
                .map_err(|e| GenError::io("failed to write output file", path, e))?;
            tracing::info!(path = %path.display(), "Wrote generated routes");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| GenError::Io {
                    context: "failed to write to stdout".to_string(),
                    source: e,
                })?;
        }
    }
    Ok(())
}

/// Run the whole pipeline: load, derive, render, write, and optionally format.
///
/// Nothing is written until rendering has succeeded, so a failure in any
/// earlier stage leaves no output behind.
///
/// # Errors
///
/// Returns the first [`GenError`] raised by any stage.
pub fn generate(options: &GenerateOptions) -> GenResult<GenerationReport> {
    if options.package_name.trim().is_empty() {
        return Err(GenError::Usage("package name must not be empty".to_string()));
    }

    let routes = load_routes(&options.file)?;
    let rendered = render_routes(&options.package_name, &routes)?;
    write_output(&rendered, options.out.as_deref())?;

    if options.gofmt {
        match &options.out {
            Some(path) => format_go_file(path)?,
            None => tracing::warn!("Skipping gofmt: output is stdout"),
        }
    }

    Ok(GenerationReport {
        routes: routes.len(),
        registrations: routes.iter().map(RouteDescriptor::registration_count).sum(),
        output: options.out.clone(),
    })
}
