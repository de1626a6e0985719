use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::generator::{
    generate, load_routes, normalize_base_path, GenerateOptions, DEFAULT_PACKAGE_NAME,
};

/// Command-line interface for gin-routegen
///
/// Generates Gin route registrations from an OpenAPI description.
#[derive(Parser, Debug)]
#[command(name = "gin-routegen")]
#[command(version, about = "Generate Gin route registrations from an OpenAPI spec", long_about = None)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Go file registering every route of the spec on a gin.Engine
    Generate {
        /// Path to the OpenAPI YAML or JSON input file
        #[arg(short, long, env = "GIN_ROUTEGEN_FILE")]
        file: Option<PathBuf>,

        /// Output Go file; directories are created as needed. Prints to stdout if omitted
        #[arg(short, long, env = "GIN_ROUTEGEN_OUT")]
        out: Option<PathBuf>,

        /// Package name for the generated Go code
        #[arg(short, long, env = "GIN_ROUTEGEN_PKG", default_value = DEFAULT_PACKAGE_NAME)]
        pkg: String,

        /// Run gofmt on the written file (binary overridable with GIN_ROUTEGEN_GOFMT_BIN)
        #[arg(long, default_value_t = false)]
        fmt: bool,
    },
    /// Print the registrations the generated code would perform
    Inspect {
        /// Path to the OpenAPI YAML or JSON input file
        #[arg(short, long, env = "GIN_ROUTEGEN_FILE")]
        file: Option<PathBuf>,

        /// Base path to apply, normalized as the generated code does
        #[arg(long, default_value = "")]
        base_path: String,
    },
}

fn required_file(file: Option<&Path>) -> Result<PathBuf, GenError> {
    file.map(Path::to_path_buf)
        .ok_or_else(|| GenError::Usage("you must provide the --file argument".to_string()))
}

/// Execute a parsed command
///
/// # Errors
///
/// Returns an error if:
/// - `--file` is missing
/// - The input has an unsupported extension, cannot be read, or cannot be parsed
/// - The output cannot be written or formatted
pub fn run_command(command: &Commands) -> Result<(), GenError> {
    match command {
        Commands::Generate {
            file,
            out,
            pkg,
            fmt,
        } => {
            let options = GenerateOptions {
                file: required_file(file.as_deref())?,
                out: out.clone(),
                package_name: pkg.clone(),
                gofmt: *fmt,
            };
            let report = generate(&options)?;
            tracing::info!(
                routes = report.routes,
                registrations = report.registrations,
                output = %report
                    .output
                    .as_deref()
                    .map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string()),
                "Generation complete"
            );
            Ok(())
        }
        Commands::Inspect { file, base_path } => {
            let routes = load_routes(&required_file(file.as_deref())?)?;
            let base = normalize_base_path(base_path);
            let mut stdout = std::io::stdout().lock();
            for route in &routes {
                for method in &route.methods {
                    writeln!(stdout, "{method:<7} {base}{}", route.translated_path).map_err(
                        |e| GenError::Io {
                            context: "failed to write to stdout".to_string(),
                            source: e,
                        },
                    )?;
                }
            }
            Ok(())
        }
    }
}
