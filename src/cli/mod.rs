//! # CLI Module
//!
//! Command-line interface for the `gin-routegen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Render the Gin registration file for an OpenAPI description:
//!
//! ```bash
//! gin-routegen generate --file openapi.yaml --out internal/routes/routes.go --pkg routes
//! ```
//!
//! Options:
//! - `--file <FILE>` - Path to the OpenAPI spec, `.yaml`/`.yml`/`.json` (required)
//! - `--out <FILE>` - Output file; stdout when omitted
//! - `--pkg <NAME>` - Go package name (default: `main`)
//! - `--fmt` - Run `gofmt -w` on the output file
//!
//! `--file`, `--out` and `--pkg` also read `GIN_ROUTEGEN_FILE`,
//! `GIN_ROUTEGEN_OUT` and `GIN_ROUTEGEN_PKG`.
//!
//! ### `inspect`
//!
//! List the registrations without generating code:
//!
//! ```bash
//! gin-routegen inspect --file openapi.yaml --base-path api
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_command, Cli, Commands};
