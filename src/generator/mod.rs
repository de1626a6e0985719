//! # Generator Module
//!
//! Renders the derived route list into a Go source file that registers every
//! route on a `*gin.Engine`, and writes that file out.
//!
//! ## Architecture
//!
//! ```text
//! API description → spec::load_spec → spec::derive_routes → RoutesTemplate → file / stdout
//! ```
//!
//! The template (`templates/routes.go.txt`) is compiled into the binary by
//! Askama, so a template syntax error is a build failure rather than a
//! runtime one.
//!
//! ## Generated Code
//!
//! ```go
//! package server
//!
//! func RegisterRoutes(r *gin.Engine, handler http.Handler, basePath string) {
//!     // basePath normalization
//!     r.GET(basePath + "/pets/:petId", gin.WrapH(handler))
//! }
//! ```
//!
//! Every registration forwards to the same `http.Handler`. Path parameters
//! are left to Gin's `:name` placeholders; the generated code never reads
//! the request.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gin_routegen::generator::{generate, GenerateOptions};
//!
//! let mut options = GenerateOptions::new("openapi.yaml");
//! options.out = Some("internal/routes/routes.go".into());
//! options.package_name = "routes".to_string();
//! generate(&options)?;
//! # Ok::<(), gin_routegen::GenError>(())
//! ```

mod project;
mod templates;

pub use project::*;
pub use templates::*;
