//! # gin-routegen
//!
//! **gin-routegen** reads an [OpenAPI](https://spec.openapis.org/oas/v3.1.0) description and
//! writes a Go source file that registers every declared path and method on a
//! [Gin](https://github.com/gin-gonic/gin) engine. Each registration forwards to a single
//! `http.Handler` supplied by the caller, typically a server generated by another tool.
//!
//! ## Architecture
//!
//! The crate is a one-way pipeline:
//!
//! - **[`spec`]** - Parses YAML/JSON, keeps the `paths` map and derives [`spec::RouteDescriptor`]s
//! - **[`generator`]** - Renders the routes through an Askama template and writes the result
//! - **[`cli`]** - `generate` and `inspect` commands
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`error`]** - [`GenError`], shared by every stage
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(gin-routegen)
//!     participant Spec as spec
//!     participant Gen as generator
//!     participant FS as File System
//!
//!     User->>CLI: generate --file openapi.yaml --pkg server
//!     CLI->>Spec: load_spec("openapi.yaml")
//!     Spec-->>CLI: PathMap
//!     CLI->>Spec: derive_routes(&paths)
//!     Spec-->>CLI: Vec<RouteDescriptor>
//!     CLI->>Gen: render_routes("server", &routes)
//!     Gen-->>CLI: Go source
//!     CLI->>FS: write_output(source, --out)
//! ```
//!
//! ## Path Translation
//!
//! OpenAPI path parameters become Gin placeholders segment by segment:
//!
//! | OpenAPI              | Gin                 |
//! |----------------------|---------------------|
//! | `/pets/{petId}`      | `/pets/:petId`      |
//! | `/files/{name}.json` | `/files/{name}.json` (not a whole segment, unchanged) |
//! | `/x/{}`              | `/x/:`              |
//!
//! ## Determinism
//!
//! Paths are emitted in lexicographic order and the methods of a path in the order
//! GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS, TRACE, so the same input always
//! produces byte-identical output.
//!
//! ## Example
//!
//! ```rust
//! use gin_routegen::generator::render_routes;
//! use gin_routegen::spec::{derive_routes, load_spec_str, SpecFormat};
//!
//! let yaml = r#"
//! paths:
//!   /pets/{petId}:
//!     get: {}
//!     post: {}
//!   /health:
//!     get: {}
//! "#;
//! let routes = derive_routes(&load_spec_str(yaml, SpecFormat::Yaml)?);
//! let source = render_routes("server", &routes)?;
//! assert!(source.contains("package server"));
//! assert!(source.contains(r#"r.POST(basePath + "/pets/:petId", gin.WrapH(handler))"#));
//! # Ok::<(), gin_routegen::GenError>(())
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod logging;
pub mod spec;

pub use error::{GenError, GenResult};
pub use generator::{generate, render_routes, GenerateOptions, GenerationReport};
pub use spec::{derive_routes, load_spec, RouteDescriptor, SpecFormat};
