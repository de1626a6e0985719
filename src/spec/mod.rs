//! # Spec Module
//!
//! Reads an OpenAPI description (YAML or JSON) and derives the list of
//! routes to register.
//!
//! Only the top-level `paths` field is read. For every path item the keys
//! that name an HTTP method are kept; the operation bodies are parsed for
//! well-formedness and then discarded.
//!
//! ```rust
//! use gin_routegen::spec::{derive_routes, load_spec_str, SpecFormat};
//!
//! let paths = load_spec_str("paths:\n  /pets/{petId}:\n    get: {}\n", SpecFormat::Yaml)?;
//! let routes = derive_routes(&paths);
//! assert_eq!(routes[0].translated_path, "/pets/:petId");
//! # Ok::<(), gin_routegen::GenError>(())
//! ```

mod build;
mod load;
mod types;

pub use build::*;
pub use load::*;
pub use types::*;
