use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::GenError;

/// Serialization format of an API description document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Json,
}

impl SpecFormat {
    /// Pick the format from a file extension (`.yaml`/`.yml` or `.json`, any case).
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnsupportedFormat`] for any other extension,
    /// including a missing one.
    pub fn from_path(path: &Path) -> Result<Self, GenError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(SpecFormat::Yaml),
            "json" => Ok(SpecFormat::Json),
            _ => Err(GenError::UnsupportedFormat {
                extension: if ext.is_empty() {
                    String::new()
                } else {
                    format!(".{ext}")
                },
            }),
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecFormat::Yaml => write!(f, "YAML"),
            SpecFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Operation body under a method key. Only its presence matters.
pub type Operation = serde::de::IgnoredAny;

/// Method key → operation, for a single path item.
///
/// Keys are kept verbatim; path-level fields such as `parameters` or
/// `summary` live here too and are filtered out during derivation.
pub type MethodMap = BTreeMap<String, Operation>;

/// Path pattern → method map, ordered by path.
pub type PathMap = BTreeMap<String, MethodMap>;

/// The only part of the document that is consulted.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SpecDocument {
    #[serde(default, deserialize_with = "null_as_empty_paths")]
    pub paths: BTreeMap<String, Option<MethodMap>>,
}

fn null_as_empty_paths<'de, D>(d: D) -> Result<BTreeMap<String, Option<MethodMap>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::deserialize(d)?.unwrap_or_default())
}

/// HTTP methods recognized as operations on a path item.
///
/// Declaration order is the order in which methods of one route are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    /// Upper-case request method name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a method-map key is not an HTTP method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            "patch" => Ok(HttpMethod::Patch),
            "head" => Ok(HttpMethod::Head),
            "options" => Ok(HttpMethod::Options),
            "trace" => Ok(HttpMethod::Trace),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// One path of the document, ready for rendering.
///
/// `methods` is never empty: paths without a recognized method produce no
/// descriptor at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path exactly as written in the document, e.g. `/pets/{petId}`
    pub original_path: String,
    /// Path with `{name}` segments rewritten to `:name`
    pub translated_path: String,
    /// Recognized methods, deduplicated
    pub methods: BTreeSet<HttpMethod>,
}

impl RouteDescriptor {
    /// Number of router registrations this route produces.
    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.methods.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SpecFormat::from_path(Path::new("api.yaml")).unwrap(),
            SpecFormat::Yaml
        );
        assert_eq!(
            SpecFormat::from_path(Path::new("api.YML")).unwrap(),
            SpecFormat::Yaml
        );
        assert_eq!(
            SpecFormat::from_path(Path::new("dir/api.Json")).unwrap(),
            SpecFormat::Json
        );
    }

    #[test]
    fn test_format_rejects_other_extensions() {
        for (path, ext) in [("api.txt", ".txt"), ("api", ""), ("api.yaml.bak", ".bak")] {
            match SpecFormat::from_path(Path::new(path)) {
                Err(GenError::UnsupportedFormat { extension }) => assert_eq!(extension, ext),
                other => panic!("{path}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_method_names_any_case() {
        for method in HttpMethod::ALL {
            let upper = method.as_str();
            let lower = upper.to_ascii_lowercase();
            let mut title = lower.clone();
            title[..1].make_ascii_uppercase();
            for key in [upper.to_string(), lower, title] {
                assert_eq!(key.parse::<HttpMethod>(), Ok(method));
            }
            assert_eq!(method.to_string(), upper);
        }
    }

    #[test]
    fn test_path_level_keys_are_not_methods() {
        for key in ["parameters", "summary", "description", "servers", "$ref", "x-handler", ""] {
            assert_eq!(
                key.parse::<HttpMethod>(),
                Err(UnknownMethod(key.to_string()))
            );
        }
    }

    #[test]
    fn test_method_display_pads() {
        assert_eq!(format!("{:<7}|", HttpMethod::Get), "GET    |");
    }
}
