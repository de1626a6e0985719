use std::collections::BTreeSet;

use super::types::{HttpMethod, MethodMap, PathMap, RouteDescriptor};

/// Rewrite OpenAPI path parameters into Gin placeholders.
///
/// Each `/`-delimited segment whose first byte is `{` and last byte is `}`
/// becomes `:` followed by the text in between. All other segments, empty
/// ones included, are kept byte for byte. `{}` therefore becomes `:`.
///
/// ```
/// use gin_routegen::spec::translate_path;
///
/// assert_eq!(translate_path("/users/{id}/posts"), "/users/:id/posts");
/// assert_eq!(translate_path("/files/{name}.json"), "/files/{name}.json");
/// ```
#[must_use]
pub fn translate_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            match segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                Some(name) => format!(":{name}"),
                None => segment.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Collect the recognized HTTP methods of one path item.
///
/// Keys are matched case-insensitively; anything that is not one of the
/// eight HTTP methods (`parameters`, `summary`, `x-*`, ...) is skipped.
#[must_use]
pub fn recognized_methods(methods: &MethodMap) -> BTreeSet<HttpMethod> {
    methods
        .keys()
        .filter_map(|key| match key.parse::<HttpMethod>() {
            Ok(method) => Some(method),
            Err(_) => {
                tracing::trace!(key = %key, "Ignoring non-method key on path item");
                None
            }
        })
        .collect()
}

/// Turn the document's path map into the ordered route list.
///
/// Paths come out in lexicographic order and paths with no recognized
/// method are dropped. Methods of a route are deduplicated, so `get` and
/// `GET` on the same path register once.
#[must_use]
pub fn derive_routes(paths: &PathMap) -> Vec<RouteDescriptor> {
    let mut routes = Vec::with_capacity(paths.len());

    for (path, item) in paths {
        let methods = recognized_methods(item);
        if methods.is_empty() {
            tracing::debug!(path = %path, "Skipping path without HTTP methods");
            continue;
        }

        let translated_path = translate_path(path);
        tracing::debug!(
            path = %path,
            gin_path = %translated_path,
            methods = ?methods,
            "Derived route"
        );
        routes.push(RouteDescriptor {
            original_path: path.clone(),
            translated_path,
            methods,
        });
    }

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{load_spec_str, SpecFormat};

    #[test]
    fn test_translate_path_parameters() {
        assert_eq!(translate_path("/pets/{petId}"), "/pets/:petId");
        assert_eq!(
            translate_path("/users/{userId}/posts/{postId}"),
            "/users/:userId/posts/:postId"
        );
        assert_eq!(translate_path("/health"), "/health");
    }

    #[test]
    fn test_translate_path_keeps_empty_segments() {
        assert_eq!(translate_path("/a//{b}/"), "/a//:b/");
        assert_eq!(translate_path("{id}"), ":id");
        assert_eq!(translate_path("/"), "/");
    }

    #[test]
    fn test_translate_path_malformed_parameters() {
        assert_eq!(translate_path("/x/{}"), "/x/:");
        assert_eq!(translate_path("/x/{open"), "/x/{open");
        assert_eq!(translate_path("/x/close}"), "/x/close}");
        assert_eq!(translate_path("/x/pre{id}"), "/x/pre{id}");
        assert_eq!(translate_path("/x/{a}{b}"), "/x/:a}{b");
        assert_eq!(translate_path("/x/{"), "/x/{");
        assert_eq!(translate_path("/x/}"), "/x/}");
    }

    #[test]
    fn test_method_keys_case_insensitive_and_deduplicated() {
        let yaml = "paths:\n  /a:\n    Get: {}\n    GET: {}\n    get: {}\n    post: {}\n";
        let routes = derive_routes(&load_spec_str(yaml, SpecFormat::Yaml).unwrap());
        assert_eq!(routes.len(), 1);
        assert_eq!(
            routes[0].methods.iter().copied().collect::<Vec<_>>(),
            vec![HttpMethod::Get, HttpMethod::Post]
        );
    }

    #[test]
    fn test_non_method_keys_are_ignored() {
        let yaml = r#"
paths:
  /only-params:
    parameters:
      - name: id
        in: path
    summary: nothing here
  /mixed:
    parameters: []
    x-internal: true
    delete: {}
"#;
        let routes = derive_routes(&load_spec_str(yaml, SpecFormat::Yaml).unwrap());
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].original_path, "/mixed");
        assert_eq!(routes[0].registration_count(), 1);
        assert!(routes[0].methods.contains(&HttpMethod::Delete));
    }

    #[test]
    fn test_routes_sorted_by_path_and_methods_canonical() {
        let json = r#"{"paths":{
            "/z":{"trace":{},"options":{},"head":{},"patch":{},"delete":{},"put":{},"post":{},"get":{}},
            "/a":{"get":{}}
        }}"#;
        let routes = derive_routes(&load_spec_str(json, SpecFormat::Json).unwrap());
        let paths: Vec<_> = routes.iter().map(|r| r.original_path.as_str()).collect();
        assert_eq!(paths, vec!["/a", "/z"]);
        let methods: Vec<_> = routes[1].methods.iter().map(HttpMethod::as_str).collect();
        assert_eq!(
            methods,
            vec!["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "TRACE"]
        );
    }

    #[test]
    fn test_empty_document_yields_no_routes() {
        let routes = derive_routes(&PathMap::new());
        assert!(routes.is_empty());
    }
}
