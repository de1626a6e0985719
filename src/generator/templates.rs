use askama::Template;

use crate::error::GenError;
use crate::spec::{HttpMethod, RouteDescriptor};

/// One route as the template sees it
#[derive(Debug, Clone)]
pub struct RouteContext {
    /// Gin path as a quoted Go string literal, e.g. `"/pets/:petId"`
    pub path_literal: String,
    /// Opening of each registration call, in emission order; see [`gin_call`]
    pub calls: Vec<&'static str>,
}

impl From<&RouteDescriptor> for RouteContext {
    fn from(route: &RouteDescriptor) -> Self {
        RouteContext {
            path_literal: go_string_literal(&route.translated_path),
            calls: route.methods.iter().copied().map(gin_call).collect(),
        }
    }
}

/// Template data for the generated Go routes file
#[derive(Template)]
#[template(path = "routes.go.txt", escape = "none")]
pub struct RoutesTemplate {
    /// Go package clause
    pub package_name: String,
    /// Routes in emission order
    pub routes: Vec<RouteContext>,
}

impl RoutesTemplate {
    #[must_use]
    pub fn new(package_name: &str, routes: &[RouteDescriptor]) -> Self {
        RoutesTemplate {
            package_name: package_name.to_string(),
            routes: routes.iter().map(RouteContext::from).collect(),
        }
    }
}

/// Opening of the `*gin.Engine` call registering `method`, up to the path argument.
///
/// `gin.Engine` has a shorthand for every method except TRACE, which goes
/// through `Handle`.
#[must_use]
pub fn gin_call(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "GET(",
        HttpMethod::Post => "POST(",
        HttpMethod::Put => "PUT(",
        HttpMethod::Delete => "DELETE(",
        HttpMethod::Patch => "PATCH(",
        HttpMethod::Head => "HEAD(",
        HttpMethod::Options => "OPTIONS(",
        HttpMethod::Trace => "Handle(\"TRACE\", ",
    }
}

/// Render the complete Go source file registering `routes`.
///
/// The output is built entirely in memory; nothing is written here. It always
/// ends with a single newline.
///
/// # Errors
///
/// Returns [`GenError::Render`] if the template fails to render.
pub fn render_routes(package_name: &str, routes: &[RouteDescriptor]) -> Result<String, GenError> {
    let mut rendered = RoutesTemplate::new(package_name, routes).render()?;
    // askama drops the template's final newline
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    tracing::debug!(
        package = package_name,
        routes = routes.len(),
        bytes = rendered.len(),
        "Rendered routes file"
    );
    Ok(rendered)
}

/// Quote `s` as a Go interpreted string literal.
#[must_use]
pub fn go_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Base-path normalization performed by the generated `RegisterRoutes`.
///
/// Empty stays empty. Otherwise a leading `/` is added when missing and all
/// trailing `/` are removed, so `"api"`, `"/api"` and `"/api//"` all give
/// `"/api"`.
#[must_use]
pub fn normalize_base_path(base_path: &str) -> String {
    if base_path.is_empty() {
        return String::new();
    }
    let prefixed = if base_path.starts_with('/') {
        base_path.to_string()
    } else {
        format!("/{base_path}")
    };
    prefixed.trim_end_matches('/').to_string()
}
