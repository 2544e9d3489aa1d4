use super::types::RouteMeta;
use crate::validator::{ensure_no_issues, ValidationIssue};
use oas3::OpenApiV3Spec;
use serde_json::Value;

/// Pick the route identifier for an operation.
///
/// An `x-handler*` string extension wins over `operationId`. Extension keys
/// are matched with or without their `x-` prefix. Operations with neither are
/// recorded as a `MissingHandler` issue.
fn resolve_handler_name(
    operation: &oas3::spec::Operation,
    location: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    operation
        .extensions
        .iter()
        .find_map(|(key, val)| {
            if key.trim_start_matches("x-").starts_with("handler") {
                if let Value::String(s) = val {
                    return Some(s.clone());
                }
            }
            None
        })
        .or_else(|| operation.operation_id.clone())
        .or_else(|| {
            issues.push(ValidationIssue::new(
                location,
                "MissingHandler",
                "Missing operationId or x-handler-* extension",
            ));
            None
        })
}

/// Path component of the first server URL, or an empty string.
///
/// Both absolute (`https://api.example.com/v1`) and relative (`/v1`) server
/// URLs are accepted.
#[must_use]
pub fn extract_base_path(spec: &OpenApiV3Spec) -> String {
    let Some(server) = spec.servers.first() else {
        return String::new();
    };
    let url_str = &server.url;
    url::Url::parse(url_str)
        .or_else(|_| url::Url::parse(&format!("http://dummy{url_str}")))
        .map(|u| {
            let p = u.path().trim_end_matches('/');
            if p == "/" || p.is_empty() {
                String::new()
            } else {
                p.to_string()
            }
        })
        .unwrap_or_default()
}

/// Build the named route table from a parsed OpenAPI document.
///
/// # Errors
///
/// Returns an error listing every operation that has no route identifier.
pub fn build_routes(spec: &OpenApiV3Spec) -> anyhow::Result<Vec<RouteMeta>> {
    let mut routes = Vec::new();
    let mut issues = Vec::new();
    let base_path = extract_base_path(spec);

    if let Some(paths_map) = spec.paths.as_ref() {
        for (path, item) in paths_map {
            for (method, operation) in item.methods() {
                let location = format!("{path} → {method}");

                let Some(handler_name) = resolve_handler_name(operation, &location, &mut issues)
                else {
                    continue;
                };

                routes.push(RouteMeta {
                    method: method.clone(),
                    path_pattern: path.clone(),
                    handler_name,
                    base_path: base_path.clone(),
                });
            }
        }
    }

    ensure_no_issues(&issues)?;
    Ok(routes)
}
