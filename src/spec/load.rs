use super::build::build_routes;
use super::types::RouteMeta;
use anyhow::Context;
use oas3::OpenApiV3Spec;
use std::path::Path;
use tracing::info;

fn strip_unknown_verbs(val: &mut serde_json::Value) {
    const METHODS: [&str; 8] = ["get", "post", "put", "delete", "patch", "options", "head", "trace"];

    let Some(serde_json::Value::Object(paths_map)) = val.get_mut("paths") else {
        return;
    };
    for item in paths_map.values_mut() {
        if let serde_json::Value::Object(obj) = item {
            obj.retain(|k, _| {
                let lk = k.to_ascii_lowercase();
                match lk.as_str() {
                    "summary" | "description" | "servers" | "parameters" | "$ref" => true,
                    m if METHODS.contains(&m) => true,
                    _ => k.starts_with("x-"),
                }
            });
        }
    }
}

/// Load the named route table from an OpenAPI file.
///
/// `.yaml`/`.yml` files are parsed as YAML, anything else as JSON.
pub fn load_spec(file_path: impl AsRef<Path>) -> anyhow::Result<Vec<RouteMeta>> {
    let file_path = file_path.as_ref();
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read OpenAPI spec {}", file_path.display()))?;
    let is_yaml = matches!(
        file_path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let mut value: serde_json::Value = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", file_path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", file_path.display()))?
    };

    strip_unknown_verbs(&mut value);
    let spec: OpenApiV3Spec = serde_json::from_value(value)
        .with_context(|| format!("{} is not an OpenAPI 3 document", file_path.display()))?;

    let routes = build_routes(&spec)?;
    info!(
        spec = %file_path.display(),
        title = %spec.info.title,
        routes_count = routes.len(),
        "Loaded route table from OpenAPI spec"
    );
    Ok(routes)
}

/// Build route metadata from an already parsed [`OpenApiV3Spec`].
pub fn load_spec_from_spec(spec: OpenApiV3Spec) -> anyhow::Result<Vec<RouteMeta>> {
    build_routes(&spec)
}
