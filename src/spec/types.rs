use http::Method;

/// A named route extracted from an OpenAPI operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    pub method: Method,
    /// Path template as written in the OpenAPI document (e.g. `/posts/{id}`)
    pub path_pattern: String,
    /// Route identifier: the `x-handler-*` extension or the `operationId`
    pub handler_name: String,
    /// Path component of the first server URL, without trailing slash
    pub base_path: String,
}

impl RouteMeta {
    /// Path template with the base path prepended (e.g. `/api/v1/posts/{id}`).
    #[must_use]
    pub fn full_path(&self) -> String {
        format!("{}{}", self.base_path, self.path_pattern)
    }
}
