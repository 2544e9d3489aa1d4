//! Named route table and URL generation.

use crate::spec::RouteMeta;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Matches `{name}` placeholders in a path template, non-greedy.
#[allow(clippy::expect_used)]
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(.*?)\}").expect("placeholder regex is valid"));

/// Error returned by a [`RouteResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route is registered under this name
    NotFound {
        /// The unknown route identifier
        route: String,
    },
    /// A placeholder in the route's path template has no parameter value
    MissingParameter {
        /// The route being generated
        route: String,
        /// The placeholder name without braces
        parameter: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NotFound { route } => {
                write!(f, "Route '{}' does not exist.", route)
            }
            RouteError::MissingParameter { route, parameter } => {
                write!(
                    f,
                    "Some mandatory parameters are missing (\"{}\") to generate a URL for route \"{}\".",
                    parameter, route
                )
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Route table lookup and URL generation for named routes.
///
/// Implemented by [`Router`]; tests and embedding applications can provide
/// their own table.
pub trait RouteResolver {
    /// Path template registered for `route_id` (e.g. `/users/{id}`).
    fn lookup_pattern(&self, route_id: &str) -> Result<String, RouteError>;

    /// Generate a URL for `route_id`, substituting `params` into the template.
    ///
    /// Parameters not present in the template are appended as a query string.
    /// With `absolute` set the result is prefixed by the resolver's host, if it
    /// has one.
    fn generate(
        &self,
        route_id: &str,
        params: &BTreeMap<String, String>,
        absolute: bool,
    ) -> Result<String, RouteError>;
}

/// Ordered, de-duplicated placeholder names found in a path template.
///
/// ```
/// use jsonapi_links::router::path_placeholders;
///
/// assert_eq!(
///     path_placeholders("/users/{user_id}/posts/{id}"),
///     vec!["user_id".to_string(), "id".to_string()]
/// );
/// ```
#[must_use]
pub fn path_placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Named route table built from OpenAPI route metadata.
///
/// Routes are keyed by `handler_name`. The table is immutable once built and
/// can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: BTreeMap<String, RouteMeta>,
    /// Scheme and authority used for absolute URLs (e.g. `http://localhost`)
    host: Option<String>,
}

impl Router {
    /// Create a router from route metadata.
    ///
    /// When two routes share a name, the later one replaces the earlier one.
    #[must_use]
    pub fn new(routes: Vec<RouteMeta>) -> Self {
        let mut table = BTreeMap::new();
        for route in routes {
            if let Some(previous) = table.insert(route.handler_name.clone(), route) {
                warn!(
                    route = %previous.handler_name,
                    replaced_path = %previous.full_path(),
                    "Duplicate route name, keeping the last definition"
                );
            }
        }

        info!(routes_count = table.len(), "Named route table loaded");

        Self {
            routes: table,
            host: None,
        }
    }

    /// Set the scheme and authority used when generating absolute URLs.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        let host = host.into();
        self.host = Some(host.trim_end_matches('/').to_string());
        self
    }

    /// Host used for absolute URLs, if any.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Look up a route by name.
    #[must_use]
    pub fn get(&self, route_id: &str) -> Option<&RouteMeta> {
        self.routes.get(route_id)
    }

    /// All route names, sorted.
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteResolver for Router {
    fn lookup_pattern(&self, route_id: &str) -> Result<String, RouteError> {
        self.get(route_id)
            .map(RouteMeta::full_path)
            .ok_or_else(|| RouteError::NotFound {
                route: route_id.to_string(),
            })
    }

    fn generate(
        &self,
        route_id: &str,
        params: &BTreeMap<String, String>,
        absolute: bool,
    ) -> Result<String, RouteError> {
        let template = self.lookup_pattern(route_id)?;
        let placeholders = path_placeholders(&template);

        if let Some(missing) = placeholders.iter().find(|p| !params.contains_key(*p)) {
            return Err(RouteError::MissingParameter {
                route: route_id.to_string(),
                parameter: missing.clone(),
            });
        }

        let path = PLACEHOLDER.replace_all(&template, |caps: &Captures| {
            params
                .get(&caps[1])
                .map(|v| urlencoding::encode(v).into_owned())
                .unwrap_or_default()
        });

        let query: Vec<String> = params
            .iter()
            .filter(|(k, _)| !placeholders.contains(k))
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();

        let mut url = String::with_capacity(path.len() + 32);
        if absolute {
            if let Some(host) = &self.host {
                url.push_str(host);
            }
        }
        url.push_str(&path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        debug!(route = %route_id, template = %template, url = %url, "Generated URL");
        Ok(url)
    }
}
