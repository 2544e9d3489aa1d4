use std::fmt;

/// Link materialization error
///
/// Returned by [`LinkMaterializer`](super::LinkMaterializer) and
/// [`JsonApiSerializer::new`](super::JsonApiSerializer::new). Both variants
/// are configuration errors and are never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// A mapping refers to a route identifier the route table does not know
    UndefinedRoute {
        /// The route identifier as written in the mapping
        route: String,
    },
    /// The route exists but no URL could be generated for it
    Generation {
        /// The route identifier as written in the mapping
        route: String,
        /// Why generation failed
        reason: String,
    },
}

impl LinkError {
    /// Route identifier the error is about.
    #[must_use]
    pub fn route(&self) -> &str {
        match self {
            LinkError::UndefinedRoute { route } | LinkError::Generation { route, .. } => route,
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::UndefinedRoute { route } => {
                write!(f, "Route '{}' has not been defined as a route.", route)
            }
            LinkError::Generation { route, reason } => {
                write!(f, "Could not generate a URL for route '{}': {}", route, reason)
            }
        }
    }
}

impl std::error::Error for LinkError {}
