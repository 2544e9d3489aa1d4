use super::base_url::BaseUrl;
use super::error::LinkError;
use crate::mapping::{Mapping, ResourceTransformer};
use crate::router::{path_placeholders, RouteResolver};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Rewrites route identifiers in mappings into URL templates.
///
/// For every non-empty link field the route is looked up, a URL is generated
/// with each `{name}` placeholder passed back as the literal token `{name}`,
/// the result is percent-decoded so the braces survive, and the base URL is
/// prepended when one was given. Empty fields are left untouched.
///
/// Without a base URL the resolver is asked for an absolute URL, so its own
/// host (if any) is used instead.
///
/// Materialization is not idempotent: a resolved URL is not a route
/// identifier, and resolving it again fails with
/// [`LinkError::UndefinedRoute`].
pub struct LinkMaterializer<'r, R: RouteResolver + ?Sized> {
    resolver: &'r R,
    base_url: Option<BaseUrl>,
}

impl<'r, R: RouteResolver + ?Sized> LinkMaterializer<'r, R> {
    pub fn new(resolver: &'r R, base_url: Option<BaseUrl>) -> Self {
        Self { resolver, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Resolve one route identifier. An empty identifier resolves to itself.
    pub fn resolve(&self, route_id: &str) -> Result<String, LinkError> {
        if route_id.is_empty() {
            return Ok(String::new());
        }

        let template = self.resolver.lookup_pattern(route_id).map_err(|e| {
            warn!(route = %route_id, error = %e, "Mapping refers to an undefined route");
            LinkError::UndefinedRoute {
                route: route_id.to_string(),
            }
        })?;

        let params: BTreeMap<String, String> = path_placeholders(&template)
            .into_iter()
            .map(|name| {
                let token = format!("{{{name}}}");
                (name, token)
            })
            .collect();

        let generated = self
            .resolver
            .generate(route_id, &params, self.base_url.is_none())
            .map_err(|e| LinkError::Generation {
                route: route_id.to_string(),
                reason: e.to_string(),
            })?;

        let decoded = percent_decode(&generated);

        let url = match &self.base_url {
            Some(base) => base.join(&decoded),
            None => decoded,
        };

        debug!(route = %route_id, template = %template, url = %url, "Resolved route");
        Ok(url)
    }

    /// Resolve every link field of one mapping.
    ///
    /// On error the mapping is left as it was.
    pub fn materialize_mapping(&self, mapping: &mut Mapping) -> Result<(), LinkError> {
        let mut staged = mapping.clone();

        let resource_url = self.resolve(staged.resource_url_pattern())?;
        staged.set_resource_url_pattern(resource_url);

        let self_url = self.resolve(staged.self_url())?;
        staged.set_self_url(self_url);

        for url in staged.other_urls_mut().values_mut() {
            *url = self.resolve(url)?;
        }

        for links in staged.relationship_self_url_mut().values_mut() {
            for url in links.values_mut() {
                *url = self.resolve(url)?;
            }
        }

        *mapping = staged;
        Ok(())
    }

    /// Resolve the link fields of every mapping the transformer owns.
    ///
    /// All mappings are resolved before any is written back; on error the
    /// transformer is unchanged.
    pub fn materialize(&self, transformer: &mut ResourceTransformer) -> Result<(), LinkError> {
        let mut staged = transformer.clone();
        for mapping in staged.mappings_mut() {
            self.materialize_mapping(mapping)?;
        }
        *transformer = staged;

        info!(
            mappings_count = transformer.len(),
            base_url = self.base_url.as_ref().map(BaseUrl::as_str).unwrap_or("-"),
            "Materialized mapping links"
        );
        Ok(())
    }
}

/// Percent-decode a generated URL.
///
/// Byte sequences that do not decode to UTF-8 are written back as `%XX`
/// escapes, so an escape such as `%FF` in a path template passes through.
fn percent_decode(generated: &str) -> String {
    let bytes = urlencoding::decode_binary(generated.as_bytes());
    let mut decoded = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
        for byte in chunk.invalid() {
            decoded.push_str(&format!("%{byte:02X}"));
        }
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouteError;

    /// Route table that percent-encodes braces the way a URL generator would.
    struct StaticRoutes(BTreeMap<&'static str, &'static str>);

    impl StaticRoutes {
        fn new(routes: &[(&'static str, &'static str)]) -> Self {
            Self(routes.iter().copied().collect())
        }
    }

    impl RouteResolver for StaticRoutes {
        fn lookup_pattern(&self, route_id: &str) -> Result<String, RouteError> {
            self.0
                .get(route_id)
                .map(|p| p.to_string())
                .ok_or_else(|| RouteError::NotFound {
                    route: route_id.to_string(),
                })
        }

        fn generate(
            &self,
            route_id: &str,
            params: &BTreeMap<String, String>,
            _absolute: bool,
        ) -> Result<String, RouteError> {
            let mut path = self.lookup_pattern(route_id)?;
            for (name, value) in params {
                path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
            }
            Ok(path)
        }
    }

    #[test]
    fn test_resolve_keeps_placeholders_literal() {
        let routes = StaticRoutes::new(&[("user_show", "/users/{id}")]);
        let base = BaseUrl::parse("http://host").unwrap();
        let materializer = LinkMaterializer::new(&routes, Some(base));
        assert_eq!(materializer.resolve("user_show").unwrap(), "http://host/users/{id}");
    }

    #[test]
    fn test_resolve_without_base_url() {
        let routes = StaticRoutes::new(&[("user_posts", "/users/{user_id}/posts/{id}")]);
        let materializer = LinkMaterializer::new(&routes, None);
        assert_eq!(
            materializer.resolve("user_posts").unwrap(),
            "/users/{user_id}/posts/{id}"
        );
    }

    #[test]
    fn test_resolve_empty_passes_through() {
        let routes = StaticRoutes::new(&[]);
        let materializer = LinkMaterializer::new(&routes, None);
        assert_eq!(materializer.resolve("").unwrap(), "");
    }

    #[test]
    fn test_resolve_undefined_route() {
        let routes = StaticRoutes::new(&[]);
        let materializer = LinkMaterializer::new(&routes, None);
        let err = materializer.resolve("missing_route").unwrap_err();
        assert_eq!(
            err,
            LinkError::UndefinedRoute {
                route: "missing_route".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Route 'missing_route' has not been defined as a route."
        );
    }

    #[test]
    fn test_failed_mapping_is_left_unchanged() {
        let routes = StaticRoutes::new(&[("post_show", "/posts/{id}")]);
        let materializer = LinkMaterializer::new(&routes, None);
        let mut mapping = Mapping::new("Post");
        mapping.set_self_url("post_show");
        mapping.set_other_url("comments", "missing_route");
        let before = mapping.clone();

        assert!(materializer.materialize_mapping(&mut mapping).is_err());
        assert_eq!(mapping, before);
    }

    /// Route table whose lookup or generation fails with a fixed error.
    struct FailingRoutes {
        lookup: Result<&'static str, RouteError>,
        generate: Option<RouteError>,
    }

    impl RouteResolver for FailingRoutes {
        fn lookup_pattern(&self, _route_id: &str) -> Result<String, RouteError> {
            self.lookup.clone().map(str::to_string)
        }

        fn generate(
            &self,
            route_id: &str,
            _params: &BTreeMap<String, String>,
            _absolute: bool,
        ) -> Result<String, RouteError> {
            match &self.generate {
                Some(err) => Err(err.clone()),
                None => self.lookup_pattern(route_id),
            }
        }
    }

    #[test]
    fn test_any_lookup_error_is_undefined_route() {
        let routes = FailingRoutes {
            lookup: Err(RouteError::MissingParameter {
                route: "post_show".to_string(),
                parameter: "id".to_string(),
            }),
            generate: None,
        };
        let materializer = LinkMaterializer::new(&routes, None);
        let mut mapping = Mapping::new("Post");
        mapping.set_self_url("post_show");
        let before = mapping.clone();

        let err = materializer.materialize_mapping(&mut mapping).unwrap_err();
        assert_eq!(
            err,
            LinkError::UndefinedRoute {
                route: "post_show".to_string()
            }
        );
        assert_eq!(mapping, before);
    }

    #[test]
    fn test_generation_failure_names_route() {
        let routes = FailingRoutes {
            lookup: Ok("/posts/{id}"),
            generate: Some(RouteError::MissingParameter {
                route: "post_show".to_string(),
                parameter: "id".to_string(),
            }),
        };
        let materializer = LinkMaterializer::new(&routes, None);
        let mut mapping = Mapping::new("Post");
        mapping.set_self_url("post_show");
        mapping.set_relationship_url("author", "related", "post_show");
        let before = mapping.clone();

        let err = materializer.materialize_mapping(&mut mapping).unwrap_err();
        match &err {
            LinkError::Generation { route, reason } => {
                assert_eq!(route, "post_show");
                assert!(reason.contains("\"id\""), "reason: {reason}");
            }
            other => panic!("expected a generation error, got {other:?}"),
        }
        assert_eq!(err.route(), "post_show");
        assert_eq!(mapping, before);
    }

    #[test]
    fn test_resolve_keeps_non_utf8_escape_in_template() {
        let router = crate::router::Router::new(vec![crate::spec::RouteMeta {
            method: http::Method::GET,
            path_pattern: "/files/%FF/{id}".to_string(),
            handler_name: "file_show".to_string(),
            base_path: String::new(),
        }]);
        let materializer = LinkMaterializer::new(&router, None);
        assert_eq!(materializer.resolve("file_show").unwrap(), "/files/%FF/{id}");

        let base = BaseUrl::parse("https://api.test").unwrap();
        let materializer = LinkMaterializer::new(&router, Some(base));
        assert_eq!(
            materializer.resolve("file_show").unwrap(),
            "https://api.test/files/%FF/{id}"
        );
    }

    #[test]
    fn test_resolve_decodes_utf8_escapes() {
        let routes = StaticRoutes::new(&[("cafe_show", "/caf%C3%A9/{id}")]);
        let materializer = LinkMaterializer::new(&routes, None);
        assert_eq!(materializer.resolve("cafe_show").unwrap(), "/café/{id}");
    }
}
