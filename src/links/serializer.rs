use super::base_url::BaseUrl;
use super::error::LinkError;
use super::materializer::LinkMaterializer;
use crate::mapping::{Mapping, ResourceTransformer};
use crate::router::RouteResolver;

/// Entry point for rendering JSON:API documents with resolved links.
///
/// Construction consumes the transformer and materializes its links, so a
/// transformer is resolved exactly once. Construction fails if any mapping
/// refers to an undefined route.
///
/// ```rust,ignore
/// let base_url = BaseUrl::from_request(&parts)?;
/// let serializer = JsonApiSerializer::new(transformer, &router, Some(base_url))?;
/// let post = serializer.mapping(r"Acme\Domain\Post");
/// ```
#[derive(Debug, Clone)]
pub struct JsonApiSerializer {
    transformer: ResourceTransformer,
}

impl JsonApiSerializer {
    pub fn new<R: RouteResolver + ?Sized>(
        mut transformer: ResourceTransformer,
        resolver: &R,
        base_url: Option<BaseUrl>,
    ) -> Result<Self, LinkError> {
        LinkMaterializer::new(resolver, base_url).materialize(&mut transformer)?;
        Ok(Self { transformer })
    }

    /// The transformer with materialized links.
    #[must_use]
    pub fn transformer(&self) -> &ResourceTransformer {
        &self.transformer
    }

    #[must_use]
    pub fn mapping(&self, class_name: &str) -> Option<&Mapping> {
        self.transformer.mapping(class_name)
    }

    #[must_use]
    pub fn into_transformer(self) -> ResourceTransformer {
        self.transformer
    }
}
