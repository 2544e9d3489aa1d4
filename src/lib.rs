//! # jsonapi-links
//!
//! **jsonapi-links** resolves the links of JSON:API resource mappings against
//! a named route table loaded from an [OpenAPI 3](https://spec.openapis.org/oas/v3.1.0)
//! specification.
//!
//! ## Overview
//!
//! JSON:API documents carry `self`, `related` and collection links for every
//! resource. Mapping files describe those links with *route identifiers*
//! (the operation's `operationId` or `x-handler-*` name) rather than literal
//! URLs, so they stay valid when paths or hosts change. Before a serializer
//! renders a document, each identifier is resolved into a URL template:
//!
//! ```text
//! mapping (self: get_post) + route table (get_post: /posts/{id})
//!     + base URL (https://api.example.com)
//!     = https://api.example.com/posts/{id}
//! ```
//!
//! ## Architecture
//!
//! - **[`spec`]** - Loads named routes from an OpenAPI document
//! - **[`router`]** - Named route table, placeholder extraction and URL generation
//! - **[`mapping`]** - Per-type mappings, YAML mapping files and the transformer owning them
//! - **[`links`]** - Link materialization, base URLs and the serializer entry point
//! - **[`config`]** - Environment configuration
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `jsonapi-links` command
//!
//! ## Quick Start
//!
//! ```no_run
//! use jsonapi_links::{
//!     links::{BaseUrl, JsonApiSerializer},
//!     mapping::ResourceTransformer,
//!     router::Router,
//!     spec::load_spec,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let routes = load_spec("openapi.yaml")?;
//! let router = Router::new(routes);
//! let transformer = ResourceTransformer::load("config/mappings")?;
//!
//! let base_url = BaseUrl::parse("https://api.example.com")?;
//! let serializer = JsonApiSerializer::new(transformer, &router, Some(base_url))?;
//!
//! if let Some(post) = serializer.mapping(r"Acme\Domain\Post") {
//!     println!("self link: {}", post.self_url());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Known limitations
//!
//! Materialization is not idempotent. A resolved URL is not a route
//! identifier; feeding already materialized mappings back through a
//! materializer fails with [`links::LinkError::UndefinedRoute`].
//! [`links::JsonApiSerializer::new`] takes the transformer by value so the
//! same transformer cannot be resolved twice by accident.

pub mod cli;
pub mod config;
pub mod links;
pub mod logging;
pub mod mapping;
pub mod router;
pub mod spec;
mod validator;

pub use links::{BaseUrl, JsonApiSerializer, LinkError, LinkMaterializer};
pub use mapping::{Mapping, ResourceTransformer};
pub use router::{RouteResolver, Router};
pub use spec::{load_spec, load_spec_from_spec, RouteMeta};
