//! # Links Module
//!
//! Turns the route identifiers stored in [`Mapping`](crate::mapping::Mapping)
//! link fields into URL templates a serializer can fill per resource.
//!
//! ## Overview
//!
//! A mapping says "the self link of a `Post` is route `get_post`". The route
//! table says "`get_post` is `/posts/{id}`". Materialization combines the two
//! with the base URL of the current request:
//!
//! ```text
//! self_url: get_post  ──►  https://api.example.com/posts/{id}
//! ```
//!
//! Placeholders stay literal; the serializer substitutes real ids later.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jsonapi_links::links::{BaseUrl, JsonApiSerializer};
//!
//! let base_url = BaseUrl::parse("https://api.example.com")?;
//! let serializer = JsonApiSerializer::new(transformer, &router, Some(base_url))?;
//! ```
//!
//! An unknown route identifier fails construction with
//! [`LinkError::UndefinedRoute`]. Mapping files are configuration, so this is
//! meant to surface at startup or in tests, not be handled per request.

mod base_url;
mod error;
mod materializer;
mod serializer;

pub use base_url::{BaseUrl, BaseUrlError};
pub use error::LinkError;
pub use materializer::LinkMaterializer;
pub use serializer::JsonApiSerializer;
