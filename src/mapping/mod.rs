//! # Mapping Module
//!
//! Per-type presentation rules for JSON:API documents and the
//! [`ResourceTransformer`] that owns them.
//!
//! Mappings are usually read from YAML files:
//!
//! ```yaml
//! mapping:
//!   class: Acme\Domain\Post
//!   alias: Message
//!   id_properties: [postId]
//!   urls:
//!     self: get_post            # self_url
//!     resource: get_post        # resource_url_pattern, defaults to `self`
//!     comments: list_comments   # other_urls
//!   relationships:
//!     author:
//!       self: get_post_author   # relationship_self_url[author][self]
//!       related: get_user
//! ```
//!
//! Link values are route identifiers until they are materialized by
//! [`LinkMaterializer`](crate::links::LinkMaterializer).

mod error;
mod load;
mod transformer;
mod types;

pub use error::MappingError;
pub use load::{load_mapping_file, load_mappings, parse_mapping};
pub use transformer::ResourceTransformer;
pub use types::Mapping;
