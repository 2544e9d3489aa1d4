//! # Spec Module
//!
//! Loads the route table from an OpenAPI 3.x document. Each operation becomes a
//! [`RouteMeta`] whose `handler_name` is the route identifier mappings refer to
//! and whose `path_pattern` is the template links are generated from.

mod build;
mod load;
mod types;

pub use build::*;
pub use load::*;
pub use types::*;
