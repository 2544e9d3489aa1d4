//! # Router Module
//!
//! The router module owns the named route table and turns route identifiers
//! into URLs. It does not match incoming requests; it only answers two
//! questions for a named route:
//!
//! - what is its path template (`/posts/{id}`)?
//! - what URL does it produce for a given set of parameters?
//!
//! Both are exposed through the [`RouteResolver`] trait so link materialization
//! can run against any route table, not only one loaded from OpenAPI.
//!
//! ## Example
//!
//! ```rust,ignore
//! use jsonapi_links::router::{RouteResolver, Router};
//! use jsonapi_links::spec::load_spec;
//! use std::collections::BTreeMap;
//!
//! # fn main() -> anyhow::Result<()> {
//! let routes = load_spec("openapi.yaml")?;
//! let router = Router::new(routes).with_host("https://api.example.com");
//!
//! let mut params = BTreeMap::new();
//! params.insert("id".to_string(), "42".to_string());
//! let url = router.generate("get_post", &params, true)?;
//! assert_eq!(url, "https://api.example.com/posts/42");
//! # Ok(())
//! # }
//! ```

mod core;

pub use core::{path_placeholders, RouteError, RouteResolver, Router};
