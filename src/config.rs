//! # Configuration Module
//!
//! Environment variable configuration for link materialization.
//!
//! ## Environment Variables
//!
//! ### `JSONAPI_LINKS_BASE_URL`
//!
//! Scheme and host prepended to every materialized link, e.g.
//! `https://api.example.com`. Services normally derive this per request with
//! [`BaseUrl::from_request`]; the variable is for batch use and the CLI.
//!
//! ### `JSONAPI_LINKS_ROUTER_HOST`
//!
//! Host the router uses for absolute URLs when no base URL is given.
//!
//! Both are optional. Empty values are treated as unset.
//!
//! ## Usage
//!
//! ```rust
//! use jsonapi_links::config::LinkConfig;
//!
//! let config = LinkConfig::from_env().expect("valid link configuration");
//! println!("Base URL: {:?}", config.base_url);
//! ```

use crate::links::{BaseUrl, BaseUrlError};
use std::env;

pub const BASE_URL_VAR: &str = "JSONAPI_LINKS_BASE_URL";
pub const ROUTER_HOST_VAR: &str = "JSONAPI_LINKS_ROUTER_HOST";

/// Link configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkConfig {
    /// Prefix for materialized links
    pub base_url: Option<BaseUrl>,
    /// Host for absolute router URLs
    pub router_host: Option<BaseUrl>,
}

impl LinkConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, BaseUrlError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BaseUrlError> {
        let read = |key: &str| -> Result<Option<BaseUrl>, BaseUrlError> {
            match lookup(key) {
                Some(val) if !val.trim().is_empty() => BaseUrl::parse(&val).map(Some),
                _ => Ok(None),
            }
        };
        Ok(LinkConfig {
            base_url: read(BASE_URL_VAR)?,
            router_host: read(ROUTER_HOST_VAR)?,
        })
    }
}
