//! Scheme and authority prefix for materialized links.

use http::header::HOST;
use http::request::Parts;
use std::fmt;
use std::str::FromStr;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Base URL error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrlError {
    /// The input is not a URL, or carries a path, query or fragment
    Invalid {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },
    /// Only `http` and `https` are accepted
    UnsupportedScheme {
        /// The rejected scheme
        scheme: String,
    },
    /// The request has neither an absolute URI nor a `Host` header
    MissingHost,
}

impl fmt::Display for BaseUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseUrlError::Invalid { input, reason } => {
                write!(f, "Invalid base URL '{}': {}", input, reason)
            }
            BaseUrlError::UnsupportedScheme { scheme } => {
                write!(
                    f,
                    "Unsupported base URL scheme '{}'. Expected http or https.",
                    scheme
                )
            }
            BaseUrlError::MissingHost => {
                write!(f, "Cannot derive a base URL: the request has no host.")
            }
        }
    }
}

impl std::error::Error for BaseUrlError {}

/// Validated `scheme://authority` without trailing slash
/// (e.g. `https://api.example.com:8443`).
///
/// Default ports are dropped, so `http://host:80` and `http://host` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn parse(input: &str) -> Result<Self, BaseUrlError> {
        let url = url::Url::parse(input.trim()).map_err(|e| BaseUrlError::Invalid {
            input: input.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(BaseUrlError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }
        if url.host_str().is_none() {
            return Err(BaseUrlError::MissingHost);
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(BaseUrlError::Invalid {
                input: input.to_string(),
                reason: "a base URL must not carry a path, query or fragment".to_string(),
            });
        }

        Ok(Self(url.origin().ascii_serialization()))
    }

    /// Build from a scheme (`https`) and an authority (`api.example.com:8443`).
    pub fn from_parts(scheme: &str, authority: &str) -> Result<Self, BaseUrlError> {
        if authority.trim().is_empty() {
            return Err(BaseUrlError::MissingHost);
        }
        Self::parse(&format!("{}://{}", scheme.trim(), authority.trim()))
    }

    /// Derive the base URL of an inbound request.
    ///
    /// The scheme comes from an absolute request URI, then the first
    /// `X-Forwarded-Proto` value, then defaults to `http`. The authority comes
    /// from the request URI, then the `Host` header.
    pub fn from_request(parts: &Parts) -> Result<Self, BaseUrlError> {
        let scheme = parts
            .uri
            .scheme_str()
            .map(str::to_string)
            .or_else(|| {
                parts
                    .headers
                    .get(FORWARDED_PROTO)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.split(',').next())
                    .map(|v| v.trim().to_ascii_lowercase())
                    .filter(|v| !v.is_empty())
            })
            .unwrap_or_else(|| "http".to_string());

        let authority = parts
            .uri
            .authority()
            .map(|a| a.as_str().to_string())
            .or_else(|| {
                parts
                    .headers
                    .get(HOST)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .ok_or(BaseUrlError::MissingHost)?;

        Self::from_parts(&scheme, &authority)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix `path` with this base URL, inserting a `/` when needed.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = BaseUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
