//! # CLI Module
//!
//! Command-line access to the route table and to link materialization, for
//! checking mapping files against an OpenAPI spec before deploying them.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! List the named routes an OpenAPI spec defines:
//!
//! ```bash
//! jsonapi-links routes --spec openapi.yaml
//! ```
//!
//! ### `materialize`
//!
//! Resolve every route identifier in a mapping file (or directory of mapping
//! files) and print the resulting mappings:
//!
//! ```bash
//! jsonapi-links materialize \
//!     --spec openapi.yaml \
//!     --mappings config/mappings \
//!     --base-url https://api.example.com \
//!     --format json
//! ```
//!
//! Options:
//! - `--base-url <URL>` - Prefix for every link (default: `JSONAPI_LINKS_BASE_URL`)
//! - `--host <URL>` - Router host used when no base URL is given
//!   (default: `JSONAPI_LINKS_ROUTER_HOST`)
//! - `--format <yaml|json>` - Output format (default: yaml)
//!
//! Undefined routes make the command fail, naming the route.

mod commands;


pub use commands::{run, run_cli, run_with_env, Cli, Commands, OutputFormat};
