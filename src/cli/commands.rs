use crate::config::LinkConfig;
use crate::links::{BaseUrl, JsonApiSerializer};
use crate::logging;
use crate::mapping::ResourceTransformer;
use crate::router::Router;
use crate::spec::load_spec;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for jsonapi-links
#[derive(Parser)]
#[command(name = "jsonapi-links")]
#[command(about = "Resolve JSON:API mapping links against an OpenAPI route table", long_about = None)]
pub struct Cli {
    /// Log level: trace/debug/info/warn/error
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for materialized mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the named routes defined by an OpenAPI spec
    Routes {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,
    },
    /// Resolve the route identifiers in mapping files into link templates
    Materialize {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Mapping file, or directory of *.yml / *.yaml mapping files
        #[arg(short, long)]
        mappings: PathBuf,

        /// Scheme and host prepended to every link (e.g. https://api.example.com)
        #[arg(long)]
        base_url: Option<String>,

        /// Router host used for absolute URLs when no base URL is given
        #[arg(long)]
        host: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
}

fn load_router(spec: &Path, host: Option<BaseUrl>) -> anyhow::Result<Router> {
    let routes = load_spec(spec)?;
    let router = Router::new(routes);
    Ok(match host {
        Some(host) => router.with_host(host.as_str()),
        None => router,
    })
}

fn parse_base_url(flag: Option<&str>, fallback: Option<BaseUrl>) -> anyhow::Result<Option<BaseUrl>> {
    match flag {
        Some(value) => BaseUrl::parse(value)
            .map(Some)
            .with_context(|| format!("invalid URL '{value}'")),
        None => Ok(fallback),
    }
}

/// Execute a parsed command, writing results to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    run_with_env(cli, out, |key| env::var(key).ok())
}

/// Execute a parsed command, reading configuration variables through `env`.
///
/// Only `materialize` reads the link configuration.
pub fn run_with_env(
    cli: &Cli,
    out: &mut dyn Write,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Routes { spec } => {
            let router = load_router(spec, None)?;
            for name in router.route_names() {
                if let Some(route) = router.get(name) {
                    writeln!(out, "{name} -> {} {}", route.method, route.full_path())?;
                }
            }
            Ok(())
        }
        Commands::Materialize {
            spec,
            mappings,
            base_url,
            host,
            format,
        } => {
            let config =
                LinkConfig::from_lookup(env).context("invalid link configuration in environment")?;
            let host = parse_base_url(host.as_deref(), config.router_host)?;
            let base_url = parse_base_url(base_url.as_deref(), config.base_url)?;
            let router = load_router(spec, host)?;
            let transformer = ResourceTransformer::load(mappings)?;

            let serializer = JsonApiSerializer::new(transformer, &router, base_url)?;
            let resolved = serializer.into_transformer().into_mappings();
            info!(mappings_count = resolved.len(), "Mappings materialized");

            match format {
                OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(&resolved)?)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&resolved)?)?,
            }
            Ok(())
        }
    }
}

/// Parse process arguments, initialize logging and run the command against stdout.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
