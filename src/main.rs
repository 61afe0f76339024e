//! Localized marketing site server.
//!
//! ```text
//! landing-site [--config site.toml] serve          run the HTTP server (default)
//! landing-site [--config site.toml] check-config   validate and print the effective config
//! landing-site [--config site.toml] resolve PATH   show the locale decision for a request
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use landing_site::config::{self, SiteConfig};
use landing_site::i18n::LocaleRegistry;
use landing_site::observability::{logging, metrics, telemetry};
use landing_site::routing::{LocaleHints, LocaleResolver, RouteRequest, RoutingPolicy};
use landing_site::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "landing-site")]
#[command(about = "Localized marketing site with locale-aware routing", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "SITE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,
    /// Validate the configuration and print it
    CheckConfig,
    /// Print the locale decision for a request path
    Resolve {
        /// Request path, optionally with a query string
        path: String,
        /// Country code as sent by the CDN
        #[arg(long)]
        country: Option<String>,
        /// Value of the locale preference cookie
        #[arg(long)]
        cookie: Option<String>,
        /// Raw Accept-Language header
        #[arg(long)]
        accept_language: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = config::loader::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::CheckConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Commands::Resolve {
            path,
            country,
            cookie,
            accept_language,
        } => resolve(&config, &path, country, cookie, accept_language),
    }
}

async fn serve(config: SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(&config.observability)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "landing-site starting");

    let telemetry = telemetry::init(&config.telemetry)?;

    if config.observability.metrics_enabled {
        // Checked by validation when metrics are enabled.
        metrics::init_metrics(config.observability.metrics_address.parse()?);
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        default_locale = %config.locales.default,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    telemetry.shutdown(Duration::from_secs(2));
    tracing::info!("Shutdown complete");
    Ok(())
}

fn resolve(
    config: &SiteConfig,
    target: &str,
    country: Option<String>,
    cookie: Option<String>,
    accept_language: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(LocaleRegistry::from_config(&config.locales)?);
    let policy = Arc::new(RoutingPolicy::new(registry));
    let resolver = LocaleResolver::from_config(policy, &config.routing);

    let cookie_header = cookie.map(|value| format!("{}={}", config.routing.cookie_name, value));
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };

    let request = RouteRequest {
        path,
        query,
        hints: LocaleHints {
            cookie: cookie_header.as_deref(),
            accept_language: accept_language.as_deref(),
            country: country.as_deref(),
        },
    };

    println!("{}", resolver.decide(&request));
    Ok(())
}
