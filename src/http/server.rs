//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the shared application state from configuration
//! - Create the Axum router with page and API handlers
//! - Wire up middleware (locale routing, timeouts, limits, request ID, tracing)
//! - Bind server to listener and drain on shutdown
//!
//! # Layering
//! ```text
//! request id → trace → propagate id          (outer router)
//!     → locale middleware (may redirect or rewrite the URI)
//!         → security headers → timeout → page/API routes
//! ```
//! The locale middleware wraps the page router as a service rather than
//! being added with `Router::layer`, so a rewritten URI is routed afresh.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::Request,
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{Layer, ServiceBuilder};
use tower_http::{
    limit::RequestBodyLimitLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::http::contact::{submit_contact, CONTACT_ROUTE};
use crate::http::middleware::locale_middleware;
use crate::http::pages::{landing_page, not_found, root_dispatcher, team_dashboard, team_redirect};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::i18n::{LocaleRegistry, RegistryError};
use crate::lifecycle::signals::shutdown_signal;
use crate::relay::{ContactRelay, RelayError};
use crate::routing::{LocaleResolver, RoutingPolicy};
use crate::security::headers::security_header_layers;

/// Errors building the server from a validated configuration.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("locale table rejected: {0}")]
    Registry(#[from] RegistryError),

    #[error("contact relay unavailable: {0}")]
    Relay(#[from] RelayError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub policy: Arc<RoutingPolicy>,
    pub resolver: Arc<LocaleResolver>,
    pub relay: Option<Arc<ContactRelay>>,
}

impl AppState {
    pub fn from_config(config: SiteConfig) -> Result<Self, ServerError> {
        let registry = Arc::new(LocaleRegistry::from_config(&config.locales)?);
        let policy = Arc::new(RoutingPolicy::new(registry));
        let resolver = Arc::new(LocaleResolver::from_config(policy.clone(), &config.routing));
        let relay = ContactRelay::from_config(&config.contact)?.map(Arc::new);

        if relay.is_none() {
            tracing::warn!("No contact webhook configured; submissions will fail");
        }

        Ok(Self {
            config: Arc::new(config),
            policy,
            resolver,
            relay,
        })
    }
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: Arc<SiteConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Result<Self, ServerError> {
        let state = AppState::from_config(config)?;
        let config = state.config.clone();
        Ok(Self {
            router: build_app(state),
            config,
        })
    }

    /// The assembled router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal or trigger arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            default_locale = %self.config.locales.default,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Assemble the full application router.
#[allow(deprecated)]
pub fn build_app(state: AppState) -> Router {
    let config = state.config.clone();

    // Only enabled locales get page routes; anything else falls through to
    // static files or the 404 page.
    let mut pages = Router::new().route("/", get(root_dispatcher));
    for locale in state.policy.registry().enabled() {
        let base = format!("/{}", locale.code());
        pages = pages
            .route(&base, get(landing_page))
            .route(&format!("{}/team", base), get(team_redirect))
            .route(&format!("{}/team/dashboard", base), get(team_dashboard));
    }

    let api = Router::new().route("/api/health", get(health_check)).route(
        CONTACT_ROUTE,
        post(submit_contact).layer(RequestBodyLimitLayer::new(config.security.max_body_size)),
    );

    let routes = pages.merge(api);
    let routes = match &config.assets.static_dir {
        Some(dir) => routes.fallback_service(
            ServeDir::new(dir).not_found_service(not_found.with_state(state.clone())),
        ),
        None => routes.fallback(not_found),
    };

    let mut inner = routes
        .with_state(state.clone())
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));
    if config.security.enable_headers {
        for layer in security_header_layers() {
            inner = inner.layer(layer);
        }
    }

    let localized = middleware::from_fn_with_state(state, locale_middleware).layer(inner);

    Router::new().fallback_service(localized).layer(
        ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(propagate_request_id_layer()),
    )
}

/// `GET /api/health`
async fn health_check() -> &'static str {
    "OK"
}
