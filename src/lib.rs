//! Localized marketing site: locale routing, pages and contact relay.

pub mod config;
pub mod http;
pub mod i18n;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod routing;
pub mod security;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
