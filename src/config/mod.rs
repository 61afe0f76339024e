//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! site.toml (optional)
//!     → loader.rs (parse & deserialize, environment overrides)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults so an empty file (or no file) is a working site
//! - Validation separates syntactic (serde) from semantic checks
//! - Secrets (webhook URL, Sentry DSN) may come from the environment

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{
    AssetsConfig, ContactConfig, DetectionSource, ListenerConfig, LocaleEntryConfig,
    LocalesConfig, LogFormat, ObservabilityConfig, RoutingConfig, SecurityConfig, SiteConfig,
    TelemetryConfig, TimeoutConfig,
};
