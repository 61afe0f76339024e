//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration for the landing site.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Supported locales, the default locale and the country mapping.
    pub locales: LocalesConfig,

    /// Locale middleware settings.
    pub routing: RoutingConfig,

    /// Contact form relay settings.
    pub contact: ContactConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Error reporting settings.
    pub telemetry: TelemetryConfig,

    /// Response hardening settings.
    pub security: SecurityConfig,

    /// Static asset settings.
    pub assets: AssetsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Locale table.
///
/// Entries keep their declaration order; that order is the order of the
/// locale switcher and of `Accept-Language` tie breaks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Code of the locale served without a URL prefix.
    pub default: String,

    /// Every known locale, including disabled ones.
    pub entries: Vec<LocaleEntryConfig>,

    /// ISO 3166-1 alpha-2 country code → locale code.
    pub countries: BTreeMap<String, String>,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            default: "en".to_string(),
            entries: vec![
                LocaleEntryConfig::new("en", "English", "English", true),
                LocaleEntryConfig::new("sl", "Slovenian", "Slovenščina", true),
                // Croatian content is not ready; keep the entry so links and
                // country mappings stay declared.
                LocaleEntryConfig::new("hr", "Croatian", "Hrvatski", false),
            ],
            countries: BTreeMap::from([
                ("SI".to_string(), "sl".to_string()),
                ("HR".to_string(), "hr".to_string()),
            ]),
        }
    }
}

/// A single locale entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocaleEntryConfig {
    /// Locale code used as URL segment (e.g., "sl").
    pub code: String,

    /// English name of the locale.
    pub name: String,

    /// Name of the locale in its own language.
    pub native_name: String,

    /// Disabled locales are never matched, detected or linked.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl LocaleEntryConfig {
    pub fn new(code: &str, name: &str, native_name: &str, enabled: bool) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
            enabled,
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// A source the middleware consults when a path carries no locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionSource {
    /// Preference cookie, written by the middleware whenever a page is
    /// requested under an explicit locale prefix.
    Cookie,
    /// `Accept-Language` request header.
    AcceptLanguage,
    /// Country header set by the CDN in front of the site.
    Geo,
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectionSource::Cookie => "cookie",
            DetectionSource::AcceptLanguage => "accept-language",
            DetectionSource::Geo => "geo",
        };
        f.write_str(name)
    }
}

/// Locale middleware configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Detection precedence; the first source yielding an enabled locale wins.
    pub detection_order: Vec<DetectionSource>,

    /// Name of the locale preference cookie.
    pub cookie_name: String,

    /// Request header carrying the visitor's country code.
    pub country_header: String,

    /// Path prefixes never intercepted by the middleware.
    pub excluded_prefixes: Vec<String>,

    /// Exact paths never intercepted by the middleware.
    pub excluded_files: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            detection_order: vec![
                DetectionSource::Cookie,
                DetectionSource::AcceptLanguage,
                DetectionSource::Geo,
            ],
            cookie_name: "site_locale".to_string(),
            country_header: "cf-ipcountry".to_string(),
            excluded_prefixes: vec!["/api".to_string(), "/_internal".to_string()],
            excluded_files: vec!["/sitemap.xml".to_string(), "/robots.txt".to_string()],
        }
    }
}

/// Contact form relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Automation webhook receiving form submissions. Unset disables the relay.
    pub webhook_url: Option<Url>,

    /// Webhook request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: 10,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Pretty output for development, JSON for production.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Error reporting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Sentry DSN. Unset disables error reporting.
    pub dsn: Option<String>,

    /// Environment tag attached to every event.
    pub environment: String,

    /// Fraction of error events sent (0.0..=1.0).
    pub sample_rate: f32,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: "development".to_string(),
            sample_rate: 1.0,
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add security response headers.
    pub enable_headers: bool,
    /// Maximum contact form body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served for paths no page route matches (favicon, robots, ...).
    pub static_dir: Option<PathBuf>,
}
