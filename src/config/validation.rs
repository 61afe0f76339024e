//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the locale table invariants (one enabled default, known mappings)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::{DetectionSource, SiteConfig};
use crate::i18n::{LocaleRegistry, RegistryError};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("locales: {0}")]
    Locales(#[from] RegistryError),

    #[error("routing.detection_order lists `{0}` more than once")]
    DuplicateDetectionSource(DetectionSource),

    #[error("routing.cookie_name must not be empty")]
    EmptyCookieName,

    #[error("routing.country_header `{0}` is not a valid header name")]
    CountryHeader(String),

    #[error("routing.excluded_prefixes entry `{0}` must start with '/'")]
    ExcludedPrefix(String),

    #[error("routing.excluded_files entry `{0}` must start with '/'")]
    ExcludedFile(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("contact.webhook_url `{0}` must use http or https")]
    WebhookScheme(String),

    #[error("telemetry.dsn is invalid: {0}")]
    Dsn(String),

    #[error("telemetry.sample_rate {0} is outside 0.0..=1.0")]
    SampleRate(f32),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Err(e) = LocaleRegistry::from_config(&config.locales) {
        errors.push(ValidationError::Locales(e));
    }

    let mut sources = HashSet::new();
    for source in &config.routing.detection_order {
        if !sources.insert(*source) {
            errors.push(ValidationError::DuplicateDetectionSource(*source));
        }
    }

    if config.routing.cookie_name.trim().is_empty() {
        errors.push(ValidationError::EmptyCookieName);
    }

    if HeaderName::from_bytes(config.routing.country_header.as_bytes()).is_err() {
        errors.push(ValidationError::CountryHeader(
            config.routing.country_header.clone(),
        ));
    }

    for prefix in &config.routing.excluded_prefixes {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::ExcludedPrefix(prefix.clone()));
        }
    }

    for file in &config.routing.excluded_files {
        if !file.starts_with('/') {
            errors.push(ValidationError::ExcludedFile(file.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }

    if config.contact.timeout_secs == 0 {
        errors.push(ValidationError::Zero("contact.timeout_secs"));
    }

    if let Some(url) = &config.contact.webhook_url {
        if !matches!(url.scheme(), "http" | "https") {
            errors.push(ValidationError::WebhookScheme(url.to_string()));
        }
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero("security.max_body_size"));
    }

    if let Some(dsn) = &config.telemetry.dsn {
        if let Err(e) = dsn.parse::<sentry::types::Dsn>() {
            errors.push(ValidationError::Dsn(e.to_string()));
        }
    }

    if !(0.0..=1.0).contains(&config.telemetry.sample_rate) {
        errors.push(ValidationError::SampleRate(config.telemetry.sample_rate));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
