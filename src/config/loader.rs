//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `listener.bind_address`.
pub const ENV_BIND_ADDRESS: &str = "SITE_BIND_ADDRESS";
/// Environment variable overriding `contact.webhook_url`.
pub const ENV_WEBHOOK_URL: &str = "SITE_CONTACT_WEBHOOK_URL";
/// Environment variable overriding `telemetry.dsn`.
pub const ENV_SENTRY_DSN: &str = "SENTRY_DSN";
/// Environment variable overriding `telemetry.environment`.
pub const ENV_ENVIRONMENT: &str = "SITE_ENVIRONMENT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{var} is not a valid URL: {source}")]
    Env {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = read_file(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Read and parse a TOML file without validating it.
fn read_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Parse a TOML document without validating it.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load the configuration the binary runs with.
///
/// Reads `path` when given (defaults otherwise), applies environment
/// overrides, then validates the result.
pub fn load(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_file(path)?,
        None => SiteConfig::default(),
    };

    apply_overrides(&mut config, |var| std::env::var(var).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply overrides from a variable lookup. Empty values are ignored.
pub fn apply_overrides<F>(config: &mut SiteConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

    if let Some(addr) = get(ENV_BIND_ADDRESS) {
        config.listener.bind_address = addr;
    }

    if let Some(raw) = get(ENV_WEBHOOK_URL) {
        let url = Url::parse(raw.trim()).map_err(|source| ConfigError::Env {
            var: ENV_WEBHOOK_URL,
            source,
        })?;
        config.contact.webhook_url = Some(url);
    }

    if let Some(dsn) = get(ENV_SENTRY_DSN) {
        config.telemetry.dsn = Some(dsn);
    }

    if let Some(environment) = get(ENV_ENVIRONMENT) {
        config.telemetry.environment = environment;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.locales.default, "en");
        assert_eq!(config.routing.cookie_name, "site_locale");
        assert!(config.contact.webhook_url.is_none());
    }

    #[test]
    fn test_parse_error() {
        let result = parse_config("[listener\nbind_address = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = SiteConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[
                (ENV_BIND_ADDRESS, "127.0.0.1:4000"),
                (ENV_WEBHOOK_URL, "https://hooks.example.com/contact"),
                (ENV_ENVIRONMENT, "production"),
            ]),
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:4000");
        assert_eq!(
            config.contact.webhook_url.unwrap().as_str(),
            "https://hooks.example.com/contact"
        );
        assert_eq!(config.telemetry.environment, "production");
        assert!(config.telemetry.dsn.is_none());
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut config = SiteConfig::default();
        apply_overrides(&mut config, lookup(&[(ENV_WEBHOOK_URL, "  ")])).unwrap();
        assert!(config.contact.webhook_url.is_none());
    }

    #[test]
    fn test_invalid_webhook_override() {
        let mut config = SiteConfig::default();
        let err = apply_overrides(&mut config, lookup(&[(ENV_WEBHOOK_URL, "not a url")]))
            .unwrap_err();
        assert!(err.to_string().starts_with(ENV_WEBHOOK_URL));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let missing = Path::new("/nonexistent/site.toml");
        for result in [load(Some(missing)), load_config(missing)] {
            match result {
                Err(ConfigError::Io { path, .. }) => assert_eq!(path, missing),
                other => panic!("expected IO error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validation_error_lists_every_problem() {
        let err = ConfigError::Validation(vec![
            ValidationError::Zero("timeouts.request_secs"),
            ValidationError::EmptyCookieName,
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: timeouts.request_secs must be greater than zero, routing.cookie_name must not be empty"
        );
    }
}
