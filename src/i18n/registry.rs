//! Locale registry: single source of truth for the site's locales.
//!
//! Built once from [`LocalesConfig`] at startup and shared read-only through
//! an `Arc`. Disabled entries stay in the table (so their metadata and country
//! mappings remain declared) but are never resolved.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::config::LocalesConfig;
use crate::i18n::Locale;

/// Metadata for a declared locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// URL segment (e.g., "en", "sl").
    pub code: String,

    /// English name (e.g., "Slovenian").
    pub name: String,

    /// Name in the locale's own language (e.g., "Slovenščina").
    pub native_name: String,

    /// Whether the locale is served.
    pub enabled: bool,
}

/// Reasons a locale table is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no locales declared")]
    Empty,

    #[error("locale code `{0}` must be lowercase ASCII letters, digits or '-'")]
    InvalidCode(String),

    #[error("locale `{0}` is declared more than once")]
    Duplicate(String),

    #[error("default locale `{0}` is not declared")]
    UnknownDefault(String),

    #[error("default locale `{0}` is disabled")]
    DisabledDefault(String),

    #[error("country code `{0}` must be two ASCII letters")]
    InvalidCountry(String),

    #[error("country `{0}` is declared more than once (country codes ignore case)")]
    DuplicateCountry(String),

    #[error("country `{country}` maps to undeclared locale `{locale}`")]
    UnknownCountryTarget { country: String, locale: String },
}

/// The immutable locale table.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    entries: Vec<LocaleEntry>,
    enabled: Vec<Locale>,
    default: Locale,
    countries: HashMap<String, String>,
}

impl LocaleRegistry {
    /// Build and check a registry from configuration.
    ///
    /// Enforces: at least one entry, well-formed unique codes, a declared and
    /// enabled default, and country mappings that only point at declared
    /// codes. A mapping may point at a disabled locale; it then yields no
    /// override at lookup time.
    pub fn from_config(config: &LocalesConfig) -> Result<Self, RegistryError> {
        if config.entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &config.entries {
            if !is_valid_code(&entry.code) {
                return Err(RegistryError::InvalidCode(entry.code.clone()));
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(RegistryError::Duplicate(entry.code.clone()));
            }
        }

        let default_entry = config
            .entries
            .iter()
            .find(|entry| entry.code == config.default)
            .ok_or_else(|| RegistryError::UnknownDefault(config.default.clone()))?;
        if !default_entry.enabled {
            return Err(RegistryError::DisabledDefault(config.default.clone()));
        }

        let mut countries = HashMap::with_capacity(config.countries.len());
        for (country, code) in &config.countries {
            if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(RegistryError::InvalidCountry(country.clone()));
            }
            if !seen.contains(code.as_str()) {
                return Err(RegistryError::UnknownCountryTarget {
                    country: country.clone(),
                    locale: code.clone(),
                });
            }
            if countries
                .insert(country.to_ascii_uppercase(), code.clone())
                .is_some()
            {
                return Err(RegistryError::DuplicateCountry(country.clone()));
            }
        }

        let entries: Vec<LocaleEntry> = config
            .entries
            .iter()
            .map(|entry| LocaleEntry {
                code: entry.code.clone(),
                name: entry.name.clone(),
                native_name: entry.native_name.clone(),
                enabled: entry.enabled,
            })
            .collect();

        let enabled = entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| Locale::new(&entry.code))
            .collect();

        Ok(Self {
            entries,
            enabled,
            default: Locale::new(&config.default),
            countries,
        })
    }

    /// The registry described by [`LocalesConfig::default`].
    pub fn builtin() -> Self {
        Self::from_config(&LocalesConfig::default()).expect("built-in locale table is valid")
    }

    /// The locale served without a URL prefix.
    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    /// Whether `locale` is the default locale.
    pub fn is_default(&self, locale: &Locale) -> bool {
        *locale == self.default
    }

    /// Enabled locales in declaration order.
    pub fn enabled(&self) -> &[Locale] {
        &self.enabled
    }

    /// All declared entries, including disabled ones.
    pub fn entries(&self) -> &[LocaleEntry] {
        &self.entries
    }

    /// Entry metadata by exact code.
    pub fn entry(&self, code: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Resolve a code to an enabled locale (exact, case-sensitive match).
    pub fn resolve(&self, code: &str) -> Option<Locale> {
        self.enabled.iter().find(|locale| *locale == code).cloned()
    }

    /// Check if a code is declared and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.resolve(code).is_some()
    }

    /// Locale override for a visitor's country.
    ///
    /// Unknown countries and mappings onto disabled locales yield `None`.
    pub fn country_locale(&self, country: &str) -> Option<Locale> {
        let code = self.countries.get(&country.trim().to_ascii_uppercase())?;
        self.resolve(code)
    }
}

fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocaleEntryConfig;

    fn config_with(entries: Vec<LocaleEntryConfig>, default: &str) -> LocalesConfig {
        LocalesConfig {
            default: default.to_string(),
            entries,
            countries: Default::default(),
        }
    }

    #[test]
    fn test_builtin_default_is_english() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.default_locale().code(), "en");
        assert!(registry.is_default(&registry.resolve("en").unwrap()));
    }

    #[test]
    fn test_builtin_enabled_set_excludes_disabled() {
        let registry = LocaleRegistry::builtin();
        let codes: Vec<_> = registry.enabled().iter().map(Locale::code).collect();
        assert_eq!(codes, vec!["en", "sl"]);
        assert_eq!(registry.entries().len(), 3);
    }

    #[test]
    fn test_resolve_is_exact() {
        let registry = LocaleRegistry::builtin();
        assert!(registry.resolve("sl").is_some());
        assert!(registry.resolve("SL").is_none());
        assert!(registry.resolve("sl-SI").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_disabled_locale_is_not_resolved() {
        let registry = LocaleRegistry::builtin();
        assert!(registry.resolve("hr").is_none());
        assert!(!registry.is_enabled("hr"));
        let entry = registry.entry("hr").expect("hr stays declared");
        assert!(!entry.enabled);
        assert_eq!(entry.native_name, "Hrvatski");
    }

    #[test]
    fn test_country_lookup() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.country_locale("SI").unwrap().code(), "sl");
        assert_eq!(registry.country_locale("si").unwrap().code(), "sl");
    }

    #[test]
    fn test_country_lookup_without_mapping_is_none() {
        let registry = LocaleRegistry::builtin();
        assert!(registry.country_locale("US").is_none());
        assert!(registry.country_locale("").is_none());
    }

    #[test]
    fn test_country_mapped_to_disabled_locale_is_none() {
        let registry = LocaleRegistry::builtin();
        assert!(registry.country_locale("HR").is_none());
    }

    #[test]
    fn test_rejects_empty_table() {
        let config = config_with(vec![], "en");
        assert_eq!(
            LocaleRegistry::from_config(&config).unwrap_err(),
            RegistryError::Empty
        );
    }

    #[test]
    fn test_rejects_duplicate_code() {
        let config = config_with(
            vec![
                LocaleEntryConfig::new("en", "English", "English", true),
                LocaleEntryConfig::new("en", "English", "English", false),
            ],
            "en",
        );
        assert_eq!(
            LocaleRegistry::from_config(&config).unwrap_err(),
            RegistryError::Duplicate("en".to_string())
        );
    }

    #[test]
    fn test_rejects_malformed_code() {
        let config = config_with(
            vec![LocaleEntryConfig::new("en/us", "English", "English", true)],
            "en/us",
        );
        assert!(matches!(
            LocaleRegistry::from_config(&config),
            Err(RegistryError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_rejects_undeclared_default() {
        let config = config_with(
            vec![LocaleEntryConfig::new("en", "English", "English", true)],
            "de",
        );
        assert_eq!(
            LocaleRegistry::from_config(&config).unwrap_err(),
            RegistryError::UnknownDefault("de".to_string())
        );
    }

    #[test]
    fn test_rejects_disabled_default() {
        let config = config_with(
            vec![
                LocaleEntryConfig::new("en", "English", "English", false),
                LocaleEntryConfig::new("sl", "Slovenian", "Slovenščina", true),
            ],
            "en",
        );
        assert_eq!(
            LocaleRegistry::from_config(&config).unwrap_err(),
            RegistryError::DisabledDefault("en".to_string())
        );
    }

    #[test]
    fn test_rejects_country_onto_undeclared_locale() {
        let mut config = LocalesConfig::default();
        config.countries.insert("DE".to_string(), "de".to_string());
        assert_eq!(
            LocaleRegistry::from_config(&config).unwrap_err(),
            RegistryError::UnknownCountryTarget {
                country: "DE".to_string(),
                locale: "de".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_malformed_country() {
        let mut config = LocalesConfig::default();
        config.countries.insert("SVN".to_string(), "sl".to_string());
        assert_eq!(
            LocaleRegistry::from_config(&config).unwrap_err(),
            RegistryError::InvalidCountry("SVN".to_string())
        );
    }

    #[test]
    fn test_rejects_country_differing_only_in_case() {
        let mut config = LocalesConfig::default();
        config.countries.insert("si".to_string(), "en".to_string());
        assert_eq!(
            LocaleRegistry::from_config(&config).unwrap_err(),
            RegistryError::DuplicateCountry("si".to_string())
        );
    }
}
