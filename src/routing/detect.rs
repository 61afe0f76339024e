//! Locale detection for requests whose path carries no locale.
//!
//! Sources are consulted in the configured order; the first one naming an
//! enabled locale wins and the default locale is the fallback. Malformed
//! input from any source is skipped, never an error.

use crate::config::{DetectionSource, RoutingConfig};
use crate::i18n::{Locale, LocaleRegistry};

/// Raw request inputs the detector reads. All borrowed from the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleHints<'a> {
    /// Full `Cookie` header value.
    pub cookie: Option<&'a str>,
    /// `Accept-Language` header value.
    pub accept_language: Option<&'a str>,
    /// Country code from the geo header.
    pub country: Option<&'a str>,
}

/// Outcome of detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub locale: Locale,
    /// `None` when the default locale was used as fallback.
    pub source: Option<DetectionSource>,
}

/// Applies the configured detection order.
#[derive(Debug, Clone)]
pub struct LocaleDetector {
    order: Vec<DetectionSource>,
    cookie_name: String,
}

impl LocaleDetector {
    pub fn new(order: Vec<DetectionSource>, cookie_name: impl Into<String>) -> Self {
        Self {
            order,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(config.detection_order.clone(), config.cookie_name.as_str())
    }

    pub fn order(&self) -> &[DetectionSource] {
        &self.order
    }

    /// Name of the locale preference cookie.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Raw locale code stored in the preference cookie, if any.
    pub fn stored_preference<'a>(&self, hints: &LocaleHints<'a>) -> Option<&'a str> {
        hints
            .cookie
            .and_then(|header| cookie_value(header, &self.cookie_name))
            .map(str::trim)
    }

    pub fn detect(&self, registry: &LocaleRegistry, hints: &LocaleHints<'_>) -> Detection {
        for source in &self.order {
            let found = match source {
                DetectionSource::Cookie => self
                    .stored_preference(hints)
                    .and_then(|value| registry.resolve(value)),
                DetectionSource::AcceptLanguage => hints
                    .accept_language
                    .and_then(|header| negotiate(registry, header)),
                DetectionSource::Geo => hints
                    .country
                    .and_then(|country| registry.country_locale(country)),
            };

            if let Some(locale) = found {
                return Detection {
                    locale,
                    source: Some(*source),
                };
            }
        }

        Detection {
            locale: registry.default_locale().clone(),
            source: None,
        }
    }
}

/// Value of cookie `name` in a `Cookie` header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim_matches('"'))
}

/// Language ranges of an `Accept-Language` header, highest quality first.
///
/// Ranges with `q=0` or an unparsable quality are dropped. Ties keep header
/// order.
pub fn parse_accept_language(header: &str) -> Vec<(&str, f32)> {
    let mut ranges: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut components = part.trim().split(';');
            let tag = components.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let mut quality = 1.0;
            for param in components {
                if let Some(value) = param.trim().strip_prefix("q=") {
                    quality = value.trim().parse::<f32>().ok()?;
                }
            }
            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranges
}

/// First enabled locale matching the visitor's ranges.
///
/// Tags compare case-insensitively; `sl-SI` falls back to its primary subtag.
pub fn negotiate(registry: &LocaleRegistry, header: &str) -> Option<Locale> {
    parse_accept_language(header).into_iter().find_map(|(tag, _)| {
        let tag = tag.to_ascii_lowercase();
        registry.resolve(&tag).or_else(|| {
            let primary = tag.split(['-', '_']).next()?;
            registry.resolve(primary)
        })
    })
}
