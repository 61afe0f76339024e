//! Per-request locale decision made by the edge middleware.
//!
//! # State machine
//! ```text
//! Unresolved
//!     → excluded path                    → Skip
//!     → enabled locale prefix            → PassThrough(prefix, remember unless the cookie holds it)
//!     → no / disabled / unknown prefix   → detect
//!         → non-default                  → Redirect(/<locale><path>)
//!         → default, path "/"            → PassThrough(default)   (root dispatcher redirects)
//!         → default, other path          → Rewrite(/<default><path>)
//! ```
//!
//! # Design Decisions
//! - Pure function of the request inputs; the only state carried between
//!   requests is the preference cookie, written when a prefix is visited
//! - Query strings survive redirects and rewrites unchanged
//! - A disabled locale segment is just another path segment

use std::fmt;
use std::sync::Arc;

use crate::config::{DetectionSource, RoutingConfig};
use crate::i18n::Locale;
use crate::routing::detect::{LocaleDetector, LocaleHints};
use crate::routing::matcher::InterceptFilter;
use crate::routing::RoutingPolicy;

/// Inputs for one decision.
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub hints: LocaleHints<'a>,
}

impl<'a> RouteRequest<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            query: None,
            hints: LocaleHints::default(),
        }
    }
}

/// What the middleware does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Path is excluded; forward untouched, no locale attached.
    Skip,
    /// Forward as-is with `locale` attached. `remember` asks for the
    /// preference cookie to be set to `locale` on the response.
    PassThrough { locale: Locale, remember: bool },
    /// Forward with the URI replaced by `uri`; the client never sees it.
    Rewrite {
        uri: String,
        locale: Locale,
        source: Option<DetectionSource>,
    },
    /// Answer with a 307 to `location`.
    Redirect {
        location: String,
        locale: Locale,
        source: Option<DetectionSource>,
    },
}

impl RouteDecision {
    /// Metric/log label.
    pub fn outcome(&self) -> &'static str {
        match self {
            RouteDecision::Skip => "skip",
            RouteDecision::PassThrough { .. } => "pass_through",
            RouteDecision::Rewrite { .. } => "rewrite",
            RouteDecision::Redirect { .. } => "redirect",
        }
    }

    pub fn locale(&self) -> Option<&Locale> {
        match self {
            RouteDecision::Skip => None,
            RouteDecision::PassThrough { locale, .. }
            | RouteDecision::Rewrite { locale, .. }
            | RouteDecision::Redirect { locale, .. } => Some(locale),
        }
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = |source: &Option<DetectionSource>| match source {
            Some(source) => source.to_string(),
            None => "default".to_string(),
        };
        match self {
            RouteDecision::Skip => write!(f, "skip (not intercepted)"),
            RouteDecision::PassThrough { locale, remember } => {
                write!(f, "pass-through locale={}", locale)?;
                if *remember {
                    write!(f, " (remember)")?;
                }
                Ok(())
            }
            RouteDecision::Rewrite { uri, locale, source: s } => {
                write!(f, "rewrite -> {} locale={} via={}", uri, locale, source(s))
            }
            RouteDecision::Redirect { location, locale, source: s } => {
                write!(f, "redirect 307 -> {} locale={} via={}", location, locale, source(s))
            }
        }
    }
}

/// The edge middleware's decision logic.
#[derive(Debug)]
pub struct LocaleResolver {
    policy: Arc<RoutingPolicy>,
    filter: InterceptFilter,
    detector: LocaleDetector,
    country_header: String,
}

impl LocaleResolver {
    pub fn from_config(policy: Arc<RoutingPolicy>, config: &RoutingConfig) -> Self {
        Self {
            policy,
            filter: InterceptFilter::from_config(config),
            detector: LocaleDetector::from_config(config),
            country_header: config.country_header.to_ascii_lowercase(),
        }
    }

    pub fn policy(&self) -> &Arc<RoutingPolicy> {
        &self.policy
    }

    /// Name of the locale preference cookie.
    pub fn cookie_name(&self) -> &str {
        self.detector.cookie_name()
    }

    /// Header carrying the visitor's country code.
    pub fn country_header(&self) -> &str {
        &self.country_header
    }

    pub fn decide(&self, request: &RouteRequest<'_>) -> RouteDecision {
        if !self.filter.intercepts(request.path) {
            return RouteDecision::Skip;
        }

        // An explicit prefix is the visitor's choice. Remembering it keeps
        // later unprefixed default-locale links in the same locale.
        if let (Some(locale), _) = self.policy.split(request.path) {
            let remember = self.detector.stored_preference(&request.hints) != Some(locale.code());
            return RouteDecision::PassThrough { locale, remember };
        }

        let registry = self.policy.registry();
        let detection = self.detector.detect(registry, &request.hints);
        let locale = detection.locale;

        if !registry.is_default(&locale) {
            let location = with_query(self.policy.localize(request.path, &locale), request.query);
            return RouteDecision::Redirect {
                location,
                locale,
                source: detection.source,
            };
        }

        if request.path == "/" || request.path.is_empty() {
            return RouteDecision::PassThrough {
                locale,
                remember: false,
            };
        }

        let uri = with_query(self.policy.prefixed(request.path, &locale), request.query);
        RouteDecision::Rewrite {
            uri,
            locale,
            source: detection.source,
        }
    }
}

fn with_query(path: String, query: Option<&str>) -> String {
    match query {
        Some(query) if !query.is_empty() => format!("{}?{}", path, query),
        _ => path,
    }
}
