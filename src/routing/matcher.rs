//! Path matching for the locale middleware's interception filter.
//!
//! # Responsibilities
//! - Match internal path prefixes (segment-aware)
//! - Match exact crawler files (sitemap, robots)
//! - Match anything that looks like a static asset (contains a dot)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - No regex; every check is a linear scan of the path
//! - A path is intercepted only when no exclusion matches

use crate::config::RoutingConfig;

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a path prefix on segment boundaries.
///
/// `/api` matches `/api` and `/api/contact` but not `/apiary`.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher. A trailing slash is ignored.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim_end_matches('/');
        Self {
            prefix: if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() },
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        if self.prefix == "/" {
            return true;
        }
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Matches one exact path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Matches paths that look like files (`/favicon.ico`, `/img/logo.svg`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAssetMatcher;

impl Matcher for StaticAssetMatcher {
    fn matches(&self, path: &str) -> bool {
        path.contains('.')
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        // Any matcher may pass (OR)
        self.matchers.iter().any(|m| m.matches(path))
    }
}

/// Decides which paths the locale middleware handles.
#[derive(Debug)]
pub struct InterceptFilter {
    exclusions: AnyMatcher,
}

impl InterceptFilter {
    /// Compile the exclusion list from configuration.
    pub fn from_config(config: &RoutingConfig) -> Self {
        let mut matchers: Vec<Box<dyn Matcher>> = vec![Box::new(StaticAssetMatcher)];
        for prefix in &config.excluded_prefixes {
            matchers.push(Box::new(PathPrefixMatcher::new(prefix.as_str())));
        }
        for file in &config.excluded_files {
            matchers.push(Box::new(ExactPathMatcher::new(file.as_str())));
        }
        Self {
            exclusions: AnyMatcher::new(matchers),
        }
    }

    /// Returns true if the middleware should consider this path.
    pub fn intercepts(&self, path: &str) -> bool {
        !self.exclusions.matches(path)
    }
}
