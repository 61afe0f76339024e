//! "As-needed" locale prefix policy.
//!
//! # Responsibilities
//! - Add the locale segment to a logical path (link building)
//! - Strip the locale segment from a visible path (path access)
//!
//! # Design Decisions
//! - The default locale never carries a prefix; every other enabled locale
//!   always does
//! - Only enabled locales are recognised as prefixes; a disabled or unknown
//!   first segment is part of the logical path
//! - Query strings are not handled here; callers carry them separately

use std::sync::Arc;

use crate::i18n::{Locale, LocaleRegistry};

/// Maps logical paths to visible paths and back.
#[derive(Debug, Clone)]
pub struct RoutingPolicy {
    registry: Arc<LocaleRegistry>,
}

impl RoutingPolicy {
    pub fn new(registry: Arc<LocaleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn default_locale(&self) -> &Locale {
        self.registry.default_locale()
    }

    /// Visible path for `path` in `locale`.
    ///
    /// ```text
    /// localize("/team", en) == "/team"
    /// localize("/team", sl) == "/sl/team"
    /// localize("/",     sl) == "/sl"
    /// ```
    pub fn localize(&self, path: &str, locale: &Locale) -> String {
        let path = normalize(path);
        if self.registry.is_default(locale) {
            return path;
        }
        if path == "/" {
            format!("/{}", locale.code())
        } else {
            format!("/{}{}", locale.code(), path)
        }
    }

    /// Path with the leading segment forced to `locale`, default included.
    ///
    /// Used for internal rewrites where the page router needs an explicit
    /// segment.
    pub fn prefixed(&self, path: &str, locale: &Locale) -> String {
        let path = normalize(path);
        if path == "/" {
            format!("/{}", locale.code())
        } else {
            format!("/{}{}", locale.code(), path)
        }
    }

    /// Split a visible path into its locale prefix (if any) and logical path.
    ///
    /// ```text
    /// split("/sl/team") == (Some(sl), "/team")
    /// split("/sl")      == (Some(sl), "/")
    /// split("/hr/team") == (None,     "/hr/team")   // hr is disabled
    /// ```
    pub fn split(&self, path: &str) -> (Option<Locale>, String) {
        let path = normalize(path);
        let rest = &path[1..];
        let (first, tail) = match rest.split_once('/') {
            Some((first, tail)) => (first, tail),
            None => (rest, ""),
        };

        match self.registry.resolve(first) {
            Some(locale) => (Some(locale), format!("/{}", tail)),
            None => (None, path),
        }
    }

    /// Logical path with any locale prefix removed.
    pub fn strip_prefix(&self, path: &str) -> String {
        self.split(path).1
    }
}

fn normalize(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn policy() -> RoutingPolicy {
        RoutingPolicy::new(Arc::new(LocaleRegistry::builtin()))
    }

    fn locale(code: &str) -> Locale {
        LocaleRegistry::builtin().resolve(code).unwrap()
    }

    #[test]
    fn test_default_locale_has_no_prefix() {
        assert_eq!(policy().localize("/team", &locale("en")), "/team");
        assert_eq!(policy().localize("/", &locale("en")), "/");
    }

    #[test]
    fn test_non_default_locale_is_prefixed() {
        assert_eq!(policy().localize("/team", &locale("sl")), "/sl/team");
        assert_eq!(policy().localize("/", &locale("sl")), "/sl");
    }

    #[test]
    fn test_localize_normalizes_relative_path() {
        assert_eq!(policy().localize("team", &locale("sl")), "/sl/team");
        assert_eq!(policy().localize("", &locale("sl")), "/sl");
    }

    #[test]
    fn test_prefixed_includes_default() {
        assert_eq!(policy().prefixed("/team", &locale("en")), "/en/team");
        assert_eq!(policy().prefixed("/", &locale("en")), "/en");
    }

    #[test]
    fn test_split_recognises_enabled_prefix() {
        let (found, path) = policy().split("/sl/team/dashboard");
        assert_eq!(found.unwrap().code(), "sl");
        assert_eq!(path, "/team/dashboard");

        let (found, path) = policy().split("/en");
        assert_eq!(found.unwrap().code(), "en");
        assert_eq!(path, "/");

        let (found, path) = policy().split("/sl/");
        assert_eq!(found.unwrap().code(), "sl");
        assert_eq!(path, "/");
    }

    #[test]
    fn test_split_ignores_disabled_and_unknown_segments() {
        assert_eq!(policy().split("/hr/team"), (None, "/hr/team".to_string()));
        assert_eq!(policy().split("/slx/team"), (None, "/slx/team".to_string()));
        assert_eq!(policy().split("/"), (None, "/".to_string()));
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(policy().strip_prefix("/sl/team"), "/team");
        assert_eq!(policy().strip_prefix("/team"), "/team");
    }

    fn logical_path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9_-]{1,8}", 0..4).prop_filter_map(
            "first segment must not be a locale code",
            |segments| {
                let registry = LocaleRegistry::builtin();
                match segments.first() {
                    Some(first) if registry.entry(first).is_some() => None,
                    _ => Some(format!("/{}", segments.join("/"))),
                }
            },
        )
    }

    proptest! {
        #[test]
        fn prop_localize_then_strip_returns_path(path in logical_path(), code in prop::sample::select(vec!["en", "sl"])) {
            let policy = policy();
            let locale = locale(code);
            let visible = policy.localize(&path, &locale);
            let (found, logical) = policy.split(&visible);

            prop_assert_eq!(&logical, &path);
            if code == "en" {
                prop_assert!(found.is_none());
            } else {
                prop_assert_eq!(found, Some(locale));
            }
        }
    }
}
