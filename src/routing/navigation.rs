//! Per-request navigation helpers derived from the routing policy.
//!
//! A [`Navigation`] is bound to the locale resolved for the current request
//! and its logical pathname. Handlers receive it as an extractor.

use std::sync::Arc;

use axum::response::Redirect;

use crate::i18n::Locale;
use crate::routing::RoutingPolicy;

/// Link builder, redirect function and path accessor for one request.
#[derive(Debug, Clone)]
pub struct Navigation {
    policy: Arc<RoutingPolicy>,
    locale: Locale,
    pathname: String,
}

impl Navigation {
    pub fn new(policy: Arc<RoutingPolicy>, locale: Locale, pathname: impl Into<String>) -> Self {
        Self {
            policy,
            locale,
            pathname: pathname.into(),
        }
    }

    /// Locale resolved for the request.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn policy(&self) -> &RoutingPolicy {
        &self.policy
    }

    /// Current logical path, locale prefix stripped.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Visible URL for `path`, in `locale` or the request's locale.
    pub fn href(&self, path: &str, locale: Option<&Locale>) -> String {
        self.policy.localize(path, locale.unwrap_or(&self.locale))
    }

    /// Temporary (307) redirect to `path`, in `locale` or the request's locale.
    pub fn redirect(&self, path: &str, locale: Option<&Locale>) -> Redirect {
        let target = self.href(path, locale);
        tracing::debug!(from = %self.pathname, to = %target, locale = %self.locale, "Page redirect");
        Redirect::temporary(&target)
    }

    /// `(locale, href)` for the current page in every enabled locale.
    pub fn alternates(&self) -> Vec<(Locale, String)> {
        self.policy
            .registry()
            .enabled()
            .iter()
            .map(|locale| (locale.clone(), self.href(&self.pathname, Some(locale))))
            .collect()
    }

    /// Programmatic navigation handle.
    pub fn router(&self) -> Navigator<'_> {
        Navigator { nav: self }
    }
}

/// Programmatic navigation, expressed as redirect responses.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    nav: &'a Navigation,
}

impl Navigator<'_> {
    /// Navigate to `path` as a new history entry (303 See Other).
    pub fn push(&self, path: &str) -> Redirect {
        Redirect::to(&self.nav.href(path, None))
    }

    /// Navigate to `path` replacing the current request (307).
    pub fn replace(&self, path: &str) -> Redirect {
        self.nav.redirect(path, None)
    }

    /// Show the current page in another locale (307).
    pub fn switch_locale(&self, locale: &Locale) -> Redirect {
        self.nav.redirect(self.nav.pathname(), Some(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;
    use axum::http::{header::LOCATION, StatusCode};
    use axum::response::IntoResponse;

    fn navigation(code: &str, pathname: &str) -> Navigation {
        let registry = Arc::new(LocaleRegistry::builtin());
        let locale = registry.resolve(code).unwrap();
        Navigation::new(Arc::new(RoutingPolicy::new(registry)), locale, pathname)
    }

    fn location(redirect: Redirect) -> (StatusCode, String) {
        let response = redirect.into_response();
        let location = response.headers()[LOCATION].to_str().unwrap().to_string();
        (response.status(), location)
    }

    #[test]
    fn test_href_uses_request_locale() {
        assert_eq!(navigation("sl", "/").href("/team", None), "/sl/team");
        assert_eq!(navigation("en", "/").href("/team", None), "/team");
    }

    #[test]
    fn test_href_with_explicit_locale() {
        let nav = navigation("sl", "/");
        let en = LocaleRegistry::builtin().resolve("en").unwrap();
        assert_eq!(nav.href("/team", Some(&en)), "/team");
    }

    #[test]
    fn test_redirect_is_temporary() {
        let (status, target) = location(navigation("sl", "/team").redirect("/team/dashboard", None));
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(target, "/sl/team/dashboard");
    }

    #[test]
    fn test_alternates_cover_enabled_locales() {
        let alternates = navigation("sl", "/team/dashboard").alternates();
        let pairs: Vec<_> = alternates
            .iter()
            .map(|(locale, href)| (locale.code(), href.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("en", "/team/dashboard"), ("sl", "/sl/team/dashboard")]
        );
    }

    #[test]
    fn test_router_push_and_switch() {
        let nav = navigation("en", "/team/dashboard");

        let (status, target) = location(nav.router().push("/"));
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(target, "/");

        let sl = LocaleRegistry::builtin().resolve("sl").unwrap();
        let (status, target) = location(nav.router().switch_locale(&sl));
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(target, "/sl/team/dashboard");
    }

    #[test]
    fn test_router_replace() {
        let (_, target) = location(navigation("sl", "/").router().replace("/team"));
        assert_eq!(target, "/sl/team");
    }
}
