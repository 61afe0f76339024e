//! Locale middleware.
//! Runs before page routing and injects or normalizes the locale segment.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{
        header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue, StatusCode, Uri,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::i18n::Locale;
use crate::observability::metrics;
use crate::routing::{LocaleHints, Navigation, RouteDecision, RouteRequest};

/// One year.
const PREFERENCE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Locale resolved by the middleware, attached to the request.
#[derive(Clone, Debug)]
pub struct RequestLocale(pub Locale);

pub async fn locale_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = {
        let headers = request.headers();
        let route = RouteRequest {
            path: request.uri().path(),
            query: request.uri().query(),
            hints: LocaleHints {
                cookie: header_str(headers, COOKIE.as_str()),
                accept_language: header_str(headers, ACCEPT_LANGUAGE.as_str()),
                country: header_str(headers, state.resolver.country_header()),
            },
        };
        state.resolver.decide(&route)
    };

    metrics::record_locale_decision(decision.outcome(), decision.locale().map(Locale::code));
    tracing::debug!(
        request_id = %request_id(request.headers()),
        path = %request.uri().path(),
        decision = %decision,
        "Locale decision"
    );

    match decision {
        RouteDecision::Skip => next.run(request).await,
        RouteDecision::PassThrough { locale, remember } => {
            request.extensions_mut().insert(RequestLocale(locale.clone()));
            let mut response = next.run(request).await;
            if remember {
                remember_locale(&mut response, state.resolver.cookie_name(), &locale);
            }
            response
        }
        RouteDecision::Rewrite { uri, locale, .. } => {
            match uri.parse::<Uri>() {
                Ok(uri) => *request.uri_mut() = uri,
                Err(e) => {
                    // Serve the original path in the detected locale.
                    tracing::warn!(uri = %uri, error = %e, "Rewrite target is not a valid URI");
                }
            }
            request.extensions_mut().insert(RequestLocale(locale));
            next.run(request).await
        }
        RouteDecision::Redirect { location, .. } => Redirect::temporary(&location).into_response(),
    }
}

/// Record `locale` as the visitor's preference.
fn remember_locale(response: &mut Response, cookie_name: &str, locale: &Locale) {
    let cookie = format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        cookie_name,
        locale.code(),
        PREFERENCE_MAX_AGE_SECS
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(cookie_name, error = %e, "Locale cookie is not a valid header value"),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

impl FromRequestParts<AppState> for Navigation {
    type Rejection = StatusCode;

    /// Locale comes from the middleware when it ran, otherwise from the
    /// path's own prefix. A path with neither is not a page.
    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let policy = state.resolver.policy();
        let (prefix, pathname) = policy.split(parts.uri.path());
        let locale = match parts.extensions.get::<RequestLocale>() {
            Some(RequestLocale(locale)) => locale.clone(),
            None => prefix.ok_or(StatusCode::NOT_FOUND)?,
        };
        Ok(Navigation::new(policy.clone(), locale, pathname))
    }
}
