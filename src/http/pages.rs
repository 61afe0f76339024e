//! Localized page handlers.
//!
//! Pages are rendered server-side from the string tables in
//! [`crate::i18n`]. All copy is escaped on output.

use std::fmt::Write;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};

use crate::http::middleware::RequestLocale;
use crate::http::server::AppState;
use crate::i18n::{Locale, SiteStrings};
use crate::routing::{Navigation, RoutingPolicy};

/// `GET /`: send visitors to the default locale's home page.
pub async fn root_dispatcher(State(state): State<AppState>) -> Redirect {
    let target = format!("/{}", state.policy.default_locale().code());
    Redirect::temporary(&target)
}

/// `GET /{locale}`
pub async fn landing_page(nav: Navigation) -> Html<String> {
    let strings = SiteStrings::for_code(nav.locale().code());
    let mut body = String::new();

    let _ = write!(
        body,
        r##"<section class="hero"><h1>{}</h1><p>{}</p><a class="cta" href="#contact">{}</a></section>"##,
        escape(strings.hero_heading),
        escape(strings.hero_subheading),
        escape(strings.hero_cta),
    );

    let _ = write!(
        body,
        r#"<section id="services"><h2>{}</h2>"#,
        escape(strings.services_heading)
    );
    for service in strings.services {
        let _ = write!(
            body,
            r#"<article class="service"><h3>{}</h3><p>{}</p></article>"#,
            escape(service.title),
            escape(service.body),
        );
    }
    body.push_str("</section>");

    let _ = write!(
        body,
        r#"<section id="pricing"><h2>{}</h2>"#,
        escape(strings.pricing_heading)
    );
    for bundle in strings.bundles {
        let _ = write!(
            body,
            r#"<article class="bundle"><h3>{}</h3><p class="price">{}</p><p>{}</p><ul>"#,
            escape(bundle.name),
            escape(bundle.price),
            escape(bundle.summary),
        );
        for feature in bundle.features {
            let _ = write!(body, "<li>{}</li>", escape(feature));
        }
        body.push_str("</ul></article>");
    }
    body.push_str("</section>");

    let _ = write!(
        body,
        concat!(
            r#"<section id="contact"><h2>{heading}</h2>"#,
            r#"<form method="post" data-endpoint="/api/contact">"#,
            r#"<label>{name}<input name="name" required></label>"#,
            r#"<label>{email}<input name="email" type="email" required></label>"#,
            r#"<label>{message}<textarea name="message" required></textarea></label>"#,
            r#"<button type="submit">{submit}</button>"#,
            "</form></section>"
        ),
        heading = escape(strings.contact_heading),
        name = escape(strings.contact_name),
        email = escape(strings.contact_email),
        message = escape(strings.contact_message),
        submit = escape(strings.contact_submit),
    );

    Html(document(&nav, strings, &body))
}

/// `GET /{locale}/team`: the team page lives on the dashboard.
pub async fn team_redirect(nav: Navigation) -> Redirect {
    nav.redirect("/team/dashboard", None)
}

/// `GET /{locale}/team/dashboard`
pub async fn team_dashboard(nav: Navigation) -> Html<String> {
    let strings = SiteStrings::for_code(nav.locale().code());
    let body = format!(
        r#"<section class="team"><h1>{}</h1><p>{}</p></section>"#,
        escape(strings.team_heading),
        escape(strings.team_body),
    );
    Html(document(&nav, strings, &body))
}

/// Fallback for unmatched paths. Rendered in the request locale when the
/// locale middleware attached one, otherwise in the default locale.
pub async fn not_found(State(state): State<AppState>, request: Request) -> impl IntoResponse {
    let policy = state.policy.clone();
    let locale = request
        .extensions()
        .get::<RequestLocale>()
        .map(|RequestLocale(locale)| locale.clone())
        .unwrap_or_else(|| policy.default_locale().clone());
    let pathname = policy.strip_prefix(request.uri().path());

    tracing::debug!(path = %request.uri().path(), locale = %locale, "No page matched");

    let strings = SiteStrings::for_code(locale.code());
    let nav = Navigation::new(policy, locale, pathname);
    let body = format!(
        r#"<section class="not-found"><h1>{}</h1><p>{}</p><a href="{}">{}</a></section>"#,
        escape(strings.not_found_heading),
        escape(strings.not_found_body),
        escape(&nav.href("/", None)),
        escape(strings.nav_home),
    );

    (StatusCode::NOT_FOUND, Html(document(&nav, strings, &body)))
}

/// Wrap a page body in the shared layout: head, navigation, locale switcher.
fn document(nav: &Navigation, strings: &SiteStrings, body: &str) -> String {
    let locale = nav.locale();
    let mut html = String::with_capacity(body.len() + 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html><html lang="{}"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title>"#,
        escape(locale.code()),
        escape(strings.site_title),
    );
    for (alternate, href) in nav.alternates() {
        let _ = write!(
            html,
            r#"<link rel="alternate" hreflang="{}" href="{}">"#,
            escape(alternate.code()),
            escape(&href),
        );
    }
    html.push_str("</head><body>");

    let _ = write!(
        html,
        r#"<header><a class="brand" href="{home}">{title}</a><nav><a href="{home}">{nav_home}</a><a href="{team}">{nav_team}</a></nav>"#,
        home = escape(&nav.href("/", None)),
        title = escape(strings.site_title),
        nav_home = escape(strings.nav_home),
        team = escape(&nav.href("/team", None)),
        nav_team = escape(strings.nav_team),
    );
    locale_switcher(&mut html, nav, strings);
    html.push_str("</header><main>");
    html.push_str(body);
    html.push_str("</main></body></html>");
    html
}

fn locale_switcher(html: &mut String, nav: &Navigation, strings: &SiteStrings) {
    let _ = write!(
        html,
        r#"<ul class="locale-switcher" aria-label="{}">"#,
        escape(strings.language_label)
    );
    for (alternate, href) in nav.alternates() {
        let current = if &alternate == nav.locale() {
            r#" aria-current="true""#
        } else {
            ""
        };
        let _ = write!(
            html,
            r#"<li><a href="{}" hreflang="{}"{}>{}</a></li>"#,
            escape(&href),
            escape(alternate.code()),
            current,
            escape(&native_name(nav.policy(), &alternate)),
        );
    }
    html.push_str("</ul>");
}

fn native_name(policy: &RoutingPolicy, locale: &Locale) -> String {
    policy
        .registry()
        .entry(locale.code())
        .map(|entry| entry.native_name.clone())
        .unwrap_or_else(|| locale.code().to_string())
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
