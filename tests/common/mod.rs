//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{LOCATION, SET_COOKIE},
        Request, Response,
    },
    Router,
};
use landing_site::config::SiteConfig;
use landing_site::http::HttpServer;
use tower::ServiceExt;

/// Build the full application router for a configuration.
pub fn app(config: SiteConfig) -> Router {
    HttpServer::new(config).expect("valid config").router()
}

/// Send a GET with the given headers through the router.
pub async fn get(app: &Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a JSON POST through the router.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// The `Location` header, if any.
pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .map(|v| v.to_str().unwrap().to_string())
}

/// The `name=value` pair of the first `Set-Cookie` header, if any.
pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response.headers().get(SET_COOKIE).map(|v| {
        let cookie = v.to_str().unwrap();
        cookie.split(';').next().unwrap_or(cookie).trim().to_string()
    })
}

/// Consume the response body as a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
