//! Common test utilities and helpers
//!
//! Builds routers over a freshly seeded store and drives them in-process with
//! `tower::ServiceExt::oneshot`, without binding a socket.

#![cfg(feature = "ssr")]
#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use threadboard::backend::routes::create_router;
use threadboard::backend::server::{create_state, AppState};
use threadboard::shared::AppConfig;
use tower::ServiceExt;

/// State and router seeded exactly as the server binary seeds them
pub fn test_app() -> (AppState, Router) {
    test_app_with_static(Path::new("static"))
}

pub fn test_app_with_static(static_dir: &Path) -> (AppState, Router) {
    let state = create_state(&AppConfig::default());
    let router = create_router(state.clone(), static_dir);
    (state, router)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).expect("valid request");
    send(app, request).await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_string(response).await;
    serde_json::from_str(&text).expect("json body")
}

/// Assert a `302 Found` back to the index
pub fn assert_redirect_to_index(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").expect("location header"),
        "/"
    );
}
