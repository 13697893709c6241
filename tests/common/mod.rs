#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use time::macros::datetime;
use tower::ServiceExt;

use dounie_api::config::Config;
use dounie_api::router::create_router;
use dounie_api::services::ManualClock;
use dounie_api::state::AppState;

/// テスト毎に独立した状態を持つアプリ
pub struct TestApp {
    pub router: Router,
    pub clock: ManualClock,
}

impl TestApp {
    pub fn new() -> Self {
        let clock = ManualClock::new(datetime!(2025-06-26 17:40 UTC));
        let state = AppState::with_clock(Config::default(), Arc::new(clock.clone())).unwrap();
        Self {
            router: create_router(state),
            clock,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    /// リセットコードを発行してコード文字列を返す
    pub async fn issue_code(&self, email: &str) -> String {
        let (status, body) = self
            .post(
                "/api/admin/generate-password-reset",
                serde_json::json!({ "email": email }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["resetCode"].as_str().unwrap().to_string()
    }
}
