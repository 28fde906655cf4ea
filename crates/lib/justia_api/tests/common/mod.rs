//! Shared helpers for the router integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use futures_util::stream;
use futures_util::StreamExt;
use justia_api::{AppState, config::ApiConfig};
use justia_core::assistant::Assistant;
use justia_core::data::ReferenceData;
use justia_core::provider::{ChatMessage, ChatProvider, ProviderError, TextStream};
use serde_json::Value;
use tower::ServiceExt;

pub fn data() -> Arc<ReferenceData> {
    Arc::new(ReferenceData::embedded().expect("embedded tables load"))
}

/// Router with no delays and the given provider.
pub fn app_with(provider: Option<Arc<dyn ChatProvider>>) -> Router {
    let state = AppState {
        assistant: Assistant::new(data(), provider),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            court_lookup_delay: Duration::ZERO,
            stream_char_delay: Duration::ZERO,
        },
    };
    justia_api::router(state)
}

/// Mock-only router.
pub fn app() -> Router {
    app_with(None)
}

pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl Response {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("parse JSON")
    }
}

pub async fn send(app: Router, req: Request<Body>) -> Response {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    Response {
        status,
        content_type,
        body: String::from_utf8(body.to_vec()).expect("utf-8 body"),
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

pub async fn post(app: Router, uri: &str, body: Value) -> Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// Payloads of the `data:` lines of an SSE body, in order.
pub fn sse_data(body: &str) -> Vec<String> {
    body.split("\n\n")
        .filter_map(|event| {
            event
                .lines()
                .find_map(|line| line.strip_prefix("data: ").or_else(|| line.strip_prefix("data:")))
        })
        .map(str::to_string)
        .collect()
}

/// Provider that always answers with the same deltas.
pub struct Canned(pub Vec<&'static str>);

#[async_trait]
impl ChatProvider for Canned {
    async fn complete(&self, _system: &str, _messages: &[ChatMessage]) -> Result<String, ProviderError> {
        Ok(self.0.concat())
    }

    async fn stream(&self, _system: &str, _messages: &[ChatMessage]) -> Result<TextStream, ProviderError> {
        let items: Vec<Result<String, ProviderError>> =
            self.0.iter().map(|d| Ok(d.to_string())).collect();
        Ok(stream::iter(items).boxed())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

/// Provider whose every call fails.
pub struct Down;

#[async_trait]
impl ChatProvider for Down {
    async fn complete(&self, _system: &str, _messages: &[ChatMessage]) -> Result<String, ProviderError> {
        Err(ProviderError::Status {
            status: 401,
            body: "invalid x-api-key".into(),
        })
    }

    async fn stream(&self, _system: &str, _messages: &[ChatMessage]) -> Result<TextStream, ProviderError> {
        Err(ProviderError::Transport("connection refused".into()))
    }

    fn name(&self) -> &str {
        "down"
    }
}
