use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use crate::server::{router, state::AppState};

mod faq;
mod recommended_website;
mod suggestion_type;

/// Application under test together with the context owning its in-memory database.
struct TestApp {
    _context: TestContext,
    app: Router,
}

impl TestApp {
    async fn new(builder: TestBuilder) -> Self {
        let context = builder.build().await.unwrap();
        let db = context.db.clone().unwrap();
        let app = router::app(AppState::new(db), CorsLayer::permissive());

        Self {
            _context: context,
            app,
        }
    }

    /// Sends a request and returns the status with the parsed JSON body.
    ///
    /// An empty response body is returned as `Value::Null`.
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Collects the `field` names of a validation error body.
fn error_fields(body: &Value) -> Vec<&str> {
    body["fields"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .filter_map(|field| field["field"].as_str())
                .collect()
        })
        .unwrap_or_default()
}
