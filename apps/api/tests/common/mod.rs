//! Common test utilities for API integration tests
//!
//! Builds the real router against wiremock-backed upstreams and drives it
//! with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use songbridge_api::{api_router, AssistantService, AssistantState, SearchState};
use songbridge_catalog_client::CatalogClient;
use songbridge_shared_config::{CatalogConfig, TextGenConfig};
use songbridge_test_utils::{MockCatalogServer, MockTextGenServer};
use songbridge_textgen_client::TextGenClient;
use tower::ServiceExt;

/// Application under test plus the upstreams it talks to
pub struct TestApp {
    pub router: Router,
    pub catalog: MockCatalogServer,
    pub textgen: MockTextGenServer,
}

impl TestApp {
    /// Start both mock upstreams and build the router against them
    pub async fn spawn() -> Self {
        let catalog = MockCatalogServer::start().await;
        let textgen = MockTextGenServer::start().await;

        let mut catalog_config = CatalogConfig::with_url(catalog.url());
        catalog_config.timeout_secs = 1;
        let mut textgen_config = TextGenConfig::with_url(textgen.url());
        textgen_config.timeout_secs = 1;

        let router = api_router(
            SearchState::new(CatalogClient::new(&catalog_config).unwrap()),
            AssistantState::new(AssistantService::new(
                TextGenClient::new(&textgen_config).unwrap(),
            )),
        );

        Self {
            router,
            catalog,
            textgen,
        }
    }

    /// POST a JSON value
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    /// POST a raw body with a JSON content type
    pub async fn post_raw(&self, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        send(self.router.clone(), request).await
    }

    /// GET a route
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(self.router.clone(), request).await
    }
}

/// Send a request and decode the JSON body (`Value::Null` when not JSON)
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
