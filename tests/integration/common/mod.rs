//! Common test utilities and fixtures for integration tests
//!
//! Builds the composed application over a fixture catalog with mock
//! payment and mailing providers, and offers request helpers.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use atelier_app::{create_app, AppServices};
use atelier_catalog::{Catalog, SiteConfig};
use atelier_common::config::Config;
use atelier_mailing::mock::MockMailingList;
use atelier_payments::mock::MockPaymentService;

pub const SITE_URL: &str = "https://jolene.example";
pub const WEBHOOK_SECRET: &str = "whsec_integration";

/// Scenario catalog: A(featured, cat x), B(cat y, tags [x]), C(featured, cat z),
/// plus a sold-out piece
pub fn artworks_json() -> serde_json::Value {
    serde_json::json!({
        "artworks": [
            {"id": "a", "slug": "a", "title": "Alpha", "category": "x", "featured": true,
             "available": true, "dateCreated": "2024-05-01",
             "images": {"thumbnail": "/images/a-thumb.jpg", "full": "/images/a.jpg", "og": "/images/a-og.jpg"},
             "seo": {"altText": "Alpha collage"},
             "pricing": {"digital": 25, "print8x10": 40}},
            {"id": "b", "slug": "b", "title": "Beta", "category": "y", "tags": ["x"],
             "available": true,
             "images": {"thumbnail": "/images/b-thumb.jpg", "full": "/images/b.jpg"},
             "pricing": {"digital": 30}},
            {"id": "c", "slug": "c", "title": "Gamma", "category": "z", "featured": true,
             "available": true,
             "images": {"thumbnail": "/images/c-thumb.jpg", "full": "/images/c.jpg"},
             "pricing": {"print16x20": 80}},
            {"id": "d", "slug": "d", "title": "Delta", "category": "z", "available": false,
             "pricing": {"digital": 20}}
        ],
        "categories": {"x": {"name": "Album Art"}}
    })
}

pub fn catalog() -> Catalog {
    serde_json::from_value(artworks_json()).expect("fixture catalog parses")
}

pub fn test_config() -> Config {
    Config {
        site_url: SITE_URL.to_string(),
        content_dir: PathBuf::from("content"),
        cors_allowed_origins: "*".to_string(),
        rust_log: "info".to_string(),
        port: 0,
    }
}

/// The composed application plus handles on its mock providers
pub struct TestApp {
    pub router: Router,
    pub payments: MockPaymentService,
    pub mailing: MockMailingList,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_providers(MockPaymentService::new(), MockMailingList::new())
    }

    pub fn with_providers(payments: MockPaymentService, mailing: MockMailingList) -> Self {
        let services = AppServices {
            catalog: Arc::new(catalog()),
            site: Arc::new(SiteConfig::default()),
            payments: Arc::new(payments.clone()),
            mailing: Arc::new(mailing.clone()),
            webhook_secret: Some(WEBHOOK_SECRET.to_string()),
        };
        Self {
            router: create_app(&test_config(), services),
            payments,
            mailing,
        }
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        let (status, bytes) = self.send(request).await;
        (status, serde_json::from_slice(&bytes).expect("JSON response"))
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, bytes.to_vec())
    }
}

/// Serve the composed application on an ephemeral local port
pub async fn spawn_server(app: &TestApp) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let router = app.router.clone();
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{}", addr)
}
