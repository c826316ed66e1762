//! Serverless function endpoints exercised through the composed router

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;

use atelier_mailing::mock::MockMailingList;
use atelier_payments::mock::MockPaymentService;
use atelier_payments::webhook::{sign, SIGNATURE_HEADER};

use common::{TestApp, SITE_URL, WEBHOOK_SECRET};

const CHECKOUT: &str = "/.netlify/functions/create-checkout-session";
const NEWSLETTER: &str = "/.netlify/functions/newsletter-signup";
const SITEMAP: &str = "/.netlify/functions/generate-sitemap";
const WEBHOOK: &str = "/.netlify/functions/stripe-webhook";

mod checkout {
    use super::*;

    #[tokio::test]
    async fn test_print_checkout_collects_shipping() {
        let app = TestApp::new();
        let (status, body) = app
            .post_json(CHECKOUT, json!({"artworkId": "a", "variant": "print8x10"}))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["url"].as_str().unwrap().starts_with("https://checkout.stripe.com/"));

        let request = app.payments.last_request().unwrap();
        assert_eq!(request.line_item.unit_amount, 4000);
        assert_eq!(
            request.line_item.images,
            vec![format!("{}/images/a-og.jpg", SITE_URL)]
        );
        assert_eq!(request.cancel_url, format!("{}/shop.html", SITE_URL));
        assert_eq!(request.metadata.get("artworkId").map(String::as_str), Some("a"));
        let shipping = request.shipping.unwrap();
        assert_eq!(shipping.allowed_countries.len(), 19);
        assert_eq!(shipping.rate.amount, 1000);
    }

    #[tokio::test]
    async fn test_digital_checkout_skips_shipping() {
        let app = TestApp::new();
        let (status, _) = app
            .post_json(CHECKOUT, json!({"artworkId": "b", "variant": "digital"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(app.payments.last_request().unwrap().shipping.is_none());
    }

    #[tokio::test]
    async fn test_unavailable_artwork_is_rejected_before_provider() {
        let app = TestApp::new();
        let (status, body) = app
            .post_json(CHECKOUT, json!({"artworkId": "d", "variant": "digital"}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Artwork is not available for purchase"}));
        assert_eq!(app.payments.request_count(), 0);
    }

    #[tokio::test]
    async fn test_error_precedence() {
        let app = TestApp::new();
        let cases = [
            (json!({"variant": "digital"}), StatusCode::BAD_REQUEST, "Missing artworkId or variant"),
            (json!({"artworkId": "zz", "variant": "digital"}), StatusCode::NOT_FOUND, "Artwork not found"),
            // Unavailable wins over an unpriced variant
            (json!({"artworkId": "d", "variant": "print24x36"}), StatusCode::BAD_REQUEST, "Artwork is not available for purchase"),
            (json!({"artworkId": "c", "variant": "digital"}), StatusCode::BAD_REQUEST, "Invalid variant or price not set"),
        ];
        for (body, expected_status, expected_error) in cases {
            let (status, json) = app.post_json(CHECKOUT, body).await;
            assert_eq!(status, expected_status);
            assert_eq!(json["error"], expected_error);
        }
        assert_eq!(app.payments.request_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_reports_details() {
        let app = TestApp::with_providers(
            MockPaymentService::failing("Your card was declined"),
            MockMailingList::new(),
        );
        let (status, body) = app
            .post_json(CHECKOUT, json!({"artworkId": "a", "variant": "digital"}))
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "Failed to create checkout session", "details": "Your card was declined"})
        );
    }
}

mod newsletter {
    use super::*;

    #[tokio::test]
    async fn test_signup_and_duplicate() {
        let app = TestApp::new();
        let body = json!({"email": "Fan@Example.com", "firstName": "Ada", "source": "footer"});

        let (status, json) = app.post_json(NEWSLETTER, body.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({"success": true, "message": "Successfully subscribed to newsletter!"})
        );
        assert!(app.mailing.is_subscribed("fan@example.com"));

        let (status, json) = app.post_json(NEWSLETTER, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "This email is already subscribed!");
    }

    #[tokio::test]
    async fn test_invalid_email_never_reaches_provider() {
        let app = TestApp::new();
        let (status, json) = app.post_json(NEWSLETTER, json!({"email": "a@b"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Valid email address required");
        assert!(app.mailing.subscribers().is_empty());
    }
}

mod sitemap {
    use super::*;

    #[tokio::test]
    async fn test_sitemap_lists_available_artworks() {
        let app = TestApp::new();
        let request = Request::builder().uri(SITEMAP).body(Body::empty()).unwrap();
        let (status, bytes) = app.send(request).await;
        assert_eq!(status, StatusCode::OK);

        let xml = String::from_utf8(bytes).unwrap();
        assert_eq!(xml.matches("<url>").count(), 8 + 3);
        assert!(xml.contains(&format!("<loc>{}/artwork/a</loc>", SITE_URL)));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
        assert!(!xml.contains("/artwork/d<"));
    }
}

mod webhook {
    use super::*;

    fn completed_event() -> Vec<u8> {
        serde_json::to_vec(&json!({
            "id": "evt_1",
            "type": "checkout.session.completed",
            "data": {"object": {
                "id": "cs_1",
                "amount_total": 4000,
                "customer_details": {"email": "buyer@example.com", "name": "Ada"},
                "metadata": {"artworkId": "a", "variant": "print8x10", "artworkTitle": "Alpha"}
            }}
        }))
        .unwrap()
    }

    async fn deliver(app: &TestApp, body: Vec<u8>, signature: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(WEBHOOK)
            .header(header::CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(Body::from(body))
            .unwrap();
        let (status, bytes) = app.send(request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_signed_delivery_is_acknowledged() {
        let app = TestApp::new();
        let body = completed_event();
        let signature = sign(&body, WEBHOOK_SECRET, chrono::Utc::now().timestamp()).unwrap();
        let (status, json) = deliver(&app, body, &signature).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"received": true}));
    }

    #[tokio::test]
    async fn test_tampered_body_is_rejected() {
        let app = TestApp::new();
        let body = completed_event();
        let signature = sign(&body, WEBHOOK_SECRET, chrono::Utc::now().timestamp()).unwrap();
        let mut tampered = body.clone();
        tampered.extend_from_slice(b" ");

        let (status, json) = deliver(&app, tampered, &signature).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().starts_with("Webhook Error: "));
    }

    #[tokio::test]
    async fn test_stale_signature_is_rejected() {
        let app = TestApp::new();
        let body = completed_event();
        let stale = chrono::Utc::now().timestamp() - 301;
        let signature = sign(&body, WEBHOOK_SECRET, stale).unwrap();
        let (status, _) = deliver(&app, body, &signature).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let (status, bytes) = app
        .send(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"OK");
}
