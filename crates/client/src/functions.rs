//! Calls to the site's serverless functions

use serde::{Deserialize, Serialize};

use atelier_newsletter::{SignupRequest, SignupResponse, SubmitFailure};
use atelier_site::{FeedResponse, InstagramFeed, FEED_PATH};

use crate::ClientError;

pub const CHECKOUT_PATH: &str = "/.netlify/functions/create-checkout-session";
pub const NEWSLETTER_PATH: &str = "/.netlify/functions/newsletter-signup";

const CHECKOUT_FALLBACK: &str = "Failed to create checkout session";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutBody<'a> {
    artwork_id: &'a str,
    variant: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRedirect {
    pub session_id: String,
    pub url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base_url: String,
}

impl SiteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POST a JSON body, decoding `T` on success and the `error` field otherwise
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.error);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| ClientError::Response(e.to_string()))
    }

    pub async fn create_checkout_session(
        &self,
        artwork_id: &str,
        variant: &str,
    ) -> Result<CheckoutRedirect, ClientError> {
        let redirect: CheckoutRedirect = self
            .post(CHECKOUT_PATH, &CheckoutBody { artwork_id, variant })
            .await?;
        tracing::debug!(session_id = %redirect.session_id, "Redirecting to checkout");
        Ok(redirect)
    }

    /// Checkout outcome in the shape the checkout modal consumes:
    /// the redirect URL, or the message to show
    pub async fn checkout(&self, artwork_id: &str, variant: &str) -> Result<String, String> {
        match self.create_checkout_session(artwork_id, variant).await {
            Ok(redirect) => Ok(redirect.url),
            Err(ClientError::Status { message, .. }) => {
                Err(message.unwrap_or_else(|| CHECKOUT_FALLBACK.to_string()))
            }
            Err(other) => Err(other.to_string()),
        }
    }

    pub async fn subscribe(&self, request: &SignupRequest) -> Result<SignupResponse, ClientError> {
        self.post(NEWSLETTER_PATH, request).await
    }

    /// Signup outcome in the shape the newsletter form consumes
    pub async fn newsletter_signup(
        &self,
        request: &SignupRequest,
    ) -> Result<Option<String>, SubmitFailure> {
        match self.subscribe(request).await {
            Ok(response) if response.success => {
                Ok(Some(response.message).filter(|m| !m.is_empty()))
            }
            Ok(_) => Err(SubmitFailure::Rejected(None)),
            Err(ClientError::Status { message, .. }) => Err(SubmitFailure::Rejected(message)),
            Err(ClientError::Response(_)) => Err(SubmitFailure::Rejected(None)),
            Err(ClientError::Request(_)) => Err(SubmitFailure::Network),
        }
    }

    pub async fn fetch_feed(&self) -> Result<FeedResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, FEED_PATH))
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: None,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Response(e.to_string()))
    }

    /// The feed block to render; any failure shows the follow prompt
    pub async fn instagram_feed(&self) -> InstagramFeed {
        match self.fetch_feed().await {
            Ok(feed) => InstagramFeed::from_response(Some(feed)),
            Err(e) => {
                tracing::info!(error = %e, "Instagram feed unavailable, using fallback");
                InstagramFeed::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_newsletter::NewsletterForm;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_checkout_returns_redirect_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHECKOUT_PATH))
            .and(body_json(serde_json::json!({"artworkId": "moon", "variant": "digital"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sessionId": "cs_1",
                "url": "https://checkout.stripe.com/c/pay/cs_1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SiteClient::new(server.uri());
        assert_eq!(
            client.checkout("moon", "digital").await,
            Ok("https://checkout.stripe.com/c/pay/cs_1".to_string())
        );
    }

    #[tokio::test]
    async fn test_checkout_surfaces_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                serde_json::json!({"error": "Artwork is not available for purchase"}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = SiteClient::new(server.uri());
        assert_eq!(
            client.checkout("sold", "digital").await,
            Err("Artwork is not available for purchase".to_string())
        );
    }

    #[tokio::test]
    async fn test_checkout_error_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = SiteClient::new(server.uri());
        assert_eq!(
            client.checkout("moon", "digital").await,
            Err(CHECKOUT_FALLBACK.to_string())
        );
    }

    #[tokio::test]
    async fn test_signup_round_trip_through_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(NEWSLETTER_PATH))
            .and(body_json(serde_json::json!({
                "email": "fan@example.com",
                "firstName": "",
                "source": "footer"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Successfully subscribed to newsletter!"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SiteClient::new(server.uri());
        let mut form = NewsletterForm::new(Some("footer"));
        let request = form.submit("fan@example.com", "").unwrap();
        form.complete(client.newsletter_signup(&request).await);
        assert_eq!(
            form.message().unwrap().text,
            "Successfully subscribed to newsletter!"
        );
    }

    #[tokio::test]
    async fn test_signup_rejection_keeps_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                serde_json::json!({"error": "This email is already subscribed!"}),
            ))
            .mount(&server)
            .await;

        let client = SiteClient::new(server.uri());
        let request = SignupRequest {
            email: "fan@example.com".to_string(),
            first_name: None,
            source: None,
        };
        assert_eq!(
            client.newsletter_signup(&request).await,
            Err(SubmitFailure::Rejected(Some(
                "This email is already subscribed!".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_instagram_feed_renders_posts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(FEED_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "posts": [{
                    "permalink": "https://www.instagram.com/p/abc/",
                    "media_url": "https://cdn.example.com/abc.jpg",
                    "like_count": 3400,
                    "comments_count": 12
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SiteClient::new(server.uri());
        match client.instagram_feed().await {
            InstagramFeed::Posts { tiles } => {
                assert_eq!(tiles.len(), 1);
                assert_eq!(tiles[0].likes, "3.4K");
                assert_eq!(tiles[0].comments, "12");
            }
            other => panic!("expected posts, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_feed_function_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = SiteClient::new(server.uri());
        assert_eq!(client.instagram_feed().await, InstagramFeed::fallback());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_network_failure() {
        // Nothing listens on port 9 locally
        let client = SiteClient::new("http://127.0.0.1:9");
        let request = SignupRequest {
            email: "fan@example.com".to_string(),
            first_name: None,
            source: None,
        };
        assert_eq!(
            client.newsletter_signup(&request).await,
            Err(SubmitFailure::Network)
        );
    }
}
