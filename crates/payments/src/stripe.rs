//! Stripe Checkout client
//!
//! POSTs form-encoded session parameters to `{api_base}/v1/checkout/sessions`
//! with the secret key as a bearer token.

use serde::Deserialize;

use crate::{CheckoutSession, CheckoutSessionRequest, PaymentConfig, PaymentError, PaymentService};

pub struct StripeClient {
    http: reqwest::Client,
    sessions_url: String,
    secret_key: String,
}

#[derive(Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl StripeClient {
    pub fn new(config: PaymentConfig) -> Result<Self, PaymentError> {
        let secret_key = config.secret_key.ok_or_else(|| {
            PaymentError::Configuration(
                "STRIPE_SECRET_KEY is required for Stripe provider".to_string(),
            )
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            sessions_url: format!(
                "{}/v1/checkout/sessions",
                config.api_base.trim_end_matches('/')
            ),
            secret_key,
        })
    }
}

/// Flatten a session request into Stripe's bracketed form encoding
pub fn form_params(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    let mut push = |key: &str, value: String| params.push((key.to_string(), value));

    push("mode", "payment".to_string());
    push("payment_method_types[0]", "card".to_string());

    let item = &request.line_item;
    let price = "line_items[0][price_data]";
    push(&format!("{price}[currency]"), item.currency.clone());
    push(&format!("{price}[unit_amount]"), item.unit_amount.to_string());
    push(&format!("{price}[product_data][name]"), item.name.clone());
    if !item.description.is_empty() {
        push(
            &format!("{price}[product_data][description]"),
            item.description.clone(),
        );
    }
    for (i, image) in item.images.iter().enumerate() {
        push(&format!("{price}[product_data][images][{i}]"), image.clone());
    }
    for (key, value) in &item.product_metadata {
        push(
            &format!("{price}[product_data][metadata][{key}]"),
            value.clone(),
        );
    }
    push("line_items[0][quantity]", item.quantity.to_string());

    push("success_url", request.success_url.clone());
    push("cancel_url", request.cancel_url.clone());
    for (key, value) in &request.metadata {
        push(&format!("metadata[{key}]"), value.clone());
    }

    if let Some(email) = &request.customer_email {
        push("customer_email", email.clone());
    }

    if let Some(shipping) = &request.shipping {
        for (i, country) in shipping.allowed_countries.iter().enumerate() {
            push(
                &format!("shipping_address_collection[allowed_countries][{i}]"),
                country.clone(),
            );
        }
        let rate = "shipping_options[0][shipping_rate_data]";
        push(&format!("{rate}[type]"), "fixed_amount".to_string());
        push(
            &format!("{rate}[fixed_amount][amount]"),
            shipping.rate.amount.to_string(),
        );
        push(
            &format!("{rate}[fixed_amount][currency]"),
            shipping.rate.currency.clone(),
        );
        push(
            &format!("{rate}[display_name]"),
            shipping.rate.display_name.clone(),
        );
        push(
            &format!("{rate}[delivery_estimate][minimum][unit]"),
            "business_day".to_string(),
        );
        push(
            &format!("{rate}[delivery_estimate][minimum][value]"),
            shipping.rate.min_business_days.to_string(),
        );
        push(
            &format!("{rate}[delivery_estimate][maximum][unit]"),
            "business_day".to_string(),
        );
        push(
            &format!("{rate}[delivery_estimate][maximum][value]"),
            shipping.rate.max_business_days.to_string(),
        );
    }

    if request.billing_address_required {
        push("billing_address_collection", "required".to_string());
    }
    if let Some(message) = &request.submit_message {
        push("custom_text[submit][message]", message.clone());
    }

    params
}

#[async_trait::async_trait]
impl PaymentService for StripeClient {
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let response = self
            .http
            .post(&self.sessions_url)
            .bearer_auth(&self.secret_key)
            .form(&form_params(&request))
            .send()
            .await
            .map_err(|e| PaymentError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Response(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("Stripe API returned {}: {}", status, body));
            return Err(PaymentError::Provider(message));
        }

        let session: SessionResponse = serde_json::from_str(&body)
            .map_err(|e| PaymentError::Response(e.to_string()))?;
        let url = session.url.ok_or_else(|| {
            PaymentError::Response("Checkout session has no redirect URL".to_string())
        })?;

        tracing::debug!(session_id = %session.id, "Checkout session created");
        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }
}
