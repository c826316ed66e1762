//! Stripe webhook verification and event parsing
//!
//! The `stripe-signature` header has the form `t=<unix>,v1=<hex>[,v1=<hex>]`.
//! Each `v1` is an HMAC-SHA256 of `"<t>.<raw body>"` keyed with the
//! endpoint's signing secret.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use atelier_common::{constant_time_eq, hmac_sha256_hex};

pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// Maximum age of a signed payload, in seconds
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WebhookError {
    #[error("No stripe-signature header value was provided.")]
    MissingHeader,

    #[error("Unable to extract timestamp and signatures from header")]
    MalformedHeader,

    #[error("No signatures found matching the expected signature for payload")]
    SignatureMismatch,

    #[error("Timestamp outside the tolerance zone")]
    OutsideTolerance,

    #[error("Webhook signing secret is not configured")]
    NoSecret,

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

struct SignatureHeader {
    timestamp: i64,
    signatures: Vec<String>,
}

fn parse_header(header: &str) -> Result<SignatureHeader, WebhookError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.trim().split_once('=') else {
            continue;
        };
        match key {
            "t" => timestamp = value.parse::<i64>().ok(),
            "v1" => signatures.push(value.to_string()),
            _ => {}
        }
    }

    match timestamp {
        Some(timestamp) if !signatures.is_empty() => Ok(SignatureHeader {
            timestamp,
            signatures,
        }),
        _ => Err(WebhookError::MalformedHeader),
    }
}

fn expected_signature(payload: &[u8], secret: &str, timestamp: i64) -> Result<String, WebhookError> {
    let mut signed = format!("{}.", timestamp).into_bytes();
    signed.extend_from_slice(payload);
    hmac_sha256_hex(secret.as_bytes(), &signed).map_err(|_| WebhookError::NoSecret)
}

/// Build a header value for `payload`, as Stripe would send it
pub fn sign(payload: &[u8], secret: &str, timestamp: i64) -> Result<String, WebhookError> {
    Ok(format!(
        "t={},v1={}",
        timestamp,
        expected_signature(payload, secret, timestamp)?
    ))
}

/// Check the header against the payload. `now` is the current unix time.
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    tolerance_secs: i64,
    now: i64,
) -> Result<(), WebhookError> {
    if secret.is_empty() {
        return Err(WebhookError::NoSecret);
    }
    if header.trim().is_empty() {
        return Err(WebhookError::MissingHeader);
    }

    let parsed = parse_header(header)?;
    let expected = expected_signature(payload, secret, parsed.timestamp)?;

    let matched = parsed
        .signatures
        .iter()
        .any(|sig| constant_time_eq(sig.as_bytes(), expected.as_bytes()));
    if !matched {
        return Err(WebhookError::SignatureMismatch);
    }

    if (now - parsed.timestamp).abs() > tolerance_secs {
        return Err(WebhookError::OutsideTolerance);
    }

    Ok(())
}

/// Verify the signature and decode the event envelope
pub fn construct_event(
    payload: &[u8],
    header: &str,
    secret: &str,
    now: i64,
) -> Result<WebhookEvent, WebhookError> {
    verify_signature(payload, header, secret, DEFAULT_TOLERANCE_SECS, now)?;
    serde_json::from_slice(payload).map_err(|e| WebhookError::InvalidPayload(e.to_string()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    pub object: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CustomerDetails {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// The `checkout.session` object fields we act on
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CompletedSession {
    pub id: String,
    #[serde(default)]
    pub amount_total: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub shipping_details: Option<serde_json::Value>,
}

impl CompletedSession {
    pub fn customer_email(&self) -> Option<&str> {
        self.customer_details
            .as_ref()
            .and_then(|d| d.email.as_deref())
            .or(self.customer_email.as_deref())
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_details.as_ref().and_then(|d| d.name.as_deref())
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Total formatted in dollars, e.g. `$35.00`
    pub fn amount_display(&self) -> Option<String> {
        self.amount_total.map(format_cents)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LastPaymentError {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub last_payment_error: Option<LastPaymentError>,
}

impl PaymentIntent {
    pub fn failure_message(&self) -> Option<&str> {
        self.last_payment_error
            .as_ref()
            .and_then(|e| e.message.as_deref())
    }
}

/// Events the shop reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum StripeEvent {
    CheckoutSessionCompleted(CompletedSession),
    PaymentIntentSucceeded(PaymentIntent),
    PaymentIntentFailed(PaymentIntent),
    Unhandled(String),
}

impl WebhookEvent {
    pub fn classify(&self) -> Result<StripeEvent, WebhookError> {
        let object = || self.data.object.clone();
        let decode_err = |e: serde_json::Error| WebhookError::InvalidPayload(e.to_string());

        Ok(match self.event_type.as_str() {
            "checkout.session.completed" => StripeEvent::CheckoutSessionCompleted(
                serde_json::from_value(object()).map_err(decode_err)?,
            ),
            "payment_intent.succeeded" => StripeEvent::PaymentIntentSucceeded(
                serde_json::from_value(object()).map_err(decode_err)?,
            ),
            "payment_intent.payment_failed" => StripeEvent::PaymentIntentFailed(
                serde_json::from_value(object()).map_err(decode_err)?,
            ),
            other => StripeEvent::Unhandled(other.to_string()),
        })
    }
}

/// Cents to a dollar string with two decimals
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}
