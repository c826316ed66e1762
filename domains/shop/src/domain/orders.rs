//! Webhook event processing
//!
//! Completed checkouts are logged as digital or physical orders and
//! announced as a sale notification. Payment intent events are logged.

use serde::Serialize;

use atelier_catalog::Variant;
use atelier_payments::webhook::{CompletedSession, StripeEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Digital,
    Physical,
}

impl OrderKind {
    /// Only an explicit digital variant is fulfilled by download
    fn of_session(session: &CompletedSession) -> Self {
        match session.metadata("variant").and_then(|v| v.parse::<Variant>().ok()) {
            Some(Variant::Digital) => OrderKind::Digital,
            _ => OrderKind::Physical,
        }
    }
}

/// Details of a completed sale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleNotification {
    pub session_id: String,
    pub kind: OrderKind,
    pub artwork_id: Option<String>,
    pub artwork_title: Option<String>,
    pub variant: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    /// Total in dollars, e.g. `$35.00`
    pub amount: Option<String>,
    pub shipping: Option<serde_json::Value>,
}

impl SaleNotification {
    pub fn from_session(session: &CompletedSession) -> Self {
        let variant = session.metadata("variant");

        Self {
            session_id: session.id.clone(),
            kind: OrderKind::of_session(session),
            artwork_id: session.metadata("artworkId").map(str::to_string),
            artwork_title: session.metadata("artworkTitle").map(str::to_string),
            variant: variant.map(str::to_string),
            customer_name: session.customer_name().map(str::to_string),
            customer_email: session.customer_email().map(str::to_string),
            amount: session.amount_display(),
            shipping: session.shipping_details.clone(),
        }
    }

    fn log(&self) {
        match self.kind {
            OrderKind::Digital => tracing::info!(
                session_id = %self.session_id,
                artwork_id = ?self.artwork_id,
                "Digital order completed, download link to be delivered"
            ),
            OrderKind::Physical => tracing::info!(
                session_id = %self.session_id,
                artwork_id = ?self.artwork_id,
                variant = ?self.variant,
                shipping = ?self.shipping,
                "Physical order completed, print to be fulfilled"
            ),
        }

        tracing::info!(
            artwork = self.artwork_title.as_deref().unwrap_or("Unknown artwork"),
            variant = ?self.variant,
            customer_name = self.customer_name.as_deref().unwrap_or("Unknown"),
            customer_email = self.customer_email.as_deref().unwrap_or("Unknown"),
            amount = self.amount.as_deref().unwrap_or("$0.00"),
            "New sale"
        );
    }
}

/// What a webhook delivery resulted in
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookOutcome {
    Sale(SaleNotification),
    PaymentSucceeded { payment_intent: String },
    PaymentFailed { payment_intent: String, reason: Option<String> },
    Unhandled(String),
}

pub fn process_event(event: StripeEvent) -> WebhookOutcome {
    match event {
        StripeEvent::CheckoutSessionCompleted(session) => {
            let sale = SaleNotification::from_session(&session);
            sale.log();
            WebhookOutcome::Sale(sale)
        }
        StripeEvent::PaymentIntentSucceeded(intent) => {
            tracing::info!(payment_intent = %intent.id, amount = ?intent.amount, "Payment succeeded");
            WebhookOutcome::PaymentSucceeded {
                payment_intent: intent.id,
            }
        }
        StripeEvent::PaymentIntentFailed(intent) => {
            let reason = intent.failure_message().map(str::to_string);
            tracing::error!(payment_intent = %intent.id, reason = ?reason, "Payment failed");
            WebhookOutcome::PaymentFailed {
                payment_intent: intent.id,
                reason,
            }
        }
        StripeEvent::Unhandled(event_type) => {
            tracing::info!(event_type = %event_type, "Unhandled webhook event type");
            WebhookOutcome::Unhandled(event_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_payments::webhook::PaymentIntent;

    fn session(variant: Option<&str>) -> CompletedSession {
        let mut metadata = serde_json::json!({"artworkId": "moonlit", "artworkTitle": "Moonlit"});
        if let Some(v) = variant {
            metadata["variant"] = serde_json::json!(v);
        }
        serde_json::from_value(serde_json::json!({
            "id": "cs_1",
            "amount_total": 3500,
            "customer_details": {"email": "buyer@example.com", "name": "Ada"},
            "metadata": metadata,
        }))
        .unwrap()
    }

    #[test]
    fn test_completed_digital_sale() {
        match process_event(StripeEvent::CheckoutSessionCompleted(session(Some("digital")))) {
            WebhookOutcome::Sale(sale) => {
                assert_eq!(sale.kind, OrderKind::Digital);
                assert_eq!(sale.amount.as_deref(), Some("$35.00"));
                assert_eq!(sale.customer_name.as_deref(), Some("Ada"));
                assert_eq!(sale.artwork_title.as_deref(), Some("Moonlit"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_completed_print_sale() {
        let sale = SaleNotification::from_session(&session(Some("print16x20")));
        assert_eq!(sale.kind, OrderKind::Physical);
        assert_eq!(sale.variant.as_deref(), Some("print16x20"));
    }

    #[test]
    fn test_missing_or_unknown_variant_is_physical() {
        let sale = SaleNotification::from_session(&session(None));
        assert_eq!(sale.kind, OrderKind::Physical);
        assert_eq!(sale.variant, None);

        let sale = SaleNotification::from_session(&session(Some("poster")));
        assert_eq!(sale.kind, OrderKind::Physical);
    }

    #[test]
    fn test_payment_intent_events() {
        let intent = PaymentIntent {
            id: "pi_1".to_string(),
            amount: Some(2500),
            last_payment_error: None,
        };
        assert_eq!(
            process_event(StripeEvent::PaymentIntentSucceeded(intent.clone())),
            WebhookOutcome::PaymentSucceeded {
                payment_intent: "pi_1".to_string()
            }
        );
        assert_eq!(
            process_event(StripeEvent::PaymentIntentFailed(intent)),
            WebhookOutcome::PaymentFailed {
                payment_intent: "pi_1".to_string(),
                reason: None
            }
        );
        assert_eq!(
            process_event(StripeEvent::Unhandled("charge.refunded".to_string())),
            WebhookOutcome::Unhandled("charge.refunded".to_string())
        );
    }
}
