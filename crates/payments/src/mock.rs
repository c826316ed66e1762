//! Mock payment service
//!
//! Captures session requests in memory and hands back deterministic
//! session ids. Can be switched to fail for error-path tests.

use std::sync::{Arc, Mutex, PoisonError};

use crate::{CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentService};

#[derive(Debug, Clone, Default)]
pub struct MockPaymentService {
    requests: Arc<Mutex<Vec<CheckoutSessionRequest>>>,
    failure: Option<String>,
}

impl MockPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose every call fails with the given provider message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            requests: Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// All captured requests, oldest first
    pub fn requests(&self) -> Vec<CheckoutSessionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn last_request(&self) -> Option<CheckoutSessionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait::async_trait]
impl PaymentService for MockPaymentService {
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let count = {
            let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
            requests.push(request);
            requests.len()
        };

        if let Some(message) = &self.failure {
            tracing::warn!("Mock payment service failing session {}", count);
            return Err(PaymentError::Provider(message.clone()));
        }

        let id = format!("cs_test_mock_{}", count);
        tracing::info!(session_id = %id, "Mock payment service created session");
        Ok(CheckoutSession {
            url: format!("https://checkout.stripe.com/c/pay/{}", id),
            id,
        })
    }
}
