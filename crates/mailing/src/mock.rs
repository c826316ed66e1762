//! Mock mailing list
//!
//! Keeps subscribers in memory and reports duplicates the way Mailchimp does.

use std::sync::{Arc, Mutex, PoisonError};

use crate::{MailingError, MailingListService, SubscribeOutcome, Subscriber};

#[derive(Debug, Clone, Default)]
pub struct MockMailingList {
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
    failure: Option<(String, String)>,
}

impl MockMailingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a provider error
    pub fn failing(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            subscribers: Arc::default(),
            failure: Some((title.into(), detail.into())),
        }
    }

    pub fn subscribers(&self) -> Vec<Subscriber> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_subscribed(&self, email: &str) -> bool {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|s| s.email.eq_ignore_ascii_case(email))
    }
}

#[async_trait::async_trait]
impl MailingListService for MockMailingList {
    async fn subscribe(&self, subscriber: Subscriber) -> Result<SubscribeOutcome, MailingError> {
        if let Some((title, detail)) = &self.failure {
            return Err(MailingError::Provider {
                title: title.clone(),
                detail: detail.clone(),
            });
        }

        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        if subscribers
            .iter()
            .any(|s| s.email.eq_ignore_ascii_case(&subscriber.email))
        {
            return Err(MailingError::AlreadySubscribed);
        }

        tracing::info!("Mock mailing list capturing subscriber {}", subscriber.email);
        subscribers.push(subscriber);
        Ok(SubscribeOutcome::Subscribed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(email: &str) -> Subscriber {
        Subscriber {
            email: email.to_string(),
            first_name: String::new(),
            source: "website".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_is_rejected() {
        let list = MockMailingList::new();
        list.subscribe(subscriber("a@b.co")).await.unwrap();
        let err = list.subscribe(subscriber("A@B.co")).await.unwrap_err();
        assert!(matches!(err, MailingError::AlreadySubscribed));
        assert_eq!(list.subscribers().len(), 1);
        assert!(list.is_subscribed("a@b.co"));
    }

    #[tokio::test]
    async fn test_failing_list() {
        let list = MockMailingList::failing("Forgotten Email Not Subscribed", "nope");
        assert!(matches!(
            list.subscribe(subscriber("a@b.co")).await,
            Err(MailingError::Provider { .. })
        ));
    }
}
