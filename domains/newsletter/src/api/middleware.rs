//! Newsletter domain state

use std::sync::Arc;

use atelier_mailing::MailingListService;

/// Application state for the newsletter function
#[derive(Clone)]
pub struct NewsletterState {
    pub mailing: Arc<dyn MailingListService>,
}
