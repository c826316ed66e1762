//! Checkout modal state machine
//!
//! `Selecting -> Redirecting -> Redirected | Failed`. A request in flight
//! cannot be cancelled; a failure is only left by reloading the page.

pub use atelier_common::StateError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutModalState {
    #[default]
    Selecting,
    Redirecting,
    Redirected { url: String },
    Failed { message: String },
}

impl CheckoutModalState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Redirected { .. } | Self::Failed { .. })
    }
}

impl std::fmt::Display for CheckoutModalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selecting => write!(f, "selecting"),
            Self::Redirecting => write!(f, "redirecting"),
            Self::Redirected { .. } => write!(f, "redirected"),
            Self::Failed { .. } => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutModalEvent {
    /// A variant was chosen and the session request sent
    VariantChosen,
    SessionCreated { url: String },
    SessionFailed { message: String },
}

impl std::fmt::Display for CheckoutModalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariantChosen => write!(f, "variant_chosen"),
            Self::SessionCreated { .. } => write!(f, "session_created"),
            Self::SessionFailed { .. } => write!(f, "session_failed"),
        }
    }
}

pub struct CheckoutModalStateMachine;

impl CheckoutModalStateMachine {
    pub fn transition(
        current: &CheckoutModalState,
        event: CheckoutModalEvent,
    ) -> Result<CheckoutModalState, StateError> {
        match (current, event) {
            (CheckoutModalState::Selecting, CheckoutModalEvent::VariantChosen) => {
                Ok(CheckoutModalState::Redirecting)
            }
            (CheckoutModalState::Redirecting, CheckoutModalEvent::SessionCreated { url }) => {
                if url.is_empty() {
                    return Err(StateError::GuardFailed(
                        "Checkout session has no redirect URL".to_string(),
                    ));
                }
                Ok(CheckoutModalState::Redirected { url })
            }
            (CheckoutModalState::Redirecting, CheckoutModalEvent::SessionFailed { message }) => {
                Ok(CheckoutModalState::Failed { message })
            }
            (current, event) => Err(StateError::InvalidTransition {
                from: current.to_string(),
                event: event.to_string(),
            }),
        }
    }
}
