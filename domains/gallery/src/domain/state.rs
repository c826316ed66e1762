//! Lightbox state machine
//!
//! The lightbox is either closed or open on a position of the snapshot
//! taken when it was opened. Navigation does not wrap.

pub use atelier_common::StateError;

// ============================================================================
// Lightbox State Machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    /// Open on `index` within the open-time snapshot
    Open { index: usize },
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open { index } => Some(*index),
            Self::Closed => None,
        }
    }
}

impl std::fmt::Display for LightboxState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open { index } => write!(f, "open({})", index),
        }
    }
}

/// How the lightbox was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// Events that trigger lightbox state transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightboxEvent {
    /// A card was activated at a snapshot position
    Open { index: usize },
    Previous,
    Next,
    Close(CloseTrigger),
}

impl std::fmt::Display for LightboxEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { index } => write!(f, "open({})", index),
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
            Self::Close(_) => write!(f, "close"),
        }
    }
}

/// Guard context for lightbox transitions
#[derive(Debug, Clone, Copy)]
pub struct LightboxGuardContext {
    /// Length of the open-time snapshot
    pub snapshot_len: usize,
}

pub struct LightboxStateMachine;

impl LightboxStateMachine {
    pub fn transition(
        current: LightboxState,
        event: LightboxEvent,
        context: &LightboxGuardContext,
    ) -> Result<LightboxState, StateError> {
        let next = match (current, event) {
            (LightboxState::Closed, LightboxEvent::Open { index }) => {
                if index >= context.snapshot_len {
                    return Err(StateError::GuardFailed(format!(
                        "Position {} is outside the {} visible artworks",
                        index, context.snapshot_len
                    )));
                }
                LightboxState::Open { index }
            }

            (LightboxState::Open { index }, LightboxEvent::Previous) => {
                if index == 0 {
                    return Err(StateError::GuardFailed(
                        "Already at the first artwork".to_string(),
                    ));
                }
                LightboxState::Open { index: index - 1 }
            }
            (LightboxState::Open { index }, LightboxEvent::Next) => {
                if index + 1 >= context.snapshot_len {
                    return Err(StateError::GuardFailed(
                        "Already at the last artwork".to_string(),
                    ));
                }
                LightboxState::Open { index: index + 1 }
            }
            (LightboxState::Open { .. }, LightboxEvent::Close(_)) => LightboxState::Closed,

            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    pub fn can_transition(
        current: LightboxState,
        event: LightboxEvent,
        context: &LightboxGuardContext,
    ) -> bool {
        Self::transition(current, event, context).is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
