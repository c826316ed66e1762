//! Keyboard input understood by the gallery widgets

/// Keys the filter bar and lightbox react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            "ArrowUp" => NavKey::ArrowUp,
            "ArrowDown" => NavKey::ArrowDown,
            "Escape" | "Esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}
