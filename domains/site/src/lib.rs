//! Site chrome shared by every page
//!
//! The header navigation, the commission request form and the Instagram
//! feed block are view-models in the same style as the gallery page: the
//! rendering layer forwards DOM events and reads back what to display.

pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::commission::{
    CommissionForm, FieldKind, FieldSpec, SubmitBlocked, COMMISSION_FIELDS, INVALID_EMAIL,
    REQUIRED_FIELD,
};
pub use domain::instagram::{
    format_count, FeedPost, FeedResponse, InstagramFeed, PostTile, FEED_PATH, INSTAGRAM_HANDLE,
    INSTAGRAM_URL,
};
pub use domain::navigation::{
    anchor_scroll_top, anchor_target, current_file, NavFocus, NavLink, SiteNav, DEFAULT_LINKS,
    FOCUS_DELAY, MOBILE_BREAKPOINT, RESIZE_DEBOUNCE, SCROLL_THRESHOLD,
};
