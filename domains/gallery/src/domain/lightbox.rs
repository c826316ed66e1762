//! Lightbox session
//!
//! Owns the cursor plus the snapshot of the visible set captured at open
//! time. Later filter changes do not touch an open session.

use atelier_catalog::Catalog;

use super::filter::VisibleSet;
use super::keys::NavKey;
use super::state::{
    CloseTrigger, LightboxEvent, LightboxGuardContext, LightboxState, LightboxStateMachine,
    StateError,
};
use super::view::{LightboxView, Navigation};

/// Result of a key press routed to the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Moved,
    /// Closed; carries the catalog index whose card regains focus
    Closed(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
    snapshot: Vec<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Catalog indices captured when the session opened
    pub fn snapshot(&self) -> &[usize] {
        &self.snapshot
    }

    /// Catalog index of the displayed entry
    pub fn current(&self) -> Option<usize> {
        self.state.index().and_then(|i| self.snapshot.get(i).copied())
    }

    fn context(&self) -> LightboxGuardContext {
        LightboxGuardContext {
            snapshot_len: self.snapshot.len(),
        }
    }

    /// Open on `position` of the visible set, snapshotting it
    pub fn open(&mut self, visible: &VisibleSet, position: usize) -> Result<(), StateError> {
        let context = LightboxGuardContext {
            snapshot_len: visible.len(),
        };
        self.state = LightboxStateMachine::transition(
            self.state,
            LightboxEvent::Open { index: position },
            &context,
        )?;
        self.snapshot = visible.indices().to_vec();
        tracing::debug!(position, visible = self.snapshot.len(), "Lightbox opened");
        Ok(())
    }

    /// Step back; a no-op at the first position. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        self.step(LightboxEvent::Previous)
    }

    /// Step forward; a no-op at the last position. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        self.step(LightboxEvent::Next)
    }

    fn step(&mut self, event: LightboxEvent) -> bool {
        match LightboxStateMachine::transition(self.state, event, &self.context()) {
            Ok(next) => {
                self.state = next;
                true
            }
            Err(_) => false,
        }
    }

    /// Close the session, returning the catalog index of the last
    /// displayed entry so its card can regain focus
    pub fn close(&mut self, trigger: CloseTrigger) -> Option<usize> {
        let last = self.current()?;
        self.state = LightboxStateMachine::transition(
            self.state,
            LightboxEvent::Close(trigger),
            &self.context(),
        )
        .ok()?;
        self.snapshot.clear();
        tracing::debug!(?trigger, "Lightbox closed");
        Some(last)
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key {
            NavKey::Escape => self
                .close(CloseTrigger::Escape)
                .map_or(KeyOutcome::Ignored, KeyOutcome::Closed),
            NavKey::ArrowLeft if self.previous() => KeyOutcome::Moved,
            NavKey::ArrowRight if self.next() => KeyOutcome::Moved,
            _ => KeyOutcome::Ignored,
        }
    }

    /// Projection of the displayed entry
    pub fn view(&self, catalog: &Catalog) -> Option<LightboxView> {
        let index = self.state.index()?;
        let entry = catalog.artworks.get(*self.snapshot.get(index)?)?;
        Some(LightboxView::project(
            entry,
            catalog,
            index,
            self.snapshot.len(),
        ))
    }

    /// Purchase action; `None` when closed or the entry is sold out
    pub fn purchase(&self, catalog: &Catalog) -> Option<Navigation> {
        let entry = catalog.artworks.get(self.current()?)?;
        entry.available.then(|| Navigation::Shop {
            artwork_id: entry.id.clone(),
        })
    }

    /// Commission action; always available
    pub fn commission(&self) -> Navigation {
        Navigation::Commissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{apply_filter, FilterKey};
    use atelier_catalog::ArtworkEntry;

    fn catalog() -> Catalog {
        let artworks: Vec<ArtworkEntry> = serde_json::from_value(serde_json::json!([
            {"id": "a", "title": "A", "category": "x", "featured": true, "available": true},
            {"id": "b", "title": "B", "category": "y", "tags": ["x"]},
            {"id": "c", "title": "C", "category": "z", "featured": true, "available": true},
        ]))
        .unwrap();
        Catalog::new(artworks)
    }

    fn open_on(catalog: &Catalog, key: &str, position: usize) -> Lightbox {
        let visible = apply_filter(&FilterKey::parse(key), &catalog.artworks);
        let mut lightbox = Lightbox::new();
        lightbox.open(&visible, position).unwrap();
        lightbox
    }

    fn title(lightbox: &Lightbox, catalog: &Catalog) -> String {
        lightbox.view(catalog).unwrap().title
    }

    #[test]
    fn test_navigation_within_filtered_snapshot() {
        let catalog = catalog();
        let mut lightbox = open_on(&catalog, "featured", 0);
        assert_eq!(title(&lightbox, &catalog), "A");

        assert!(lightbox.next());
        assert_eq!(title(&lightbox, &catalog), "C");
        assert!(!lightbox.view(&catalog).unwrap().next_enabled);

        assert!(!lightbox.next());
        assert_eq!(title(&lightbox, &catalog), "C");
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let catalog = catalog();
        let mut lightbox = open_on(&catalog, "all", 0);
        assert!(!lightbox.previous());
        assert_eq!(lightbox.state(), LightboxState::Open { index: 0 });
        assert!(!lightbox.view(&catalog).unwrap().previous_enabled);
    }

    #[test]
    fn test_close_reports_last_displayed_entry() {
        let catalog = catalog();
        let mut lightbox = open_on(&catalog, "x", 0);
        lightbox.next();
        assert_eq!(lightbox.close(CloseTrigger::Backdrop), Some(1));
        assert!(!lightbox.is_open());
        assert!(lightbox.view(&catalog).is_none());
        assert_eq!(lightbox.close(CloseTrigger::CloseButton), None);
    }

    #[test]
    fn test_keys_while_open() {
        let catalog = catalog();
        let mut lightbox = open_on(&catalog, "all", 1);
        assert_eq!(lightbox.handle_key(NavKey::ArrowRight), KeyOutcome::Moved);
        assert_eq!(lightbox.handle_key(NavKey::ArrowRight), KeyOutcome::Ignored);
        assert_eq!(lightbox.handle_key(NavKey::ArrowLeft), KeyOutcome::Moved);
        assert_eq!(lightbox.handle_key(NavKey::ArrowUp), KeyOutcome::Ignored);
        assert_eq!(lightbox.handle_key(NavKey::Escape), KeyOutcome::Closed(1));
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lightbox = Lightbox::new();
        for key in [NavKey::Escape, NavKey::ArrowLeft, NavKey::ArrowRight] {
            assert_eq!(lightbox.handle_key(key), KeyOutcome::Ignored);
        }
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn test_open_outside_visible_set_fails() {
        let catalog = catalog();
        let visible = apply_filter(&FilterKey::Featured, &catalog.artworks);
        let mut lightbox = Lightbox::new();
        assert!(lightbox.open(&visible, 2).is_err());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_purchase_and_commission_actions() {
        let catalog = catalog();
        let lightbox = open_on(&catalog, "all", 0);
        assert_eq!(
            lightbox.purchase(&catalog).map(|n| n.href()).as_deref(),
            Some("shop.html?artwork=a")
        );
        assert_eq!(lightbox.commission().href(), "commissions.html");

        let sold_out = open_on(&catalog, "all", 1);
        assert_eq!(sold_out.purchase(&catalog), None);
        assert_eq!(Lightbox::new().purchase(&catalog), None);
    }
}
