//! Gallery page view-model
//!
//! A single `GalleryPage` owns every piece of portfolio page state. The
//! rendering layer forwards user input to its methods and re-reads the
//! projections afterwards.

use serde::Serialize;

use atelier_catalog::{Catalog, ContentError};

use super::cards::{portfolio_cards, PortfolioCard};
use super::filter::{
    announcement, apply_filter, EmptyNotice, FilterBar, FilterKey, VisibleSet, EMPTY_NOTICE,
};
use super::keys::NavKey;
use super::lightbox::{KeyOutcome, Lightbox};
use super::state::{CloseTrigger, StateError};
use super::view::{LightboxView, Navigation};

/// Element that should hold keyboard focus
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "target", content = "id", rename_all = "snake_case")]
pub enum Focus {
    #[default]
    Unchanged,
    FilterButton(usize),
    Card(String),
    LightboxClose,
}

/// Placeholder shown instead of any gallery content when loading fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub headline: &'static str,
    pub message: &'static str,
}

pub const LOAD_FAILURE: LoadFailure = LoadFailure {
    headline: "Unable to Load Content",
    message: "There was an error loading artwork data. Please refresh the page or try again later.",
};

/// Either a working gallery or the static failure placeholder
#[derive(Debug)]
pub enum PageContent {
    Ready(Box<GalleryPage>),
    Unavailable(LoadFailure),
}

#[derive(Debug)]
pub struct GalleryPage {
    catalog: Catalog,
    filter: FilterKey,
    visible: VisibleSet,
    filter_bar: FilterBar,
    empty_notice: Option<EmptyNotice>,
    announcement: Option<String>,
    lightbox: Lightbox,
    focus: Focus,
}

impl GalleryPage {
    /// Page with the default filter bar (all, featured, one per category)
    pub fn new(catalog: Catalog) -> Self {
        let buttons = FilterBar::default_buttons(&catalog.artworks);
        Self::with_filters(catalog, buttons)
    }

    pub fn with_filters(catalog: Catalog, buttons: Vec<(FilterKey, String)>) -> Self {
        let filter = FilterKey::All;
        let visible = apply_filter(&filter, &catalog.artworks);
        let filter_bar = FilterBar::new(buttons, &catalog.artworks);
        let empty_notice = visible.is_empty().then_some(EMPTY_NOTICE);

        Self {
            catalog,
            filter,
            visible,
            filter_bar,
            empty_notice,
            announcement: None,
            lightbox: Lightbox::new(),
            focus: Focus::Unchanged,
        }
    }

    /// Build from a content-load result; failure renders nothing but the placeholder
    pub fn load(result: Result<Catalog, ContentError>) -> PageContent {
        match result {
            Ok(catalog) => PageContent::Ready(Box::new(Self::new(catalog))),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load artwork data");
                PageContent::Unavailable(LOAD_FAILURE)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterKey {
        &self.filter
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn filter_bar(&self) -> &FilterBar {
        &self.filter_bar
    }

    pub fn empty_notice(&self) -> Option<&EmptyNotice> {
        self.empty_notice.as_ref()
    }

    /// Latest live-region text
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub fn cards(&self) -> Vec<PortfolioCard> {
        portfolio_cards(&self.catalog, &self.visible)
    }

    pub fn lightbox_view(&self) -> Option<LightboxView> {
        self.lightbox.view(&self.catalog)
    }

    /// Activate a filter button
    pub fn select_filter(&mut self, key: FilterKey) {
        self.visible = apply_filter(&key, &self.catalog.artworks);
        self.filter_bar.set_active(&key);
        self.empty_notice = self.visible.is_empty().then_some(EMPTY_NOTICE);
        self.announcement = Some(announcement(self.visible.len(), &key));
        tracing::debug!(filter = key.as_str(), visible = self.visible.len(), "Filter applied");
        self.filter = key;
    }

    pub fn focus_filter_button(&mut self, index: usize) {
        if let Some(i) = self.filter_bar.focus(index) {
            self.focus = Focus::FilterButton(i);
        }
    }

    /// Activate the card at `position` in the current visible set
    pub fn activate_card(&mut self, position: usize) -> Result<(), StateError> {
        self.lightbox.open(&self.visible, position)?;
        self.filter_bar.blur();
        self.focus = Focus::LightboxClose;
        Ok(())
    }

    /// Activate the card for an artwork id, if it is currently visible
    pub fn activate_artwork(&mut self, artwork_id: &str) -> Result<(), StateError> {
        let position = self
            .catalog
            .artworks
            .iter()
            .position(|a| a.id == artwork_id)
            .and_then(|i| self.visible.position_of(i))
            .ok_or_else(|| {
                StateError::GuardFailed(format!("Artwork {} is not visible", artwork_id))
            })?;
        self.activate_card(position)
    }

    pub fn lightbox_previous(&mut self) -> bool {
        self.lightbox.previous()
    }

    pub fn lightbox_next(&mut self) -> bool {
        self.lightbox.next()
    }

    /// Close via the close button or a click outside the content area
    pub fn close_lightbox(&mut self, trigger: CloseTrigger) {
        if let Some(index) = self.lightbox.close(trigger) {
            self.restore_card_focus(index);
        }
    }

    /// Document-level key handling: the lightbox takes keys while open,
    /// otherwise the focused filter button does
    pub fn handle_key(&mut self, key: NavKey) {
        if self.lightbox.is_open() {
            if let KeyOutcome::Closed(index) = self.lightbox.handle_key(key) {
                self.restore_card_focus(index);
            }
            return;
        }

        if matches!(self.focus, Focus::FilterButton(_)) {
            if let Some(i) = self.filter_bar.handle_key(key) {
                self.focus = Focus::FilterButton(i);
            }
        }
    }

    pub fn purchase(&self) -> Option<Navigation> {
        self.lightbox.purchase(&self.catalog)
    }

    pub fn commission(&self) -> Navigation {
        self.lightbox.commission()
    }

    fn restore_card_focus(&mut self, catalog_index: usize) {
        if let Some(entry) = self.catalog.artworks.get(catalog_index) {
            self.focus = Focus::Card(entry.id.clone());
        }
    }
}
