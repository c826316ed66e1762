//! Filter index: derives the visible subset of the catalog
//!
//! The visible set is a list of catalog indices in original order. It is
//! recomputed from the structured entries on every filter change; nothing
//! is read back out of rendered markup.

use std::time::Duration;

use serde::Serialize;

use atelier_catalog::ArtworkEntry;

use super::keys::NavKey;

/// Delay between consecutive card entrance animations
pub const STAGGER_STEP: Duration = Duration::from_millis(50);

/// Active gallery filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum FilterKey {
    #[default]
    All,
    Featured,
    /// Matches a category slug or a tag
    Term(String),
}

impl FilterKey {
    /// Parse a `data-filter` value
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "all" | "" => FilterKey::All,
            "featured" => FilterKey::Featured,
            term => FilterKey::Term(term.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterKey::All => "all",
            FilterKey::Featured => "featured",
            FilterKey::Term(term) => term,
        }
    }

    /// Name used in screen-reader announcements
    pub fn display_name(&self) -> &str {
        match self {
            FilterKey::All => "all artwork",
            other => other.as_str(),
        }
    }

    pub fn matches(&self, entry: &ArtworkEntry) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Featured => entry.featured,
            FilterKey::Term(term) => entry.has_term(term),
        }
    }
}

impl From<FilterKey> for String {
    fn from(key: FilterKey) -> Self {
        key.as_str().to_string()
    }
}

/// Ordered catalog indices satisfying a filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    indices: Vec<usize>,
}

impl VisibleSet {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Catalog indices in display order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Catalog index of the entry shown at `position`
    pub fn get(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    /// Display position of a catalog index, if visible
    pub fn position_of(&self, catalog_index: usize) -> Option<usize> {
        self.indices.iter().position(|&i| i == catalog_index)
    }

    /// Resolve the set against the entries it was computed from
    pub fn entries<'a>(
        &'a self,
        all: &'a [ArtworkEntry],
    ) -> impl Iterator<Item = &'a ArtworkEntry> + 'a {
        self.indices.iter().filter_map(move |&i| all.get(i))
    }
}

/// Entries matching `key`, original order preserved
pub fn apply_filter(key: &FilterKey, entries: &[ArtworkEntry]) -> VisibleSet {
    VisibleSet {
        indices: entries
            .iter()
            .enumerate()
            .filter(|(_, e)| key.matches(e))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Live-region text after a filter change
pub fn announcement(count: usize, key: &FilterKey) -> String {
    let noun = if count == 1 { "piece" } else { "pieces" };
    format!("Showing {} {} in {}", count, noun, key.display_name())
}

/// Entrance delay for the k-th visible card
pub fn entrance_delay(position: usize) -> Duration {
    STAGGER_STEP * position as u32
}

/// Notice shown when a filter matches nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyNotice {
    pub headline: &'static str,
    pub hint: &'static str,
}

pub const EMPTY_NOTICE: EmptyNotice = EmptyNotice {
    headline: "No artwork found for this filter.",
    hint: "Try selecting a different category.",
};

/// One button in the filter bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterButton {
    pub key: FilterKey,
    pub label: String,
    /// Size of this button's own visible set, independent of the active filter
    pub count: usize,
    pub active: bool,
}

impl FilterButton {
    /// Count badge text, e.g. `(12)`
    pub fn count_label(&self) -> String {
        format!("({})", self.count)
    }

    /// Value for `aria-pressed`
    pub fn aria_pressed(&self) -> &'static str {
        if self.active {
            "true"
        } else {
            "false"
        }
    }
}

/// Filter buttons with their counts, active marker and keyboard focus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
    focused: Option<usize>,
}

impl FilterBar {
    pub fn new(buttons: Vec<(FilterKey, String)>, entries: &[ArtworkEntry]) -> Self {
        let mut bar = Self {
            buttons: buttons
                .into_iter()
                .map(|(key, label)| FilterButton {
                    key,
                    label,
                    count: 0,
                    active: false,
                })
                .collect(),
            focused: None,
        };
        bar.refresh_counts(entries);
        bar.set_active(&FilterKey::All);
        bar
    }

    /// Default buttons: all, featured, then one per category slug in first-seen order
    pub fn default_buttons(entries: &[ArtworkEntry]) -> Vec<(FilterKey, String)> {
        let mut buttons = vec![
            (FilterKey::All, "All".to_string()),
            (FilterKey::Featured, "Featured".to_string()),
        ];
        for entry in entries {
            let key = FilterKey::parse(&entry.category);
            if matches!(key, FilterKey::Term(_)) && !buttons.iter().any(|(k, _)| *k == key) {
                buttons.push((key, entry.category.clone()));
            }
        }
        buttons
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Recompute every button's count from the entries
    pub fn refresh_counts(&mut self, entries: &[ArtworkEntry]) {
        for button in &mut self.buttons {
            button.count = entries.iter().filter(|e| button.key.matches(e)).count();
        }
    }

    /// Mark exactly the buttons whose key equals `key` as active
    pub fn set_active(&mut self, key: &FilterKey) {
        for button in &mut self.buttons {
            button.active = button.key == *key;
        }
    }

    pub fn focus(&mut self, index: usize) -> Option<usize> {
        if index < self.buttons.len() {
            self.focused = Some(index);
        }
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Arrow-key focus movement, wrapping at both ends. Never changes the filter.
    ///
    /// With nothing focused, forward keys land on the first button and
    /// backward keys on the last.
    pub fn handle_key(&mut self, key: NavKey) -> Option<usize> {
        let len = self.buttons.len();
        if len == 0 {
            return None;
        }

        let next = match (key, self.focused) {
            (NavKey::ArrowRight | NavKey::ArrowDown, Some(i)) => (i + 1) % len,
            (NavKey::ArrowRight | NavKey::ArrowDown, None) => 0,
            (NavKey::ArrowLeft | NavKey::ArrowUp, Some(i)) => (i + len - 1) % len,
            (NavKey::ArrowLeft | NavKey::ArrowUp, None) => len - 1,
            _ => return None,
        };
        self.focused = Some(next);
        Some(next)
    }
}
