//! Header navigation: mobile menu, active link and scroll state

use std::time::Duration;

use serde::Serialize;

use atelier_gallery::NavKey;

/// Viewports at or below this width use the collapsible menu
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Scroll offset past which the header is marked `scrolled`
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Resize events are reported once they stop for this long
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Delay before the first link takes focus when the menu opens
pub const FOCUS_DELAY: Duration = Duration::from_millis(100);

const DEFAULT_HEADER_HEIGHT: f64 = 70.0;
const ANCHOR_GAP: f64 = 20.0;

const OPEN_ICON: &str = "✕";
const CLOSED_ICON: &str = "☰";

pub const DEFAULT_LINKS: [(&str, &str); 7] = [
    ("index.html", "Home"),
    ("portfolio.html", "Portfolio"),
    ("shop.html", "Shop"),
    ("commissions.html", "Commissions"),
    ("about.html", "About"),
    ("blog.html", "Blog"),
    ("contact.html", "Contact"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// Where keyboard focus goes after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavFocus {
    /// The first nav link, after [`FOCUS_DELAY`]
    FirstLink,
    Toggle,
}

/// The page file a location path names. The site root is `index.html`.
pub fn current_file(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(file) if !file.is_empty() => file,
        _ => "index.html",
    }
}

/// The element id an in-page link scrolls to, for `#id` hrefs only
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts an anchor target just below the sticky header.
/// A missing or zero header height counts as 70px.
pub fn anchor_scroll_top(target_top: f64, header_height: Option<f64>) -> f64 {
    let header = header_height
        .filter(|h| *h > 0.0)
        .unwrap_or(DEFAULT_HEADER_HEIGHT);
    target_top - header - ANCHOR_GAP
}

#[derive(Debug, Clone)]
pub struct SiteNav {
    links: Vec<NavLink>,
    menu_open: bool,
    viewport_width: u32,
    scrolled: bool,
}

impl SiteNav {
    /// `path` is `location.pathname`; the link whose href equals its file is active
    pub fn new(links: &[(&str, &str)], path: &str, viewport_width: u32) -> Self {
        let file = current_file(path);
        Self {
            links: links
                .iter()
                .map(|(href, label)| NavLink {
                    href: href.to_string(),
                    label: label.to_string(),
                    active: *href == file,
                })
                .collect(),
            menu_open: false,
            viewport_width,
            scrolled: false,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }

    pub fn is_open(&self) -> bool {
        self.menu_open
    }

    /// Value for the toggle's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.menu_open {
            OPEN_ICON
        } else {
            CLOSED_ICON
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= MOBILE_BREAKPOINT
    }

    /// Header carries the `scrolled` class
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Toggle button clicked
    pub fn toggle(&mut self) -> Option<NavFocus> {
        if self.menu_open {
            self.close();
            None
        } else {
            self.menu_open = true;
            tracing::debug!("Mobile menu opened");
            (!self.links.is_empty()).then_some(NavFocus::FirstLink)
        }
    }

    pub fn close(&mut self) {
        if self.menu_open {
            tracing::debug!("Mobile menu closed");
        }
        self.menu_open = false;
    }

    /// Escape closes an open menu and hands focus back to the toggle
    pub fn handle_key(&mut self, key: NavKey) -> Option<NavFocus> {
        if key == NavKey::Escape && self.menu_open {
            self.close();
            Some(NavFocus::Toggle)
        } else {
            None
        }
    }

    pub fn link_clicked(&mut self) {
        if self.is_mobile() {
            self.close();
        }
    }

    /// Any click on the document; `inside_header` when it landed within the site header
    pub fn document_clicked(&mut self, inside_header: bool) {
        if self.is_mobile() && !inside_header {
            self.close();
        }
    }

    /// Called once resizing settles for [`RESIZE_DEBOUNCE`]
    pub fn resized(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        if !self.is_mobile() {
            self.close();
        }
    }

    pub fn scrolled_to(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }
}
