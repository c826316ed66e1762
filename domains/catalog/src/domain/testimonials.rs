//! Client testimonials from `content/testimonials.json`

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::format::format_month;

/// Auto-advance period for the homepage carousel
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialImage {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub id: String,
    pub client: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub project: String,
    pub quote: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: Option<TestimonialImage>,
    #[serde(default)]
    pub project_image: Option<String>,
}

impl Testimonial {
    /// Star rating clamped to five
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }

    pub fn display_date(&self) -> String {
        format_month(&self.date).unwrap_or_else(|| self.date.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonials {
    pub testimonials: Vec<Testimonial>,
}

impl Testimonials {
    pub fn featured(&self) -> Vec<&Testimonial> {
        self.testimonials.iter().filter(|t| t.featured).collect()
    }
}

/// Index-based carousel over featured testimonials.
///
/// Unlike the lightbox, navigation wraps in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// `None` when there is nothing to show
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prev/next/dot controls only render with more than one slide
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn previous(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    /// Jump to a dot; out-of-range indices wrap like the arrows do
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current = index % self.len;
        self.current
    }

    /// Called by the rendering collaborator every `CAROUSEL_INTERVAL`
    pub fn tick(&mut self) -> usize {
        self.next()
    }
}
