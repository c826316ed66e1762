//! Lightbox projection
//!
//! Pure view of one open lightbox position. The rendering layer maps these
//! fields onto the modal's elements.

use std::fmt;

use serde::Serialize;

use atelier_catalog::{format_month, format_price, ArtworkEntry, Catalog, Pricing, Variant};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_DESCRIPTION: &str =
    "A surreal digital collage inspired by music, poetry, and the emotions they stir.";
pub const DEFAULT_DATE: &str = "Recent";
pub const ARTWORK_TYPE: &str = "Digital Collage";
pub const CONTACT_FOR_PRICING: &str = "Contact for pricing";

const THUMBNAIL_MARKER: &str = "-thumb";

/// Navigation requested by a lightbox or card action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Navigation {
    Shop { artwork_id: String },
    Commissions,
}

impl Navigation {
    /// Relative URL to navigate to
    pub fn href(&self) -> String {
        match self {
            Navigation::Shop { artwork_id } if artwork_id.is_empty() => "shop.html".to_string(),
            Navigation::Shop { artwork_id } => format!("shop.html?artwork={}", artwork_id),
            Navigation::Commissions => "commissions.html".to_string(),
        }
    }
}

/// One offered variant with its display price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub variant: Variant,
    pub label: &'static str,
    pub price: String,
}

impl fmt::Display for PriceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.label, self.price)
    }
}

/// Rows for every offered variant in fixed order
pub fn price_rows(pricing: &Pricing) -> Vec<PriceRow> {
    pricing
        .offered()
        .into_iter()
        .map(|(variant, price)| PriceRow {
            variant,
            label: variant.label(),
            price: format_price(price),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum PriceList {
    Rows(Vec<PriceRow>),
    ContactForPricing,
}

impl PriceList {
    pub fn from_pricing(pricing: &Pricing) -> Self {
        let rows = price_rows(pricing);
        if rows.is_empty() {
            PriceList::ContactForPricing
        } else {
            PriceList::Rows(rows)
        }
    }

    /// Text lines as rendered
    pub fn lines(&self) -> Vec<String> {
        match self {
            PriceList::Rows(rows) => rows.iter().map(ToString::to_string).collect(),
            PriceList::ContactForPricing => vec![CONTACT_FOR_PRICING.to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    SoldOut,
}

impl Availability {
    pub fn badge(&self) -> &'static str {
        match self {
            Availability::Available => "Available for Purchase",
            Availability::SoldOut => "Sold Out",
        }
    }

    pub fn purchase_label(&self) -> &'static str {
        match self {
            Availability::Available => "Purchase",
            Availability::SoldOut => "Sold Out",
        }
    }
}

/// Everything the lightbox modal displays for one position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightboxView {
    pub artwork_id: String,
    pub image_url: String,
    pub image_alt: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub description: String,
    pub date: String,
    pub artwork_type: &'static str,
    pub availability: Availability,
    pub prices: PriceList,
    pub purchase_enabled: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    /// 1-based position and snapshot length for the counter
    pub position: usize,
    pub total: usize,
}

impl LightboxView {
    pub fn project(entry: &ArtworkEntry, catalog: &Catalog, index: usize, total: usize) -> Self {
        let availability = if entry.available {
            Availability::Available
        } else {
            Availability::SoldOut
        };

        Self {
            artwork_id: entry.id.clone(),
            image_url: full_image_url(&entry.images.thumbnail),
            image_alt: non_empty(&entry.seo.alt_text).unwrap_or(&entry.title).to_string(),
            title: non_empty(&entry.title).unwrap_or(DEFAULT_TITLE).to_string(),
            category: catalog.category_name(&entry.category).to_string(),
            tags: entry.tags.clone(),
            description: non_empty(&entry.description)
                .unwrap_or(DEFAULT_DESCRIPTION)
                .to_string(),
            date: entry
                .date_created
                .as_deref()
                .and_then(format_month)
                .unwrap_or_else(|| DEFAULT_DATE.to_string()),
            artwork_type: ARTWORK_TYPE,
            availability,
            prices: PriceList::from_pricing(&entry.pricing),
            purchase_enabled: entry.available,
            previous_enabled: index > 0,
            next_enabled: index + 1 < total,
            position: index + 1,
            total,
        }
    }

    pub fn purchase_label(&self) -> &'static str {
        self.availability.purchase_label()
    }
}

/// Full-size image URL for a thumbnail
pub fn full_image_url(thumbnail: &str) -> String {
    thumbnail.replacen(THUMBNAIL_MARKER, "", 1)
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(s)
}
