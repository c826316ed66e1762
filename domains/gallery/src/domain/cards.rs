//! Card projections for the portfolio, home and shop pages

use std::time::Duration;

use serde::Serialize;

use atelier_catalog::{ArtworkEntry, Catalog};

use super::filter::{entrance_delay, VisibleSet};
use super::view::{price_rows, Navigation, PriceRow};

/// Shop card descriptions are cut to this many characters
pub const DESCRIPTION_LIMIT: usize = 120;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioCard {
    pub artwork_id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
    pub alt: String,
    pub featured: bool,
    pub entrance_delay: Duration,
}

impl PortfolioCard {
    fn project(entry: &ArtworkEntry, catalog: &Catalog, position: usize) -> Self {
        Self {
            artwork_id: entry.id.clone(),
            title: entry.title.clone(),
            category: catalog.category_name(&entry.category).to_string(),
            tags: entry.tags.clone(),
            thumbnail: entry.images.thumbnail.clone(),
            alt: if entry.seo.alt_text.is_empty() {
                entry.title.clone()
            } else {
                entry.seo.alt_text.clone()
            },
            featured: entry.featured,
            entrance_delay: entrance_delay(position),
        }
    }
}

/// Cards for the visible set, in display order
pub fn portfolio_cards(catalog: &Catalog, visible: &VisibleSet) -> Vec<PortfolioCard> {
    visible
        .entries(&catalog.artworks)
        .enumerate()
        .map(|(position, entry)| PortfolioCard::project(entry, catalog, position))
        .collect()
}

/// Featured-only cards for the home page
pub fn home_cards(catalog: &Catalog) -> Vec<PortfolioCard> {
    catalog
        .featured()
        .enumerate()
        .map(|(position, entry)| PortfolioCard::project(entry, catalog, position))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductBadge {
    Featured,
    SoldOut,
}

impl ProductBadge {
    pub fn label(&self) -> &'static str {
        match self {
            ProductBadge::Featured => "Featured",
            ProductBadge::SoldOut => "Sold Out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub artwork_id: String,
    pub title: String,
    pub image: String,
    pub image_alt: String,
    pub subtitle: String,
    pub description: String,
    pub options: Vec<PriceRow>,
    pub badge: Option<ProductBadge>,
    pub purchasable: bool,
}

impl ProductCard {
    pub fn project(entry: &ArtworkEntry, catalog: &Catalog) -> Self {
        let category = catalog.category_name(&entry.category);
        let subtitle = match entry.tags.first() {
            Some(tag) => format!("{} • {}", category, tag),
            None => category.to_string(),
        };
        let badge = match (entry.available, entry.featured) {
            (false, _) => Some(ProductBadge::SoldOut),
            (true, true) => Some(ProductBadge::Featured),
            (true, false) => None,
        };

        Self {
            artwork_id: entry.id.clone(),
            title: entry.title.clone(),
            image: entry.images.thumbnail.clone(),
            image_alt: format!("{} print", entry.title),
            subtitle,
            description: truncate(&entry.description, DESCRIPTION_LIMIT),
            options: price_rows(&entry.pricing),
            badge,
            purchasable: entry.available,
        }
    }

    pub fn purchase_label(&self) -> &'static str {
        if self.purchasable {
            "Purchase"
        } else {
            "Sold Out"
        }
    }

    /// Navigation for the purchase button; `None` while sold out
    pub fn purchase(&self) -> Option<Navigation> {
        self.purchasable.then(|| Navigation::Shop {
            artwork_id: self.artwork_id.clone(),
        })
    }
}

/// Every catalog entry as a shop card
pub fn product_cards(catalog: &Catalog) -> Vec<ProductCard> {
    catalog
        .artworks
        .iter()
        .map(|entry| ProductCard::project(entry, catalog))
        .collect()
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
