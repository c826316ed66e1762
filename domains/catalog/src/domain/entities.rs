//! Domain entities for the artwork catalog
//!
//! Mirrors `content/artworks.json`:
//! `{ "artworks": [ArtworkEntry], "categories": { slug: Category } }`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Image URLs for an artwork, relative to the site root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkImages {
    pub thumbnail: String,
    pub full: String,
    pub og: String,
}

/// SEO metadata for an artwork
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtworkSeo {
    pub alt_text: String,
}

/// A purchasable form of an artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Digital,
    #[serde(rename = "print8x10")]
    Print8x10,
    #[serde(rename = "print16x20")]
    Print16x20,
    #[serde(rename = "print24x36")]
    Print24x36,
}

impl Variant {
    /// All variants in display order
    pub const ALL: [Variant; 4] = [
        Variant::Digital,
        Variant::Print8x10,
        Variant::Print16x20,
        Variant::Print24x36,
    ];

    /// Wire name used in content files and checkout requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Digital => "digital",
            Variant::Print8x10 => "print8x10",
            Variant::Print16x20 => "print16x20",
            Variant::Print24x36 => "print24x36",
        }
    }

    /// Label shown in the lightbox and on shop cards
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Digital => "Digital Download",
            Variant::Print8x10 => "Print 8\"×10\"",
            Variant::Print16x20 => "Print 16\"×20\"",
            Variant::Print24x36 => "Print 24\"×36\"",
        }
    }

    /// Label used for checkout products and the variant picker
    pub fn product_label(&self) -> &'static str {
        match self {
            Variant::Digital => "Digital Download",
            Variant::Print8x10 => "8\"×10\" Print",
            Variant::Print16x20 => "16\"×20\" Print",
            Variant::Print24x36 => "24\"×36\" Print",
        }
    }

    /// Physical prints ship; digital downloads don't
    pub fn is_physical(&self) -> bool {
        !matches!(self, Variant::Digital)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown variant: '{}'", s))
    }
}

/// Price per variant in US dollars; `None` means the variant isn't offered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pricing {
    pub digital: Option<Decimal>,
    #[serde(rename = "print8x10")]
    pub print_8x10: Option<Decimal>,
    #[serde(rename = "print16x20")]
    pub print_16x20: Option<Decimal>,
    #[serde(rename = "print24x36")]
    pub print_24x36: Option<Decimal>,
}

impl Pricing {
    /// Price for a variant, treating zero as "not set"
    pub fn price(&self, variant: Variant) -> Option<Decimal> {
        let price = match variant {
            Variant::Digital => self.digital,
            Variant::Print8x10 => self.print_8x10,
            Variant::Print16x20 => self.print_16x20,
            Variant::Print24x36 => self.print_24x36,
        };
        price.filter(|p| !p.is_zero())
    }

    /// Offered variants with their prices, in display order
    pub fn offered(&self) -> Vec<(Variant, Decimal)> {
        Variant::ALL
            .into_iter()
            .filter_map(|v| self.price(v).map(|p| (v, p)))
            .collect()
    }

    /// Lowest-tier price used for structured data offers
    pub fn headline_price(&self) -> Option<Decimal> {
        self.price(Variant::Digital)
            .or_else(|| self.price(Variant::Print8x10))
    }
}

/// Convert a dollar amount to integer cents
pub fn to_cents(price: Decimal) -> Option<i64> {
    (price * Decimal::ONE_HUNDRED).round().to_i64()
}

/// Format a dollar amount the way the site displays it (`$25`, `$12.5`)
pub fn format_price(price: Decimal) -> String {
    format!("${}", price.normalize())
}

/// One artwork/product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkEntry {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub images: ArtworkImages,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub seo: ArtworkSeo,
}

impl ArtworkEntry {
    /// True when the artwork's category or one of its tags equals `term`
    pub fn has_term(&self, term: &str) -> bool {
        self.category == term || self.tags.iter().any(|t| t.trim() == term)
    }
}

/// Display metadata for a category slug
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub name: String,
    pub description: String,
}

/// The loaded artwork collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub artworks: Vec<ArtworkEntry>,
    pub categories: HashMap<String, Category>,
}

impl Catalog {
    pub fn new(artworks: Vec<ArtworkEntry>) -> Self {
        Self {
            artworks,
            categories: HashMap::new(),
        }
    }

    /// Find an artwork by id
    pub fn find(&self, id: &str) -> Option<&ArtworkEntry> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Display name for a category slug, falling back to the slug itself
    pub fn category_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.categories
            .get(slug)
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(slug)
    }

    /// Featured artworks in catalog order
    pub fn featured(&self) -> impl Iterator<Item = &ArtworkEntry> {
        self.artworks.iter().filter(|a| a.featured)
    }

    /// Artworks offered for sale in catalog order
    pub fn available(&self) -> impl Iterator<Item = &ArtworkEntry> {
        self.artworks.iter().filter(|a| a.available)
    }
}
