//! JSON-LD structured data and social meta tags

use serde::Serialize;
use serde_json::{json, Value};

use atelier_catalog::{Catalog, SiteConfig};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Pages that get a breadcrumb trail below Home
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Portfolio,
    Shop,
    Commissions,
    About,
    Blog,
    Other,
}

impl PageKind {
    /// Classify a request path such as `/shop.html`
    pub fn from_path(path: &str) -> Self {
        let path = path.to_ascii_lowercase();
        if path.contains("portfolio") {
            PageKind::Portfolio
        } else if path.contains("shop") {
            PageKind::Shop
        } else if path.contains("commissions") {
            PageKind::Commissions
        } else if path.contains("about") {
            PageKind::About
        } else if path.contains("blog") {
            PageKind::Blog
        } else if path.is_empty() || path == "/" || path == "/index.html" {
            PageKind::Home
        } else {
            PageKind::Other
        }
    }

    fn crumb(&self) -> Option<(&'static str, &'static str)> {
        match self {
            PageKind::Portfolio => Some(("Portfolio", "/portfolio.html")),
            PageKind::Shop => Some(("Shop", "/shop.html")),
            PageKind::Commissions => Some(("Commissions", "/commissions.html")),
            PageKind::About => Some(("About", "/about.html")),
            PageKind::Home | PageKind::Blog | PageKind::Other => None,
        }
    }
}

/// The artist as a schema.org `Person`
pub fn person_schema(config: &SiteConfig) -> Value {
    let site = &config.site;
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Person",
        "name": site.author,
        "url": site.url,
        "email": site.email,
        "jobTitle": "Digital Collage Artist",
        "description": site.description,
        "sameAs": config.profile_links(),
        "knowsAbout": [
            "Digital Collage",
            "Album Art",
            "Surreal Art",
            "Visual Art",
            "Graphic Design"
        ],
        "makesOffer": {
            "@type": "Offer",
            "itemOffered": {
                "@type": "Service",
                "name": "Custom Digital Collage Commission",
                "description": "Custom artwork for album covers, singles, and personal projects"
            }
        }
    })
}

/// `BreadcrumbList` for a page, `None` when the trail would only hold Home
pub fn breadcrumb_schema(site_url: &str, page: PageKind) -> Option<Value> {
    let (name, path) = page.crumb()?;
    let site_url = site_url.trim_end_matches('/');

    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": [
            {"@type": "ListItem", "position": 1, "name": "Home", "item": site_url},
            {"@type": "ListItem", "position": 2, "name": name, "item": format!("{}{}", site_url, path)},
        ]
    }))
}

/// `ItemList` of every artwork as a `CreativeWork`; available ones carry an offer
pub fn artwork_collection_schema(config: &SiteConfig, catalog: &Catalog) -> Value {
    let site_url = config.site.url.trim_end_matches('/');
    let artist = &config.site.author;

    let items: Vec<Value> = catalog
        .artworks
        .iter()
        .enumerate()
        .map(|(i, artwork)| {
            let mut work = json!({
                "@type": "CreativeWork",
                "@id": format!("{}/artwork/{}", site_url, artwork.slug),
                "name": artwork.title,
                "description": artwork.description,
                "image": format!("{}{}", site_url, artwork.images.full),
                "creator": {"@type": "Person", "name": artist},
                "dateCreated": artwork.date_created,
                "genre": artwork.category,
                "keywords": artwork.tags.join(", "),
            });
            if artwork.available {
                work["offers"] = json!({
                    "@type": "Offer",
                    "price": artwork
                        .pricing
                        .headline_price()
                        .map(|p| p.normalize().to_string()),
                    "priceCurrency": "USD",
                    "availability": "https://schema.org/InStock",
                    "url": format!("{}/shop.html", site_url),
                });
            }
            json!({"@type": "ListItem", "position": i + 1, "item": work})
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "name": "Digital Collage Portfolio",
        "description": format!("Collection of surreal digital collages by {}", artist),
        "numberOfItems": items.len(),
        "itemListElement": items,
    })
}

/// A `<meta>` tag keyed by `property` or `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub attribute: &'static str,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn property(key: &str, content: impl Into<String>) -> Self {
        Self {
            attribute: "property",
            key: key.to_string(),
            content: content.into(),
        }
    }

    fn name(key: &str, content: impl Into<String>) -> Self {
        Self {
            attribute: "name",
            key: key.to_string(),
            content: content.into(),
        }
    }
}

/// Open Graph and Twitter Card tags to add when a page lacks them.
/// `og` holds the page's existing `og:title`, `og:description` and
/// `og:image` values, which are mirrored into Twitter tags.
pub fn social_meta(config: &SiteConfig, page: PageKind, og: &[(&str, &str)]) -> Vec<MetaTag> {
    let handle = &config.seo.twitter_handle;
    let mut tags = vec![
        MetaTag::property("og:site_name", config.site.author.clone()),
        MetaTag::property("og:locale", "en_US"),
    ];
    if page == PageKind::Blog {
        tags.push(MetaTag::property("og:type", "article"));
        tags.push(MetaTag::property("article:author", config.site.author.clone()));
    }

    tags.push(MetaTag::name("twitter:card", "summary_large_image"));
    tags.push(MetaTag::name("twitter:site", handle.clone()));
    tags.push(MetaTag::name("twitter:creator", handle.clone()));
    for (key, content) in og {
        if let Some(suffix) = key.strip_prefix("og:") {
            if matches!(suffix, "title" | "description" | "image") && !content.is_empty() {
                tags.push(MetaTag::name(&format!("twitter:{}", suffix), *content));
            }
        }
    }
    tags
}
