//! Sitemap generation
//!
//! The sitemap lists the site's static pages followed by one entry per
//! artwork offered for sale, each carrying an image extension block.

use std::fmt;

use chrono::NaiveDate;

use atelier_catalog::{ArtworkEntry, Catalog};

const URLSET_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
        xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">
"#;
const URLSET_CLOSE: &str = "</urlset>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeFreq::Weekly => write!(f, "weekly"),
            ChangeFreq::Monthly => write!(f, "monthly"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    pub path: &'static str,
    pub priority: &'static str,
    pub changefreq: ChangeFreq,
}

pub const STATIC_PAGES: [StaticPage; 8] = [
    StaticPage { path: "/", priority: "1.0", changefreq: ChangeFreq::Weekly },
    StaticPage { path: "/portfolio.html", priority: "0.9", changefreq: ChangeFreq::Weekly },
    StaticPage { path: "/shop.html", priority: "0.9", changefreq: ChangeFreq::Weekly },
    StaticPage { path: "/about.html", priority: "0.8", changefreq: ChangeFreq::Monthly },
    StaticPage { path: "/commissions.html", priority: "0.8", changefreq: ChangeFreq::Monthly },
    StaticPage { path: "/contact.html", priority: "0.7", changefreq: ChangeFreq::Monthly },
    StaticPage { path: "/blog.html", priority: "0.7", changefreq: ChangeFreq::Weekly },
    StaticPage { path: "/press.html", priority: "0.6", changefreq: ChangeFreq::Monthly },
];

const ARTWORK_PRIORITY: &str = "0.7";

/// Image extension attached to an artwork URL
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapImage {
    pub loc: String,
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFreq,
    pub priority: &'static str,
    pub image: Option<SitemapImage>,
}

impl SitemapUrl {
    fn for_page(base_url: &str, page: &StaticPage, today: &str) -> Self {
        Self {
            loc: format!("{}{}", base_url, page.path),
            lastmod: today.to_string(),
            changefreq: page.changefreq,
            priority: page.priority,
            image: None,
        }
    }

    fn for_artwork(base_url: &str, artwork: &ArtworkEntry, today: &str) -> Self {
        let lastmod = artwork
            .date_created
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(today);

        Self {
            loc: format!("{}/artwork/{}", base_url, artwork.slug),
            lastmod: lastmod.to_string(),
            changefreq: ChangeFreq::Monthly,
            priority: ARTWORK_PRIORITY,
            image: Some(SitemapImage {
                loc: format!("{}{}", base_url, artwork.images.full),
                title: artwork.title.clone(),
                caption: artwork.seo.alt_text.clone(),
            }),
        }
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&self.loc)));
        out.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(&self.lastmod)));
        out.push_str(&format!("    <changefreq>{}</changefreq>\n", self.changefreq));
        out.push_str(&format!("    <priority>{}</priority>\n", self.priority));
        if let Some(image) = &self.image {
            out.push_str("    <image:image>\n");
            out.push_str(&format!("      <image:loc>{}</image:loc>\n", escape_xml(&image.loc)));
            out.push_str(&format!(
                "      <image:title>{}</image:title>\n",
                escape_xml(&image.title)
            ));
            out.push_str(&format!(
                "      <image:caption>{}</image:caption>\n",
                escape_xml(&image.caption)
            ));
            out.push_str("    </image:image>\n");
        }
        out.push_str("  </url>\n");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    pub urls: Vec<SitemapUrl>,
}

impl Sitemap {
    /// Build the sitemap for `catalog` as of `today`
    pub fn build(base_url: &str, catalog: &Catalog, today: NaiveDate) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let today = today.format("%Y-%m-%d").to_string();

        let pages = STATIC_PAGES
            .iter()
            .map(|page| SitemapUrl::for_page(base_url, page, &today));
        let artworks = catalog
            .available()
            .map(|artwork| SitemapUrl::for_artwork(base_url, artwork, &today));

        Self {
            urls: pages.chain(artworks).collect(),
        }
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::from(URLSET_OPEN);
        for url in &self.urls {
            url.write_xml(&mut out);
        }
        out.push_str(URLSET_CLOSE);
        out
    }
}

/// Escape text for use in XML element content
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
