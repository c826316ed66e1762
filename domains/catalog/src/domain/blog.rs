//! Blog posts from `content/blog-posts.json`

use serde::{Deserialize, Serialize};

use super::format::{format_day, sort_key};

/// Listing cards show at most this many tags
pub const LISTING_TAG_LIMIT: usize = 3;

/// Related-post section shows at most this many posts
pub const RELATED_POST_LIMIT: usize = 3;

/// Where a missing post redirects to
pub const BLOG_LISTING_PATH: &str = "/blog.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogImage {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogSeo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date_published: String,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: Option<BlogImage>,
    #[serde(default)]
    pub seo: BlogSeo,
}

impl BlogPost {
    /// Body split into paragraphs on blank lines
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Document title for the post page
    pub fn page_title(&self, site_author: &str) -> String {
        self.seo
            .meta_title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("{} - {}", self.title, site_author))
    }

    /// Publication date as shown on cards, e.g. `March 5, 2024`
    pub fn display_date(&self) -> String {
        format_day(&self.date_published).unwrap_or_else(|| self.date_published.clone())
    }

    /// Tags shown on the listing card
    pub fn listing_tags(&self) -> &[String] {
        let end = self.tags.len().min(LISTING_TAG_LIMIT);
        &self.tags[..end]
    }

    /// Relative URL of the post page
    pub fn path(&self) -> String {
        format!("/blog/{}.html", self.slug)
    }

    fn shares_tag_with(&self, other: &BlogPost) -> bool {
        self.tags.iter().any(|t| other.tags.contains(t))
    }
}

/// Raw content file shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPosts {
    pub posts: Vec<BlogPost>,
}

/// Result of resolving a post page by slug
#[derive(Debug, PartialEq)]
pub enum BlogPostLookup<'a> {
    Found(&'a BlogPost),
    Redirect(&'static str),
}

/// Read-only view over loaded posts
#[derive(Debug, Clone)]
pub struct BlogIndex {
    posts: Vec<BlogPost>,
}

impl BlogIndex {
    pub fn new(posts: BlogPosts) -> Self {
        Self { posts: posts.posts }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts for the listing page, newest first
    pub fn listing(&self) -> Vec<&BlogPost> {
        let mut sorted: Vec<&BlogPost> = self.posts.iter().collect();
        sorted.sort_by_key(|p| std::cmp::Reverse(sort_key(&p.date_published)));
        sorted
    }

    /// Resolve a post page; unknown slugs go back to the listing
    pub fn lookup(&self, slug: &str) -> BlogPostLookup<'_> {
        match self.posts.iter().find(|p| p.slug == slug) {
            Some(post) => BlogPostLookup::Found(post),
            None => BlogPostLookup::Redirect(BLOG_LISTING_PATH),
        }
    }

    /// Other posts sharing at least one tag, in source order
    pub fn related(&self, current: &BlogPost) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.id != current.id)
            .filter(|p| p.shares_tag_with(current))
            .take(RELATED_POST_LIMIT)
            .collect()
    }
}
