//! Instagram feed block
//!
//! Shows up to six recent posts from the feed function, or a follow
//! prompt over placeholder tiles when the feed is unavailable or empty.

use serde::{Deserialize, Serialize};

pub const INSTAGRAM_HANDLE: &str = "jolenecasko";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/jolenecasko/";
pub const FEED_PATH: &str = "/.netlify/functions/instagram-feed";

const MAX_POSTS: usize = 6;
const PLACEHOLDER_TILES: usize = 6;
const ALT_MAX_CHARS: usize = 100;
const DEFAULT_ALT: &str = "Instagram post";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedPost {
    pub permalink: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comments_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub posts: Vec<FeedPost>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostTile {
    pub href: String,
    pub image: String,
    pub alt: String,
    pub likes: String,
    pub comments: String,
}

impl PostTile {
    fn from_post(post: &FeedPost) -> Self {
        let image = [&post.thumbnail, &post.media_url]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .find(|url| !url.is_empty())
            .unwrap_or_default();

        let alt = match post.caption.as_deref() {
            Some(caption) if !caption.is_empty() => caption.chars().take(ALT_MAX_CHARS).collect(),
            _ => DEFAULT_ALT.to_string(),
        };

        Self {
            href: post.permalink.clone(),
            image: image.to_string(),
            alt,
            likes: format_count(post.like_count.unwrap_or(0)),
            comments: format_count(post.comments_count.unwrap_or(0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InstagramFeed {
    Posts { tiles: Vec<PostTile> },
    /// Every placeholder links to the profile
    Fallback { placeholders: usize },
}

impl InstagramFeed {
    /// `None` when the feed function could not be reached or failed
    pub fn from_response(response: Option<FeedResponse>) -> Self {
        match response {
            Some(feed) if !feed.posts.is_empty() => InstagramFeed::Posts {
                tiles: feed
                    .posts
                    .iter()
                    .take(MAX_POSTS)
                    .map(PostTile::from_post)
                    .collect(),
            },
            _ => InstagramFeed::fallback(),
        }
    }

    pub fn fallback() -> Self {
        InstagramFeed::Fallback {
            placeholders: PLACEHOLDER_TILES,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            InstagramFeed::Posts { .. } => "Latest from Instagram",
            InstagramFeed::Fallback { .. } => "Follow on Instagram",
        }
    }

    pub fn handle_label(&self) -> String {
        format!("@{}", INSTAGRAM_HANDLE)
    }
}

/// `1234` -> `1.2K`, `2500000` -> `2.5M`
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
