//! Content sources
//!
//! A `ContentSource` yields the raw JSON of a content file. The site's
//! pages fetch them over HTTP (see `atelier-client`); the serverless
//! functions read them from the deployed content directory.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{BlogPosts, Catalog, SiteConfig, Testimonials};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Request for {path} failed: {message}")]
    Request { path: String, message: String },

    #[error("Request for {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// The JSON files the site is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFile {
    Artworks,
    BlogPosts,
    SiteConfig,
    Testimonials,
}

impl ContentFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            ContentFile::Artworks => "artworks.json",
            ContentFile::BlogPosts => "blog-posts.json",
            ContentFile::SiteConfig => "site-config.json",
            ContentFile::Testimonials => "testimonials.json",
        }
    }

    /// Path the file is served from
    pub fn url_path(&self) -> String {
        format!("/content/{}", self.file_name())
    }
}

/// Source of raw content JSON
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_raw(&self, file: ContentFile) -> Result<String, ContentError>;
}

/// Reads content files from a directory on disk
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait::async_trait]
impl ContentSource for FsContentSource {
    async fn fetch_raw(&self, file: ContentFile) -> Result<String, ContentError> {
        let path = self.root.join(file.file_name());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ContentError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

async fn load<T: DeserializeOwned>(
    source: &dyn ContentSource,
    file: ContentFile,
) -> Result<T, ContentError> {
    let raw = source.fetch_raw(file).await?;
    serde_json::from_str(&raw).map_err(|e| {
        tracing::error!(file = file.file_name(), error = %e, "Content file is malformed");
        ContentError::Parse {
            path: file.url_path(),
            message: e.to_string(),
        }
    })
}

pub async fn load_catalog(source: &dyn ContentSource) -> Result<Catalog, ContentError> {
    let catalog: Catalog = load(source, ContentFile::Artworks).await?;
    tracing::debug!(artworks = catalog.artworks.len(), "Catalog loaded");
    Ok(catalog)
}

pub async fn load_blog(source: &dyn ContentSource) -> Result<BlogPosts, ContentError> {
    load(source, ContentFile::BlogPosts).await
}

pub async fn load_site_config(source: &dyn ContentSource) -> Result<SiteConfig, ContentError> {
    load(source, ContentFile::SiteConfig).await
}

pub async fn load_testimonials(source: &dyn ContentSource) -> Result<Testimonials, ContentError> {
    load(source, ContentFile::Testimonials).await
}
