// Start of file: /src/articles/catalog.rs

// In-memory article catalog backing the article views

use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::routing::Converter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
}

/// Articles ordered newest first. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    /// Builds a catalog, rejecting slugs the detail route could never serve
    /// and slugs used by more than one article
    pub fn new(mut articles: Vec<Article>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for article in &articles {
            if !Converter::Slug.accepts(&article.slug) {
                bail!("Article '{}' has an invalid slug '{}'", article.title, article.slug);
            }
            if !seen.insert(article.slug.as_str()) {
                bail!("Duplicate article slug '{}'", article.slug);
            }
        }

        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(Self { articles })
    }

    /// Loads a JSON array of articles from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path: &Path = path.as_ref();
        let raw: String = fs::read_to_string(path)
            .with_context(|| format!("Failed to read articles file {}", path.display()))?;
        let articles: Vec<Article> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid articles JSON in {}", path.display()))?;

        let catalog: Self = Self::new(articles)?;
        info!("Loaded {} articles from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn find(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}


// End of file: /src/articles/catalog.rs
