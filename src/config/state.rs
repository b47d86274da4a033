// Start of file: /src/config/state.rs

// Application state shared by every request handler

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::articles::{catalog::ArticleCatalog, urls::{self, ArticleView}};
use crate::config::environment::EnvironmentVariables;
use crate::routing::RouteTable;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub catalog: Arc<ArticleCatalog>,
    pub routes: &'static RouteTable<ArticleView>,
}

impl AppState {
    pub fn new(environment: EnvironmentVariables, catalog: ArticleCatalog) -> Self {
        Self {
            environment: Arc::new(environment),
            catalog: Arc::new(catalog),
            routes: urls::routes(),
        }
    }

    /// Builds the state from the environment singleton, loading the catalog
    /// from `ARTICLES_FILE` when it is set
    pub fn from_env() -> Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::instance().clone();

        let catalog: ArticleCatalog = match environment.articles_file.as_deref() {
            Some(path) => ArticleCatalog::from_json_file(path)?,
            None => {
                warn!("ARTICLES_FILE not set, starting with an empty catalog");
                ArticleCatalog::default()
            }
        };

        let state: Self = Self::new(environment, catalog);
        info!(
            "Application state ready: {} routes, {} articles",
            state.routes.entries().len(),
            state.catalog.len()
        );
        Ok(state)
    }
}

// End of file: /src/config/state.rs
