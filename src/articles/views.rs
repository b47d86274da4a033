// Start of file: /src/articles/views.rs

// Article list and detail views

use axum::http::StatusCode;
use serde_json::{json, Value};
use tracing::{error, info, instrument};

use crate::articles::urls::{ARTICLE_DETAIL, ARTICLE_LIST};
use crate::config::state::AppState;
use crate::routing::RouteError;
use crate::utils::response_handler::HandlerResponse;

fn reverse_failed(err: RouteError) -> HandlerResponse {
    error!("Reverse URL lookup failed: {err}");
    HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR).message("Failed to build article URL")
}

/// Lists every article, newest first, each with its detail URL
#[instrument(skip(state))]
pub async fn article_list(state: &AppState) -> HandlerResponse {
    let mut articles: Vec<Value> = Vec::with_capacity(state.catalog.len());

    for article in state.catalog.all() {
        let url: String = match state.routes.reverse(ARTICLE_DETAIL, &[("slug", article.slug.as_str())]) {
            Ok(url) => url,
            Err(err) => return reverse_failed(err),
        };

        articles.push(json!({
            "slug": article.slug,
            "title": article.title,
            "published_at": article.published_at,
            "url": url,
        }));
    }

    info!("Listing {} articles", articles.len());

    HandlerResponse::new(StatusCode::OK)
        .data(json!({ "count": articles.len(), "articles": articles }))
}

/// Shows one article; 404 when the slug is unknown
#[instrument(skip(state))]
pub async fn article_detail(state: &AppState, slug: &str) -> HandlerResponse {
    let Some(article) = state.catalog.find(slug) else {
        info!("No article with slug '{slug}'");
        return HandlerResponse::new(StatusCode::NOT_FOUND)
            .message(format!("No article found for slug '{slug}'"));
    };

    let list_url: String = match state.routes.reverse(ARTICLE_LIST, &[]) {
        Ok(url) => url,
        Err(err) => return reverse_failed(err),
    };

    HandlerResponse::new(StatusCode::OK).data(json!({
        "article": article,
        "list_url": list_url,
    }))
}

// End of file: /src/articles/views.rs
