// Start of file: /src/articles/routes.rs

/*
    * Mounts the articles feature on axum. Every GET path is handed to the
    * article route table, which decides between the list and detail views.
*/

use std::borrow::Cow;

use axum::{extract::State, http::{StatusCode, Uri}, routing::get, Router};
use percent_encoding::percent_decode_str;
use tracing::{debug, instrument};

use crate::articles::{urls::ArticleView, views};
use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dispatch_article_request))
        .route("/{*path}", get(dispatch_article_request))
}

/// Percent-decodes the request path; `None` when the bytes are not UTF-8
fn decode_request_path(raw: &str) -> Option<Cow<'_, str>> {
    percent_decode_str(raw).decode_utf8().ok()
}

#[instrument(skip(state, uri), fields(path = %uri.path()))]
async fn dispatch_article_request(State(state): State<AppState>, uri: Uri) -> HandlerResponse {
    let Some(request_path) = decode_request_path(uri.path()) else {
        debug!("Request path is not valid UTF-8 once decoded");
        return HandlerResponse::new(StatusCode::NOT_FOUND)
            .message(format!("no route matches path '{}'", uri.path()));
    };

    let resolved = match state.routes.resolve(&request_path) {
        Ok(resolved) => resolved,
        Err(err) => {
            debug!("{err}");
            return HandlerResponse::new(StatusCode::NOT_FOUND).message(err.to_string());
        }
    };

    debug!("Dispatching to route '{}'", resolved.name);

    match (*resolved.handler, resolved.params.get("slug")) {
        (ArticleView::List, _) => views::article_list(&state).await,
        (ArticleView::Detail, Some(slug)) => views::article_detail(&state, slug).await,
        (ArticleView::Detail, None) => HandlerResponse::new(StatusCode::NOT_FOUND)
            .message("Article route matched without a slug"),
    }
}


// End of file: /src/articles/routes.rs
