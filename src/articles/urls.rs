// Start of file: /src/articles/urls.rs

// URL configuration for the articles feature

use once_cell::sync::Lazy;

use crate::routing::{path, RouteError, RouteTable};

/// Route name of the slug-keyed detail view (parameter: `slug`)
pub const ARTICLE_DETAIL: &str = "article_detail";
/// Route name of the listing view (no parameters)
pub const ARTICLE_LIST: &str = "article_list";

/// Handlers the article routes can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleView {
    List,
    Detail,
}

/// The article route table. The parameterized detail pattern is tried first;
/// the empty list pattern then answers the root only.
pub fn url_patterns() -> Result<RouteTable<ArticleView>, RouteError> {
    RouteTable::new(vec![
        path("<slug:slug>", ArticleView::Detail, ARTICLE_DETAIL)?,
        path("", ArticleView::List, ARTICLE_LIST)?,
    ])
}

/// Process-wide table, built on first use and read-only afterwards
pub fn routes() -> &'static RouteTable<ArticleView> {
    static ROUTES: Lazy<RouteTable<ArticleView>> =
        Lazy::new(|| url_patterns().expect("Article URL patterns are invalid"));
    &ROUTES
}


// End of file: /src/articles/urls.rs
