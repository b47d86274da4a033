// Start of file: /src/articles/mod.rs

/*
    * The articles feature: URL configuration, views, the in-memory catalog
    * they read from and the axum router that dispatches through the table.
*/

pub mod catalog;
pub mod routes;
pub mod urls;
pub mod views;

pub use catalog::{Article, ArticleCatalog};
pub use routes::article_routes;
pub use urls::{ArticleView, ARTICLE_DETAIL, ARTICLE_LIST};

// End of file: /src/articles/mod.rs
