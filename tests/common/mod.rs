//! tests/common/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

#![allow(dead_code)]

use articles_router::articles::{Article, ArticleCatalog};
use articles_router::config::{environment::EnvironmentVariables, state::AppState};
use articles_router::core::server::create_app;

use axum::{serve, Router};
use chrono::{TimeZone, Utc};
use tokio::net::TcpListener as TokioTcpListener;

pub fn article(slug: &str, title: &str, day: u32) -> Article {
    Article {
        slug: slug.to_string(),
        title: title.to_string(),
        body: format!("Body of {title}"),
        published_at: Utc.with_ymd_and_hms(2024, 5, day, 8, 0, 0).unwrap(),
    }
}

/// Catalog used by most tests: two articles, "second-post" being the newest.
pub fn sample_catalog() -> ArticleCatalog {
    ArticleCatalog::new(vec![
        article("my-first-post", "My first post", 1),
        article("second-post", "Second post", 2),
    ])
    .expect("Sample catalog is valid")
}

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app(catalog: ArticleCatalog) -> String {
    let state: AppState = AppState::new(EnvironmentVariables::default(), catalog);
    let app: Router = create_app(state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

/// GETs `path` and returns the status plus the parsed JSON envelope.
pub async fn get_json(base_url: &str, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}{}", base_url, path))
        .send()
        .await
        .expect("Failed to execute request.");

    let status: reqwest::StatusCode = resp.status();
    let body: String = resp.text().await.unwrap();
    (status, serde_json::from_str(&body).unwrap())
}
