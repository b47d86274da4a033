//! tests/articles.rs
//! End-to-end checks of the article routes over HTTP.

mod common;

use articles_router::articles::ArticleCatalog;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn root_lists_articles_newest_first() {
    let base_url: String = common::spawn_app(common::sample_catalog());

    let (status, json) = common::get_json(&base_url, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    assert_eq!(json["code"], 200);
    assert_eq!(json["data"]["count"], 2);
    assert_eq!(json["data"]["articles"][0]["slug"], "second-post");
    assert_eq!(json["data"]["articles"][0]["url"], "/second-post");
    assert_eq!(json["data"]["articles"][1]["url"], "/my-first-post");
}

#[tokio::test]
async fn slug_path_shows_the_article() {
    let base_url: String = common::spawn_app(common::sample_catalog());

    let (status, json) = common::get_json(&base_url, "/my-first-post").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["article"]["slug"], "my-first-post");
    assert_eq!(json["data"]["article"]["title"], "My first post");
    assert_eq!(json["data"]["list_url"], "/");
}

#[tokio::test]
async fn listed_urls_lead_to_their_articles() {
    let base_url: String = common::spawn_app(common::sample_catalog());

    let (_, listing) = common::get_json(&base_url, "/").await;
    let articles: &Vec<Value> = listing["data"]["articles"].as_array().unwrap();

    for entry in articles {
        let url: &str = entry["url"].as_str().unwrap();
        let (status, detail) = common::get_json(&base_url, url).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["data"]["article"]["slug"], entry["slug"]);
    }
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let base_url: String = common::spawn_app(common::sample_catalog());

    let (status, json) = common::get_json(&base_url, "/no-such-post").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert_eq!(json["messages"][0], "No article found for slug 'no-such-post'");
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let base_url: String = common::spawn_app(ArticleCatalog::default());

    let (status, json) = common::get_json(&base_url, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["count"], 0);
    assert_eq!(json["data"]["articles"], Value::Array(vec![]));
}

#[tokio::test]
async fn paths_no_route_matches_are_404() {
    let base_url: String = common::spawn_app(common::sample_catalog());

    for path in ["/a/b", "/two%20words", "/my-first-post/", "/favicon.ico"] {
        let (status, json) = common::get_json(&base_url, path).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "path {path}");
        assert_eq!(json["code"], 404);
        assert_eq!(json["data"], Value::Null);
    }
}

#[tokio::test]
async fn percent_encoded_slug_reaches_the_detail_view() {
    let base_url: String = common::spawn_app(common::sample_catalog());

    let (status, json) = common::get_json(&base_url, "/my%2Dfirst-post").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["article"]["slug"], "my-first-post");
}
