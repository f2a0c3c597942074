//! Integration tests for `POST /search`

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use songbridge_test_utils::SongFixture;

#[tokio::test]
async fn test_search_returns_watch_url() {
    let app = TestApp::spawn().await;
    app.catalog
        .mock_songs(&[SongFixture::new("dQw4w9WgXcQ", "Never Gonna Give You Up", &["Rick Astley"])])
        .await;

    let (status, body) = app
        .post_json(
            "/search",
            json!({"song_title": "Never Gonna Give You Up", "artist_name": "Rick Astley"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "url": "https://music.youtube.com/watch?v=dQw4w9WgXcQ",
            "title": "Never Gonna Give You Up",
            "artist": "Rick Astley"
        })
    );
}

#[tokio::test]
async fn test_search_prefers_matching_artist() {
    let app = TestApp::spawn().await;
    app.catalog
        .mock_songs(&[
            SongFixture::new("cover1", "Song", &["Other"]),
            SongFixture::new("orig1", "Song", &["Artist X"]),
        ])
        .await;

    let (status, body) = app
        .post_json("/search", json!({"song_title": "Song", "artist_name": "artist x"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://music.youtube.com/watch?v=orig1");
    assert_eq!(body["artist"], "Artist X");
}

#[tokio::test]
async fn test_search_falls_back_to_first_result() {
    let app = TestApp::spawn().await;
    app.catalog
        .mock_songs(&[
            SongFixture::new("first", "Song", &["Someone"]),
            SongFixture::new("second", "Song", &["Someone Else"]),
        ])
        .await;

    let (status, body) = app
        .post_json("/search", json!({"song_title": "Song", "artist_name": "Nobody"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://music.youtube.com/watch?v=first");
}

#[tokio::test]
async fn test_search_is_repeatable() {
    let app = TestApp::spawn().await;
    app.catalog
        .mock_songs(&[SongFixture::new("same", "Song", &["Band"])])
        .await;
    let request = json!({"song_title": "Song", "artist_name": "Band"});

    let (_, first) = app.post_json("/search", request.clone()).await;
    let (_, second) = app.post_json("/search", request).await;

    assert_eq!(first["url"], second["url"]);
    assert_eq!(app.catalog.search_calls().await, 2);
}

#[tokio::test]
async fn test_search_missing_fields_make_no_upstream_call() {
    let app = TestApp::spawn().await;

    for body in [
        json!({}),
        json!({"song_title": "Song"}),
        json!({"artist_name": "Band"}),
        json!({"song_title": "   ", "artist_name": "Band"}),
        json!({"song_title": "Song", "artist_name": ""}),
    ] {
        let (status, response) = app.post_json("/search", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["code"], "MISSING_FIELD");
        assert!(response["error"].is_string());
    }

    assert_eq!(app.catalog.search_calls().await, 0);
}

#[tokio::test]
async fn test_search_malformed_json() {
    let app = TestApp::spawn().await;

    let (status, body) = app.post_raw("/search", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_BODY");
    assert_eq!(app.catalog.search_calls().await, 0);
}

#[tokio::test]
async fn test_search_no_results_is_not_found() {
    let app = TestApp::spawn().await;
    app.catalog.mock_no_results().await;

    let (status, body) = app
        .post_json("/search", json!({"song_title": "Nothing", "artist_name": "Nobody"}))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_missing_video_id_is_not_found() {
    let app = TestApp::spawn().await;
    app.catalog
        .mock_songs(&[SongFixture::without_video_id("Song", &["Band"])])
        .await;

    let (status, body) = app
        .post_json("/search", json!({"song_title": "Song", "artist_name": "Band"}))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_upstream_failure_is_server_error() {
    let app = TestApp::spawn().await;
    app.catalog.mock_failure(503).await;

    let (status, body) = app
        .post_json("/search", json!({"song_title": "Song", "artist_name": "Band"}))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "CATALOG_ERROR");
}

#[tokio::test]
async fn test_search_upstream_timeout_is_server_error() {
    let app = TestApp::spawn().await;
    app.catalog.mock_timeout(2_500).await;

    let (status, _) = app
        .post_json("/search", json!({"song_title": "Song", "artist_name": "Band"}))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_search_long_title_is_forwarded() {
    let app = TestApp::spawn().await;
    app.catalog
        .mock_songs(&[SongFixture::new("long1", "Long Song", &["Band"])])
        .await;

    let (status, body) = app
        .post_json(
            "/search",
            json!({"song_title": "a".repeat(600), "artist_name": "Band"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://music.youtube.com/watch?v=long1");
    assert_eq!(app.catalog.search_calls().await, 1);
}
