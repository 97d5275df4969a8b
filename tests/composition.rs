// Composition tests — config, client, and display helpers chained
// together without any network access.

use satchel::config::Config;
use satchel::output::truncate_chars;
use satchel::reader::bookmarks::Bookmark;
use satchel::reader::client::{ReaderClient, DEFAULT_API_URL};

// ============================================================
// Chain: env -> Config -> ReaderClient -> endpoint
// ============================================================

#[test]
fn config_default_and_override_flow_into_the_client() {
    // Both cases run in one test — env vars are process-global and the
    // test harness runs tests in parallel.
    std::env::remove_var("SATCHEL_API_URL");
    let config = Config::load().unwrap();
    assert_eq!(config.api_url, DEFAULT_API_URL);

    std::env::set_var("SATCHEL_API_URL", "https://reader.example.net/api/");
    let config = Config::load().unwrap();
    assert_eq!(config.api_url, "https://reader.example.net/api/");

    // The client normalizes the trailing slash away.
    let client = ReaderClient::new(&config.api_url).unwrap();
    assert_eq!(
        client.endpoint("subscriptions"),
        "https://reader.example.net/api/subscriptions"
    );

    std::env::remove_var("SATCHEL_API_URL");
}

// ============================================================
// Chain: server JSON -> models -> unread filter
// ============================================================

#[test]
fn unread_filter_over_deserialized_bookmarks() {
    let json = r#"[
        {"id": 3, "title": "c", "url": "https://c.example", "hasUpdate": true},
        {"id": 2, "title": "b", "url": "https://b.example", "hasUpdate": false},
        {"id": 1, "title": "a", "url": "https://a.example", "hasUpdate": true}
    ]"#;
    let mut bookmarks: Vec<Bookmark> = serde_json::from_str(json).unwrap();
    bookmarks.retain(|b| b.has_update);

    assert_eq!(bookmarks.len(), 2);
    assert!(bookmarks.iter().all(|b| b.has_update));
    assert_eq!(bookmarks[0].id, 3);
}

// ============================================================
// Display helpers
// ============================================================

#[test]
fn truncate_chars_leaves_short_text_alone() {
    assert_eq!(truncate_chars("short title", 32), "short title");
}

#[test]
fn truncate_chars_appends_ellipsis() {
    let long = "a".repeat(50);
    let truncated = truncate_chars(&long, 32);
    assert_eq!(truncated.chars().count(), 35);
    assert!(truncated.ends_with("..."));
}

#[test]
fn truncate_chars_respects_multibyte_boundaries() {
    let title = "书签阅读器 — ブックマーク読者アプリケーション";
    let truncated = truncate_chars(title, 8);
    assert!(truncated.ends_with("..."));
    assert_eq!(truncated.chars().count(), 11);
}
