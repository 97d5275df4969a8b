// Unit tests for the bookmark models.
//
// Tests serde shapes against the JSON the server actually sends —
// camelCase field names, nullable fields, and extra fields the client
// ignores — all without network access.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use satchel::reader::bookmarks::{Bookmark, IconResponse, NewBookmark};

#[test]
fn deserialize_full_bookmark() {
    let json = r#"{
        "id": 12,
        "title": "The Rust Blog",
        "url": "https://blog.rust-lang.org",
        "description": "Official release announcements",
        "hasUpdate": true,
        "lastFetchedAt": "2026-03-01T08:30:00",
        "lastContentHash": "9f2c4a"
    }"#;
    let bookmark: Bookmark = serde_json::from_str(json).unwrap();
    assert_eq!(bookmark.id, 12);
    assert_eq!(bookmark.title, "The Rust Blog");
    assert_eq!(bookmark.url, "https://blog.rust-lang.org");
    assert_eq!(
        bookmark.description.as_deref(),
        Some("Official release announcements")
    );
    assert!(bookmark.has_update);
    assert_eq!(
        bookmark.last_fetched_at.unwrap().to_string(),
        "2026-03-01 08:30:00"
    );
    assert_eq!(bookmark.last_content_hash.as_deref(), Some("9f2c4a"));
}

#[test]
fn deserialize_bookmark_with_nulls_and_missing_fields() {
    // A freshly created bookmark has no fetch history yet.
    let json = r#"{"id": 1, "title": "t", "url": "https://example.com", "description": null, "hasUpdate": false}"#;
    let bookmark: Bookmark = serde_json::from_str(json).unwrap();
    assert!(bookmark.description.is_none());
    assert!(!bookmark.has_update);
    assert!(bookmark.last_fetched_at.is_none());
    assert!(bookmark.last_content_hash.is_none());
}

#[test]
fn deserialize_bookmark_ignores_icon_blob() {
    // The server serializes the stored favicon inline; the client
    // fetches it through the icon endpoint instead.
    let json = r#"{
        "id": 3,
        "title": "t",
        "url": "https://example.com",
        "hasUpdate": false,
        "icon": "aWNvbi1ieXRlcw=="
    }"#;
    let bookmark: Bookmark = serde_json::from_str(json).unwrap();
    assert_eq!(bookmark.id, 3);
}

#[test]
fn deserialize_bookmark_list() {
    let json = r#"[
        {"id": 2, "title": "b", "url": "https://b.example", "hasUpdate": true},
        {"id": 1, "title": "a", "url": "https://a.example", "hasUpdate": false}
    ]"#;
    let bookmarks: Vec<Bookmark> = serde_json::from_str(json).unwrap();
    assert_eq!(bookmarks.len(), 2);
    assert_eq!(bookmarks[0].id, 2);
    assert_eq!(bookmarks.iter().filter(|b| b.has_update).count(), 1);
}

#[test]
fn bookmark_roundtrips_for_update() {
    // Updates PUT the full record back; the wire names and the flag
    // and fetch-history fields must survive untouched.
    let json = r#"{
        "id": 12,
        "title": "The Rust Blog",
        "url": "https://blog.rust-lang.org",
        "description": "Official release announcements",
        "hasUpdate": true,
        "lastFetchedAt": "2026-03-01T08:30:00",
        "lastContentHash": "9f2c4a"
    }"#;
    let mut bookmark: Bookmark = serde_json::from_str(json).unwrap();
    bookmark.title = "Rust Blog".to_string();

    let value = serde_json::to_value(&bookmark).unwrap();
    assert_eq!(value["title"], "Rust Blog");
    assert_eq!(value["hasUpdate"], true);
    assert_eq!(value["lastContentHash"], "9f2c4a");
    assert_eq!(value["lastFetchedAt"], "2026-03-01T08:30:00");
}

#[test]
fn serialize_new_bookmark_with_description() {
    let bookmark = NewBookmark {
        title: "Docs".to_string(),
        url: "https://docs.rs".to_string(),
        description: Some("crate docs".to_string()),
    };
    let value = serde_json::to_value(&bookmark).unwrap();
    assert_eq!(value["title"], "Docs");
    assert_eq!(value["url"], "https://docs.rs");
    assert_eq!(value["description"], "crate docs");
}

#[test]
fn serialize_new_bookmark_omits_empty_description() {
    let bookmark = NewBookmark {
        title: "Docs".to_string(),
        url: "https://docs.rs".to_string(),
        description: None,
    };
    let value = serde_json::to_value(&bookmark).unwrap();
    assert!(value.get("description").is_none());
}

#[test]
fn created_id_is_a_bare_json_number() {
    // The create endpoint replies with just the new id.
    let id: i64 = serde_json::from_str("42").unwrap();
    assert_eq!(id, 42);
}

#[test]
fn deserialize_icon_response_success() {
    let json = r#"{"success": true, "iconBase64": "aWNvbi1ieXRlcw==", "message": "ok"}"#;
    let response: IconResponse = serde_json::from_str(json).unwrap();
    assert!(response.success);

    let bytes = STANDARD
        .decode(response.icon_base64.unwrap().as_bytes())
        .unwrap();
    assert_eq!(bytes, b"icon-bytes");
}

#[test]
fn deserialize_icon_response_failure() {
    let json = r#"{"success": false, "iconBase64": null, "message": "icon not set"}"#;
    let response: IconResponse = serde_json::from_str(json).unwrap();
    assert!(!response.success);
    assert!(response.icon_base64.is_none());
    assert_eq!(response.message, "icon not set");
}
