// Bookmark operations — list, create, update, delete, mark-read, icons.
//
// Free functions over ReaderClient, one HTTP request each. Records pass
// through as the server returns them; validation, uniqueness, and
// lifecycle are entirely server-side.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::client::ReaderClient;

/// A bookmark as returned by the reader API.
///
/// The server sends more fields than these (the icon blob among them);
/// unknown fields are ignored on deserialization. Serialize is derived
/// because updates send the full record back — a partial update would
/// reset the flag and fetch-history columns server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    /// Set server-side when a linked subscription detects a change.
    #[serde(default)]
    pub has_update: bool,
    pub last_fetched_at: Option<NaiveDateTime>,
    pub last_content_hash: Option<String>,
}

/// Fields the client sends when creating a bookmark.
#[derive(Debug, Clone, Serialize)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response from the icon endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct IconResponse {
    pub success: bool,
    #[serde(rename = "iconBase64")]
    pub icon_base64: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Fetch all bookmarks (the server orders them newest first).
pub async fn fetch_bookmarks(client: &ReaderClient) -> Result<Vec<Bookmark>> {
    let bookmarks: Vec<Bookmark> = client
        .get_json("bookmarks")
        .await
        .context("Failed to fetch bookmarks")?;

    debug!(count = bookmarks.len(), "Fetched bookmarks");
    Ok(bookmarks)
}

/// Create a bookmark. The server replies with the new record's id.
pub async fn add_bookmark(client: &ReaderClient, bookmark: &NewBookmark) -> Result<i64> {
    let id: i64 = client
        .post_json("bookmarks", bookmark)
        .await
        .context("Failed to create bookmark")?;

    info!(id = id, url = %bookmark.url, "Created bookmark");
    Ok(id)
}

/// Replace a bookmark record.
pub async fn update_bookmark(client: &ReaderClient, id: i64, bookmark: &Bookmark) -> Result<()> {
    client
        .put_json(&format!("bookmarks/{id}"), bookmark)
        .await
        .with_context(|| format!("Failed to update bookmark {id}"))
}

/// Delete a bookmark.
pub async fn delete_bookmark(client: &ReaderClient, id: i64) -> Result<()> {
    client
        .delete(&format!("bookmarks/{id}"))
        .await
        .with_context(|| format!("Failed to delete bookmark {id}"))
}

/// Mark a bookmark read, clearing its server-side update flag.
///
/// Empty POST body; idempotent on the server.
pub async fn mark_read(client: &ReaderClient, id: i64) -> Result<()> {
    client
        .post_unit(&format!("bookmarks/{id}/read"))
        .await
        .with_context(|| format!("Failed to mark bookmark {id} read"))
}

/// Fetch the stored favicon for a bookmark, base64-coded.
pub async fn fetch_icon(client: &ReaderClient, id: i64) -> Result<IconResponse> {
    client
        .get_json(&format!("bookmarks/{id}/icon"))
        .await
        .with_context(|| format!("Failed to fetch icon for bookmark {id}"))
}

/// Ask the server to re-scrape the favicon from the bookmarked page.
pub async fn refresh_icon(client: &ReaderClient, id: i64) -> Result<IconResponse> {
    client
        .post_empty(&format!("bookmarks/{id}/fetch-icon"), &[])
        .await
        .with_context(|| format!("Failed to refresh icon for bookmark {id}"))
}
