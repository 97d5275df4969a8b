// Subscription operations — list, create, update, delete, check-now,
// plus the manual fetch probe.
//
// A subscription tells the server to poll a page on a period and mail
// the configured address when the content hash changes. The client only
// triggers and reports those checks; scheduling, diffing, and
// notification all run server-side.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::client::ReaderClient;

/// A subscription as returned by the reader API.
///
/// Listing only returns enabled subscriptions. Serialize is derived
/// because updates send the full record back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    /// Bookmark whose update flag is raised when this subscription
    /// detects a change.
    pub bookmark_id: Option<i64>,
    pub url: String,
    pub notify_email: String,
    pub period_hours: i64,
    pub enabled: bool,
    pub last_checked_at: Option<NaiveDateTime>,
    pub last_content_hash: Option<String>,
}

/// Fields the client sends when creating a subscription.
///
/// The server rejects an empty url or notify_email and defaults the
/// period to 24 hours when omitted.
#[derive(Debug, Clone, Serialize)]
pub struct NewSubscription {
    pub url: String,
    pub notify_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_hours: Option<i64>,
}

/// Outcome of a manually triggered subscription check.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckOutcome {
    pub success: bool,
    pub updated: bool,
    #[serde(rename = "emailSent")]
    pub email_sent: bool,
    #[serde(default)]
    pub message: String,
    pub url: Option<String>,
}

/// Result of probing the server's fetcher against an arbitrary URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchProbe {
    pub success: bool,
    pub content: Option<String>,
    pub content_hash: Option<String>,
    /// Favicon bytes, base64-coded on the wire.
    pub icon_bytes: Option<String>,
    pub fetched_at: Option<NaiveDateTime>,
    pub error: Option<String>,
}

/// Fetch all enabled subscriptions.
pub async fn fetch_subscriptions(client: &ReaderClient) -> Result<Vec<Subscription>> {
    let subscriptions: Vec<Subscription> = client
        .get_json("subscriptions")
        .await
        .context("Failed to fetch subscriptions")?;

    debug!(count = subscriptions.len(), "Fetched subscriptions");
    Ok(subscriptions)
}

/// Create a subscription. The server replies with the new record's id.
///
/// Server-side validation errors (empty url, empty notify_email) come
/// back verbatim in the error.
pub async fn add_subscription(client: &ReaderClient, subscription: &NewSubscription) -> Result<i64> {
    let id: i64 = client
        .post_json("subscriptions", subscription)
        .await
        .context("Failed to create subscription")?;

    info!(id = id, url = %subscription.url, "Created subscription");
    Ok(id)
}

/// Replace a subscription record.
pub async fn update_subscription(
    client: &ReaderClient,
    id: i64,
    subscription: &Subscription,
) -> Result<()> {
    client
        .put_json(&format!("subscriptions/{id}"), subscription)
        .await
        .with_context(|| format!("Failed to update subscription {id}"))
}

/// Delete a subscription.
pub async fn delete_subscription(client: &ReaderClient, id: i64) -> Result<()> {
    client
        .delete(&format!("subscriptions/{id}"))
        .await
        .with_context(|| format!("Failed to delete subscription {id}"))
}

/// Trigger an immediate check of one subscription.
///
/// Empty POST body. The server fetches the page, compares content
/// hashes, and sends the notification mail itself — the outcome here
/// is a report, not an instruction.
pub async fn check_now(client: &ReaderClient, id: i64) -> Result<CheckOutcome> {
    client
        .post_empty(&format!("subscriptions/{id}/check-now"), &[])
        .await
        .with_context(|| format!("Failed to check subscription {id}"))
}

/// Run the server's fetcher against a URL without creating anything.
///
/// Useful to confirm a page is fetchable before subscribing to it.
pub async fn probe_fetch(client: &ReaderClient, url: &str) -> Result<FetchProbe> {
    client
        .post_empty("fetch", &[("url", url)])
        .await
        .with_context(|| format!("Failed to probe fetch for {url}"))
}
