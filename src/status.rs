// Reader status display — endpoint, collection counts, unread bookmarks.

use anyhow::Result;

use crate::reader::bookmarks;
use crate::reader::client::ReaderClient;
use crate::reader::subscriptions;

/// Display reader status in the terminal.
pub async fn show(client: &ReaderClient, api_url: &str) -> Result<()> {
    println!("Reader API: {api_url}");

    let bookmarks = match bookmarks::fetch_bookmarks(client).await {
        Ok(list) => list,
        Err(e) => {
            println!("Server: unreachable ({e})");
            println!("\nSet SATCHEL_API_URL or start the reader server, then retry.");
            return Ok(());
        }
    };

    let unread = bookmarks.iter().filter(|b| b.has_update).count();
    println!(
        "Bookmarks: {} total, {} with updates",
        bookmarks.len(),
        unread
    );

    let subs = subscriptions::fetch_subscriptions(client).await?;
    println!("Subscriptions: {} enabled", subs.len());

    // Surface the stalest subscription so overdue checks stand out.
    // Never-checked sorts first.
    if let Some(stalest) = subs.iter().min_by_key(|s| s.last_checked_at) {
        match stalest.last_checked_at {
            Some(at) => println!("Least recently checked: {} ({at})", stalest.url),
            None => println!("Never checked yet: {}", stalest.url),
        }
    }

    Ok(())
}
