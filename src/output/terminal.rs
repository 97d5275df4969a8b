// Colored terminal output for bookmark and subscription listings.
//
// This module handles all terminal-specific formatting: colors, tables,
// outcome summaries. The main.rs command handlers delegate here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use colored::Colorize;

use crate::output::truncate_chars;
use crate::reader::bookmarks::Bookmark;
use crate::reader::subscriptions::{CheckOutcome, FetchProbe, Subscription};

/// Display a bookmark table in the terminal.
pub fn display_bookmark_list(bookmarks: &[Bookmark]) {
    if bookmarks.is_empty() {
        println!("No bookmarks yet. Run `satchel add <url>` to create one.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Bookmarks ({}) ===", bookmarks.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}    {:<34} {}",
        "Id".dimmed(),
        "Title".dimmed(),
        "URL".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for bookmark in bookmarks {
        let flag = if bookmark.has_update {
            "●".yellow().to_string()
        } else {
            " ".to_string()
        };

        println!(
            "  {:>4} {} {:<34} {}",
            bookmark.id,
            flag,
            truncate_chars(&bookmark.title, 32),
            truncate_chars(&bookmark.url, 40).dimmed(),
        );

        if let Some(description) = &bookmark.description {
            if !description.is_empty() {
                println!("         {}", truncate_chars(description, 70).dimmed());
            }
        }
    }

    println!();

    // Summary
    let unread = bookmarks.iter().filter(|b| b.has_update).count();
    if unread > 0 {
        println!(
            "  {} {} with updates — `satchel read <id>` clears the flag",
            "~".yellow(),
            unread
        );
    }
}

/// Display a subscription table in the terminal.
pub fn display_subscription_list(subscriptions: &[Subscription]) {
    if subscriptions.is_empty() {
        println!("No subscriptions yet. Run `satchel subscribe <url> --email <addr>` to add one.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Subscriptions ({}) ===", subscriptions.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<40} {:<26} {:>6}  {}",
        "Id".dimmed(),
        "URL".dimmed(),
        "Notify".dimmed(),
        "Every".dimmed(),
        "Last checked".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for subscription in subscriptions {
        let last_checked = subscription
            .last_checked_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:>4}  {:<40} {:<26} {:>5}h  {}",
            subscription.id,
            truncate_chars(&subscription.url, 38),
            truncate_chars(&subscription.notify_email, 24),
            subscription.period_hours,
            last_checked.dimmed(),
        );
    }
}

/// Display the outcome of a manually triggered subscription check.
pub fn display_check_outcome(outcome: &CheckOutcome) {
    if let Some(url) = &outcome.url {
        println!("  URL: {url}");
    }

    if !outcome.success {
        println!("  {} {}", "Check failed:".red().bold(), outcome.message);
        return;
    }

    if outcome.updated {
        println!("  {} {}", "Updated!".green().bold(), outcome.message);
        if outcome.email_sent {
            println!("  Notification e-mail sent.");
        }
    } else {
        println!("  {} {}", "No change.".normal(), outcome.message.dimmed());
    }
}

/// Display the result of a manual fetch probe.
pub fn display_fetch_probe(probe: &FetchProbe) {
    if !probe.success {
        let error = probe.error.as_deref().unwrap_or("unknown error");
        println!("  {} {}", "Fetch failed:".red().bold(), error);
        return;
    }

    println!("  {}", "Fetch succeeded.".green().bold());

    if let Some(hash) = &probe.content_hash {
        println!("  Content hash: {hash}");
    }
    if let Some(content) = &probe.content {
        println!("  Content: {} chars", content.chars().count());
        println!("    \"{}\"", truncate_chars(content, 120).dimmed());
    }
    if let Some(icon) = &probe.icon_bytes {
        match STANDARD.decode(icon.as_bytes()) {
            Ok(bytes) => println!("  Icon: {} bytes", bytes.len()),
            Err(_) => println!("  Icon: present (not valid base64)"),
        }
    }
    if let Some(fetched_at) = probe.fetched_at {
        println!("  Fetched at: {fetched_at}");
    }
}
