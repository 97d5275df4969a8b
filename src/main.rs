use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use satchel::config::Config;
use satchel::output::terminal;
use satchel::reader::bookmarks::{self, NewBookmark};
use satchel::reader::client::ReaderClient;
use satchel::reader::subscriptions::{self, NewSubscription};

/// Satchel: command-line client for a self-hosted bookmark and
/// blog-subscription reader.
///
/// Bookmarks are pages you keep; subscriptions tell the server to poll
/// a page on a period and mail you when its content changes.
#[derive(Parser)]
#[command(name = "satchel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookmarks
    Bookmarks {
        /// Only show bookmarks with unseen updates
        #[arg(long)]
        unread: bool,
    },

    /// Add a bookmark
    Add {
        url: String,

        /// Title to display (defaults to the URL)
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Edit a bookmark's title, URL, or description
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a bookmark
    Remove { id: i64 },

    /// Mark a bookmark as read (clears its update flag)
    Read { id: i64 },

    /// Show or refresh a bookmark's favicon
    Icon {
        id: i64,

        /// Ask the server to re-fetch the favicon from the page first
        #[arg(long)]
        refresh: bool,

        /// Write the decoded icon bytes to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List subscriptions
    Subscriptions,

    /// Subscribe to a page for update notifications
    Subscribe {
        url: String,

        /// E-mail address to notify on updates
        #[arg(long)]
        email: String,

        /// Check period in hours (server default: 24)
        #[arg(long)]
        every: Option<i64>,
    },

    /// Change a subscription's check period or notification address
    Reschedule {
        id: i64,

        /// New check period in hours
        #[arg(long)]
        every: Option<i64>,

        /// New notification e-mail address
        #[arg(long)]
        email: Option<String>,
    },

    /// Remove a subscription
    Unsubscribe { id: i64 },

    /// Check a subscription for updates right now
    Check { id: i64 },

    /// Probe the server's fetcher against an arbitrary URL
    Fetch { url: String },

    /// Show reader status (endpoint, counts, unread)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("satchel=info")),
        )
        .init();

    let cli = Cli::parse();

    // Every command talks to the same API, configured in one place.
    let config = Config::load()?;
    let client = ReaderClient::new(&config.api_url)?;

    match cli.command {
        Commands::Bookmarks { unread } => {
            let mut list = bookmarks::fetch_bookmarks(&client).await?;
            if unread {
                list.retain(|b| b.has_update);
            }
            terminal::display_bookmark_list(&list);
        }

        Commands::Add {
            url,
            title,
            description,
        } => {
            let bookmark = NewBookmark {
                title: title.unwrap_or_else(|| url.clone()),
                url,
                description,
            };
            let id = bookmarks::add_bookmark(&client, &bookmark).await?;
            println!("Bookmark created with id {id}");
        }

        Commands::Edit {
            id,
            title,
            url,
            description,
        } => {
            // Updates replace the record, so start from the current one
            // and only touch the fields given on the command line.
            let list = bookmarks::fetch_bookmarks(&client).await?;
            let mut bookmark = list
                .into_iter()
                .find(|b| b.id == id)
                .with_context(|| format!("No bookmark with id {id}"))?;

            if let Some(title) = title {
                bookmark.title = title;
            }
            if let Some(url) = url {
                bookmark.url = url;
            }
            if let Some(description) = description {
                bookmark.description = Some(description);
            }
            bookmarks::update_bookmark(&client, id, &bookmark).await?;
            println!("Bookmark {id} updated.");
        }

        Commands::Remove { id } => {
            bookmarks::delete_bookmark(&client, id).await?;
            println!("Bookmark {id} deleted.");
        }

        Commands::Read { id } => {
            bookmarks::mark_read(&client, id).await?;
            println!("Bookmark {id} marked read.");
        }

        Commands::Icon { id, refresh, out } => {
            let response = if refresh {
                println!("Asking the server to re-fetch the favicon...");
                bookmarks::refresh_icon(&client, id).await?
            } else {
                bookmarks::fetch_icon(&client, id).await?
            };

            if !response.success {
                anyhow::bail!("Icon request failed: {}", response.message);
            }

            let encoded = response
                .icon_base64
                .context("Server reported success but sent no icon data")?;
            let bytes = STANDARD
                .decode(encoded.as_bytes())
                .context("Icon payload is not valid base64")?;

            match out {
                Some(path) => {
                    std::fs::write(&path, &bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Icon written to {} ({} bytes)", path.display(), bytes.len());
                }
                None => println!("Icon: {} bytes. Pass --out <file> to save it.", bytes.len()),
            }
        }

        Commands::Subscriptions => {
            let subs = subscriptions::fetch_subscriptions(&client).await?;
            terminal::display_subscription_list(&subs);
        }

        Commands::Subscribe { url, email, every } => {
            let subscription = NewSubscription {
                url,
                notify_email: email,
                period_hours: every,
            };
            let id = subscriptions::add_subscription(&client, &subscription).await?;
            println!("Subscription created with id {id}");
            println!(
                "The server will check it every {} hours.",
                every.unwrap_or(24)
            );
        }

        Commands::Reschedule { id, every, email } => {
            // Updates replace the record, so start from the current one.
            let subs = subscriptions::fetch_subscriptions(&client).await?;
            let mut subscription = subs
                .into_iter()
                .find(|s| s.id == id)
                .with_context(|| format!("No enabled subscription with id {id}"))?;

            if let Some(every) = every {
                subscription.period_hours = every;
            }
            if let Some(email) = email {
                subscription.notify_email = email;
            }
            subscriptions::update_subscription(&client, id, &subscription).await?;
            println!(
                "Subscription {id} now checks every {} hours (notify: {}).",
                subscription.period_hours, subscription.notify_email
            );
        }

        Commands::Unsubscribe { id } => {
            subscriptions::delete_subscription(&client, id).await?;
            println!("Subscription {id} deleted.");
        }

        Commands::Check { id } => {
            println!("Checking subscription {id}...");
            let outcome = subscriptions::check_now(&client, id).await?;
            terminal::display_check_outcome(&outcome);
        }

        Commands::Fetch { url } => {
            println!("Probing the fetcher against {}...", url.bold());
            let probe = subscriptions::probe_fetch(&client, &url).await?;
            terminal::display_fetch_probe(&probe);
        }

        Commands::Status => {
            satchel::status::show(&client, &config.api_url).await?;
        }
    }

    Ok(())
}
