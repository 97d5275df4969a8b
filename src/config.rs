use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The reader endpoint is read once at startup and every request URL is
/// derived from it, so one build can never mix two bases. The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Base URL of the reader API (SATCHEL_API_URL). Defaults to a
    /// locally running server.
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_url: env::var("SATCHEL_API_URL")
                .unwrap_or_else(|_| crate::reader::client::DEFAULT_API_URL.to_string()),
        })
    }
}
