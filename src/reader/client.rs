// HTTP core for the reader API.
//
// A thin reqwest wrapper with one verb helper per request shape. Every
// operation in the bookmarks and subscriptions modules goes through
// these helpers, so the configured base URL prefixes every request the
// crate makes. No retries, no timeouts beyond transport defaults, no
// caching — failures surface to the caller as-is.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Default reader API endpoint for a locally running server.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// HTTP client for the reader's JSON API.
pub struct ReaderClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReaderClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// Defaults to a local server — pass a different URL (or set
    /// SATCHEL_API_URL) for a remote instance.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("satchel/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the full URL for an API path.
    ///
    /// This is the single place request URLs are assembled, so the
    /// configured base applies to every request uniformly.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a path and deserialize the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!(path = path, "GET request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?;
        let response = Self::ensure_success(response, "GET", path).await?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {path} response"))
    }

    /// POST a JSON body and deserialize the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(path = path, "POST request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;
        let response = Self::ensure_success(response, "POST", path).await?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {path} response"))
    }

    /// POST with an empty body and deserialize the JSON response.
    ///
    /// `query` carries query-string parameters; most action endpoints
    /// take none.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(path = path, "POST request (empty body)");

        let response = self
            .client
            .post(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;
        let response = Self::ensure_success(response, "POST", path).await?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {path} response"))
    }

    /// POST with an empty body, discarding any response body.
    pub async fn post_unit(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path);
        debug!(path = path, "POST request (empty body)");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;
        Self::ensure_success(response, "POST", path).await?;
        Ok(())
    }

    /// PUT a JSON body, discarding any response body.
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.endpoint(path);
        debug!(path = path, "PUT request");

        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("PUT {path} failed"))?;
        Self::ensure_success(response, "PUT", path).await?;
        Ok(())
    }

    /// DELETE a path, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path);
        debug!(path = path, "DELETE request");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("DELETE {path} failed"))?;
        Self::ensure_success(response, "DELETE", path).await?;
        Ok(())
    }

    /// Turn a non-2xx response into an error carrying the status and
    /// the raw body text, untranslated.
    async fn ensure_success(
        response: reqwest::Response,
        method: &str,
        path: &str,
    ) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{method} {path} returned {status}: {body}");
        }
        Ok(response)
    }
}
