//! Tracker Network HTTP client
//!
//! One GET per lookup against `<base>/<game>/standard/profile/<platform>/<handle>`,
//! bounded by the configured timeout. There is no retry loop.

use crate::models::ProfileEnvelope;
use reqwest::{header, Client, Response};
use siege_common::{Platform, Result, SiegeError};
use siege_config::TrackerConfig;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Header carrying the Tracker Network API key.
pub const API_KEY_HEADER: &str = "TRN-Api-Key";

/// Longest slice of an error body kept in error messages.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Tracker Network API client with connection pooling
#[derive(Debug, Clone)]
pub struct TrackerClient {
    client: Client,
    base_url: Url,
    game: String,
    api_key: Option<String>,
}

impl TrackerClient {
    /// Create a new client from the tracker configuration
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SiegeError::config_with_source(format!("Invalid tracker base URL '{}'", config.base_url), e)
        })?;

        if base_url.cannot_be_a_base() {
            return Err(SiegeError::config(format!(
                "Tracker base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SiegeError::config_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            base_url,
            game: config.game.clone(),
            api_key: config.credential().map(str::to_string),
        })
    }

    /// Whether an API key will be sent with requests
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the profile URL; every path segment is percent-encoded.
    pub fn profile_url(&self, platform: Platform, handle: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SiegeError::config("Tracker base URL cannot carry a path"))?
            .pop_if_empty()
            .extend([self.game.as_str(), "standard", "profile", platform.code(), handle]);
        Ok(url)
    }

    /// Fetch a player profile.
    ///
    /// Transport failures and non-success statuses become
    /// [`SiegeError::Upstream`]. A success body that cannot be read as a
    /// profile is logged and treated as an empty profile.
    #[instrument(skip(self), fields(platform = %platform))]
    pub async fn fetch_profile(&self, platform: Platform, handle: &str) -> Result<ProfileEnvelope> {
        let url = self.profile_url(platform, handle)?;
        debug!("Making request to: {}", url);

        let mut request = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!("Request timeout: {}", e);
                return Err(SiegeError::upstream_with_source("Request timeout", e));
            }
            Err(e) => {
                error!("Request failed: {}", e);
                return Err(e.into());
            }
        };

        let response = Self::check_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| SiegeError::upstream_with_source("Failed to read response body", e))?;

        Ok(Self::parse_profile(&body))
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            debug!("Request successful: {}", status);
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
        error!("Upstream returned {}: {}", status, detail);

        let message = if detail.is_empty() {
            format!("API returned {status}")
        } else {
            format!("API returned {status}: {detail}")
        };
        Err(SiegeError::upstream_with_status(message, status.as_u16()))
    }

    /// Parse a profile body leniently.
    pub fn parse_profile(body: &str) -> ProfileEnvelope {
        match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Malformed profile response, treating as empty: {}", e);
                ProfileEnvelope::default()
            }
        }
    }
}
