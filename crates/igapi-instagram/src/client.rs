//! HTTP client for Instagram's public web JSON endpoints.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::SourceError;
use crate::types::Profile;
use crate::wire;

const DEFAULT_BASE_URL: &str = "https://www.instagram.com";

/// App ID Instagram's own web client sends; requests without it get an
/// HTML login page instead of JSON.
const WEB_APP_ID: &str = "936619743392459";

/// Query hash of the public timeline-media GraphQL query.
const TIMELINE_QUERY_HASH: &str = "003056d32c2554def87228bc3fd9668a";

/// Page size for timeline requests; matches what the web client asks for.
const PAGE_SIZE: u32 = 12;

/// Client for profile lookups and timeline pages.
///
/// Classifies responses into the four [`SourceError`] kinds: 404 and null
/// user payloads are not-found, 401/403 are login-required, transport
/// failures and 5xx are connection errors, everything else is unclassified.
/// No retries, no backoff; each failure is reported on first occurrence.
#[derive(Debug, Clone)]
pub struct InstagramClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl InstagramClient {
    /// Creates a client with the configured request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Connection`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(|e| SourceError::Connection {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
        })
    }

    /// Replaces the base URL. Tests point this at a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Looks up a profile by username via `web_profile_info`.
    ///
    /// # Errors
    ///
    /// - [`SourceError::NotFound`] — HTTP 404 or a null `user` payload.
    /// - [`SourceError::LoginRequired`] — HTTP 401 or 403.
    /// - [`SourceError::Connection`] — transport failure or a 5xx response.
    /// - [`SourceError::Other`] — any other status, or a malformed body.
    pub(crate) async fn lookup_profile(&self, username: &str) -> Result<Profile, SourceError> {
        let url = format!("{}/api/v1/users/web_profile_info/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("username", username)])
            .header("x-ig-app-id", WEB_APP_ID)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if let Some(err) = classify_status(status, username) {
            return Err(err);
        }

        let body = response.text().await.map_err(connection_error)?;
        let parsed: wire::WebProfileResponse = serde_json::from_str(&body).map_err(|e| {
            SourceError::Other(format!("malformed profile response for '{username}': {e}"))
        })?;

        let Some(user) = parsed.data.user else {
            return Err(SourceError::NotFound {
                username: username.to_owned(),
            });
        };

        Profile::from_wire(user)
    }

    /// Fetches one timeline page past the first via the GraphQL query.
    pub(crate) async fn fetch_timeline_page(
        &self,
        username: &str,
        user_id: &str,
        after: Option<&str>,
    ) -> Result<wire::TimelineMedia, SourceError> {
        let variables = serde_json::json!({
            "id": user_id,
            "first": PAGE_SIZE,
            "after": after,
        });
        let url = format!("{}/graphql/query/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query_hash", TIMELINE_QUERY_HASH),
                ("variables", variables.to_string().as_str()),
            ])
            .header("x-ig-app-id", WEB_APP_ID)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if let Some(err) = classify_status(status, username) {
            return Err(err);
        }

        let body = response.text().await.map_err(connection_error)?;
        let parsed: wire::TimelinePageResponse = serde_json::from_str(&body).map_err(|e| {
            SourceError::Other(format!("malformed timeline page for '{username}': {e}"))
        })?;

        let Some(user) = parsed.data.user else {
            return Err(SourceError::Other(format!(
                "timeline page for '{username}' is missing the user object"
            )));
        };

        Ok(user.edge_owner_to_timeline_media)
    }
}

/// Maps a non-success status to its [`SourceError`] kind; `None` for 2xx.
fn classify_status(status: StatusCode, username: &str) -> Option<SourceError> {
    if status.is_success() {
        return None;
    }
    if status == StatusCode::NOT_FOUND {
        return Some(SourceError::NotFound {
            username: username.to_owned(),
        });
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Some(SourceError::LoginRequired {
            username: username.to_owned(),
        });
    }
    if status.is_server_error() {
        return Some(SourceError::Connection {
            reason: format!("instagram returned HTTP {status}"),
        });
    }
    Some(SourceError::Other(format!(
        "unexpected HTTP {status} for '{username}'"
    )))
}

fn connection_error(e: reqwest::Error) -> SourceError {
    SourceError::Connection {
        reason: e.to_string(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
