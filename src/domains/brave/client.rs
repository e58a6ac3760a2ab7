//! Brave Search API gateway.
//!
//! A single call surface, [`BraveApi::issue_request`], that knows the path of
//! every endpoint, attaches the subscription token and decodes the typed
//! response. Failures propagate to the caller untouched; there is no retry.

use std::time::Duration;

use reqwest::{Client, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use crate::core::config::Config;

/// Production base URL of the Brave Search API.
pub const DEFAULT_BASE_URL: &str = "https://api.search.brave.com/res/v1";

/// Header carrying the Brave subscription token.
const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// Endpoints of the Brave Search API used by the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Web,
    Images,
    News,
    Videos,
    LocalPois,
    LocalDescriptions,
    Summarizer,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Web => "/web/search",
            Self::Images => "/images/search",
            Self::News => "/news/search",
            Self::Videos => "/videos/search",
            Self::LocalPois => "/local/pois",
            Self::LocalDescriptions => "/local/descriptions",
            Self::Summarizer => "/summarizer/search",
        }
    }
}

/// Client for the Brave Search API.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct BraveApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for BraveApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraveApi")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl BraveApi {
    /// Create a client against `base_url`.
    ///
    /// An empty `api_key` is treated as absent.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("brave-search-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Create a client from the resolved configuration.
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(
            config.api.base_url.clone(),
            config.credentials.brave_api_key.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    /// A client on the same connection pool, authenticated with `api_key`.
    pub fn with_api_key(&self, api_key: Option<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Whether a subscription token is available.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The subscription token, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Issue a GET request against `endpoint` and decode the response.
    ///
    /// `params` is encoded as the query string; `None` fields must be skipped
    /// by the caller's `Serialize` impl.
    #[instrument(skip(self, params), fields(endpoint = endpoint.path()))]
    pub async fn issue_request<P, R>(&self, endpoint: Endpoint, params: &P) -> ApiResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

        let query = serde_urlencoded::to_string(params)?;
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, endpoint.path())
        } else {
            format!("{}{}?{}", self.base_url, endpoint.path(), query)
        };

        debug!("Issuing Brave Search request");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(SUBSCRIPTION_TOKEN_HEADER, api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::status(status.as_u16(), body);
            if error.is_unauthorized() {
                warn!("Brave Search rejected the API key ({})", status);
            } else {
                warn!("Brave Search request failed with status {}", status);
            }
            return Err(error);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }
}
