//! Spaceship registrar client

mod gateway;
mod http;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://spaceship.dev/api/v1";

pub(crate) const API_KEY_HEADER: &str = "X-API-Key";
pub(crate) const API_SECRET_HEADER: &str = "X-API-Secret";

/// Static credentials and endpoint for the Spaceship API.
#[derive(Clone)]
pub struct SpaceshipCredentials {
    /// Value of the `X-API-Key` header.
    pub api_key: String,
    /// Value of the `X-API-Secret` header.
    pub api_secret: String,
    /// API root, without a trailing slash.
    pub base_url: String,
}

impl SpaceshipCredentials {
    /// Credentials against [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another API root (staging, a local mock, ...).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl std::fmt::Debug for SpaceshipCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceshipCredentials")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_secret", &"****")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// [`RegistryGateway`](crate::RegistryGateway) backed by the Spaceship REST API.
///
/// Built once at startup and shared behind an `Arc`; holds no mutable state.
pub struct SpaceshipClient {
    pub(crate) client: Client,
    pub(crate) credentials: SpaceshipCredentials,
}

impl SpaceshipClient {
    /// Create a client. Fails only if the HTTP client cannot be constructed.
    pub fn new(credentials: SpaceshipCredentials) -> Result<Self> {
        log::debug!("Creating Spaceship client: {credentials:?}");
        Ok(Self {
            client: create_http_client()?,
            credentials,
        })
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.credentials.base_url
    }
}
