//! Contact-form relay.
//!
//! Forwards contact submissions to a third-party transactional email
//! service, so the page never operates its own mail infrastructure. The
//! service is addressed by a fixed service/template identifier pair plus a
//! public key, all from the site configuration.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

/// Default send endpoint (EmailJS).
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const SEND_TIMEOUT_SECS: u64 = 30;

/// Errors from the relay path.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No relay settings are present in the site configuration.
    #[error("no email relay is configured")]
    NotConfigured,

    /// The configured endpoint is not a valid URL.
    #[error("invalid relay endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request itself failed.
    #[error("email relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("email relay rejected the message: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Relay settings from the `[relay]` table of the site configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RelayConfig {
    /// Service identifier at the relay provider.
    pub service_id: String,

    /// Template identifier at the relay provider.
    pub template_id: String,

    /// Public API key of the account.
    pub public_key: String,

    /// Send endpoint; defaults to the EmailJS API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.to_string()
}

/// One contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Client for the send operation.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: Url,
    config: RelayConfig,
}

impl RelayClient {
    /// Builds a client from relay settings.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidEndpoint`] when the endpoint does not
    /// parse, or [`RelayError::Http`] when the HTTP client cannot be built.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|source| RelayError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    /// Sends one contact message. A single attempt; not retried.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Http`] on transport failure and
    /// [`RelayError::Rejected`] when the service answers with a non-success
    /// status.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        debug!(endpoint = %self.endpoint, service_id = %self.config.service_id, "Relaying contact message");

        let payload = json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "from_name": message.from_name,
                "from_email": message.from_email,
                "message": message.message,
            }
        });

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status, body });
        }

        info!("Contact message accepted by relay");
        Ok(())
    }
}
