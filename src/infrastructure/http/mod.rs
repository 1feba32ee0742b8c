pub mod identity;
pub mod pacing;
pub mod retry;

use crate::domain::error::DomainError;
use crate::infrastructure::http::identity::ClientIdentity;
use crate::infrastructure::http::pacing::Throttle;
use crate::infrastructure::http::retry::RetryPolicy;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Per-attempt request timeout. Combined with the bounded retry count this
/// keeps every lookup finite.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure taxonomy for one lookup against an external service.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network trouble or a rate-limit response; retrying may help.
    #[error("transient failure: {0}")]
    Transient(String),

    /// The upstream answered, but unusably (unexpected status or body).
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Every attempt failed transiently.
    #[error("gave up after {attempts} attempts, last error: {last}")]
    Exhausted { attempts: u32, last: String },
}

impl From<LookupError> for DomainError {
    fn from(e: LookupError) -> Self {
        DomainError::Lookup(e.to_string())
    }
}

/// The one HTTP client every external lookup goes through: politeness pause
/// before each logical request, bounded retries with randomized backoff, and
/// a rotated client identity on every attempt.
pub struct PacedClient {
    http: reqwest::Client,
    identity: Arc<dyn ClientIdentity>,
    throttle: Throttle,
    retry: RetryPolicy,
}

impl PacedClient {
    pub fn new(
        identity: Arc<dyn ClientIdentity>,
        throttle: Throttle,
        retry: RetryPolicy,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {e}")))?;
        Ok(Self {
            http,
            identity,
            throttle,
            retry,
        })
    }

    /// GET `url` and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        self.throttle.pause().await;
        self.retry
            .execute(url, || async move {
                let resp = self.send(url).await?;
                resp.json::<T>()
                    .await
                    .map_err(|e| LookupError::Upstream(format!("invalid JSON from {url}: {e}")))
            })
            .await
    }

    /// GET `url` and return the body as text (source pages).
    pub async fn get_text(&self, url: &str) -> Result<String, LookupError> {
        self.throttle.pause().await;
        self.retry
            .execute(url, || async move {
                let resp = self.send(url).await?;
                resp.text()
                    .await
                    .map_err(|e| LookupError::Upstream(format!("unreadable body from {url}: {e}")))
            })
            .await
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, LookupError> {
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, self.identity.user_agent())
            .send()
            .await
            .map_err(|e| LookupError::Transient(format!("request to {url} failed: {e}")))?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            return Err(LookupError::Transient(format!("{url} returned {status}")));
        }
        if !status.is_success() {
            return Err(LookupError::Upstream(format!("{url} returned {status}")));
        }
        Ok(resp)
    }
}
