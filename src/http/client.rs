//! HTTP client with retry, circuit breaking and cancellation
//!
//! Provides the one transport every domain client shares:
//! - Optional retries with configurable backoff
//! - Optional circuit breaker
//! - Timeout and cancellation classification
//! - Request/response logging through `tracing`
//! - Strict or lenient JSON decoding

use super::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig};
use super::endpoint::Query;
use crate::config::{LoggingConfig, ParliamentConfig, RetryConfig};
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Treat unknown JSON fields as errors
    pub strict_validation: bool,
    /// Logging switches
    pub logging: LoggingConfig,
    /// Retry policy; `None` sends each request once
    pub retry: Option<RetryConfig>,
    /// Circuit breaker; `None` disables it
    pub circuit_breaker: Option<CircuitBreakerConfig>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&ParliamentConfig::default())
    }
}

impl From<&ParliamentConfig> for HttpClientConfig {
    fn from(config: &ParliamentConfig) -> Self {
        Self {
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            strict_validation: config.strict_validation,
            logging: config.logging,
            retry: config.retry,
            circuit_breaker: config.circuit_breaker,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable or disable strict validation
    pub fn strict_validation(mut self, strict: bool) -> Self {
        self.config.strict_validation = strict;
        self
    }

    /// Set logging switches
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Enable retries
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = Some(retry);
        self
    }

    /// Enable the circuit breaker
    pub fn circuit_breaker(mut self, config: CircuitBreakerConfig) -> Self {
        self.config.circuit_breaker = Some(config);
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Who owns the connection pool
#[derive(Debug, Clone)]
enum Transport {
    /// Built by this crate; dropped with the last handle
    Owned(Client),
    /// Supplied by the caller; never torn down here
    Shared(Client),
}

impl Transport {
    fn client(&self) -> &Client {
        match self {
            Transport::Owned(client) | Transport::Shared(client) => client,
        }
    }
}

/// HTTP client shared by every domain client
pub struct HttpClient {
    transport: Transport,
    config: HttpClientConfig,
    circuit_breaker: Option<CircuitBreaker>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client that owns its own connection pool
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self::from_transport(Transport::Owned(client), config))
    }

    /// Create a client over a caller-supplied [`reqwest::Client`]
    ///
    /// Timeout and user agent are applied per request, so the supplied
    /// client keeps its own defaults for any other use.
    pub fn with_client(client: Client, config: HttpClientConfig) -> Self {
        Self::from_transport(Transport::Shared(client), config)
    }

    fn from_transport(transport: Transport, config: HttpClientConfig) -> Self {
        let circuit_breaker = config.circuit_breaker.map(CircuitBreaker::new);
        Self {
            transport,
            config,
            circuit_breaker,
        }
    }

    /// Whether the connection pool was built by this client
    pub fn owns_transport(&self) -> bool {
        matches!(self.transport, Transport::Owned(_))
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        self.transport.client()
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn circuit_breaker(&self) -> Option<&CircuitBreaker> {
        self.circuit_breaker.as_ref()
    }

    /// GET `url` and return the body of a 2xx response
    pub async fn get(
        &self,
        url: &str,
        query: &Query,
        cancel: Option<&CancellationToken>,
    ) -> Result<Bytes> {
        let max_retries = self.config.retry.map_or(0, |r| r.max_retries);
        let mut attempt = 0;

        loop {
            if let Some(breaker) = &self.circuit_breaker {
                if !breaker.allow_request() {
                    return Err(Error::CircuitOpen {
                        service: host_of(url),
                    });
                }
            }

            let err = match self.send_once(url, query, cancel).await {
                Ok(body) => {
                    if let Some(breaker) = &self.circuit_breaker {
                        breaker.record_success();
                    }
                    return Ok(body);
                }
                Err(err) => err,
            };

            // Only upstream trouble counts against the breaker; a 404 or a
            // cancelled call says nothing about the service's health.
            if let Some(breaker) = &self.circuit_breaker {
                if err.is_retryable() {
                    breaker.record_failure();
                } else {
                    breaker.release_probe();
                }
            }

            let Some(retry) = self.config.retry else {
                return Err(err);
            };
            if !err.is_retryable() || attempt >= max_retries {
                return Err(err);
            }

            let delay = retry.backoff(attempt);
            warn!(
                "Request to {} failed ({}), attempt {}/{}, retrying in {:?}",
                url,
                err,
                attempt + 1,
                max_retries + 1,
                delay
            );
            sleep_or_cancel(delay, cancel).await?;
            attempt += 1;
        }
    }

    /// GET `url` and decode a JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Query,
        cancel: Option<&CancellationToken>,
    ) -> Result<T> {
        let body = self.get(url, query, cancel).await?;
        self.decode(&body)
    }

    /// Decode a JSON body using this client's validation mode
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        decode_json(body, self.config.strict_validation)
    }

    async fn send_once(
        &self,
        url: &str,
        query: &Query,
        cancel: Option<&CancellationToken>,
    ) -> Result<Bytes> {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(Error::Cancelled);
        }

        let mut req = self
            .transport
            .client()
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .timeout(self.config.timeout);
        if !query.is_empty() {
            req = req.query(query.pairs());
        }

        let logging = self.config.logging;
        if logging.enabled {
            debug!(url, query = ?query.pairs(), "GET");
        }
        let started = Instant::now();

        let exchange = async {
            let response = req.send().await.map_err(|e| self.map_reqwest_error(e))?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| self.map_reqwest_error(e))?;
            Ok::<(StatusCode, Bytes), Error>((status, body))
        };

        let (status, body) = match cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => {
                    if logging.enabled {
                        debug!(url, "request cancelled");
                    }
                    return Err(Error::Cancelled);
                }
                result = exchange => result?,
            },
            None => exchange.await?,
        };

        if logging.enabled {
            debug!(
                url,
                status = status.as_u16(),
                bytes = body.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "response"
            );
            if logging.verbose {
                trace!(url, body = %String::from_utf8_lossy(&body), "response body");
            }
        }

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            Error::Http(err)
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("owns_transport", &self.owns_transport())
            .field("has_circuit_breaker", &self.circuit_breaker.is_some())
            .finish_non_exhaustive()
    }
}

/// Decode JSON, optionally rejecting fields the target type does not know
pub fn decode_json<T: DeserializeOwned>(body: &[u8], strict: bool) -> Result<T> {
    if !strict {
        return Ok(serde_json::from_slice(body)?);
    }

    let mut unknown: Option<String> = None;
    let mut de = serde_json::Deserializer::from_slice(body);
    let value: T = serde_ignored::deserialize(&mut de, |path| {
        if unknown.is_none() {
            unknown = Some(path.to_string());
        }
    })?;
    de.end()?;

    match unknown {
        Some(path) => Err(Error::unknown_field(path)),
        None => Ok(value),
    }
}

async fn sleep_or_cancel(delay: Duration, cancel: Option<&CancellationToken>) -> Result<()> {
    match cancel {
        Some(token) => tokio::select! {
            biased;
            () = token.cancelled() => Err(Error::Cancelled),
            () = tokio::time::sleep(delay) => Ok(()),
        },
        None => {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToOwned::to_owned))
        .unwrap_or_else(|| url.to_string())
}
