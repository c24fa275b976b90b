//! Client configuration
//!
//! Everything the facade needs at construction time lives in
//! [`ParliamentConfig`]: one base URL per sub-API, timeout, user agent,
//! strict validation, logging and the opt-in resilience layers. The
//! structure can be built in code or loaded from YAML.

use crate::error::{Error, Result, ResultExt};
use crate::http::CircuitBreakerConfig;
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Shared configuration for every domain client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParliamentConfig {
    /// Base URL per sub-API
    pub base_urls: BaseUrls,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Reject payloads carrying fields the models do not declare
    pub strict_validation: bool,

    /// Request/response logging
    pub logging: LoggingConfig,

    /// Retry on transient failures (off when absent)
    pub retry: Option<RetryConfig>,

    /// Circuit breaker (off when absent)
    pub circuit_breaker: Option<CircuitBreakerConfig>,
}

impl Default for ParliamentConfig {
    fn default() -> Self {
        Self {
            base_urls: BaseUrls::default(),
            timeout_ms: 30_000,
            user_agent: default_user_agent(),
            strict_validation: false,
            logging: LoggingConfig::default(),
            retry: None,
            circuit_breaker: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("parliament-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ParliamentConfig {
    /// Parse a config from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check every value that would otherwise fail later at request time
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::invalid_argument(
                "timeout",
                "must be greater than zero",
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::invalid_argument("user_agent", "must not be empty"));
        }
        if let Some(breaker) = &self.circuit_breaker {
            if breaker.failure_threshold == 0 {
                return Err(Error::invalid_argument(
                    "circuit_breaker.failure_threshold",
                    "must be at least 1",
                ));
            }
        }
        self.base_urls.validate()
    }
}

// ============================================================================
// Base URLs
// ============================================================================

/// Base URL of each sub-API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseUrls {
    pub petitions: String,
    pub members: String,
    pub bills: String,
    pub committees: String,
    pub commons_divisions: String,
    pub lords_divisions: String,
    pub interests: String,
    pub treaties: String,
    pub written_questions: String,
    pub oral_questions: String,
    pub erskine_may: String,
    pub annunciator: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            petitions: "https://petition.parliament.uk".to_string(),
            members: "https://members-api.parliament.uk/api".to_string(),
            bills: "https://bills-api.parliament.uk/api/v1".to_string(),
            committees: "https://committees-api.parliament.uk/api".to_string(),
            commons_divisions: "https://commonsvotes-api.parliament.uk/data".to_string(),
            lords_divisions: "https://lordsvotes-api.parliament.uk/data".to_string(),
            interests: "https://interests-api.parliament.uk/api/v1".to_string(),
            treaties: "https://treaties-api.parliament.uk/api".to_string(),
            written_questions: "https://writtenquestions-api.parliament.uk/api".to_string(),
            oral_questions: "https://oralquestionsandmotions-api.parliament.uk".to_string(),
            erskine_may: "https://erskinemay-api.parliament.uk/api".to_string(),
            annunciator: "https://now-api.parliament.uk/api".to_string(),
        }
    }
}

impl BaseUrls {
    /// Point every sub-API at the same host (mock servers, proxies)
    pub fn all(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            petitions: base.clone(),
            members: base.clone(),
            bills: base.clone(),
            committees: base.clone(),
            commons_divisions: base.clone(),
            lords_divisions: base.clone(),
            interests: base.clone(),
            treaties: base.clone(),
            written_questions: base.clone(),
            oral_questions: base.clone(),
            erskine_may: base.clone(),
            annunciator: base,
        }
    }

    /// `(name, url)` pairs, in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("petitions", self.petitions.as_str()),
            ("members", self.members.as_str()),
            ("bills", self.bills.as_str()),
            ("committees", self.committees.as_str()),
            ("commons_divisions", self.commons_divisions.as_str()),
            ("lords_divisions", self.lords_divisions.as_str()),
            ("interests", self.interests.as_str()),
            ("treaties", self.treaties.as_str()),
            ("written_questions", self.written_questions.as_str()),
            ("oral_questions", self.oral_questions.as_str()),
            ("erskine_may", self.erskine_may.as_str()),
            ("annunciator", self.annunciator.as_str()),
        ]
    }

    fn validate(&self) -> Result<()> {
        for (name, raw) in self.entries() {
            let parsed = url::Url::parse(raw).map_err(|e| {
                Error::invalid_argument(format!("base_urls.{name}"), format!("'{raw}': {e}"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::invalid_argument(
                    format!("base_urls.{name}"),
                    format!("'{raw}' is not an http(s) URL"),
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Logging and Retry
// ============================================================================

/// Request/response logging through `tracing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit one event per request and per response
    pub enabled: bool,
    /// Also emit response bodies at TRACE level
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            verbose: false,
        }
    }
}

/// Retry settings for transient failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Backoff strategy
    pub backoff_type: BackoffType,
    /// Delay before the first retry, in milliseconds
    pub initial_backoff_ms: u64,
    /// Upper bound on any single delay, in milliseconds
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_type: BackoffType::Exponential,
            initial_backoff_ms: 200,
            max_backoff_ms: 10_000,
        }
    }
}

impl RetryConfig {
    /// Delay before the given retry (0-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        let initial = Duration::from_millis(self.initial_backoff_ms);
        let delay = match self.backoff_type {
            BackoffType::Constant => initial,
            BackoffType::Linear => initial.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => initial.saturating_mul(2u32.saturating_pow(attempt)),
        };

        std::cmp::min(delay, Duration::from_millis(self.max_backoff_ms))
    }
}
