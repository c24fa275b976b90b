//! The `Parliament` facade
//!
//! One object holding the shared HTTP client and configuration, handing
//! out a domain client per sub-API.

use crate::api::annunciator::AnnunciatorClient;
use crate::api::bills::BillsClient;
use crate::api::committees::CommitteesClient;
use crate::api::divisions::{CommonsDivisionsClient, LordsDivisionsClient};
use crate::api::erskine_may::ErskineMayClient;
use crate::api::interests::InterestsClient;
use crate::api::members::MembersClient;
use crate::api::oral_questions::OralQuestionsClient;
use crate::api::petitions::PetitionsClient;
use crate::api::treaties::TreatiesClient;
use crate::api::written_questions::WrittenQuestionsClient;
use crate::config::{BaseUrls, LoggingConfig, ParliamentConfig, RetryConfig};
use crate::error::Result;
use crate::http::{CircuitBreakerConfig, HttpClient, HttpClientConfig, ServiceClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Entry point to every Parliament API
///
/// Cloning is cheap; clones and every domain client share one
/// [`HttpClient`]. When the transport was built here, dropping the last
/// of them closes its connections. A transport passed to
/// [`Parliament::with_client`] stays usable by its owner.
#[derive(Debug, Clone)]
pub struct Parliament {
    http: Arc<HttpClient>,
    config: Arc<ParliamentConfig>,
}

impl Parliament {
    /// Default configuration, self-owned transport
    pub fn new() -> Result<Self> {
        Self::with_config(ParliamentConfig::default())
    }

    /// Self-owned transport built from `config`
    pub fn with_config(config: ParliamentConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(HttpClientConfig::from(&config))?;
        Ok(Self::from_parts(http, config))
    }

    /// Use a caller-owned [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, config: ParliamentConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_client(client, HttpClientConfig::from(&config));
        Ok(Self::from_parts(http, config))
    }

    pub fn builder() -> ParliamentBuilder {
        ParliamentBuilder::default()
    }

    fn from_parts(http: HttpClient, config: ParliamentConfig) -> Self {
        debug!(
            owns_transport = http.owns_transport(),
            strict = config.strict_validation,
            "parliament client ready"
        );
        Self {
            http: Arc::new(http),
            config: Arc::new(config),
        }
    }

    /// Whether the transport was built by this client
    pub fn owns_transport(&self) -> bool {
        self.http.owns_transport()
    }

    pub fn config(&self) -> &ParliamentConfig {
        &self.config
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    fn service(&self, name: &'static str, base_url: &str) -> ServiceClient {
        ServiceClient::new(Arc::clone(&self.http), name, base_url)
    }

    // ========================================================================
    // Domain Clients
    // ========================================================================

    pub fn petitions(&self) -> PetitionsClient {
        PetitionsClient::new(self.service("petitions", &self.config.base_urls.petitions))
    }

    pub fn members(&self) -> MembersClient {
        MembersClient::new(self.service("members", &self.config.base_urls.members))
    }

    pub fn bills(&self) -> BillsClient {
        BillsClient::new(self.service("bills", &self.config.base_urls.bills))
    }

    pub fn committees(&self) -> CommitteesClient {
        CommitteesClient::new(self.service("committees", &self.config.base_urls.committees))
    }

    pub fn commons_divisions(&self) -> CommonsDivisionsClient {
        CommonsDivisionsClient::new(
            self.service("commons_divisions", &self.config.base_urls.commons_divisions),
        )
    }

    pub fn lords_divisions(&self) -> LordsDivisionsClient {
        LordsDivisionsClient::new(
            self.service("lords_divisions", &self.config.base_urls.lords_divisions),
        )
    }

    pub fn interests(&self) -> InterestsClient {
        InterestsClient::new(self.service("interests", &self.config.base_urls.interests))
    }

    pub fn treaties(&self) -> TreatiesClient {
        TreatiesClient::new(self.service("treaties", &self.config.base_urls.treaties))
    }

    pub fn written_questions(&self) -> WrittenQuestionsClient {
        WrittenQuestionsClient::new(
            self.service("written_questions", &self.config.base_urls.written_questions),
        )
    }

    pub fn oral_questions(&self) -> OralQuestionsClient {
        OralQuestionsClient::new(
            self.service("oral_questions", &self.config.base_urls.oral_questions),
        )
    }

    pub fn erskine_may(&self) -> ErskineMayClient {
        ErskineMayClient::new(self.service("erskine_may", &self.config.base_urls.erskine_may))
    }

    pub fn annunciator(&self) -> AnnunciatorClient {
        AnnunciatorClient::new(self.service("annunciator", &self.config.base_urls.annunciator))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Parliament`]; `build` validates the configuration
#[derive(Debug, Default)]
pub struct ParliamentBuilder {
    config: ParliamentConfig,
    client: Option<reqwest::Client>,
}

impl ParliamentBuilder {
    /// Start from an existing configuration
    pub fn config(mut self, config: ParliamentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_urls(mut self, base_urls: BaseUrls) -> Self {
        self.config.base_urls = base_urls;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn strict_validation(mut self, strict: bool) -> Self {
        self.config.strict_validation = strict;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Log response bodies at `trace` level
    pub fn verbose_logging(mut self, verbose: bool) -> Self {
        self.config.logging.verbose = verbose;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = Some(retry);
        self
    }

    pub fn circuit_breaker(mut self, breaker: CircuitBreakerConfig) -> Self {
        self.config.circuit_breaker = Some(breaker);
        self
    }

    /// Use a caller-owned transport instead of building one
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<Parliament> {
        match self.client {
            Some(client) => Parliament::with_client(client, self.config),
            None => Parliament::with_config(self.config),
        }
    }
}
