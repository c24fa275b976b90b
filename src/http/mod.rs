//! HTTP client module
//!
//! Provides the shared transport and the request plumbing every domain
//! client is built on.
//!
//! # Features
//!
//! - **Endpoint tables**: `Endpoint` constants describe each call declaratively
//! - **Automatic Retries**: Opt-in retry logic with backoff
//! - **Circuit Breaker**: Opt-in, shared across all sub-APIs
//! - **Cancellation**: `CancellationToken` observed by every request
//! - **Strict Decoding**: Unknown JSON fields reported by path

mod circuit_breaker;
mod client;
mod endpoint;
mod service;

pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use client::{decode_json, HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use endpoint::{Endpoint, Query, ToQuery};
pub use service::ServiceClient;

#[cfg(test)]
mod tests;
