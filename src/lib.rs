// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Parliament Client
//!
//! Typed async client for the UK Parliament REST APIs: petitions, members,
//! bills, committees, Commons and Lords divisions, registers of interests,
//! treaties, written and oral questions, Erskine May and the annunciator.
//!
//! ## Features
//!
//! - **One Facade**: [`Parliament`] hands out a client per sub-API over one shared transport
//! - **Pagination**: Every list endpoint has a lazy [`PageStream`] counterpart
//! - **Strict Validation**: Optionally reject payloads with fields the models don't declare
//! - **Typed Errors**: Status, timeout, cancellation and decode failures are distinct [`Error`] variants
//! - **Resilience**: Opt-in retry with backoff and a shared circuit breaker
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parliament_client::{Parliament, Result};
//! use parliament_client::api::members::MemberSearch;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let parliament = Parliament::new()?;
//!
//!     let search = MemberSearch {
//!         name: Some("Smith".to_string()),
//!         ..Default::default()
//!     };
//!     let mut members = parliament.members().search_all(&search);
//!     while let Some(member) = members.next().await? {
//!         println!("{}", member.name_display_as);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Parliament facade                        │
//! │   petitions()  members()  bills()  committees()  divisions() …  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴───────────────┬──────────────────┐
//! │  Domain APIs  │         ServiceClient        │    Pagination    │
//! ├───────────────┼──────────────────────────────┼──────────────────┤
//! │ Models        │ Endpoint tables              │ PageStream       │
//! │ Query filters │ Strict / lenient decode      │ Skip/Take        │
//! │               │ Retry, circuit breaker       │ Page number      │
//! │               │ Timeout, cancellation        │ Termination      │
//! └───────────────┴──────────────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport, endpoints and decoding
pub mod http;

/// Pagination adapter
pub mod pagination;

/// Domain clients and models, one module per sub-API
pub mod api;

/// The `Parliament` facade
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Parliament, ParliamentBuilder};
pub use config::{BaseUrls, LoggingConfig, ParliamentConfig, RetryConfig};
pub use error::{Error, Result, ResultExt};
pub use http::CircuitBreakerConfig;
pub use pagination::{Page, PageRequest, PageStream};
pub use tokio_util::sync::CancellationToken;
pub use types::{BackoffType, House, JsonValue, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
