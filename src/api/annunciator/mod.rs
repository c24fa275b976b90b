//! Annunciator API (`now-api.parliament.uk`)
//!
//! The screens around the estate that show what is happening in each
//! chamber.

mod types;

pub use types::{Line, Message, Slide};

use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient};
use crate::types::{datetime, Timestamp};
use tokio_util::sync::CancellationToken;

const CURRENT: Endpoint = Endpoint::get("annunciator.current", "/Message/message/{}/current");
const AT: Endpoint = Endpoint::get("annunciator.at", "/Message/message/{}/{}");

/// Which screen feed to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annunciator {
    CommonsMain,
    LordsMain,
}

impl Annunciator {
    pub fn as_str(self) -> &'static str {
        match self {
            Annunciator::CommonsMain => "CommonsMain",
            Annunciator::LordsMain => "LordsMain",
        }
    }
}

/// Client for the annunciator API
#[derive(Debug, Clone)]
pub struct AnnunciatorClient {
    service: ServiceClient,
}

impl AnnunciatorClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    /// The message on screen now
    pub async fn current(&self, annunciator: Annunciator) -> Result<Message> {
        self.service
            .invoke(&CURRENT, &[annunciator.as_str()], &Query::new())
            .await
    }

    /// The message that was on screen at `when`
    pub async fn at(&self, annunciator: Annunciator, when: Timestamp) -> Result<Message> {
        self.service
            .invoke(
                &AT,
                &[annunciator.as_str(), &datetime::format(&when)],
                &Query::new(),
            )
            .await
    }
}
