//! The `ChatTransport` trait defines the interface for every chat backend
//! (HTTP, test doubles).

use async_trait::async_trait;
use mc_domain::error::Result;

use crate::types::{ChatRequest, ChatResponse};

/// One request/response cycle against the remote chat API.
///
/// Any `Err` means the exchange failed as a whole: the caller must not
/// record anything from it.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post(&self, req: &ChatRequest) -> Result<ChatResponse>;
}
