// Port to the hosted backend that persists deals.
//
// Boundaries
// - The board only needs these three calls. Authentication and row level access stay on the
//   backend.
// - Errors are opaque to the board: it logs, notifies and rolls back, nothing more.

use crate::modules::pipeline::core::deal::{Deal, NewDeal};
use crate::shared::core::primitives::{DealId, StageId};
use async_trait::async_trait;
use thiserror::Error;

/// Deals in this stage are never loaded onto the board.
pub const CLOSED_LOST_STAGE: &str = "closed_lost";

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote store unreachable: {0}")]
    Transport(String),

    #[error("remote store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("remote store error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DealsGateway: Send + Sync {
    /// All deals not in `closed_lost`, newest first.
    async fn fetch_deals(&self) -> Result<Vec<Deal>, RemoteError>;
    async fn insert_deal(&self, deal: &NewDeal) -> Result<Deal, RemoteError>;
    async fn update_deal_stage(&self, id: &DealId, stage: &StageId) -> Result<(), RemoteError>;
}
