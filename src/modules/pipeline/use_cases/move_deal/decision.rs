use crate::shared::core::primitives::{DealId, StageId};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("stage {0} does not exist")]
    UnknownStage(StageId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    UnknownDeal,
    SameStage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { from: StageId },
    Unchanged(NoOpReason),
    Rejected { reason: DecideError },
}

/// What a commit ended with, once the remote store answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    Moved {
        deal_id: DealId,
        from: StageId,
        to: StageId,
    },
    Unchanged(NoOpReason),
    /// A newer transition of the same deal was issued while this one was in flight.
    Superseded,
}
