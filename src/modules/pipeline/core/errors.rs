use crate::modules::pipeline::adapters::outbound::deals_gateway::RemoteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Local input failed a precondition. No remote call was issued.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The operation would break a board invariant.
    #[error("not allowed: {0}")]
    Policy(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}
