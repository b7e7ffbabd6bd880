use crate::shared::core::primitives::{DealId, StageId};
use serde::Deserialize;

/// Move one deal to another stage, from a drop or a direct edit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveDeal {
    pub deal_id: DealId,
    pub stage_id: StageId,
}
