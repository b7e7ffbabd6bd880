use crate::modules::pipeline::core::stage::StageColor;
use crate::shared::core::primitives::StageId;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateStage {
    pub name: String,
    pub color: StageColor,
}

/// Partial edit from the "manage stages" form. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateStage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<StageColor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteStage {
    /// Stage that receives the deals still held by the deleted one.
    #[serde(default)]
    pub reassign_to: Option<StageId>,
}
