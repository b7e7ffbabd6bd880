// Input of the "new deal" form, before validation.

use crate::shared::core::primitives::StageId;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateDeal {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    /// Defaults to the first stage of the board.
    #[serde(default)]
    pub stage: Option<StageId>,
    #[serde(default)]
    pub client_id: Option<String>,
    /// Percentage, defaults to 50.
    #[serde(default)]
    pub probability: Option<u8>,
    #[serde(default)]
    pub expected_close_date: Option<NaiveDate>,
}
