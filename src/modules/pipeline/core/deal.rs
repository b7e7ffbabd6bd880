// A sales opportunity tracked through the pipeline.
//
// Ownership
// - Owned by the deal store. The board projection only reads `stage` to bucket it.
// - `stage` is a reference to a stage id, never a copy of the stage.

use crate::shared::core::primitives::{DealId, StageId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub stage: StageId,
    pub client_id: Option<String>,
    pub probability: u8,
    pub expected_close_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Deal {
    /// Missing values count as zero in every aggregate.
    pub fn amount(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    pub fn weighted_amount(&self) -> f64 {
        self.amount() * f64::from(self.probability) / 100.0
    }
}

/// Fields of a deal before the remote store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDeal {
    pub title: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub stage: StageId,
    pub client_id: Option<String>,
    pub probability: u8,
    pub expected_close_date: Option<NaiveDate>,
}
