// Transport shapes of the `deals` table on the hosted backend, and mappers to the domain.
//
// - Nullable `stage` falls back to `lead`, the column default.
// - Nullable `probability` falls back to 0, out of range values are clamped to 100.

use crate::modules::pipeline::core::deal::{Deal, NewDeal};
use crate::shared::core::primitives::{DealId, StageId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_STAGE: &str = "lead";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DealRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub stage: Option<String>,
    pub client_id: Option<String>,
    pub probability: Option<i32>,
    pub expected_close_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDealRow {
    pub title: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub stage: String,
    pub client_id: Option<String>,
    pub probability: i32,
    pub expected_close_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagePatch<'a> {
    pub stage: &'a str,
}

impl From<DealRow> for Deal {
    fn from(row: DealRow) -> Self {
        Self {
            id: DealId::new(row.id),
            title: row.title,
            description: row.description,
            value: row.value,
            stage: StageId::new(row.stage.unwrap_or_else(|| DEFAULT_STAGE.to_string())),
            client_id: row.client_id,
            probability: row.probability.unwrap_or(0).clamp(0, 100) as u8,
            expected_close_date: row.expected_close_date,
            created_at: row.created_at,
        }
    }
}

impl From<&NewDeal> for NewDealRow {
    fn from(deal: &NewDeal) -> Self {
        Self {
            title: deal.title.clone(),
            description: deal.description.clone(),
            value: deal.value,
            stage: deal.stage.to_string(),
            client_id: deal.client_id.clone(),
            probability: i32::from(deal.probability),
            expected_close_date: deal.expected_close_date,
        }
    }
}
