use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::pipeline::core::deal::Deal;
use crate::modules::pipeline::use_cases::view_board::view::{
    BoardColumnView, BoardView, SummaryView,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlDeal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub stage: String,
    pub client_id: Option<String>,
    pub probability: i32,
    pub expected_close_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlBoardColumn {
    pub stage_id: String,
    pub name: String,
    pub color: String,
    pub hex: String,
    pub deal_count: i32,
    pub total_value: f64,
    pub total_label: String,
    pub deals: Vec<GqlDeal>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlSummary {
    pub deal_count: i32,
    pub total_value: f64,
    pub total_label: String,
    pub weighted_value: f64,
    pub weighted_label: String,
}

#[derive(SimpleObject, Clone)]
pub struct GqlBoard {
    pub columns: Vec<GqlBoardColumn>,
    pub unassigned: Vec<GqlDeal>,
    pub summary: GqlSummary,
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl From<Deal> for GqlDeal {
    fn from(d: Deal) -> Self {
        Self {
            id: d.id.to_string(),
            title: d.title,
            description: d.description,
            value: d.value,
            stage: d.stage.to_string(),
            client_id: d.client_id,
            probability: i32::from(d.probability),
            expected_close_date: d.expected_close_date,
            created_at: d.created_at,
        }
    }
}

impl From<BoardColumnView> for GqlBoardColumn {
    fn from(c: BoardColumnView) -> Self {
        Self {
            stage_id: c.stage_id.to_string(),
            name: c.name,
            color: c.color.as_str().to_string(),
            hex: c.hex.to_string(),
            deal_count: count(c.deal_count),
            total_value: c.total_value,
            total_label: c.total_label,
            deals: c.deals.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SummaryView> for GqlSummary {
    fn from(s: SummaryView) -> Self {
        Self {
            deal_count: count(s.deal_count),
            total_value: s.total_value,
            total_label: s.total_label,
            weighted_value: s.weighted_value,
            weighted_label: s.weighted_label,
        }
    }
}

impl From<BoardView> for GqlBoard {
    fn from(v: BoardView) -> Self {
        Self {
            columns: v.columns.into_iter().map(Into::into).collect(),
            unassigned: v.unassigned.into_iter().map(Into::into).collect(),
            summary: v.summary.into(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn board(&self, context: &Context<'_>) -> GqlResult<GqlBoard> {
        let state = context.data_unchecked::<AppState>();
        let view = BoardView::from(state.board.projection().await);
        Ok(view.into())
    }
}
