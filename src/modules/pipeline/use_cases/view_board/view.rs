// Read model of the board as rendered by the admin panel.

use crate::modules::pipeline::core::deal::Deal;
use crate::modules::pipeline::core::projection::{BoardColumn, BoardProjection, PipelineSummary};
use crate::modules::pipeline::core::stage::StageColor;
use crate::shared::core::currency::format_brl;
use crate::shared::core::primitives::StageId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumnView {
    pub stage_id: StageId,
    pub name: String,
    pub color: StageColor,
    pub hex: &'static str,
    pub order: usize,
    pub deal_count: usize,
    pub total_value: f64,
    pub total_label: String,
    pub deals: Vec<Deal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub deal_count: usize,
    pub total_value: f64,
    pub total_label: String,
    pub weighted_value: f64,
    pub weighted_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub columns: Vec<BoardColumnView>,
    pub unassigned: Vec<Deal>,
    pub summary: SummaryView,
}

impl From<BoardColumn> for BoardColumnView {
    fn from(column: BoardColumn) -> Self {
        Self {
            deal_count: column.deal_count(),
            total_label: column.total_label(),
            stage_id: column.stage.id,
            name: column.stage.name,
            color: column.stage.color,
            hex: column.stage.color.hex(),
            order: column.stage.order,
            total_value: column.total_value,
            deals: column.deals,
        }
    }
}

impl From<PipelineSummary> for SummaryView {
    fn from(summary: PipelineSummary) -> Self {
        Self {
            deal_count: summary.deal_count,
            total_value: summary.total_value,
            total_label: format_brl(summary.total_value),
            weighted_value: summary.weighted_value,
            weighted_label: format_brl(summary.weighted_value),
        }
    }
}

impl From<BoardProjection> for BoardView {
    fn from(projection: BoardProjection) -> Self {
        let summary = projection.summary().into();
        Self {
            columns: projection.columns.into_iter().map(Into::into).collect(),
            unassigned: projection.unassigned,
            summary,
        }
    }
}
