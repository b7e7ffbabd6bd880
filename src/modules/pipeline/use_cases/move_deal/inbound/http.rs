use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::pipeline::use_cases::move_deal::command::MoveDeal;
use crate::modules::pipeline::use_cases::move_deal::decision::{NoOpReason, TransitionOutcome};
use crate::shared::core::primitives::{DealId, StageId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MoveDealBody {
    pub stage_id: StageId,
}

#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<StageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<StageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl From<TransitionOutcome> for TransitionResponse {
    fn from(outcome: TransitionOutcome) -> Self {
        match outcome {
            TransitionOutcome::Moved { from, to, .. } => Self {
                outcome: "moved",
                from: Some(from),
                to: Some(to),
                reason: None,
            },
            TransitionOutcome::Unchanged(reason) => Self {
                outcome: "unchanged",
                from: None,
                to: None,
                reason: Some(match reason {
                    NoOpReason::UnknownDeal => "unknown_deal",
                    NoOpReason::SameStage => "same_stage",
                }),
            },
            TransitionOutcome::Superseded => Self {
                outcome: "superseded",
                from: None,
                to: None,
                reason: None,
            },
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
    body: Result<Json<MoveDealBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = MoveDeal {
        deal_id: DealId::new(deal_id),
        stage_id: body.stage_id,
    };
    match state.board.commit(command).await {
        Ok(outcome) => Json(TransitionResponse::from(outcome)).into_response(),
        Err(err) => err.into_response(),
    }
}
