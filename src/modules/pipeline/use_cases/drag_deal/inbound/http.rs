// Pointer events of the board UI.
//
// pick-up, hover and cancel always answer 200 with the session after the event, ignored
// events included. release answers with the drop result, or the commit error.

use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::pipeline::core::drag_session::CancelReason;
use crate::modules::pipeline::use_cases::drag_deal::handler::ReleaseOutcome;
use crate::modules::pipeline::use_cases::move_deal::inbound::http::TransitionResponse;
use crate::shared::core::primitives::{DealId, StageId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PickUpBody {
    pub deal_id: DealId,
}

#[derive(Deserialize)]
pub struct HoverBody {
    #[serde(default)]
    pub stage_id: Option<StageId>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ReleaseResponse {
    Committed { transition: TransitionResponse },
    Cancelled { reason: CancelReason },
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub reason: CancelReason,
}

pub async fn pick_up(
    State(state): State<AppState>,
    body: Result<Json<PickUpBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    Json(state.board.pick_up(body.deal_id).await).into_response()
}

pub async fn hover(
    State(state): State<AppState>,
    body: Result<Json<HoverBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    Json(state.board.hover(body.stage_id).await).into_response()
}

pub async fn release(State(state): State<AppState>) -> impl IntoResponse {
    match state.board.release().await {
        Ok(ReleaseOutcome::Committed(outcome)) => Json(ReleaseResponse::Committed {
            transition: outcome.into(),
        })
        .into_response(),
        Ok(ReleaseOutcome::Cancelled(reason)) => {
            Json(ReleaseResponse::Cancelled { reason }).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn cancel(State(state): State<AppState>) -> impl IntoResponse {
    Json(CancelResponse {
        reason: state.board.cancel_drag().await,
    })
}
