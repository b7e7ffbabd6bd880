use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::pipeline::use_cases::create_deal::command::CreateDeal;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateDeal>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.board.create_deal(command).await {
        Ok(deal) => (StatusCode::CREATED, Json(deal)).into_response(),
        Err(err) => err.into_response(),
    }
}
