use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RefreshResponse {
    pub loaded: usize,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.board.load().await {
        Ok(loaded) => Json(RefreshResponse { loaded }).into_response(),
        Err(err) => err.into_response(),
    }
}
