use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::pipeline::use_cases::view_board::view::BoardView;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(BoardView::from(state.board.projection().await))
}
