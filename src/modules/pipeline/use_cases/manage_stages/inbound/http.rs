use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::pipeline::use_cases::manage_stages::command::{
    CreateStage, DeleteStage, UpdateStage,
};
use crate::shared::core::primitives::StageId;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.board.stages().await)
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateStage>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.board.create_stage(command).await {
        Ok(stage) => (StatusCode::CREATED, Json(stage)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(stage_id): Path<String>,
    body: Result<Json<UpdateStage>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state
        .board
        .update_stage(&StageId::new(stage_id), command)
        .await
    {
        Ok(stage) => Json(stage).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(stage_id): Path<String>,
    Query(command): Query<DeleteStage>,
) -> impl IntoResponse {
    match state
        .board
        .delete_stage(&StageId::new(stage_id), command)
        .await
    {
        Ok(stage) => Json(stage).into_response(),
        Err(err) => err.into_response(),
    }
}
