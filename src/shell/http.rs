use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::pipeline::use_cases::create_deal::inbound::http as create_http;
use crate::modules::pipeline::use_cases::drag_deal::inbound::http as drag_http;
use crate::modules::pipeline::use_cases::load_deals::inbound::http as load_http;
use crate::modules::pipeline::use_cases::manage_stages::inbound::http as stages_http;
use crate::modules::pipeline::use_cases::move_deal::inbound::http as move_http;
use crate::modules::pipeline::use_cases::view_board::inbound::http as board_http;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = schema(state.clone());
    Router::new()
        .route("/board", get(board_http::handle))
        .route("/deals", post(create_http::handle))
        .route("/deals/refresh", post(load_http::handle))
        .route("/deals/{id}/stage", post(move_http::handle))
        .route("/drag/pick-up", post(drag_http::pick_up))
        .route("/drag/hover", post(drag_http::hover))
        .route("/drag/release", post(drag_http::release))
        .route("/drag/cancel", post(drag_http::cancel))
        .route("/stages", get(stages_http::list).post(stages_http::create))
        .route(
            "/stages/{id}",
            patch(stages_http::update).delete(stages_http::delete),
        )
        .route("/notifications", get(drain_notifications))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn drain_notifications(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.notifications.drain().await)
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
