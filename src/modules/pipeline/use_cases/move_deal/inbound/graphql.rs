use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::pipeline::use_cases::move_deal::command::MoveDeal;
use crate::modules::pipeline::use_cases::move_deal::inbound::http::TransitionResponse;
use crate::shared::core::primitives::{DealId, StageId};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTransition {
    pub outcome: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub reason: Option<String>,
}

impl From<TransitionResponse> for GqlTransition {
    fn from(r: TransitionResponse) -> Self {
        Self {
            outcome: r.outcome.to_string(),
            from: r.from.map(|s| s.to_string()),
            to: r.to.map(|s| s.to_string()),
            reason: r.reason.map(str::to_string),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn move_deal(
        &self,
        context: &Context<'_>,
        deal_id: ID,
        stage_id: ID,
    ) -> GqlResult<GqlTransition> {
        let state = context.data_unchecked::<AppState>();
        let command = MoveDeal {
            deal_id: DealId::new(deal_id.0),
            stage_id: StageId::new(stage_id.0),
        };

        let outcome = state
            .board
            .commit(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(TransitionResponse::from(outcome).into())
    }
}
