use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::pipeline::use_cases::move_deal::inbound::graphql::MutationRoot;
pub use crate::modules::pipeline::use_cases::view_board::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
