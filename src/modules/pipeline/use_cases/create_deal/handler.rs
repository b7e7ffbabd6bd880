// Create a deal through the remote store, then refresh the whole board.
//
// Responsibilities
// - Validate the command against the current stages. No remote call on rejection.
// - Insert remotely, then reload instead of appending so server assigned fields are used.

use crate::modules::pipeline::board::PipelineBoard;
use crate::modules::pipeline::core::deal::Deal;
use crate::modules::pipeline::core::errors::PipelineError;
use crate::modules::pipeline::use_cases::create_deal::command::CreateDeal;
use crate::modules::pipeline::use_cases::create_deal::decide::decide_create;

impl PipelineBoard {
    pub async fn create_deal(&self, command: CreateDeal) -> Result<Deal, PipelineError> {
        let decided = {
            let state = self.state.read().await;
            decide_create(&state.registry, command)
        };
        let new_deal = match decided {
            Ok(new_deal) => new_deal,
            Err(reason) => {
                let err = PipelineError::Validation(reason.to_string());
                self.report_error(&err, &reason.to_string()).await;
                return Err(err);
            }
        };

        let created = match self.gateway.insert_deal(&new_deal).await {
            Ok(created) => created,
            Err(err) => {
                let err = PipelineError::from(err);
                self.report_error(&err, "Could not create the deal.").await;
                return Err(err);
            }
        };
        tracing::info!(deal_id = %created.id, stage = %created.stage, "deal created");
        self.report_success("Deal created.").await;

        if self.load().await.is_err() {
            tracing::warn!(deal_id = %created.id, "board not refreshed after create");
        }
        Ok(created)
    }
}
