// Stage transition committer.
//
// Flow
// - Decide against the current state. No-ops and rejections never reach the remote store.
// - Move the deal locally and take a transition version, then release the lock.
// - Persist the stage. On failure roll back to the last stage the remote store acknowledged.
// - Responses of superseded transitions only update what is known remotely. They never
//   notify.

use crate::modules::pipeline::board::PipelineBoard;
use crate::modules::pipeline::core::deal_store::PendingTransition;
use crate::modules::pipeline::core::errors::PipelineError;
use crate::modules::pipeline::use_cases::move_deal::command::MoveDeal;
use crate::modules::pipeline::use_cases::move_deal::decide::decide_move;
use crate::modules::pipeline::use_cases::move_deal::decision::{
    Decision, NoOpReason, TransitionOutcome,
};

impl PipelineBoard {
    pub async fn commit(&self, command: MoveDeal) -> Result<TransitionOutcome, PipelineError> {
        let (pending, stage_name) = {
            let mut state = self.state.write().await;
            match decide_move(&state, &command) {
                Decision::Unchanged(reason) => return Ok(TransitionOutcome::Unchanged(reason)),
                Decision::Rejected { reason } => {
                    drop(state);
                    let err = PipelineError::NotFound(reason.to_string());
                    self.report_error(&err, &reason.to_string()).await;
                    return Err(err);
                }
                Decision::Accepted { .. } => {}
            }
            let stage_name = state
                .registry
                .get(&command.stage_id)
                .map(|stage| stage.name.clone())
                .unwrap_or_else(|| command.stage_id.to_string());
            match state
                .deals
                .begin_transition(&command.deal_id, &command.stage_id)
            {
                Some(pending) => (pending, stage_name),
                None => return Ok(TransitionOutcome::Unchanged(NoOpReason::SameStage)),
            }
        };

        let persisted = self
            .gateway
            .update_deal_stage(&pending.deal_id, &pending.to)
            .await;

        match persisted {
            Ok(()) => self.confirm(pending, &stage_name).await,
            Err(err) => self.compensate(pending, PipelineError::from(err)).await,
        }
    }

    async fn confirm(
        &self,
        pending: PendingTransition,
        stage_name: &str,
    ) -> Result<TransitionOutcome, PipelineError> {
        if !self.state.write().await.deals.confirm(&pending) {
            tracing::debug!(
                deal_id = %pending.deal_id,
                version = pending.version,
                "superseded stage update confirmed"
            );
            return Ok(TransitionOutcome::Superseded);
        }
        tracing::info!(
            deal_id = %pending.deal_id,
            from = %pending.from,
            to = %pending.to,
            "deal moved"
        );
        self.report_success(format!("Deal moved to {stage_name}."))
            .await;
        Ok(TransitionOutcome::Moved {
            deal_id: pending.deal_id,
            from: pending.from,
            to: pending.to,
        })
    }

    async fn compensate(
        &self,
        pending: PendingTransition,
        err: PipelineError,
    ) -> Result<TransitionOutcome, PipelineError> {
        let Some(back_to) = self.state.write().await.deals.fail(&pending) else {
            tracing::debug!(
                deal_id = %pending.deal_id,
                version = pending.version,
                error = %err,
                "superseded stage update failed"
            );
            return Ok(TransitionOutcome::Superseded);
        };
        tracing::warn!(deal_id = %pending.deal_id, back_to = %back_to, "stage update rolled back");
        self.report_error(&err, "Could not update the deal.").await;
        Err(err)
    }
}
