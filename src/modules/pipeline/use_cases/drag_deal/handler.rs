// Pointer events of the board, forwarded to the drag session.
//
// - Session transitions happen under the state lock.
// - A release that yields a commit runs the committer after the lock is released.

use crate::modules::pipeline::board::PipelineBoard;
use crate::modules::pipeline::core::drag_session::{CancelReason, DragSession, DropOutcome};
use crate::modules::pipeline::core::errors::PipelineError;
use crate::modules::pipeline::use_cases::move_deal::command::MoveDeal;
use crate::modules::pipeline::use_cases::move_deal::decision::TransitionOutcome;
use crate::shared::core::primitives::{DealId, StageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Committed(TransitionOutcome),
    Cancelled(CancelReason),
}

impl PipelineBoard {
    /// Ignored when the deal is not loaded or another deal is lifted.
    pub async fn pick_up(&self, deal_id: DealId) -> DragSession {
        let mut state = self.state.write().await;
        if state.deals.get(&deal_id).is_none() {
            tracing::debug!(deal_id = %deal_id, "pick up of an unloaded deal ignored");
            return state.drag.clone();
        }
        if !state.drag.pick_up(deal_id.clone()) {
            tracing::debug!(deal_id = %deal_id, "pick up ignored, a drag is in progress");
        }
        state.drag.clone()
    }

    /// An unknown stage counts as empty space.
    pub async fn hover(&self, over: Option<StageId>) -> DragSession {
        let mut state = self.state.write().await;
        let candidate = over.filter(|stage| state.registry.contains(stage));
        if !state.drag.hover(candidate) {
            tracing::debug!("hover ignored, nothing lifted");
        }
        state.drag.clone()
    }

    pub async fn release(&self) -> Result<ReleaseOutcome, PipelineError> {
        let outcome = {
            let mut state = self.state.write().await;
            let current = state
                .drag
                .active_deal()
                .and_then(|id| state.deals.get(id))
                .map(|deal| deal.stage.clone());
            state.drag.release(current.as_ref())
        };
        match outcome {
            DropOutcome::Commit { deal_id, stage_id } => {
                let committed = self.commit(MoveDeal { deal_id, stage_id }).await?;
                Ok(ReleaseOutcome::Committed(committed))
            }
            DropOutcome::Cancelled(reason) => {
                tracing::debug!(?reason, "drop cancelled");
                Ok(ReleaseOutcome::Cancelled(reason))
            }
        }
    }

    pub async fn cancel_drag(&self) -> CancelReason {
        match self.state.write().await.drag.cancel() {
            DropOutcome::Cancelled(reason) => reason,
            DropOutcome::Commit { .. } => CancelReason::Aborted,
        }
    }
}

#[cfg(test)]
mod drag_deal_handler_tests {
    use super::ReleaseOutcome;
    use crate::modules::pipeline::core::drag_session::{CancelReason, DragSession};
    use crate::modules::pipeline::use_cases::move_deal::decision::TransitionOutcome;
    use crate::shared::core::primitives::{DealId, StageId};
    use crate::tests::fixtures::board::{BoardFixture, board_with};
    use crate::tests::fixtures::deals::DealBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    async fn dragging_board() -> BoardFixture {
        board_with(vec![
            DealBuilder::new().id("d1").stage("lead").build(),
            DealBuilder::new().id("d2").stage("proposal").build(),
        ])
        .await
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_commit_a_drop_on_another_stage(#[future] dragging_board: BoardFixture) {
        let fixture = dragging_board.await;
        fixture.board.pick_up(DealId::from("d1")).await;
        fixture.board.hover(Some(StageId::from("negotiation"))).await;

        let outcome = fixture.board.release().await.unwrap();

        assert!(matches!(
            outcome,
            ReleaseOutcome::Committed(TransitionOutcome::Moved { .. })
        ));
        assert_eq!(
            fixture.gateway.update_calls().await,
            vec![(DealId::from("d1"), StageId::from("negotiation"))]
        );
        assert!(fixture.board.drag_session().await.is_idle());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_do_nothing_when_dropped_on_its_own_stage(
        #[future] dragging_board: BoardFixture,
    ) {
        let fixture = dragging_board.await;
        fixture.board.pick_up(DealId::from("d1")).await;
        fixture.board.hover(Some(StageId::from("lead"))).await;

        let outcome = fixture.board.release().await.unwrap();

        assert_eq!(outcome, ReleaseOutcome::Cancelled(CancelReason::SameStage));
        assert!(fixture.gateway.update_calls().await.is_empty());
        assert!(fixture.notifier.all().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_treat_an_unknown_column_as_empty_space(
        #[future] dragging_board: BoardFixture,
    ) {
        let fixture = dragging_board.await;
        fixture.board.pick_up(DealId::from("d1")).await;
        let session = fixture.board.hover(Some(StageId::from("archived"))).await;

        assert_eq!(
            session,
            DragSession::Hovering {
                deal_id: DealId::from("d1"),
                candidate: None,
            }
        );
        let outcome = fixture.board.release().await.unwrap();
        assert_eq!(outcome, ReleaseOutcome::Cancelled(CancelReason::NoTarget));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ignore_a_second_pick_up_and_unloaded_deals(
        #[future] dragging_board: BoardFixture,
    ) {
        let fixture = dragging_board.await;
        let ghost = fixture.board.pick_up(DealId::from("ghost")).await;
        assert!(ghost.is_idle());

        fixture.board.pick_up(DealId::from("d1")).await;
        let second = fixture.board.pick_up(DealId::from("d2")).await;
        assert_eq!(second.active_deal(), Some(&DealId::from("d1")));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_cancel_without_side_effects(#[future] dragging_board: BoardFixture) {
        let fixture = dragging_board.await;
        fixture.board.pick_up(DealId::from("d1")).await;
        fixture.board.hover(Some(StageId::from("proposal"))).await;

        assert_eq!(fixture.board.cancel_drag().await, CancelReason::Aborted);
        assert_eq!(fixture.board.cancel_drag().await, CancelReason::NoSession);
        assert!(fixture.gateway.update_calls().await.is_empty());
        assert_eq!(
            fixture.board.deals().await[0].stage,
            StageId::from("lead")
        );
    }
}
