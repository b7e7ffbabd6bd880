// Stage administration of the board: create, rename, recolor, delete.
//
// Deletion
// - Existence and the two stage floor are checked before anything moves.
// - A stage that an unresolved stage write may still land a deal in is kept.
// - Deals still held by the stage move to `reassign_to` through the committer, one by one.
// - The first failed move aborts the deletion and the stage is kept.
// - Removal checks again under the write lock, since moves may have run meanwhile.

use crate::modules::pipeline::board::PipelineBoard;
use crate::modules::pipeline::core::errors::PipelineError;
use crate::modules::pipeline::core::stage::{Stage, StageColor};
use crate::modules::pipeline::core::stage_registry::StageRegistry;
use crate::modules::pipeline::use_cases::manage_stages::command::{
    CreateStage, DeleteStage, UpdateStage,
};
use crate::modules::pipeline::use_cases::move_deal::command::MoveDeal;
use crate::shared::core::primitives::{DealId, StageId};

impl PipelineBoard {
    pub async fn create_stage(&self, command: CreateStage) -> Result<Stage, PipelineError> {
        let created = self
            .state
            .write()
            .await
            .registry
            .create(&command.name, command.color);
        self.stage_changed(created, "Stage added.").await
    }

    pub async fn rename_stage(&self, id: &StageId, name: &str) -> Result<Stage, PipelineError> {
        let renamed = self.state.write().await.registry.rename(id, name);
        self.stage_changed(renamed, "Stage updated.").await
    }

    pub async fn recolor_stage(
        &self,
        id: &StageId,
        color: StageColor,
    ) -> Result<Stage, PipelineError> {
        let recolored = self.state.write().await.registry.recolor(id, color);
        self.stage_changed(recolored, "Stage updated.").await
    }

    /// Applies both fields under one lock, nothing changes when either is invalid.
    pub async fn update_stage(
        &self,
        id: &StageId,
        command: UpdateStage,
    ) -> Result<Stage, PipelineError> {
        let updated = {
            let mut state = self.state.write().await;
            let mut candidate = state.registry.clone();
            let result = apply_update(&mut candidate, id, command);
            if result.is_ok() {
                state.registry = candidate;
            }
            result
        };
        self.stage_changed(updated, "Stage updated.").await
    }

    pub async fn delete_stage(
        &self,
        id: &StageId,
        command: DeleteStage,
    ) -> Result<Stage, PipelineError> {
        let held = match self.plan_deletion(id, command.reassign_to.as_ref()).await {
            Ok(held) => held,
            Err(err) => {
                self.report_error(&err, &err.to_string()).await;
                return Err(err);
            }
        };

        if let Some(target) = command.reassign_to.as_ref() {
            for deal_id in held {
                self.commit(MoveDeal {
                    deal_id,
                    stage_id: target.clone(),
                })
                .await?;
            }
        }

        let removed = {
            let mut state = self.state.write().await;
            if state.deals.in_stage(id).next().is_some() {
                Err(PipelineError::Policy(format!(
                    "stage {id} received deals while its deals were being moved"
                )))
            } else if state.deals.has_writes_involving(id) {
                Err(PipelineError::Policy(format!(
                    "stage {id} has stage updates in flight"
                )))
            } else {
                state.registry.remove(id)
            }
        };
        self.stage_changed(removed, "Stage removed.").await
    }

    async fn plan_deletion(
        &self,
        id: &StageId,
        reassign_to: Option<&StageId>,
    ) -> Result<Vec<DealId>, PipelineError> {
        let state = self.state.read().await;
        state.registry.ensure_removable(id)?;
        if state.deals.has_writes_involving(id) {
            return Err(PipelineError::Policy(format!(
                "stage {id} has stage updates in flight"
            )));
        }
        let held: Vec<DealId> = state.deals.in_stage(id).map(|deal| deal.id.clone()).collect();
        if held.is_empty() {
            return Ok(held);
        }
        let Some(target) = reassign_to else {
            return Err(PipelineError::Policy(format!(
                "stage {id} still holds {} deals, choose a stage to move them to",
                held.len()
            )));
        };
        if target == id {
            return Err(PipelineError::Validation(
                "deals cannot be moved to the stage being deleted".to_string(),
            ));
        }
        if !state.registry.contains(target) {
            return Err(PipelineError::NotFound(format!("stage {target}")));
        }
        Ok(held)
    }

    async fn stage_changed(
        &self,
        result: Result<Stage, PipelineError>,
        confirmation: &str,
    ) -> Result<Stage, PipelineError> {
        match result {
            Ok(stage) => {
                tracing::info!(stage_id = %stage.id, name = %stage.name, "{confirmation}");
                self.report_success(confirmation).await;
                Ok(stage)
            }
            Err(err) => {
                self.report_error(&err, &err.to_string()).await;
                Err(err)
            }
        }
    }
}

fn apply_update(
    registry: &mut StageRegistry,
    id: &StageId,
    command: UpdateStage,
) -> Result<Stage, PipelineError> {
    let mut stage = registry
        .get(id)
        .cloned()
        .ok_or_else(|| PipelineError::NotFound(format!("stage {id}")))?;
    if let Some(name) = command.name.as_deref() {
        stage = registry.rename(id, name)?;
    }
    if let Some(color) = command.color {
        stage = registry.recolor(id, color)?;
    }
    Ok(stage)
}

#[cfg(test)]
mod manage_stages_handler_tests {
    use crate::modules::pipeline::adapters::outbound::deals_in_memory::UpdateScript;
    use crate::modules::pipeline::core::errors::PipelineError;
    use crate::modules::pipeline::core::stage::StageColor;
    use crate::modules::pipeline::core::stage_registry::StageRegistry;
    use crate::modules::pipeline::use_cases::manage_stages::command::{
        CreateStage, DeleteStage, UpdateStage,
    };
    use crate::modules::pipeline::use_cases::move_deal::command::MoveDeal;
    use crate::shared::core::primitives::{DealId, StageId};
    use crate::shared::infrastructure::notifier::NotificationKind;
    use crate::tests::fixtures::board::{BoardFixture, board_with, board_with_registry};
    use crate::tests::fixtures::deals::DealBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_append_a_new_stage_and_confirm() {
        let BoardFixture {
            board, notifier, ..
        } = board_with(vec![]).await;

        let stage = board
            .create_stage(CreateStage {
                name: "  Onboarding ".to_string(),
                color: StageColor::Purple,
            })
            .await
            .unwrap();

        assert_eq!(stage.name, "Onboarding");
        assert_eq!(stage.order, 4);
        assert_eq!(board.projection().await.columns.len(), 5);
        assert_eq!(notifier.all().await[0].message, "Stage added.");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_the_stage_untouched_when_an_update_is_invalid() {
        let BoardFixture {
            board, notifier, ..
        } = board_with(vec![]).await;
        let lead = StageId::from("lead");

        let result = board
            .update_stage(
                &lead,
                UpdateStage {
                    name: Some(" ".to_string()),
                    color: Some(StageColor::Red),
                },
            )
            .await;

        assert!(matches!(result, Err(PipelineError::Validation(_))));
        let stages = board.stages().await;
        assert_eq!(stages[0].name, "Leads");
        assert_eq!(stages[0].color, StageColor::Blue);
        assert_eq!(notifier.all().await[0].kind, NotificationKind::Error);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_rename_and_recolor() {
        let BoardFixture { board, .. } = board_with(vec![]).await;
        let lead = StageId::from("lead");

        board.rename_stage(&lead, "Prospects").await.unwrap();
        let stage = board.recolor_stage(&lead, StageColor::Gray).await.unwrap();

        assert_eq!(stage.name, "Prospects");
        assert_eq!(stage.color, StageColor::Gray);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_go_below_two_stages() {
        let registry = StageRegistry::with_stages([
            (StageId::from("lead"), "Lead".to_string(), StageColor::Blue),
            (StageId::from("proposal"), "Proposal".to_string(), StageColor::Yellow),
        ])
        .unwrap();
        let BoardFixture { board, .. } = board_with_registry(registry, vec![]).await;

        let result = board
            .delete_stage(&StageId::from("lead"), DeleteStage::default())
            .await;

        assert!(matches!(result, Err(PipelineError::Policy(_))));
        assert_eq!(board.stages().await.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_require_a_target_for_a_stage_holding_deals() {
        let BoardFixture { board, gateway, .. } =
            board_with(vec![DealBuilder::new().id("d1").stage("proposal").build()]).await;

        let result = board
            .delete_stage(&StageId::from("proposal"), DeleteStage::default())
            .await;

        assert!(matches!(result, Err(PipelineError::Policy(_))));
        assert_eq!(board.stages().await.len(), 4);
        assert!(gateway.update_calls().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_move_held_deals_then_remove_the_stage() {
        let BoardFixture {
            board,
            gateway,
            notifier,
        } = board_with(vec![
            DealBuilder::new().id("d1").stage("proposal").build(),
            DealBuilder::new().id("d2").stage("proposal").build(),
            DealBuilder::new().id("d3").stage("lead").build(),
        ])
        .await;

        let removed = board
            .delete_stage(
                &StageId::from("proposal"),
                DeleteStage {
                    reassign_to: Some(StageId::from("negotiation")),
                },
            )
            .await
            .unwrap();

        assert_eq!(removed.id, StageId::from("proposal"));
        assert_eq!(gateway.update_calls().await.len(), 2);
        let projection = board.projection().await;
        assert_eq!(projection.columns.len(), 3);
        assert_eq!(
            projection
                .column(&StageId::from("negotiation"))
                .unwrap()
                .deal_count(),
            2
        );
        assert!(projection.unassigned.is_empty());
        assert_eq!(notifier.all().await.last().unwrap().message, "Stage removed.");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_stage_when_a_migration_fails() {
        let BoardFixture { board, gateway, .. } =
            board_with(vec![DealBuilder::new().id("d1").stage("proposal").build()]).await;
        gateway
            .script_updates([UpdateScript {
                delay_ms: 0,
                fail: true,
            }])
            .await;

        let result = board
            .delete_stage(
                &StageId::from("proposal"),
                DeleteStage {
                    reassign_to: Some(StageId::from("lead")),
                },
            )
            .await;

        assert!(matches!(result, Err(PipelineError::Remote(_))));
        assert_eq!(board.stages().await.len(), 4);
        assert_eq!(board.deals().await[0].stage, StageId::from("proposal"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_moving_deals_into_the_deleted_stage() {
        let BoardFixture { board, .. } =
            board_with(vec![DealBuilder::new().id("d1").stage("proposal").build()]).await;

        let result = board
            .delete_stage(
                &StageId::from("proposal"),
                DeleteStage {
                    reassign_to: Some(StageId::from("proposal")),
                },
            )
            .await;

        assert!(matches!(result, Err(PipelineError::Validation(_))));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_keep_a_stage_an_in_flight_rollback_returns_to() {
        let BoardFixture { board, gateway, .. } =
            board_with(vec![DealBuilder::new().id("d1").stage("proposal").build()]).await;
        gateway
            .script_updates([UpdateScript {
                delay_ms: 100,
                fail: true,
            }])
            .await;

        let delete = async {
            tokio::task::yield_now().await;
            board
                .delete_stage(&StageId::from("proposal"), DeleteStage::default())
                .await
        };
        let (moved, deleted) = tokio::join!(
            board.commit(MoveDeal {
                deal_id: DealId::from("d1"),
                stage_id: StageId::from("lead"),
            }),
            delete
        );

        assert!(matches!(moved, Err(PipelineError::Remote(_))));
        assert!(matches!(deleted, Err(PipelineError::Policy(_))));
        assert_eq!(board.stages().await.len(), 4);
        assert_eq!(board.deals().await[0].stage, StageId::from("proposal"));
        assert!(board.projection().await.unassigned.is_empty());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_keep_the_stage_when_a_deal_arrives_during_migration() {
        let BoardFixture { board, gateway, .. } = board_with(vec![
            DealBuilder::new().id("d1").stage("proposal").build(),
            DealBuilder::new().id("d2").stage("negotiation").build(),
        ])
        .await;
        gateway
            .script_updates([
                UpdateScript {
                    delay_ms: 100,
                    fail: false,
                },
                UpdateScript {
                    delay_ms: 10,
                    fail: false,
                },
            ])
            .await;

        let arrive = async {
            tokio::task::yield_now().await;
            board
                .commit(MoveDeal {
                    deal_id: DealId::from("d2"),
                    stage_id: StageId::from("proposal"),
                })
                .await
        };
        let proposal = StageId::from("proposal");
        let (deleted, arrived) = tokio::join!(
            board.delete_stage(
                &proposal,
                DeleteStage {
                    reassign_to: Some(StageId::from("lead")),
                },
            ),
            arrive
        );

        assert!(arrived.is_ok());
        assert!(matches!(deleted, Err(PipelineError::Policy(_))));
        assert_eq!(board.stages().await.len(), 4);
        let projection = board.projection().await;
        assert!(projection.unassigned.is_empty());
        assert_eq!(
            projection
                .column(&StageId::from("proposal"))
                .unwrap()
                .deal_count(),
            1
        );
    }
}
