// End to end scenarios over a mounted board, in memory gateway and notifier.

use crate::modules::pipeline::adapters::outbound::deals_in_memory::UpdateScript;
use crate::modules::pipeline::core::stage::StageColor;
use crate::modules::pipeline::core::stage_registry::StageRegistry;
use crate::modules::pipeline::use_cases::move_deal::command::MoveDeal;
use crate::modules::pipeline::use_cases::move_deal::decision::TransitionOutcome;
use crate::shared::core::primitives::{DealId, StageId};
use crate::shared::infrastructure::notifier::NotificationKind;
use crate::tests::fixtures::board::{BoardFixture, board_with, board_with_registry};
use crate::tests::fixtures::deals::DealBuilder;
use rstest::rstest;

fn lead_and_proposal() -> StageRegistry {
    StageRegistry::with_stages([
        (StageId::from("Lead"), "Lead".to_string(), StageColor::Blue),
        (StageId::from("Proposal"), "Proposal".to_string(), StageColor::Yellow),
    ])
    .unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_move_a_deal_between_two_columns_with_one_remote_write() {
    let BoardFixture {
        board,
        gateway,
        notifier,
    } = board_with_registry(
        lead_and_proposal(),
        vec![DealBuilder::new().id("d1").stage("Lead").value(1000.0).build()],
    )
    .await;

    let outcome = board
        .commit(MoveDeal {
            deal_id: DealId::from("d1"),
            stage_id: StageId::from("Proposal"),
        })
        .await
        .unwrap();

    assert!(matches!(outcome, TransitionOutcome::Moved { .. }));
    let projection = board.projection().await;
    let lead = projection.column(&StageId::from("Lead")).unwrap();
    let proposal = projection.column(&StageId::from("Proposal")).unwrap();
    assert!(lead.deals.is_empty());
    assert_eq!(lead.total_value, 0.0);
    assert_eq!(proposal.deals.len(), 1);
    assert_eq!(proposal.deals[0].id, DealId::from("d1"));
    assert_eq!(proposal.total_value, 1000.0);
    assert_eq!(
        gateway.update_calls().await,
        vec![(DealId::from("d1"), StageId::from("Proposal"))]
    );
    assert_eq!(notifier.all().await[0].message, "Deal moved to Proposal.");
}

#[rstest]
#[tokio::test]
async fn it_should_put_every_deal_under_exactly_one_key() {
    let BoardFixture { board, .. } = board_with(vec![
        DealBuilder::new().id("a").stage("lead").build(),
        DealBuilder::new().id("b").stage("closed_won").build(),
        DealBuilder::new().id("c").stage("retired").build(),
    ])
    .await;

    let projection = board.projection().await;

    assert_eq!(projection.columns.len(), board.stages().await.len());
    let placed: usize = projection.columns.iter().map(|c| c.deal_count()).sum();
    assert_eq!(placed + projection.unassigned.len(), 3);
    assert_eq!(projection.unassigned[0].id, DealId::from("c"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn it_should_recover_from_a_failed_drop() {
    let BoardFixture {
        board,
        gateway,
        notifier,
    } = board_with(vec![DealBuilder::new().id("d1").stage("lead").build()]).await;
    gateway
        .script_updates([UpdateScript {
            delay_ms: 50,
            fail: true,
        }])
        .await;

    board.pick_up(DealId::from("d1")).await;
    board.hover(Some(StageId::from("negotiation"))).await;
    let released = board.release().await;

    assert!(released.is_err());
    assert_eq!(board.deals().await[0].stage, StageId::from("lead"));
    assert!(board.drag_session().await.is_idle());
    let feed = notifier.all().await;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].kind, NotificationKind::Error);
    assert_eq!(feed[0].message, "Could not update the deal.");
}
