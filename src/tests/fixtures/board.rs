// A mounted board over the in memory gateway and notifier.

use crate::modules::pipeline::adapters::outbound::deals_gateway::DealsGateway;
use crate::modules::pipeline::adapters::outbound::deals_in_memory::InMemoryDeals;
use crate::modules::pipeline::board::PipelineBoard;
use crate::modules::pipeline::core::deal::Deal;
use crate::modules::pipeline::core::stage_registry::StageRegistry;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shell::state::AppState;
use std::sync::Arc;

pub struct BoardFixture {
    pub board: PipelineBoard,
    pub gateway: Arc<InMemoryDeals>,
    pub notifier: Arc<InMemoryNotifier>,
}

/// Default stages, `deals` already loaded.
pub async fn board_with(deals: Vec<Deal>) -> BoardFixture {
    board_with_registry(StageRegistry::default(), deals).await
}

pub async fn board_with_registry(registry: StageRegistry, deals: Vec<Deal>) -> BoardFixture {
    let gateway = Arc::new(InMemoryDeals::with_deals(deals));
    let notifier = Arc::new(InMemoryNotifier::new());
    let board = PipelineBoard::with_registry(registry, gateway.clone(), notifier.clone());
    board.load().await.unwrap();
    BoardFixture {
        board,
        gateway,
        notifier,
    }
}

impl PipelineBoard {
    /// Same state and notifier, different remote store.
    pub fn rewired(self, gateway: impl DealsGateway + 'static) -> Self {
        Self {
            gateway: Arc::new(gateway),
            ..self
        }
    }
}

/// Shell state over a loaded board, for inbound adapter tests.
pub async fn app_state_with(deals: Vec<Deal>) -> (AppState, Arc<InMemoryDeals>) {
    let BoardFixture {
        board,
        gateway,
        notifier,
    } = board_with(deals).await;
    let state = AppState {
        board: Arc::new(board),
        notifications: notifier,
    };
    (state, gateway)
}
