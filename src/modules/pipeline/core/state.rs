use crate::modules::pipeline::core::deal_store::DealStore;
use crate::modules::pipeline::core::drag_session::DragSession;
use crate::modules::pipeline::core::projection::{BoardProjection, project};
use crate::modules::pipeline::core::stage_registry::StageRegistry;

/// Everything one mounted board owns. Mutated only through the board's use cases.
#[derive(Debug, Default)]
pub struct BoardState {
    pub registry: StageRegistry,
    pub deals: DealStore,
    pub drag: DragSession,
}

impl BoardState {
    pub fn new(registry: StageRegistry) -> Self {
        Self {
            registry,
            deals: DealStore::new(),
            drag: DragSession::Idle,
        }
    }

    pub fn projection(&self) -> BoardProjection {
        project(self.registry.as_slice(), self.deals.all())
    }
}
