// The pipeline board: owns stages, deals and the drag session of one mounted board view.
//
// Responsibilities
// - Hold the board state behind one async lock that is never held across a remote call.
// - Give use case handlers access to the deals gateway and the notifier.
//
// Use cases live in `use_cases/*/handler.rs` as `impl PipelineBoard` blocks.

use crate::modules::pipeline::adapters::outbound::deals_gateway::DealsGateway;
use crate::modules::pipeline::core::deal::Deal;
use crate::modules::pipeline::core::drag_session::DragSession;
use crate::modules::pipeline::core::errors::PipelineError;
use crate::modules::pipeline::core::projection::BoardProjection;
use crate::modules::pipeline::core::stage::Stage;
use crate::modules::pipeline::core::stage_registry::StageRegistry;
use crate::modules::pipeline::core::state::BoardState;
use crate::shared::infrastructure::notifier::{Notification, Notifier};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct PipelineBoard {
    pub(crate) state: RwLock<BoardState>,
    pub(crate) gateway: Arc<dyn DealsGateway>,
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl PipelineBoard {
    /// A board with the default stage set and no deals loaded yet.
    pub fn new(gateway: Arc<dyn DealsGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_registry(StageRegistry::default(), gateway, notifier)
    }

    pub fn with_registry(
        registry: StageRegistry,
        gateway: Arc<dyn DealsGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: RwLock::new(BoardState::new(registry)),
            gateway,
            notifier,
        }
    }

    /// Construct and run the initial load. A failed load is notified and leaves the board empty.
    pub async fn mount(gateway: Arc<dyn DealsGateway>, notifier: Arc<dyn Notifier>) -> Self {
        let board = Self::new(gateway, notifier);
        if let Err(err) = board.load().await {
            tracing::warn!(error = %err, "board mounted without deals");
        }
        board
    }

    pub async fn stages(&self) -> Vec<Stage> {
        self.state.read().await.registry.list()
    }

    pub async fn deals(&self) -> Vec<Deal> {
        self.state.read().await.deals.all().to_vec()
    }

    pub async fn projection(&self) -> BoardProjection {
        self.state.read().await.projection()
    }

    pub async fn drag_session(&self) -> DragSession {
        self.state.read().await.drag.clone()
    }

    pub(crate) async fn report_error(&self, err: &PipelineError, message: &str) {
        tracing::warn!(error = %err, "{message}");
        self.notifier.notify(Notification::error(message)).await;
    }

    pub(crate) async fn report_success(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::success(message)).await;
    }
}
