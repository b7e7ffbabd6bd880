use crate::modules::pipeline::board::PipelineBoard;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<PipelineBoard>,
    /// Toast feed, drained by `GET /notifications`.
    pub notifications: Arc<InMemoryNotifier>,
}
