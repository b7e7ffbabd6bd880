// Load (or refresh) the deals shown on the board.
//
// - Fetches every deal not in closed_lost, newest first.
// - On failure the previously loaded deals stay in place.

use crate::modules::pipeline::board::PipelineBoard;
use crate::modules::pipeline::core::errors::PipelineError;

impl PipelineBoard {
    pub async fn load(&self) -> Result<usize, PipelineError> {
        match self.gateway.fetch_deals().await {
            Ok(deals) => {
                let count = deals.len();
                self.state.write().await.deals.replace_all(deals);
                tracing::info!(count, "deals loaded");
                Ok(count)
            }
            Err(err) => {
                let err = PipelineError::from(err);
                self.report_error(&err, "Could not load the deals.").await;
                Err(err)
            }
        }
    }
}
