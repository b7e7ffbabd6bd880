use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use deal_pipeline::modules::pipeline::adapters::outbound::deals_gateway::DealsGateway;
use deal_pipeline::modules::pipeline::adapters::outbound::deals_in_memory::InMemoryDeals;
use deal_pipeline::modules::pipeline::adapters::outbound::deals_supabase::SupabaseDeals;
use deal_pipeline::modules::pipeline::board::PipelineBoard;
use deal_pipeline::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use deal_pipeline::shell::config::{BackendConfig, Config};
use deal_pipeline::shell::http::router;
use deal_pipeline::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gateway: Arc<dyn DealsGateway> = match &config.backend {
        BackendConfig::Supabase {
            url,
            anon_key,
            access_token,
        } => {
            tracing::info!(%url, "deals persisted on the hosted backend");
            Arc::new(SupabaseDeals::new(url.clone(), anon_key.clone(), access_token.clone()))
        }
        BackendConfig::InMemory => {
            tracing::warn!("hosted backend not configured, deals kept in memory");
            Arc::new(InMemoryDeals::new())
        }
    };
    let notifications = Arc::new(InMemoryNotifier::new());
    let board = PipelineBoard::mount(gateway, notifications.clone()).await;

    let state = AppState {
        board: Arc::new(board),
        notifications,
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Pipeline board: http://{}/board", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
