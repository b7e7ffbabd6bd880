//! Process configuration, read from environment variables (a `.env` file is honoured).

use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Where deals are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// Volatile store, used when the hosted backend is not configured.
    InMemory,
    Supabase {
        url: String,
        anon_key: String,
        /// Signed in user's token; row level security applies to it instead of the anon role.
        access_token: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub bind_addr: SocketAddr,
    /// Fallback log filter when `RUST_LOG` is not set
    pub log_level: String,
    pub backend: BackendConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_addr =
            non_empty("PIPELINE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("invalid PIPELINE_BIND_ADDR {raw_addr:?}"))?;

        let log_level =
            non_empty("PIPELINE_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let backend = match (non_empty("SUPABASE_URL"), non_empty("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => BackendConfig::Supabase {
                url,
                anon_key,
                access_token: non_empty("SUPABASE_ACCESS_TOKEN"),
            },
            _ => BackendConfig::InMemory,
        };

        Ok(Self {
            bind_addr,
            log_level,
            backend,
        })
    }
}
