// In memory implementation of the DealsGateway port.
//
// Purpose
// - Drive the board in tests and local development without the hosted backend.
//
// Responsibilities
// - Keep rows in memory, filter out closed_lost, order newest first.
// - Record every stage update call so tests can count remote writes.
// - Let tests script per-call delays and failures for stage updates.

use crate::modules::pipeline::adapters::outbound::deals_gateway::{
    CLOSED_LOST_STAGE, DealsGateway, RemoteError,
};
use crate::modules::pipeline::core::deal::{Deal, NewDeal};
use crate::shared::core::primitives::{DealId, StageId};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

/// Outcome of one future `update_deal_stage` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateScript {
    pub delay_ms: u64,
    pub fail: bool,
}

#[derive(Default)]
pub struct InMemoryDeals {
    rows: RwLock<Vec<Deal>>,
    update_calls: Mutex<Vec<(DealId, StageId)>>,
    scripted_updates: Mutex<VecDeque<UpdateScript>>,
    fetch_calls: AtomicUsize,
    is_offline: bool,
}

impl InMemoryDeals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deals(deals: Vec<Deal>) -> Self {
        Self {
            rows: RwLock::new(deals),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Queue the behaviour of the next stage updates, consumed in call order.
    pub async fn script_updates(&self, scripts: impl IntoIterator<Item = UpdateScript>) {
        self.scripted_updates.lock().await.extend(scripts);
    }

    pub async fn update_calls(&self) -> Vec<(DealId, StageId)> {
        self.update_calls.lock().await.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub async fn stored(&self, id: &DealId) -> Option<Deal> {
        self.rows.read().await.iter().find(|deal| &deal.id == id).cloned()
    }

    fn ensure_online(&self) -> Result<(), RemoteError> {
        if self.is_offline {
            return Err(RemoteError::Backend("Deals store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DealsGateway for InMemoryDeals {
    async fn fetch_deals(&self) -> Result<Vec<Deal>, RemoteError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;
        let mut deals: Vec<Deal> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|deal| deal.stage.as_str() != CLOSED_LOST_STAGE)
            .cloned()
            .collect();
        deals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(deals)
    }

    async fn insert_deal(&self, deal: &NewDeal) -> Result<Deal, RemoteError> {
        self.ensure_online()?;
        let stored = Deal {
            id: DealId::new(uuid::Uuid::now_v7().to_string()),
            title: deal.title.clone(),
            description: deal.description.clone(),
            value: deal.value,
            stage: deal.stage.clone(),
            client_id: deal.client_id.clone(),
            probability: deal.probability,
            expected_close_date: deal.expected_close_date,
            created_at: Utc::now(),
        };
        self.rows.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update_deal_stage(&self, id: &DealId, stage: &StageId) -> Result<(), RemoteError> {
        self.update_calls
            .lock()
            .await
            .push((id.clone(), stage.clone()));
        let script = self
            .scripted_updates
            .lock()
            .await
            .pop_front()
            .unwrap_or_default();
        if script.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(script.delay_ms)).await;
        }
        self.ensure_online()?;
        if script.fail {
            return Err(RemoteError::Rejected {
                status: 500,
                message: "stage update refused".to_string(),
            });
        }
        if let Some(row) = self.rows.write().await.iter_mut().find(|deal| &deal.id == id) {
            row.stage = stage.clone();
        }
        Ok(())
    }
}
