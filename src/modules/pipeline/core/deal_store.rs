// The deals currently loaded into the board, plus the stage writes still in flight.
//
// Responsibilities
// - Replace the whole set on load, never merge partially.
// - Apply optimistic stage transitions and hand out a version per transition.
// - Only the latest transition of a deal may confirm or roll back.
// - A rollback returns to the last stage the remote store acknowledged, not to the
//   previous optimistic stage.
// - A reload keeps the optimistic stage of deals with writes in flight.

use crate::modules::pipeline::core::deal::Deal;
use crate::shared::core::primitives::{DealId, StageId};
use std::collections::HashMap;

/// An optimistic stage change that is waiting for the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    pub deal_id: DealId,
    pub from: StageId,
    pub to: StageId,
    pub version: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LatestState {
    Pending,
    Confirmed,
    Failed,
}

/// Book keeping of one deal while at least one of its stage writes is unresolved.
#[derive(Debug, Clone)]
struct InFlight {
    /// Stage the remote store is known to hold.
    confirmed: StageId,
    /// Stage the board shows.
    shown: StageId,
    latest: u64,
    latest_state: LatestState,
    /// Version and target of every unresolved write.
    outstanding: Vec<(u64, StageId)>,
}

#[derive(Debug, Default)]
pub struct DealStore {
    deals: Vec<Deal>,
    in_flight: HashMap<DealId, InFlight>,
}

impl DealStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deals(deals: Vec<Deal>) -> Self {
        Self {
            deals,
            in_flight: HashMap::new(),
        }
    }

    pub fn all(&self) -> &[Deal] {
        &self.deals
    }

    pub fn get(&self, id: &DealId) -> Option<&Deal> {
        self.deals.iter().find(|deal| &deal.id == id)
    }

    pub fn in_stage<'a>(&'a self, stage: &'a StageId) -> impl Iterator<Item = &'a Deal> + 'a {
        self.deals.iter().filter(move |deal| &deal.stage == stage)
    }

    /// Swap in a freshly fetched set. Deals with writes in flight keep the stage the board shows.
    pub fn replace_all(&mut self, deals: Vec<Deal>) {
        self.deals = deals;
        for deal in &mut self.deals {
            if let Some(flight) = self.in_flight.get(&deal.id) {
                deal.stage = flight.shown.clone();
            }
        }
    }

    /// Moves the deal to `to` right away. Returns `None` for an unknown deal or an unchanged stage.
    pub fn begin_transition(&mut self, id: &DealId, to: &StageId) -> Option<PendingTransition> {
        let deal = self.deals.iter_mut().find(|deal| &deal.id == id)?;
        if &deal.stage == to {
            return None;
        }
        let from = std::mem::replace(&mut deal.stage, to.clone());
        let flight = self.in_flight.entry(id.clone()).or_insert_with(|| InFlight {
            confirmed: from.clone(),
            shown: from.clone(),
            latest: 0,
            latest_state: LatestState::Pending,
            outstanding: Vec::new(),
        });
        flight.latest += 1;
        flight.latest_state = LatestState::Pending;
        flight.shown = to.clone();
        flight.outstanding.push((flight.latest, to.clone()));
        Some(PendingTransition {
            deal_id: id.clone(),
            from,
            to: to.clone(),
            version: flight.latest,
        })
    }

    pub fn is_latest(&self, pending: &PendingTransition) -> bool {
        self.in_flight
            .get(&pending.deal_id)
            .is_some_and(|flight| flight.latest == pending.version)
    }

    /// True when any deal may still land in `stage` once its writes resolve.
    pub fn has_writes_involving(&self, stage: &StageId) -> bool {
        self.in_flight.values().any(|flight| {
            &flight.confirmed == stage
                || &flight.shown == stage
                || flight.outstanding.iter().any(|(_, to)| to == stage)
        })
    }

    pub fn has_writes_in_flight(&self, id: &DealId) -> bool {
        self.in_flight.contains_key(id)
    }

    /// Records an acknowledged write. Returns true when it was the latest transition of the deal.
    pub fn confirm(&mut self, pending: &PendingTransition) -> bool {
        let Some(flight) = self.settle(pending) else {
            return false;
        };
        let is_latest = flight.latest == pending.version;
        match (is_latest, flight.latest_state) {
            (true, _) => {
                flight.latest_state = LatestState::Confirmed;
                flight.confirmed = pending.to.clone();
            }
            (false, LatestState::Pending) => flight.confirmed = pending.to.clone(),
            (false, LatestState::Failed) => {
                flight.confirmed = pending.to.clone();
                flight.shown = pending.to.clone();
            }
            (false, LatestState::Confirmed) => {}
        }
        let shown = flight.shown.clone();
        self.show(&pending.deal_id, shown);
        self.forget_if_resolved(&pending.deal_id);
        is_latest
    }

    /// Records a refused write. When it was the latest transition, the deal goes back to the
    /// last acknowledged stage, which is returned.
    pub fn fail(&mut self, pending: &PendingTransition) -> Option<StageId> {
        let flight = self.settle(pending)?;
        if flight.latest != pending.version {
            self.forget_if_resolved(&pending.deal_id);
            return None;
        }
        flight.latest_state = LatestState::Failed;
        flight.shown = flight.confirmed.clone();
        let back_to = flight.confirmed.clone();
        self.show(&pending.deal_id, back_to.clone());
        self.forget_if_resolved(&pending.deal_id);
        Some(back_to)
    }

    fn settle(&mut self, pending: &PendingTransition) -> Option<&mut InFlight> {
        let flight = self.in_flight.get_mut(&pending.deal_id)?;
        flight
            .outstanding
            .retain(|(version, _)| *version != pending.version);
        Some(flight)
    }

    fn show(&mut self, id: &DealId, stage: StageId) {
        if let Some(deal) = self.deals.iter_mut().find(|deal| &deal.id == id) {
            deal.stage = stage;
        }
    }

    fn forget_if_resolved(&mut self, id: &DealId) {
        if self
            .in_flight
            .get(id)
            .is_some_and(|flight| flight.outstanding.is_empty())
        {
            self.in_flight.remove(id);
        }
    }
}
