// Board projection: deals grouped by stage, recomputed from the registry and the store.
//
// Boundaries
// - Pure function of its two inputs. Never patched in place.

use crate::modules::pipeline::core::deal::Deal;
use crate::modules::pipeline::core::stage::Stage;
use crate::shared::core::currency::format_brl;
use crate::shared::core::primitives::StageId;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub stage: Stage,
    pub deals: Vec<Deal>,
    pub total_value: f64,
}

impl BoardColumn {
    pub fn deal_count(&self) -> usize {
        self.deals.len()
    }

    pub fn total_label(&self) -> String {
        format_brl(self.total_value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardProjection {
    /// One column per stage, in `order`.
    pub columns: Vec<BoardColumn>,
    /// Deals whose stage is not in the registry.
    pub unassigned: Vec<Deal>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSummary {
    pub deal_count: usize,
    pub total_value: f64,
    pub weighted_value: f64,
}

impl BoardProjection {
    pub fn column(&self, stage: &StageId) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| &column.stage.id == stage)
    }

    pub fn summary(&self) -> PipelineSummary {
        let deals = self.columns.iter().flat_map(|column| column.deals.iter());
        let (deal_count, total_value, weighted_value) =
            deals.fold((0, 0.0, 0.0), |(count, total, weighted), deal| {
                (
                    count + 1,
                    total + deal.amount(),
                    weighted + deal.weighted_amount(),
                )
            });
        PipelineSummary {
            deal_count,
            total_value,
            weighted_value,
        }
    }
}

pub fn project(stages: &[Stage], deals: &[Deal]) -> BoardProjection {
    let mut ordered: Vec<&Stage> = stages.iter().collect();
    ordered.sort_by_key(|stage| stage.order);

    let mut buckets: HashMap<&StageId, Vec<Deal>> = stages
        .iter()
        .map(|stage| (&stage.id, Vec::new()))
        .collect();
    let mut unassigned = Vec::new();
    for deal in deals {
        match buckets.get_mut(&deal.stage) {
            Some(bucket) => bucket.push(deal.clone()),
            None => unassigned.push(deal.clone()),
        }
    }

    let columns = ordered
        .into_iter()
        .map(|stage| {
            let deals = buckets.remove(&stage.id).unwrap_or_default();
            let total_value = deals.iter().map(Deal::amount).sum();
            BoardColumn {
                stage: stage.clone(),
                deals,
                total_value,
            }
        })
        .collect();

    BoardProjection {
        columns,
        unassigned,
    }
}
