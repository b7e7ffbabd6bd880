// Drag and drop session over the board.
//
// States
// - Idle: nothing lifted.
// - Lifted: a deal card was picked up, no column hovered yet.
// - Hovering: the pointer moved at least once; `candidate` is the hovered stage, or none over
//   empty space.
//
// Rules
// - Exactly one deal may be lifted. Picking up while a session is active is ignored.
// - Release commits only when the candidate differs from the deal's current stage.
// - Release and cancel always return to Idle.

use crate::shared::core::primitives::{DealId, StageId};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    Idle,
    Lifted {
        deal_id: DealId,
    },
    Hovering {
        deal_id: DealId,
        candidate: Option<StageId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    NoSession,
    NoTarget,
    SameStage,
    DealMissing,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Commit { deal_id: DealId, stage_id: StageId },
    Cancelled(CancelReason),
}

impl DragSession {
    pub fn active_deal(&self) -> Option<&DealId> {
        match self {
            DragSession::Idle => None,
            DragSession::Lifted { deal_id } | DragSession::Hovering { deal_id, .. } => {
                Some(deal_id)
            }
        }
    }

    pub fn candidate(&self) -> Option<&StageId> {
        match self {
            DragSession::Hovering { candidate, .. } => candidate.as_ref(),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    /// Returns false when another deal is already lifted.
    pub fn pick_up(&mut self, deal_id: DealId) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = DragSession::Lifted { deal_id };
        true
    }

    /// `over` is the hovered stage, `None` over empty space. Ignored while idle.
    pub fn hover(&mut self, over: Option<StageId>) -> bool {
        let deal_id = match std::mem::take(self) {
            DragSession::Idle => return false,
            DragSession::Lifted { deal_id } | DragSession::Hovering { deal_id, .. } => deal_id,
        };
        *self = DragSession::Hovering {
            deal_id,
            candidate: over,
        };
        true
    }

    /// `current_stage` is where the lifted deal sits now, `None` if it is no longer loaded.
    pub fn release(&mut self, current_stage: Option<&StageId>) -> DropOutcome {
        match std::mem::take(self) {
            DragSession::Idle => DropOutcome::Cancelled(CancelReason::NoSession),
            DragSession::Lifted { .. } | DragSession::Hovering { candidate: None, .. } => {
                DropOutcome::Cancelled(CancelReason::NoTarget)
            }
            DragSession::Hovering {
                deal_id,
                candidate: Some(stage_id),
            } => match current_stage {
                None => DropOutcome::Cancelled(CancelReason::DealMissing),
                Some(current) if current == &stage_id => {
                    DropOutcome::Cancelled(CancelReason::SameStage)
                }
                Some(_) => DropOutcome::Commit { deal_id, stage_id },
            },
        }
    }

    pub fn cancel(&mut self) -> DropOutcome {
        match std::mem::take(self) {
            DragSession::Idle => DropOutcome::Cancelled(CancelReason::NoSession),
            _ => DropOutcome::Cancelled(CancelReason::Aborted),
        }
    }
}
