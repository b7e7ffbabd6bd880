// Pure decision for a stage transition.
//
// - Unknown deal or same stage: nothing to do.
// - Unknown target stage: rejected before anything changes.

use crate::modules::pipeline::core::state::BoardState;
use crate::modules::pipeline::use_cases::move_deal::command::MoveDeal;
use crate::modules::pipeline::use_cases::move_deal::decision::{
    DecideError, Decision, NoOpReason,
};

pub fn decide_move(state: &BoardState, command: &MoveDeal) -> Decision {
    let Some(deal) = state.deals.get(&command.deal_id) else {
        return Decision::Unchanged(NoOpReason::UnknownDeal);
    };
    if deal.stage == command.stage_id {
        return Decision::Unchanged(NoOpReason::SameStage);
    }
    if !state.registry.contains(&command.stage_id) {
        return Decision::Rejected {
            reason: DecideError::UnknownStage(command.stage_id.clone()),
        };
    }
    Decision::Accepted {
        from: deal.stage.clone(),
    }
}
