// Pure validation of a CreateDeal command against the stage registry.
//
// Rules
// - Title is required once trimmed.
// - Probability stays within 0..=100, default 50.
// - Value, when given, is a finite non negative amount.
// - Stage must exist on the board, default is the first stage.
// - Blank description and client become None.

use crate::modules::pipeline::core::deal::NewDeal;
use crate::modules::pipeline::core::stage_registry::StageRegistry;
use crate::modules::pipeline::use_cases::create_deal::command::CreateDeal;
use crate::shared::core::primitives::StageId;

pub const DEFAULT_PROBABILITY: u8 = 50;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("deal title is required")]
    MissingTitle,

    #[error("probability must be between 0 and 100")]
    InvalidProbability,

    #[error("deal value must be a non negative amount")]
    InvalidValue,

    #[error("stage {0} does not exist")]
    UnknownStage(StageId),

    #[error("the board has no stages")]
    NoStages,
}

pub fn decide_create(
    registry: &StageRegistry,
    command: CreateDeal,
) -> Result<NewDeal, DecideError> {
    let title = command.title.trim();
    if title.is_empty() {
        return Err(DecideError::MissingTitle);
    }
    let probability = command.probability.unwrap_or(DEFAULT_PROBABILITY);
    if probability > 100 {
        return Err(DecideError::InvalidProbability);
    }
    if let Some(value) = command.value {
        if !value.is_finite() || value < 0.0 {
            return Err(DecideError::InvalidValue);
        }
    }
    let stage = match command.stage {
        Some(stage) if registry.contains(&stage) => stage,
        Some(stage) => return Err(DecideError::UnknownStage(stage)),
        None => registry.first().ok_or(DecideError::NoStages)?.id.clone(),
    };

    Ok(NewDeal {
        title: title.to_string(),
        description: non_blank(command.description),
        value: command.value,
        stage,
        client_id: non_blank(command.client_id),
        probability,
        expected_close_date: command.expected_close_date,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
