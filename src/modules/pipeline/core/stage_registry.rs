// Ordered collection of pipeline stages.
//
// Responsibilities
// - Keep `order` contiguous from 0 after every create and remove.
// - Refuse to go below two stages.
// - Stage ids are unique.
//
// Boundaries
// - In memory only. A freshly constructed registry always holds the default stage set.

use crate::modules::pipeline::core::errors::PipelineError;
use crate::modules::pipeline::core::stage::{Stage, StageColor};
use crate::shared::core::primitives::StageId;
use std::collections::HashSet;

pub const MIN_STAGES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRegistry {
    stages: Vec<Stage>,
}

impl Default for StageRegistry {
    fn default() -> Self {
        let defaults = [
            ("lead", "Leads", StageColor::Blue),
            ("proposal", "Proposals", StageColor::Yellow),
            ("negotiation", "Negotiation", StageColor::Orange),
            ("closed_won", "Closed", StageColor::Green),
        ];
        Self {
            stages: defaults
                .into_iter()
                .enumerate()
                .map(|(order, (id, name, color))| Stage {
                    id: StageId::new(id),
                    name: name.to_string(),
                    color,
                    order,
                })
                .collect(),
        }
    }
}

impl StageRegistry {
    /// Build a registry from `(id, name, color)` triples, ranked in the given order.
    pub fn with_stages(
        stages: impl IntoIterator<Item = (StageId, String, StageColor)>,
    ) -> Result<Self, PipelineError> {
        let stages: Vec<Stage> = stages
            .into_iter()
            .enumerate()
            .map(|(order, (id, name, color))| Stage {
                id,
                name,
                color,
                order,
            })
            .collect();
        if stages.len() < MIN_STAGES {
            return Err(PipelineError::Policy(
                "at least two stages required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = stages.iter().find(|stage| !seen.insert(&stage.id)) {
            return Err(PipelineError::Validation(format!(
                "duplicate stage id {}",
                duplicate.id
            )));
        }
        Ok(Self { stages })
    }

    pub fn list(&self) -> Vec<Stage> {
        self.stages.clone()
    }

    pub fn as_slice(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, id: &StageId) -> Option<&Stage> {
        self.stages.iter().find(|stage| &stage.id == id)
    }

    pub fn contains(&self, id: &StageId) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&Stage> {
        self.stages.first()
    }

    pub fn create(&mut self, name: &str, color: StageColor) -> Result<Stage, PipelineError> {
        let name = required_name(name)?;
        let stage = Stage {
            id: StageId::generate(),
            name,
            color,
            order: self.stages.len(),
        };
        self.stages.push(stage.clone());
        Ok(stage)
    }

    pub fn rename(&mut self, id: &StageId, name: &str) -> Result<Stage, PipelineError> {
        let name = required_name(name)?;
        let stage = self.get_mut(id)?;
        stage.name = name;
        Ok(stage.clone())
    }

    pub fn recolor(&mut self, id: &StageId, color: StageColor) -> Result<Stage, PipelineError> {
        let stage = self.get_mut(id)?;
        stage.color = color;
        Ok(stage.clone())
    }

    /// Checks that `id` exists and that removing it keeps the two-stage floor.
    pub fn ensure_removable(&self, id: &StageId) -> Result<&Stage, PipelineError> {
        let stage = self
            .get(id)
            .ok_or_else(|| PipelineError::NotFound(format!("stage {id}")))?;
        if self.stages.len() <= MIN_STAGES {
            return Err(PipelineError::Policy(
                "at least two stages required".to_string(),
            ));
        }
        Ok(stage)
    }

    pub fn remove(&mut self, id: &StageId) -> Result<Stage, PipelineError> {
        self.ensure_removable(id)?;
        let index = self
            .stages
            .iter()
            .position(|stage| &stage.id == id)
            .ok_or_else(|| PipelineError::NotFound(format!("stage {id}")))?;
        let removed = self.stages.remove(index);
        for (order, stage) in self.stages.iter_mut().enumerate() {
            stage.order = order;
        }
        Ok(removed)
    }

    fn get_mut(&mut self, id: &StageId) -> Result<&mut Stage, PipelineError> {
        self.stages
            .iter_mut()
            .find(|stage| &stage.id == id)
            .ok_or_else(|| PipelineError::NotFound(format!("stage {id}")))
    }
}

fn required_name(name: &str) -> Result<String, PipelineError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::Validation(
            "stage name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
