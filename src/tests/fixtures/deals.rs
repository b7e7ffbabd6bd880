// Builder for canonical deals in tests.

use crate::modules::pipeline::core::deal::Deal;
use crate::shared::core::primitives::{DealId, StageId};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub struct DealBuilder {
    inner: Deal,
}

impl Default for DealBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DealBuilder {
    pub fn new() -> Self {
        Self {
            inner: Deal {
                id: DealId::from("d-fixed-0001"),
                title: "Annual plan for Acme".to_string(),
                description: None,
                value: Some(1000.0),
                stage: StageId::from("lead"),
                client_id: None,
                probability: 50,
                expected_close_date: NaiveDate::from_ymd_opt(2026, 12, 31),
                created_at: Utc
                    .with_ymd_and_hms(2026, 10, 1, 9, 0, 0)
                    .single()
                    .unwrap_or_default(),
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.inner.id = DealId::from(id);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.inner.title = title.to_string();
        self
    }

    pub fn stage(mut self, stage: &str) -> Self {
        self.inner.stage = StageId::from(stage);
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.inner.value = Some(value);
        self
    }

    pub fn no_value(mut self) -> Self {
        self.inner.value = None;
        self
    }

    pub fn probability(mut self, probability: u8) -> Self {
        self.inner.probability = probability;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.inner.created_at = created_at;
        self
    }

    pub fn build(self) -> Deal {
        self.inner
    }
}
