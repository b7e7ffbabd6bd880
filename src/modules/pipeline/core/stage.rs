// A column of the sales pipeline.
//
// Invariants (kept by the stage registry)
// - `order` values are unique and contiguous from 0.
// - A board always holds at least two stages.

use crate::shared::core::primitives::StageId;
use serde::{Deserialize, Serialize};

/// Fixed palette offered by the "manage stages" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageColor {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Pink,
    Gray,
}

impl StageColor {
    pub const ALL: [StageColor; 8] = [
        StageColor::Blue,
        StageColor::Green,
        StageColor::Yellow,
        StageColor::Orange,
        StageColor::Red,
        StageColor::Purple,
        StageColor::Pink,
        StageColor::Gray,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StageColor::Blue => "blue",
            StageColor::Green => "green",
            StageColor::Yellow => "yellow",
            StageColor::Orange => "orange",
            StageColor::Red => "red",
            StageColor::Purple => "purple",
            StageColor::Pink => "pink",
            StageColor::Gray => "gray",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            StageColor::Blue => "#3b82f6",
            StageColor::Green => "#22c55e",
            StageColor::Yellow => "#eab308",
            StageColor::Orange => "#f97316",
            StageColor::Red => "#ef4444",
            StageColor::Purple => "#a855f7",
            StageColor::Pink => "#ec4899",
            StageColor::Gray => "#6b7280",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    pub color: StageColor,
    pub order: usize,
}

#[cfg(test)]
mod stage_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_expose_a_swatch_for_every_palette_color() {
        for color in StageColor::ALL {
            let hex = color.hex();
            assert!(hex.starts_with('#'));
            assert_eq!(hex.len(), 7);
        }
    }

    #[rstest]
    fn it_should_serialize_colors_in_lowercase() {
        let json = serde_json::to_value(StageColor::Purple).unwrap();
        assert_eq!(json, serde_json::json!("purple"));
    }
}
