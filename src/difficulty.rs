use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A difficulty tier is a preset: it sets how much food is worth and how
/// fast the host should drive the tick. The engine never holds onto a tier;
/// it only receives the multiplier value when crediting points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub fn score_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    /// How often the host should call `step`. Governs call cadence only.
    pub fn tick_interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(120),
            Difficulty::Hard => Duration::from_millis(90),
        }
    }
}
