use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::Difficulty;
use crate::store::Validate;

/// How many entries `top_scores` returns per difficulty.
pub const TOP_SCORES_PER_DIFFICULTY: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
    pub difficulty: Difficulty,
    /// RFC 3339 timestamp of when the entry was recorded.
    pub date: String,
}

/// The persisted high-score document: a flat list, sorted on read, never
/// trimmed on write so the full history survives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreList {
    entries: Vec<HighScore>,
}

impl HighScoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(&mut self, name: &str, score: u32, difficulty: Difficulty) {
        self.entries.push(HighScore {
            name: name.to_string(),
            score,
            difficulty,
            date: Utc::now().to_rfc3339(),
        });
    }

    /// Top entries for one difficulty, best first.
    pub fn top_scores(&self, difficulty: Difficulty) -> Vec<&HighScore> {
        let mut scores: Vec<&HighScore> = self
            .entries
            .iter()
            .filter(|entry| entry.difficulty == difficulty)
            .collect();
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(TOP_SCORES_PER_DIFFICULTY);
        scores
    }

    /// All entries, newest first. Timestamps are RFC 3339, so string order
    /// matches chronological order.
    pub fn all_scores(&self) -> Vec<&HighScore> {
        let mut scores: Vec<&HighScore> = self.entries.iter().collect();
        scores.sort_by(|a, b| b.date.cmp(&a.date));
        scores
    }
}

impl Validate for HighScoreList {
    fn validate(&self) -> Result<(), String> {
        for entry in &self.entries {
            if entry.name.is_empty() {
                return Err("High score entry has an empty name".to_string());
            }
        }
        Ok(())
    }
}
