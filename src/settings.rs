use serde::{Deserialize, Serialize};

use crate::Difficulty;
use crate::store::Validate;
use crate::theme::ThemeName;

/// User-facing settings, persisted as one JSON document. Field names stay
/// camelCase so documents written by earlier builds keep loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
    pub theme: ThemeName,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            sound_enabled: true,
            theme: ThemeName::Classic,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        // Every field is a closed enum or bool; any value that deserialized
        // is already valid.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert!(settings.sound_enabled);
        assert_eq!(settings.theme, ThemeName::Classic);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&GameSettings::default()).unwrap();
        assert!(json.contains("\"soundEnabled\""));
        assert!(json.contains("\"difficulty\":\"medium\""));
        assert!(json.contains("\"theme\":\"classic\""));
    }
}
