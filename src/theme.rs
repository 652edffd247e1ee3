use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Classic,
    Dark,
    Neon,
}

impl Default for ThemeName {
    fn default() -> Self {
        ThemeName::Classic
    }
}

/// Semantic color roles a renderer needs. Values are hex colors; mapping
/// them to whatever the host's drawing layer wants is the host's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub surface: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub food: &'static str,
    pub snake: &'static str,
    pub grid: &'static str,
}

const CLASSIC: ThemePalette = ThemePalette {
    background: "#111827",
    surface: "#1f2937",
    primary: "#22c55e",
    secondary: "#374151",
    accent: "#ef4444",
    text: "#ffffff",
    food: "#ef4444",
    snake: "#22c55e",
    grid: "#1f2937",
};

const DARK: ThemePalette = ThemePalette {
    background: "#000000",
    surface: "#111827",
    primary: "#2563eb",
    secondary: "#1f2937",
    accent: "#a855f7",
    text: "#f3f4f6",
    food: "#a855f7",
    snake: "#3b82f6",
    grid: "#111827",
};

const NEON: ThemePalette = ThemePalette {
    background: "#2e1065",
    surface: "#4c1d95",
    primary: "#db2777",
    secondary: "#5b21b6",
    accent: "#facc15",
    text: "#fce7f3",
    food: "#facc15",
    snake: "#ec4899",
    grid: "#4c1d95",
};

impl ThemeName {
    pub fn palette(&self) -> &'static ThemePalette {
        match self {
            ThemeName::Classic => &CLASSIC,
            ThemeName::Dark => &DARK,
            ThemeName::Neon => &NEON,
        }
    }
}
