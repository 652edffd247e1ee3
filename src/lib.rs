pub mod audio;
pub mod difficulty;
pub mod game;
pub mod high_scores;
pub mod logger;
pub mod session;
pub mod settings;
pub mod store;
pub mod theme;

pub use audio::{AudioBackend, NullAudioBackend, SoundEffect, SoundPlayer};
pub use difficulty::Difficulty;
pub use game::{
    Cell, DEFAULT_GRID_SIZE, Direction, GameEngine, GameOverReason, GameRng, Point, StepOutcome,
};
pub use high_scores::{HighScore, HighScoreList};
pub use session::GameSession;
pub use settings::GameSettings;
pub use theme::{ThemeName, ThemePalette};
