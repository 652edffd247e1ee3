mod engine;
mod rng;
mod types;

pub use engine::GameEngine;
pub use rng::GameRng;
pub use types::{Cell, Direction, GameOverReason, Point, StepOutcome};

pub const DEFAULT_GRID_SIZE: usize = 20;
