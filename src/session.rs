use std::time::Duration;

use crate::audio::{AudioBackend, SoundEffect, SoundPlayer};
use crate::game::{DEFAULT_GRID_SIZE, GameEngine, GameRng, StepOutcome};
use crate::high_scores::HighScoreList;
use crate::log;
use crate::settings::GameSettings;
use crate::store::{
    FileStoreProvider, HIGH_SCORES_KEY, JsonDocumentSerializer, SETTINGS_KEY, StoreContentProvider,
    StoreManager,
};
use crate::theme::ThemePalette;
use crate::{Difficulty, Direction};

/// Glue between the engine and its collaborators: settings, high scores and
/// sound. The host owns one session, forwards input to it and calls `tick`
/// at the interval the active difficulty dictates.
///
/// Persistence and audio failures are logged and swallowed here; the engine
/// never sees them.
pub struct GameSession<TProvider>
where
    TProvider: StoreContentProvider,
{
    engine: GameEngine,
    rng: GameRng,
    sound: SoundPlayer,
    settings_store: StoreManager<TProvider, GameSettings>,
    high_scores_store: StoreManager<TProvider, HighScoreList>,
}

impl GameSession<FileStoreProvider> {
    /// File-backed session storing its documents under `directory`.
    pub fn from_directory(directory: &str, backend: Box<dyn AudioBackend>) -> Self {
        Self::new(
            StoreManager::from_directory(directory, SETTINGS_KEY),
            StoreManager::from_directory(directory, HIGH_SCORES_KEY),
            backend,
        )
    }
}

impl<TProvider> GameSession<TProvider>
where
    TProvider: StoreContentProvider,
{
    pub fn new(
        settings_store: StoreManager<TProvider, GameSettings>,
        high_scores_store: StoreManager<TProvider, HighScoreList>,
        backend: Box<dyn AudioBackend>,
    ) -> Self {
        let mut rng = GameRng::from_random();
        let engine = GameEngine::new(DEFAULT_GRID_SIZE, &mut rng);
        log!("New game started (seed {})", rng.seed());

        let mut session = Self {
            engine,
            rng,
            sound: SoundPlayer::new(backend),
            settings_store,
            high_scores_store,
        };
        let sound_enabled = session.settings().sound_enabled;
        session.sound.play(SoundEffect::Start, sound_enabled);
        session.sound.start_music(sound_enabled);
        session
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn settings(&self) -> GameSettings {
        match self.settings_store.get() {
            Ok(settings) => settings,
            Err(err) => {
                log!("Failed to load settings, using defaults: {}", err);
                GameSettings::default()
            }
        }
    }

    pub fn update_settings(&mut self, settings: GameSettings) {
        if let Err(err) = self.settings_store.set(&settings) {
            log!("Failed to save settings: {}", err);
        }
        self.sound.apply_sound_setting(settings.sound_enabled);
    }

    pub fn palette(&self) -> &'static ThemePalette {
        self.settings().theme.palette()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings().difficulty
    }

    /// The cadence the host should drive `tick` at.
    pub fn tick_interval(&self) -> Duration {
        self.difficulty().tick_interval()
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.engine.set_direction(direction);
    }

    pub fn toggle_pause(&mut self) {
        self.engine.toggle_pause();
    }

    /// Advances the simulation one step and plays whatever the outcome
    /// sounds like.
    pub fn tick(&mut self) -> StepOutcome {
        let settings = self.settings();
        let outcome = self
            .engine
            .step(&mut self.rng, settings.difficulty.score_multiplier());

        match outcome {
            StepOutcome::Moved => self.sound.play(SoundEffect::Move, settings.sound_enabled),
            StepOutcome::AteFood => self.sound.play(SoundEffect::Eat, settings.sound_enabled),
            StepOutcome::GameOver(reason) => {
                log!("Game over ({:?}), final score {}", reason, self.engine.score());
                self.sound.stop_music();
            }
            StepOutcome::Idle => {}
        }
        outcome
    }

    pub fn restart(&mut self) {
        self.engine.reset(&mut self.rng);
        let sound_enabled = self.settings().sound_enabled;
        self.sound.play(SoundEffect::Start, sound_enabled);
        self.sound.start_music(sound_enabled);
    }

    pub fn high_scores(&self) -> HighScoreList {
        match self.high_scores_store.get() {
            Ok(list) => list,
            Err(err) => {
                log!("Failed to load high scores: {}", err);
                HighScoreList::new()
            }
        }
    }

    /// Records the finished game under `name`. Does nothing while a game is
    /// still running.
    pub fn submit_score(&mut self, name: &str) {
        if !self.engine.is_game_over() {
            log!("Ignoring score submission while the game is running");
            return;
        }

        let mut list = self.high_scores();
        list.add(name, self.engine.score(), self.difficulty());
        if let Err(err) = self.high_scores_store.set(&list) {
            log!("Failed to save high scores: {}", err);
        }
    }
}

impl<TProvider> GameSession<TProvider>
where
    TProvider: StoreContentProvider + Default,
{
    /// Session with defaulted (typically in-memory) stores; used by tests
    /// and hosts that manage persistence themselves.
    pub fn with_default_stores(backend: Box<dyn AudioBackend>) -> Self {
        Self::new(
            StoreManager::new(TProvider::default(), JsonDocumentSerializer::new()),
            StoreManager::new(TProvider::default(), JsonDocumentSerializer::new()),
            backend,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudioBackend;
    use crate::game::{GameOverReason, Point};
    use crate::store::MemoryStoreProvider;
    use crate::theme::ThemeName;

    fn create_session() -> GameSession<MemoryStoreProvider> {
        GameSession::with_default_stores(Box::new(NullAudioBackend))
    }

    fn run_into_top_wall(session: &mut GameSession<MemoryStoreProvider>) {
        session.set_direction(Direction::Up);
        for _ in 0..DEFAULT_GRID_SIZE + 2 {
            if session.engine().is_game_over() {
                break;
            }
            session.tick();
        }
        assert!(session.engine().is_game_over());
    }

    #[test]
    fn test_tick_advances_engine() {
        let mut session = create_session();
        let head_before = session.engine().head();
        let outcome = session.tick();
        assert_ne!(outcome, StepOutcome::Idle);
        assert_ne!(session.engine().head(), head_before);
    }

    #[test]
    fn test_tick_interval_follows_difficulty() {
        let mut session = create_session();
        assert_eq!(session.tick_interval(), Duration::from_millis(120));

        session.update_settings(GameSettings {
            difficulty: Difficulty::Hard,
            ..GameSettings::default()
        });
        assert_eq!(session.tick_interval(), Duration::from_millis(90));
    }

    #[test]
    fn test_palette_follows_theme_setting() {
        let mut session = create_session();
        let classic_snake = session.palette().snake;
        session.update_settings(GameSettings {
            theme: ThemeName::Neon,
            ..GameSettings::default()
        });
        assert_ne!(session.palette().snake, classic_snake);
    }

    #[test]
    fn test_submit_score_persists_on_game_over() {
        let mut session = create_session();
        run_into_top_wall(&mut session);
        assert_eq!(
            session.engine().game_over_reason(),
            Some(GameOverReason::WallCollision)
        );

        session.submit_score("alice");
        let scores = session.high_scores();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.all_scores()[0].name, "alice");
        assert_eq!(scores.all_scores()[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_submit_score_is_noop_mid_game() {
        let mut session = create_session();
        session.submit_score("alice");
        assert!(session.high_scores().is_empty());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = create_session();
        run_into_top_wall(&mut session);

        session.restart();
        assert!(!session.engine().is_game_over());
        assert_eq!(session.engine().score(), 0);
        let center = DEFAULT_GRID_SIZE / 2;
        assert_eq!(session.engine().head(), Point::new(center, center));
    }
}
