use crate::log;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEffect {
    Eat,
    Move,
    Start,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Eat => "eat",
            SoundEffect::Move => "move",
            SoundEffect::Start => "start",
        }
    }
}

/// Playback seam supplied by the host. Failures are reported back so the
/// player can log them; they never reach the game simulation.
pub trait AudioBackend {
    fn play_effect(&mut self, effect: SoundEffect) -> Result<(), String>;
    fn start_music(&mut self) -> Result<(), String>;
    fn stop_music(&mut self);
}

/// Backend for headless hosts and tests.
#[derive(Default)]
pub struct NullAudioBackend;

impl AudioBackend for NullAudioBackend {
    fn play_effect(&mut self, _effect: SoundEffect) -> Result<(), String> {
        Ok(())
    }

    fn start_music(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn stop_music(&mut self) {}
}

/// Gates every playback call on the sound-enabled setting and turns backend
/// failures into advisory log lines.
pub struct SoundPlayer {
    backend: Box<dyn AudioBackend>,
    music_playing: bool,
}

impl SoundPlayer {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            music_playing: false,
        }
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn play(&mut self, effect: SoundEffect, sound_enabled: bool) {
        if !sound_enabled {
            return;
        }
        if let Err(err) = self.backend.play_effect(effect) {
            log!("Failed to play sound '{}': {}", effect.name(), err);
        }
    }

    pub fn start_music(&mut self, sound_enabled: bool) {
        if !sound_enabled {
            return;
        }
        match self.backend.start_music() {
            Ok(()) => self.music_playing = true,
            Err(err) => log!("Failed to start background music: {}", err),
        }
    }

    pub fn stop_music(&mut self) {
        self.backend.stop_music();
        self.music_playing = false;
    }

    /// Called when the sound-enabled setting changes; music must not keep
    /// looping after sound is switched off.
    pub fn apply_sound_setting(&mut self, sound_enabled: bool) {
        if !sound_enabled && self.music_playing {
            self.stop_music();
        }
    }
}
