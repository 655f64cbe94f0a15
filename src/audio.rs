//! Sound cue selection
//!
//! The core never plays audio. It turns game events into cue commands that
//! the audio collaborator executes with whatever backend it has.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound assets the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Title screen music
    MenuTheme,
    /// Music while a run is active
    PlayMusic,
    /// Run start sting
    Begin,
    /// Crash sound
    GameOverImpact,
    /// Voice line played a moment after the crash
    GameOverVoice,
}

impl SoundCue {
    /// Asset path relative to the audio directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::MenuTheme => "menu_theme.wav",
            SoundCue::PlayMusic => "play_state_music.wav",
            SoundCue::Begin => "begin.wav",
            SoundCue::GameOverImpact => "gameover_impact.wav",
            SoundCue::GameOverVoice => "gameover_voice.wav",
        }
    }

    /// Base mix level before player volume settings
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundCue::MenuTheme => 0.2,
            SoundCue::PlayMusic => 0.6,
            SoundCue::Begin | SoundCue::GameOverImpact | SoundCue::GameOverVoice => 0.25,
        }
    }

    /// Music cues loop and count against the music volume
    pub fn is_music(&self) -> bool {
        matches!(self, SoundCue::MenuTheme | SoundCue::PlayMusic)
    }
}

/// What the audio collaborator should do
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CueCommand {
    Play {
        cue: SoundCue,
        volume: f32,
        looping: bool,
    },
    Stop(SoundCue),
}

/// Maps game events to cue commands
#[derive(Debug, Clone)]
pub struct AudioDirector {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioDirector {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioDirector {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            music_volume: settings.music_volume,
            muted: false,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Cue to start when the title screen first appears
    pub fn on_menu(&self) -> Vec<CueCommand> {
        vec![self.play(SoundCue::MenuTheme)]
    }

    pub fn on_event(&self, event: &GameEvent) -> Vec<CueCommand> {
        match event {
            GameEvent::RunStarted { .. } => vec![
                CueCommand::Stop(SoundCue::MenuTheme),
                self.play(SoundCue::Begin),
                self.play(SoundCue::PlayMusic),
            ],
            GameEvent::GameOver { .. } => vec![
                CueCommand::Stop(SoundCue::PlayMusic),
                self.play(SoundCue::MenuTheme),
                self.play(SoundCue::GameOverImpact),
            ],
            GameEvent::GameOverVoice => vec![self.play(SoundCue::GameOverVoice)],
            GameEvent::RowPassed { .. } => Vec::new(),
        }
    }

    fn play(&self, cue: SoundCue) -> CueCommand {
        CueCommand::Play {
            cue,
            volume: self.volume_for(cue),
            looping: cue.is_music(),
        }
    }

    /// Effective volume (0.0 - 1.0)
    pub fn volume_for(&self, cue: SoundCue) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if cue.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        (cue.base_volume() * channel * self.master_volume).clamp(0.0, 1.0)
    }
}
