//! Game state and core simulation types
//!
//! Everything that changes between frames lives in `GameState`.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{ShipHitbox, is_on_track};
use super::grid::TrackGrid;
use super::schedule::{ScheduledTask, Scheduler, TaskKind};
use super::track::{LaneBounds, Track};
use super::transform::{ProjectionMode, Projector, Viewport};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu, nothing scrolls
    Menu,
    /// Active gameplay
    Playing,
    /// Ship left the track; scene frozen until restart
    GameOver,
}

/// Scroll progress, reset on every run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    /// Progress into the current row (pixels)
    pub offset_y: f32,
    /// Lateral drift of the grid (pixels)
    pub offset_x: f32,
    /// Rows fully scrolled past; doubles as the score
    pub loop_row: i64,
    /// Steering speed, percent of viewport width per frame
    pub lateral_speed: f32,
    /// Difficulty term added to the forward speed
    pub forward_speed_bonus: f32,
}

/// Things the shell may want to react to (sounds, menu text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted { life: u32 },
    RowPassed { score: u64 },
    GameOver { score: u64 },
    /// Delayed voice line after a crash
    GameOverVoice,
}

/// RNG seed wrapper
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Independent stream per life so restarts do not replay the same track
    pub fn to_rng(&self, life: u32) -> Pcg32 {
        Pcg32::new(self.seed, life as u64)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub rng_state: RngState,
    /// Track generator RNG for the current life
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub projector: Projector,
    pub phase: GamePhase,
    /// Lives started so far; stamps scheduled tasks
    pub life: u32,
    pub scroll: ScrollState,
    pub track: Track,
    pub bounds: LaneBounds,
    pub scheduler: Scheduler,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Default tuning on a 900x400 perspective view
    pub fn new(seed: u64) -> Self {
        Self::with_config(
            seed,
            Tuning::default(),
            Projector::new(Viewport::default(), ProjectionMode::Perspective),
        )
    }

    pub fn with_config(seed: u64, tuning: Tuning, projector: Projector) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            rng_state,
            rng: rng_state.to_rng(0),
            bounds: LaneBounds::from_line_count(tuning.num_vertical_lines),
            track: Track::straight(tuning.initial_straight_length),
            tuning,
            projector,
            phase: GamePhase::Menu,
            life: 0,
            scroll: ScrollState::default(),
            scheduler: Scheduler::new(),
            events: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.projector.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.projector.resize(viewport);
    }

    /// Begin a new run from the menu or after a game over
    pub fn start_run(&mut self) {
        self.life += 1;
        self.scroll = ScrollState::default();
        self.track.seed_straight(self.tuning.initial_straight_length);
        self.rng = self.rng_state.to_rng(self.life);
        self.scheduler = Scheduler::new();
        self.scheduler
            .schedule(TaskKind::SpeedRamp, self.life, self.tuning.speed_ramp_interval);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RunStarted { life: self.life });
        log::info!("Run {} started (seed {})", self.life, self.rng_state.seed);
    }

    /// Switch to GameOver and queue the delayed voice cue
    pub fn end_run(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.scheduler.schedule(
            TaskKind::GameOverVoice,
            self.life,
            self.tuning.game_over_voice_delay,
        );
        self.events.push(GameEvent::GameOver {
            score: self.score(),
        });
        log::info!("Game over: run {} scored {}", self.life, self.score());
    }

    /// Run a due task. Returns false when the task was stale.
    pub fn fire(&mut self, task: &ScheduledTask) -> bool {
        if task.life != self.life {
            log::debug!("Dropping stale {:?} from run {}", task.kind, task.life);
            return false;
        }
        match task.kind {
            TaskKind::SpeedRamp => {
                if self.phase != GamePhase::Playing {
                    return false;
                }
                let bonus = self.scroll.forward_speed_bonus + self.tuning.speed_ramp_step;
                self.scroll.forward_speed_bonus = self.tuning.cap_bonus(bonus);
                self.scheduler
                    .schedule(TaskKind::SpeedRamp, self.life, self.tuning.speed_ramp_interval);
                true
            }
            TaskKind::GameOverVoice => {
                if self.phase != GamePhase::GameOver {
                    return false;
                }
                self.events.push(GameEvent::GameOverVoice);
                true
            }
        }
    }

    /// Score equals rows passed
    pub fn score(&self) -> u64 {
        self.scroll.loop_row.max(0) as u64
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// True once the first run has begun
    pub fn has_started(&self) -> bool {
        self.life > 0
    }

    /// Height of one row in pixels
    pub fn row_span(&self) -> f32 {
        self.tuning.horizontal_line_spacing * self.viewport().height()
    }

    /// Current forward speed in pixels per target frame
    pub fn forward_speed(&self) -> f32 {
        self.tuning.forward_speed * self.viewport().height() / 100.0
            + self.scroll.forward_speed_bonus
    }

    pub fn grid(&self) -> TrackGrid {
        TrackGrid::new(
            self.viewport(),
            self.projector.vanishing_point.x,
            &self.tuning,
            &self.scroll,
        )
    }

    pub fn hitbox(&self) -> ShipHitbox {
        ShipHitbox::from_viewport(self.viewport(), &self.tuning)
    }

    pub fn ship_on_track(&self) -> bool {
        is_on_track(&self.hitbox(), self.track.cells(), &self.grid())
    }

    /// Extend the track after a row boundary was crossed
    pub(crate) fn regenerate_track(&mut self) {
        self.track.extend(
            self.scroll.loop_row,
            self.bounds,
            self.tuning.num_tiles,
            &mut self.rng,
        );
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
