//! Space Run - an endless pseudo-3D runner core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projection, track generation, collision, game state)
//! - `geometry`: Per-frame screen-space vertex lists for the render collaborator
//! - `audio`: Sound cue selection driven by game events
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences persisted as JSON

pub mod audio;
pub mod geometry;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame rate the per-frame speeds are expressed against
    pub const TARGET_FPS: f32 = 60.0;
    /// Largest frame delta `tick` simulates (avoids huge jumps after a stall)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Smallest viewport width/height used by any computation
    pub const MIN_VIEWPORT_EXTENT: f32 = 1.0;
    /// Vanishing point height as a fraction of the viewport height
    pub const PERSPECTIVE_POINT_Y_RATIO: f32 = 0.75;

    /// Guide lines
    pub const NUM_VERTICAL_LINES: u32 = 18;
    pub const VERTICAL_LINE_SPACING: f32 = 0.25; // fraction of width
    pub const NUM_HORIZONTAL_LINES: u32 = 15;
    pub const HORIZONTAL_LINE_SPACING: f32 = 0.1; // fraction of height

    /// Forward speed, in percent of viewport height per frame
    pub const FORWARD_SPEED: f32 = 0.6;
    /// Lateral speed, in percent of viewport width per frame
    pub const LATERAL_SPEED: f32 = 2.0;

    /// Track
    pub const NUM_TILES: usize = 12;
    pub const INITIAL_STRAIGHT_PATH_LENGTH: usize = 15;

    /// Ship, as fractions of the viewport
    pub const SHIP_WIDTH: f32 = 0.1;
    pub const SHIP_HEIGHT: f32 = 0.035;
    pub const SHIP_BASE_Y: f32 = 0.04;

    /// Difficulty ramp: bonus added to the forward speed every interval
    pub const SPEED_RAMP_STEP: f32 = 0.012;
    pub const SPEED_RAMP_INTERVAL: f32 = 1.0;

    /// Delay between the game-over impact and the voice cue (seconds)
    pub const GAME_OVER_VOICE_DELAY: f32 = 2.0;
}
