//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-rate independent (speeds scale with dt)
//! - Seeded RNG only
//! - Stable iteration order (track order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod schedule;
pub mod state;
pub mod tick;
pub mod track;
pub mod transform;

pub use collision::{ShipHitbox, is_on_track, ship_on_tile};
pub use grid::{TileQuad, TrackGrid};
pub use schedule::{ScheduledTask, Scheduler, TaskKind};
pub use state::{GameEvent, GamePhase, GameState, RngState, ScrollState};
pub use tick::{Steer, TickInput, autopilot, tick};
pub use track::{Bend, LaneBounds, Track, TrackCell};
pub use transform::{ProjectionMode, Projector, Viewport, transform_2d, transform_perspective};
