//! Per-frame simulation step
//!
//! Core game loop that advances scrolling, grows the track, fires deferred
//! tasks and checks whether the ship is still over the path.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::MAX_FRAME_DT;

/// Steering intent from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steer {
    #[default]
    None,
    Left,
    Right,
}

impl Steer {
    /// Sign applied to the lateral speed. The ship stays centered and the
    /// grid slides the other way, so steering left pushes the grid right.
    pub fn grid_direction(self) -> f32 {
        match self {
            Steer::None => 0.0,
            Steer::Left => 1.0,
            Steer::Right => -1.0,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub steer: Steer,
    /// Start from the menu / restart after game over
    pub start: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame of `dt` seconds.
///
/// `dt` is clamped to `[0, MAX_FRAME_DT]`; NaN and infinities count as 0.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };

    if (input.start || input.idle_mode) && state.phase != GamePhase::Playing {
        state.start_run();
    }

    if state.phase == GamePhase::Playing {
        let steer = if input.idle_mode {
            autopilot(state)
        } else {
            input.steer
        };
        state.scroll.lateral_speed = steer.grid_direction() * state.tuning.lateral_speed;
        advance_scroll(state, dt);
    }

    for task in state.scheduler.advance(dt) {
        state.fire(&task);
    }

    if state.phase == GamePhase::Playing && !state.ship_on_track() {
        state.end_run();
    }
}

/// Move the grid forward and sideways, crossing row boundaries as needed
fn advance_scroll(state: &mut GameState, dt: f32) {
    let time_factor = dt * state.tuning.target_fps;

    let speed_y = state.forward_speed();
    state.scroll.offset_y += speed_y * time_factor;

    let row_span = state.row_span();
    assert!(row_span > 0.0, "row span must be positive, got {}", row_span);
    while state.scroll.offset_y >= row_span {
        state.scroll.offset_y -= row_span;
        state.scroll.loop_row += 1;
        let score = state.score();
        state.push_event(GameEvent::RowPassed { score });
        state.regenerate_track();
    }

    let speed_x = state.scroll.lateral_speed * state.viewport().width() / 100.0;
    state.scroll.offset_x += speed_x * time_factor;
}

/// Steer toward the tile under the ship, looking one row ahead once the
/// ship is past the middle of the current row
pub fn autopilot(state: &GameState) -> Steer {
    let grid = state.grid();
    let ship_x = state.hitbox().center_x();

    let look_row = if state.scroll.offset_y > state.row_span() * 0.5 {
        state.scroll.loop_row + 1
    } else {
        state.scroll.loop_row
    };
    let Some(&target) = state.track.cells().take_while(|c| c.row <= look_row).last() else {
        return Steer::None;
    };

    let target_x = grid.tile_quad(target).center().x;
    let dead_band = grid.column_spacing * 0.1;
    if target_x < ship_x - dead_band {
        Steer::Left
    } else if target_x > ship_x + dead_band {
        Steer::Right
    } else {
        Steer::None
    }
}
