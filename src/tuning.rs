//! Data-driven game balance
//!
//! Every number the simulation reads lives here so it can be tweaked from a
//! settings file without touching code. Defaults come from `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Most guide lines of either kind a settings file may ask for
pub const MAX_GRID_LINES: u32 = 1024;
/// Most cells the window or the takeoff strip may hold
pub const MAX_TRACK_CELLS: usize = 4096;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Frame rate the per-frame speeds are expressed against
    pub target_fps: f32,

    // === Grid ===
    pub num_vertical_lines: u32,
    /// Column width as a fraction of viewport width
    pub vertical_line_spacing: f32,
    pub num_horizontal_lines: u32,
    /// Row height as a fraction of viewport height
    pub horizontal_line_spacing: f32,

    // === Speeds ===
    /// Percent of viewport height per frame
    pub forward_speed: f32,
    /// Percent of viewport width per frame
    pub lateral_speed: f32,

    // === Track ===
    /// Cells in the visible window
    pub num_tiles: usize,
    /// Length of the straight takeoff run
    pub initial_straight_length: usize,

    // === Ship ===
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_base_y: f32,

    // === Difficulty ===
    pub speed_ramp_step: f32,
    /// Seconds between ramp steps
    pub speed_ramp_interval: f32,
    /// Upper bound on the ramp bonus (None = unbounded)
    pub speed_bonus_cap: Option<f32>,

    // === Cues ===
    pub game_over_voice_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,

            num_vertical_lines: NUM_VERTICAL_LINES,
            vertical_line_spacing: VERTICAL_LINE_SPACING,
            num_horizontal_lines: NUM_HORIZONTAL_LINES,
            horizontal_line_spacing: HORIZONTAL_LINE_SPACING,

            forward_speed: FORWARD_SPEED,
            lateral_speed: LATERAL_SPEED,

            num_tiles: NUM_TILES,
            initial_straight_length: INITIAL_STRAIGHT_PATH_LENGTH,

            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_base_y: SHIP_BASE_Y,

            speed_ramp_step: SPEED_RAMP_STEP,
            speed_ramp_interval: SPEED_RAMP_INTERVAL,
            speed_bonus_cap: None,

            game_over_voice_delay: GAME_OVER_VOICE_DELAY,
        }
    }
}

impl Tuning {
    /// Check values the simulation divides by or loops on.
    ///
    /// Returns the name of the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.target_fps > 0.0) {
            return Err("target_fps");
        }
        if !(3..=MAX_GRID_LINES).contains(&self.num_vertical_lines) {
            return Err("num_vertical_lines");
        }
        if !(self.vertical_line_spacing > 0.0) {
            return Err("vertical_line_spacing");
        }
        if !(self.horizontal_line_spacing > 0.0) {
            return Err("horizontal_line_spacing");
        }
        if !(1..=MAX_GRID_LINES).contains(&self.num_horizontal_lines) {
            return Err("num_horizontal_lines");
        }
        if !self.forward_speed.is_finite() {
            return Err("forward_speed");
        }
        if !self.lateral_speed.is_finite() {
            return Err("lateral_speed");
        }
        if !(1..=MAX_TRACK_CELLS).contains(&self.num_tiles) {
            return Err("num_tiles");
        }
        if self.initial_straight_length > MAX_TRACK_CELLS {
            return Err("initial_straight_length");
        }
        if !(self.speed_ramp_interval > 0.0) {
            return Err("speed_ramp_interval");
        }
        if self.speed_bonus_cap.is_some_and(|cap| cap < 0.0) {
            return Err("speed_bonus_cap");
        }
        Ok(())
    }

    /// Apply the optional ramp cap to a bonus value
    #[inline]
    pub fn cap_bonus(&self, bonus: f32) -> f32 {
        match self.speed_bonus_cap {
            Some(cap) => bonus.min(cap),
            None => bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_row_spacing() {
        let tuning = Tuning {
            horizontal_line_spacing: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err("horizontal_line_spacing"));
    }

    #[test]
    fn test_rejects_too_few_lines() {
        let tuning = Tuning {
            num_vertical_lines: 2,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err("num_vertical_lines"));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let tuning = Tuning {
            num_vertical_lines: 4_000_000_000,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err("num_vertical_lines"));

        let tuning = Tuning {
            num_tiles: usize::MAX,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err("num_tiles"));

        let tuning = Tuning {
            initial_straight_length: MAX_TRACK_CELLS + 1,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err("initial_straight_length"));
    }

    #[test]
    fn test_rejects_infinite_speed() {
        let tuning = Tuning {
            forward_speed: f32::INFINITY,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err("forward_speed"));
    }

    #[test]
    fn test_cap_bonus() {
        let mut tuning = Tuning::default();
        assert_eq!(tuning.cap_bonus(5.0), 5.0);
        tuning.speed_bonus_cap = Some(1.5);
        assert_eq!(tuning.cap_bonus(5.0), 1.5);
        assert_eq!(tuning.cap_bonus(0.5), 0.5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "num_tiles": 20 }"#).unwrap();
        assert_eq!(tuning.num_tiles, 20);
        assert_eq!(tuning.num_vertical_lines, NUM_VERTICAL_LINES);
    }
}
