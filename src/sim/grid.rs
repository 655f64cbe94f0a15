//! Lane/row grid laid over track-space
//!
//! Vertical guide lines sit half a column left of their lane, so tile
//! `(lane, row)` spans from line `lane` to line `lane + 1` and from row line
//! `row` to row line `row + 1`. Rendering and collision both go through
//! this mapping.

use glam::Vec2;

use super::state::ScrollState;
use super::track::TrackCell;
use super::transform::Viewport;
use crate::tuning::Tuning;

/// Axis-aligned tile rectangle in track-space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileQuad {
    pub min: Vec2,
    pub max: Vec2,
}

impl TileQuad {
    /// Inclusive point test
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }
}

/// Grid placement for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGrid {
    /// x of the center lane's middle (the vanishing point x)
    pub center_x: f32,
    pub column_spacing: f32,
    pub row_spacing: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub loop_row: i64,
}

impl TrackGrid {
    pub fn new(viewport: Viewport, center_x: f32, tuning: &Tuning, scroll: &ScrollState) -> Self {
        Self {
            center_x,
            column_spacing: tuning.vertical_line_spacing * viewport.width(),
            row_spacing: tuning.horizontal_line_spacing * viewport.height(),
            offset_x: scroll.offset_x,
            offset_y: scroll.offset_y,
            loop_row: scroll.loop_row,
        }
    }

    /// x of vertical guide line `index`
    #[inline]
    pub fn line_x(&self, index: i32) -> f32 {
        let offset = index as f32 - 0.5;
        self.center_x + offset * self.column_spacing + self.offset_x
    }

    /// y of horizontal guide line `index`, counted from the current loop row
    #[inline]
    pub fn line_y(&self, index: i64) -> f32 {
        index as f32 * self.row_spacing - self.offset_y
    }

    /// Lower-left corner of tile `(lane, row)`
    pub fn tile_origin(&self, lane: i32, row: i64) -> Vec2 {
        Vec2::new(self.line_x(lane), self.line_y(row - self.loop_row))
    }

    pub fn tile_quad(&self, cell: TrackCell) -> TileQuad {
        TileQuad {
            min: self.tile_origin(cell.lane, cell.row),
            max: self.tile_origin(cell.lane + 1, cell.row + 1),
        }
    }
}
