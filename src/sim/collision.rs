//! Ship versus track collision
//!
//! The ship is alive while any corner of its triangle sits over a tile the
//! ship can currently reach (the loop row and the one just ahead).

use glam::Vec2;

use super::grid::TrackGrid;
use super::track::TrackCell;
use super::transform::Viewport;
use crate::tuning::Tuning;

/// The ship triangle in track-space: left base, apex, right base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipHitbox {
    pub points: [Vec2; 3],
}

impl ShipHitbox {
    /// Ship centered horizontally near the bottom of the viewport
    pub fn from_viewport(viewport: Viewport, tuning: &Tuning) -> Self {
        let center_x = viewport.width() / 2.0;
        let base_y = tuning.ship_base_y * viewport.height();
        let half_width = tuning.ship_width * viewport.width() / 2.0;
        let height = tuning.ship_height * viewport.height();

        Self {
            points: [
                Vec2::new(center_x - half_width, base_y),
                Vec2::new(center_x, base_y + height),
                Vec2::new(center_x + half_width, base_y),
            ],
        }
    }

    /// Same triangle moved by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            points: self.points.map(|p| p + delta),
        }
    }

    pub fn center_x(&self) -> f32 {
        self.points[1].x
    }
}

/// Check if any hitbox point lies on the tile (bounds inclusive)
pub fn ship_on_tile(hitbox: &ShipHitbox, cell: TrackCell, grid: &TrackGrid) -> bool {
    let quad = grid.tile_quad(cell);
    hitbox.points.iter().any(|&p| quad.contains(p))
}

/// Check whether the ship is over the track
///
/// `cells` must be in track order. Only the leading cells up to
/// `grid.loop_row + 1` are tested; if there are none the ship counts as
/// on track.
pub fn is_on_track<'a, I>(hitbox: &ShipHitbox, cells: I, grid: &TrackGrid) -> bool
where
    I: IntoIterator<Item = &'a TrackCell>,
{
    let reach = grid.loop_row + 1;
    let mut relevant = cells.into_iter().take_while(|c| c.row <= reach).peekable();

    if relevant.peek().is_none() {
        return true;
    }
    relevant.any(|&cell| ship_on_tile(hitbox, cell, grid))
}
