//! Per-frame screen-space geometry
//!
//! Built from the current `GameState` after every tick, including while the
//! game is over so the frozen scene stays on screen.

use glam::Vec2;

use super::shapes;
use super::vertex::{GUIDE_LINE_WIDTH, Vertex, colors};
use crate::sim::GameState;

/// Screen-space shapes for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameGeometry {
    /// One segment per vertical guide line, near end first
    pub vertical_lines: Vec<[Vec2; 2]>,
    /// One segment per horizontal guide line, left end first
    pub horizontal_lines: Vec<[Vec2; 2]>,
    /// Tile corners: (xmin, ymin), (xmin, ymax), (xmax, ymax), (xmax, ymin)
    pub tiles: Vec<[Vec2; 4]>,
    /// Ship triangle: left base, apex, right base
    pub ship: [Vec2; 3],
}

impl FrameGeometry {
    pub fn build(state: &GameState) -> Self {
        let proj = &state.projector;
        let grid = state.grid();
        let height = state.viewport().height();

        let vertical_lines = state
            .bounds
            .line_indices()
            .map(|i| {
                let x = grid.line_x(i);
                [
                    proj.transform(Vec2::new(x, 0.0)),
                    proj.transform(Vec2::new(x, height)),
                ]
            })
            .collect();

        let xmin = grid.line_x(state.bounds.start);
        let xmax = grid.line_x(state.bounds.end);
        let horizontal_lines = (0..state.tuning.num_horizontal_lines as i64)
            .map(|i| {
                let y = grid.line_y(i);
                [
                    proj.transform(Vec2::new(xmin, y)),
                    proj.transform(Vec2::new(xmax, y)),
                ]
            })
            .collect();

        let tiles = state
            .track
            .window(state.tuning.num_tiles)
            .map(|&cell| {
                let q = grid.tile_quad(cell);
                [
                    proj.transform(Vec2::new(q.min.x, q.min.y)),
                    proj.transform(Vec2::new(q.min.x, q.max.y)),
                    proj.transform(Vec2::new(q.max.x, q.max.y)),
                    proj.transform(Vec2::new(q.max.x, q.min.y)),
                ]
            })
            .collect();

        let ship = state.hitbox().points.map(|p| proj.transform(p));

        Self {
            vertical_lines,
            horizontal_lines,
            tiles,
            ship,
        }
    }

    /// Flatten into a colored triangle list, back to front
    pub fn to_vertices(&self) -> Vec<Vertex> {
        let line_count = self.vertical_lines.len() + self.horizontal_lines.len();
        let mut vertices = Vec::with_capacity(self.tiles.len() * 6 + line_count * 6 + 3);

        for tile in &self.tiles {
            vertices.extend(shapes::quad(*tile, colors::TILE));
        }
        for [a, b] in self.vertical_lines.iter().chain(&self.horizontal_lines) {
            vertices.extend(shapes::line(*a, *b, GUIDE_LINE_WIDTH, colors::GUIDE_LINE));
        }
        vertices.extend(shapes::triangle(self.ship, colors::SHIP));

        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, TickInput, tick};

    #[test]
    fn test_counts_match_tuning() {
        let state = GameState::new(1);
        let frame = FrameGeometry::build(&state);
        assert_eq!(frame.vertical_lines.len(), state.tuning.num_vertical_lines as usize);
        assert_eq!(
            frame.horizontal_lines.len(),
            state.tuning.num_horizontal_lines as usize
        );
        assert_eq!(frame.tiles.len(), state.tuning.num_tiles);
    }

    #[test]
    fn test_far_tiles_are_narrower() {
        let state = GameState::new(1);
        let frame = FrameGeometry::build(&state);
        let width = |t: &[Vec2; 4]| t[3].x - t[0].x;
        let near = width(&frame.tiles[0]);
        let far = width(&frame.tiles[5]);
        assert!(far < near, "far={} near={}", far, near);
    }

    #[test]
    fn test_near_edge_is_unprojected() {
        let state = GameState::new(1);
        let frame = FrameGeometry::build(&state);
        let grid = state.grid();
        let [near, _] = frame.vertical_lines[0];
        assert!((near.x - grid.line_x(state.bounds.start)).abs() < 1e-3);
        assert!(near.y.abs() < 1e-3);
    }

    #[test]
    fn test_short_track_draws_what_exists() {
        let mut state = GameState::new(1);
        state.track = crate::sim::Track::straight(3);
        let frame = FrameGeometry::build(&state);
        assert_eq!(frame.tiles.len(), 3);
    }

    #[test]
    fn test_frozen_scene_after_game_over() {
        let mut state = GameState::new(4);
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, 0.0);
        state.scroll.offset_x = 10.0 * state.viewport().width();
        tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let before = FrameGeometry::build(&state);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        }
        assert_eq!(FrameGeometry::build(&state), before);
    }

    #[test]
    fn test_vertex_buffer_size() {
        let state = GameState::new(1);
        let frame = FrameGeometry::build(&state);
        let verts = frame.to_vertices();
        // Lines past the horizon collapse onto the vanishing point and are skipped
        let lines = frame
            .vertical_lines
            .iter()
            .chain(&frame.horizontal_lines)
            .filter(|[a, b]| a != b)
            .count();
        assert!(lines < frame.vertical_lines.len() + frame.horizontal_lines.len());
        assert_eq!(verts.len(), frame.tiles.len() * 6 + lines * 6 + 3);
    }
}
