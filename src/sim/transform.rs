//! Perspective projection from track-space to screen-space
//!
//! Track-space is a flat plane measured in viewport pixels: x across the
//! lanes, y away from the player. The perspective stage pulls every point
//! toward a vanishing point, harder the farther it is, so parallel lanes
//! narrow toward a horizon.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MIN_VIEWPORT_EXTENT, PERSPECTIVE_POINT_Y_RATIO};

/// Which projection stages are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// 2D stage only (top-down debug view)
    Flat,
    #[default]
    Perspective,
}

/// Viewport size in pixels, never smaller than `MIN_VIEWPORT_EXTENT`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ViewportSize")]
pub struct Viewport {
    width: f32,
    height: f32,
}

/// Unchecked wire form, clamped on the way in
#[derive(Deserialize)]
struct ViewportSize {
    width: f32,
    height: f32,
}

impl From<ViewportSize> for Viewport {
    fn from(size: ViewportSize) -> Self {
        Self::new(size.width, size.height)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_extent(width),
            height: clamp_extent(height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Default vanishing point: horizontally centered, three quarters up
    pub fn default_vanishing_point(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height * PERSPECTIVE_POINT_Y_RATIO)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(900.0, 400.0)
    }
}

// NaN and negative sizes collapse to the minimum too
fn clamp_extent(v: f32) -> f32 {
    if v >= MIN_VIEWPORT_EXTENT {
        v
    } else {
        MIN_VIEWPORT_EXTENT
    }
}

/// Maps track-space points to screen-space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub viewport: Viewport,
    /// Screen-space point the track converges to (animatable)
    pub vanishing_point: Vec2,
    pub mode: ProjectionMode,
}

impl Projector {
    pub fn new(viewport: Viewport, mode: ProjectionMode) -> Self {
        Self {
            viewport,
            vanishing_point: viewport.default_vanishing_point(),
            mode,
        }
    }

    /// Resize and recenter the vanishing point
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.vanishing_point = viewport.default_vanishing_point();
    }

    /// Project a track-space point
    #[inline]
    pub fn transform(&self, p: Vec2) -> Vec2 {
        let p = transform_2d(p);
        match self.mode {
            ProjectionMode::Flat => p,
            ProjectionMode::Perspective => {
                transform_perspective(p, self.viewport, self.vanishing_point)
            }
        }
    }
}

/// 2D stage. Track-space is already expressed in viewport pixels.
#[inline]
pub fn transform_2d(p: Vec2) -> Vec2 {
    p
}

/// Perspective stage
///
/// The convergence factor is `((vp.y - lin_y) / vp.y)^4` where `lin_y` is `y`
/// rescaled from `[0, height]` onto `[0, vp.y]`. At `y = 0` the factor is 1
/// (no change); at `y >= height` it is 0 (the vanishing point).
pub fn transform_perspective(p: Vec2, viewport: Viewport, vanishing_point: Vec2) -> Vec2 {
    let vp_y = clamp_extent(vanishing_point.y);
    let lin_y = (p.y * vp_y / viewport.height()).min(vp_y);

    let diff_x = p.x - vanishing_point.x;
    let diff_y = vp_y - lin_y;
    let factor = (diff_y / vp_y).powi(4);

    Vec2::new(vanishing_point.x + diff_x * factor, vp_y - factor * vp_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> Projector {
        Projector::new(Viewport::new(900.0, 400.0), ProjectionMode::Perspective)
    }

    #[test]
    fn test_y_zero_is_baseline() {
        let proj = projector();
        for x in [-200.0, 0.0, 123.0, 450.0, 1000.0] {
            let out = proj.transform(Vec2::new(x, 0.0));
            assert!((out.x - x).abs() < 1e-3, "x={} -> {}", x, out.x);
            assert!(out.y.abs() < 1e-3);
        }
    }

    #[test]
    fn test_monotonic_toward_vanishing_point() {
        let proj = projector();
        let vp = proj.vanishing_point;
        let x = 100.0;

        let mut last_dx = f32::INFINITY;
        let mut last_dy = f32::INFINITY;
        let mut y = 0.0;
        while y < 400.0 {
            let out = proj.transform(Vec2::new(x, y));
            let dx = (out.x - vp.x).abs();
            let dy = (vp.y - out.y).abs();
            assert!(dx < last_dx, "y={} dx={} last={}", y, dx, last_dx);
            assert!(dy < last_dy, "y={} dy={} last={}", y, dy, last_dy);
            last_dx = dx;
            last_dy = dy;
            y += 10.0;
        }
    }

    #[test]
    fn test_far_rows_reach_vanishing_point() {
        let proj = projector();
        let vp = proj.vanishing_point;
        for y in [400.0, 800.0, 1e6] {
            let out = proj.transform(Vec2::new(37.0, y));
            assert!((out - vp).length() < 1e-3);
        }
    }

    #[test]
    fn test_degenerate_viewport_is_finite() {
        let proj = Projector::new(Viewport::new(0.0, 0.0), ProjectionMode::Perspective);
        assert_eq!(proj.viewport.width(), MIN_VIEWPORT_EXTENT);
        assert_eq!(proj.viewport.height(), MIN_VIEWPORT_EXTENT);

        let out = proj.transform(Vec2::new(5.0, 3.0));
        assert!(out.x.is_finite() && out.y.is_finite());

        // Vanishing point pinned to the floor must not divide by zero
        let mut proj = proj;
        proj.vanishing_point = Vec2::ZERO;
        let out = proj.transform(Vec2::new(5.0, 0.5));
        assert!(out.x.is_finite() && out.y.is_finite());
    }

    #[test]
    fn test_deserialized_viewport_is_clamped() {
        let viewport: Viewport =
            serde_json::from_str(r#"{ "width": 0.0, "height": -5.0 }"#).unwrap();
        assert_eq!(viewport, Viewport::new(0.0, 0.0));

        let out = transform_perspective(
            Vec2::new(3.0, 1.0),
            viewport,
            viewport.default_vanishing_point(),
        );
        assert!(out.x.is_finite() && out.y.is_finite());
    }

    #[test]
    fn test_flat_mode_is_identity() {
        let proj = Projector::new(Viewport::default(), ProjectionMode::Flat);
        let p = Vec2::new(12.5, 300.0);
        assert_eq!(proj.transform(p), p);
    }

    #[test]
    fn test_resize_recenters() {
        let mut proj = projector();
        proj.resize(Viewport::new(200.0, 100.0));
        assert_eq!(proj.vanishing_point, Vec2::new(100.0, 75.0));
    }
}
