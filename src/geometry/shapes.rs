//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list.

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for a thick line segment
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    quad([a - perp, b - perp, b + perp, a + perp], color)
}

/// Generate vertices for a convex quad given in winding order
pub fn quad(points: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [p1, p2, p3, p4] = points;
    let mut vertices = Vec::with_capacity(6);

    // Two triangles sharing the p1-p3 diagonal
    vertices.push(Vertex::new(p1.x, p1.y, color));
    vertices.push(Vertex::new(p2.x, p2.y, color));
    vertices.push(Vertex::new(p3.x, p3.y, color));

    vertices.push(Vertex::new(p1.x, p1.y, color));
    vertices.push(Vertex::new(p3.x, p3.y, color));
    vertices.push(Vertex::new(p4.x, p4.y, color));

    vertices
}

/// Generate vertices for a single triangle
pub fn triangle(points: [Vec2; 3], color: [f32; 4]) -> Vec<Vertex> {
    points
        .iter()
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_line_has_width() {
        let verts = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(verts.len(), 6);
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_quad_and_triangle_counts() {
        let q = quad([Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y], WHITE);
        assert_eq!(q.len(), 6);
        let t = triangle([Vec2::ZERO, Vec2::X, Vec2::Y], WHITE);
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].position, [1.0, 0.0]);
    }
}
