use crate::error::ConfigError;
use crate::math::vec2::Vec2;

/// A convex polygon defined by its vertices in local space.
///
/// Vertices must be ordered counter-clockwise and describe a simple
/// (non-self-intersecting) polygon. This is a precondition of the SAT
/// narrow phase, not a runtime check.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from local-space vertices.
    ///
    /// Fails if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, ConfigError> {
        if vertices.len() < 3 {
            return Err(ConfigError::DegeneratePolygon(vertices.len()));
        }
        Ok(Polygon { vertices })
    }

    /// Creates an axis-aligned rectangle centered on the local origin.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ConfigError> {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
    }

    /// Calculates the centroid of the polygon by triangle fan decomposition.
    pub fn centroid(&self) -> Vec2 {
        let n = self.vertices.len();
        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;
        let origin = self.vertices[0];

        for i in 1..(n - 1) {
            let v2 = self.vertices[i];
            let v3 = self.vertices[i + 1];

            let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_signed_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
        }

        if signed_area_sum.abs() < 1e-10 {
            // Collinear vertices, fall back to the vertex average
            let mut avg = Vec2::ZERO;
            for v in &self.vertices {
                avg += *v;
            }
            avg / (n as f64)
        } else {
            centroid / signed_area_sum
        }
    }

    /// Returns the outward-facing unit normal for each edge.
    /// Assumes counter-clockwise winding.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        let n = self.vertices.len();
        let mut normals = Vec::with_capacity(n);

        for i in 0..n {
            let edge = self.vertices[(i + 1) % n] - self.vertices[i];
            normals.push(-edge.perpendicular().normalize());
        }
        normals
    }
}
