use log::trace;

use crate::math::vec2::Vec2;

/// World-space geometry of a collider for one tick, as consumed by the
/// narrow phase. Built by `Collider::to_world` from the owner's transform.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldShape {
    Circle {
        center: Vec2,
        radius: f64,
    },
    Polygon {
        /// CCW-ordered world-space vertices.
        vertices: Vec<Vec2>,
        /// Outward unit normal per edge.
        normals: Vec<Vec2>,
        centroid: Vec2,
    },
}

impl WorldShape {
    pub fn centroid(&self) -> Vec2 {
        match self {
            WorldShape::Circle { center, .. } => *center,
            WorldShape::Polygon { centroid, .. } => *centroid,
        }
    }
}

/// Narrow-phase test between two world-space shapes.
///
/// Returns the separation vector on overlap: its direction is the collision
/// normal pointing from `a` toward `b`, its magnitude the penetration depth.
/// Exact edge touching (zero overlap) counts as non-colliding so resting
/// contacts do not resolve every frame.
pub fn test_shapes(a: &WorldShape, b: &WorldShape) -> Option<Vec2> {
    if let (
        WorldShape::Circle {
            center: center_a,
            radius: radius_a,
        },
        WorldShape::Circle {
            center: center_b,
            radius: radius_b,
        },
    ) = (a, b)
    {
        return circle_circle(*center_a, *radius_a, *center_b, *radius_b);
    }

    let mut axes = Vec::new();
    candidate_axes(a, b, &mut axes);
    candidate_axes(b, a, &mut axes);

    let (axis, overlap) = min_overlap_axis(&axes, a, b)?;

    // The minimum axis is orientation-agnostic; point the normal from A to B
    let delta = b.centroid() - a.centroid();
    let normal = if delta.dot(axis) < 0.0 { -axis } else { axis };
    trace!("overlap {overlap} along {normal:?}");
    Some(normal * overlap)
}

fn circle_circle(center_a: Vec2, radius_a: f64, center_b: Vec2, radius_b: f64) -> Option<Vec2> {
    let delta = center_b - center_a;
    let dist_sq = delta.magnitude_squared();
    let radii_sum = radius_a + radius_b;

    // Strict inequality: touching circles are not colliding
    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    let depth = radii_sum - distance;
    let normal = if distance > 1e-10 {
        delta * (1.0 / distance)
    } else {
        // Concentric centers leave the axis ambiguous
        Vec2::new(0.0, 1.0)
    };
    Some(normal * depth)
}

/// Collects the separating-axis candidates contributed by `shape` when tested
/// against `other`: a polygon contributes its edge normals, a circle the axis
/// from the other polygon's closest vertex to its center.
fn candidate_axes(shape: &WorldShape, other: &WorldShape, axes: &mut Vec<Vec2>) {
    match shape {
        WorldShape::Polygon { normals, .. } => axes.extend_from_slice(normals),
        WorldShape::Circle { center, .. } => {
            if let WorldShape::Polygon { vertices, .. } = other {
                let mut closest = Vec2::ZERO;
                let mut closest_dist_sq = f64::INFINITY;
                for &vertex in vertices {
                    let dist_sq = vertex.distance_squared(*center);
                    if dist_sq < closest_dist_sq {
                        closest_dist_sq = dist_sq;
                        closest = vertex;
                    }
                }
                axes.push((closest - *center).normalize());
            }
        }
    }
}

/// Projects both shapes onto every candidate axis. Returns the axis of least
/// positive overlap and that overlap, or `None` as soon as a separating axis
/// is found.
fn min_overlap_axis(axes: &[Vec2], a: &WorldShape, b: &WorldShape) -> Option<(Vec2, f64)> {
    let mut min_overlap = f64::INFINITY;
    let mut best_axis = Vec2::ZERO;

    for &axis in axes {
        // Degenerate axes can fall out of the closest-vertex normalization
        if axis.magnitude_squared() < 1e-10 {
            continue;
        }

        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);

        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap <= 0.0 {
            return None;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            best_axis = axis;
        }
    }

    if min_overlap.is_finite() {
        Some((best_axis, min_overlap))
    } else {
        None
    }
}

/// Projects a shape onto an axis and returns the min/max interval.
fn project(shape: &WorldShape, axis: Vec2) -> (f64, f64) {
    match shape {
        WorldShape::Circle { center, radius } => {
            let center_proj = center.dot(axis);
            (center_proj - radius, center_proj + radius)
        }
        WorldShape::Polygon { vertices, .. } => {
            let mut min_proj = f64::INFINITY;
            let mut max_proj = f64::NEG_INFINITY;
            for vertex in vertices {
                let projection = vertex.dot(axis);
                min_proj = min_proj.min(projection);
                max_proj = max_proj.max(projection);
            }
            (min_proj, max_proj)
        }
    }
}
