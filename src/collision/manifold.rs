use crate::math::vec2::Vec2;

/// Identifies one collider within the world: the owning object's index and
/// the collider's index within that object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderId {
    pub object: usize,
    pub collider: usize,
}

/// The result of a positive narrow-phase test between two colliders.
///
/// Manifolds are produced and consumed within a single step; they must never
/// be cached across steps, as the ids and separation go stale as soon as any
/// body moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    /// The first collider of the pair, by collection order.
    pub a: ColliderId,
    /// The second collider of the pair.
    pub b: ColliderId,
    /// Minimum-translation vector: its direction is the collision normal and
    /// its magnitude the penetration depth. Pushing B's owner along
    /// `+separation` and A's owner along `-separation` resolves the overlap.
    pub separation: Vec2,
}

impl Manifold {
    /// Unit collision normal, pointing from shape A toward shape B.
    pub fn normal(&self) -> Vec2 {
        self.separation.normalize()
    }

    /// Penetration depth along the normal.
    pub fn depth(&self) -> f64 {
        self.separation.magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_manifold_normal_and_depth() {
        let manifold = Manifold {
            a: ColliderId { object: 0, collider: 0 },
            b: ColliderId { object: 1, collider: 0 },
            separation: Vec2::new(3.0, 4.0),
        };
        assert!((manifold.depth() - 5.0).abs() < EPSILON);
        let normal = manifold.normal();
        assert!((normal.x - 0.6).abs() < EPSILON);
        assert!((normal.y - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_manifold_zero_separation() {
        let manifold = Manifold {
            a: ColliderId { object: 0, collider: 0 },
            b: ColliderId { object: 1, collider: 0 },
            separation: Vec2::ZERO,
        };
        assert_eq!(manifold.depth(), 0.0);
        assert_eq!(manifold.normal(), Vec2::ZERO);
    }
}
