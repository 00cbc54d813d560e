use std::fmt;

use crate::collision::detection::WorldShape;
use crate::collision::manifold::Manifold;
use crate::error::ConfigError;
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Polygon, Shape};

/// Invoked with the manifold of every overlap the collider participates in.
pub type CollisionCallback = Box<dyn FnMut(&Manifold)>;

/// Construction options for a [`Collider`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderOptions {
    /// Local translation from the owner's origin.
    pub offset: Vec2,
    /// Local rotation (radians) on top of the owner's rotation.
    pub rotation_offset: f64,
    /// Uniform scale applied to the local geometry.
    pub scale: f64,
    /// Triggers report overlaps through callbacks but are never resolved.
    pub trigger: bool,
    /// External debug-draw hint; the core only stores it.
    pub debug: bool,
    /// Opaque classification used for callback-side filtering (e.g. "ground").
    pub tag: String,
}

impl Default for ColliderOptions {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation_offset: 0.0,
            scale: 1.0,
            trigger: false,
            debug: false,
            tag: String::new(),
        }
    }
}

/// A geometric primitive attached to a game object: local-space geometry plus
/// a local transform, classification flags, and an optional collision
/// callback.
pub struct Collider {
    shape: Shape,
    pub offset: Vec2,
    pub rotation_offset: f64,
    scale: f64,
    trigger: bool,
    pub debug: bool,
    pub tag: String,
    callback: Option<CollisionCallback>,
}

impl Collider {
    fn from_shape(shape: Shape, options: ColliderOptions) -> Result<Self, ConfigError> {
        if !options.scale.is_finite() || options.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(options.scale));
        }
        if !options.offset.is_finite() {
            return Err(ConfigError::InvalidOffset(options.offset.x, options.offset.y));
        }
        if !options.rotation_offset.is_finite() {
            return Err(ConfigError::InvalidRotationOffset(options.rotation_offset));
        }
        Ok(Self {
            shape,
            offset: options.offset,
            rotation_offset: options.rotation_offset,
            scale: options.scale,
            trigger: options.trigger,
            debug: options.debug,
            tag: options.tag,
            callback: None,
        })
    }

    /// Creates a circle collider.
    pub fn circle(radius: f64, options: ColliderOptions) -> Result<Self, ConfigError> {
        Self::from_shape(Shape::Circle(Circle::new(radius)?), options)
    }

    /// Creates a convex polygon collider from CCW local-space vertices.
    pub fn polygon(vertices: Vec<Vec2>, options: ColliderOptions) -> Result<Self, ConfigError> {
        Self::from_shape(Shape::Polygon(Polygon::new(vertices)?), options)
    }

    /// Registers the collision callback, builder style.
    pub fn with_callback(mut self, callback: impl FnMut(&Manifold) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Registers or replaces the collision callback.
    pub fn set_callback(&mut self, callback: impl FnMut(&Manifold) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Removes the collision callback.
    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_trigger(&self) -> bool {
        self.trigger
    }

    pub(crate) fn invoke_callback(&mut self, manifold: &Manifold) {
        if let Some(callback) = self.callback.as_mut() {
            callback(manifold);
        }
    }

    /// Projects the local geometry into world space given the owner's
    /// position and rotation. The result is what the narrow phase consumes.
    pub fn to_world(&self, owner_position: Vec2, owner_rotation: f64) -> WorldShape {
        let center = owner_position + self.offset.rotate(owner_rotation);
        match &self.shape {
            Shape::Circle(circle) => WorldShape::Circle {
                center,
                radius: circle.radius * self.scale,
            },
            Shape::Polygon(polygon) => {
                let angle = owner_rotation + self.rotation_offset;
                let vertices: Vec<Vec2> = polygon
                    .vertices
                    .iter()
                    .map(|&v| center + (v * self.scale).rotate(angle))
                    .collect();
                let normals: Vec<Vec2> = polygon
                    .edge_normals()
                    .iter()
                    .map(|&n| n.rotate(angle))
                    .collect();
                let centroid = center + (polygon.centroid() * self.scale).rotate(angle);
                WorldShape::Polygon {
                    vertices,
                    normals,
                    centroid,
                }
            }
        }
    }
}

impl fmt::Debug for Collider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collider")
            .field("shape", &self.shape)
            .field("offset", &self.offset)
            .field("rotation_offset", &self.rotation_offset)
            .field("scale", &self.scale)
            .field("trigger", &self.trigger)
            .field("debug", &self.debug)
            .field("tag", &self.tag)
            .field("callback", &self.callback.as_ref().map(|_| "FnMut"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_collider_circle_defaults() {
        let collider = Collider::circle(2.0, ColliderOptions::default()).unwrap();
        assert!(!collider.is_trigger());
        assert!(!collider.debug);
        assert_eq!(collider.tag, "");
        assert_eq!(collider.offset, Vec2::ZERO);
        match collider.shape() {
            Shape::Circle(circle) => assert_eq!(circle.radius, 2.0),
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_collider_invalid_geometry() {
        assert!(Collider::circle(-1.0, ColliderOptions::default()).is_err());
        assert!(Collider::polygon(
            vec![Vec2::ZERO, Vec2::new(1.0, 0.0)],
            ColliderOptions::default()
        )
        .is_err());
    }

    #[test]
    fn test_collider_invalid_scale() {
        let options = ColliderOptions {
            scale: 0.0,
            ..Default::default()
        };
        assert_eq!(
            Collider::circle(1.0, options).unwrap_err(),
            ConfigError::InvalidScale(0.0)
        );
    }

    #[test]
    fn test_collider_non_finite_transform() {
        let options = ColliderOptions {
            offset: Vec2::new(f64::NAN, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            Collider::circle(1.0, options).unwrap_err(),
            ConfigError::InvalidOffset(..)
        ));

        let options = ColliderOptions {
            offset: Vec2::new(0.0, f64::INFINITY),
            ..Default::default()
        };
        assert!(Collider::circle(1.0, options).is_err());

        let options = ColliderOptions {
            rotation_offset: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            Collider::polygon(
                vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
                options
            )
            .unwrap_err(),
            ConfigError::InvalidRotationOffset(_)
        ));
    }

    #[test]
    fn test_collider_circle_to_world() {
        let options = ColliderOptions {
            offset: Vec2::new(1.0, 0.0),
            scale: 2.0,
            ..Default::default()
        };
        let collider = Collider::circle(3.0, options).unwrap();

        // Owner rotated 90 degrees: the offset rotates with it
        let world = collider.to_world(Vec2::new(10.0, 0.0), PI / 2.0);
        match world {
            WorldShape::Circle { center, radius } => {
                assert!((center.x - 10.0).abs() < EPSILON);
                assert!((center.y - 1.0).abs() < EPSILON);
                assert!((radius - 6.0).abs() < EPSILON);
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_collider_polygon_to_world() {
        let vertices = vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        let collider = Collider::polygon(vertices, ColliderOptions::default()).unwrap();

        let world = collider.to_world(Vec2::new(5.0, 5.0), 0.0);
        match world {
            WorldShape::Polygon {
                vertices, centroid, ..
            } => {
                assert_eq!(vertices[0], Vec2::new(4.0, 4.0));
                assert_eq!(vertices[2], Vec2::new(6.0, 6.0));
                assert!((centroid.x - 5.0).abs() < EPSILON);
                assert!((centroid.y - 5.0).abs() < EPSILON);
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_collider_callback_invocation() {
        use std::cell::Cell;
        use std::rc::Rc;

        let hits = Rc::new(Cell::new(0));
        let hits_inner = Rc::clone(&hits);
        let mut collider = Collider::circle(1.0, ColliderOptions::default())
            .unwrap()
            .with_callback(move |_| hits_inner.set(hits_inner.get() + 1));

        let manifold = Manifold {
            a: crate::collision::manifold::ColliderId { object: 0, collider: 0 },
            b: crate::collision::manifold::ColliderId { object: 1, collider: 0 },
            separation: Vec2::new(0.0, 1.0),
        };
        collider.invoke_callback(&manifold);
        collider.invoke_callback(&manifold);
        assert_eq!(hits.get(), 2);

        collider.clear_callback();
        collider.invoke_callback(&manifold);
        assert_eq!(hits.get(), 2);
    }
}
