//! A 2D rigid-body physics engine with impulse-based collision resolution.
//!
//! The simulation advances in fixed ticks: [`World::step`] integrates every
//! rigid body with semi-implicit Euler, detects collisions between all
//! collider pairs using the separating axis theorem, and resolves contacts
//! with restitution, Coulomb friction, and positional correction.
//!
//! ```
//! use impulse2d::{Collider, ColliderOptions, GameObject, RigidBody,
//!                 RigidBodyOptions, Vec2, World};
//!
//! let mut world = World::new(1.0 / 60.0)?;
//! world.add_object(
//!     GameObject::new(Vec2::new(0.0, -20.0))
//!         .with_body(RigidBody::new(RigidBodyOptions::default())?)
//!         .with_collider(Collider::circle(5.0, ColliderOptions::default())?),
//! );
//! world.step();
//! # Ok::<(), impulse2d::ConfigError>(())
//! ```

pub mod collision;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

pub use collision::{ColliderId, Manifold};
pub use error::ConfigError;
pub use math::Vec2;
pub use objects::{
    Collider, ColliderOptions, CollisionCallback, ContinuousForce, GameObject, RigidBody,
    RigidBodyOptions,
};
pub use shapes::{Circle, Polygon, Shape};
pub use world::World;
