pub mod collider;
pub mod game_object;
pub mod rigid_body;

pub use collider::{Collider, ColliderOptions, CollisionCallback};
pub use game_object::GameObject;
pub use rigid_body::{ContinuousForce, RigidBody, RigidBodyOptions};
