pub mod detection;
pub mod manifold;
pub mod resolution;

pub use detection::{test_shapes, WorldShape};
pub use manifold::{ColliderId, Manifold};
pub use resolution::resolve;
