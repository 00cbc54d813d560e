use thiserror::Error;

use crate::math::vec2::Vec2;

/// Errors produced when constructing physics components from invalid options.
///
/// These are surfaced immediately at construction; the step loop itself never
/// returns them. Numerical edge cases inside a tick (parallel edges,
/// zero-length normals) are handled by documented tie-breaks instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("mass must be finite and non-negative, got {0}")]
    InvalidMass(f64),

    #[error("friction must be finite and non-negative, got {0}")]
    InvalidFriction(f64),

    #[error("circle radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("polygon requires at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),

    #[error("collider scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    #[error("collider offset must be finite, got ({0}, {1})")]
    InvalidOffset(f64, f64),

    #[error("collider rotation offset must be finite, got {0}")]
    InvalidRotationOffset(f64),

    #[error("speed limits must satisfy min <= max per component without NaN, got min {min:?}, max {max:?}")]
    InvalidSpeedLimits { min: Vec2, max: Vec2 },

    #[error("fixed timestep must be finite and positive, got {0}")]
    InvalidTimestep(f64),
}
