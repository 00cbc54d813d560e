use crate::error::ConfigError;
use crate::math::vec2::Vec2;

/// Construction options for a [`RigidBody`].
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyOptions {
    /// Mass in arbitrary units. `0.0` makes the body static (infinite mass).
    pub mass: f64,
    /// Per-body gravity, applied as a force each fixed step.
    pub gravity: Vec2,
    /// Componentwise upper velocity limit.
    pub max_speed: Vec2,
    /// Componentwise lower velocity limit.
    pub min_speed: Vec2,
    /// Coulomb friction coefficient, `>= 0`.
    pub friction: f64,
    /// Bounciness, clamped into `[0, 1]`.
    pub restitution: f64,
    /// Initial rotation in radians.
    pub rotation: f64,
    /// External debug-draw hint.
    pub debug: bool,
}

impl Default for RigidBodyOptions {
    fn default() -> Self {
        Self {
            mass: 1.0,
            gravity: Vec2::new(0.0, 100.0),
            max_speed: Vec2::MAX,
            min_speed: Vec2::MIN,
            friction: 0.0,
            restitution: 0.0,
            rotation: 0.0,
            debug: false,
        }
    }
}

/// A force re-applied every fixed step until its timer runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousForce {
    pub force: Vec2,
    /// Seconds left; decremented by `dt` each step, dropped at `<= 0`.
    pub remaining: f64,
}

/// Per-body dynamic state and the semi-implicit Euler integrator.
///
/// A body with zero mass has `inv_mass == 0` and never moves: gravity and
/// forces are no-ops and the resolver treats it as an immovable anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub velocity: Vec2,
    pub angular_velocity: f64,
    pub rotation: f64,
    inv_mass: f64,
    pub restitution: f64,
    pub friction: f64,
    pub gravity: Vec2,
    pub max_speed: Vec2,
    pub min_speed: Vec2,
    pub debug: bool,

    // Cleared at the end of each integration
    force: Vec2,
    continuous_forces: Vec<ContinuousForce>,
}

impl RigidBody {
    /// Creates a body from validated options.
    pub fn new(options: RigidBodyOptions) -> Result<Self, ConfigError> {
        if !options.mass.is_finite() || options.mass < 0.0 {
            return Err(ConfigError::InvalidMass(options.mass));
        }
        if !options.friction.is_finite() || options.friction < 0.0 {
            return Err(ConfigError::InvalidFriction(options.friction));
        }
        // NaN or crossed limits would panic inside `Vec2::clamp` mid-step
        if options.min_speed.is_nan()
            || options.max_speed.is_nan()
            || options.min_speed.x > options.max_speed.x
            || options.min_speed.y > options.max_speed.y
        {
            return Err(ConfigError::InvalidSpeedLimits {
                min: options.min_speed,
                max: options.max_speed,
            });
        }

        let inv_mass = if options.mass == 0.0 {
            0.0
        } else {
            1.0 / options.mass
        };

        Ok(Self {
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            rotation: options.rotation,
            inv_mass,
            restitution: options.restitution.clamp(0.0, 1.0),
            friction: options.friction,
            gravity: options.gravity,
            max_speed: options.max_speed,
            min_speed: options.min_speed,
            debug: options.debug,
            force: Vec2::ZERO,
            continuous_forces: Vec::new(),
        })
    }

    /// Mass derived from the stored inverse mass; `0.0` for static bodies.
    pub fn mass(&self) -> f64 {
        if self.inv_mass == 0.0 {
            0.0
        } else {
            1.0 / self.inv_mass
        }
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    /// True when the body has infinite mass and never moves.
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Accumulates a force for the next fixed step. The velocity change is
    /// `force * inv_mass * dt`, applied once during integration.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Queues a force applied every fixed step for `duration` seconds.
    /// A non-positive duration is a no-op.
    pub fn add_continuous_force(&mut self, force: Vec2, duration: f64) {
        if duration <= 0.0 {
            return;
        }
        self.continuous_forces.push(ContinuousForce {
            force,
            remaining: duration,
        });
    }

    /// Pending continuous-force entries, inspectable for testing.
    pub fn continuous_forces(&self) -> &[ContinuousForce] {
        &self.continuous_forces
    }

    /// One fixed step of semi-implicit Euler: gravity and accumulated forces
    /// update the velocity first, then the new velocity moves the owner.
    ///
    /// Static bodies only tick their continuous-force timers.
    pub(crate) fn integrate(&mut self, position: &mut Vec2, dt: f64) {
        let mut total = self.gravity * self.mass() + self.force;
        for entry in &mut self.continuous_forces {
            total += entry.force;
            entry.remaining -= dt;
        }
        self.continuous_forces.retain(|entry| entry.remaining > 0.0);
        self.force = Vec2::ZERO;

        if self.inv_mass == 0.0 {
            return;
        }

        self.velocity += total * self.inv_mass * dt;
        self.velocity = self.velocity.clamp(self.min_speed, self.max_speed);
        *position += self.velocity * dt;
        self.rotation += self.angular_velocity * dt;
    }
}
