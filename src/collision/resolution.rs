use log::trace;

use crate::collision::manifold::Manifold;
use crate::math::vec2::Vec2;
use crate::objects::game_object::GameObject;

/// Fraction of the residual penetration corrected per resolution.
pub const CORRECTION_PERCENT: f64 = 0.2;
/// Penetration tolerated without correction, to avoid jitter.
pub const CORRECTION_SLOP: f64 = 0.01;

/// Resolves one contact between the owners of the manifold's two colliders:
/// impulse along the normal, positional correction, then friction along the
/// tangent.
///
/// An owner without a rigid body acts as immovable, perfectly rigid geometry
/// (zero inverse mass, zero velocity, no restitution or friction of its own).
/// Separating contacts skip both the impulse and the correction. Two
/// immovable owners are a degenerate no-op.
pub fn resolve(manifold: &Manifold, object_a: &mut GameObject, object_b: &mut GameObject) {
    let normal = manifold.normal();
    if normal == Vec2::ZERO {
        return;
    }
    let depth = manifold.depth();

    let inv_mass_a = object_a.body().map_or(0.0, |body| body.inv_mass());
    let inv_mass_b = object_b.body().map_or(0.0, |body| body.inv_mass());
    let inv_mass_sum = inv_mass_a + inv_mass_b;

    // Two infinite masses cannot be pushed apart; never reach the division
    if inv_mass_sum == 0.0 {
        trace!("contact between two immovable owners, skipping");
        return;
    }

    let velocity_a = object_a.body().map_or(Vec2::ZERO, |body| body.velocity);
    let velocity_b = object_b.body().map_or(Vec2::ZERO, |body| body.velocity);

    let vel_along_normal = (velocity_b - velocity_a).dot(normal);

    // Already separating: no impulse and no positional correction
    if vel_along_normal > 0.0 {
        return;
    }

    let e = object_a
        .body()
        .map_or(0.0, |body| body.restitution)
        .min(object_b.body().map_or(0.0, |body| body.restitution));

    let j = -(1.0 + e) * vel_along_normal / inv_mass_sum;
    let impulse = normal * j;
    if let Some(body) = object_a.body_mut() {
        body.velocity -= impulse * inv_mass_a;
    }
    if let Some(body) = object_b.body_mut() {
        body.velocity += impulse * inv_mass_b;
    }

    // Positional correction: remove most of the residual penetration while
    // tolerating `CORRECTION_SLOP` of overlap
    let correction_magnitude = (depth - CORRECTION_SLOP).max(0.0);
    if correction_magnitude > 0.0 {
        let correction = normal * (correction_magnitude / inv_mass_sum * CORRECTION_PERCENT);
        object_a.translate(-correction * inv_mass_a);
        object_b.translate(correction * inv_mass_b);
    }

    // Friction: recompute the relative velocity after the normal impulse and
    // oppose its tangential component
    let velocity_a = object_a.body().map_or(Vec2::ZERO, |body| body.velocity);
    let velocity_b = object_b.body().map_or(Vec2::ZERO, |body| body.velocity);
    let relative_velocity = velocity_b - velocity_a;

    let tangent = (relative_velocity - normal * relative_velocity.dot(normal)).normalize();
    if tangent == Vec2::ZERO {
        return;
    }

    let jt = -relative_velocity.dot(tangent) / inv_mass_sum;

    let mu = match (object_a.body(), object_b.body()) {
        (Some(body_a), Some(body_b)) => {
            (body_a.friction * body_a.friction + body_b.friction * body_b.friction).sqrt()
        }
        (Some(body_a), None) => body_a.friction,
        (None, Some(body_b)) => body_b.friction,
        (None, None) => unreachable!("guarded by the zero inverse-mass check"),
    };

    let friction_impulse = if jt.abs() < j * mu {
        // Static friction cancels the tangential velocity outright
        tangent * jt
    } else {
        tangent * (-j * mu)
    };

    if let Some(body) = object_a.body_mut() {
        body.velocity -= friction_impulse * inv_mass_a;
    }
    if let Some(body) = object_b.body_mut() {
        body.velocity += friction_impulse * inv_mass_b;
    }
}
