use crate::math::vec2::Vec2;
use crate::objects::collider::Collider;
use crate::objects::rigid_body::RigidBody;

/// An owner in the scene: a position, a rotation, zero-or-more colliders and
/// at most one rigid body.
///
/// The physics core only touches owners through this surface; it never
/// depends on whatever scene graph assembles them. Rotation is stored on the
/// attached body when one is present, so a body's angular integration is
/// immediately visible through [`GameObject::rotation`].
#[derive(Debug)]
pub struct GameObject {
    position: Vec2,
    rotation: f64,
    colliders: Vec<Collider>,
    body: Option<RigidBody>,
    destroyed: bool,
}

impl GameObject {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            colliders: Vec::new(),
            body: None,
            destroyed: false,
        }
    }

    /// Attaches a collider, builder style.
    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.colliders.push(collider);
        self
    }

    /// Attaches the rigid body, builder style. Replaces any previous body.
    pub fn with_body(mut self, body: RigidBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn add_collider(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Shifts the position by `delta`. Used by positional correction.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn rotation(&self) -> f64 {
        match &self.body {
            Some(body) => body.rotation,
            None => self.rotation,
        }
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        match &mut self.body {
            Some(body) => body.rotation = rotation,
            None => self.rotation = rotation,
        }
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn colliders_mut(&mut self) -> &mut [Collider] {
        &mut self.colliders
    }

    pub fn body(&self) -> Option<&RigidBody> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut RigidBody> {
        self.body.as_mut()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Runs the attached body's integration for one fixed step.
    pub(crate) fn fixed_update(&mut self, dt: f64) {
        if let Some(body) = self.body.as_mut() {
            body.integrate(&mut self.position, dt);
        }
    }
}
