//! Fixed-timestep simulation driver.
//!
//! A [`World`] owns every [`GameObject`] and advances the simulation one
//! fixed tick at a time: integrate all rigid bodies, detect collisions
//! between every pair of colliders with different owners, fire collision
//! callbacks, and resolve the non-trigger contacts.

use log::debug;

use crate::collision::detection::{test_shapes, WorldShape};
use crate::collision::manifold::{ColliderId, Manifold};
use crate::collision::resolution;
use crate::error::ConfigError;
use crate::objects::game_object::GameObject;

pub struct World {
    objects: Vec<GameObject>,
    fixed_dt: f64,
}

impl World {
    /// Creates a world advancing `fixed_timestep` seconds per [`step`].
    ///
    /// [`step`]: World::step
    pub fn new(fixed_timestep: f64) -> Result<Self, ConfigError> {
        if !fixed_timestep.is_finite() || fixed_timestep <= 0.0 {
            return Err(ConfigError::InvalidTimestep(fixed_timestep));
        }
        Ok(World {
            objects: Vec::new(),
            fixed_dt: fixed_timestep,
        })
    }

    pub fn fixed_timestep(&self) -> f64 {
        self.fixed_dt
    }

    pub fn set_fixed_timestep(&mut self, fixed_timestep: f64) -> Result<(), ConfigError> {
        if !fixed_timestep.is_finite() || fixed_timestep <= 0.0 {
            return Err(ConfigError::InvalidTimestep(fixed_timestep));
        }
        self.fixed_dt = fixed_timestep;
        Ok(())
    }

    /// Adds an object and returns its index. Indices are stable: removal
    /// marks an object destroyed without shifting the others.
    pub fn add_object(&mut self, object: GameObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&GameObject> {
        self.objects.get(index)
    }

    pub fn object_mut(&mut self, index: usize) -> Option<&mut GameObject> {
        self.objects.get_mut(index)
    }

    /// Marks the object destroyed. It takes no further part in integration
    /// or collision from the next [`step`] on.
    ///
    /// [`step`]: World::step
    pub fn remove_object(&mut self, index: usize) {
        if let Some(object) = self.objects.get_mut(index) {
            object.destroy();
        }
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// Integration runs first for every live object, then collisions are
    /// detected against the integrated positions. Every collider pair with
    /// distinct owners is tested; each colliding pair fires both colliders'
    /// callbacks once, and is resolved unless either collider is a trigger.
    pub fn step(&mut self) {
        let dt = self.fixed_dt;
        for object in &mut self.objects {
            if !object.is_destroyed() {
                object.fixed_update(dt);
            }
        }

        // Snapshot world-space shapes so detection sees one consistent state
        let mut ids: Vec<ColliderId> = Vec::new();
        let mut shapes: Vec<WorldShape> = Vec::new();
        for (object_index, object) in self.objects.iter().enumerate() {
            if object.is_destroyed() {
                continue;
            }
            for (collider_index, collider) in object.colliders().iter().enumerate() {
                ids.push(ColliderId {
                    object: object_index,
                    collider: collider_index,
                });
                shapes.push(collider.to_world(object.position(), object.rotation()));
            }
        }

        let mut manifolds: Vec<Manifold> = Vec::new();
        for i in 0..shapes.len() {
            for j in (i + 1)..shapes.len() {
                if ids[i].object == ids[j].object {
                    continue;
                }
                if let Some(separation) = test_shapes(&shapes[i], &shapes[j]) {
                    manifolds.push(Manifold {
                        a: ids[i],
                        b: ids[j],
                        separation,
                    });
                }
            }
        }
        debug!("step: {} objects, {} contacts", self.objects.len(), manifolds.len());

        for manifold in &manifolds {
            self.objects[manifold.a.object].colliders_mut()[manifold.a.collider]
                .invoke_callback(manifold);
            self.objects[manifold.b.object].colliders_mut()[manifold.b.collider]
                .invoke_callback(manifold);

            let trigger = self.objects[manifold.a.object].colliders()[manifold.a.collider]
                .is_trigger()
                || self.objects[manifold.b.object].colliders()[manifold.b.collider].is_trigger();
            if trigger {
                continue;
            }

            // Collection order guarantees a.object < b.object
            debug_assert!(manifold.a.object < manifold.b.object);
            let (head, tail) = self.objects.split_at_mut(manifold.b.object);
            resolution::resolve(manifold, &mut head[manifold.a.object], &mut tail[0]);
        }
    }
}
