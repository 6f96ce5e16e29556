//! Physics body component.
//!
//! The [`RigidBody`] component stores velocity, angular velocity, and the
//! body mode that decides how the movement systems treat the entity:
//!
//! - [`BodyMode::Kinematic`] — moved by the slide-movement system; desired
//!   velocity is set by a controller and the system resolves collisions by
//!   sliding along obstacle surfaces.
//! - [`BodyMode::Dynamic`] — moved by the plain movement system; reacts to
//!   impulses and torque impulses, damped by `friction`.
//! - [`BodyMode::Static`] — never moves; acts as an obstacle only.
//!
//! Impulse application is validity-checked: calling [`RigidBody::apply_impulse`]
//! or [`RigidBody::apply_torque_impulse`] on a non-dynamic body is a no-op.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// How the movement systems treat a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Controller-driven body resolved by slide movement.
    Kinematic,
    /// Force-driven body that accepts impulses.
    Dynamic,
    /// Immovable obstacle.
    #[default]
    Static,
}

/// Velocity state and body mode for a physics entity.
///
/// Impulses use unit mass: an impulse adds directly to velocity, a torque
/// impulse adds directly to angular velocity (degrees per second).
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Current angular velocity in degrees per second.
    pub angular_velocity: f32,
    /// How the movement systems treat this body.
    pub mode: BodyMode,
    /// Velocity damping factor, applied as `velocity *= 1 - friction * delta`.
    /// Only meaningful for dynamic bodies.
    pub friction: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::fixed()
    }
}

impl RigidBody {
    /// Create a kinematic body with zero velocity.
    pub fn kinematic() -> Self {
        Self {
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mode: BodyMode::Kinematic,
            friction: 0.0,
        }
    }

    /// Create a dynamic body with the given friction.
    pub fn dynamic(friction: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mode: BodyMode::Dynamic,
            friction,
        }
    }

    /// Create a static body. It never moves and ignores impulses.
    pub fn fixed() -> Self {
        Self {
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mode: BodyMode::Static,
            friction: 0.0,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.mode == BodyMode::Dynamic
    }

    pub fn is_kinematic(&self) -> bool {
        self.mode == BodyMode::Kinematic
    }

    /// Set the velocity of the body.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Add `impulse` to the velocity. No-op unless the body is dynamic.
    ///
    /// Returns true if the impulse was applied.
    pub fn apply_impulse(&mut self, impulse: Vec2) -> bool {
        if self.is_dynamic() {
            self.velocity += impulse;
            true
        } else {
            false
        }
    }

    /// Add `torque` to the angular velocity. No-op unless the body is dynamic.
    ///
    /// Returns true if the torque was applied.
    pub fn apply_torque_impulse(&mut self, torque: f32) -> bool {
        if self.is_dynamic() {
            self.angular_velocity += torque;
            true
        } else {
            false
        }
    }
}
