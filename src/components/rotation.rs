use bevy_ecs::prelude::Component;

/// Rotation angle in degrees. Updated by the movement system from the
/// rigid body's angular velocity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub degrees: f32,
}
