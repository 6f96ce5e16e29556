use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Input-driven movement configuration and the latest sampled intent.
///
/// `intent` holds the raw per-axis direction in {-1, 0, +1} before
/// normalization; the input system rewrites it every pass. The facing
/// system reads it to pick a sprite row, so it reflects what the player
/// asked for even when sliding cancels the resulting velocity.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerControlled {
    /// Desired speed in world units per second while moving.
    pub move_speed: f32,
    /// Raw directional intent sampled from input this pass.
    pub intent: Vec2,
}

impl PlayerControlled {
    pub fn new(move_speed: f32) -> Self {
        Self {
            move_speed,
            intent: Vec2::ZERO,
        }
    }
}
