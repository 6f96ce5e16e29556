//! Sprite facing selection.
//!
//! A 4-direction sprite sheet has one row per facing. The bucket for a
//! movement direction is computed from the angle between the downward
//! reference direction and the movement vector:
//! `bucket = round(4 * angle / τ) mod 4`, rounding half away from zero,
//! with a positive modulo. Row order on the sheet: down, left, up, right.

use bevy_ecs::prelude::*;
use glam::Vec2;
use std::f32::consts::TAU;

use crate::components::playercontrolled::PlayerControlled;
use crate::components::sprite::Sprite;

pub const ROW_DOWN: usize = 0;
pub const ROW_LEFT: usize = 1;
pub const ROW_UP: usize = 2;
pub const ROW_RIGHT: usize = 3;

/// Map a movement direction to a sprite-sheet row.
///
/// The magnitude of `dir` is irrelevant; only its direction matters.
/// `dir` must be non-zero — the zero vector has no direction and callers
/// keep the previous facing in that case.
pub fn direction_bucket(dir: Vec2) -> usize {
    // Signed angle from the downward reference direction (0, 1) to `dir`.
    let angle = (-dir.x).atan2(dir.y);
    let bucket = (4.0 * angle / TAU).round() as i32;
    bucket.rem_euclid(4) as usize
}

/// Update the sprite row from the sampled movement intent.
///
/// Only runs for a non-zero intent; an idle player keeps facing the way it
/// last moved.
pub fn sprite_facing_system(mut query: Query<(&PlayerControlled, &mut Sprite)>) {
    for (controlled, mut sprite) in query.iter_mut() {
        if controlled.intent != Vec2::ZERO {
            sprite.row = direction_bucket(controlled.intent);
        }
    }
}
