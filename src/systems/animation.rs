//! Animation systems.
//!
//! - [`select_player_animation`] picks "idle" or "move" from the resulting
//!   velocity after slide movement. It runs every step; switching to the
//!   already playing clip is a no-op, so no transition tracking is needed.
//! - [`animation`] advances playback based on elapsed time and writes the
//!   current frame into the [`Sprite`](crate::components::sprite::Sprite).

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::game::{ANIM_IDLE, ANIM_MOVE};
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Speeds below this count as standing still.
const IDLE_SPEED_EPSILON: f32 = 1e-3;

/// Choose the idle or move clip from the resulting velocity.
pub fn select_player_animation(
    mut query: Query<(&RigidBody, &mut Animation), With<PlayerControlled>>,
) {
    for (rigidbody, mut animation) in query.iter_mut() {
        if rigidbody.velocity.length_squared() <= IDLE_SPEED_EPSILON * IDLE_SPEED_EPSILON {
            animation.play(ANIM_IDLE);
        } else {
            animation.play(ANIM_MOVE);
        }
    }
}

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Looks up clip data from [`AnimationStore`]; unknown keys and clips
///   with a non-positive fps are skipped.
/// - Looped clips wrap around; one-shot clips hold their last frame.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(clip) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        // A non-positive fps would stall the advance loop below.
        if clip.fps <= 0.0 {
            continue;
        }

        anim_comp.elapsed_time += time.delta;

        let frame_duration = 1.0 / clip.fps;
        while anim_comp.elapsed_time >= frame_duration {
            anim_comp.frame_index += 1;
            anim_comp.elapsed_time -= frame_duration;

            if anim_comp.frame_index >= clip.frame_count {
                if clip.looped {
                    anim_comp.frame_index = 0;
                } else {
                    anim_comp.frame_index = clip.frame_count - 1;
                    anim_comp.elapsed_time = 0.0;
                    break;
                }
            }
        }

        sprite.frame = anim_comp.frame_index;
    }
}
