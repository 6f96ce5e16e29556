use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Per-entity animation playback state.
///
/// `animation_key` points into the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to the named animation, restarting playback. Re-issuing the
    /// currently playing key is a no-op, so callers may invoke this every
    /// step without resetting the frame counter.
    pub fn play(&mut self, key: &str) {
        if self.animation_key == key {
            return;
        }
        self.animation_key = key.to_string();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
    }
}
