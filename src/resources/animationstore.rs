use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Definition of a single animation clip on a sprite sheet row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationResource {
    /// Texture key of the sprite sheet the clip lives on.
    pub tex_key: String,
    /// Number of frames in the clip.
    pub frame_count: usize,
    /// Playback speed in frames per second.
    pub fps: f32,
    /// Whether playback wraps around or holds the last frame.
    pub looped: bool,
}

/// Named animation definitions shared by all entities.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}
