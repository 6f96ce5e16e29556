use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite-sheet cell selection for a renderer.
///
/// The sheet is addressed by `row` (facing direction bucket, one row per
/// direction) and `frame` (animation frame within the row). [`Sprite::offset`]
/// yields the pixel offset of the current cell inside the texture.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub frame_width: f32,
    pub frame_height: f32,
    pub row: usize,
    pub frame: usize,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, frame_width: f32, frame_height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            frame_width,
            frame_height,
            row: 0,
            frame: 0,
            flip_h: false,
            flip_v: false,
        }
    }

    /// Pixel offset of the current cell inside the sprite sheet.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(
            self.frame as f32 * self.frame_width,
            self.row as f32 * self.frame_height,
        )
    }
}
