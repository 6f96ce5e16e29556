//! Scene layout resource.
//!
//! Describes where the scene's entities spawn. A layout can be loaded from a
//! JSON asset file; missing files fall back to the built-in default so the
//! demo runs without assets on disk.
//!
//! ```json
//! {
//!   "player": { "x": 200.0, "y": 225.0 },
//!   "ball": { "x": 400.0, "y": 225.0, "radius": 12.0 },
//!   "goal": { "x": 760.0, "y": 225.0, "width": 60.0, "height": 120.0 },
//!   "banner": { "x": 400.0, "y": 80.0 }
//! }
//! ```

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A 2D spawn point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

/// Ball spawn description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallSpawn {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Goal trigger region description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Spawn positions for everything in the scene. The arena walls are derived
/// from [`GameConfig`](crate::resources::gameconfig::GameConfig) dimensions,
/// not stored here.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SceneLayout {
    pub player: SpawnPoint,
    pub ball: BallSpawn,
    pub goal: GoalRegion,
    pub banner: SpawnPoint,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            player: SpawnPoint { x: 200.0, y: 225.0 },
            ball: BallSpawn {
                x: 400.0,
                y: 225.0,
                radius: 12.0,
            },
            goal: GoalRegion {
                x: 760.0,
                y: 225.0,
                width: 60.0,
                height: 120.0,
            },
            banner: SpawnPoint { x: 400.0, y: 80.0 },
        }
    }
}

impl SceneLayout {
    /// Load a layout from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read scene layout: {}", e))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse scene layout: {}", e))
    }
}
