//! Game configuration resource.
//!
//! Manages tunables loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! move_speed = 220.0
//!
//! [ball]
//! friction = 1.5
//!
//! [arena]
//! width = 800.0
//! height = 450.0
//!
//! [sim]
//! tick_rate = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_MOVE_SPEED: f32 = 220.0;
const DEFAULT_BALL_FRICTION: f32 = 1.5;
const DEFAULT_ARENA_WIDTH: f32 = 800.0;
const DEFAULT_ARENA_HEIGHT: f32 = 450.0;
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the player's move speed, ball damping, arena dimensions, and the
/// simulation tick rate for the demo runner.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Player move speed in world units per second.
    pub move_speed: f32,
    /// Ball velocity damping factor.
    pub ball_friction: f32,
    /// Arena width in world units.
    pub arena_width: f32,
    /// Arena height in world units.
    pub arena_height: f32,
    /// Simulation ticks per second for the demo runner.
    pub tick_rate: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            ball_friction: DEFAULT_BALL_FRICTION,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            tick_rate: DEFAULT_TICK_RATE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [player] section
        if let Some(speed) = config.getfloat("player", "move_speed").ok().flatten() {
            self.move_speed = speed as f32;
        }

        // [ball] section
        if let Some(friction) = config.getfloat("ball", "friction").ok().flatten() {
            self.ball_friction = friction as f32;
        }

        // [arena] section
        if let Some(width) = config.getfloat("arena", "width").ok().flatten() {
            self.arena_width = width as f32;
        }
        if let Some(height) = config.getfloat("arena", "height").ok().flatten() {
            self.arena_height = height as f32;
        }

        // [sim] section
        if let Some(rate) = config.getuint("sim", "tick_rate").ok().flatten() {
            self.tick_rate = rate as u32;
        }

        info!(
            "Loaded config: move_speed={}, ball_friction={}, arena={}x{}, tick_rate={}",
            self.move_speed, self.ball_friction, self.arena_width, self.arena_height, self.tick_rate
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("player", "move_speed", Some(self.move_speed.to_string()));
        config.set("ball", "friction", Some(self.ball_friction.to_string()));
        config.set("arena", "width", Some(self.arena_width.to_string()));
        config.set("arena", "height", Some(self.arena_height.to_string()));
        config.set("sim", "tick_rate", Some(self.tick_rate.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
