//! Pushball library.
//!
//! This module exposes the scene's ECS components, resources, systems, and
//! events for use by the demo binary and the integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
