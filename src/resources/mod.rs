//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`animationstore`] – named animation clip definitions
//! - [`gameconfig`] – INI-backed tunables with safe defaults
//! - [`gamestate`] – authoritative game state and pending transitions
//! - [`input`] – injected action states with one-frame edges
//! - [`scenelayout`] – JSON-backed spawn layout for the scene
//! - [`systemsstore`] – named registry of registered system IDs
//! - [`worldtime`] – per-tick elapsed/delta time

pub mod animationstore;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod scenelayout;
pub mod systemsstore;
pub mod worldtime;
