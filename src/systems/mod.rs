//! ECS systems run by the per-tick schedule.
//!
//! Submodules overview:
//! - [`animation`] – idle/move clip selection and frame advance
//! - [`collision`] – trigger-zone occupancy detection
//! - [`facing`] – 4-direction sprite row selection from movement intent
//! - [`gamestate`] – pending state transitions and run conditions
//! - [`input`] – intent sampling and restart press handling
//! - [`movement`] – kinematic slide movement and dynamic body integration
//! - [`time`] – per-tick world time update

pub mod animation;
pub mod collision;
pub mod facing;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod time;
