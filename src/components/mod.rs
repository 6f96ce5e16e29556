//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – per-entity animation playback state
//! - [`boxcollider`] – axis-aligned collider, solid or trigger volume
//! - [`goal`] – goal-zone configuration with an injected banner entity
//! - [`group`] – name tag for grouping and sentinel matching
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that survive scene restarts
//! - [`playercontrolled`] – input-driven movement intent and speed
//! - [`rigidbody`] – velocity, angular velocity, and body mode
//! - [`rotation`] – rotation angle in degrees
//! - [`sprite`] – sprite-sheet cell selection (facing row, frame)
//! - [`triggerzone`] – occupancy tracking for trigger volumes
//! - [`visibility`] – boolean display state

pub mod animation;
pub mod boxcollider;
pub mod goal;
pub mod group;
pub mod mapposition;
pub mod persistent;
pub mod playercontrolled;
pub mod rigidbody;
pub mod rotation;
pub mod sprite;
pub mod triggerzone;
pub mod visibility;
