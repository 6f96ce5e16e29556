//! Event types and observers.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`collision`] – contact notifications from slide movement, and the
//!   push-back observer for dynamic bodies
//! - [`gamestate`] – state transition notifications for the high-level flow
//! - [`restart`] – full scene teardown and rebuild
//! - [`trigger`] – trigger-zone entries, and the goal observer
//!
//! See each submodule for concrete event data and semantics.

pub mod collision;
pub mod gamestate;
pub mod restart;
pub mod trigger;
