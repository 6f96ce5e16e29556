//! Per-pass input resource.
//!
//! The scene is headless: there is no device polling here. The demo runner
//! and the tests inject action states through [`BoolState::press`] /
//! [`BoolState::release`], and [`InputState::settle`] retires the one-frame
//! `just_pressed` / `just_released` edges at the start of each pass.

use bevy_ecs::prelude::*;

/// Boolean action state with one-frame press/release edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action was pressed this frame.
    pub just_pressed: bool,
    /// Whether the action was released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Mark the action as held; sets `just_pressed` on the rising edge.
    pub fn press(&mut self) {
        if !self.active {
            self.just_pressed = true;
        }
        self.active = true;
    }

    /// Mark the action as released; sets `just_released` on the falling edge.
    pub fn release(&mut self) {
        if self.active {
            self.just_released = true;
        }
        self.active = false;
    }

    /// Retire the one-frame edges.
    fn settle(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the action states the scene cares about: four
/// movement directions and the restart command.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub restart: BoolState,
}

impl InputState {
    /// Retire all one-frame edges. Call once per pass before injecting the
    /// next press/release batch.
    pub fn settle(&mut self) {
        self.up.settle();
        self.down.settle();
        self.left.settle();
        self.right.settle();
        self.restart.settle();
    }

    /// Release every action.
    pub fn release_all(&mut self) {
        self.up.release();
        self.down.release();
        self.left.release();
        self.right.release();
        self.restart.release();
    }
}
