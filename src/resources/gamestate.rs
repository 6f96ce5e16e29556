//! High-level game state resources.
//!
//! These resources track the authoritative current state of the scene and
//! any pending transition requested by systems. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied and enter hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the scene can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    Playing,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }

    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] so enter hooks
    /// run through the observer.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Intent to change to a new game state.
///
/// Use [`NextGameState::set`] to mark a transition as pending; the observer
/// applies it and resets the value to [`NextGameStates::Unchanged`].
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

impl Default for NextGameState {
    fn default() -> Self {
        Self::new()
    }
}
