//! Global state machine.
//!
//! One stay in `InGame` is a session. Everything spawned for a session is tagged
//! with `DespawnOnExit(GameState::InGame)` so a restart starts from a clean world.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    GameOver,
}
