//! Global state machine.
//!
//! `Won` is terminal: nothing transitions out of it.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Fishing,
    Won,
}
