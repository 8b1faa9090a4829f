//! Core domain: game state definitions for the boot flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Controller config is being read.
    #[default]
    Boot,
    Playing,
}
