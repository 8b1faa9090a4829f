//! Core domain: app states and world setup shared by every other domain.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{apply_world_gravity, setup_camera};

/// Fixed tick rate for the controller's physics-side systems.
pub const FIXED_TICK_HZ: f64 = 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), apply_world_gravity);
    }
}
