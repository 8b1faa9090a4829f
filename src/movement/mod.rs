//! Movement domain: input, ground detection, walking and jumping.

mod bootstrap;
mod components;
mod dev;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, Ground, GroundCheck, MovementState, Player, Wall};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump, detect_ground, read_input, update_facing,
    update_walking,
};

/// Ordering handles for systems in other domains that read locomotion state.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Update: input sampling and the jump hook.
    Input,
    /// FixedUpdate: ground check, velocity, walking flag and facing.
    Locomotion,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                OnEnter(GameState::Playing),
                (spawn_test_room, spawn_player).chain(),
            )
            .add_systems(
                Update,
                (read_input, apply_jump)
                    .chain()
                    .in_set(MovementSet::Input)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                (
                    detect_ground,
                    apply_horizontal_movement,
                    update_walking,
                    update_facing,
                )
                    .chain()
                    .in_set(MovementSet::Locomotion)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
