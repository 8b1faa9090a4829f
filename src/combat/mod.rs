//! Combat domain: attack combos, bash and blocking, training dummies.

mod components;
mod events;
mod resources;
mod spawn;
mod systems;

pub use components::{AttackCooldown, AttackPoint, Blocking, ComboCounter, DamageFlash, Dummy};
pub use events::{HitEvent, StrikeKind};
pub use resources::{AttackTuning, CombatInput};
pub use spawn::spawn_training_dummy;

use bevy::prelude::*;

use crate::combat::systems::{
    handle_dummy_hits, process_attack, process_bash, read_combat_input, update_blocking,
    update_damage_flash,
};
use crate::core::GameState;

/// Input-hook combat systems: strikes, blocking and hit reactions.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombatSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .init_resource::<CombatInput>()
            .add_message::<HitEvent>()
            .add_systems(
                Update,
                (
                    read_combat_input,
                    process_attack,
                    process_bash,
                    update_blocking,
                    handle_dummy_hits,
                    update_damage_flash,
                )
                    .chain()
                    .in_set(CombatSet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
