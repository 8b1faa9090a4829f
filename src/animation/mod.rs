//! Animation module: animator parameters and playback.
//!
//! This module handles:
//! - Named boolean parameters and triggers set by gameplay
//! - Deriving a visual animation state from those parameters
//! - Frame progression and one-shot completion

pub mod animator;
pub mod playback;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::combat::CombatSet;
use crate::movement::MovementSet;

pub use animator::{Animator, params};
pub use playback::*;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>()
            .add_message::<AnimationFinished>()
            .add_systems(
                Update,
                (
                    animation_state_machine,
                    update_animation_frames,
                    log_animation_changes,
                )
                    .chain()
                    // Triggers fired this frame play this frame
                    .after(MovementSet::Input)
                    .after(CombatSet),
            );
    }
}
