//! Audio domain: one-shot sound requests and footstep cadence.

mod cues;
mod footsteps;

pub use cues::{AudioTuning, OneShotSound, PlaySound, SoundCue, SoundLibrary};
pub use footsteps::FootstepEmitter;

use bevy::prelude::*;

use crate::audio::cues::{load_sound_library, play_sound_cues};
use crate::audio::footsteps::handle_footsteps;
use crate::core::GameState;
use crate::movement::MovementSet;

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioTuning>()
            .add_message::<PlaySound>()
            .add_systems(OnEnter(GameState::Playing), load_sound_library)
            .add_systems(
                FixedUpdate,
                handle_footsteps
                    .after(MovementSet::Locomotion)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, play_sound_cues);
    }
}
