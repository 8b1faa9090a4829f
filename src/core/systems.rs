//! Core domain: camera and world setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Host physics gravity, taken from the loaded movement tuning.
pub(crate) fn apply_world_gravity(mut commands: Commands, tuning: Res<MovementTuning>) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
    debug!("World gravity set to {}", tuning.gravity);
}
