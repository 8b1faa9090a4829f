//! Movement domain: locomotion systems for velocity and facing.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{Animator, params};
use crate::audio::{PlaySound, SoundCue};
use crate::movement::{Facing, MovementInput, MovementState, MovementTuning, Player};

/// Input hook: launch upward if jump was pressed while grounded.
pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &MovementState, &mut LinearVelocity), With<Player>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (entity, state, mut velocity) in &mut query {
        if !state.grounded {
            continue;
        }

        // Horizontal velocity is kept
        velocity.y = tuning.jump_velocity;
        sounds.write(PlaySound::new(entity, SoundCue::Jump));
        debug!("Jump: vy={}", velocity.y);
    }
}

/// Fixed tick: horizontal velocity tracks the input axis directly.
pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut query {
        velocity.x = input.axis.x * tuning.max_speed;
    }
}

/// Fixed tick: derive the walking flag and publish locomotion parameters.
pub(crate) fn update_walking(
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &mut Animator), With<Player>>,
) {
    for (mut state, mut animator) in &mut query {
        state.walking = input.axis.x != 0.0;
        animator.set_bool(params::IS_WALKING, state.walking);
        animator.set_bool(params::IS_JUMPING, !state.grounded);
    }
}

/// Fixed tick: face the input direction by mirroring the sprite.
pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &mut Transform), With<Player>>,
) {
    for (mut state, mut transform) in &mut query {
        // Zero input keeps the last facing
        if input.axis.x > 0.0 {
            state.facing = Facing::Right;
        } else if input.axis.x < 0.0 {
            state.facing = Facing::Left;
        }

        transform.scale.x = transform.scale.x.abs() * state.facing.sign();
    }
}
