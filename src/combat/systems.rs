//! Combat domain: combat systems for input, strikes, and hit reactions.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{Animator, params};
use crate::audio::{PlaySound, SoundCue};
use crate::combat::components::{
    AttackCooldown, AttackPoint, Blocking, ComboCounter, DamageFlash, Dummy,
};
use crate::combat::events::{HitEvent, StrikeKind};
use crate::combat::resources::{AttackTuning, CombatInput};
use crate::content::AttackStyle;
use crate::movement::{GameLayer, MovementState, Player};

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack = keyboard.just_pressed(KeyCode::KeyJ) || keyboard.just_pressed(KeyCode::KeyZ);
    input.bash = keyboard.just_pressed(KeyCode::KeyK) || keyboard.just_pressed(KeyCode::KeyX);
    input.bash_held = keyboard.pressed(KeyCode::KeyK) || keyboard.pressed(KeyCode::KeyX);
}

/// Cooldown gate and combo bookkeeping for one attack press.
/// Returns the animator trigger to fire, or `None` while cooling down.
pub(crate) fn begin_attack(
    now: f32,
    tuning: &AttackTuning,
    cooldown: &mut AttackCooldown,
    combo: &mut ComboCounter,
) -> Option<&'static str> {
    if !cooldown.is_ready(now) {
        return None;
    }

    let trigger = combo.trigger(tuning.style);
    cooldown.arm(now, tuning.attack_rate);
    if tuning.style == AttackStyle::Combo {
        combo.advance();
    }
    Some(trigger)
}

/// Entities on the `Enemy` layer overlapping the strike circle.
fn strike_targets(spatial_query: &SpatialQuery, point: Vec2, range: f32) -> Vec<Entity> {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);
    spatial_query.shape_intersections(&Collider::circle(range), point, 0.0, &filter)
}

/// Input hook: swing if the cooldown allows it.
pub(crate) fn process_attack(
    time: Res<Time>,
    input: Res<CombatInput>,
    tuning: Res<AttackTuning>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &MovementState,
            &AttackPoint,
            &mut AttackCooldown,
            &mut ComboCounter,
            &mut Animator,
        ),
        With<Player>,
    >,
    mut hits: MessageWriter<HitEvent>,
    mut sounds: MessageWriter<PlaySound>,
) {
    if !input.attack {
        return;
    }

    let now = time.elapsed_secs();
    for (entity, transform, movement, attack_point, mut cooldown, mut combo, mut animator) in
        &mut query
    {
        let Some(trigger) = begin_attack(now, &tuning, &mut cooldown, &mut combo) else {
            debug!(
                "Attack ignored: {:.2}s of cooldown left",
                cooldown.next_attack_time - now
            );
            continue;
        };

        animator.set_trigger(trigger);
        sounds.write(PlaySound::new(entity, SoundCue::Attack));

        let point = attack_point.point(transform, movement.facing);
        let targets = strike_targets(&spatial_query, point, attack_point.range);
        debug!(
            "Attack '{}' at {:?}: {} target(s), next combo index {}",
            trigger,
            point,
            targets.len(),
            combo.index()
        );

        for target in targets {
            hits.write(HitEvent {
                attacker: entity,
                target,
                kind: StrikeKind::Attack,
            });
        }
    }
}

/// Input hook: shield bash. Not rate limited.
pub(crate) fn process_bash(
    input: Res<CombatInput>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &MovementState,
            &AttackPoint,
            &mut Animator,
        ),
        With<Player>,
    >,
    mut hits: MessageWriter<HitEvent>,
    mut sounds: MessageWriter<PlaySound>,
) {
    if !input.bash {
        return;
    }

    for (entity, transform, movement, attack_point, mut animator) in &mut query {
        animator.set_trigger(params::BASH);
        sounds.write(PlaySound::new(entity, SoundCue::Bash));

        let point = attack_point.point(transform, movement.facing);
        for target in strike_targets(&spatial_query, point, attack_point.range) {
            hits.write(HitEvent {
                attacker: entity,
                target,
                kind: StrikeKind::Bash,
            });
        }
    }
}

/// Blocking follows the held bash button.
pub(crate) fn update_blocking(
    input: Res<CombatInput>,
    mut query: Query<(&mut Blocking, &mut Animator), With<Player>>,
) {
    for (mut blocking, mut animator) in &mut query {
        if blocking.0 != input.bash_held {
            blocking.0 = input.bash_held;
            debug!("Blocking: {}", blocking.0);
        }
        animator.set_bool(params::IS_BLOCKING, blocking.0);
    }
}

/// Struck dummies play their hurt reaction, sound and flash.
pub(crate) fn handle_dummy_hits(
    mut commands: Commands,
    mut hits: MessageReader<HitEvent>,
    tuning: Res<AttackTuning>,
    mut dummies: Query<(&mut Animator, &Sprite, Option<&mut DamageFlash>), With<Dummy>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for hit in hits.read() {
        // Anything else on the enemy layer has no reaction
        let Ok((mut animator, sprite, flash)) = dummies.get_mut(hit.target) else {
            continue;
        };

        animator.set_trigger(params::HURT);
        sounds.write(PlaySound::new(hit.target, SoundCue::Hit));

        match flash {
            Some(mut flash) => flash.timer.reset(),
            None => {
                commands
                    .entity(hit.target)
                    .insert(DamageFlash::new(tuning.flash_duration, sprite.color));
            }
        }

        debug!(
            "{:?} hit {:?} with {:?}",
            hit.attacker, hit.target, hit.kind
        );
    }
}

pub(crate) fn update_damage_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DamageFlash, &mut Sprite)>,
) {
    for (entity, mut flash, mut sprite) in &mut query {
        flash.timer.tick(time.delta());

        if flash.timer.just_finished() {
            sprite.color = flash.base_color;
            commands.entity(entity).remove::<DamageFlash>();
        } else {
            sprite.color = DamageFlash::COLOR;
        }
    }
}
