//! Animation domain: tests for parameters, playback and the state machine.

use bevy::prelude::*;

use super::{
    AnimationController, AnimationPlugin, AnimationState, AnimationStateChanged, Animator,
    AttackAnimationType, animation_state_machine, locomotion_state, params,
};
use crate::combat::CombatSet;

// -----------------------------------------------------------------------------
// Animator parameter tests
// -----------------------------------------------------------------------------

#[test]
fn test_unset_bool_reads_false() {
    let animator = Animator::default();
    assert!(!animator.get_bool(params::IS_WALKING));
}

#[test]
fn test_set_bool_reports_changes() {
    let mut animator = Animator::default();

    assert!(animator.set_bool(params::IS_WALKING, true));
    assert!(!animator.set_bool(params::IS_WALKING, true));
    assert!(animator.get_bool(params::IS_WALKING));
    assert!(animator.set_bool(params::IS_WALKING, false));
}

#[test]
fn test_first_false_write_counts_as_change() {
    let mut animator = Animator::default();
    assert!(animator.set_bool(params::IS_JUMPING, false));
}

#[test]
fn test_triggers_queue_once_and_drain_in_order() {
    let mut animator = Animator::default();
    animator.set_trigger(params::ATTACK_1);
    animator.set_trigger(params::BASH);
    animator.set_trigger(params::ATTACK_1);

    assert!(animator.is_triggered("Attack1"));
    assert_eq!(animator.drain_triggers(), vec![params::ATTACK_1, params::BASH]);
    assert!(!animator.is_triggered(params::ATTACK_1));
    assert!(animator.drain_triggers().is_empty());
}

// -----------------------------------------------------------------------------
// State mapping tests
// -----------------------------------------------------------------------------

#[test]
fn test_trigger_names_map_to_states() {
    assert_eq!(
        AnimationState::from_trigger("Attack"),
        Some(AnimationState::Attack(AttackAnimationType::Basic))
    );
    assert_eq!(
        AnimationState::from_trigger("Attack3"),
        Some(AnimationState::Attack(AttackAnimationType::Third))
    );
    assert_eq!(AnimationState::from_trigger("Hurt"), Some(AnimationState::Hurt));
    assert_eq!(AnimationState::from_trigger("Dance"), None);
}

#[test]
fn test_locomotion_priority() {
    let mut animator = Animator::default();
    assert_eq!(locomotion_state(&animator), AnimationState::Idle);

    animator.set_bool(params::IS_WALKING, true);
    assert_eq!(locomotion_state(&animator), AnimationState::Walk);

    animator.set_bool(params::IS_JUMPING, true);
    assert_eq!(locomotion_state(&animator), AnimationState::Jump);

    animator.set_bool(params::IS_BLOCKING, true);
    assert_eq!(locomotion_state(&animator), AnimationState::Block);
}

// -----------------------------------------------------------------------------
// Playback tests
// -----------------------------------------------------------------------------

#[test]
fn test_looping_state_wraps() {
    let mut controller = AnimationController::default();
    let frames = controller.total_frames;

    for _ in 0..frames {
        assert!(!controller.advance(controller.frame_duration));
    }
    assert_eq!(controller.current_frame, 0);
    assert!(!controller.finished);
}

#[test]
fn test_one_shot_finishes_once() {
    let mut controller = AnimationController::default();
    controller.restart(AnimationState::Hurt);
    assert!(controller.is_busy());

    assert!(controller.advance(10.0));
    assert!(controller.finished);
    assert_eq!(controller.current_frame, controller.total_frames - 1);
    assert!(!controller.is_busy());
    assert!(!controller.advance(10.0));
}

#[test]
fn test_set_state_ignores_same_state() {
    let mut controller = AnimationController::default();
    controller.advance(controller.frame_duration);
    let frame = controller.current_frame;

    assert_eq!(controller.set_state(AnimationState::Idle), None);
    assert_eq!(controller.current_frame, frame);
    assert_eq!(
        controller.set_state(AnimationState::Walk),
        Some(AnimationState::Idle)
    );
    assert_eq!(controller.current_frame, 0);
}

// -----------------------------------------------------------------------------
// State machine system tests
// -----------------------------------------------------------------------------

fn state_machine_app() -> App {
    let mut app = App::new();
    app.add_message::<AnimationStateChanged>()
        .add_systems(Update, animation_state_machine);
    app
}

fn state_of(app: &App, entity: Entity) -> AnimationState {
    app.world()
        .get::<AnimationController>(entity)
        .unwrap()
        .state
}

#[test]
fn test_trigger_starts_one_shot_and_is_consumed() {
    let mut app = state_machine_app();
    let entity = app
        .world_mut()
        .spawn((Animator::default(), AnimationController::default()))
        .id();

    app.world_mut()
        .get_mut::<Animator>(entity)
        .unwrap()
        .set_trigger(params::ATTACK_2);
    app.update();

    assert_eq!(
        state_of(&app, entity),
        AnimationState::Attack(AttackAnimationType::Second)
    );
    assert!(
        !app.world()
            .get::<Animator>(entity)
            .unwrap()
            .is_triggered(params::ATTACK_2)
    );
}

#[test]
fn test_one_shot_holds_until_finished() {
    let mut app = state_machine_app();
    let mut animator = Animator::default();
    animator.set_bool(params::IS_WALKING, true);
    animator.set_trigger(params::BASH);
    let entity = app
        .world_mut()
        .spawn((animator, AnimationController::default()))
        .id();

    app.update();
    app.update();
    assert_eq!(state_of(&app, entity), AnimationState::Bash);

    app.world_mut()
        .get_mut::<AnimationController>(entity)
        .unwrap()
        .advance(10.0);
    app.update();
    assert_eq!(state_of(&app, entity), AnimationState::Walk);
}

#[test]
fn test_locomotion_follows_parameters() {
    let mut app = state_machine_app();
    let entity = app
        .world_mut()
        .spawn((Animator::default(), AnimationController::default()))
        .id();

    app.world_mut()
        .get_mut::<Animator>(entity)
        .unwrap()
        .set_bool(params::IS_JUMPING, true);
    app.update();
    assert_eq!(state_of(&app, entity), AnimationState::Jump);

    app.world_mut()
        .get_mut::<Animator>(entity)
        .unwrap()
        .set_bool(params::IS_JUMPING, false);
    app.update();
    assert_eq!(state_of(&app, entity), AnimationState::Idle);
}

fn fire_hurt(mut query: Query<&mut Animator>) {
    for mut animator in &mut query {
        animator.set_trigger(params::HURT);
    }
}

#[test]
fn test_combat_trigger_plays_in_the_same_frame() {
    let mut app = App::new();
    app.init_resource::<Time>()
        .add_plugins(AnimationPlugin)
        .add_systems(Update, fire_hurt.in_set(CombatSet));
    let entity = app
        .world_mut()
        .spawn((Animator::default(), AnimationController::default()))
        .id();

    app.update();

    assert_eq!(state_of(&app, entity), AnimationState::Hurt);
    assert!(
        !app.world()
            .get::<Animator>(entity)
            .unwrap()
            .is_triggered(params::HURT)
    );
}
