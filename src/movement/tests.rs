//! Movement domain: tests for jumping, walking, facing and tuning helpers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::mesh::MeshPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use super::systems::{
    apply_horizontal_movement, apply_jump, detect_ground, update_facing, update_walking,
};
use super::{
    Facing, GameLayer, GroundCheck, MovementInput, MovementState, MovementTuning, Player,
};
use crate::animation::{Animator, params};
use crate::audio::{PlaySound, SoundCue};

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct HeardCues(Vec<SoundCue>);

fn record_cues(mut reader: MessageReader<PlaySound>, mut heard: ResMut<HeardCues>) {
    heard.0.extend(reader.read().map(|request| request.cue));
}

fn movement_app() -> App {
    let mut app = App::new();
    app.init_resource::<MovementInput>()
        .init_resource::<MovementTuning>()
        .init_resource::<HeardCues>()
        .add_message::<PlaySound>();
    app
}

fn spawn_mover(app: &mut App, grounded: bool, velocity: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            MovementState {
                grounded,
                ..default()
            },
            Animator::default(),
            Transform::default(),
            LinearVelocity(velocity),
        ))
        .id()
}

fn velocity_of(app: &App, entity: Entity) -> Vec2 {
    app.world().get::<LinearVelocity>(entity).unwrap().0
}

// -----------------------------------------------------------------------------
// Tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_single_jump_height() {
    let tuning = MovementTuning {
        jump_velocity: 600.0,
        gravity: 1800.0,
        ..default()
    };
    assert_eq!(tuning.single_jump_height(), 100.0);
    assert_eq!(tuning.safe_reachable_height(), 80.0);
}

#[test]
fn test_zero_gravity_jump_height_is_unbounded() {
    let tuning = MovementTuning {
        gravity: 0.0,
        ..default()
    };
    assert!(tuning.single_jump_height().is_infinite());
}

#[test]
fn test_ground_check_point_offsets_from_body() {
    let check = GroundCheck {
        offset: Vec2::new(0.0, -24.0),
        radius: 6.4,
    };
    let transform = Transform::from_xyz(10.0, 100.0, 3.0);
    assert_eq!(check.point(&transform), Vec2::new(10.0, 76.0));
}

#[test]
fn test_facing_sign() {
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
    assert_eq!(Facing::default(), Facing::Right);
}

// -----------------------------------------------------------------------------
// Jump tests
// -----------------------------------------------------------------------------

fn jump_app() -> App {
    let mut app = movement_app();
    app.add_systems(Update, (apply_jump, record_cues).chain());
    app
}

#[test]
fn test_jump_when_grounded_keeps_horizontal_velocity() {
    let mut app = jump_app();
    let player = spawn_mover(&mut app, true, Vec2::new(120.0, 0.0));

    app.world_mut()
        .resource_mut::<MovementInput>()
        .jump_just_pressed = true;
    app.update();

    let jump = app.world().resource::<MovementTuning>().jump_velocity;
    assert_eq!(velocity_of(&app, player), Vec2::new(120.0, jump));
    assert_eq!(app.world().resource::<HeardCues>().0, vec![SoundCue::Jump]);
}

#[test]
fn test_jump_ignored_in_air() {
    let mut app = jump_app();
    let player = spawn_mover(&mut app, false, Vec2::new(0.0, -50.0));

    app.world_mut()
        .resource_mut::<MovementInput>()
        .jump_just_pressed = true;
    app.update();

    assert_eq!(velocity_of(&app, player), Vec2::new(0.0, -50.0));
    assert!(app.world().resource::<HeardCues>().0.is_empty());
}

#[test]
fn test_no_jump_without_press() {
    let mut app = jump_app();
    let player = spawn_mover(&mut app, true, Vec2::ZERO);

    app.update();

    assert_eq!(velocity_of(&app, player), Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Horizontal movement tests
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_velocity_tracks_axis() {
    let mut app = movement_app();
    app.add_systems(Update, apply_horizontal_movement);
    let player = spawn_mover(&mut app, true, Vec2::new(0.0, 75.0));
    let speed = app.world().resource::<MovementTuning>().max_speed;

    app.world_mut().resource_mut::<MovementInput>().axis = Vec2::new(-1.0, 0.0);
    app.update();
    assert_eq!(velocity_of(&app, player), Vec2::new(-speed, 75.0));

    app.world_mut().resource_mut::<MovementInput>().axis = Vec2::ZERO;
    app.update();
    assert_eq!(velocity_of(&app, player), Vec2::new(0.0, 75.0));
}

// -----------------------------------------------------------------------------
// Walking / animator tests
// -----------------------------------------------------------------------------

#[test]
fn test_walking_flag_and_animator_params() {
    let mut app = movement_app();
    app.add_systems(Update, update_walking);
    let player = spawn_mover(&mut app, false, Vec2::ZERO);

    app.world_mut().resource_mut::<MovementInput>().axis = Vec2::new(0.5, 0.0);
    app.update();

    let world = app.world();
    assert!(world.get::<MovementState>(player).unwrap().walking);
    let animator = world.get::<Animator>(player).unwrap();
    assert!(animator.get_bool(params::IS_WALKING));
    assert!(animator.get_bool(params::IS_JUMPING));
}

#[test]
fn test_vertical_only_input_is_not_walking() {
    let mut app = movement_app();
    app.add_systems(Update, update_walking);
    let player = spawn_mover(&mut app, true, Vec2::ZERO);

    app.world_mut().resource_mut::<MovementInput>().axis = Vec2::new(0.0, 1.0);
    app.update();

    assert!(!app.world().get::<MovementState>(player).unwrap().walking);
    assert!(
        !app.world()
            .get::<Animator>(player)
            .unwrap()
            .get_bool(params::IS_JUMPING)
    );
}

// -----------------------------------------------------------------------------
// Facing tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_flips_scale_and_holds_on_release() {
    let mut app = movement_app();
    app.add_systems(Update, update_facing);
    let player = spawn_mover(&mut app, true, Vec2::ZERO);

    app.world_mut().resource_mut::<MovementInput>().axis = Vec2::new(-1.0, 0.0);
    app.update();
    assert_eq!(
        app.world().get::<MovementState>(player).unwrap().facing,
        Facing::Left
    );
    assert_eq!(app.world().get::<Transform>(player).unwrap().scale.x, -1.0);

    app.world_mut().resource_mut::<MovementInput>().axis = Vec2::ZERO;
    app.update();
    assert_eq!(app.world().get::<Transform>(player).unwrap().scale.x, -1.0);

    app.world_mut().resource_mut::<MovementInput>().axis = Vec2::new(1.0, 0.0);
    app.update();
    assert_eq!(
        app.world().get::<MovementState>(player).unwrap().facing,
        Facing::Right
    );
    assert_eq!(app.world().get::<Transform>(player).unwrap().scale.x, 1.0);
}

// -----------------------------------------------------------------------------
// Ground check tests (physics world)
// -----------------------------------------------------------------------------

const STEP: f32 = 1.0 / 64.0;

fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        PhysicsPlugins::default(),
        AssetPlugin::default(),
        bevy::scene::ScenePlugin,
        MeshPlugin,
    ))
    .insert_resource(Time::<Fixed>::from_duration(Duration::from_secs_f32(STEP)))
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        STEP,
    )))
    .add_systems(FixedUpdate, detect_ground);
    app.finish();
    app
}

/// A 400x20 slab whose top face sits at y = 0.
fn spawn_slab(app: &mut App, layer: GameLayer) -> Entity {
    app.world_mut()
        .spawn((
            RigidBody::Static,
            Collider::rectangle(400.0, 20.0),
            CollisionLayers::new(layer, [GameLayer::Player]),
            Transform::from_xyz(0.0, -10.0, 0.0),
        ))
        .id()
}

/// A player whose ground-check point sits at `feet_y`.
fn spawn_feet(app: &mut App, feet_y: f32) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            MovementState::default(),
            GroundCheck {
                offset: Vec2::new(0.0, -24.0),
                radius: 6.4,
            },
            Transform::from_xyz(0.0, feet_y + 24.0, 0.0),
        ))
        .id()
}

fn run_steps(app: &mut App, steps: usize) {
    for _ in 0..steps {
        app.update();
    }
}

fn grounded(app: &App, entity: Entity) -> bool {
    app.world().get::<MovementState>(entity).unwrap().grounded
}

#[test]
fn test_player_resting_on_ground_is_grounded() {
    let mut app = physics_app();
    spawn_slab(&mut app, GameLayer::Ground);
    let player = spawn_feet(&mut app, 0.0);

    run_steps(&mut app, 6);

    assert!(grounded(&app, player));
}

#[test]
fn test_player_above_ground_is_airborne() {
    let mut app = physics_app();
    spawn_slab(&mut app, GameLayer::Ground);
    let player = spawn_feet(&mut app, 100.0);

    run_steps(&mut app, 6);

    assert!(!grounded(&app, player));
}

#[test]
fn test_wall_layer_never_grounds() {
    let mut app = physics_app();
    spawn_slab(&mut app, GameLayer::Wall);
    let player = spawn_feet(&mut app, 0.0);

    run_steps(&mut app, 6);

    assert!(!grounded(&app, player));
}

#[test]
fn test_leaving_ground_clears_grounded() {
    let mut app = physics_app();
    spawn_slab(&mut app, GameLayer::Ground);
    let player = spawn_feet(&mut app, 0.0);
    run_steps(&mut app, 6);
    assert!(grounded(&app, player));

    app.world_mut()
        .get_mut::<Transform>(player)
        .unwrap()
        .translation
        .y = 200.0;
    run_steps(&mut app, 3);

    assert!(!grounded(&app, player));
}
