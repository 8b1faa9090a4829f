//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, Animator};
use crate::audio::{AudioTuning, FootstepEmitter};
use crate::combat::{AttackCooldown, AttackPoint, AttackTuning, Blocking, ComboCounter};
use crate::movement::dev::FLOOR_TOP;
use crate::movement::{GameLayer, GroundCheck, MovementState, MovementTuning, Player};

/// Where the player's feet start, on top of the test room floor.
const PLAYER_SPAWN_FEET: Vec2 = Vec2::new(-300.0, FLOOR_TOP);

/// Spawn the player once the controller config is available.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    attack_tuning: Res<AttackTuning>,
    audio_tuning: Res<AudioTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let size = tuning.body_size;
    let spawn = PLAYER_SPAWN_FEET + Vec2::new(0.0, size.y / 2.0);

    info!(
        "Spawning player: speed={}, jump={}, attack_style={:?}, attack_rate={}",
        tuning.max_speed, tuning.jump_velocity, attack_tuning.style, attack_tuning.attack_rate
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            Name::new("Player"),
            MovementState::default(),
            GroundCheck {
                offset: tuning.ground_check_offset,
                radius: tuning.ground_check_radius,
            },
        ),
        // Combat
        (
            AttackPoint {
                offset: attack_tuning.attack_point_offset,
                range: attack_tuning.attack_range,
            },
            AttackCooldown::default(),
            ComboCounter::default(),
            Blocking::default(),
        ),
        // Presentation
        (
            Animator::default(),
            AnimationController::default(),
            FootstepEmitter::new(audio_tuning.footstep_interval),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(spawn.x, spawn.y, 0.0),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
