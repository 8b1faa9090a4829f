//! Movement domain: test room with ground, platforms and a training dummy.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::spawn_training_dummy;
use crate::movement::{GameLayer, Ground, MovementTuning, Wall};

pub(crate) const FLOOR_TOP: f32 = -180.0;

pub(crate) fn spawn_test_room(mut commands: Commands, tuning: Res<MovementTuning>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(800.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, FLOOR_TOP - 20.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(800.0, 40.0),
        ground_layers,
    ));

    // Side walls
    for x in [-420.0, 420.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 500.0)),
                ..default()
            },
            Transform::from_xyz(x, 50.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 500.0),
            wall_layers,
        ));
    }

    // Platforms stepped by a comfortable jump height
    let step = tuning.safe_reachable_height().min(120.0);
    for (i, x) in [-150.0_f32, 80.0, 280.0].into_iter().enumerate() {
        let top = FLOOR_TOP + step * (i as f32 + 1.0);
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(140.0, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, top - 10.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(140.0, 20.0),
            ground_layers,
        ));
    }

    spawn_training_dummy(&mut commands, Vec2::new(0.0, FLOOR_TOP));
    spawn_training_dummy(&mut commands, Vec2::new(280.0, FLOOR_TOP + step * 3.0));

    debug!("Test room spawned, platform step={}", step);
}
