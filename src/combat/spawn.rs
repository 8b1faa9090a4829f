//! Combat domain: training dummy spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, Animator};
use crate::combat::components::Dummy;
use crate::movement::GameLayer;

pub const DUMMY_SIZE: Vec2 = Vec2::new(28.0, 56.0);

/// Spawn a static training dummy standing with its feet at `feet`.
pub fn spawn_training_dummy(commands: &mut Commands, feet: Vec2) -> Entity {
    commands
        .spawn((
            Dummy,
            Name::new("Training Dummy"),
            Animator::default(),
            AnimationController::default(),
            Sprite {
                color: Color::srgb(0.75, 0.6, 0.35),
                custom_size: Some(DUMMY_SIZE),
                ..default()
            },
            Transform::from_xyz(feet.x, feet.y + DUMMY_SIZE.y / 2.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(DUMMY_SIZE.x, DUMMY_SIZE.y),
            // Only strike queries find it; it never blocks the player
            CollisionLayers::new(GameLayer::Enemy, LayerMask::NONE),
        ))
        .id()
}
