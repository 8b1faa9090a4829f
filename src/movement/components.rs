//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Arena bounds, never count as ground
    Wall,
    /// Player character
    Player,
    /// Things the player can hit (training dummies)
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub grounded: bool,
    /// Horizontal input is non-zero this tick.
    pub walking: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Small circle under the feet that must overlap ground for a jump.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundCheck {
    pub offset: Vec2,
    pub radius: f32,
}

impl GroundCheck {
    /// World position of the check circle for an entity at `transform`.
    pub fn point(&self, transform: &Transform) -> Vec2 {
        transform.translation.truncate() + self.offset
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
