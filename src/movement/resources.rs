//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::MovementDef;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub ground_check_radius: f32,
    pub ground_check_offset: Vec2,
    pub body_size: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_def(&MovementDef::default())
    }
}

impl MovementTuning {
    pub fn from_def(def: &MovementDef) -> Self {
        Self {
            max_speed: def.move_speed,
            jump_velocity: def.jump_velocity,
            gravity: def.gravity,
            ground_check_radius: def.ground_check_radius,
            ground_check_offset: Vec2::new(def.ground_check_offset.0, def.ground_check_offset.1),
            body_size: Vec2::new(def.body_size.0, def.body_size.1),
        }
    }

    /// Calculate the maximum height reachable from a single jump.
    /// Uses physics formula: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }

    /// Jump height with a margin for imperfect timing, for laying out platforms.
    pub fn safe_reachable_height(&self) -> f32 {
        self.single_jump_height() * 0.8
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
}
