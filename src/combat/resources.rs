//! Combat domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::{AttackStyle, CombatDef};

#[derive(Resource, Debug, Clone)]
pub struct AttackTuning {
    pub style: AttackStyle,
    pub attack_range: f32,
    /// Attacks per second.
    pub attack_rate: f32,
    pub attack_point_offset: Vec2,
    pub flash_duration: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self::from_def(&CombatDef::default())
    }
}

impl AttackTuning {
    pub fn from_def(def: &CombatDef) -> Self {
        Self {
            style: def.style,
            attack_range: def.attack_range,
            attack_rate: def.attack_rate,
            attack_point_offset: Vec2::new(def.attack_point_offset.0, def.attack_point_offset.1),
            flash_duration: def.flash_duration,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack: bool,
    pub bash: bool,
    pub bash_held: bool,
}
