//! Data definitions for the controller RON file.
//!
//! These structs mirror the layout of assets/data/controller.ron. Lengths are
//! in pixels, times in seconds.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Pixels per world meter. Defaults below are authored in meters and scaled.
pub const PIXELS_PER_METER: f32 = 64.0;

/// Layout version this build reads. Files that omit it are assumed current.
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Root
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ControllerConfig {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub movement: MovementDef,
    #[serde(default)]
    pub combat: CombatDef,
    #[serde(default)]
    pub audio: AudioDef,
}

fn current_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            movement: MovementDef::default(),
            combat: CombatDef::default(),
            audio: AudioDef::default(),
        }
    }
}

// ============================================================================
// Movement
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MovementDef {
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub ground_check_radius: f32,
    /// Offset of the ground-check point from the body center.
    pub ground_check_offset: (f32, f32),
    pub body_size: (f32, f32),
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            move_speed: 5.0 * PIXELS_PER_METER,
            jump_velocity: 5.0 * PIXELS_PER_METER,
            gravity: 9.81 * PIXELS_PER_METER,
            ground_check_radius: 0.1 * PIXELS_PER_METER,
            ground_check_offset: (0.0, -24.0),
            body_size: (24.0, 48.0),
        }
    }
}

// ============================================================================
// Combat
// ============================================================================

/// Which attack animation set the controller drives.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
pub enum AttackStyle {
    /// One "Attack" trigger on every swing.
    Single,
    /// Three-step ring: "Attack1" -> "Attack2" -> "Attack3" -> "Attack1".
    #[default]
    Combo,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CombatDef {
    pub style: AttackStyle,
    pub attack_range: f32,
    /// Attacks per second.
    pub attack_rate: f32,
    /// Offset of the attack point from the body center, facing right.
    pub attack_point_offset: (f32, f32),
    pub flash_duration: f32,
}

impl Default for CombatDef {
    fn default() -> Self {
        Self {
            style: AttackStyle::Combo,
            attack_range: 0.5 * PIXELS_PER_METER,
            attack_rate: 2.0,
            attack_point_offset: (28.0, 0.0),
            flash_duration: 0.1,
        }
    }
}

// ============================================================================
// Audio
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AudioDef {
    pub footstep_interval: f32,
    pub clips: ClipPathsDef,
}

impl Default for AudioDef {
    fn default() -> Self {
        Self {
            footstep_interval: 0.25,
            clips: ClipPathsDef::default(),
        }
    }
}

/// Asset paths of the one-shot clips. A missing entry disables that sound.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ClipPathsDef {
    pub jump: Option<String>,
    pub attack: Option<String>,
    pub bash: Option<String>,
    pub footstep: Option<String>,
    pub hit: Option<String>,
}
