//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

use crate::animation::params;
use crate::content::AttackStyle;
use crate::movement::Facing;

/// Where swings land, relative to the body center when facing right.
#[derive(Component, Debug, Clone, Copy)]
pub struct AttackPoint {
    pub offset: Vec2,
    pub range: f32,
}

impl AttackPoint {
    /// World position of the strike circle; x mirrors with facing.
    pub fn point(&self, transform: &Transform, facing: Facing) -> Vec2 {
        let offset = Vec2::new(self.offset.x * facing.sign(), self.offset.y);
        transform.translation.truncate() + offset
    }
}

/// Rate limit for attacks, in seconds of elapsed game time.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AttackCooldown {
    pub next_attack_time: f32,
}

impl AttackCooldown {
    pub fn is_ready(&self, now: f32) -> bool {
        now >= self.next_attack_time
    }

    /// Block attacks for `1 / rate` seconds from `now`.
    pub fn arm(&mut self, now: f32, rate: f32) {
        self.next_attack_time = now + 1.0 / rate;
    }
}

/// Ring counter selecting the next combo swing.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComboCounter {
    index: u8,
}

impl ComboCounter {
    pub const STEPS: u8 = 3;

    /// Index of the swing the next attack plays, always below [`Self::STEPS`].
    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % Self::STEPS;
    }

    /// Animator trigger for the next swing.
    pub fn trigger(&self, style: AttackStyle) -> &'static str {
        match (style, self.index) {
            (AttackStyle::Single, _) => params::ATTACK,
            (AttackStyle::Combo, 0) => params::ATTACK_1,
            (AttackStyle::Combo, 1) => params::ATTACK_2,
            (AttackStyle::Combo, _) => params::ATTACK_3,
        }
    }
}

/// True while the bash button is held.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Blocking(pub bool);

/// Marks a training dummy that reacts to hits.
#[derive(Component, Debug)]
pub struct Dummy;

/// Brief tint on a struck sprite. Restores `base_color` when it expires.
#[derive(Component, Debug)]
pub struct DamageFlash {
    pub timer: Timer,
    pub base_color: Color,
}

impl DamageFlash {
    pub const COLOR: Color = Color::WHITE;

    pub fn new(duration: f32, base_color: Color) -> Self {
        Self {
            timer: Timer::from_seconds(duration, TimerMode::Once),
            base_color,
        }
    }
}
