//! Animator parameter store.
//!
//! Gameplay systems never pick animation clips directly. They set named
//! boolean parameters and fire named triggers, and the playback state
//! machine turns those into an [`AnimationState`](super::AnimationState).

use bevy::prelude::*;
use std::collections::HashMap;

/// Parameter names shared by gameplay and playback.
pub mod params {
    pub const IS_WALKING: &str = "isWalking";
    pub const IS_JUMPING: &str = "isJumping";
    pub const IS_BLOCKING: &str = "isBlocking";

    pub const ATTACK: &str = "Attack";
    pub const ATTACK_1: &str = "Attack1";
    pub const ATTACK_2: &str = "Attack2";
    pub const ATTACK_3: &str = "Attack3";
    pub const BASH: &str = "Bash";
    pub const HURT: &str = "Hurt";
}

#[derive(Component, Debug, Default, Clone)]
pub struct Animator {
    bools: HashMap<&'static str, bool>,
    /// Fired triggers in firing order, cleared when playback consumes them.
    triggers: Vec<&'static str>,
}

impl Animator {
    /// Set a boolean parameter. Returns true if the value changed.
    pub fn set_bool(&mut self, name: &'static str, value: bool) -> bool {
        self.bools.insert(name, value) != Some(value)
    }

    /// Read a boolean parameter. Unset parameters read as false.
    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    /// Fire a trigger. Firing the same trigger twice before it is consumed
    /// queues it once.
    pub fn set_trigger(&mut self, name: &'static str) {
        if !self.triggers.contains(&name) {
            self.triggers.push(name);
        }
    }

    pub fn is_triggered(&self, name: &str) -> bool {
        self.triggers.iter().any(|t| *t == name)
    }

    /// Take every pending trigger, oldest first.
    pub fn drain_triggers(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.triggers)
    }
}
