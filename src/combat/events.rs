//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeKind {
    Attack,
    Bash,
}

/// Emitted once per target caught in a strike circle.
#[derive(Debug)]
pub struct HitEvent {
    pub attacker: Entity,
    pub target: Entity,
    pub kind: StrikeKind,
}

impl Message for HitEvent {}
