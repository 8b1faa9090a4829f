//! Animation state machine and playback.
//!
//! Turns animator parameters into a visual state and advances its frames.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use super::animator::{Animator, params};

/// Animation states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Block,
    Attack(AttackAnimationType),
    Bash,
    Hurt,
}

/// Types of attack animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackAnimationType {
    /// The single-swing set.
    Basic,
    First,
    Second,
    Third,
}

impl AnimationState {
    /// The one-shot state a trigger starts, if any.
    pub fn from_trigger(trigger: &str) -> Option<Self> {
        let state = match trigger {
            params::ATTACK => AnimationState::Attack(AttackAnimationType::Basic),
            params::ATTACK_1 => AnimationState::Attack(AttackAnimationType::First),
            params::ATTACK_2 => AnimationState::Attack(AttackAnimationType::Second),
            params::ATTACK_3 => AnimationState::Attack(AttackAnimationType::Third),
            params::BASH => AnimationState::Bash,
            params::HURT => AnimationState::Hurt,
            _ => return None,
        };
        Some(state)
    }

    /// Looping states may be interrupted by parameter changes at any frame.
    pub fn is_looping(&self) -> bool {
        matches!(
            self,
            AnimationState::Idle | AnimationState::Walk | AnimationState::Jump | AnimationState::Block
        )
    }

    fn frame_count(&self) -> u32 {
        match self {
            AnimationState::Idle => 4,
            AnimationState::Walk => 6,
            AnimationState::Jump => 2,
            AnimationState::Block => 1,
            AnimationState::Attack(_) => 4,
            AnimationState::Bash => 3,
            AnimationState::Hurt => 2,
        }
    }

    fn frame_duration(&self) -> f32 {
        match self {
            AnimationState::Attack(_) | AnimationState::Bash => 0.06,
            AnimationState::Hurt => 0.1,
            _ => 0.15,
        }
    }
}

/// Component for animation playback driven by an [`Animator`].
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation has finished (non-looping only).
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        let state = AnimationState::Idle;
        Self {
            state,
            current_frame: 0,
            total_frames: state.frame_count(),
            frame_timer: 0.0,
            frame_duration: state.frame_duration(),
            finished: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frames if the state changed.
    /// Returns the previous state when a change happened.
    pub fn set_state(&mut self, state: AnimationState) -> Option<AnimationState> {
        if self.state == state {
            return None;
        }
        let previous = self.state;
        self.restart(state);
        Some(previous)
    }

    /// Start `state` from its first frame even if it is already playing.
    pub fn restart(&mut self, state: AnimationState) {
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.total_frames = state.frame_count();
        self.frame_duration = state.frame_duration();
    }

    /// True while a one-shot animation still has frames to play.
    pub fn is_busy(&self) -> bool {
        !self.state.is_looping() && !self.finished
    }

    /// Advance by `dt` seconds. Returns true when a one-shot just finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.state.is_looping() {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                    return true;
                }
            }
        }
        false
    }
}

/// Locomotion state from the boolean parameters.
pub fn locomotion_state(animator: &Animator) -> AnimationState {
    if animator.get_bool(params::IS_BLOCKING) {
        AnimationState::Block
    } else if animator.get_bool(params::IS_JUMPING) {
        AnimationState::Jump
    } else if animator.get_bool(params::IS_WALKING) {
        AnimationState::Walk
    } else {
        AnimationState::Idle
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Message fired when a non-looping animation completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

/// Consume fired triggers and fall back to locomotion once one-shots end.
pub fn animation_state_machine(
    mut query: Query<(Entity, &mut Animator, &mut AnimationController)>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, mut animator, mut controller) in &mut query {
        let from = controller.state;

        // The latest trigger wins when several fire in one frame
        let triggered = animator
            .drain_triggers()
            .into_iter()
            .filter_map(AnimationState::from_trigger)
            .last();

        if let Some(state) = triggered {
            controller.restart(state);
        } else if !controller.is_busy() {
            controller.set_state(locomotion_state(&animator));
        }

        if controller.state != from || triggered.is_some() {
            changed_events.write(AnimationStateChanged {
                entity,
                from,
                to: controller.state,
            });
        }
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        if controller.advance(time.delta_secs()) {
            finished_events.write(AnimationFinished {
                entity,
                state: controller.state,
            });
        }
    }
}

pub fn log_animation_changes(
    mut changed: MessageReader<AnimationStateChanged>,
    mut finished: MessageReader<AnimationFinished>,
) {
    for event in changed.read() {
        debug!(
            "Animation {:?}: {:?} -> {:?}",
            event.entity, event.from, event.to
        );
    }
    for event in finished.read() {
        debug!("Animation {:?}: {:?} finished", event.entity, event.state);
    }
}
