//! Audio domain: footstep cadence while walking on the ground.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::time::Duration;

use crate::audio::{PlaySound, SoundCue};
use crate::movement::MovementState;

/// Repeating footstep timer. Idle until `walking && grounded` holds.
#[derive(Component, Debug)]
pub struct FootstepEmitter {
    playing: bool,
    timer: Timer,
}

impl FootstepEmitter {
    pub fn new(interval: f32) -> Self {
        Self {
            playing: false,
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Re-evaluate the toggle and advance the cadence by `delta`.
    /// Returns how many footsteps are due this tick.
    pub fn update(&mut self, active: bool, delta: Duration) -> u32 {
        match (active, self.playing) {
            (true, false) => {
                // First step plays on the transition itself
                self.playing = true;
                self.timer.reset();
                1
            }
            (true, true) => {
                self.timer.tick(delta);
                self.timer.times_finished_this_tick()
            }
            (false, true) => {
                self.playing = false;
                0
            }
            (false, false) => 0,
        }
    }
}

/// Fixed tick: start, advance or cancel footsteps for every walker.
pub(crate) fn handle_footsteps(
    time: Res<Time>,
    mut query: Query<(Entity, &MovementState, &mut FootstepEmitter)>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for (entity, state, mut emitter) in &mut query {
        let was_playing = emitter.is_playing();
        let steps = emitter.update(state.walking && state.grounded, time.delta());

        if emitter.is_playing() != was_playing {
            debug!("Footsteps {:?}: playing={}", entity, emitter.is_playing());
        }

        for _ in 0..steps {
            sounds.write(PlaySound::new(entity, SoundCue::Footstep));
        }
    }
}
