//! Audio domain: sound cues and one-shot playback.

use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings};
use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::content::{AudioDef, ControllerConfig};

/// Every sound the controller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Attack,
    Bash,
    Footstep,
    Hit,
}

/// Request a fire-and-forget sound on behalf of `emitter`.
#[derive(Debug, Clone, Copy)]
pub struct PlaySound {
    pub emitter: Entity,
    pub cue: SoundCue,
}

impl Message for PlaySound {}

impl PlaySound {
    pub fn new(emitter: Entity, cue: SoundCue) -> Self {
        Self { emitter, cue }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct AudioTuning {
    pub footstep_interval: f32,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self::from_def(&AudioDef::default())
    }
}

impl AudioTuning {
    pub fn from_def(def: &AudioDef) -> Self {
        Self {
            footstep_interval: def.footstep_interval,
        }
    }
}

/// Loaded clips. `None` means the cue is silent.
#[derive(Resource, Debug, Default)]
pub struct SoundLibrary {
    pub jump: Option<Handle<AudioSource>>,
    pub attack: Option<Handle<AudioSource>>,
    pub bash: Option<Handle<AudioSource>>,
    pub footstep: Option<Handle<AudioSource>>,
    pub hit: Option<Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn clip(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        match cue {
            SoundCue::Jump => self.jump.as_ref(),
            SoundCue::Attack => self.attack.as_ref(),
            SoundCue::Bash => self.bash.as_ref(),
            SoundCue::Footstep => self.footstep.as_ref(),
            SoundCue::Hit => self.hit.as_ref(),
        }
    }
}

/// Marks a spawned one-shot player with the cue it plays.
#[derive(Component, Debug)]
pub struct OneShotSound {
    pub cue: SoundCue,
    pub emitter: Entity,
}

pub(crate) fn load_sound_library(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    asset_server: Res<AssetServer>,
) {
    let clips = &config.audio.clips;
    let load = |path: &Option<String>| path.as_ref().map(|p| asset_server.load::<AudioSource>(p.clone()));

    let library = SoundLibrary {
        jump: load(&clips.jump),
        attack: load(&clips.attack),
        bash: load(&clips.bash),
        footstep: load(&clips.footstep),
        hit: load(&clips.hit),
    };

    let missing: Vec<_> = [
        SoundCue::Jump,
        SoundCue::Attack,
        SoundCue::Bash,
        SoundCue::Footstep,
        SoundCue::Hit,
    ]
    .into_iter()
    .filter(|cue| library.clip(*cue).is_none())
    .collect();
    if !missing.is_empty() {
        info!("No clip configured for {:?}; those cues stay silent", missing);
    }

    commands.insert_resource(library);
}

/// Spawn one self-despawning audio player per request.
pub(crate) fn play_sound_cues(
    mut commands: Commands,
    mut requests: MessageReader<PlaySound>,
    library: Option<Res<SoundLibrary>>,
) {
    let Some(library) = library else {
        requests.clear();
        return;
    };

    for request in requests.read() {
        let Some(clip) = library.clip(request.cue) else {
            continue;
        };

        commands.spawn((
            AudioPlayer::new(clip.clone()),
            PlaybackSettings::DESPAWN,
            OneShotSound {
                cue: request.cue,
                emitter: request.emitter,
            },
        ));
    }
}
