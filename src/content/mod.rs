//! Content domain: RON-driven controller tuning.

mod data;
mod loader;
mod validation;

pub use data::{
    AttackStyle, AudioDef, ClipPathsDef, CombatDef, ControllerConfig, MovementDef,
    PIXELS_PER_METER, SCHEMA_VERSION,
};
pub use loader::{ContentLoadError, load_controller_config, parse_controller_config};
pub use validation::ValidationError;

use bevy::prelude::*;
use std::path::Path;

use crate::audio::AudioTuning;
use crate::combat::AttackTuning;
use crate::core::GameState;
use crate::movement::MovementTuning;

/// Location of the controller tuning file relative to the working directory.
pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Read and validate the controller config, falling back to defaults on any
/// failure, publish the per-domain tuning, then leave the boot state.
fn load_content(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let config = resolve_config(load_controller_config(Path::new(CONTROLLER_CONFIG_PATH)));

    info!(
        "Controller config: speed={}, jump={}, style={:?}, attack_rate={}",
        config.movement.move_speed,
        config.movement.jump_velocity,
        config.combat.style,
        config.combat.attack_rate
    );

    commands.insert_resource(MovementTuning::from_def(&config.movement));
    commands.insert_resource(AttackTuning::from_def(&config.combat));
    commands.insert_resource(AudioTuning::from_def(&config.audio));
    commands.insert_resource(config);
    next_state.set(GameState::Playing);
}

/// Pick the loaded config if it parsed and validated, otherwise defaults.
pub(crate) fn resolve_config(
    loaded: Result<ControllerConfig, ContentLoadError>,
) -> ControllerConfig {
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default controller config", e);
            return ControllerConfig::default();
        }
    };

    let errors = config.validate();
    if errors.is_empty() {
        return config;
    }

    for error in &errors {
        error!("Content validation: {}", error);
    }
    warn!(
        "{} invalid value(s) in controller config; using defaults",
        errors.len()
    );
    ControllerConfig::default()
}
