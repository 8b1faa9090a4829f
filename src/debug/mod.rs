//! Debug overlay for tuning the controller (dev-tools builds).
//!
//! Features:
//! - Attack range circle at the attack point
//! - Ground-check circle, green while grounded
//! - Toggle with F1 or backtick

use bevy::prelude::*;

use crate::combat::AttackPoint;
use crate::core::GameState;
use crate::movement::{GroundCheck, MovementState, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    pub gizmos_visible: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            gizmos_visible: true,
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_gizmos,
                draw_controller_gizmos.run_if(|state: Res<DebugState>| state.gizmos_visible),
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Toggle gizmos with F1 or backtick key
fn toggle_debug_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        state.gizmos_visible = !state.gizmos_visible;
        info!("Debug gizmos: {}", state.gizmos_visible);
    }
}

fn draw_controller_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MovementState, &GroundCheck, &AttackPoint), With<Player>>,
) {
    for (transform, state, check, attack_point) in &query {
        gizmos.circle_2d(
            attack_point.point(transform, state.facing),
            attack_point.range,
            Color::srgb(1.0, 0.3, 0.3),
        );

        let ground_color = if state.grounded {
            Color::srgb(0.3, 1.0, 0.3)
        } else {
            Color::srgb(0.6, 0.6, 0.6)
        };
        gizmos.circle_2d(check.point(transform), check.radius, ground_color);
    }
}
