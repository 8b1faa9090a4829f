//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundCheck, MovementState, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &GroundCheck, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not walls, dummies, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, check, mut state) in &mut query {
        let was_grounded = state.grounded;

        let probe = Collider::circle(check.radius);
        let hits =
            spatial_query.shape_intersections(&probe, check.point(transform), 0.0, &ground_filter);

        state.grounded = !hits.is_empty();

        if state.grounded && !was_grounded {
            debug!("Landed: ground contacts={}", hits.len());
        } else if !state.grounded && was_grounded {
            debug!("Left ground");
        }
    }
}
