use bevy::prelude::*;

use crate::core::components::{ModelKind, ProductModel};
use crate::core::resources::ModelRegistry;
use crate::core::swing::SwingState;

/// Drives the body swing: the state machine lives in [`SwingState`], this
/// plugin ticks it and writes the resulting yaw onto the body's transform.
pub struct SwingAnimationPlugin;

impl Plugin for SwingAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwingState>()
            .add_systems(Update, drive_body_swing);
    }
}

/// Once per render tick: advance the swing while it is active and apply the
/// angle to the body model. The schedule ticks unconditionally; the guard at
/// the top is what makes an idle viewer free.
pub fn drive_body_swing(
    mut swing: ResMut<SwingState>,
    registry: Res<ModelRegistry>,
    mut transforms: Query<&mut Transform, With<ProductModel>>,
) {
    if !swing.active {
        return;
    }

    // Toggled before the body finished loading; nothing to rotate yet.
    let Some(body) = registry.entity(ModelKind::Body) else {
        return;
    };
    let Ok(mut transform) = transforms.get_mut(body) else {
        return;
    };

    let still_swinging = swing.advance();
    transform.rotation = Quat::from_rotation_y(swing.angle);

    if !still_swinging {
        debug!(
            "swing stopped at {:.3} rad, next direction {:?}",
            swing.angle, swing.direction
        );
    }
}
