use bevy::prelude::*;

use crate::core::components::{MainCamera, ModelKind, Pickable};
use crate::core::resources::ModelRegistry;
use crate::core::swing::SwingState;

/// Click picking: a left click is cast through the camera into the scene and
/// tested against the body model's bounding sphere; a hit toggles the swing.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, click_toggle_swing);
    }
}

/// Runs on the click edge, not per frame. Every missing precondition
/// (no cursor, no camera, body not loaded) is a defined miss.
pub fn click_toggle_swing(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    registry: Res<ModelRegistry>,
    pickables: Query<(&GlobalTransform, &Pickable)>,
    mut swing: ResMut<SwingState>,
) {
    if !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor_position) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_position) else {
        return;
    };

    let Some(body) = registry.entity(ModelKind::Body) else {
        return;
    };
    let Ok((body_transform, pickable)) = pickables.get(body) else {
        return;
    };

    let hit = ray_sphere(
        ray.origin,
        *ray.direction,
        body_transform.translation(),
        pickable.radius,
    );

    if hit.is_some() {
        swing.toggle();
        info!(
            "body clicked, swing {}",
            if swing.active { "running" } else { "paused" }
        );
    }
}

/// Distance along the ray to the near intersection with a sphere, if any.
/// `dir` must be normalized. A sphere behind the origin is a miss.
#[inline]
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
