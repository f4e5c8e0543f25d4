use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::constants::camera::*;
use crate::core::components::MainCamera;

/// Orbit rig: left-drag rotates around a fixed target, scroll wheel zooms
/// along the view axis. Panning is not offered, so the product stays centered.
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, orbit_camera_input);
    }
}

/// Spherical-coordinate state for the camera rig.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Build a rig whose spherical coordinates reproduce the given eye point.
    pub fn from_eye_target(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
        }
    }

    /// World-space eye position for the current yaw/pitch/distance.
    pub fn eye_position(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        let offset = Vec3::new(pitch_cos * yaw_sin, pitch_sin, pitch_cos * yaw_cos);
        self.target + offset * self.distance
    }
}

pub fn orbit_camera_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    let Ok((mut transform, mut orbit)) = camera_query.get_single_mut() else {
        return;
    };

    let mut moved = false;

    if mouse_buttons.pressed(MouseButton::Left) {
        for motion in mouse_motion.read() {
            orbit.yaw -= motion.delta.x * LOOK_SENSITIVITY;
            orbit.pitch =
                (orbit.pitch + motion.delta.y * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            moved = true;
        }
    } else {
        mouse_motion.clear();
    }

    for wheel in mouse_wheel.read() {
        orbit.distance =
            (orbit.distance - wheel.y * SCROLL_ZOOM_SENSITIVITY).clamp(MIN_DISTANCE, MAX_DISTANCE);
        moved = true;
    }

    if moved {
        *transform = Transform::from_translation(orbit.eye_position())
            .looking_at(orbit.target, Vec3::Y);
    }
}
