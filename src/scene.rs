use bevy::prelude::*;

use crate::camera::OrbitCamera;
use crate::constants::camera::{
    FAR_PLANE, FOV_Y_DEGREES, INITIAL_EYE, NEAR_PLANE, ORBIT_TARGET,
};
use crate::constants::lighting::{AMBIENT_BRIGHTNESS, FILL_ILLUMINANCE, KEY_ILLUMINANCE};
use crate::constants::scene::GROUND_SIZE;
use crate::core::components::MainCamera;

/// Declarative scene setup: camera rig, lights, ground plane, clear color.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb_u8(2, 17, 41)))
            .add_systems(Startup, setup_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Orbit camera looking at the product stand
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_Y_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_translation(INITIAL_EYE).looking_at(ORBIT_TARGET, Vec3::Y),
        OrbitCamera::from_eye_target(INITIAL_EYE, ORBIT_TARGET),
        MainCamera,
    ));

    // Key light, shadow casting, aimed from the upper back-right of the stand
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: KEY_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, -2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Overhead fill, no shadows, softens the underside of the models
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 1.0, 0.95),
            illuminance: FILL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
    });

    // Ground plane under the product, catches the key light's shadows
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xcb, 0xcb, 0xcb),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
    ));

    info!("Scene setup complete");
}
