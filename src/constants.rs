#![allow(dead_code)] // Allow unused constants for future tuning

// Viewer configuration constants
// This module contains all the magic numbers used throughout the viewer;
// there is no file or environment configuration layer.

// === WINDOW AND DISPLAY ===
pub const WINDOW_TITLE: &str = "Carter Product Viewer";
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

// === ORBIT CAMERA ===
pub mod camera {
    use bevy::math::Vec3;

    pub const FOV_Y_DEGREES: f32 = 35.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 100.0;

    // The orbit pivot sits at chest height on the product stand
    pub const ORBIT_TARGET: Vec3 = Vec3::new(0.0, 0.5, 0.0);
    pub const INITIAL_EYE: Vec3 = Vec3::new(3.0, 3.0, 3.0);

    // Drag sensitivity in radians per pixel of mouse motion
    pub const LOOK_SENSITIVITY: f32 = 0.005;
    pub const PITCH_LIMIT: f32 = 1.5; // Keeps the rig off the poles

    // Scroll wheel zoom settings
    pub const SCROLL_ZOOM_SENSITIVITY: f32 = 0.25; // Distance units per wheel click
    pub const MIN_DISTANCE: f32 = 1.5;
    pub const MAX_DISTANCE: f32 = 15.0;
}

// === SWING ANIMATION ===
pub mod swing {
    // Yaw limit for the body swing, in radians
    pub const MAX_ANGLE: f32 = 2.0;
    // Base angular step per render tick; the eased profile scales this
    pub const BASE_SPEED: f32 = 0.08;
}

// === CLICK PICKING ===
pub mod picking {
    // Bounding sphere radius for click tests against the body model
    pub const BODY_PICK_RADIUS: f32 = 1.0;
}

// === LIGHTING ===
pub mod lighting {
    pub const KEY_ILLUMINANCE: f32 = 8000.0;
    pub const FILL_ILLUMINANCE: f32 = 2500.0;
    pub const AMBIENT_BRIGHTNESS: f32 = 300.0;
}

// === SCENE DRESSING ===
pub mod scene {
    pub const GROUND_SIZE: f32 = 100.0;
}
