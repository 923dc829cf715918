//! Camera control system
//!
//! This module implements orbit camera controls that respond to mouse
//! input, allowing users to rotate around the globe and zoom.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::components::CameraController;
use crate::config::camera::*;
use crate::resources::OrbitCameraState;

/// Update camera transform based on mouse input
/// Implements orbit camera control:
/// - Left button drag: rotate camera (yaw/pitch)
/// - Scroll wheel: zoom (adjust distance)
pub fn update_camera_from_input(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: MessageReader<MouseMotion>,
    mut wheel: MessageReader<MouseWheel>,
    mut orbit_state: ResMut<OrbitCameraState>,
    mut camera_query: Query<&mut Transform, With<CameraController>>,
) {
    let drag: Vec2 = motion.read().map(|event| event.delta).sum();
    let scroll: f32 = wheel.read().map(|event| event.y).sum();

    // Apply rotation when left button is held
    if buttons.pressed(MouseButton::Left) && drag != Vec2::ZERO {
        orbit_state.yaw -= drag.x * ROTATION_SPEED;
        orbit_state.pitch -= drag.y * ROTATION_SPEED;

        // Clamp pitch to prevent camera flipping
        orbit_state.pitch = orbit_state.pitch.clamp(MIN_PITCH, MAX_PITCH);
    }

    // Apply zoom from scroll wheel
    if scroll != 0.0 {
        orbit_state.distance -= scroll * ZOOM_SPEED;
        orbit_state.distance = orbit_state.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    // Update camera transform based on orbit state
    for mut transform in camera_query.iter_mut() {
        // Camera position in spherical coordinates around the center:
        // yaw rotates around Y, pitch is the elevation
        let x = orbit_state.distance * orbit_state.pitch.cos() * orbit_state.yaw.sin();
        let y = orbit_state.distance * orbit_state.pitch.sin();
        let z = orbit_state.distance * orbit_state.pitch.cos() * orbit_state.yaw.cos();

        let camera_position = orbit_state.center + Vec3::new(x, y, z);
        *transform =
            Transform::from_translation(camera_position).looking_at(orbit_state.center, Vec3::Y);
    }
}
