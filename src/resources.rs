//! Resource definitions
//!
//! This module contains the global resources used by the systems.

use bevy::prelude::*;

use crate::config::{self, CLOCK_REFRESH_SECONDS, TICK_SECONDS};
use crate::rotation::{RotationState, SpinStep};

// =============================================================================
// Camera Control
// =============================================================================

/// Orbit camera state for spherical coordinate camera control
#[derive(Resource)]
pub struct OrbitCameraState {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians), clamped to avoid gimbal lock
    pub pitch: f32,
    /// Distance from the camera to the center point
    pub distance: f32,
    /// The point the camera orbits around
    pub center: Vec3,
}

impl Default for OrbitCameraState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: config::camera::START_DISTANCE,
            center: Vec3::ZERO,
        }
    }
}

// =============================================================================
// Animation
// =============================================================================

/// Spin state of both rotating bodies
///
/// Owned here rather than living on the scene entities so the driver can
/// advance both angles before either orientation is touched.
#[derive(Resource)]
pub struct SkyRotations {
    pub sun: RotationState,
    pub earth: RotationState,
}

impl SkyRotations {
    /// Advance both bodies by one tick. The sun and Earth steps are
    /// computed together; callers apply them together as well.
    pub fn step(&mut self) -> (SpinStep, SpinStep) {
        (self.sun.step(), self.earth.step())
    }
}

impl Default for SkyRotations {
    fn default() -> Self {
        Self {
            sun: RotationState::new(config::SUN_INITIAL_ANGLE, config::SUN_ROTATION_SPEED),
            earth: RotationState::new(config::EARTH_INITIAL_ANGLE, config::EARTH_ROTATION_SPEED),
        }
    }
}

/// The repeating tick that drives the rotation transitions
///
/// Each tick spans one transition; when the timer completes, the driver
/// installs the next transition, chaining ticks for the process lifetime.
#[derive(Resource)]
pub struct OrbitalTick {
    pub timer: Timer,
}

impl Default for OrbitalTick {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(TICK_SECONDS, TimerMode::Repeating),
        }
    }
}

// =============================================================================
// Clock Overlay
// =============================================================================

/// Refresh timer for the clock label, independent of the orbital tick
#[derive(Resource)]
pub struct ClockRefresh {
    pub timer: Timer,
}

impl Default for ClockRefresh {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(CLOCK_REFRESH_SECONDS, TimerMode::Repeating),
        }
    }
}
