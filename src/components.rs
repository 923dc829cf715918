//! Component definitions
//!
//! This module contains the component markers and data structures used to
//! tag and identify entities in the ECS.

use bevy::prelude::*;

/// Marker component for the sun's directional light
///
/// The entity with this component is rotated about the vertical axis by
/// the animation driver to move daylight across the globe.
#[derive(Component)]
pub struct SunLight;

/// Marker component for the Earth sphere
///
/// The entity with this component spins about the vertical axis. The cloud
/// layer is a child of it and inherits the spin.
#[derive(Component)]
pub struct EarthGlobe;

/// Marker component for cameras that can be controlled by user input
///
/// Entities with this component respond to mouse input for orbit camera
/// control (rotation, zoom).
#[derive(Component)]
pub struct CameraController;

/// Marker component for the clock overlay text
#[derive(Component)]
pub struct ClockLabel;

/// The rotation transition a body animates through during the current tick
///
/// Rebuilt by the animation driver once per tick; the orientation applied
/// each frame is the linear interpolation between `from` and `to` at the
/// tick's elapsed fraction.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpinArc {
    pub from: f32,
    pub to: f32,
}

impl SpinArc {
    /// A transition that holds a single angle (used before the first tick)
    pub fn rest(angle: f32) -> Self {
        Self {
            from: angle,
            to: angle,
        }
    }

    /// Angle at `fraction` of the way through the tick, linear timing
    pub fn at(&self, fraction: f32) -> f32 {
        self.from + (self.to - self.from) * fraction
    }
}
