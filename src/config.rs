//! Configuration constants for the Earth scene
//!
//! This module contains all configurable parameters such as window size,
//! body geometry, rotation speeds and asset paths.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

/// Width of the primary window in pixels
pub const WINDOW_WIDTH: f32 = 800.0;

/// Height of the primary window in pixels
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Radius of the Earth sphere
pub const EARTH_RADIUS: f32 = 5.0;

/// Radius of the cloud layer, slightly bigger than Earth
pub const CLOUD_RADIUS: f32 = 5.075;

/// Longitude/latitude segment counts for the Earth sphere mesh
pub const EARTH_SEGMENTS: (u32, u32) = (96, 48);

/// Segment counts for the cloud sphere mesh (denser, it is the closest surface)
pub const CLOUD_SEGMENTS: (u32, u32) = (120, 60);

/// Opacity of the cloud layer
pub const CLOUD_OPACITY: f32 = 0.3;

/// Sun rotation per tick (radians)
pub const SUN_ROTATION_SPEED: f32 = FRAC_PI_6;

/// Earth rotation per tick (radians)
pub const EARTH_ROTATION_SPEED: f32 = PI / 40.0;

/// Initial sun angle about the vertical axis (radians)
pub const SUN_INITIAL_ANGLE: f32 = FRAC_PI_2;

/// Initial Earth angle about the vertical axis (radians)
pub const EARTH_INITIAL_ANGLE: f32 = 0.0;

/// Duration of one animation tick in seconds; each tick is one linear
/// rotation transition, and the next tick starts when it completes
pub const TICK_SECONDS: f32 = 1.0;

/// Refresh interval of the clock label in seconds
pub const CLOCK_REFRESH_SECONDS: f32 = 1.0;

/// chrono format string for the clock label ("Aug 29, 2026" / "3:05 PM")
pub const CLOCK_FORMAT: &str = "%b %-d, %Y\n%-I:%M %p";

/// Font size of the clock label
pub const CLOCK_FONT_SIZE: f32 = 18.0;

/// Camera control settings
pub mod camera {
    /// Initial distance of the observer from the origin
    pub const START_DISTANCE: f32 = 11.0;

    /// Rotation speed multiplier for mouse drag
    pub const ROTATION_SPEED: f32 = 0.005;

    /// Zoom speed multiplier for scroll wheel
    pub const ZOOM_SPEED: f32 = 0.5;

    /// Minimum camera distance from the origin
    pub const MIN_DISTANCE: f32 = 6.0;

    /// Maximum camera distance from the origin
    pub const MAX_DISTANCE: f32 = 30.0;

    /// Maximum pitch angle (radians) to prevent camera flipping
    pub const MAX_PITCH: f32 = 1.5;

    /// Minimum pitch angle (radians) to prevent camera flipping
    pub const MIN_PITCH: f32 = -1.5;
}

/// Texture and shader asset paths, relative to the `assets` directory
pub mod assets {
    /// Day-side color map of the Earth
    pub const EARTH_DIFFUSE: &str = "textures/earth_diffuse.jpg";

    /// Ocean/land reflectivity map, used as metallic/roughness input
    pub const EARTH_SPECULAR: &str = "textures/earth_specular.jpg";

    /// Night-side city lights, used as emissive input
    pub const EARTH_LIGHTS: &str = "textures/earth_lights.jpg";

    /// Terrain relief normal map
    pub const EARTH_NORMAL: &str = "textures/earth_normal.jpg";

    /// Cloud cover, white-on-transparent
    pub const CLOUDS: &str = "textures/clouds.png";

    /// Optional fragment shader for the atmospheric halo; if the file is
    /// missing the cloud layer renders without the effect
    pub const HALO_SHADER: &str = "shaders/halo.wgsl";
}
