//! Application setup and execution
//!
//! This module handles the creation and configuration of the Bevy app,
//! including plugin registration and system scheduling.

use bevy::prelude::*;

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::materials::HaloMaterial;
use crate::resources::*;
use crate::systems::*;

/// Create and configure the application
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Blue Marble".into(),
            resolution: (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32).into(),
            ..default()
        }),
        ..default()
    }));

    // Cloud material variant carrying the optional halo shader
    app.add_plugins(MaterialPlugin::<HaloMaterial>::default());

    app.insert_resource(ClearColor(Color::BLACK));

    // Register systems
    app.add_systems(Startup, setup_scene);
    app.add_systems(Update, (drive_orbital_tick, apply_spin_arcs).chain());
    app.add_systems(Update, update_camera_from_input);
    app.add_systems(Update, refresh_clock_label);

    // Insert resources
    app.init_resource::<SkyRotations>();
    app.init_resource::<OrbitalTick>();
    app.init_resource::<ClockRefresh>();
    app.init_resource::<OrbitCameraState>();

    app
}
