//! Systems
//!
//! This module contains all the systems that operate on entities and
//! resources in the ECS.

pub mod animation;
pub mod camera;
pub mod clock;
pub mod scene;

pub use animation::{apply_spin_arcs, drive_orbital_tick};
pub use camera::update_camera_from_input;
pub use clock::refresh_clock_label;
pub use scene::setup_scene;
