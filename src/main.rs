//! Blue Marble: a rotating Earth scene
//!
//! A short interactive visualization: a textured Earth sphere spinning
//! under a moving sun, wrapped in a drifting semi-transparent cloud layer,
//! with a live clock overlay in the corner of the window.
//!
//! # Module Structure
//!
//! - `config`: configuration constants
//! - `assets`: optional asset lookup
//! - `rotation`: angle advancement for the rotating bodies
//! - `components`: ECS components
//! - `resources`: global resources
//! - `materials`: cloud material with the optional halo shader
//! - `systems`: scene setup, animation driver, camera control, clock
//! - `app`: application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod assets;
mod components;
mod config;
mod materials;
mod resources;
mod rotation;
mod systems;

fn main() {
    app::create_app().run();
}
