//! Scene setup system
//!
//! This module handles the initial setup of the 3D scene: the observer
//! camera, the sun's directional light, the textured Earth sphere with its
//! cloud layer, and the clock overlay.

use bevy::prelude::*;

use crate::assets::load_texture_if_present;
use crate::components::{CameraController, ClockLabel, EarthGlobe, SpinArc, SunLight};
use crate::config::{self, camera::START_DISTANCE};
use crate::materials::{halo_shader_available, CloudHalo, HaloMaterial};
use crate::resources::SkyRotations;

/// Set up the scene and take the first animation step, so the bodies are
/// already in motion when the first frame renders.
pub fn setup_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut halo_materials: ResMut<Assets<HaloMaterial>>,
    mut rotations: ResMut<SkyRotations>,
) {
    info!("setting up scene");

    let (sun_step, earth_step) = rotations.step();

    setup_observer(&mut commands);

    // Sun: a directional light revolving about the vertical axis
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_y(sun_step.from)),
        SunLight,
        SpinArc {
            from: sun_step.from,
            to: sun_step.to,
        },
    ));

    let earth = setup_earth(&mut commands, &asset_server, &mut meshes, &mut materials);
    commands.entity(earth).insert(SpinArc {
        from: earth_step.from,
        to: earth_step.to,
    });

    setup_clouds(
        &mut commands,
        earth,
        &asset_server,
        &mut meshes,
        &mut materials,
        &mut halo_materials,
    );

    setup_clock_label(&mut commands);

    info!("scene setup complete");
}

/// Camera at a fixed distance on +Z, plus a faint ambient fill so the
/// night side is not pitch black
fn setup_observer(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, START_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        CameraController,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 60.0,
        ..default()
    });
}

/// Earth sphere with layered textures: day colors, reflectivity,
/// night lights and terrain relief
fn setup_earth(
    commands: &mut Commands,
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let (sectors, stacks) = config::EARTH_SEGMENTS;
    let mut earth_mesh = Sphere::new(config::EARTH_RADIUS).mesh().uv(sectors, stacks);
    // The normal map needs tangents; without them the map is skipped
    if let Err(err) = earth_mesh.generate_tangents() {
        warn!("could not generate tangents for the Earth mesh: {err}");
    }

    // Every map is optional; a missing file leaves its slot empty and the
    // sphere renders with the remaining layers
    let night_lights = load_texture_if_present(asset_server, config::assets::EARTH_LIGHTS);
    let earth_material = StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: load_texture_if_present(asset_server, config::assets::EARTH_DIFFUSE),
        metallic_roughness_texture: load_texture_if_present(
            asset_server,
            config::assets::EARTH_SPECULAR,
        ),
        emissive: night_side_emissive(night_lights.is_some()),
        emissive_texture: night_lights,
        normal_map_texture: load_texture_if_present(asset_server, config::assets::EARTH_NORMAL),
        perceptual_roughness: 0.9,
        reflectance: 0.05,
        ..default()
    };

    commands
        .spawn((
            Mesh3d(meshes.add(earth_mesh)),
            MeshMaterial3d(materials.add(earth_material)),
            Transform::default(),
            EarthGlobe,
        ))
        .id()
}

/// Semi-transparent cloud sphere, slightly larger than the Earth and
/// parented to it so it inherits the spin.
///
/// The atmospheric halo shader is optional: a missing file degrades to the
/// plain cloud material with a logged warning.
fn setup_clouds(
    commands: &mut Commands,
    earth: Entity,
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    halo_materials: &mut Assets<HaloMaterial>,
) {
    let (sectors, stacks) = config::CLOUD_SEGMENTS;
    let cloud_mesh = meshes.add(Sphere::new(config::CLOUD_RADIUS).mesh().uv(sectors, stacks));

    let cloud_material = StandardMaterial {
        base_color: Color::WHITE.with_alpha(config::CLOUD_OPACITY),
        base_color_texture: load_texture_if_present(asset_server, config::assets::CLOUDS),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 1.0,
        ..default()
    };

    commands.entity(earth).with_children(|parent| {
        if halo_shader_available() {
            parent.spawn((
                Mesh3d(cloud_mesh.clone()),
                MeshMaterial3d(halo_materials.add(HaloMaterial {
                    base: cloud_material,
                    extension: CloudHalo::default(),
                })),
                Transform::default(),
            ));
        } else {
            warn!(
                "halo shader {:?} not found, rendering clouds without the halo",
                config::assets::HALO_SHADER
            );
            parent.spawn((
                Mesh3d(cloud_mesh.clone()),
                MeshMaterial3d(materials.add(cloud_material)),
                Transform::default(),
            ));
        }
    });
}

/// Emissive tint for the night side: full strength when the city-lights
/// map is present, off otherwise (a bare white emissive would wash out
/// the whole globe)
fn night_side_emissive(has_lights_map: bool) -> LinearRgba {
    if has_lights_map {
        LinearRgba::WHITE
    } else {
        LinearRgba::BLACK
    }
}

/// White clock text pinned to the top-right corner of the window
fn setup_clock_label(commands: &mut Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: config::CLOCK_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(Justify::Right),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            right: Val::Px(16.0),
            ..default()
        },
        ClockLabel,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emissive_is_disabled_without_a_lights_map() {
        assert_eq!(night_side_emissive(false), LinearRgba::BLACK);
        assert_eq!(night_side_emissive(true), LinearRgba::WHITE);
    }
}
