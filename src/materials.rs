//! Cloud material with the optional atmospheric halo
//!
//! The halo is a fragment-shader extension over the standard PBR material.
//! Its shader lives in the asset directory and is optional: when the file
//! is missing, scene setup falls back to the plain material and the scene
//! renders without the effect.

use bevy::pbr::{ExtendedMaterial, MaterialExtension};
use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;

use crate::config;

/// Fragment-shader extension adding a rim-lit halo to the cloud layer
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone, Default)]
pub struct CloudHalo {}

impl MaterialExtension for CloudHalo {
    fn fragment_shader() -> ShaderRef {
        config::assets::HALO_SHADER.into()
    }
}

/// Cloud material with the halo applied
pub type HaloMaterial = ExtendedMaterial<StandardMaterial, CloudHalo>;

/// Whether the halo shader asset is present on disk.
///
/// The asset server loads shaders lazily, so a missing file would only
/// surface as a render-time error. Checking up front lets setup skip the
/// effect cleanly and keep the plain cloud material.
pub fn halo_shader_available() -> bool {
    crate::assets::file_available(config::assets::HALO_SHADER)
}
