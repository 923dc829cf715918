//! Optional asset lookup
//!
//! The texture maps and the halo shader are looked up by path and all of
//! them are optional. A handle pointing at a missing file would keep its
//! material from ever finishing bind-group preparation, leaving the mesh
//! invisible, so material slots are only filled when the file is actually
//! present on disk; a missing file logs a warning and the slot stays
//! empty.

use std::path::PathBuf;

use bevy::prelude::*;

/// Asset root directory, resolved the same way Bevy's file asset reader
/// resolves it: `BEVY_ASSET_ROOT`, then `CARGO_MANIFEST_DIR`, then the
/// directory of the running executable.
pub fn asset_root() -> PathBuf {
    if let Ok(root) = std::env::var("BEVY_ASSET_ROOT") {
        return PathBuf::from(root);
    }
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        return PathBuf::from(manifest_dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_default()
}

/// Whether an asset file exists, `path` relative to the `assets` directory
pub fn file_available(path: &str) -> bool {
    asset_root().join("assets").join(path).is_file()
}

/// Load a texture if its file is present, leaving the slot empty otherwise
pub fn load_texture_if_present(
    asset_server: &AssetServer,
    path: &str,
) -> Option<Handle<Image>> {
    if file_available(path) {
        Some(asset_server.load(path.to_owned()))
    } else {
        warn!("texture {path:?} not found, leaving that material slot empty");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn committed_assets_are_found_from_the_crate_root() {
        // The halo shader ships with the crate, so the probe must agree
        // with what the asset server can load
        assert!(file_available(config::assets::HALO_SHADER));
    }

    #[test]
    fn missing_files_are_reported_absent() {
        assert!(!file_available("textures/no_such_file.ktx2"));
    }

    #[test]
    fn asset_root_is_the_manifest_dir_under_cargo() {
        // cargo always sets CARGO_MANIFEST_DIR for test runs
        assert!(asset_root().join("Cargo.toml").is_file());
    }
}
