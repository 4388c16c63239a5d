//! Shared fixtures for Kinetic crates: a recording [`MockHost`] plus the
//! descriptor JSON fixtures listed in `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

use kinetic_animation_core::{parse_animation_json, AnimationDescriptor};

mod mock_host;

pub use mock_host::{
    FinishWatch, MockHost, MockPlayState, MockStylesheet, MockWebAnimation, WatchTarget,
};

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    animations: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Names of all descriptor fixtures in the manifest.
pub fn animation_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.animations.keys().cloned().collect();
    names.sort();
    names
}

/// Raw JSON text of a descriptor fixture.
pub fn load_animation_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .animations
        .get(name)
        .ok_or_else(|| anyhow!("unknown animation fixture '{name}'"))?;
    read_to_string(rel)
}

/// Parsed and validated descriptor fixture.
pub fn load_animation(name: &str) -> Result<AnimationDescriptor> {
    let raw = load_animation_json(name)?;
    parse_animation_json(&raw).map_err(|e| anyhow!("fixture '{name}' failed to parse: {e}"))
}
