//! Core configuration for kinetic-animation-core.

use serde::{Deserialize, Serialize};

/// Configuration for engine sizing and backend policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity hint for the node arena.
    pub node_capacity: usize,

    /// Prefix for auto-generated animation names (`"<prefix>-<n>"`).
    pub name_prefix: String,

    /// Skip the web-animation capability probe and always use the CSS
    /// keyframe driver. Hosts without reliable native support (and tests
    /// pinning the fallback path) set this.
    pub force_css_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_capacity: 64,
            name_prefix: "kinetic-animation".to_string(),
            force_css_fallback: false,
        }
    }
}
