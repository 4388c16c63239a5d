//! Error types for descriptor parsing and validation.
//!
//! Playback commands never return errors: commands on uninitialized,
//! stopped, or destroyed nodes are silent no-ops.

use serde::{Deserialize, Serialize};

/// Errors produced while parsing or validating animation descriptors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// Descriptor JSON failed to deserialize
    #[error("descriptor parse error: {0}")]
    Parse(String),

    /// Keyframe offset outside the unit interval
    #[error("keyframe offset must be finite and in [0,1], got {offset}")]
    InvalidOffset { offset: f64 },

    /// Negative or non-finite duration
    #[error("duration must be finite and non-negative, got {duration}")]
    InvalidDuration { duration: f64 },

    /// Zero or negative iteration count
    #[error("iterations must be positive, got {iterations}")]
    InvalidIterations { iterations: f64 },
}
