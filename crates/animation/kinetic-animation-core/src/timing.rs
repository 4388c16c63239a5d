//! Timing parameters: per-node overrides and the resolved snapshot.
//!
//! A node's `Timing` holds only its own explicit values. Resolution (walking
//! the parent chain and applying playback-mode overrides) lives on
//! [`Animator`](crate::Animator); drivers and hosts receive the flattened
//! [`ResolvedTiming`].

use serde::{Deserialize, Serialize};

/// CSS `animation-fill-mode` values.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fill {
    Auto,
    None,
    Forwards,
    Backwards,
    Both,
}

impl Fill {
    #[inline]
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
            Self::Forwards => "forwards",
            Self::Backwards => "backwards",
            Self::Both => "both",
        }
    }
}

/// CSS `animation-direction` values.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl Direction {
    #[inline]
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reverse => "reverse",
            Self::Alternate => "alternate",
            Self::AlternateReverse => "alternate-reverse",
        }
    }
}

/// Per-node timing overrides. `None` means "inherit from the parent chain";
/// a fully unset chain resolves to `None` (host default).
///
/// Durations and delays are milliseconds. Iterations may be
/// `f64::INFINITY`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Timing {
    pub duration: Option<f64>,
    pub delay: Option<f64>,
    pub easing: Option<String>,
    pub iterations: Option<f64>,
    pub fill: Option<Fill>,
    pub direction: Option<Direction>,
}

/// Flattened timing snapshot handed to backend drivers and hosts.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolvedTiming {
    pub duration: Option<f64>,
    pub delay: Option<f64>,
    pub easing: Option<String>,
    pub iterations: Option<f64>,
    pub fill: Option<Fill>,
    pub direction: Option<Direction>,
}
