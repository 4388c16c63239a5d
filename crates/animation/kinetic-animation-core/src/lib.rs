//! Kinetic Animation Core (host-agnostic)
//!
//! A tree of composable animation nodes: keyframes, inheritable timing,
//! lifecycle hooks, and tree-wide playback with bottom-up completion
//! propagation. Visual interpolation is delegated to one of two backend
//! drivers — native web-animation objects or injected CSS `@keyframes` —
//! reached through the [`Host`] trait implemented by adapters.

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod host;
pub mod ids;
pub mod keyframe;
mod node;
pub mod stored;
pub mod timing;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use driver::{CssDriver, Driver, DriverContext, NativeDriver};
pub use engine::{Animator, Completion, NodeRef};
pub use error::AnimationError;
pub use host::Host;
pub use ids::{ElementHandle, IdAllocator, NameSequence, NodeId, StylesheetHandle, WebAnimationHandle};
pub use keyframe::Keyframe;
pub use stored::{parse_animation_json, AnimationDescriptor};
pub use timing::{Direction, Fill, ResolvedTiming, Timing};
