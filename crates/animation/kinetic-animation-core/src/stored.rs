//! Declarative animation descriptors (JSON) and tree building.
//!
//! A descriptor captures everything the fluent builder can express —
//! timing, keyframes, class/style hooks, a target selector, and nested
//! children — so component layers can ship animations as data. Parsing
//! validates offsets, durations, and iteration counts before any node is
//! created.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::engine::Animator;
use crate::error::AnimationError;
use crate::host::Host;
use crate::ids::NodeId;
use crate::keyframe::Keyframe;
use crate::timing::{Direction, Fill};

/// Declarative form of one animation node (and, recursively, its subtree).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationDescriptor {
    /// Overrides the auto-generated animation name.
    pub name: Option<String>,
    /// CSS selector resolved against the live document at build time.
    pub target: Option<String>,

    pub duration: Option<f64>,
    pub delay: Option<f64>,
    pub easing: Option<String>,
    pub iterations: Option<f64>,
    pub fill: Option<Fill>,
    pub direction: Option<Direction>,

    pub keyframes: Vec<Keyframe>,

    pub before_add_classes: Vec<String>,
    pub before_remove_classes: Vec<String>,
    pub before_styles: HashMap<String, String>,
    pub after_add_classes: Vec<String>,
    pub after_remove_classes: Vec<String>,
    pub after_styles: HashMap<String, String>,

    pub children: Vec<AnimationDescriptor>,
}

impl AnimationDescriptor {
    /// Validate offsets, durations, and iteration counts recursively.
    pub fn validate(&self) -> Result<(), AnimationError> {
        for keyframe in &self.keyframes {
            let offset = keyframe.offset;
            if !offset.is_finite() || !(0.0..=1.0).contains(&offset) {
                return Err(AnimationError::InvalidOffset { offset });
            }
        }
        if let Some(duration) = self.duration {
            if !duration.is_finite() || duration < 0.0 {
                return Err(AnimationError::InvalidDuration { duration });
            }
        }
        if let Some(iterations) = self.iterations {
            // Infinite iteration counts are valid; NaN and non-positive
            // counts are not.
            if iterations.is_nan() || iterations <= 0.0 {
                return Err(AnimationError::InvalidIterations { iterations });
            }
        }
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}

/// Parse and validate a descriptor from JSON text.
pub fn parse_animation_json(s: &str) -> Result<AnimationDescriptor, AnimationError> {
    let descriptor: AnimationDescriptor =
        serde_json::from_str(s).map_err(|e| AnimationError::Parse(e.to_string()))?;
    descriptor.validate()?;
    Ok(descriptor)
}

impl Animator {
    /// Build a node tree from a descriptor. The host resolves target
    /// selectors; children are adopted depth-first.
    pub fn build_animation(
        &mut self,
        descriptor: &AnimationDescriptor,
        host: &mut dyn Host,
    ) -> NodeId {
        let id = self.create_animation();

        if let Some(name) = &descriptor.name {
            self.set_name(id, name.clone());
        }
        if let Some(selector) = &descriptor.target {
            self.add_target(id, selector, host);
        }
        if let Some(duration) = descriptor.duration {
            self.set_duration(id, duration);
        }
        if let Some(delay) = descriptor.delay {
            self.set_delay(id, delay);
        }
        if let Some(easing) = &descriptor.easing {
            self.set_easing(id, easing.clone());
        }
        if let Some(iterations) = descriptor.iterations {
            self.set_iterations(id, iterations);
        }
        if let Some(fill) = descriptor.fill {
            self.set_fill(id, fill);
        }
        if let Some(direction) = descriptor.direction {
            self.set_direction(id, direction);
        }
        if !descriptor.keyframes.is_empty() {
            self.set_keyframes(id, descriptor.keyframes.clone());
        }

        for class in &descriptor.before_add_classes {
            self.before_add_class(id, class.clone());
        }
        for class in &descriptor.before_remove_classes {
            self.before_remove_class(id, class.clone());
        }
        if !descriptor.before_styles.is_empty() {
            self.before_styles(id, descriptor.before_styles.clone());
        }
        for class in &descriptor.after_add_classes {
            self.after_add_class(id, class.clone());
        }
        for class in &descriptor.after_remove_classes {
            self.after_remove_class(id, class.clone());
        }
        if !descriptor.after_styles.is_empty() {
            self.after_styles(id, descriptor.after_styles.clone());
        }

        for child in &descriptor.children {
            let child_id = self.build_animation(child, host);
            self.add_animation(id, child_id);
        }

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should reject offsets outside the unit interval
    #[test]
    fn invalid_offset_rejected() {
        let json = r#"{ "keyframes": [ { "offset": 1.5, "styles": { "opacity": "1" } } ] }"#;
        let err = parse_animation_json(json).unwrap_err();
        assert_eq!(err, AnimationError::InvalidOffset { offset: 1.5 });
    }

    /// it should reject negative durations
    #[test]
    fn negative_duration_rejected() {
        let json = r#"{ "duration": -20 }"#;
        let err = parse_animation_json(json).unwrap_err();
        assert_eq!(err, AnimationError::InvalidDuration { duration: -20.0 });
    }

    /// it should reject non-positive iteration counts, but allow infinity
    #[test]
    fn iterations_validation() {
        let err = parse_animation_json(r#"{ "iterations": 0 }"#).unwrap_err();
        assert_eq!(err, AnimationError::InvalidIterations { iterations: 0.0 });

        let descriptor = AnimationDescriptor {
            iterations: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(descriptor.validate().is_ok());
    }

    /// it should surface serde failures as Parse errors
    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_animation_json("{ not json").unwrap_err();
        assert!(matches!(err, AnimationError::Parse(_)));
    }

    /// it should validate children recursively
    #[test]
    fn child_validation_recurses() {
        let json = r#"{
            "children": [
                { "keyframes": [ { "offset": -0.1, "styles": {} } ] }
            ]
        }"#;
        let err = parse_animation_json(json).unwrap_err();
        assert_eq!(err, AnimationError::InvalidOffset { offset: -0.1 });
    }
}
