//! Keyframe data model and the boundary-merge builder operations.
//!
//! `merge_from`/`merge_to` back the fluent `from`/`to`/`from_to` calls:
//! repeated calls for different properties fold into the single offset-0 or
//! offset-1 boundary frame instead of appending duplicates. Most animation
//! backends reject (or resolve unpredictably) conflicting same-offset
//! frames, so the list holds at most one frame per boundary once built this
//! way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One keyframe: a required offset in [0,1] plus CSS property/value pairs.
/// The BTreeMap keeps generated `@keyframes` text stable.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    pub offset: f64,
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
}

impl Keyframe {
    pub fn at(offset: f64) -> Self {
        Self {
            offset,
            styles: BTreeMap::new(),
        }
    }

    /// Builder-style property setter, mainly for tests and fixtures.
    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.styles.insert(property.to_string(), value.to_string());
        self
    }
}

/// Merge a property into the offset-0 boundary frame, prepending one if the
/// list does not start with it.
pub fn merge_from(keyframes: &mut Vec<Keyframe>, property: &str, value: String) {
    match keyframes.first_mut() {
        Some(first) if first.offset == 0.0 => {
            first.styles.insert(property.to_string(), value);
        }
        _ => {
            let mut frame = Keyframe::at(0.0);
            frame.styles.insert(property.to_string(), value);
            keyframes.insert(0, frame);
        }
    }
}

/// Merge a property into the offset-1 boundary frame, appending one if the
/// list does not end with it.
pub fn merge_to(keyframes: &mut Vec<Keyframe>, property: &str, value: String) {
    match keyframes.last_mut() {
        Some(last) if last.offset == 1.0 => {
            last.styles.insert(property.to_string(), value);
        }
        _ => {
            let mut frame = Keyframe::at(1.0);
            frame.styles.insert(property.to_string(), value);
            keyframes.push(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should merge repeated from() calls into one offset-0 frame
    #[test]
    fn from_merges_into_boundary_frame() {
        let mut frames = Vec::new();
        merge_from(&mut frames, "opacity", "0".into());
        merge_from(&mut frames, "transform", "translateX(40px)".into());
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].offset, 0.0);
        assert_eq!(frames[0].styles["opacity"], "0");
        assert_eq!(frames[0].styles["transform"], "translateX(40px)");
    }

    /// it should keep from/to boundaries distinct and ordered
    #[test]
    fn from_then_to_yields_two_boundaries() {
        let mut frames = Vec::new();
        merge_from(&mut frames, "opacity", "0".into());
        merge_to(&mut frames, "opacity", "1".into());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].offset, 0.0);
        assert_eq!(frames[1].offset, 1.0);
    }

    /// it should prepend a fresh offset-0 frame when the list starts mid-way
    #[test]
    fn from_prepends_before_interior_frames() {
        let mut frames = vec![Keyframe::at(0.5).style("opacity", "0.5")];
        merge_from(&mut frames, "opacity", "0".into());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].offset, 0.0);
        assert_eq!(frames[1].offset, 0.5);
    }

    /// it should overwrite the same property on repeated merges
    #[test]
    fn repeated_property_overwrites() {
        let mut frames = Vec::new();
        merge_to(&mut frames, "opacity", "0.4".into());
        merge_to(&mut frames, "opacity", "1".into());
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].styles["opacity"], "1");
    }
}
