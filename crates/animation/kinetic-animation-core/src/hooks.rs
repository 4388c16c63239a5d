//! Lifecycle hooks: ordered read/write callbacks plus class and inline-style
//! mutations, applied to every target element around playback.
//!
//! The before phase runs at initialization, ahead of any backend work; the
//! after phase runs once the node and all of its children have finished.
//! Within a phase, read callbacks run before write callbacks so layout reads
//! batch ahead of writes.

use hashbrown::HashMap;

use crate::host::Host;
use crate::ids::ElementHandle;

/// Callbacks and element mutations for one phase (before or after).
#[derive(Default)]
pub struct PhaseHooks {
    pub read_callbacks: Vec<Box<dyn FnMut()>>,
    pub write_callbacks: Vec<Box<dyn FnMut()>>,
    pub add_classes: Vec<String>,
    pub remove_classes: Vec<String>,
    /// Inline styles to set. An empty-string value clears the inline
    /// override on the element.
    pub styles: HashMap<String, String>,
}

impl PhaseHooks {
    /// Run read callbacks, then write callbacks, in registration order.
    pub fn run_callbacks(&mut self) {
        for callback in &mut self.read_callbacks {
            callback();
        }
        for callback in &mut self.write_callbacks {
            callback();
        }
    }

    /// Apply class and inline-style mutations to every element.
    pub fn apply(&self, elements: &[ElementHandle], host: &mut dyn Host) {
        for element in elements {
            for class in &self.add_classes {
                host.add_class(*element, class);
            }
            for class in &self.remove_classes {
                host.remove_class(*element, class);
            }
            for (property, value) in &self.styles {
                host.set_style(*element, property, value);
            }
        }
    }

    /// Mark properties as cleared (empty-string inline value).
    pub fn clear_styles(&mut self, properties: &[String]) {
        for property in properties {
            self.styles.insert(property.clone(), String::new());
        }
    }
}

/// Both hook phases of a node.
#[derive(Default)]
pub struct Hooks {
    pub before: PhaseHooks,
    pub after: PhaseHooks,
}
