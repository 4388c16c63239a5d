//! Identifiers, opaque host handles, and simple allocators.

use serde::{Deserialize, Serialize};

/// Dense index of an animation node inside the [`Animator`](crate::Animator) arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque reference to a host element. Minted and owned by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(pub u32);

/// Opaque reference to a native web-animation object created by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WebAnimationHandle(pub u32);

/// Opaque reference to a stylesheet element injected by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StylesheetHandle(pub u32);

/// Monotonic allocator for NodeId.
/// Dense indices double as arena slots; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_node: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node = self.next_node.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Monotonic sequence backing auto-generated animation names.
///
/// Names feed generated `@keyframes` rules and stylesheet ids, so the
/// sequence is owned by the engine rather than hidden in module state:
/// independent engines never collide and tests run in isolation.
#[derive(Default, Debug)]
pub struct NameSequence {
    next: u64,
}

impl NameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self, prefix: &str) -> String {
        let name = format!("{prefix}-{}", self.next);
        self.next = self.next.wrapping_add(1);
        name
    }
}
