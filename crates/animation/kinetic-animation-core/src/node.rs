//! The arena-stored animation node. Crate-private: all access goes through
//! [`Animator`](crate::Animator).

use crate::driver::Driver;
use crate::hooks::Hooks;
use crate::ids::{ElementHandle, NodeId};
use crate::keyframe::Keyframe;
use crate::timing::{Fill, Timing};

pub(crate) struct AnimationNode {
    pub(crate) id: NodeId,
    pub(crate) name: String,

    pub(crate) elements: Vec<ElementHandle>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,

    pub(crate) keyframes: Vec<Keyframe>,
    pub(crate) timing: Timing,
    pub(crate) hooks: Hooks,

    pub(crate) initialized: bool,
    pub(crate) destroyed: bool,
    /// Outstanding completions: own backend plus currently-running children.
    pub(crate) num_animations_running: u32,
    pub(crate) force_linear_easing: bool,
    pub(crate) force_sync_playback: bool,

    pub(crate) backend: Option<Box<dyn Driver>>,
    pub(crate) finish_callbacks: Vec<Box<dyn FnMut(NodeId)>>,
}

impl AnimationNode {
    pub(crate) fn new(id: NodeId, name: String) -> Self {
        Self {
            id,
            name,
            elements: Vec::new(),
            parent: None,
            children: Vec::new(),
            keyframes: Vec::new(),
            timing: Timing {
                // New nodes hold their end state unless told otherwise.
                fill: Some(Fill::Forwards),
                ..Timing::default()
            },
            hooks: Hooks::default(),
            initialized: false,
            destroyed: false,
            num_animations_running: 0,
            force_linear_easing: false,
            force_sync_playback: false,
            backend: None,
            finish_callbacks: Vec::new(),
        }
    }
}
