//! Animator: node arena, timing resolution, and the tree-wide playback
//! coordinator.
//!
//! Playback commands propagate top-down (children before self, so a whole
//! tree starts in the same tick); completion propagates bottom-up through a
//! per-node finish counter. `stop` is the cancellation primitive: it
//! releases backend resources without running after hooks or finish
//! callbacks.

use std::cell::Cell;
use std::rc::Rc;

use hashbrown::HashMap;

use crate::config::Config;
use crate::driver::{select_driver, Driver, DriverContext};
use crate::host::Host;
use crate::ids::{ElementHandle, IdAllocator, NameSequence, NodeId};
use crate::keyframe::{merge_from, merge_to, Keyframe};
use crate::node::AnimationNode;
use crate::timing::{Direction, Fill, ResolvedTiming};

/// Completion latch returned by [`Animator::play_async`]. Single-threaded,
/// like the engine itself.
#[derive(Clone, Debug, Default)]
pub struct Completion {
    done: Rc<Cell<bool>>,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.done.get()
    }
}

/// Owns every animation node and coordinates playback across the tree.
pub struct Animator {
    cfg: Config,
    ids: IdAllocator,
    names: NameSequence,
    nodes: Vec<AnimationNode>,
}

impl Animator {
    pub fn new(cfg: Config) -> Self {
        let nodes = Vec::with_capacity(cfg.node_capacity);
        Self {
            cfg,
            ids: IdAllocator::new(),
            names: NameSequence::new(),
            nodes,
        }
    }

    /// Create a detached node with an auto-generated name.
    pub fn create_animation(&mut self) -> NodeId {
        let id = self.ids.alloc_node();
        let name = self.names.next_name(&self.cfg.name_prefix);
        self.nodes.push(AnimationNode::new(id, name));
        id
    }

    /// Fluent builder handle over an existing node.
    pub fn animation(&mut self, id: NodeId) -> NodeRef<'_> {
        NodeRef { animator: self, id }
    }

    /// Create a node and hand back its builder.
    pub fn new_animation(&mut self) -> NodeRef<'_> {
        let id = self.create_animation();
        NodeRef { animator: self, id }
    }

    #[inline]
    fn get(&self, id: NodeId) -> Option<&AnimationNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    fn alive(&self, id: NodeId) -> bool {
        self.get(id).map_or(false, |node| !node.destroyed)
    }

    // ---- target selection ------------------------------------------------

    pub fn add_element(&mut self, id: NodeId, element: ElementHandle) {
        if self.alive(id) {
            self.nodes[id.index()].elements.push(element);
        }
    }

    pub fn add_elements(&mut self, id: NodeId, elements: &[ElementHandle]) {
        if self.alive(id) {
            self.nodes[id.index()].elements.extend_from_slice(elements);
        }
    }

    /// Resolve a selector against the live document and adopt the matches.
    pub fn add_target(&mut self, id: NodeId, selector: &str, host: &mut dyn Host) {
        if self.alive(id) {
            let elements = host.query_selector_all(selector);
            self.nodes[id.index()].elements.extend(elements);
        }
    }

    // ---- keyframe construction -------------------------------------------

    pub fn from(&mut self, id: NodeId, property: &str, value: impl Into<String>) {
        if self.alive(id) {
            merge_from(&mut self.nodes[id.index()].keyframes, property, value.into());
        }
    }

    pub fn to(&mut self, id: NodeId, property: &str, value: impl Into<String>) {
        if self.alive(id) {
            merge_to(&mut self.nodes[id.index()].keyframes, property, value.into());
        }
    }

    pub fn from_to(
        &mut self,
        id: NodeId,
        property: &str,
        from_value: impl Into<String>,
        to_value: impl Into<String>,
    ) {
        self.from(id, property, from_value);
        self.to(id, property, to_value);
    }

    /// Replace the keyframe list wholesale. Offsets are taken as provided.
    pub fn set_keyframes(&mut self, id: NodeId, keyframes: Vec<Keyframe>) {
        if self.alive(id) {
            self.nodes[id.index()].keyframes = keyframes;
        }
    }

    pub fn get_keyframes(&self, id: NodeId) -> &[Keyframe] {
        match self.get(id) {
            Some(node) => &node.keyframes,
            None => &[],
        }
    }

    // ---- timing configuration --------------------------------------------

    pub fn set_duration(&mut self, id: NodeId, duration_ms: f64) {
        if self.alive(id) {
            self.nodes[id.index()].timing.duration = Some(duration_ms);
        }
    }

    pub fn set_delay(&mut self, id: NodeId, delay_ms: f64) {
        if self.alive(id) {
            self.nodes[id.index()].timing.delay = Some(delay_ms);
        }
    }

    pub fn set_easing(&mut self, id: NodeId, easing: impl Into<String>) {
        if self.alive(id) {
            self.nodes[id.index()].timing.easing = Some(easing.into());
        }
    }

    pub fn set_iterations(&mut self, id: NodeId, iterations: f64) {
        if self.alive(id) {
            self.nodes[id.index()].timing.iterations = Some(iterations);
        }
    }

    pub fn set_fill(&mut self, id: NodeId, fill: Fill) {
        if self.alive(id) {
            self.nodes[id.index()].timing.fill = Some(fill);
        }
    }

    pub fn set_direction(&mut self, id: NodeId, direction: Direction) {
        if self.alive(id) {
            self.nodes[id.index()].timing.direction = Some(direction);
        }
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if self.alive(id) {
            self.nodes[id.index()].name = name.into();
        }
    }

    pub fn get_name(&self, id: NodeId) -> &str {
        self.get(id).map_or("", |node| node.name.as_str())
    }

    // ---- timing resolution -----------------------------------------------
    //
    // Precedence, highest first: playback-mode override, own explicit
    // value, parent's resolved value, None.

    pub fn get_duration(&self, id: NodeId) -> Option<f64> {
        let node = self.get(id)?;
        if node.force_sync_playback {
            return Some(0.0);
        }
        if let Some(duration) = node.timing.duration {
            return Some(duration);
        }
        node.parent.and_then(|parent| self.get_duration(parent))
    }

    pub fn get_delay(&self, id: NodeId) -> Option<f64> {
        let node = self.get(id)?;
        if let Some(delay) = node.timing.delay {
            return Some(delay);
        }
        node.parent.and_then(|parent| self.get_delay(parent))
    }

    pub fn get_easing(&self, id: NodeId) -> Option<String> {
        let node = self.get(id)?;
        if node.force_linear_easing {
            return Some("linear".to_string());
        }
        if let Some(easing) = &node.timing.easing {
            return Some(easing.clone());
        }
        node.parent.and_then(|parent| self.get_easing(parent))
    }

    pub fn get_iterations(&self, id: NodeId) -> Option<f64> {
        let node = self.get(id)?;
        if let Some(iterations) = node.timing.iterations {
            return Some(iterations);
        }
        node.parent.and_then(|parent| self.get_iterations(parent))
    }

    pub fn get_fill(&self, id: NodeId) -> Option<Fill> {
        let node = self.get(id)?;
        if let Some(fill) = node.timing.fill {
            return Some(fill);
        }
        node.parent.and_then(|parent| self.get_fill(parent))
    }

    pub fn get_direction(&self, id: NodeId) -> Option<Direction> {
        let node = self.get(id)?;
        if let Some(direction) = node.timing.direction {
            return Some(direction);
        }
        node.parent.and_then(|parent| self.get_direction(parent))
    }

    /// Snapshot all six resolved timing properties.
    pub fn resolved_timing(&self, id: NodeId) -> ResolvedTiming {
        ResolvedTiming {
            duration: self.get_duration(id),
            delay: self.get_delay(id),
            easing: self.get_easing(id),
            iterations: self.get_iterations(id),
            fill: self.get_fill(id),
            direction: self.get_direction(id),
        }
    }

    /// Whether forced-sync playback reaches this node through the same
    /// inheritance path as `get_duration`: an explicit duration shields a
    /// node from an ancestor's force flag.
    fn sync_playback_active(&self, id: NodeId) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        if node.force_sync_playback {
            return true;
        }
        if node.timing.duration.is_some() {
            return false;
        }
        node.parent
            .map_or(false, |parent| self.sync_playback_active(parent))
    }

    // ---- composition -----------------------------------------------------

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Adopt `child` under `id`, setting the child's parent back-reference.
    /// A child is detached from any previous parent first; adds that would
    /// create a cycle are rejected.
    pub fn add_animation(&mut self, id: NodeId, child: NodeId) {
        if !self.alive(id) || !self.alive(child) {
            return;
        }
        if id == child || self.is_ancestor(child, id) {
            log::warn!("add_animation rejected: {child:?} is an ancestor of {id:?}");
            return;
        }
        if let Some(old_parent) = self.nodes[child.index()].parent {
            if old_parent == id {
                return;
            }
            self.nodes[old_parent.index()]
                .children
                .retain(|existing| *existing != child);
        }
        self.nodes[child.index()].parent = Some(id);
        self.nodes[id.index()].children.push(child);
    }

    pub fn add_animations(&mut self, id: NodeId, children: &[NodeId]) {
        for child in children {
            self.add_animation(id, *child);
        }
    }

    /// Set the parent back-reference only, without adopting into a child
    /// list. `add_animation` is the usual entry point.
    pub fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if !self.alive(id) || !self.alive(parent) {
            return;
        }
        if id == parent || self.is_ancestor(id, parent) {
            log::warn!("set_parent rejected: {id:?} is an ancestor of {parent:?}");
            return;
        }
        self.nodes[id.index()].parent = Some(parent);
    }

    fn is_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = self.get(of).and_then(|node| node.parent);
        while let Some(parent) = current {
            if parent == candidate {
                return true;
            }
            current = self.get(parent).and_then(|node| node.parent);
        }
        false
    }

    // ---- hooks -----------------------------------------------------------

    pub fn before_add_read(&mut self, id: NodeId, callback: impl FnMut() + 'static) {
        if self.alive(id) {
            self.nodes[id.index()]
                .hooks
                .before
                .read_callbacks
                .push(Box::new(callback));
        }
    }

    pub fn before_add_write(&mut self, id: NodeId, callback: impl FnMut() + 'static) {
        if self.alive(id) {
            self.nodes[id.index()]
                .hooks
                .before
                .write_callbacks
                .push(Box::new(callback));
        }
    }

    pub fn after_add_read(&mut self, id: NodeId, callback: impl FnMut() + 'static) {
        if self.alive(id) {
            self.nodes[id.index()]
                .hooks
                .after
                .read_callbacks
                .push(Box::new(callback));
        }
    }

    pub fn after_add_write(&mut self, id: NodeId, callback: impl FnMut() + 'static) {
        if self.alive(id) {
            self.nodes[id.index()]
                .hooks
                .after
                .write_callbacks
                .push(Box::new(callback));
        }
    }

    pub fn before_add_class(&mut self, id: NodeId, class: impl Into<String>) {
        if self.alive(id) {
            self.nodes[id.index()].hooks.before.add_classes.push(class.into());
        }
    }

    pub fn before_remove_class(&mut self, id: NodeId, class: impl Into<String>) {
        if self.alive(id) {
            self.nodes[id.index()]
                .hooks
                .before
                .remove_classes
                .push(class.into());
        }
    }

    /// Replace the before-phase inline styles wholesale.
    pub fn before_styles(&mut self, id: NodeId, styles: HashMap<String, String>) {
        if self.alive(id) {
            self.nodes[id.index()].hooks.before.styles = styles;
        }
    }

    pub fn before_clear_styles(&mut self, id: NodeId, properties: &[String]) {
        if self.alive(id) {
            self.nodes[id.index()].hooks.before.clear_styles(properties);
        }
    }

    pub fn after_add_class(&mut self, id: NodeId, class: impl Into<String>) {
        if self.alive(id) {
            self.nodes[id.index()].hooks.after.add_classes.push(class.into());
        }
    }

    pub fn after_remove_class(&mut self, id: NodeId, class: impl Into<String>) {
        if self.alive(id) {
            self.nodes[id.index()]
                .hooks
                .after
                .remove_classes
                .push(class.into());
        }
    }

    /// Replace the after-phase inline styles wholesale.
    pub fn after_styles(&mut self, id: NodeId, styles: HashMap<String, String>) {
        if self.alive(id) {
            self.nodes[id.index()].hooks.after.styles = styles;
        }
    }

    pub fn after_clear_styles(&mut self, id: NodeId, properties: &[String]) {
        if self.alive(id) {
            self.nodes[id.index()].hooks.after.clear_styles(properties);
        }
    }

    pub fn on_finish(&mut self, id: NodeId, callback: impl FnMut(NodeId) + 'static) {
        if self.alive(id) {
            self.nodes[id.index()]
                .finish_callbacks
                .push(Box::new(callback));
        }
    }

    // ---- playback --------------------------------------------------------

    pub fn is_initialized(&self, id: NodeId) -> bool {
        self.get(id).map_or(false, |node| node.initialized)
    }

    /// Start the tree: children first, then this node. Initialization runs
    /// before hooks and allocates backend resources only when the node is
    /// not already initialized; natural completion and `stop` both return a
    /// node to uninitialized.
    pub fn play(&mut self, id: NodeId, host: &mut dyn Host) {
        if !self.alive(id) {
            return;
        }
        let starting = self.begin_initialization(id);
        let children = self.nodes[id.index()].children.clone();
        for child in children {
            self.play(child, host);
        }
        if starting {
            self.finish_initialization(id, host);
        }
        self.with_backend(id, host, |backend, ctx, host| backend.resume(ctx, host));
    }

    /// Play and hand back a completion latch.
    pub fn play_async(&mut self, id: NodeId, host: &mut dyn Host) -> Completion {
        let completion = Completion::default();
        let latch = completion.done.clone();
        self.on_finish(id, move |_| latch.set(true));
        self.play(id, host);
        completion
    }

    /// Play with the effective duration forced to zero, so the tree jumps
    /// to its end state while still running the full hook and completion
    /// protocol. The override clears itself on completion.
    pub fn play_sync(&mut self, id: NodeId, host: &mut dyn Host) {
        if !self.alive(id) {
            return;
        }
        self.nodes[id.index()].force_sync_playback = true;
        self.play(id, host);
    }

    /// Pause backends without releasing resources; a paused node stays
    /// initialized.
    pub fn pause(&mut self, id: NodeId, host: &mut dyn Host) {
        if !self.alive(id) {
            return;
        }
        let children = self.nodes[id.index()].children.clone();
        for child in children {
            self.pause(child, host);
        }
        if self.nodes[id.index()].initialized {
            self.with_backend(id, host, |backend, ctx, host| backend.pause(ctx, host));
        }
    }

    /// Cancel: release backend resources and return to uninitialized.
    /// After hooks and finish callbacks do not run.
    pub fn stop(&mut self, id: NodeId, host: &mut dyn Host) {
        if !self.alive(id) {
            return;
        }
        let children = self.nodes[id.index()].children.clone();
        for child in children {
            self.stop(child, host);
        }
        let index = id.index();
        if self.nodes[index].initialized {
            self.teardown_backend(id, host);
            self.nodes[index].num_animations_running = 0;
            self.nodes[index].initialized = false;
        }
    }

    /// Stop, then release element, child, and callback references. The node
    /// is permanently unusable afterwards; every later command is a no-op.
    pub fn destroy(&mut self, id: NodeId, host: &mut dyn Host) {
        if !self.alive(id) {
            return;
        }
        let children = self.nodes[id.index()].children.clone();
        for child in &children {
            self.destroy(*child, host);
        }
        self.stop(id, host);
        // Null the back-references before dropping the links.
        for child in &children {
            self.nodes[child.index()].parent = None;
        }
        let node = &mut self.nodes[id.index()];
        node.elements.clear();
        node.children.clear();
        node.finish_callbacks.clear();
        node.destroyed = true;
    }

    /// Prepare the tree for manual scrubbing: initialize paused at position
    /// zero, with easing forced linear when requested.
    pub fn progress_start(&mut self, id: NodeId, force_linear_easing: bool, host: &mut dyn Host) {
        if !self.alive(id) {
            return;
        }
        let starting = self.begin_initialization(id);
        let children = self.nodes[id.index()].children.clone();
        for child in children {
            self.progress_start(child, force_linear_easing, host);
        }
        self.nodes[id.index()].force_linear_easing = force_linear_easing;
        if starting {
            self.finish_initialization(id, host);
        }
    }

    /// Seek the paused tree to a fraction of its resolved duration. The
    /// step is clamped to [0, 0.99]: seeking exactly to the total duration
    /// makes native backends report completion.
    pub fn progress_step(&mut self, id: NodeId, step: f64, host: &mut dyn Host) {
        if !self.alive(id) {
            return;
        }
        let step = if step.is_finite() {
            step.clamp(0.0, 0.99)
        } else {
            0.0
        };
        let children = self.nodes[id.index()].children.clone();
        for child in children {
            self.progress_step(child, step, host);
        }
        if self.get_duration(id).is_some() {
            self.with_backend(id, host, |backend, ctx, host| backend.seek(ctx, host, step));
        } else {
            log::debug!("progress_step: no resolved duration for {id:?}, seek skipped");
        }
    }

    /// End a scrub and resume forward playback with the authored easing.
    /// `should_complete` and `step` are currently inert; playback always
    /// resumes forward.
    pub fn progress_end(
        &mut self,
        id: NodeId,
        should_complete: bool,
        step: f64,
        host: &mut dyn Host,
    ) {
        if !self.alive(id) {
            return;
        }
        log::debug!("progress_end: should_complete={should_complete} step={step}");
        self.clear_linear_easing(id);
        // Rebuild the backend from scratch so the scrub-time linear easing
        // does not leak into resumed playback.
        self.stop(id, host);
        self.play(id, host);
    }

    fn clear_linear_easing(&mut self, id: NodeId) {
        if !self.alive(id) {
            return;
        }
        let children = self.nodes[id.index()].children.clone();
        for child in children {
            self.clear_linear_easing(child);
        }
        self.nodes[id.index()].force_linear_easing = false;
    }

    // ---- completion ------------------------------------------------------

    /// Report one finished animation for this node: the node's own backend
    /// (routed here by the host adapter) or a completed child. On reaching
    /// zero outstanding animations the after phase runs and the completion
    /// bubbles one level up.
    pub fn animation_finish(&mut self, id: NodeId, host: &mut dyn Host) {
        if !self.alive(id) {
            return;
        }
        let index = id.index();
        // Late or duplicate events are dropped.
        if self.nodes[index].num_animations_running == 0 {
            return;
        }
        self.nodes[index].num_animations_running -= 1;
        if self.nodes[index].num_animations_running == 0 {
            self.after_animation(id, host);
            if let Some(parent) = self.nodes[index].parent {
                self.animation_finish(parent, host);
            }
        }
    }

    // ---- internals -------------------------------------------------------

    /// Allocate the finish counter ahead of the child cascade, so children
    /// that complete synchronously (structural or forced-sync nodes) can
    /// bubble in before this node's own backend work happens. Returns
    /// whether this call started an initialization.
    fn begin_initialization(&mut self, id: NodeId) -> bool {
        let index = id.index();
        if self.nodes[index].initialized {
            return false;
        }
        self.nodes[index].initialized = true;
        self.nodes[index].num_animations_running =
            self.nodes[index].children.len() as u32 + 1;
        true
    }

    /// Run before hooks and allocate the backend (or complete immediately
    /// for structural and forced-sync nodes). Children have already been
    /// started by the caller.
    fn finish_initialization(&mut self, id: NodeId, host: &mut dyn Host) {
        let index = id.index();

        self.run_before_phase(id, host);

        if self.nodes[index].keyframes.is_empty() || self.sync_playback_active(id) {
            self.animation_finish(id, host);
        } else {
            let mut backend = select_driver(&self.cfg, host);
            {
                let node = &self.nodes[index];
                let ctx = DriverContext {
                    node: id,
                    name: &node.name,
                    elements: &node.elements,
                    keyframes: &node.keyframes,
                    timing: self.resolved_timing(id),
                };
                backend.init(&ctx, host);
            }
            self.nodes[index].backend = Some(backend);
        }
    }

    fn run_before_phase(&mut self, id: NodeId, host: &mut dyn Host) {
        let index = id.index();
        self.nodes[index].hooks.before.run_callbacks();
        let node = &self.nodes[index];
        node.hooks.before.apply(&node.elements, host);
    }

    fn after_animation(&mut self, id: NodeId, host: &mut dyn Host) {
        let index = id.index();
        self.nodes[index].hooks.after.run_callbacks();
        {
            let node = &self.nodes[index];
            node.hooks.after.apply(&node.elements, host);
        }
        // Natural completion returns the node to idle: backend resources
        // are released, and after styles/classes are how completed visual
        // state persists. The next play re-initializes from scratch.
        self.teardown_backend(id, host);
        self.nodes[index].initialized = false;
        self.nodes[index].force_sync_playback = false;

        let mut callbacks = std::mem::take(&mut self.nodes[index].finish_callbacks);
        for callback in &mut callbacks {
            callback(id);
        }
        // Callbacks may themselves register callbacks; keep those behind
        // the originals.
        let registered_during = std::mem::take(&mut self.nodes[index].finish_callbacks);
        callbacks.extend(registered_during);
        self.nodes[index].finish_callbacks = callbacks;
    }

    fn with_backend(
        &mut self,
        id: NodeId,
        host: &mut dyn Host,
        operation: impl FnOnce(&mut Box<dyn Driver>, &DriverContext<'_>, &mut dyn Host),
    ) {
        let index = id.index();
        if let Some(mut backend) = self.nodes[index].backend.take() {
            {
                let node = &self.nodes[index];
                let ctx = DriverContext {
                    node: id,
                    name: &node.name,
                    elements: &node.elements,
                    keyframes: &node.keyframes,
                    timing: self.resolved_timing(id),
                };
                operation(&mut backend, &ctx, host);
            }
            self.nodes[index].backend = Some(backend);
        }
    }

    fn teardown_backend(&mut self, id: NodeId, host: &mut dyn Host) {
        let index = id.index();
        if let Some(mut backend) = self.nodes[index].backend.take() {
            let node = &self.nodes[index];
            let ctx = DriverContext {
                node: id,
                name: &node.name,
                elements: &node.elements,
                keyframes: &node.keyframes,
                timing: self.resolved_timing(id),
            };
            backend.teardown(&ctx, host);
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Fluent, chainable view of one node. Builders return the handle; playback
/// commands additionally take the host.
pub struct NodeRef<'a> {
    animator: &'a mut Animator,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn add_element(self, element: ElementHandle) -> Self {
        self.animator.add_element(self.id, element);
        self
    }

    pub fn add_elements(self, elements: &[ElementHandle]) -> Self {
        self.animator.add_elements(self.id, elements);
        self
    }

    pub fn add_target(self, selector: &str, host: &mut dyn Host) -> Self {
        self.animator.add_target(self.id, selector, host);
        self
    }

    pub fn from(self, property: &str, value: impl Into<String>) -> Self {
        self.animator.from(self.id, property, value);
        self
    }

    pub fn to(self, property: &str, value: impl Into<String>) -> Self {
        self.animator.to(self.id, property, value);
        self
    }

    pub fn from_to(
        self,
        property: &str,
        from_value: impl Into<String>,
        to_value: impl Into<String>,
    ) -> Self {
        self.animator.from_to(self.id, property, from_value, to_value);
        self
    }

    pub fn keyframes(self, keyframes: Vec<Keyframe>) -> Self {
        self.animator.set_keyframes(self.id, keyframes);
        self
    }

    pub fn duration(self, duration_ms: f64) -> Self {
        self.animator.set_duration(self.id, duration_ms);
        self
    }

    pub fn delay(self, delay_ms: f64) -> Self {
        self.animator.set_delay(self.id, delay_ms);
        self
    }

    pub fn easing(self, easing: impl Into<String>) -> Self {
        self.animator.set_easing(self.id, easing);
        self
    }

    pub fn iterations(self, iterations: f64) -> Self {
        self.animator.set_iterations(self.id, iterations);
        self
    }

    pub fn fill(self, fill: Fill) -> Self {
        self.animator.set_fill(self.id, fill);
        self
    }

    pub fn direction(self, direction: Direction) -> Self {
        self.animator.set_direction(self.id, direction);
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.animator.set_name(self.id, name);
        self
    }

    pub fn add_animation(self, child: NodeId) -> Self {
        self.animator.add_animation(self.id, child);
        self
    }

    pub fn add_animations(self, children: &[NodeId]) -> Self {
        self.animator.add_animations(self.id, children);
        self
    }

    pub fn parent(self, parent: NodeId) -> Self {
        self.animator.set_parent(self.id, parent);
        self
    }

    pub fn before_add_read(self, callback: impl FnMut() + 'static) -> Self {
        self.animator.before_add_read(self.id, callback);
        self
    }

    pub fn before_add_write(self, callback: impl FnMut() + 'static) -> Self {
        self.animator.before_add_write(self.id, callback);
        self
    }

    pub fn after_add_read(self, callback: impl FnMut() + 'static) -> Self {
        self.animator.after_add_read(self.id, callback);
        self
    }

    pub fn after_add_write(self, callback: impl FnMut() + 'static) -> Self {
        self.animator.after_add_write(self.id, callback);
        self
    }

    pub fn before_add_class(self, class: impl Into<String>) -> Self {
        self.animator.before_add_class(self.id, class);
        self
    }

    pub fn before_remove_class(self, class: impl Into<String>) -> Self {
        self.animator.before_remove_class(self.id, class);
        self
    }

    pub fn before_styles(self, styles: HashMap<String, String>) -> Self {
        self.animator.before_styles(self.id, styles);
        self
    }

    pub fn before_clear_styles(self, properties: &[String]) -> Self {
        self.animator.before_clear_styles(self.id, properties);
        self
    }

    pub fn after_add_class(self, class: impl Into<String>) -> Self {
        self.animator.after_add_class(self.id, class);
        self
    }

    pub fn after_remove_class(self, class: impl Into<String>) -> Self {
        self.animator.after_remove_class(self.id, class);
        self
    }

    pub fn after_styles(self, styles: HashMap<String, String>) -> Self {
        self.animator.after_styles(self.id, styles);
        self
    }

    pub fn after_clear_styles(self, properties: &[String]) -> Self {
        self.animator.after_clear_styles(self.id, properties);
        self
    }

    pub fn on_finish(self, callback: impl FnMut(NodeId) + 'static) -> Self {
        self.animator.on_finish(self.id, callback);
        self
    }

    pub fn play(self, host: &mut dyn Host) -> Self {
        self.animator.play(self.id, host);
        self
    }

    pub fn play_async(self, host: &mut dyn Host) -> Completion {
        self.animator.play_async(self.id, host)
    }

    pub fn play_sync(self, host: &mut dyn Host) -> Self {
        self.animator.play_sync(self.id, host);
        self
    }

    pub fn pause(self, host: &mut dyn Host) -> Self {
        self.animator.pause(self.id, host);
        self
    }

    pub fn stop(self, host: &mut dyn Host) -> Self {
        self.animator.stop(self.id, host);
        self
    }

    pub fn destroy(self, host: &mut dyn Host) -> Self {
        self.animator.destroy(self.id, host);
        self
    }

    pub fn progress_start(self, force_linear_easing: bool, host: &mut dyn Host) -> Self {
        self.animator.progress_start(self.id, force_linear_easing, host);
        self
    }

    pub fn progress_step(self, step: f64, host: &mut dyn Host) -> Self {
        self.animator.progress_step(self.id, step, host);
        self
    }

    pub fn progress_end(self, should_complete: bool, step: f64, host: &mut dyn Host) -> Self {
        self.animator.progress_end(self.id, should_complete, step, host);
        self
    }

    pub fn get_keyframes(&self) -> &[Keyframe] {
        self.animator.get_keyframes(self.id)
    }

    pub fn get_duration(&self) -> Option<f64> {
        self.animator.get_duration(self.id)
    }

    pub fn get_delay(&self) -> Option<f64> {
        self.animator.get_delay(self.id)
    }

    pub fn get_easing(&self) -> Option<String> {
        self.animator.get_easing(self.id)
    }

    pub fn get_iterations(&self) -> Option<f64> {
        self.animator.get_iterations(self.id)
    }

    pub fn get_fill(&self) -> Option<Fill> {
        self.animator.get_fill(self.id)
    }

    pub fn get_direction(&self) -> Option<Direction> {
        self.animator.get_direction(self.id)
    }
}
