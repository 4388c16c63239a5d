//! A recording `Host` for tests: every mutation is kept as inspectable
//! state, and finish-watch registrations are logged so tests can deliver
//! completion events through `Animator::animation_finish`.

use std::collections::HashMap;

use kinetic_animation_core::{
    ElementHandle, Host, Keyframe, NodeId, ResolvedTiming, StylesheetHandle, WebAnimationHandle,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockPlayState {
    Running,
    Paused,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct MockWebAnimation {
    pub element: ElementHandle,
    pub keyframes: Vec<Keyframe>,
    pub timing: ResolvedTiming,
    pub state: MockPlayState,
    pub current_time: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct MockStylesheet {
    pub root: u32,
    pub css_id: String,
    pub css_text: String,
    pub removed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchTarget {
    WebAnimation(WebAnimationHandle),
    Element(ElementHandle),
}

/// One finish-watch registration, in chronological order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinishWatch {
    pub node: NodeId,
    pub target: WatchTarget,
}

pub struct MockHost {
    pub web_animations_supported: bool,
    next_element: u32,
    next_animation: u32,
    next_stylesheet: u32,
    pub selectors: HashMap<String, Vec<ElementHandle>>,
    pub element_roots: HashMap<ElementHandle, u32>,
    pub styles: HashMap<(ElementHandle, String), String>,
    pub removed_styles: Vec<(ElementHandle, String)>,
    pub classes: HashMap<ElementHandle, Vec<String>>,
    pub animations: HashMap<WebAnimationHandle, MockWebAnimation>,
    pub animation_order: Vec<WebAnimationHandle>,
    pub stylesheets: HashMap<StylesheetHandle, MockStylesheet>,
    pub stylesheet_order: Vec<StylesheetHandle>,
    pub finish_watches: Vec<FinishWatch>,
}

impl MockHost {
    /// A host with native web-animation support.
    pub fn native() -> Self {
        Self::new(true)
    }

    /// A host without native support, forcing the CSS fallback driver.
    pub fn css_only() -> Self {
        Self::new(false)
    }

    fn new(web_animations_supported: bool) -> Self {
        Self {
            web_animations_supported,
            next_element: 0,
            next_animation: 0,
            next_stylesheet: 0,
            selectors: HashMap::new(),
            element_roots: HashMap::new(),
            styles: HashMap::new(),
            removed_styles: Vec::new(),
            classes: HashMap::new(),
            animations: HashMap::new(),
            animation_order: Vec::new(),
            stylesheets: HashMap::new(),
            stylesheet_order: Vec::new(),
            finish_watches: Vec::new(),
        }
    }

    /// Mint an element in the default root.
    pub fn element(&mut self) -> ElementHandle {
        self.element_in_root(0)
    }

    /// Mint an element scoped to a specific root (shadow boundary).
    pub fn element_in_root(&mut self, root: u32) -> ElementHandle {
        let handle = ElementHandle(self.next_element);
        self.next_element += 1;
        self.element_roots.insert(handle, root);
        handle
    }

    /// Preset the elements a selector resolves to.
    pub fn register_selector(&mut self, selector: &str, elements: Vec<ElementHandle>) {
        self.selectors.insert(selector.to_string(), elements);
    }

    pub fn style(&self, element: ElementHandle, property: &str) -> Option<&str> {
        self.styles
            .get(&(element, property.to_string()))
            .map(String::as_str)
    }

    pub fn has_class(&self, element: ElementHandle, class: &str) -> bool {
        self.classes
            .get(&element)
            .map_or(false, |classes| classes.iter().any(|c| c == class))
    }

    /// Stylesheets still attached (injected and not removed).
    pub fn active_stylesheets(&self) -> usize {
        self.stylesheets.values().filter(|s| !s.removed).count()
    }

    /// Nodes with a registered finish watch, in registration order.
    pub fn watched_nodes(&self) -> Vec<NodeId> {
        self.finish_watches.iter().map(|w| w.node).collect()
    }

    fn root_of(&self, element: ElementHandle) -> u32 {
        self.element_roots.get(&element).copied().unwrap_or(0)
    }
}

impl Host for MockHost {
    fn supports_web_animations(&self) -> bool {
        self.web_animations_supported
    }

    fn query_selector_all(&mut self, selector: &str) -> Vec<ElementHandle> {
        self.selectors.get(selector).cloned().unwrap_or_default()
    }

    fn add_class(&mut self, element: ElementHandle, class: &str) {
        let classes = self.classes.entry(element).or_default();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementHandle, class: &str) {
        if let Some(classes) = self.classes.get_mut(&element) {
            classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, element: ElementHandle, property: &str, value: &str) {
        self.styles
            .insert((element, property.to_string()), value.to_string());
    }

    fn remove_style(&mut self, element: ElementHandle, property: &str) {
        self.styles.remove(&(element, property.to_string()));
        self.removed_styles.push((element, property.to_string()));
    }

    fn create_web_animation(
        &mut self,
        element: ElementHandle,
        keyframes: &[Keyframe],
        timing: &ResolvedTiming,
    ) -> WebAnimationHandle {
        let handle = WebAnimationHandle(self.next_animation);
        self.next_animation += 1;
        self.animations.insert(
            handle,
            MockWebAnimation {
                element,
                keyframes: keyframes.to_vec(),
                timing: timing.clone(),
                state: MockPlayState::Running,
                current_time: None,
            },
        );
        self.animation_order.push(handle);
        handle
    }

    fn play_web_animation(&mut self, animation: WebAnimationHandle) {
        if let Some(anim) = self.animations.get_mut(&animation) {
            anim.state = MockPlayState::Running;
        }
    }

    fn pause_web_animation(&mut self, animation: WebAnimationHandle) {
        if let Some(anim) = self.animations.get_mut(&animation) {
            anim.state = MockPlayState::Paused;
        }
    }

    fn cancel_web_animation(&mut self, animation: WebAnimationHandle) {
        if let Some(anim) = self.animations.get_mut(&animation) {
            anim.state = MockPlayState::Cancelled;
        }
    }

    fn seek_web_animation(&mut self, animation: WebAnimationHandle, time_ms: f64) {
        if let Some(anim) = self.animations.get_mut(&animation) {
            anim.current_time = Some(time_ms);
        }
    }

    fn inject_keyframes_stylesheet(
        &mut self,
        element: ElementHandle,
        stylesheet_id: &str,
        css_text: &str,
    ) -> Option<StylesheetHandle> {
        let root = self.root_of(element);
        let exists = self
            .stylesheets
            .values()
            .any(|s| !s.removed && s.root == root && s.css_id == stylesheet_id);
        if exists {
            return None;
        }
        let handle = StylesheetHandle(self.next_stylesheet);
        self.next_stylesheet += 1;
        self.stylesheets.insert(
            handle,
            MockStylesheet {
                root,
                css_id: stylesheet_id.to_string(),
                css_text: css_text.to_string(),
                removed: false,
            },
        );
        self.stylesheet_order.push(handle);
        Some(handle)
    }

    fn remove_stylesheet(&mut self, stylesheet: StylesheetHandle) {
        if let Some(sheet) = self.stylesheets.get_mut(&stylesheet) {
            sheet.removed = true;
        }
    }

    fn watch_web_animation_finish(&mut self, animation: WebAnimationHandle, node: NodeId) {
        self.finish_watches.push(FinishWatch {
            node,
            target: WatchTarget::WebAnimation(animation),
        });
    }

    fn watch_animation_end(&mut self, element: ElementHandle, node: NodeId) {
        self.finish_watches.push(FinishWatch {
            node,
            target: WatchTarget::Element(element),
        });
    }
}
