//! The `Host` trait: the engine's single seam to its environment.
//!
//! The engine owns no DOM. Adapters (wasm, tests) implement `Host` over a
//! real or mock document: element class/style mutation, selector queries,
//! native web-animation objects, stylesheet injection, and finish-watch
//! registration. When a watched finish event fires, the adapter routes it
//! back through [`Animator::animation_finish`](crate::Animator::animation_finish).

use crate::ids::{ElementHandle, NodeId, StylesheetHandle, WebAnimationHandle};
use crate::keyframe::Keyframe;
use crate::timing::ResolvedTiming;

pub trait Host {
    /// Whether native web-animation objects are available. Probed once per
    /// node at first initialization.
    fn supports_web_animations(&self) -> bool;

    /// Resolve a CSS selector against the live document.
    fn query_selector_all(&mut self, selector: &str) -> Vec<ElementHandle>;

    fn add_class(&mut self, element: ElementHandle, class: &str);
    fn remove_class(&mut self, element: ElementHandle, class: &str);

    /// Set an inline style. An empty-string value clears the inline
    /// override.
    fn set_style(&mut self, element: ElementHandle, property: &str, value: &str);
    fn remove_style(&mut self, element: ElementHandle, property: &str);

    /// Create a native animation object for `element`. The engine pauses it
    /// immediately after creation.
    fn create_web_animation(
        &mut self,
        element: ElementHandle,
        keyframes: &[Keyframe],
        timing: &ResolvedTiming,
    ) -> WebAnimationHandle;
    fn play_web_animation(&mut self, animation: WebAnimationHandle);
    fn pause_web_animation(&mut self, animation: WebAnimationHandle);
    fn cancel_web_animation(&mut self, animation: WebAnimationHandle);
    /// Seek the animation to an absolute time in milliseconds.
    fn seek_web_animation(&mut self, animation: WebAnimationHandle, time_ms: f64);

    /// Inject a `<style>` element carrying `css_text` into the root that
    /// scopes `element` (shadow root or document head). Returns `None` when
    /// a stylesheet with `stylesheet_id` already exists under that root.
    fn inject_keyframes_stylesheet(
        &mut self,
        element: ElementHandle,
        stylesheet_id: &str,
        css_text: &str,
    ) -> Option<StylesheetHandle>;
    fn remove_stylesheet(&mut self, stylesheet: StylesheetHandle);

    /// Ask the host to report the native animation's finish event for
    /// `node`, exactly once.
    fn watch_web_animation_finish(&mut self, animation: WebAnimationHandle, node: NodeId);

    /// Ask the host to report the element's `animationend` event for
    /// `node`, exactly once.
    fn watch_animation_end(&mut self, element: ElementHandle, node: NodeId);
}
