//! wasm-bindgen interface for the Kinetic animation engine.
//!
//! The engine core stays host-agnostic; this crate bridges it to a
//! JavaScript host delegate. The delegate is a plain object whose methods
//! perform the actual DOM work (`setStyle`, `createWebAnimation`,
//! `injectKeyframesStylesheet`, ...) and mint the integer handles the
//! engine passes around. When a watched finish event fires in the page, the
//! JS side reports it back through [`KineticAnimation::animation_finish`].

use js_sys::{Array, Function, Object, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use kinetic_animation_core::{
    parse_animation_json, Animator, Config, Direction, ElementHandle, Fill, Host, Keyframe,
    NodeId, ResolvedTiming, StylesheetHandle, WebAnimationHandle,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Host implementation dispatching every operation to a JS delegate object.
/// Missing or failing delegate methods degrade to no-ops, matching the
/// engine's defensive posture.
struct JsHost {
    delegate: Object,
}

impl JsHost {
    fn call(&self, method: &str, args: &[JsValue]) -> JsValue {
        let function = match Reflect::get(&self.delegate, &JsValue::from_str(method)) {
            Ok(value) => value,
            Err(_) => return JsValue::UNDEFINED,
        };
        let function: Function = match function.dyn_into() {
            Ok(function) => function,
            Err(_) => return JsValue::UNDEFINED,
        };
        let arguments = Array::new();
        for arg in args {
            arguments.push(arg);
        }
        function
            .apply(&self.delegate, &arguments)
            .unwrap_or(JsValue::UNDEFINED)
    }

    fn call_handle(&self, method: &str, args: &[JsValue]) -> Option<u32> {
        let value = self.call(method, args);
        if jsvalue_is_undefined_or_null(&value) {
            return None;
        }
        value.as_f64().map(|n| n as u32)
    }
}

impl Host for JsHost {
    fn supports_web_animations(&self) -> bool {
        self.call("supportsWebAnimations", &[])
            .as_bool()
            .unwrap_or(false)
    }

    fn query_selector_all(&mut self, selector: &str) -> Vec<ElementHandle> {
        let value = self.call("querySelectorAll", &[JsValue::from_str(selector)]);
        if !Array::is_array(&value) {
            return Vec::new();
        }
        Array::from(&value)
            .iter()
            .filter_map(|item| item.as_f64())
            .map(|n| ElementHandle(n as u32))
            .collect()
    }

    fn add_class(&mut self, element: ElementHandle, class: &str) {
        self.call(
            "addClass",
            &[JsValue::from(element.0), JsValue::from_str(class)],
        );
    }

    fn remove_class(&mut self, element: ElementHandle, class: &str) {
        self.call(
            "removeClass",
            &[JsValue::from(element.0), JsValue::from_str(class)],
        );
    }

    fn set_style(&mut self, element: ElementHandle, property: &str, value: &str) {
        self.call(
            "setStyle",
            &[
                JsValue::from(element.0),
                JsValue::from_str(property),
                JsValue::from_str(value),
            ],
        );
    }

    fn remove_style(&mut self, element: ElementHandle, property: &str) {
        self.call(
            "removeStyle",
            &[JsValue::from(element.0), JsValue::from_str(property)],
        );
    }

    fn create_web_animation(
        &mut self,
        element: ElementHandle,
        keyframes: &[Keyframe],
        timing: &ResolvedTiming,
    ) -> WebAnimationHandle {
        let keyframes = swb::to_value(keyframes).unwrap_or(JsValue::UNDEFINED);
        let timing = swb::to_value(timing).unwrap_or(JsValue::UNDEFINED);
        let handle = self
            .call_handle(
                "createWebAnimation",
                &[JsValue::from(element.0), keyframes, timing],
            )
            .unwrap_or(0);
        WebAnimationHandle(handle)
    }

    fn play_web_animation(&mut self, animation: WebAnimationHandle) {
        self.call("playWebAnimation", &[JsValue::from(animation.0)]);
    }

    fn pause_web_animation(&mut self, animation: WebAnimationHandle) {
        self.call("pauseWebAnimation", &[JsValue::from(animation.0)]);
    }

    fn cancel_web_animation(&mut self, animation: WebAnimationHandle) {
        self.call("cancelWebAnimation", &[JsValue::from(animation.0)]);
    }

    fn seek_web_animation(&mut self, animation: WebAnimationHandle, time_ms: f64) {
        self.call(
            "seekWebAnimation",
            &[JsValue::from(animation.0), JsValue::from(time_ms)],
        );
    }

    fn inject_keyframes_stylesheet(
        &mut self,
        element: ElementHandle,
        stylesheet_id: &str,
        css_text: &str,
    ) -> Option<StylesheetHandle> {
        self.call_handle(
            "injectKeyframesStylesheet",
            &[
                JsValue::from(element.0),
                JsValue::from_str(stylesheet_id),
                JsValue::from_str(css_text),
            ],
        )
        .map(StylesheetHandle)
    }

    fn remove_stylesheet(&mut self, stylesheet: StylesheetHandle) {
        self.call("removeStylesheet", &[JsValue::from(stylesheet.0)]);
    }

    fn watch_web_animation_finish(&mut self, animation: WebAnimationHandle, node: NodeId) {
        self.call(
            "watchWebAnimationFinish",
            &[JsValue::from(animation.0), JsValue::from(node.0)],
        );
    }

    fn watch_animation_end(&mut self, element: ElementHandle, node: NodeId) {
        self.call(
            "watchAnimationEnd",
            &[JsValue::from(element.0), JsValue::from(node.0)],
        );
    }
}

fn parse_enum<T: serde::de::DeserializeOwned>(value: &str, what: &str) -> Result<T, JsError> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|e| JsError::new(&format!("invalid {what} '{value}': {e}")))
}

#[wasm_bindgen]
pub struct KineticAnimation {
    core: Animator,
    host: JsHost,
}

#[wasm_bindgen]
impl KineticAnimation {
    /// Create an engine bound to a JS host delegate. `config` is a JSON
    /// config object or undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(delegate: Object, config: JsValue) -> Result<KineticAnimation, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(KineticAnimation {
            core: Animator::new(cfg),
            host: JsHost { delegate },
        })
    }

    /// Create a detached animation node. Returns its id.
    #[wasm_bindgen(js_name = create_animation)]
    pub fn create_animation(&mut self) -> u32 {
        self.core.create_animation().0
    }

    /// Parse a descriptor (JS object or JSON-compatible value) and build its
    /// node tree. Returns the root node id.
    #[wasm_bindgen(js_name = build_animation)]
    pub fn build_animation(&mut self, descriptor: JsValue) -> Result<u32, JsError> {
        if jsvalue_is_undefined_or_null(&descriptor) {
            return Err(JsError::new("build_animation: descriptor is null/undefined"));
        }
        let raw = js_sys::JSON::stringify(&descriptor)
            .map_err(|e| JsError::new(&format!("build_animation stringify error: {e:?}")))?
            .as_string()
            .ok_or_else(|| JsError::new("build_animation: stringify produced non-string"))?;
        let descriptor = parse_animation_json(&raw)
            .map_err(|e| JsError::new(&format!("build_animation parse error: {e}")))?;
        let id = self.core.build_animation(&descriptor, &mut self.host);
        Ok(id.0)
    }

    #[wasm_bindgen(js_name = add_element)]
    pub fn add_element(&mut self, node: u32, element: u32) {
        self.core.add_element(NodeId(node), ElementHandle(element));
    }

    #[wasm_bindgen(js_name = add_target)]
    pub fn add_target(&mut self, node: u32, selector: String) {
        self.core.add_target(NodeId(node), &selector, &mut self.host);
    }

    #[wasm_bindgen(js_name = from)]
    pub fn from(&mut self, node: u32, property: String, value: String) {
        self.core.from(NodeId(node), &property, value);
    }

    #[wasm_bindgen(js_name = to)]
    pub fn to(&mut self, node: u32, property: String, value: String) {
        self.core.to(NodeId(node), &property, value);
    }

    #[wasm_bindgen(js_name = from_to)]
    pub fn from_to(&mut self, node: u32, property: String, from_value: String, to_value: String) {
        self.core.from_to(NodeId(node), &property, from_value, to_value);
    }

    /// Replace the keyframe list wholesale. Expects an array of
    /// `{ offset, styles }` objects.
    #[wasm_bindgen(js_name = set_keyframes)]
    pub fn set_keyframes(&mut self, node: u32, keyframes: JsValue) -> Result<(), JsError> {
        let keyframes: Vec<Keyframe> = swb::from_value(keyframes)
            .map_err(|e| JsError::new(&format!("keyframes error: {e}")))?;
        self.core.set_keyframes(NodeId(node), keyframes);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_duration)]
    pub fn set_duration(&mut self, node: u32, duration_ms: f64) {
        self.core.set_duration(NodeId(node), duration_ms);
    }

    #[wasm_bindgen(js_name = set_delay)]
    pub fn set_delay(&mut self, node: u32, delay_ms: f64) {
        self.core.set_delay(NodeId(node), delay_ms);
    }

    #[wasm_bindgen(js_name = set_easing)]
    pub fn set_easing(&mut self, node: u32, easing: String) {
        self.core.set_easing(NodeId(node), easing);
    }

    #[wasm_bindgen(js_name = set_iterations)]
    pub fn set_iterations(&mut self, node: u32, iterations: f64) {
        self.core.set_iterations(NodeId(node), iterations);
    }

    /// Set the fill mode from its CSS keyword (e.g. `"forwards"`).
    #[wasm_bindgen(js_name = set_fill)]
    pub fn set_fill(&mut self, node: u32, fill: String) -> Result<(), JsError> {
        let fill: Fill = parse_enum(&fill, "fill mode")?;
        self.core.set_fill(NodeId(node), fill);
        Ok(())
    }

    /// Set the direction from its CSS keyword (e.g. `"alternate-reverse"`).
    #[wasm_bindgen(js_name = set_direction)]
    pub fn set_direction(&mut self, node: u32, direction: String) -> Result<(), JsError> {
        let direction: Direction = parse_enum(&direction, "direction")?;
        self.core.set_direction(NodeId(node), direction);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_name)]
    pub fn set_name(&mut self, node: u32, name: String) {
        self.core.set_name(NodeId(node), name);
    }

    #[wasm_bindgen(js_name = add_animation)]
    pub fn add_animation(&mut self, parent: u32, child: u32) {
        self.core.add_animation(NodeId(parent), NodeId(child));
    }

    /// Register a finish callback. The callback receives the node id.
    #[wasm_bindgen(js_name = on_finish)]
    pub fn on_finish(&mut self, node: u32, callback: Function) {
        self.core.on_finish(NodeId(node), move |id: NodeId| {
            let _ = callback.call1(&JsValue::UNDEFINED, &JsValue::from(id.0));
        });
    }

    #[wasm_bindgen(js_name = play)]
    pub fn play(&mut self, node: u32) {
        self.core.play(NodeId(node), &mut self.host);
    }

    #[wasm_bindgen(js_name = play_sync)]
    pub fn play_sync(&mut self, node: u32) {
        self.core.play_sync(NodeId(node), &mut self.host);
    }

    #[wasm_bindgen(js_name = pause)]
    pub fn pause(&mut self, node: u32) {
        self.core.pause(NodeId(node), &mut self.host);
    }

    #[wasm_bindgen(js_name = stop)]
    pub fn stop(&mut self, node: u32) {
        self.core.stop(NodeId(node), &mut self.host);
    }

    #[wasm_bindgen(js_name = destroy)]
    pub fn destroy(&mut self, node: u32) {
        self.core.destroy(NodeId(node), &mut self.host);
    }

    #[wasm_bindgen(js_name = progress_start)]
    pub fn progress_start(&mut self, node: u32, force_linear_easing: bool) {
        self.core
            .progress_start(NodeId(node), force_linear_easing, &mut self.host);
    }

    #[wasm_bindgen(js_name = progress_step)]
    pub fn progress_step(&mut self, node: u32, step: f64) {
        self.core.progress_step(NodeId(node), step, &mut self.host);
    }

    #[wasm_bindgen(js_name = progress_end)]
    pub fn progress_end(&mut self, node: u32, should_complete: bool, step: f64) {
        self.core
            .progress_end(NodeId(node), should_complete, step, &mut self.host);
    }

    /// Report a watched finish event for a node. The JS delegate calls this
    /// from its `animationend`/`onfinish` listeners.
    #[wasm_bindgen(js_name = animation_finish)]
    pub fn animation_finish(&mut self, node: u32) {
        self.core.animation_finish(NodeId(node), &mut self.host);
    }

    #[wasm_bindgen(js_name = get_duration)]
    pub fn get_duration(&self, node: u32) -> Option<f64> {
        self.core.get_duration(NodeId(node))
    }

    #[wasm_bindgen(js_name = get_delay)]
    pub fn get_delay(&self, node: u32) -> Option<f64> {
        self.core.get_delay(NodeId(node))
    }

    #[wasm_bindgen(js_name = get_easing)]
    pub fn get_easing(&self, node: u32) -> Option<String> {
        self.core.get_easing(NodeId(node))
    }

    #[wasm_bindgen(js_name = get_iterations)]
    pub fn get_iterations(&self, node: u32) -> Option<f64> {
        self.core.get_iterations(NodeId(node))
    }

    #[wasm_bindgen(js_name = get_fill)]
    pub fn get_fill(&self, node: u32) -> Option<String> {
        self.core
            .get_fill(NodeId(node))
            .map(|fill| fill.as_css().to_string())
    }

    #[wasm_bindgen(js_name = get_direction)]
    pub fn get_direction(&self, node: u32) -> Option<String> {
        self.core
            .get_direction(NodeId(node))
            .map(|direction| direction.as_css().to_string())
    }

    #[wasm_bindgen(js_name = get_name)]
    pub fn get_name(&self, node: u32) -> String {
        self.core.get_name(NodeId(node)).to_string()
    }

    #[wasm_bindgen(js_name = get_keyframes)]
    pub fn get_keyframes(&self, node: u32) -> Result<JsValue, JsError> {
        swb::to_value(self.core.get_keyframes(NodeId(node)))
            .map_err(|e| JsError::new(&format!("keyframes serialize error: {e}")))
    }
}
