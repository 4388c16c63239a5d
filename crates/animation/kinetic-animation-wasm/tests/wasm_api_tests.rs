#![cfg(target_arch = "wasm32")]
use js_sys::Object;
use kinetic_animation_wasm::KineticAnimation;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

/// it should construct with defaults and resolve timing through the tree
#[wasm_bindgen_test]
fn create_and_configure() {
    let mut engine = KineticAnimation::new(Object::new(), JsValue::UNDEFINED).unwrap();
    let node = engine.create_animation();
    engine.set_duration(node, 200.0);
    engine.set_easing(node, "ease-out".to_string());
    assert_eq!(engine.get_duration(node), Some(200.0));
    assert_eq!(engine.get_easing(node), Some("ease-out".to_string()));

    let child = engine.create_animation();
    engine.add_animation(node, child);
    assert_eq!(engine.get_duration(child), Some(200.0));
}

/// it should build a descriptor tree and complete a sync play
#[wasm_bindgen_test]
fn build_descriptor_and_sync_play() {
    let descriptor = js_sys::JSON::parse(
        r#"{
            "name": "fade",
            "duration": 120,
            "keyframes": [
                { "offset": 0, "styles": { "opacity": "0" } },
                { "offset": 1, "styles": { "opacity": "1" } }
            ]
        }"#,
    )
    .unwrap();

    let mut engine = KineticAnimation::new(Object::new(), JsValue::UNDEFINED).unwrap();
    let node = engine.build_animation(descriptor).unwrap();
    assert_eq!(engine.get_name(node), "fade");

    engine.play_sync(node);
    // The sync override cleared itself on completion.
    assert_eq!(engine.get_duration(node), Some(120.0));
}

/// it should reject malformed descriptors
#[wasm_bindgen_test]
fn build_rejects_invalid_descriptor() {
    let descriptor = js_sys::JSON::parse(
        r#"{ "keyframes": [ { "offset": 2, "styles": {} } ] }"#,
    )
    .unwrap();
    let mut engine = KineticAnimation::new(Object::new(), JsValue::UNDEFINED).unwrap();
    assert!(engine.build_animation(descriptor).is_err());
}
