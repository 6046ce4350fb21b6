#![cfg(target_arch = "wasm32")]

use stencil_wasm::{create_shorthand_js, list_components_js, render_component_js};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn renders_component_to_json() {
    let json = render_component_js("Label", r#"{"content": "New", "color": "red"}"#, true).unwrap();
    assert!(json.contains("ui red label"));
}

#[wasm_bindgen_test]
fn unknown_shorthand_component_is_an_error() {
    assert!(create_shorthand_js("Nope", r#""x""#).is_err());
}

#[wasm_bindgen_test]
fn lists_components() {
    assert!(list_components_js().unwrap().contains("\"BreadcrumbSection\""));
}
