use serde::Serialize;
use serde_json::Value as Json;
use stencil_common::{ComponentId, PropValue, Props};
use stencil_engine::{ComponentMeta, Engine, EngineOptions, Resolution};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn engine(dev_mode: bool) -> Result<Engine, String> {
    stencil_components::engine(EngineOptions { dev_mode }).map_err(|e| e.to_string())
}

fn to_json(value: &impl Serialize) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn render_component(name: &str, props_json: &str, dev_mode: bool) -> Result<String, String> {
    let props = if props_json.trim().is_empty() {
        Props::new()
    } else {
        Props::from_json(props_json).map_err(|e| format!("Invalid props: {}", e))?
    };

    let node = engine(dev_mode)?
        .instantiate(&ComponentId::new(name), props)
        .map_err(|e| e.to_string())?;
    to_json(&node)
}

fn create_shorthand(name: &str, value_json: &str) -> Result<String, String> {
    let json: Json =
        serde_json::from_str(value_json).map_err(|e| format!("Invalid shorthand: {}", e))?;
    let value = PropValue::try_from(json).map_err(|e| format!("Invalid shorthand: {}", e))?;

    let engine = engine(false)?;
    let resolution = engine
        .factory(&ComponentId::new(name))
        .and_then(|factory| factory.create_value(&engine, value, None))
        .map_err(|e| e.to_string())?;

    match resolution {
        Resolution::Absent => Ok("null".to_string()),
        Resolution::Node(node) => to_json(&node),
        Resolution::List(nodes) => to_json(&nodes),
    }
}

fn list_components() -> Result<String, String> {
    let engine = engine(false)?;
    let metas: Vec<&ComponentMeta> = engine.registry().iter().map(|def| &def.meta).collect();
    to_json(&metas)
}

/// Render a component from JSON props and return the resolved node as JSON
#[wasm_bindgen(js_name = renderComponent)]
pub fn render_component_js(name: &str, props_json: &str, dev_mode: bool) -> Result<String, JsValue> {
    render_component(name, props_json, dev_mode).map_err(|e| JsValue::from_str(&e))
}

/// Expand a JSON shorthand value with a component's factory
#[wasm_bindgen(js_name = createShorthand)]
pub fn create_shorthand_js(name: &str, value_json: &str) -> Result<String, JsValue> {
    create_shorthand(name, value_json).map_err(|e| JsValue::from_str(&e))
}

/// Metadata of every registered component as JSON
#[wasm_bindgen(js_name = listComponents)]
pub fn list_components_js() -> Result<String, JsValue> {
    list_components().map_err(|e| JsValue::from_str(&e))
}
