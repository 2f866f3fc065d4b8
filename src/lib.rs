/// Annotation Overlay Playground - demo page for a debugging extension
/// Built with Rust + WASM + Yew

pub mod annotation;
pub mod catalog;
pub mod config;
pub mod geometry;
pub mod listeners;
pub mod tracking;
pub mod ui;

use crate::config::OverlayConfig;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the playground page with the default overlay settings
#[wasm_bindgen]
pub fn start_playground() {
    yew::Renderer::<ui::App>::new().render();
}

// Start the playground page with settings passed from JavaScript
#[wasm_bindgen]
pub fn start_playground_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: OverlayConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {:?}", e)))?;
    config.validate().map_err(|e| JsValue::from_str(&e))?;

    log::info!("Starting playground, render target #{}", config.target_id);
    yew::Renderer::<ui::App>::with_props(ui::playground::AppProps { config }).render();
    Ok(())
}

// Start the playground page with settings given as a JSON string
#[wasm_bindgen]
pub fn start_playground_from_json(json: &str) -> Result<(), JsValue> {
    let config = OverlayConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;

    log::info!("Starting playground, render target #{}", config.target_id);
    yew::Renderer::<ui::App>::with_props(ui::playground::AppProps { config }).render();
    Ok(())
}

// Look up the description of one annotation by id
#[wasm_bindgen]
pub fn annotation_description(id: &str) -> Option<String> {
    catalog::find(id).map(|annotation| annotation.description.to_string())
}

// Export the annotation catalog for the extension side
#[wasm_bindgen]
pub fn annotation_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(catalog::annotations())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize catalog: {:?}", e)))
}
