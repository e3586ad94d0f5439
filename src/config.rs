use crate::constants::CONFIG_GLOBAL;
use crate::core::{density_from_f64, SnowConfig};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Read `window.snowConfig`, falling back to defaults for anything missing.
pub fn page_config(window: &web::Window) -> SnowConfig {
    match js_sys::Reflect::get(window, &CONFIG_GLOBAL.into()) {
        Ok(value) if value.is_object() => from_js(&value),
        _ => SnowConfig::default(),
    }
}

pub fn from_js(value: &JsValue) -> SnowConfig {
    let mut config = SnowConfig::default();
    let field = |key: &str| js_sys::Reflect::get(value, &key.into()).ok();

    if let Some(density) = field("density")
        .and_then(|v| v.as_f64())
        .and_then(density_from_f64)
    {
        config.density = density;
    }
    if let Some(images) = field("images").filter(js_sys::Array::is_array) {
        let images: Vec<String> = js_sys::Array::from(&images)
            .iter()
            .filter_map(|v| v.as_string())
            .collect();
        if !images.is_empty() {
            config.images = images;
        }
    }
    if let Some(id) = field("containerId").and_then(|v| v.as_string()) {
        config.container_id = id;
    }
    if let Some(marker) = field("playerModeMarker").and_then(|v| v.as_string()) {
        config.player_mode_marker = marker;
    }
    config
}
