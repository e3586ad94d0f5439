#![cfg(target_arch = "wasm32")]
use crate::core::{engage, ActivationController, Host, SnowEngine, SnowRunner};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod core;
mod dom;
mod host;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snowfall starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = config::page_config(&window);
    let host = Rc::new(host::BrowserHost::new(window));

    let surface = dom::DomSurface::find(&document, &config.container_id);
    if surface.is_none() {
        log::error!("[dom] missing #{}", config.container_id);
    }
    let engine = SnowEngine::new(surface, config.density);
    let runner = SnowRunner::new(engine, host.clone());
    let controller =
        ActivationController::new(runner, host.today(), config.player_mode_marker.clone());

    // Flakes are created only in season.
    if controller.in_season() {
        // The first start halts the controller if setup left no flakes.
        if let Err(e) = controller.runner().setup(config.images.as_slice()) {
            if e.is_configuration() {
                log::warn!("[snow] snow disabled for this session: {}", e);
            }
        }
    }
    engage(Rc::new(RefCell::new(controller)));
    Ok(())
}
