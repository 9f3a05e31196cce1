#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use sway_core::{Engine, MotionConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod clock;
mod constants;
mod dom;
mod events;
mod favicon;
mod frame;
mod permission;
mod style;

fn load_config(document: &web::Document) -> MotionConfig {
    match MotionConfig::from_attributes(|name| dom::root_attribute(document, name)) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            MotionConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sway-web starting");

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

    let config = load_config(&document);
    let animate = events::initial_animation_enabled(&window);
    log::info!(
        "[engine] duration={}ms favicon={}px animate={}",
        config.transition_ms,
        config.favicon_size,
        animate
    );
    let engine = Rc::new(RefCell::new(Engine::new(config, animate)));
    let clock = clock::Clock::start();

    // Renderers fail independently; a missing one is logged and skipped
    let style = style::RootStyle::from_document(&document)
        .map_err(|e| log::warn!("[style] unavailable: {:?}", e))
        .ok();
    let favicon = favicon::FaviconRenderer::create(&document, config.favicon_size)
        .map_err(|e| log::warn!("[favicon] unavailable: {:?}", e))
        .ok();

    events::wire_reduced_motion(&window, engine.clone());
    events::wire_ceiling(&window, engine.clone());
    events::wire_source_selection(
        &document,
        events::InputWiring {
            engine: engine.clone(),
            clock,
        },
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine: engine.clone(),
        clock,
        style,
        favicon,
    }));
    let initial = engine.borrow().present();
    frame_ctx.borrow_mut().render(&initial);
    frame::start_loop(frame_ctx);

    Ok(())
}
