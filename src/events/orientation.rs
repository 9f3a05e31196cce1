use super::InputWiring;
use crate::constants::EV_ORIENTATION;
use sway_core::orientation_vector;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bind device tilt as the target source.
pub fn wire_orientation(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        let places = w.engine.borrow().config.rounding_places;
        if let Some(v) = orientation_vector(ev.beta(), ev.gamma(), places) {
            w.engine.borrow_mut().install_target(v, w.clock.now_ms());
        }
    }) as Box<dyn FnMut(_)>);
    _ = window
        .add_event_listener_with_callback(EV_ORIENTATION, closure.as_ref().unchecked_ref());
    closure.forget();
    log::info!("[input] orientation source bound");
}
