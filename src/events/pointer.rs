use super::InputWiring;
use crate::constants::{EV_CLICK, EV_POINTER_MOVE};
use crate::dom;
use sway_core::pointer_vector;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn handle_pointer(w: &InputWiring, ev: &web::MouseEvent) {
    let Some(window) = web::window() else {
        return;
    };
    let Some((vw, vh)) = dom::viewport_size(&window) else {
        return;
    };
    let places = w.engine.borrow().config.rounding_places;
    if let Some(v) = pointer_vector(ev.client_x() as f64, ev.client_y() as f64, vw, vh, places) {
        w.engine.borrow_mut().install_target(v, w.clock.now_ms());
    }
}

/// Bind pointer-move and click as target sources.
pub fn wire_pointer(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    for event in [EV_POINTER_MOVE, EV_CLICK] {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            handle_pointer(&w, &ev);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
    log::info!("[input] pointer source bound");
}
