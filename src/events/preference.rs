use crate::constants::{EV_MEDIA_CHANGE, REDUCED_MOTION_QUERY};
use crate::permission::animation_enabled_for;
use std::cell::RefCell;
use std::rc::Rc;
use sway_core::Engine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn reduced_motion_query(window: &web::Window) -> Option<web::MediaQueryList> {
    window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Current preference; animation stays on when the query is unsupported.
pub fn initial_animation_enabled(window: &web::Window) -> bool {
    reduced_motion_query(window)
        .map(|mq| animation_enabled_for(mq.matches()))
        .unwrap_or(true)
}

/// Keep the engine's animation flag in step with the reduced-motion preference.
pub fn wire_reduced_motion(window: &web::Window, engine: Rc<RefCell<Engine>>) {
    let Some(mq) = reduced_motion_query(window) else {
        log::warn!("[prefs] reduced-motion query unavailable");
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        engine
            .borrow_mut()
            .set_animation_enabled(animation_enabled_for(ev.matches()));
    }) as Box<dyn FnMut(_)>);
    _ = mq.add_event_listener_with_callback(EV_MEDIA_CHANGE, closure.as_ref().unchecked_ref());
    closure.forget();
}
