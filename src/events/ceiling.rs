use crate::constants::{CEILING_CLASS, EV_SCROLL, EV_WHEEL};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use sway_core::{CeilingTrigger, Engine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(changed: Option<bool>) {
    if let (Some(on), Some(document)) = (changed, dom::window_document()) {
        dom::set_root_class(&document, CEILING_CLASS, on);
    }
}

/// Toggle the ceiling class from wheel direction or scroll position,
/// whichever the configuration selects.
pub fn wire_ceiling(window: &web::Window, engine: Rc<RefCell<Engine>>) {
    let trigger = engine.borrow().config.ceiling_trigger;
    match trigger {
        CeilingTrigger::Wheel => {
            let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
                apply(engine.borrow_mut().wheel(ev.delta_y()));
            }) as Box<dyn FnMut(_)>);
            _ = window
                .add_event_listener_with_callback(EV_WHEEL, closure.as_ref().unchecked_ref());
            closure.forget();
        }
        CeilingTrigger::ScrollPosition => {
            if let Ok(y) = window.scroll_y() {
                apply(engine.borrow_mut().scroll(y));
            }
            let closure = Closure::wrap(Box::new(move || {
                if let Some(Ok(y)) = web::window().map(|w| w.scroll_y()) {
                    apply(engine.borrow_mut().scroll(y));
                }
            }) as Box<dyn FnMut()>);
            _ = window
                .add_event_listener_with_callback(EV_SCROLL, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
