use crate::clock::Clock;
use crate::favicon::FaviconRenderer;
use crate::style::{self, RootStyle};
use std::cell::RefCell;
use std::rc::Rc;
use sway_core::{write_presentation, Engine, Presentation};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state: the engine plus the two renderers. Either renderer may be
/// missing; the other keeps working.
pub struct FrameContext {
    pub engine: Rc<RefCell<Engine>>,
    pub clock: Clock,
    pub style: Option<RootStyle>,
    pub favicon: Option<FaviconRenderer>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        let presented = self.engine.borrow_mut().tick(now);
        if let Some(p) = presented {
            self.render(&p);
        }
    }

    /// Styles first: the favicon reads colors back from computed style.
    pub fn render(&mut self, p: &Presentation) {
        if let Some(target) = &self.style {
            write_presentation(target, p);
        }
        if let Some(favicon) = &self.favicon {
            let mut engine = self.engine.borrow_mut();
            let frame = engine.favicon_frame(p);
            if let Some(stops) = engine.color_stops_or_try_read(style::read_color_stops) {
                favicon.paint(&frame, stops);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
