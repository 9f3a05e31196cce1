use super::{orientation, pointer, InputWiring};
use crate::constants::{
    EV_FIRST_INTERACTION, ORIENTATION_EVENT_CTOR, ORIENTATION_REQUEST_FN, PERMISSION_GRANTED,
};
use crate::permission::outcome_from_answer;
use std::cell::RefCell;
use std::rc::Rc;
use sway_core::{PermissionOutcome, SourceKind, SourceSelector};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Ask for orientation access where the platform gates it behind
/// `DeviceOrientationEvent.requestPermission()`. Must run synchronously inside
/// the gesture handler; the returned promise can be awaited later. `Err`
/// carries an outcome that is already settled.
fn start_permission_request() -> Result<js_sys::Promise, PermissionOutcome> {
    let window = web::window().ok_or(PermissionOutcome::Unavailable)?;
    let ctor = match js_sys::Reflect::get(&window, &JsValue::from_str(ORIENTATION_EVENT_CTOR)) {
        Ok(c) if !c.is_undefined() => c,
        _ => return Err(PermissionOutcome::Unavailable),
    };
    let request = match js_sys::Reflect::get(&ctor, &JsValue::from_str(ORIENTATION_REQUEST_FN)) {
        Ok(f) if f.is_function() => f.unchecked_into::<js_sys::Function>(),
        _ => return Err(PermissionOutcome::Unavailable),
    };
    match request.call0(&ctor).map(|p| p.dyn_into::<js_sys::Promise>()) {
        Ok(Ok(p)) => Ok(p),
        Ok(Err(_)) | Err(_) => {
            log::warn!("[input] orientation permission request did not return a promise");
            Err(PermissionOutcome::Denied)
        }
    }
}

async fn settle_permission(
    request: Result<js_sys::Promise, PermissionOutcome>,
) -> PermissionOutcome {
    let promise = match request {
        Ok(p) => p,
        Err(outcome) => return outcome,
    };
    match JsFuture::from(promise).await {
        Ok(answer) => outcome_from_answer(answer.as_string().as_deref(), PERMISSION_GRANTED),
        Err(e) => {
            log::warn!("[input] orientation permission rejected: {:?}", e);
            PermissionOutcome::Denied
        }
    }
}

fn bind(kind: SourceKind, w: &InputWiring) {
    match kind {
        SourceKind::Orientation => orientation::wire_orientation(w),
        SourceKind::Pointer => pointer::wire_pointer(w),
    }
}

/// On the first user interaction, decide between tilt and pointer input and
/// bind exactly one of them for the rest of the session.
pub fn wire_source_selection(document: &web::Document, w: InputWiring) {
    let selector = Rc::new(RefCell::new(SourceSelector::default()));
    let closure = Closure::wrap(Box::new(move || {
        if !selector.borrow_mut().begin() {
            return;
        }
        let request = start_permission_request();
        let selector = selector.clone();
        let w = w.clone();
        spawn_local(async move {
            let outcome = settle_permission(request).await;
            log::info!("[input] orientation permission: {:?}", outcome);
            let resolved = selector.borrow_mut().resolve(outcome);
            if let Some(kind) = resolved {
                bind(kind, &w);
            }
        });
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback(EV_FIRST_INTERACTION, closure.as_ref().unchecked_ref());
    closure.forget();
}
