use crate::dom;
use sway_core::{ColorStops, StyleTarget};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inline style of `<html>`, where the stylesheet picks up the custom properties.
pub struct RootStyle {
    decl: web::CssStyleDeclaration,
}

impl RootStyle {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let root = dom::root_element(document).ok_or_else(|| anyhow::anyhow!("no <html>"))?;
        let root: web::HtmlElement = root
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { decl: root.style() })
    }
}

impl StyleTarget for RootStyle {
    fn set_property(&self, name: &str, value: &str) {
        if let Err(e) = self.decl.set_property(name, value) {
            log::debug!("[style] set {} failed: {:?}", name, e);
        }
    }
}

/// Gradient colors from the computed style of `<html>`; `None` until the
/// stylesheet defines all four.
pub fn read_color_stops() -> Option<ColorStops> {
    let window = web::window()?;
    let root = dom::root_element(&window.document()?)?;
    let computed = window.get_computed_style(&root).ok()??;
    let stops = ColorStops::read(|name| computed.get_property_value(name).unwrap_or_default())?;
    log::info!(
        "[favicon] color stops {} {} / {} {}",
        stops.primary_start,
        stops.primary_end,
        stops.secondary_start,
        stops.secondary_end
    );
    Some(stops)
}
