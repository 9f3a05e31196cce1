use crate::constants::FAVICON_REL;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn root_element(document: &web::Document) -> Option<web::Element> {
    document.document_element()
}

/// Viewport size in CSS pixels, or `None` when the window reports nothing usable.
pub fn viewport_size(window: &web::Window) -> Option<(f64, f64)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

/// Attribute reader over `<html>`, for configuration overrides.
pub fn root_attribute(document: &web::Document, name: &str) -> Option<String> {
    root_element(document)?.get_attribute(name)
}

pub fn set_root_class(document: &web::Document, class: &str, on: bool) {
    if let Some(root) = root_element(document) {
        _ = root.class_list().toggle_with_force(class, on);
    }
}

pub fn create_canvas(
    document: &web::Document,
    size: u32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(size);
    canvas.set_height(size);
    Ok(canvas)
}

/// Append a fresh `<link rel="icon">` to `<head>`.
pub fn create_icon_link(document: &web::Document) -> anyhow::Result<web::HtmlLinkElement> {
    let link: web::HtmlLinkElement = document
        .create_element("link")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.set_rel(FAVICON_REL);
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    head.append_child(&link)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(link)
}
