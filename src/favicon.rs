use crate::constants::FAVICON_MIME;
use crate::dom;
use sway_core::{ColorStops, FaviconFrame};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Off-screen canvas plus the icon link it republishes into. Both live for
/// the whole session.
pub struct FaviconRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    link: web::HtmlLinkElement,
}

impl FaviconRenderer {
    pub fn create(document: &web::Document, size: u32) -> anyhow::Result<Self> {
        let canvas = dom::create_canvas(document, size)?;
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let link = dom::create_icon_link(document)?;
        Ok(Self { canvas, ctx, link })
    }

    /// Draw the frame, publish it as the page icon, then clear for the next one.
    pub fn paint(&self, frame: &FaviconFrame, stops: &ColorStops) {
        let ctx = &self.ctx;
        ctx.set_filter(frame.filter);
        for region in &frame.regions {
            let gradient = ctx.create_linear_gradient(
                frame.gradient_from.x,
                frame.gradient_from.y,
                frame.gradient_to.x,
                frame.gradient_to.y,
            );
            let (start, end) = stops.pair(region.palette);
            // An unparsable color leaves that stop out; the region still fills.
            _ = gradient.add_color_stop(0.0, start);
            _ = gradient.add_color_stop(1.0, end);
            ctx.set_fill_style_canvas_gradient(&gradient);

            let [a, b, c] = region.corners;
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.line_to(c.x, c.y);
            ctx.close_path();
            ctx.fill();
        }

        match self.canvas.to_data_url_with_type(FAVICON_MIME) {
            Ok(url) => self.link.set_href(&url),
            Err(e) => log::debug!("[favicon] serialize failed: {:?}", e),
        }
        ctx.clear_rect(0.0, 0.0, frame.size, frame.size);
    }
}
