//! Geometry for the favicon: a square split along its diagonal into two
//! triangles, each filled with a two-stop gradient whose line follows the
//! mapped angle.

use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

pub const PROP_PRIMARY_START: &str = "--background-primary-start";
pub const PROP_PRIMARY_END: &str = "--background-primary-end";
pub const PROP_SECONDARY_START: &str = "--background-secondary-start";
pub const PROP_SECONDARY_END: &str = "--background-secondary-end";

/// Gradient colors read from computed style. Read once per session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorStops {
    pub primary_start: String,
    pub primary_end: String,
    pub secondary_start: String,
    pub secondary_end: String,
}

impl ColorStops {
    /// Fill from a computed-style lookup; values are trimmed since computed
    /// custom properties keep their leading whitespace. `None` while any stop
    /// is still undefined, so the caller retries instead of caching blanks.
    pub fn read(lookup: impl Fn(&str) -> String) -> Option<Self> {
        let get = |name: &str| Some(lookup(name).trim().to_string()).filter(|v| !v.is_empty());
        Some(Self {
            primary_start: get(PROP_PRIMARY_START)?,
            primary_end: get(PROP_PRIMARY_END)?,
            secondary_start: get(PROP_SECONDARY_START)?,
            secondary_end: get(PROP_SECONDARY_END)?,
        })
    }

    pub fn pair(&self, palette: Palette) -> (&str, &str) {
        match palette {
            Palette::Primary => (&self.primary_start, &self.primary_end),
            Palette::Secondary => (&self.secondary_start, &self.secondary_end),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub corners: [DVec2; 3],
    pub palette: Palette,
}

/// One frame's worth of drawing instructions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaviconFrame {
    pub size: f64,
    pub regions: [Region; 2],
    pub gradient_from: DVec2,
    pub gradient_to: DVec2,
    pub filter: &'static str,
}

impl FaviconFrame {
    pub fn compose(size: u32, angle_deg: f64, invert: bool) -> Self {
        let s = size as f64;
        let (from, to) = gradient_endpoints(s, angle_deg);
        let top_left = DVec2::ZERO;
        let top_right = DVec2::new(s, 0.0);
        let bottom_left = DVec2::new(0.0, s);
        let bottom_right = DVec2::new(s, s);
        Self {
            size: s,
            regions: [
                Region {
                    corners: [top_left, top_right, bottom_left],
                    palette: Palette::Primary,
                },
                Region {
                    corners: [top_right, bottom_right, bottom_left],
                    palette: Palette::Secondary,
                },
            ],
            gradient_from: from,
            gradient_to: to,
            filter: if invert { "invert(1)" } else { "none" },
        }
    }
}

/// Antipodal points on the square's bounding circle, rotated to `angle ± 90°`.
pub fn gradient_endpoints(size: f64, angle_deg: f64) -> (DVec2, DVec2) {
    let center = DVec2::splat(size / 2.0);
    let radius = size / 2.0 * std::f64::consts::SQRT_2;
    let theta = angle_deg.to_radians();
    let point = |a: f64| center + DVec2::new(a.cos(), a.sin()) * radius;
    (point(theta + FRAC_PI_2), point(theta - FRAC_PI_2))
}
