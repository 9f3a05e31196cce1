//! Publishing presentation quantities as CSS custom properties.

use crate::mapper::Presentation;
use crate::vector::round_to;

pub const PROP_INVERT: &str = "--invert";
pub const PROP_ANGLE: &str = "--background-angle";
pub const PROP_SECONDARY_ANGLE: &str = "--background-angle-secondary";
pub const PROP_FONT_WEIGHT: &str = "--font-weight";
pub const PROP_SHADOW_OFFSET: &str = "--shadow-offset";

/// Anything that accepts named custom properties. Implementations must not
/// fail loudly; a missing style target is simply a no-op.
pub trait StyleTarget {
    fn set_property(&self, name: &str, value: &str);
}

/// Trim to three decimals and drop negative zero so values stay short and stable.
pub fn format_number(value: f64) -> String {
    let v = round_to(value, 3) + 0.0;
    format!("{}", v)
}

pub fn format_angle(deg: f64) -> String {
    format!("{}deg", format_number(deg))
}

pub fn format_length(px: f64) -> String {
    format!("{}px", format_number(px))
}

pub fn write_presentation<T: StyleTarget + ?Sized>(target: &T, p: &Presentation) {
    target.set_property(PROP_INVERT, if p.invert { "1" } else { "0" });
    target.set_property(PROP_ANGLE, &format_angle(p.angle_deg));
    target.set_property(PROP_SECONDARY_ANGLE, &format_angle(p.secondary_angle_deg));
    target.set_property(PROP_FONT_WEIGHT, &format_number(p.font_weight));
    target.set_property(PROP_SHADOW_OFFSET, &format_length(p.shadow_offset_px));
}
