//! Pure mapping from the interpolated vector to presentation quantities.

use crate::vector::DirectionVector;

/// Bounds for the presentation quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MappingConfig {
    pub max_font_weight: f64,
    /// Shadow offsets span `[-max_shadow_px, max_shadow_px]`.
    pub max_shadow_px: f64,
    pub secondary_angle_offset_deg: f64,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            max_font_weight: 900.0,
            max_shadow_px: 15.0,
            secondary_angle_offset_deg: 60.0,
        }
    }
}

/// Everything the renderers consume for one frame. Always derived as a whole.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub invert: bool,
    pub angle_deg: f64,
    pub secondary_angle_deg: f64,
    pub font_weight: f64,
    pub shadow_offset_px: f64,
}

#[inline]
pub fn invert_for(v: DirectionVector) -> bool {
    v.y > 0.0
}

/// Angle between the vector and the horizontal axis, in degrees.
/// A zero horizontal component yields 0 rather than ±90.
#[inline]
pub fn angle_deg(v: DirectionVector) -> f64 {
    let ratio = if v.x == 0.0 { 0.0 } else { v.y / v.x };
    ratio.atan().to_degrees()
}

/// `(y + 0.5)` scaled into `[0, max_font_weight]`.
#[inline]
pub fn font_weight(y: f64, cfg: &MappingConfig) -> f64 {
    ((y + 0.5) * cfg.max_font_weight).clamp(0.0, cfg.max_font_weight)
}

/// `(x + 0.5)` scaled into `[-max_shadow_px, max_shadow_px]`.
#[inline]
pub fn shadow_offset(x: f64, cfg: &MappingConfig) -> f64 {
    let span = cfg.max_shadow_px;
    ((x + 0.5) * 2.0 * span - span).clamp(-span, span)
}

pub fn map_vector(v: DirectionVector, cfg: &MappingConfig) -> Presentation {
    let angle = angle_deg(v);
    Presentation {
        invert: invert_for(v),
        angle_deg: angle,
        secondary_angle_deg: angle + cfg.secondary_angle_offset_deg,
        font_weight: font_weight(v.y, cfg),
        shadow_offset_px: shadow_offset(v.x, cfg),
    }
}
