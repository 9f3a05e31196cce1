//! Tunables and their optional overrides from `data-motion-*` attributes.

use crate::ceiling::CeilingTrigger;
use crate::mapper::MappingConfig;
use thiserror::Error;

pub const DEFAULT_TRANSITION_MS: f64 = 2000.0;
pub const DEFAULT_ROUNDING_PLACES: u32 = 2;
pub const DEFAULT_FAVICON_SIZE: u32 = 64;
/// Beyond this `f64` carries no more decimal digits worth rounding to.
pub const MAX_ROUNDING_PLACES: u32 = 15;

pub const ATTR_DURATION: &str = "data-motion-duration";
pub const ATTR_ROUNDING: &str = "data-motion-rounding";
pub const ATTR_MAX_WEIGHT: &str = "data-motion-max-weight";
pub const ATTR_MAX_SHADOW: &str = "data-motion-max-shadow";
pub const ATTR_ANGLE_OFFSET: &str = "data-motion-angle-offset";
pub const ATTR_FAVICON_SIZE: &str = "data-motion-favicon-size";
pub const ATTR_CEILING: &str = "data-motion-ceiling";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("attribute {key} has non-numeric value {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("transition duration must be positive and finite, got {0}")]
    InvalidDuration(f64),
    #[error("favicon size must be non-zero")]
    ZeroFaviconSize,
    #[error("rounding must be at most 15 places, got {0}")]
    TooManyRoundingPlaces(u32),
    #[error("{key} must be finite, got {value}")]
    NonFinite { key: &'static str, value: f64 },
    #[error("{key} must be non-negative, got {value}")]
    NegativeRange { key: &'static str, value: f64 },
    #[error("unknown ceiling trigger {0:?} (expected \"wheel\" or \"scroll\")")]
    UnknownCeilingTrigger(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub transition_ms: f64,
    pub rounding_places: u32,
    pub mapping: MappingConfig,
    pub favicon_size: u32,
    pub ceiling_trigger: CeilingTrigger,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            rounding_places: DEFAULT_ROUNDING_PLACES,
            mapping: MappingConfig::default(),
            favicon_size: DEFAULT_FAVICON_SIZE,
            ceiling_trigger: CeilingTrigger::default(),
        }
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

impl MotionConfig {
    /// Defaults overridden by whatever attributes `lookup` finds, then validated.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ATTR_DURATION) {
            cfg.transition_ms = parse(ATTR_DURATION, &v)?;
        }
        if let Some(v) = lookup(ATTR_ROUNDING) {
            cfg.rounding_places = parse(ATTR_ROUNDING, &v)?;
        }
        if let Some(v) = lookup(ATTR_MAX_WEIGHT) {
            cfg.mapping.max_font_weight = parse(ATTR_MAX_WEIGHT, &v)?;
        }
        if let Some(v) = lookup(ATTR_MAX_SHADOW) {
            cfg.mapping.max_shadow_px = parse(ATTR_MAX_SHADOW, &v)?;
        }
        if let Some(v) = lookup(ATTR_ANGLE_OFFSET) {
            cfg.mapping.secondary_angle_offset_deg = parse(ATTR_ANGLE_OFFSET, &v)?;
        }
        if let Some(v) = lookup(ATTR_FAVICON_SIZE) {
            cfg.favicon_size = parse(ATTR_FAVICON_SIZE, &v)?;
        }
        if let Some(v) = lookup(ATTR_CEILING) {
            cfg.ceiling_trigger = match v.trim() {
                "wheel" => CeilingTrigger::Wheel,
                "scroll" => CeilingTrigger::ScrollPosition,
                other => return Err(ConfigError::UnknownCeilingTrigger(other.to_string())),
            };
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.transition_ms.is_finite() && self.transition_ms > 0.0) {
            return Err(ConfigError::InvalidDuration(self.transition_ms));
        }
        if self.favicon_size == 0 {
            return Err(ConfigError::ZeroFaviconSize);
        }
        if self.rounding_places > MAX_ROUNDING_PLACES {
            return Err(ConfigError::TooManyRoundingPlaces(self.rounding_places));
        }
        let angle_offset = self.mapping.secondary_angle_offset_deg;
        if !angle_offset.is_finite() {
            return Err(ConfigError::NonFinite {
                key: ATTR_ANGLE_OFFSET,
                value: angle_offset,
            });
        }
        let ranges = [
            (ATTR_MAX_WEIGHT, self.mapping.max_font_weight),
            (ATTR_MAX_SHADOW, self.mapping.max_shadow_px),
        ];
        for (key, value) in ranges {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { key, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeRange { key, value });
            }
        }
        Ok(())
    }
}
