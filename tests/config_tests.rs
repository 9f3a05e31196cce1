// Host-side tests for configuration defaults and attribute overrides.

use std::collections::HashMap;
use sway_core::*;

fn from(attrs: &[(&str, &str)]) -> Result<MotionConfig, ConfigError> {
    let map: HashMap<&str, &str> = attrs.iter().copied().collect();
    MotionConfig::from_attributes(|name: &str| map.get(name).map(|v| v.to_string()))
}

#[test]
fn defaults_are_the_canonical_constants() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.transition_ms, 2000.0);
    assert_eq!(cfg.rounding_places, 2);
    assert_eq!(cfg.favicon_size, 64);
    assert_eq!(cfg.mapping.max_font_weight, 900.0);
    assert_eq!(cfg.mapping.max_shadow_px, 15.0);
    assert_eq!(cfg.mapping.secondary_angle_offset_deg, 60.0);
    assert_eq!(cfg.ceiling_trigger, CeilingTrigger::Wheel);
    assert!(cfg.validate().is_ok());
}

#[test]
fn no_attributes_means_defaults() {
    assert_eq!(from(&[]), Ok(MotionConfig::default()));
}

#[test]
fn attributes_override_defaults() {
    let cfg = from(&[
        (ATTR_DURATION, "1500"),
        (ATTR_ROUNDING, " 3 "),
        (ATTR_MAX_WEIGHT, "700"),
        (ATTR_MAX_SHADOW, "20.5"),
        (ATTR_ANGLE_OFFSET, "-30"),
        (ATTR_FAVICON_SIZE, "32"),
        (ATTR_CEILING, "scroll"),
    ])
    .unwrap();
    assert_eq!(cfg.transition_ms, 1500.0);
    assert_eq!(cfg.rounding_places, 3);
    assert_eq!(cfg.mapping.max_font_weight, 700.0);
    assert_eq!(cfg.mapping.max_shadow_px, 20.5);
    assert_eq!(cfg.mapping.secondary_angle_offset_deg, -30.0);
    assert_eq!(cfg.favicon_size, 32);
    assert_eq!(cfg.ceiling_trigger, CeilingTrigger::ScrollPosition);
}

#[test]
fn malformed_numbers_are_reported() {
    assert_eq!(
        from(&[(ATTR_DURATION, "soon")]),
        Err(ConfigError::InvalidNumber {
            key: ATTR_DURATION,
            value: "soon".to_string()
        })
    );
    assert!(matches!(
        from(&[(ATTR_ROUNDING, "-1")]),
        Err(ConfigError::InvalidNumber { key: ATTR_ROUNDING, .. })
    ));
}

#[test]
fn invalid_values_fail_validation() {
    assert_eq!(
        from(&[(ATTR_DURATION, "0")]),
        Err(ConfigError::InvalidDuration(0.0))
    );
    assert_eq!(
        from(&[(ATTR_FAVICON_SIZE, "0")]),
        Err(ConfigError::ZeroFaviconSize)
    );
    assert_eq!(
        from(&[(ATTR_MAX_SHADOW, "-3")]),
        Err(ConfigError::NegativeRange {
            key: ATTR_MAX_SHADOW,
            value: -3.0
        })
    );
    assert_eq!(
        from(&[(ATTR_ROUNDING, "400")]),
        Err(ConfigError::TooManyRoundingPlaces(400))
    );
    assert_eq!(
        from(&[(ATTR_MAX_WEIGHT, "inf")]),
        Err(ConfigError::NonFinite {
            key: ATTR_MAX_WEIGHT,
            value: f64::INFINITY
        })
    );
    assert_eq!(
        from(&[(ATTR_MAX_SHADOW, "inf")]),
        Err(ConfigError::NonFinite {
            key: ATTR_MAX_SHADOW,
            value: f64::INFINITY
        })
    );
    assert!(matches!(
        from(&[(ATTR_ANGLE_OFFSET, "NaN")]),
        Err(ConfigError::NonFinite { key: ATTR_ANGLE_OFFSET, .. })
    ));
    assert_eq!(
        from(&[(ATTR_CEILING, "sideways")]),
        Err(ConfigError::UnknownCeilingTrigger("sideways".to_string()))
    );
}

#[test]
fn errors_name_the_attribute() {
    let err = from(&[(ATTR_MAX_WEIGHT, "heavy")]).unwrap_err();
    assert!(err.to_string().contains(ATTR_MAX_WEIGHT));
}

#[test]
fn accepted_configs_keep_output_finite() {
    let cfg = from(&[(ATTR_ROUNDING, "15"), (ATTR_MAX_WEIGHT, "1000"), (ATTR_MAX_SHADOW, "0")])
        .unwrap();
    assert_eq!(cfg.rounding_places, MAX_ROUNDING_PLACES);

    let v = pointer_vector(700.0, 100.0, 1000.0, 800.0, cfg.rounding_places).unwrap();
    let p = map_vector(v, &cfg.mapping);
    for value in [p.angle_deg, p.secondary_angle_deg, p.font_weight, p.shadow_offset_px] {
        assert!(value.is_finite());
    }
    assert_eq!(p.shadow_offset_px, 0.0);
}
