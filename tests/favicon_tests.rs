// Host-side tests for favicon geometry and the color-stop cache.

use sway_core::*;

const EPS: f64 = 1e-9;

fn close(a: DirectionVector, b: DirectionVector) -> bool {
    (a - b).abs().max_element() < EPS
}

fn stops() -> ColorStops {
    ColorStops {
        primary_start: "#111".into(),
        primary_end: "#222".into(),
        secondary_start: "#333".into(),
        secondary_end: "#444".into(),
    }
}

#[test]
fn gradient_line_is_perpendicular_to_angle() {
    let r = 32.0 * std::f64::consts::SQRT_2;
    let (from, to) = gradient_endpoints(64.0, 0.0);
    assert!(close(from, DirectionVector::new(32.0, 32.0 + r)));
    assert!(close(to, DirectionVector::new(32.0, 32.0 - r)));

    let (from, to) = gradient_endpoints(64.0, 90.0);
    assert!(close(from, DirectionVector::new(32.0 - r, 32.0)));
    assert!(close(to, DirectionVector::new(32.0 + r, 32.0)));
}

#[test]
fn gradient_endpoints_are_antipodal() {
    for angle in [-75.0, -12.5, 0.0, 33.0, 89.0] {
        let (from, to) = gradient_endpoints(64.0, angle);
        assert!(close(from + to, DirectionVector::splat(64.0)));
        assert!(((from - to).length() - 64.0 * std::f64::consts::SQRT_2).abs() < 1e-6);
    }
}

#[test]
fn frame_splits_square_into_two_triangles() {
    let frame = FaviconFrame::compose(64, 30.0, false);
    assert_eq!(frame.size, 64.0);
    assert_eq!(frame.filter, "none");

    let [primary, secondary] = frame.regions;
    assert_eq!(primary.palette, Palette::Primary);
    assert_eq!(secondary.palette, Palette::Secondary);
    assert!(primary.corners.contains(&DirectionVector::ZERO));
    assert!(secondary.corners.contains(&DirectionVector::new(64.0, 64.0)));

    // Both share the diagonal from top-right to bottom-left
    for corner in [DirectionVector::new(64.0, 0.0), DirectionVector::new(0.0, 64.0)] {
        assert!(primary.corners.contains(&corner));
        assert!(secondary.corners.contains(&corner));
    }
}

#[test]
fn invert_becomes_a_filter() {
    assert_eq!(FaviconFrame::compose(64, 0.0, true).filter, "invert(1)");
}

#[test]
fn color_stops_are_trimmed_and_paired() {
    let read = ColorStops::read(|name| match name {
        PROP_PRIMARY_START => " #111".to_string(),
        PROP_PRIMARY_END => "#222 ".to_string(),
        PROP_SECONDARY_START => "  #333".to_string(),
        PROP_SECONDARY_END => "#444".to_string(),
        _ => String::new(),
    })
    .unwrap();
    assert_eq!(read, stops());
    assert_eq!(read.pair(Palette::Primary), ("#111", "#222"));
    assert_eq!(read.pair(Palette::Secondary), ("#333", "#444"));
}

#[test]
fn color_stops_are_read_once() {
    let mut engine = Engine::new(MotionConfig::default(), true);
    assert!(engine.cached_color_stops().is_none());

    // A failed read is retried on the next frame
    assert!(engine.color_stops_or_try_read(|| None).is_none());
    assert_eq!(engine.color_stops_or_try_read(|| Some(stops())), Some(&stops()));

    let cached = engine.color_stops_or_try_read(|| unreachable!("already cached"));
    assert_eq!(cached, Some(&stops()));
}

#[test]
fn engine_frame_uses_configured_size() {
    let cfg = MotionConfig {
        favicon_size: 32,
        ..MotionConfig::default()
    };
    let engine = Engine::new(cfg, true);
    let p = engine.present();
    let frame = engine.favicon_frame(&p);
    assert_eq!(frame.size, 32.0);
    assert_eq!(frame.filter, "none");
}

#[test]
fn undefined_stops_are_not_a_read() {
    let partial = ColorStops::read(|name| match name {
        PROP_PRIMARY_START => "#111".to_string(),
        _ => "  ".to_string(),
    });
    assert_eq!(partial, None);
}

#[test]
fn blank_first_read_is_retried() {
    let mut engine = Engine::new(MotionConfig::default(), true);

    // Stylesheet not applied yet: every custom property is empty
    let first = engine.color_stops_or_try_read(|| ColorStops::read(|_| String::new()));
    assert!(first.is_none());
    assert!(engine.cached_color_stops().is_none());

    let later = engine.color_stops_or_try_read(|| ColorStops::read(|_| "#fff".to_string()));
    assert_eq!(later.map(|s| s.pair(Palette::Primary)), Some(("#fff", "#fff")));
    assert_eq!(
        engine.cached_color_stops().map(|s| s.secondary_end.as_str()),
        Some("#fff")
    );
}
