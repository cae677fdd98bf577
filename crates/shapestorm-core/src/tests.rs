//! Tests for config loading, colour handling and serde shapes.

use glam::Vec2;

use crate::commands::{InputEvent, Key, MouseButton};
use crate::components::{Collision, LifeSpan};
use crate::config::{ConfigError, GameConfig};
use crate::state::FrameSnapshot;
use crate::types::{Bounds, Rgba};

const SHIPPED_CONFIG: &str = include_str!("../../../config/game.toml");

// ---- Config ----

#[test]
fn test_shipped_config_parses_and_validates() {
    let config = GameConfig::from_toml_str(SHIPPED_CONFIG).unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.window.framerate, 60);
    assert!(config.enemy.sides_min <= config.enemy.sides_max);
    assert_eq!(config.ability.color, Rgba::opaque(230, 20, 20));
}

#[test]
fn test_missing_section_is_a_parse_error() {
    let without_ability: String = SHIPPED_CONFIG
        .split("[ability]")
        .next()
        .unwrap()
        .to_string();
    let err = GameConfig::from_toml_str(&without_ability).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    assert!(err.to_string().contains("ability"), "error should name the section: {err}");
}

#[test]
fn test_unknown_field_rejected() {
    let text = SHIPPED_CONFIG.replace("spawn_rate = 60", "spawn_rate = 60\nspawn_rat = 3");
    let err = GameConfig::from_toml_str(&text).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_inverted_side_range_rejected() {
    let text = SHIPPED_CONFIG.replace("sides_min = 3", "sides_min = 9");
    let err = GameConfig::from_toml_str(&text).unwrap_err();
    assert!(
        matches!(err, ConfigError::Invalid { field: "enemy.sides_max", .. }),
        "got {err:?}"
    );
}

#[test]
fn test_zero_ability_duration_rejected() {
    let text = SHIPPED_CONFIG.replace("duration = 120", "duration = 0");
    let err = GameConfig::from_toml_str(&text).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "ability.duration", .. }));
}

#[test]
fn test_oversized_player_rejected() {
    // sqrt(12) * 400 is far beyond the half-diagonal of a 1280x720 field.
    let text = SHIPPED_CONFIG.replace("size = 32.0\nspeed", "size = 400.0\nspeed");
    let err = GameConfig::from_toml_str(&text).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "player.size", .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = GameConfig::load("definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("definitely/not/here.toml"));
}

#[test]
fn test_window_bounds_centered_on_origin() {
    let config = GameConfig::from_toml_str(SHIPPED_CONFIG).unwrap();
    let bounds = config.window.bounds();
    assert_eq!(bounds.min, Vec2::new(-640.0, -360.0));
    assert_eq!(bounds.max, Vec2::new(640.0, 360.0));
    assert_eq!(bounds.center(), Vec2::ZERO);
}

// ---- Colour ----

#[test]
fn test_rgba_serializes_as_array() {
    let c = Rgba::new(1, 2, 3, 4);
    assert_eq!(serde_json::to_string(&c).unwrap(), "[1,2,3,4]");
    let back: Rgba = serde_json::from_str("[1,2,3,4]").unwrap();
    assert_eq!(back, c);
}

#[test]
fn test_rgba_lerp_endpoints_keep_alpha() {
    let base = Rgba::new(0, 0, 0, 200);
    let hot = Rgba::opaque(255, 100, 50);
    assert_eq!(base.lerp(hot, 0.0), base);
    assert_eq!(base.lerp(hot, 1.0), Rgba::new(255, 100, 50, 200));
    // 127.5 truncates.
    assert_eq!(base.lerp(hot, 0.5), Rgba::new(127, 50, 25, 200));
}

// ---- Components ----

#[test]
fn test_lifespan_starts_full() {
    let ls = LifeSpan::new(30);
    assert_eq!(ls.remaining, 30);
    assert!((ls.fraction_left() - 1.0).abs() < f32::EPSILON);
    assert_eq!(LifeSpan::new(0).fraction_left(), 0.0);
}

#[test]
#[should_panic(expected = "non-negative")]
fn test_negative_collision_radius_panics() {
    let _ = Collision::new(-1.0);
}

#[test]
fn test_bounds_contains() {
    let b = Bounds::centered(10.0, 4.0);
    assert!(b.contains(Vec2::new(5.0, 2.0)));
    assert!(!b.contains(Vec2::new(5.1, 0.0)));
    assert_eq!(b.width(), 10.0);
    assert_eq!(b.height(), 4.0);
}

// ---- Serde shapes ----

#[test]
fn test_input_event_is_internally_tagged() {
    let ev = InputEvent::MouseDown {
        button: MouseButton::Right,
    };
    let json = serde_json::to_string(&ev).unwrap();
    assert_eq!(json, r#"{"type":"MouseDown","button":"Right"}"#);

    let back: InputEvent = serde_json::from_str(r#"{"type":"KeyUp","key":"Left"}"#).unwrap();
    assert_eq!(back, InputEvent::KeyUp { key: Key::Left });
}

#[test]
fn test_empty_snapshot_serde() {
    let snapshot = FrameSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
}
