// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_surface_identity_for_full_viewport_canvas() {
    let p = client_to_surface(
        Vec2::new(120.0, 45.0),
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(120.0, 45.0));
}

#[test]
fn client_to_surface_identity_is_exact_on_odd_viewports() {
    // dividing first rounds, e.g. (x / 1366) * 1366 != x for some pixels
    let size = Vec2::new(1366.0, 767.0);
    for x in 0..1366 {
        let client = Vec2::new(x as f32, (x % 767) as f32);
        assert_eq!(client_to_surface(client, Vec2::ZERO, size, size), client);
    }
}

#[test]
fn client_to_surface_offsets_and_scales() {
    // canvas drawn at (10, 20), CSS size 400x300, backing store 800x600
    let p = client_to_surface(
        Vec2::new(210.0, 170.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(400.0, 300.0));
}

#[test]
fn client_to_surface_collapsed_rect_maps_by_offset() {
    let p = client_to_surface(
        Vec2::new(15.0, 5.0),
        Vec2::new(5.0, 5.0),
        Vec2::ZERO,
        Vec2::ZERO,
    );
    assert_eq!(p, Vec2::new(10.0, 0.0));
}

#[test]
fn client_to_surface_passes_out_of_range_through() {
    let p = client_to_surface(
        Vec2::new(-50.0, 900.0),
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(-50.0, 900.0));
}

#[test]
fn parse_agent_count_accepts_and_clamps() {
    assert_eq!(parse_agent_count("3", 16), Some(3));
    assert_eq!(parse_agent_count(" 0 ", 16), Some(0));
    assert_eq!(parse_agent_count("99", 16), Some(16));
    assert_eq!(parse_agent_count("-1", 16), None);
    assert_eq!(parse_agent_count("two", 16), None);
}

#[test]
fn parse_seed_decimal_and_hex() {
    assert_eq!(parse_seed("42"), Some(42));
    assert_eq!(parse_seed("0x2a"), Some(42));
    assert_eq!(parse_seed("0XFF"), Some(255));
    assert_eq!(parse_seed("0xzz"), None);
    assert_eq!(parse_seed(""), None);
}

#[test]
fn viewport_pixels_truncates_and_floors_at_zero() {
    assert_eq!(viewport_pixels(1280.7, 720.2), (1280, 720));
    assert_eq!(viewport_pixels(0.0, 0.0), (0, 0));
    assert_eq!(viewport_pixels(-5.0, f64::NAN), (0, 0));
}
