use glam::Vec2;

/// Map a client-space pointer position onto surface pixels.
///
/// `rect_origin`/`rect_size` are the canvas's bounding client rect and
/// `surface_size` its backing size. A collapsed rect maps by offset only.
#[inline]
pub fn client_to_surface(client: Vec2, rect_origin: Vec2, rect_size: Vec2, surface_size: Vec2) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local * surface_size / rect_size
    } else {
        local
    }
}

/// Agent count from a `data-agents` value. Out-of-range counts are clamped to
/// `max`; anything unparsable is rejected.
#[inline]
pub fn parse_agent_count(raw: &str, max: usize) -> Option<usize> {
    raw.trim().parse::<usize>().ok().map(|n| n.min(max))
}

/// Seed from a `data-seed` value, decimal or `0x`-prefixed hex.
#[inline]
pub fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse::<u64>().ok(),
    }
}

/// Surface size for a viewport, truncated to whole pixels. Negative or
/// non-finite dimensions collapse to zero.
#[inline]
pub fn viewport_pixels(width: f64, height: f64) -> (u32, u32) {
    let px = |v: f64| if v.is_finite() && v > 0.0 { v as u32 } else { 0 };
    (px(width), px(height))
}
