/// Deterministic pseudo-random scalar in `[0, 1)` for a given seed.
///
/// Pure and stateless; the same seed yields the same value on every run, which is what keeps
/// exported artifacts identical to live playback.
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

/// Remap a `[0, 1)` draw onto a range of width `scale` centered on zero.
#[inline]
pub fn centered(v: f64, scale: f64) -> f64 {
    (v - 0.5) * scale
}

/// Format with exactly two decimals, normalizing negative zero.
pub fn fmt2(v: f64) -> String {
    let s = format!("{v:.2}");
    if s == "-0.00" { "0.00".to_owned() } else { s }
}

/// Convert a pixel length to a percentage of `reference` (viewport-relative units).
#[inline]
pub fn px_to_percent(px: f64, reference: f64) -> f64 {
    px / reference * 100.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
