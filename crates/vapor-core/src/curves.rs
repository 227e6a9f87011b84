//! Interpolation curves used by the fade shape

/// Linear interpolation between two floats
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep with an epsilon-guarded denominator.
///
/// Returns 0 for `x <= edge0`, 1 for `x >= edge1`, and eases in between.
/// A degenerate edge pair (`edge1 == edge0`) produces a step rather than
/// a division by zero.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let u = ((x - edge0) / (edge1 - edge0).max(1e-6)).clamp(0.0, 1.0);
    u * u * (3.0 - 2.0 * u)
}
