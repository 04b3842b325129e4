/// Decreasing response curve `1 / (1 + x / scale)`.
///
/// 1.0 at zero, 0.5 at `scale`, and approaching zero for large inputs.
/// Negative inputs are treated as zero.
pub fn response_curve(x: f32, scale: f32) -> f32 {
    if scale <= 0.0 {
        return if x > 0.0 { 0.0 } else { 1.0 };
    }
    1.0 / (1.0 + x.max(0.0) / scale)
}
