/// Round `value` to `digits` decimal places
#[inline]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Shortest round-trip representation that always shows a decimal point
/// (`85.71`, `100.0`, `0.0`)
pub fn format_float(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}
