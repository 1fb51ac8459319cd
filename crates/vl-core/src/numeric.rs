/// Floating point type used throughout system
pub type Real = f64;

/// Substitute denominator used by formulas when a divisor collapses to zero.
pub const DENOMINATOR_EPSILON: Real = 1e-9;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Guard a divisor against exact zero (and NaN).
///
/// Only the degenerate cases are replaced; tiny but legitimate divisors such
/// as `m * v` for an electron pass through untouched.
#[inline]
pub fn guard_denominator(d: Real) -> Real {
    if d == 0.0 || d.is_nan() {
        DENOMINATOR_EPSILON
    } else {
        d
    }
}

/// Render a value for display next to an output label.
///
/// Non-finite values are shown as an em dash rather than `NaN`/`inf`.
pub fn format_value(v: Real) -> String {
    if !v.is_finite() {
        return "—".to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs();
    if !(0.001..1000.0).contains(&magnitude) {
        return format!("{v:.2e}");
    }
    let fixed = format!("{v:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
