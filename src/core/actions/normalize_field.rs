use crate::core::data::scalar_field::ScalarField;

/// Value every pixel of a constant field normalizes to.
pub const CONSTANT_FIELD_VALUE: f64 = 0.5;

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Linearly rescales `field` so its finite minimum maps to `0` and its finite
/// maximum to `1`.
///
/// When the finite values span no range (all equal, or none at all) every
/// pixel maps to [`CONSTANT_FIELD_VALUE`], non-finite ones included.
/// Otherwise infinite values clamp to the nearer end of `[0, 1]` and `NaN`
/// maps to `0`. The output is always finite and normalizing it again returns
/// it unchanged.
#[must_use]
pub fn normalize(field: &ScalarField) -> ScalarField {
    match field.min_max() {
        Some((min, max)) if max > min => {
            if (max - min).is_finite() {
                let range = max - min;
                field.map(|value| clamp_unit((value - min) / range))
            } else {
                // Halved to keep a range near f64::MAX from overflowing.
                let range = max / 2.0 - min / 2.0;
                field.map(|value| clamp_unit((value / 2.0 - min / 2.0) / range))
            }
        }
        _ => field.map(|_| CONSTANT_FIELD_VALUE),
    }
}
