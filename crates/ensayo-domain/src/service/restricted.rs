//! Restricted-value normalizers for the fixed-length array fields
//!
//! Out-of-domain values never reach the derivation engine or the store:
//! blow counts outside the allowed set become unset, unknown equipment
//! codes become the placeholder. Both normalizers pad or truncate to the
//! array's fixed length.

use crate::reference::{is_valid_codigo, CODIGO_SIN_ASIGNAR, GOLPES_PERMITIDOS};

/// Keep only blow counts from the allowed set {56, 25, 10}; anything else
/// (including non-integral or missing values) becomes `None`.
pub fn normalize_golpes<const N: usize>(values: &[Option<f64>]) -> [Option<f64>; N] {
    std::array::from_fn(|idx| {
        values.get(idx).copied().flatten().filter(|v| {
            v.is_finite()
                && v.fract() == 0.0
                && *v >= 0.0
                && GOLPES_PERMITIDOS.contains(&(*v as u32))
        })
    })
}

/// Keep only codes present in the mold/tare catalog; anything else
/// becomes the `"-"` placeholder.
pub fn normalize_codigos<const N: usize>(values: &[Option<String>]) -> [Option<String>; N] {
    std::array::from_fn(|idx| {
        match values.get(idx).and_then(|v| v.as_deref()) {
            Some(v) if is_valid_codigo(v) => Some(v.to_string()),
            _ => Some(CODIGO_SIN_ASIGNAR.to_string()),
        }
    })
}
