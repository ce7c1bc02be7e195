//! In-place threshold clamp.
//!
//! For every index `i`, `values[i]` is replaced with `0.0` when it is strictly
//! greater than `thresholds[i]`; otherwise it is left untouched. Comparison is
//! IEEE ordering, so a NaN on either side never zeroes the value.
//!
//! Both slices must have the same length. Lengths are checked before any
//! element is touched, so a rejected call leaves `values` exactly as it was.

use rayon::prelude::*;

use crate::error::ClampError;

fn check_lengths(values: &[f64], thresholds: &[f64]) -> Result<(), ClampError> {
    if values.len() != thresholds.len() {
        return Err(ClampError::LengthMismatch {
            values: values.len(),
            thresholds: thresholds.len(),
        });
    }
    Ok(())
}

/// Zero every value that exceeds its paired threshold.
pub fn clamp_above(values: &mut [f64], thresholds: &[f64]) -> Result<(), ClampError> {
    clamp_above_counted(values, thresholds).map(|_| ())
}

/// Same as [`clamp_above`], returning the number of elements that were zeroed.
///
/// A value already equal to zero that exceeds a negative threshold is
/// assigned again and therefore counted.
pub fn clamp_above_counted(values: &mut [f64], thresholds: &[f64]) -> Result<usize, ClampError> {
    check_lengths(values, thresholds)?;

    let mut zeroed = 0;
    for (v, &t) in values.iter_mut().zip(thresholds) {
        if *v > t {
            *v = 0.0;
            zeroed += 1;
        }
    }
    Ok(zeroed)
}

/// Parallel [`clamp_above`]. Indices are independent, so the result is
/// identical to the sequential pass.
pub fn par_clamp_above(values: &mut [f64], thresholds: &[f64]) -> Result<(), ClampError> {
    par_clamp_above_counted(values, thresholds).map(|_| ())
}

/// Parallel [`clamp_above_counted`].
pub fn par_clamp_above_counted(
    values: &mut [f64],
    thresholds: &[f64],
) -> Result<usize, ClampError> {
    check_lengths(values, thresholds)?;

    let zeroed = values
        .par_iter_mut()
        .zip(thresholds.par_iter())
        .map(|(v, &t)| {
            if *v > t {
                *v = 0.0;
                1_usize
            } else {
                0
            }
        })
        .sum();
    Ok(zeroed)
}
