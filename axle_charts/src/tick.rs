// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" tick interval selection and tick value generation.

#[cfg(all(not(feature = "std"), not(test)))]
use crate::float::FloatExt;

use smallvec::SmallVec;

/// Upper bound on the number of ticks generated for a single axis.
pub(crate) const MAX_TICKS: usize = 10_000;

/// Mantissas of the round numbers, in ascending order.
const ROUND_MANTISSAS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Returns the smallest number of the form `{1, 2, 2.5, 5} × 10^k` that is `>= raw`.
///
/// For positive finite input the result is scale invariant: `next_round_number(10 * r)`
/// is `10 * next_round_number(r)` up to floating-point rounding.
///
/// Non-positive or non-finite input is returned unchanged.
///
/// ```
/// use axle_charts::next_round_number;
///
/// assert_eq!(next_round_number(3.2), 5.0);
/// assert_eq!(next_round_number(22.0), 25.0);
/// assert_eq!(next_round_number(50.0), 50.0);
/// assert_eq!(next_round_number(0.7), 1.0);
/// ```
pub fn next_round_number(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return raw;
    }
    let decade = {
        let e = raw.log10().floor().clamp(-400.0, 400.0);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
        {
            e as i32
        }
    };
    // `log10` may land one decade off near exact powers of ten, so start one below.
    for exp in (decade - 1)..=(decade + 1) {
        let base = pow10(exp);
        for m in ROUND_MANTISSAS {
            let candidate = m * base;
            if candidate >= raw {
                return candidate;
            }
        }
    }
    pow10(decade + 2)
}

/// `10^exp`, dividing for negative exponents so that `0.1`, `0.01`, ... are exact literals.
fn pow10(exp: i32) -> f64 {
    if exp >= 0 {
        10_f64.powi(exp)
    } else {
        1.0 / 10_f64.powi(-exp)
    }
}

/// Generates tick values for `[min, max]` on multiples of `step`.
///
/// The first candidate is the largest multiple of `step` not above `min`; it is kept only
/// if it lies within the range. Candidates then advance by `step` while they do not exceed
/// `max`. Both comparisons allow a relative slack of `1e-9 * step` so that accumulated
/// floating error does not drop a tick that sits exactly on a bound.
///
/// Callers must pass a positive finite `step` and `min < max`.
pub(crate) fn tick_values(min: f64, max: f64, step: f64) -> SmallVec<[f64; 16]> {
    let mut out = SmallVec::new();
    let slack = step * 1e-9;
    let start = (min / step).floor() * step;
    let mut i = 0_u32;
    loop {
        let v = start + step * f64::from(i);
        if v > max + slack {
            break;
        }
        if v >= min - slack {
            if out.len() == MAX_TICKS {
                tracing::warn!(min, max, step, "tick count capped at {MAX_TICKS}");
                break;
            }
            out.push(v);
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn round_numbers_cover_every_mantissa() {
        assert_eq!(next_round_number(1.0), 1.0);
        assert_eq!(next_round_number(1.1), 2.0);
        assert_eq!(next_round_number(2.1), 2.5);
        assert_eq!(next_round_number(2.6), 5.0);
        assert_eq!(next_round_number(5.1), 10.0);
        assert_eq!(next_round_number(100.0), 100.0);
        assert_eq!(next_round_number(1000.0), 1000.0);
        assert_eq!(next_round_number(0.15), 0.2);
        assert_eq!(next_round_number(0.03), 0.05);
    }

    #[test]
    fn degenerate_input_is_returned_unchanged() {
        assert_eq!(next_round_number(0.0), 0.0);
        assert_eq!(next_round_number(-3.0), -3.0);
        assert!(next_round_number(f64::NAN).is_nan());
        assert_eq!(next_round_number(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn ticks_include_both_bounds_on_multiples() {
        let ticks: Vec<f64> = tick_values(0.0, 60.0, 15.0).into_iter().collect();
        assert_eq!(ticks, [0.0, 15.0, 30.0, 45.0, 60.0]);
    }

    #[test]
    fn ticks_skip_the_multiple_below_min() {
        let ticks: Vec<f64> = tick_values(13.0, 42.0, 5.0).into_iter().collect();
        assert_eq!(ticks, [15.0, 20.0, 25.0, 30.0, 35.0, 40.0]);

        let ticks: Vec<f64> = tick_values(-30.0, -10.0, 5.0).into_iter().collect();
        assert_eq!(ticks, [-30.0, -25.0, -20.0, -15.0, -10.0]);

        let ticks: Vec<f64> = tick_values(-13.0, 7.0, 5.0).into_iter().collect();
        assert_eq!(ticks, [-10.0, -5.0, 0.0, 5.0]);
    }

    #[test]
    fn drifted_upper_bound_is_kept() {
        let ticks = tick_values(0.0, 0.3, 0.1);
        assert_eq!(ticks.len(), 4, "{ticks:?}");
    }

    #[test]
    fn tick_count_is_capped() {
        let ticks = tick_values(0.0, 1.0e6, 1.0);
        assert_eq!(ticks.len(), MAX_TICKS);
    }
}
