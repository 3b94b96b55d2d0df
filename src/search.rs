//! Positional search over slices.
//!
//! Every search returns `Some(index)` of an element equal to the target, or `None`
//! when the target is absent. Absence is an ordinary outcome, never an error.
//!
//! # Strategies
//!
//! | Function | Strategy | Needs sorted input | Cost |
//! |----------|----------|--------------------|------|
//! | [`linear_search`] | Scan front to back, first match wins | no | O(n) |
//! | [`binary_search`] | Halve `[low, high]` around a floor midpoint | yes | O(log n) |
//! | [`interpolation_search`] | Probe where the target "should" be by value | yes | O(log log n) uniform, O(n) worst |
//! | [`fibonacci_search`] | Shrink a Fibonacci-sized window, no division | yes | O(log n) |
//!
//! On unsorted input the sorted variants may miss a present target, but they always
//! return in-bounds indices and never panic.
//!
//! With duplicates, the sorted variants return *some* matching index, not
//! necessarily the first one.

use num_traits::ToPrimitive;

/// Linear scan returning the first matching index.
pub fn linear_search<T: PartialOrd>(values: &[T], target: T) -> Option<usize> {
    values.iter().position(|value| *value == target)
}

/// Iterative binary search over an ascending slice.
pub fn binary_search<T: PartialOrd>(values: &[T], target: T) -> Option<usize> {
    let mut low = 0usize;
    let mut high = values.len().checked_sub(1)?;

    while low <= high {
        let mid = low + (high - low) / 2;
        if values[mid] == target {
            return Some(mid);
        }
        if values[mid] < target {
            low = mid + 1;
        } else {
            // mid == 0 means nothing is left below the probe.
            high = mid.checked_sub(1)?;
        }
    }

    None
}

/// Interpolation search over an ascending slice.
///
/// The probe is placed by linear interpolation between the values at the current
/// bounds, which converges quickly on evenly spread data. The loop only runs while
/// `values[low] <= target <= values[high]`; once the target falls outside the
/// window it cannot be present.
///
/// When both bounds hold the same value the interpolation would divide by zero, so
/// that window is resolved with a single equality check instead.
pub fn interpolation_search<T>(values: &[T], target: T) -> Option<usize>
where
    T: PartialOrd + ToPrimitive,
{
    let mut low = 0usize;
    let mut high = values.len().checked_sub(1)?;

    while low <= high && target >= values[low] && target <= values[high] {
        if values[high] == values[low] {
            return (values[low] == target).then_some(low);
        }

        let pos = interpolation_probe(values, low, high, &target);
        if values[pos] == target {
            return Some(pos);
        }
        if values[pos] < target {
            low = pos + 1;
        } else {
            high = pos.checked_sub(1)?;
        }
    }

    None
}

/// `low + floor((target - v[low]) * (high - low) / (v[high] - v[low]))`, clamped
/// to `[low, high]`.
///
/// Falls back to the midpoint for values with no `f64` representation.
fn interpolation_probe<T: ToPrimitive>(
    values: &[T],
    low: usize,
    high: usize,
    target: &T,
) -> usize {
    let span = high - low;
    let offset = match (target.to_f64(), values[low].to_f64(), values[high].to_f64()) {
        (Some(t), Some(lo), Some(hi)) => ((t - lo) * span as f64 / (hi - lo)).floor(),
        _ => (span / 2) as f64,
    };
    // `as` saturates: NaN and negatives become 0, overflow becomes usize::MAX.
    low + (offset as usize).min(span)
}

/// Fibonacci search over an ascending slice.
///
/// Finds the smallest Fibonacci number `fm >= n`, then probes `fm2` past the
/// current offset. Moving right drops the window one Fibonacci step
/// (`fm <- fm1`), moving left drops it two (`fm <- fm2`). Only addition and
/// subtraction are used to place probes.
///
/// The main loop stops once the window is down to a single candidate, which is
/// checked separately at `offset + 1`.
pub fn fibonacci_search<T: PartialOrd>(values: &[T], target: T) -> Option<usize> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    let mut fm2 = 0usize;
    let mut fm1 = 1usize;
    let mut fm = fm1 + fm2;
    while fm < n {
        fm2 = fm1;
        fm1 = fm;
        fm = fm1 + fm2;
    }

    // Index just left of the live window; `None` until the first rightward move.
    let mut offset: Option<usize> = None;
    while fm > 1 {
        // fm > 1 implies fm2 >= 1, so the probe is always past the offset.
        let i = offset.map_or(fm2 - 1, |o| o + fm2).min(n - 1);
        if values[i] < target {
            fm = fm1;
            fm1 = fm2;
            fm2 = fm - fm1;
            offset = Some(i);
        } else if values[i] > target {
            fm = fm2;
            fm1 -= fm2;
            fm2 = fm - fm1;
        } else {
            return Some(i);
        }
    }

    let last = offset.map_or(0, |o| o + 1);
    if fm1 != 0 && last < n && values[last] == target {
        return Some(last);
    }

    None
}
