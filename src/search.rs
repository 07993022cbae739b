// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bounded search primitives.
//!
//! Calendar computations locate events by scanning day numbers against a
//! predicate or by inverting a quasi-monotonic angular function.  Both kinds
//! of search are seeded by mean-motion estimates that land within a few days
//! of the answer, so a generous fixed horizon distinguishes a slow search
//! from a wrong one: exceeding it reports an error instead of looping.

use super::error::CalendarError;
use super::moment_ext::Moment;
use qtty::Days;

/// Scan horizon for integer day searches, in days.
///
/// The widest legitimate scan in the crate is under forty days (a phasis
/// search from a mean-new-moon estimate); an order of magnitude beyond that
/// can only mean a broken predicate.
pub const SEARCH_HORIZON: i64 = 400;

/// Number of bisection halvings for angular inversion, far more than the
/// tolerance needs for any bracket the crate constructs.
const MAX_HALVINGS: u32 = 200;

/// Tolerance for angular inversion, in days (just under a second).
const INVERSION_TOLERANCE: f64 = 1e-5;

/// The smallest integer `i >= start` with `pred(i)` true.
pub fn next_int<P>(start: i64, pred: P) -> Result<i64, CalendarError>
where
    P: Fn(i64) -> bool,
{
    (start..start + SEARCH_HORIZON)
        .find(|&i| pred(i))
        .ok_or(CalendarError::SearchExhausted {
            start,
            bound: SEARCH_HORIZON,
        })
}

/// The last integer of the true prefix starting at `start`: the largest
/// `i` with `pred` true on all of `start..=i`.  Returns `start − 1` when
/// `pred(start)` is already false.
pub fn final_int<P>(start: i64, pred: P) -> Result<i64, CalendarError>
where
    P: Fn(i64) -> bool,
{
    let mut i = start;
    while pred(i) {
        i += 1;
        if i - start >= SEARCH_HORIZON {
            return Err(CalendarError::SearchExhausted {
                start,
                bound: SEARCH_HORIZON,
            });
        }
    }
    Ok(i - 1)
}

/// The moment in `[a, b]` at which the ascending angular function `f`
/// passes through `target` (mod 360°), located by bisection to within
/// [`INVERSION_TOLERANCE`].
///
/// The bracket must be shorter than the function's period, so that
/// "`f(x) − target` lies in [0°, 180°)" separates the two sides of the
/// crossing.
pub fn invert_angular<F>(f: F, target: f64, a: Moment, b: Moment) -> Moment
where
    F: Fn(Moment) -> f64,
{
    let mut lo = a;
    let mut hi = b;
    for _ in 0..MAX_HALVINGS {
        if (hi - lo).value() < INVERSION_TOLERANCE {
            break;
        }
        let mid = Moment::new((lo.value() + hi.value()) / 2.0);
        if (f(mid) - target).rem_euclid(360.0) < 180.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Moment::new((lo.value() + hi.value()) / 2.0)
}
