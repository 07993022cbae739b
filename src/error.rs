// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Crate-wide error type.
//!
//! Every fallible conversion or search returns [`CalendarError`].  Errors are
//! local and synchronous: the computations are deterministic, so there is no
//! retry path and no partial result.

/// Errors produced by calendar conversions and astronomical searches.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// A calendar field combination that cannot exist (e.g. a leap-month day
    /// in a year without that leap month, or a stem/branch pair of mixed
    /// parity).
    #[error("invalid {system} date: {reason}")]
    InvalidDate {
        system: &'static str,
        reason: &'static str,
    },

    /// A query whose reference date precedes the date it is measured from
    /// (an age or anniversary before the birth date), or a date before the
    /// system's epoch.
    #[error("{system}: date out of the calendar's validity range")]
    OutOfRange { system: &'static str },

    /// A bounded predicate search ran past its horizon without the predicate
    /// becoming true.
    #[error("search exhausted after scanning {bound} days from day {start}")]
    SearchExhausted { start: i64, bound: i64 },

    /// Angular inversion could not bracket the requested crossing.
    #[error("no crossing of {target} degrees inside the search bracket")]
    NoCrossing { target: f64 },

    /// The sun never reaches the requested depression angle on that date
    /// (polar day or polar night), so the event a calendar anchors on is
    /// undefined there.
    #[error("twilight undefined: sun does not reach {degrees} degrees below the horizon")]
    TwilightUndefined { degrees: f64 },

    /// A modular combination of two cyclical day names that never coincides.
    #[error("the two cycle positions never fall on the same day")]
    ImpossibleCycleCombination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = CalendarError::SearchExhausted {
            start: 1000,
            bound: 400,
        };
        assert_eq!(
            e.to_string(),
            "search exhausted after scanning 400 days from day 1000"
        );

        let e = CalendarError::InvalidDate {
            system: "chinese",
            reason: "stem and branch parity differ",
        };
        assert!(e.to_string().contains("chinese"));
    }
}
