// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Egyptian calendar.
//!
//! The ancient wandering year: twelve 30-day months followed by five
//! epagomenal days (month 13), with no leap rule at all. The epoch is the
//! era of Nabonassar, JD 1448638.

use super::super::error::CalendarError;

/// R.D. ordinal of Egyptian 0001-01-01 (Nabonassar era).
pub const EPOCH: i64 = -272_787;

/// A date in the Egyptian calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EgyptianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl EgyptianDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "egyptian",
                reason: "month outside 1..=13",
            });
        }
        let limit = if month == 13 { 5 } else { 30 };
        if day < 1 || day > limit {
            return Err(CalendarError::InvalidDate {
                system: "egyptian",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        EPOCH + 365 * (self.year as i64 - 1) + 30 * (self.month as i64 - 1) + self.day as i64 - 1
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let days = ordinal - EPOCH;
        let year = days.div_euclid(365) + 1;
        let month = days.rem_euclid(365).div_euclid(30) + 1;
        let day = days - 365 * (year - 1) - 30 * (month - 1) + 1;
        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }
}

impl PartialOrd for EgyptianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EgyptianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for EgyptianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Egyptian {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ordinals() {
        assert_eq!(EgyptianDate::ymd(1, 1, 1).to_ordinal(), EPOCH);
        assert_eq!(EgyptianDate::ymd(747, 2, 11).to_ordinal(), -457);
        assert_eq!(EgyptianDate::from_ordinal(710_347), EgyptianDate::ymd(2694, 7, 10));
    }

    #[test]
    fn roundtrip_including_epagomenal_days() {
        for ordinal in (-273_200..-272_400).chain(710_000..710_800) {
            let date = EgyptianDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn validation() {
        assert!(EgyptianDate::new(747, 13, 5).is_ok());
        assert!(EgyptianDate::new(747, 13, 6).is_err());
        assert!(EgyptianDate::new(747, 14, 1).is_err());
        assert!(EgyptianDate::new(747, 1, 31).is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(EgyptianDate::ymd(747, 2, 11) < EgyptianDate::ymd(747, 13, 1));
        assert!(EgyptianDate::ymd(747, 13, 5) < EgyptianDate::ymd(748, 1, 1));
    }
}
