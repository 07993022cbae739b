// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Armenian calendar.
//!
//! Structurally identical to the Egyptian calendar (twelve 30-day months
//! plus five epagomenal days), shifted to the Armenian era of 552 CE.

use super::super::error::CalendarError;
use super::egyptian::{self, EgyptianDate};

/// R.D. ordinal of Armenian 0001-01-01 (July 11, 552 CE Julian).
pub const EPOCH: i64 = 201_443;

/// A date in the Armenian calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmenianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl ArmenianDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let egyptian = EgyptianDate::new(year, month, day).map_err(|_| {
            CalendarError::InvalidDate {
                system: "armenian",
                reason: "month/day outside the Egyptian-style year",
            }
        })?;
        Ok(Self {
            year: egyptian.year,
            month: egyptian.month,
            day: egyptian.day,
        })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        EPOCH + EgyptianDate::ymd(self.year, self.month, self.day).to_ordinal()
            - egyptian::EPOCH
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let egyptian = EgyptianDate::from_ordinal(ordinal + egyptian::EPOCH - EPOCH);
        Self {
            year: egyptian.year,
            month: egyptian.month,
            day: egyptian.day,
        }
    }
}

impl PartialOrd for ArmenianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArmenianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for ArmenianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Armenian {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ordinals() {
        assert_eq!(ArmenianDate::ymd(1, 1, 1).to_ordinal(), EPOCH);
        assert_eq!(ArmenianDate::ymd(1464, 6, 18).to_ordinal(), 735_605);
        assert_eq!(ArmenianDate::from_ordinal(735_767), ArmenianDate::ymd(1464, 11, 30));
    }

    #[test]
    fn roundtrip() {
        for ordinal in 735_000..735_800 {
            let date = ArmenianDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn validation_follows_the_egyptian_shape() {
        assert!(ArmenianDate::new(1464, 13, 5).is_ok());
        assert!(ArmenianDate::new(1464, 13, 6).is_err());
        assert!(ArmenianDate::new(1464, 0, 1).is_err());
    }
}
