// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ethiopic calendar.
//!
//! The Coptic structure shifted to the era of the Incarnation
//! (August 29, 8 CE Julian).

use super::super::error::CalendarError;
use super::coptic::{self, CopticDate};

/// R.D. ordinal of Ethiopic 0001-01-01 (era of the Incarnation).
pub const EPOCH: i64 = 2796;

/// A date in the Ethiopic calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthiopicDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl EthiopicDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let coptic = CopticDate::new(year, month, day).map_err(|_| {
            CalendarError::InvalidDate {
                system: "ethiopic",
                reason: "month/day outside the Coptic-style year",
            }
        })?;
        Ok(Self {
            year: coptic.year,
            month: coptic.month,
            day: coptic.day,
        })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        EPOCH + CopticDate::ymd(self.year, self.month, self.day).to_ordinal() - coptic::EPOCH
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let coptic = CopticDate::from_ordinal(ordinal + coptic::EPOCH - EPOCH);
        Self {
            year: coptic.year,
            month: coptic.month,
            day: coptic.day,
        }
    }
}

impl PartialOrd for EthiopicDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EthiopicDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ethiopic {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ordinals() {
        assert_eq!(EthiopicDate::ymd(1, 1, 1).to_ordinal(), EPOCH);
        assert_eq!(EthiopicDate::ymd(2007, 10, 11).to_ordinal(), 735_767);
        assert_eq!(EthiopicDate::from_ordinal(735_767), EthiopicDate::ymd(2007, 10, 11));
    }

    #[test]
    fn roundtrip() {
        for ordinal in 735_000..735_800 {
            let date = EthiopicDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn leap_rule_matches_coptic() {
        assert!(EthiopicDate::new(2003, 13, 6).is_ok());
        assert!(EthiopicDate::new(2004, 13, 6).is_err());
    }
}
