// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coptic calendar.
//!
//! Egyptian month structure with a Julian-style leap day: years congruent
//! to 3 mod 4 gain a sixth epagomenal day. The epoch is the era of
//! Diocletian, August 29, 284 CE (Julian).

use super::super::error::CalendarError;
use super::gregorian;

/// R.D. ordinal of Coptic 0001-01-01 (era of Diocletian).
pub const EPOCH: i64 = 103_605;

/// A date in the Coptic calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopticDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CopticDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "coptic",
                reason: "month outside 1..=13",
            });
        }
        let limit = match month {
            13 if is_leap_year(year) => 6,
            13 => 5,
            _ => 30,
        };
        if day < 1 || day > limit {
            return Err(CalendarError::InvalidDate {
                system: "coptic",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        let year = self.year as i64;
        EPOCH - 1
            + 365 * (year - 1)
            + year.div_euclid(4)
            + 30 * (self.month as i64 - 1)
            + self.day as i64
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let year = (4 * (ordinal - EPOCH) + 1463).div_euclid(1461) as i32;
        let month = (1 + (ordinal - Self::ymd(year, 1, 1).to_ordinal()).div_euclid(30)) as u8;
        let day = (ordinal + 1 - Self::ymd(year, month, 1).to_ordinal()) as u8;
        Self { year, month, day }
    }
}

impl PartialOrd for CopticDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CopticDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for CopticDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coptic {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// True for Coptic leap years (year mod 4 == 3).
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Ordinals of Coptic `month`/`day` falling in Gregorian year `year`
/// (zero, one, or two dates).
pub fn in_gregorian(month: u8, day: u8, year: i32) -> Vec<i64> {
    let jan1 = gregorian::new_year(year);
    let coptic_year = CopticDate::from_ordinal(jan1).year;
    let range = gregorian::year_range(year);
    [coptic_year, coptic_year + 1]
        .into_iter()
        .map(|y| CopticDate::ymd(y, month, day).to_ordinal())
        .filter(|ordinal| range.contains(ordinal))
        .collect()
}

/// Coptic Christmas (Koiak 29) dates in Gregorian year `year`.
pub fn christmas(year: i32) -> Vec<i64> {
    in_gregorian(4, 29, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ordinals() {
        assert_eq!(CopticDate::ymd(1, 1, 1).to_ordinal(), EPOCH);
        assert_eq!(CopticDate::ymd(1731, 10, 11).to_ordinal(), 735_767);
        assert_eq!(CopticDate::from_ordinal(735_767), CopticDate::ymd(1731, 10, 11));
    }

    #[test]
    fn leap_years_gain_a_sixth_epagomenal_day() {
        assert!(is_leap_year(3));
        assert!(!is_leap_year(4));
        assert_eq!(
            CopticDate::ymd(4, 1, 1).to_ordinal() - CopticDate::ymd(3, 1, 1).to_ordinal(),
            366
        );
        assert!(CopticDate::new(3, 13, 6).is_ok());
        assert!(CopticDate::new(4, 13, 6).is_err());
    }

    #[test]
    fn roundtrip() {
        for ordinal in 735_000..735_800 {
            let date = CopticDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn christmas_2015_is_january_7() {
        assert_eq!(christmas(2015), vec![735_605]);
    }
}
