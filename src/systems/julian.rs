// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian calendar.
//!
//! The pre-Gregorian solar calendar with a leap day every fourth year.
//! There is no year zero: years are positive (CE) or negative (BCE), and
//! BCE leap years are those congruent to 3 mod 4 so the four-year cycle
//! runs unbroken across the era boundary.

use super::super::error::CalendarError;
use super::super::weekday::{weekday_after, DayOfWeek};
use super::gregorian;

/// R.D. ordinal of Julian 0001-01-01 (Gregorian 0000-12-30).
pub const EPOCH: i64 = -1;

#[rustfmt::skip]
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the Julian calendar. `year` is never zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl JulianDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year == 0 {
            return Err(CalendarError::InvalidDate {
                system: "julian",
                reason: "there is no Julian year zero",
            });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "julian",
                reason: "month outside 1..=12",
            });
        }
        let limit = if month == 2 && is_leap_year(year) {
            29
        } else {
            DAYS_IN_MONTH[month as usize - 1]
        };
        if day < 1 || day > limit {
            return Err(CalendarError::InvalidDate {
                system: "julian",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        // Skip the nonexistent year zero when counting from the epoch.
        let y = if self.year < 0 {
            self.year as i64 + 1
        } else {
            self.year as i64
        };
        let mut ordinal = EPOCH - 1
            + 365 * (y - 1)
            + (y - 1).div_euclid(4)
            + (367 * self.month as i64 - 362).div_euclid(12);
        if self.month > 2 {
            ordinal -= if is_leap_year(self.year) { 1 } else { 2 };
        }
        ordinal + self.day as i64
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let approx = (4 * (ordinal - EPOCH) + 1464).div_euclid(1461);
        let year = (if approx <= 0 { approx - 1 } else { approx }) as i32;
        let prior_days = ordinal - Self::ymd(year, 1, 1).to_ordinal();
        let correction = if ordinal < Self::ymd(year, 3, 1).to_ordinal() {
            0
        } else if is_leap_year(year) {
            1
        } else {
            2
        };
        let month = ((12 * (prior_days + correction) + 373).div_euclid(367)) as u8;
        let day = (1 + ordinal - Self::ymd(year, month, 1).to_ordinal()) as u8;
        Self { year, month, day }
    }
}

impl PartialOrd for JulianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JulianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Julian {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A BCE year as the negative value the date type expects.
#[inline]
pub const fn bce(n: i32) -> i32 {
    -n
}

/// A CE year (identity, for symmetry with [`bce`]).
#[inline]
pub const fn ce(n: i32) -> i32 {
    n
}

/// True for Julian leap years. BCE years lean on the mod-4 cycle
/// continuing through the missing year zero.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == if year > 0 { 0 } else { 3 }
}

/// Ordinals of Julian `month`/`day` falling in Gregorian year `year`
/// (zero, one, or two dates).
pub fn in_gregorian(month: u8, day: u8, year: i32) -> Vec<i64> {
    let jan1 = gregorian::new_year(year);
    let julian_year = JulianDate::from_ordinal(jan1).year;
    let next_year = if julian_year == -1 { 1 } else { julian_year + 1 };
    let range = gregorian::year_range(year);
    [julian_year, next_year]
        .into_iter()
        .map(|y| JulianDate::ymd(y, month, day).to_ordinal())
        .filter(|ordinal| range.contains(ordinal))
        .collect()
}

/// Eastern Orthodox Christmas (Julian December 25) dates in Gregorian
/// year `year`.
pub fn eastern_orthodox_christmas(year: i32) -> Vec<i64> {
    in_gregorian(12, 25, year)
}

/// Orthodox Easter Sunday of Gregorian `year` (Julian computus).
pub fn orthodox_easter(year: i32) -> i64 {
    let shifted_epact = (14 + 11 * (year as i64).rem_euclid(19)).rem_euclid(30);
    let julian_year = if year > 0 { year } else { year - 1 };
    let paschal_moon = JulianDate::ymd(julian_year, 4, 19).to_ordinal() - shifted_epact;
    weekday_after(DayOfWeek::Sunday, paschal_moon)
}

/// Pentecost: the forty-ninth day after (Gregorian) Easter.
pub fn pentecost(year: i32) -> i64 {
    gregorian::easter(year) + 49
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ordinals() {
        assert_eq!(JulianDate::ymd(1, 1, 1).to_ordinal(), EPOCH);
        // 2015-06-18 Gregorian is 2015-06-05 Julian.
        assert_eq!(JulianDate::ymd(2015, 6, 5).to_ordinal(), 735_767);
        assert_eq!(JulianDate::from_ordinal(735_767), JulianDate::ymd(2015, 6, 5));
        // The Hijra: Julian 622-07-16.
        assert_eq!(JulianDate::ymd(622, 7, 16).to_ordinal(), 227_015);
    }

    #[test]
    fn leap_years_span_the_era_boundary() {
        assert!(is_leap_year(4));
        assert!(is_leap_year(100));
        assert!(!is_leap_year(2015));
        assert!(is_leap_year(bce(1)));
        assert!(!is_leap_year(bce(2)));
    }

    #[test]
    fn bce_roundtrip() {
        assert_eq!(JulianDate::ymd(bce(1), 3, 1).to_ordinal(), -307);
        for ordinal in -800..-300 {
            let date = JulianDate::from_ordinal(ordinal);
            assert_ne!(date.year, 0);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn validation() {
        assert!(JulianDate::new(0, 1, 1).is_err());
        assert!(JulianDate::new(100, 2, 29).is_ok());
        assert!(JulianDate::new(2015, 2, 29).is_err());
    }

    #[test]
    fn orthodox_easter_dates() {
        assert_eq!(orthodox_easter(2015), 735_700); // April 12
        assert_eq!(orthodox_easter(2010), 733_866); // April 4
        assert_eq!(orthodox_easter(2016), 736_085); // May 1
    }

    #[test]
    fn orthodox_christmas_2015() {
        // January 7.
        assert_eq!(eastern_orthodox_christmas(2015), vec![735_605]);
    }

    #[test]
    fn pentecost_2015() {
        // May 24.
        assert_eq!(pentecost(2015), 735_742);
    }
}
