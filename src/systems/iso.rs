// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ISO 8601 week calendar.
//!
//! Years of 52 or 53 whole weeks running Monday (day 1) through Sunday
//! (day 7); week 1 is the week containing the Gregorian year's first
//! Thursday.

use super::super::error::CalendarError;
use super::super::trig::amod;
use super::super::weekday::{weekday_before, weekday_from_ordinal, DayOfWeek};
use super::gregorian::{self, GregorianDate};

/// A date in the ISO week calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsoDate {
    pub year: i32,
    pub week: u8,
    pub day: u8,
}

impl IsoDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ywd(year: i32, week: u8, day: u8) -> Self {
        Self { year, week, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, week: u8, day: u8) -> Result<Self, CalendarError> {
        if week < 1 || week > 52 + is_long_year(year) as u8 {
            return Err(CalendarError::InvalidDate {
                system: "iso",
                reason: "week outside the year's week count",
            });
        }
        if !(1..=7).contains(&day) {
            return Err(CalendarError::InvalidDate {
                system: "iso",
                reason: "day outside 1..=7",
            });
        }
        Ok(Self { year, week, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        // The Sunday ending week 0 is the last Sunday strictly before
        // December 28 of the prior Gregorian year.
        let anchor = weekday_before(
            DayOfWeek::Sunday,
            GregorianDate::ymd(self.year - 1, 12, 28).to_ordinal(),
        );
        anchor + 7 * self.week as i64 + self.day as i64
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let approx = gregorian::year_from_ordinal(ordinal - 3);
        let year = if ordinal >= Self::ywd(approx + 1, 1, 1).to_ordinal() {
            approx + 1
        } else {
            approx
        };
        let week = (1 + (ordinal - Self::ywd(year, 1, 1).to_ordinal()).div_euclid(7)) as u8;
        let day = amod(ordinal, 7) as u8;
        Self { year, week, day }
    }
}

impl PartialOrd for IsoDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IsoDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.week, self.day).cmp(&(other.year, other.week, other.day))
    }
}

impl std::fmt::Display for IsoDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-W{:02}-{}", self.year, self.week, self.day)
    }
}

/// True when ISO year `year` has 53 weeks: the Gregorian year starts or
/// ends on a Thursday.
pub fn is_long_year(year: i32) -> bool {
    weekday_from_ordinal(gregorian::new_year(year)) == DayOfWeek::Thursday
        || weekday_from_ordinal(gregorian::year_end(year)) == DayOfWeek::Thursday
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ordinals() {
        // 2015-06-18 Gregorian is Thursday of ISO week 25.
        assert_eq!(IsoDate::ywd(2015, 25, 4).to_ordinal(), 735_767);
        assert_eq!(IsoDate::from_ordinal(735_767), IsoDate::ywd(2015, 25, 4));
    }

    #[test]
    fn year_boundaries() {
        // 2016-01-01 belongs to ISO week 53 of 2015.
        let jan1 = GregorianDate::ymd(2016, 1, 1).to_ordinal();
        assert_eq!(IsoDate::from_ordinal(jan1), IsoDate::ywd(2015, 53, 5));
        // 2005-01-01 belongs to ISO week 53 of 2004.
        let jan1 = GregorianDate::ymd(2005, 1, 1).to_ordinal();
        assert_eq!(IsoDate::from_ordinal(jan1), IsoDate::ywd(2004, 53, 6));
        assert_eq!(IsoDate::ywd(2004, 53, 6).to_ordinal(), 731_947);
    }

    #[test]
    fn long_years() {
        assert!(is_long_year(2015));
        assert!(is_long_year(2020));
        assert!(is_long_year(2004));
        assert!(!is_long_year(2014));
    }

    #[test]
    fn validation_honors_week_count() {
        assert!(IsoDate::new(2015, 53, 1).is_ok());
        assert!(IsoDate::new(2014, 53, 1).is_err());
        assert!(IsoDate::new(2015, 0, 1).is_err());
        assert!(IsoDate::new(2015, 25, 8).is_err());
    }

    #[test]
    fn roundtrip() {
        for ordinal in 734_000..735_500 {
            let date = IsoDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }
}
