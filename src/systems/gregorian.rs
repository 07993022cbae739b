// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian calendar.
//!
//! The reference arithmetic system: its proleptic day 0001-01-01 is R.D. 1,
//! which anchors every other calendar's epoch. Leap years are those divisible
//! by 4, except centuries not divisible by 400.

use super::super::error::CalendarError;
use super::super::weekday::{
    weekday_nearest, weekday_on_or_after, weekday_on_or_before, DayOfWeek,
};
use std::ops::Range;

/// R.D. ordinal of Gregorian 0001-01-01.
pub const EPOCH: i64 = 1;

#[rustfmt::skip]
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the Gregorian calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "gregorian",
                reason: "month outside 1..=12",
            });
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate {
                system: "gregorian",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        let prior = self.year as i64 - 1;
        let mut ordinal = EPOCH - 1
            + 365 * prior
            + prior.div_euclid(4)
            - prior.div_euclid(100)
            + prior.div_euclid(400)
            + (367 * self.month as i64 - 362).div_euclid(12);
        if self.month > 2 {
            ordinal -= if is_leap_year(self.year) { 1 } else { 2 };
        }
        ordinal + self.day as i64
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let year = year_from_ordinal(ordinal);
        let prior_days = ordinal - new_year(year);
        let correction = if ordinal < Self::ymd(year, 3, 1).to_ordinal() {
            0
        } else if is_leap_year(year) {
            1
        } else {
            2
        };
        let month = ((12 * (prior_days + correction) + 373).div_euclid(367)) as u8;
        let day = (ordinal - Self::ymd(year, month, 1).to_ordinal() + 1) as u8;
        Self { year, month, day }
    }

    /// Ordinal position of this date within its year (1 for January 1).
    pub fn day_number(&self) -> i64 {
        self.to_ordinal() - new_year(self.year) + 1
    }

    /// Days remaining in the year after this date.
    pub fn days_remaining(&self) -> i64 {
        year_end(self.year) - self.to_ordinal()
    }
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// True for leap years: divisible by 4, excluding centuries not divisible
/// by 400.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && !matches!(year.rem_euclid(400), 100 | 200 | 300)
}

/// Length of `month` in `year`.
#[inline]
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month as usize - 1]
    }
}

/// The Gregorian year containing R.D. day `ordinal`.
pub fn year_from_ordinal(ordinal: i64) -> i32 {
    let d0 = ordinal - EPOCH;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1 / 36_524;
    let d2 = d1 % 36_524;
    let n4 = d2 / 1_461;
    let d3 = d2 % 1_461;
    let n1 = d3 / 365;
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // Day 366 of a leap cycle belongs to the cycle's last year.
    (if n100 == 4 || n1 == 4 { year } else { year + 1 }) as i32
}

/// R.D. ordinal of January 1 of `year`.
#[inline]
pub fn new_year(year: i32) -> i64 {
    GregorianDate::ymd(year, 1, 1).to_ordinal()
}

/// R.D. ordinal of December 31 of `year`.
#[inline]
pub fn year_end(year: i32) -> i64 {
    GregorianDate::ymd(year, 12, 31).to_ordinal()
}

/// Half-open range of ordinals belonging to `year`.
#[inline]
pub fn year_range(year: i32) -> Range<i64> {
    new_year(year)..new_year(year + 1)
}

/// Signed day count from `a` to `b`.
#[inline]
pub fn date_difference(a: GregorianDate, b: GregorianDate) -> i64 {
    b.to_ordinal() - a.to_ordinal()
}

// ---------------------------------------------------------------------------
// Ecclesiastical and civil observances
// ---------------------------------------------------------------------------

/// Easter Sunday of `year` (Gregorian computus via the shifted epact).
pub fn easter(year: i32) -> i64 {
    let century = (year as i64).div_euclid(100) + 1;
    let shifted_epact = (14 + 11 * (year as i64).rem_euclid(19) - (3 * century).div_euclid(4)
        + (5 + 8 * century).div_euclid(25))
    .rem_euclid(30);
    let adjusted_epact =
        if shifted_epact == 0 || (shifted_epact == 1 && 10 < (year as i64).rem_euclid(19)) {
            shifted_epact + 1
        } else {
            shifted_epact
        };
    let paschal_moon = GregorianDate::ymd(year, 4, 19).to_ordinal() - adjusted_epact;
    weekday_on_or_after(DayOfWeek::Sunday, paschal_moon + 1)
}

/// United States Independence Day (July 4).
pub fn independence_day(year: i32) -> i64 {
    GregorianDate::ymd(year, 7, 4).to_ordinal()
}

/// Labor Day: first Monday in September.
pub fn labor_day(year: i32) -> i64 {
    weekday_on_or_after(DayOfWeek::Monday, GregorianDate::ymd(year, 9, 1).to_ordinal())
}

/// Memorial Day: last Monday in May.
pub fn memorial_day(year: i32) -> i64 {
    weekday_on_or_before(DayOfWeek::Monday, GregorianDate::ymd(year, 5, 31).to_ordinal())
}

/// US Election Day: first Tuesday after the first Monday in November.
pub fn election_day(year: i32) -> i64 {
    weekday_on_or_after(DayOfWeek::Tuesday, GregorianDate::ymd(year, 11, 2).to_ordinal())
}

/// Start of US daylight saving time: second Sunday in March.
pub fn daylight_saving_start(year: i32) -> i64 {
    weekday_on_or_after(DayOfWeek::Sunday, GregorianDate::ymd(year, 3, 1).to_ordinal()) + 7
}

/// End of US daylight saving time: first Sunday in November.
pub fn daylight_saving_end(year: i32) -> i64 {
    weekday_on_or_after(DayOfWeek::Sunday, GregorianDate::ymd(year, 11, 1).to_ordinal())
}

/// Christmas Day (December 25).
pub fn christmas(year: i32) -> i64 {
    GregorianDate::ymd(year, 12, 25).to_ordinal()
}

/// First Sunday of Advent: the Sunday nearest November 30.
pub fn advent(year: i32) -> i64 {
    weekday_nearest(DayOfWeek::Sunday, GregorianDate::ymd(year, 11, 30).to_ordinal())
}

/// Epiphany (US usage): the first Sunday after January 1.
pub fn epiphany(year: i32) -> i64 {
    weekday_on_or_after(DayOfWeek::Sunday, GregorianDate::ymd(year, 1, 2).to_ordinal())
}

/// All Fridays the 13th within the half-open ordinal range.
pub fn unlucky_fridays_in_range(range: Range<i64>) -> Vec<i64> {
    let mut found = Vec::new();
    let mut friday = weekday_on_or_after(DayOfWeek::Friday, range.start);
    while friday < range.end {
        if GregorianDate::from_ordinal(friday).day == 13 {
            found.push(friday);
        }
        friday += 7;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2016));
        assert!(!is_leap_year(2017));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn known_ordinals() {
        assert_eq!(GregorianDate::ymd(1, 1, 1).to_ordinal(), EPOCH);
        assert_eq!(GregorianDate::ymd(2017, 12, 19).to_ordinal(), 736_682);
        assert_eq!(GregorianDate::ymd(2015, 6, 18).to_ordinal(), 735_767);
        assert_eq!(GregorianDate::ymd(1970, 1, 1).to_ordinal(), 719_163);
        assert_eq!(GregorianDate::ymd(2000, 1, 1).to_ordinal(), 730_120);
    }

    #[test]
    fn fixed_point_2017_12_19() {
        let date = GregorianDate::new(2017, 12, 19).unwrap();
        assert_eq!(GregorianDate::from_ordinal(date.to_ordinal()), date);
    }

    #[test]
    fn roundtrip_across_leap_boundaries() {
        for ordinal in (730_000..730_600).chain(-500..500) {
            let date = GregorianDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
            assert_eq!(year_from_ordinal(ordinal), date.year);
        }
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = GregorianDate::ymd(2015, 6, 18);
        let b = GregorianDate::ymd(2015, 7, 1);
        let c = GregorianDate::ymd(2016, 1, 1);
        assert!(a < b && b < c);
    }

    #[test]
    fn day_number_and_remaining() {
        let date = GregorianDate::ymd(2015, 2, 1);
        assert_eq!(date.day_number(), 32);
        assert_eq!(date.days_remaining(), 333);
        assert_eq!(date.day_number() + date.days_remaining(), 365);
    }

    #[test]
    fn validation_rejects_bad_fields() {
        assert!(GregorianDate::new(2015, 2, 29).is_err());
        assert!(GregorianDate::new(2016, 2, 29).is_ok());
        assert!(GregorianDate::new(2015, 13, 1).is_err());
        assert!(GregorianDate::new(2015, 4, 31).is_err());
    }

    #[test]
    fn easter_2015_is_april_5() {
        assert_eq!(easter(2015), GregorianDate::ymd(2015, 4, 5).to_ordinal());
        assert_eq!(easter(2000), GregorianDate::ymd(2000, 4, 23).to_ordinal());
    }

    #[test]
    fn civil_observances_2015() {
        assert_eq!(labor_day(2015), GregorianDate::ymd(2015, 9, 7).to_ordinal());
        assert_eq!(memorial_day(2015), GregorianDate::ymd(2015, 5, 25).to_ordinal());
        assert_eq!(election_day(2016), GregorianDate::ymd(2016, 11, 8).to_ordinal());
        assert_eq!(
            daylight_saving_start(2015),
            GregorianDate::ymd(2015, 3, 8).to_ordinal()
        );
        assert_eq!(
            daylight_saving_end(2015),
            GregorianDate::ymd(2015, 11, 1).to_ordinal()
        );
        assert_eq!(advent(2015), GregorianDate::ymd(2015, 11, 29).to_ordinal());
        assert_eq!(epiphany(2015), GregorianDate::ymd(2015, 1, 4).to_ordinal());
    }

    #[test]
    fn fridays_the_13th() {
        // 2015 had three: February, March, November.
        let found = unlucky_fridays_in_range(year_range(2015));
        let dates: Vec<GregorianDate> =
            found.iter().map(|&o| GregorianDate::from_ordinal(o)).collect();
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[0], GregorianDate::ymd(2015, 2, 13));
        assert_eq!(dates[1], GregorianDate::ymd(2015, 3, 13));
        assert_eq!(dates[2], GregorianDate::ymd(2015, 11, 13));
    }
}
