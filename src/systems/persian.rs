// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Persian calendar, astronomical and arithmetic.
//!
//! The astronomical calendar starts each year at the spring equinox as
//! seen from Tehran (the year begins on the day whose midday falls on or
//! after the equinox). The arithmetic variant is Birashk's 2820-year
//! cycle. Neither has a year zero.

use super::super::error::CalendarError;
use super::super::location::TEHRAN;
use super::super::moment_ext::Moment;
use super::super::search::next_int;
use super::super::solar::{
    estimate_prior_solar_longitude, solar_longitude, Season, MEAN_TROPICAL_YEAR,
};
use super::gregorian;

/// R.D. ordinal of Persian 0001-01-01 (Julian March 19, 622 CE).
pub const EPOCH: i64 = 226_896;

/// A date in the Persian calendar. `year` is never zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Universal time of midday in Tehran on day `date`.
fn midday_in_tehran(date: i64) -> Moment {
    TEHRAN.universal_from_standard(TEHRAN.midday(date))
}

/// Day of the astronomical Persian new year on or before `date`: the day
/// whose Tehran midday first follows the spring equinox.
pub fn new_year_on_or_before(date: i64) -> Result<i64, CalendarError> {
    let approx =
        estimate_prior_solar_longitude(Season::Spring.degrees(), midday_in_tehran(date));
    next_int(approx.ordinal() - 1, |day| {
        solar_longitude(midday_in_tehran(day)) <= Season::Spring.degrees() + 2.0
    })
}

impl PersianDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination. Day counts are
    /// checked against the month shape (31 days through Farvardin..Mehr,
    /// then 30); the 29/30-day close of Esfand is left to the year rules.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year == 0 {
            return Err(CalendarError::InvalidDate {
                system: "persian",
                reason: "there is no Persian year zero",
            });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "persian",
                reason: "month outside 1..=12",
            });
        }
        let limit = if month <= 6 { 31 } else { 30 };
        if day < 1 || day > limit {
            return Err(CalendarError::InvalidDate {
                system: "persian",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { year, month, day })
    }

    fn day_of_year_offset(&self) -> i64 {
        if self.month <= 7 {
            31 * (self.month as i64 - 1)
        } else {
            30 * (self.month as i64 - 1) + 6
        }
    }

    /// The R.D. ordinal of this date on the astronomical calendar.
    pub fn to_ordinal(&self) -> Result<i64, CalendarError> {
        let elapsed = if self.year > 0 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let new_year = new_year_on_or_before(
            EPOCH + 180 + (MEAN_TROPICAL_YEAR * elapsed as f64).floor() as i64,
        )?;
        Ok(new_year - 1 + self.day_of_year_offset() + self.day as i64)
    }

    /// The astronomical date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        let new_year = new_year_on_or_before(ordinal)?;
        let y = ((new_year - EPOCH) as f64 / MEAN_TROPICAL_YEAR).round() as i64 + 1;
        let year = (if y > 0 { y } else { y - 1 }) as i32;
        let day_of_year = ordinal - Self::ymd(year, 1, 1).to_ordinal()? + 1;
        let month = if day_of_year <= 186 {
            (day_of_year as f64 / 31.0).ceil() as u8
        } else {
            ((day_of_year - 6) as f64 / 30.0).ceil() as u8
        };
        let day = (ordinal - Self::ymd(year, month, 1).to_ordinal()? + 1) as u8;
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date on Birashk's arithmetic calendar.
    pub fn to_ordinal_arithmetic(&self) -> i64 {
        let y = if self.year > 0 {
            self.year as i64 - 474
        } else {
            self.year as i64 - 473
        };
        let year = y.rem_euclid(2820) + 474;
        EPOCH - 1
            + 1_029_983 * y.div_euclid(2820)
            + 365 * (year - 1)
            + (31 * year - 5).div_euclid(128)
            + self.day_of_year_offset()
            + self.day as i64
    }

    /// The arithmetic date containing R.D. day `ordinal`.
    pub fn from_ordinal_arithmetic(ordinal: i64) -> Self {
        let year = arithmetic_year_from_ordinal(ordinal);
        let day_of_year = 1 + ordinal - Self::ymd(year, 1, 1).to_ordinal_arithmetic();
        let month = if day_of_year <= 186 {
            (day_of_year as f64 / 31.0).ceil() as u8
        } else {
            ((day_of_year - 6) as f64 / 30.0).ceil() as u8
        };
        let day = (ordinal - Self::ymd(year, month, 1).to_ordinal_arithmetic() + 1) as u8;
        Self { year, month, day }
    }
}

impl PartialOrd for PersianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for PersianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Persian {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Persian year of the arithmetic calendar containing `ordinal`.
fn arithmetic_year_from_ordinal(ordinal: i64) -> i32 {
    let d0 = ordinal - PersianDate::ymd(475, 1, 1).to_ordinal_arithmetic();
    let n2820 = d0.div_euclid(1_029_983);
    let d1 = d0.rem_euclid(1_029_983);
    let y2820 = if d1 == 1_029_982 {
        2820
    } else {
        (128 * d1 + 46_878).div_euclid(46_751)
    };
    let year = 474 + 2820 * n2820 + y2820;
    (if year > 0 { year } else { year - 1 }) as i32
}

/// True for leap years of Birashk's arithmetic cycle.
pub fn is_arithmetic_leap_year(year: i32) -> bool {
    let y = if year > 0 {
        year as i64 - 474
    } else {
        year as i64 - 473
    };
    let cycle_year = y.rem_euclid(2820) + 474;
    ((cycle_year + 38) * 31).rem_euclid(128) < 31
}

/// Naw-Ruz (astronomical Persian New Year) in Gregorian year `year`.
pub fn naw_ruz(year: i32) -> Result<i64, CalendarError> {
    let persian_year = year - gregorian::year_from_ordinal(EPOCH) + 1;
    let y = if persian_year <= 0 {
        persian_year - 1
    } else {
        persian_year
    };
    PersianDate::ymd(y, 1, 1).to_ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn astronomical_known_ordinals() {
        assert_eq!(PersianDate::ymd(1, 1, 1).to_ordinal().unwrap(), EPOCH);
        assert_eq!(PersianDate::ymd(1394, 1, 1).to_ordinal().unwrap(), 735_678);
        assert_eq!(
            PersianDate::from_ordinal(735_767).unwrap(),
            PersianDate::ymd(1394, 3, 28)
        );
    }

    #[test]
    fn naw_ruz_2015_is_march_21() {
        assert_eq!(naw_ruz(2015).unwrap(), 735_678);
    }

    #[test]
    fn arithmetic_known_ordinals() {
        assert_eq!(PersianDate::ymd(1, 1, 1).to_ordinal_arithmetic(), EPOCH);
        assert_eq!(PersianDate::ymd(1394, 1, 1).to_ordinal_arithmetic(), 735_678);
        assert_eq!(
            PersianDate::from_ordinal_arithmetic(735_767),
            PersianDate::ymd(1394, 3, 28)
        );
    }

    #[test]
    fn arithmetic_roundtrip() {
        for ordinal in 735_000..735_700 {
            let date = PersianDate::from_ordinal_arithmetic(ordinal);
            assert_eq!(date.to_ordinal_arithmetic(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn arithmetic_leap_cycle() {
        assert!(is_arithmetic_leap_year(1395));
        assert!(!is_arithmetic_leap_year(1394));
        assert!(!is_arithmetic_leap_year(1396));
    }

    #[test]
    fn validation() {
        assert!(PersianDate::new(0, 1, 1).is_err());
        assert!(PersianDate::new(1394, 1, 31).is_ok());
        assert!(PersianDate::new(1394, 8, 31).is_err());
    }
}
