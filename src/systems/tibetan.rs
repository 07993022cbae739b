// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tibetan (Phugpa) calendar.
//!
//! A lunisolar calendar computed from tabular mean motions with small
//! interpolated corrections for the solar and lunar anomalies. Months and
//! days can both be doubled: a leap month repeats the month number and a
//! leap day repeats the day number.

use super::super::error::CalendarError;
use super::super::search::final_int;
use super::super::trig::amod;
use super::gregorian;

/// R.D. ordinal of the calendar's epoch (Gregorian December 7, 128 BCE).
pub const EPOCH: i64 = -46_410;

/// Mean Tibetan year length in days.
const MEAN_YEAR: f64 = 365.0 + 4975.0 / 18_382.0;

/// A date in the Phugpa calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TibetanDate {
    pub year: i32,
    pub month: u8,
    pub leap_month: bool,
    pub day: u8,
    pub leap_day: bool,
}

/// Interpolated tabular sine of the solar anomaly, `alpha` in twelfths of
/// a circle.
fn sun_equation(alpha: f64) -> f64 {
    #[rustfmt::skip]
    const TABLE: [f64; 4] = [0.0, 6.0 / 60.0, 10.0 / 60.0, 11.0 / 60.0];
    if alpha > 6.0 {
        -sun_equation(alpha - 6.0)
    } else if alpha > 3.0 {
        sun_equation(6.0 - alpha)
    } else if alpha == alpha.floor() {
        TABLE[alpha as usize]
    } else {
        alpha.rem_euclid(1.0) * sun_equation(alpha.ceil())
            + (-alpha).rem_euclid(1.0) * sun_equation(alpha.floor())
    }
}

/// Interpolated tabular sine of the lunar anomaly, `alpha` in
/// twenty-eighths of a circle.
fn moon_equation(alpha: f64) -> f64 {
    #[rustfmt::skip]
    const TABLE: [f64; 8] = [
        0.0, 5.0 / 60.0, 10.0 / 60.0, 15.0 / 60.0,
        19.0 / 60.0, 22.0 / 60.0, 24.0 / 60.0, 25.0 / 60.0,
    ];
    if alpha > 14.0 {
        -moon_equation(alpha - 14.0)
    } else if alpha > 7.0 {
        moon_equation(14.0 - alpha)
    } else if alpha == alpha.floor() {
        TABLE[alpha as usize]
    } else {
        alpha.rem_euclid(1.0) * moon_equation(alpha.ceil())
            + (-alpha).rem_euclid(1.0) * moon_equation(alpha.floor())
    }
}

/// Ordinal of a date given as raw cycle counts; `day` may run past 30
/// during searches that probe into a doubled month.
fn ordinal_from_parts(year: i64, month: i64, leap_month: bool, day: i64, leap_day: bool) -> i64 {
    let months = (804.0 / 65.0 * (year as f64 - 1.0)
        + 67.0 / 65.0 * month as f64
        + if leap_month { -1.0 } else { 0.0 }
        + 64.0 / 65.0)
        .floor();
    let days = 30.0 * months + day as f64;
    let mean =
        days * 11_135.0 / 11_312.0 - 30.0 + if leap_day { 0.0 } else { -1.0 } + 1071.0 / 1616.0;
    let solar_anomaly = (days * 13.0 / 4824.0 + 2117.0 / 4824.0).rem_euclid(1.0);
    let lunar_anomaly = (days * 3781.0 / 105_840.0 + 2837.0 / 15_120.0).rem_euclid(1.0);
    let sun = -sun_equation(12.0 * solar_anomaly);
    let moon = moon_equation(28.0 * lunar_anomaly);
    (EPOCH as f64 + mean + sun + moon).floor() as i64
}

impl TibetanDate {
    pub const fn new(year: i32, month: u8, leap_month: bool, day: u8, leap_day: bool) -> Self {
        Self { year, month, leap_month, day, leap_day }
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        ordinal_from_parts(
            self.year as i64,
            self.month as i64,
            self.leap_month,
            self.day as i64,
            self.leap_day,
        )
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        let years = ((ordinal - EPOCH) as f64 / MEAN_YEAR).ceil() as i64;
        let year0 = final_int(years, |y| {
            ordinal >= ordinal_from_parts(y, 1, false, 1, false)
        })?;
        let month0 = final_int(1, |m| {
            ordinal >= ordinal_from_parts(year0, m, false, 1, false)
        })?;
        let estimate = ordinal - ordinal_from_parts(year0, month0, false, 1, false);
        let day0 = final_int(estimate - 2, |d| {
            ordinal >= ordinal_from_parts(year0, month0, false, d, false)
        })?;
        let leap_month = day0 > 30;
        let day = amod(day0, 30);
        let month = amod(
            if day > day0 {
                month0 - 1
            } else if leap_month {
                month0 + 1
            } else {
                month0
            },
            12,
        );
        let year = if day > day0 && month0 == 1 {
            year0 - 1
        } else if leap_month && month0 == 12 {
            year0 + 1
        } else {
            year0
        };
        let leap_day = ordinal == ordinal_from_parts(year, month, leap_month, day, true);
        Ok(Self {
            year: year as i32,
            month: month as u8,
            leap_month,
            day: day as u8,
            leap_day,
        })
    }
}

impl PartialOrd for TibetanDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TibetanDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.leap_month, self.day, self.leap_day).cmp(&(
            other.year,
            other.month,
            other.leap_month,
            other.day,
            other.leap_day,
        ))
    }
}

impl std::fmt::Display for TibetanDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tibetan {}-{:02}{}-{:02}{}",
            self.year,
            self.month,
            if self.leap_month { "L" } else { "" },
            self.day,
            if self.leap_day { "L" } else { "" },
        )
    }
}

/// True when `month` is doubled in Tibetan year `year`.
pub fn is_leap_month(month: u8, year: i32) -> Result<bool, CalendarError> {
    let probe = TibetanDate::new(year, month, true, 2, false).to_ordinal();
    Ok(TibetanDate::from_ordinal(probe)?.month == month)
}

/// Losar (Tibetan New Year) of Tibetan year `year`.
pub fn losar(year: i32) -> Result<i64, CalendarError> {
    let leap = is_leap_month(1, year)?;
    Ok(TibetanDate::new(year, 1, leap, 1, false).to_ordinal())
}

/// Occurrences of Losar in a Gregorian year.
pub fn new_year(gregorian_year: i32) -> Result<Vec<i64>, CalendarError> {
    let tibetan_year = TibetanDate::from_ordinal(gregorian::year_end(gregorian_year))?.year;
    let range = gregorian::year_range(gregorian_year);
    let mut days = Vec::new();
    for candidate in [losar(tibetan_year - 1)?, losar(tibetan_year)?] {
        if range.contains(&candidate) {
            days.push(candidate);
        }
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_dates() {
        // 2015-06-18.
        assert_eq!(
            TibetanDate::from_ordinal(735_767).unwrap(),
            TibetanDate::new(2142, 5, false, 2, false)
        );
        assert_eq!(TibetanDate::new(2142, 5, false, 2, false).to_ordinal(), 735_767);
        assert_eq!(
            TibetanDate::from_ordinal(710_347).unwrap(),
            TibetanDate::new(2072, 10, false, 7, false)
        );
    }

    #[test]
    fn leap_day_and_leap_month() {
        assert_eq!(
            TibetanDate::from_ordinal(735_000).unwrap(),
            TibetanDate::new(2140, 4, false, 2, true)
        );
        assert_eq!(
            TibetanDate::from_ordinal(735_604).unwrap(),
            TibetanDate::new(2141, 11, false, 16, true)
        );
        assert_eq!(
            TibetanDate::from_ordinal(735_117).unwrap(),
            TibetanDate::new(2140, 8, true, 1, false)
        );
    }

    #[test]
    fn roundtrip_through_a_leap_stretch() {
        for ordinal in 735_100..735_160 {
            let date = TibetanDate::from_ordinal(ordinal).unwrap();
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn losar_2015() {
        assert_eq!(new_year(2015).unwrap(), vec![735_648]);
        assert!(!is_leap_month(1, 2142).unwrap());
    }

    #[test]
    fn ordering_doubles_sort_after() {
        assert!(
            TibetanDate::new(2142, 5, false, 2, false) < TibetanDate::new(2142, 5, false, 2, true)
        );
        assert!(
            TibetanDate::new(2142, 5, false, 30, true) < TibetanDate::new(2142, 5, true, 1, false)
        );
    }
}
