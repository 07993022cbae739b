// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! French Revolutionary calendar, astronomical and arithmetic.
//!
//! Twelve 30-day months followed by the sansculottides (month 13, five or
//! six complementary days). The original calendar fixed the new year at
//! the autumnal equinox as observed from Paris true midnight; the
//! arithmetic reform of year XX would have used a Gregorian-style leap
//! rule with an extra 4000-year exception.

use super::super::error::CalendarError;
use super::super::location::PARIS;
use super::super::moment_ext::Moment;
use super::super::search::next_int;
use super::super::solar::{
    estimate_prior_solar_longitude, solar_longitude, Season, MEAN_TROPICAL_YEAR,
};

/// R.D. ordinal of French Revolutionary 0001-01-01
/// (Gregorian September 22, 1792).
pub const EPOCH: i64 = 654_415;

/// A date in the French Revolutionary calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrenchDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Universal time of true midnight ending day `date` in Paris.
fn midnight_in_paris(date: i64) -> Moment {
    PARIS.universal_from_standard(PARIS.midnight(date + 1))
}

/// Day of the French Revolutionary new year on or before `date`: the day
/// whose Paris midnight first reaches the autumnal equinox.
pub fn new_year_on_or_before(date: i64) -> Result<i64, CalendarError> {
    let approx =
        estimate_prior_solar_longitude(Season::Autumn.degrees(), midnight_in_paris(date));
    next_int(approx.ordinal() - 1, |day| {
        Season::Autumn.degrees() <= solar_longitude(midnight_in_paris(day))
    })
}

impl FrenchDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination. The sixth
    /// sansculottide is accepted for any year; whether it exists in a
    /// given astronomical year depends on the equinoxes.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "french",
                reason: "month outside 1..=13",
            });
        }
        let limit = if month == 13 { 6 } else { 30 };
        if day < 1 || day > limit {
            return Err(CalendarError::InvalidDate {
                system: "french",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date on the astronomical calendar.
    pub fn to_ordinal(&self) -> Result<i64, CalendarError> {
        let new_year = new_year_on_or_before(
            EPOCH + 180 + (MEAN_TROPICAL_YEAR * (self.year as f64 - 1.0)).floor() as i64,
        )?;
        Ok(new_year - 1 + 30 * (self.month as i64 - 1) + self.day as i64)
    }

    /// The astronomical date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        let new_year = new_year_on_or_before(ordinal)?;
        let year = ((new_year - EPOCH) as f64 / MEAN_TROPICAL_YEAR).round() as i32 + 1;
        let month = (1 + (ordinal - new_year).div_euclid(30)) as u8;
        let day = ((ordinal - new_year).rem_euclid(30) + 1) as u8;
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date on the arithmetic calendar.
    pub fn to_ordinal_arithmetic(&self) -> i64 {
        let prior = self.year as i64 - 1;
        EPOCH - 1
            + 365 * prior
            + prior.div_euclid(4)
            - prior.div_euclid(100)
            + prior.div_euclid(400)
            - prior.div_euclid(4000)
            + 30 * (self.month as i64 - 1)
            + self.day as i64
    }

    /// The arithmetic date containing R.D. day `ordinal`.
    pub fn from_ordinal_arithmetic(ordinal: i64) -> Self {
        // Mean year length is 1460969/4000 days.
        let approx =
            ((ordinal - EPOCH + 2) as f64 / (1_460_969.0 / 4000.0)).floor() as i32 + 1;
        let year = if ordinal < Self::ymd(approx, 1, 1).to_ordinal_arithmetic() {
            approx - 1
        } else {
            approx
        };
        let month =
            (1 + (ordinal - Self::ymd(year, 1, 1).to_ordinal_arithmetic()).div_euclid(30)) as u8;
        let day = (ordinal - Self::ymd(year, month, 1).to_ordinal_arithmetic() + 1) as u8;
        Self { year, month, day }
    }
}

impl PartialOrd for FrenchDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrenchDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for FrenchDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "French {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// True for leap years of the arithmetic reform.
#[inline]
pub fn is_arithmetic_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0
        && !matches!(year.rem_euclid(400), 100 | 200 | 300)
        && year.rem_euclid(4000) != 0
}
