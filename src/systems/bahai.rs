// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bahá'í calendar, western and future variants.
//!
//! Nineteen 19-day months with the intercalary Ayyám-i-Há (month 0)
//! before the final month, counted in 19-year cycles within 361-year
//! major cycles from the epoch of March 21, 1844. The western variant
//! pins the new year to Gregorian March 21; the future variant starts the
//! year at the spring equinox relative to sunset in Haifa.

use super::super::error::CalendarError;
use super::super::location::HAIFA;
use super::super::moment_ext::Moment;
use super::super::search::next_int;
use super::super::solar::{
    estimate_prior_solar_longitude, solar_longitude, Season, MEAN_TROPICAL_YEAR,
};
use super::gregorian::{self, GregorianDate};

/// R.D. ordinal of Bahá'í 1-1-1-1-1 (Gregorian March 21, 1844).
pub const EPOCH: i64 = 673_222;

/// Month number of the intercalary days.
pub const AYYAM_I_HA: u8 = 0;

fn validate(system: &'static str, cycle: i32, year: i32, month: u8, day: u8)
    -> Result<(), CalendarError> {
    if !(1..=19).contains(&cycle) {
        return Err(CalendarError::InvalidDate {
            system,
            reason: "cycle outside 1..=19",
        });
    }
    if !(1..=19).contains(&year) {
        return Err(CalendarError::InvalidDate {
            system,
            reason: "year outside 1..=19",
        });
    }
    if month > 19 {
        return Err(CalendarError::InvalidDate {
            system,
            reason: "month outside 0..=19",
        });
    }
    let limit = if month == AYYAM_I_HA { 5 } else { 19 };
    if day < 1 || day > limit {
        return Err(CalendarError::InvalidDate {
            system,
            reason: "day outside the month's length",
        });
    }
    Ok(())
}

fn cycle_position(years: i64) -> (i32, i32, i32) {
    let major = 1 + years.div_euclid(361);
    let cycle = 1 + years.rem_euclid(361).div_euclid(19);
    let year = 1 + years.rem_euclid(19);
    (major as i32, cycle as i32, year as i32)
}

/// Bahá'í New Year (western reckoning) in Gregorian year `year`:
/// March 21.
pub fn new_year(year: i32) -> i64 {
    GregorianDate::ymd(year, 3, 21).to_ordinal()
}

/// A date in the western Bahá'í calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WesternBahaiDate {
    pub major: i32,
    pub cycle: i32,
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl WesternBahaiDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn from_parts(major: i32, cycle: i32, year: i32, month: u8, day: u8) -> Self {
        Self { major, cycle, year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(major: i32, cycle: i32, year: i32, month: u8, day: u8)
        -> Result<Self, CalendarError> {
        validate("western bahai", cycle, year, month, day)?;
        Ok(Self { major, cycle, year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        let gregorian_year = 361 * (self.major - 1) + 19 * (self.cycle - 1) + self.year - 1
            + gregorian::year_from_ordinal(EPOCH);
        let elapsed = if self.month == AYYAM_I_HA {
            342
        } else if self.month == 19 {
            // The final month starts after Ayyám-i-Há, whose length
            // tracks the Gregorian leap day.
            if gregorian::is_leap_year(gregorian_year + 1) {
                347
            } else {
                346
            }
        } else {
            19 * (self.month as i64 - 1)
        };
        GregorianDate::ymd(gregorian_year, 3, 20).to_ordinal() + elapsed + self.day as i64
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let gregorian_year = gregorian::year_from_ordinal(ordinal);
        let start = gregorian::year_from_ordinal(EPOCH);
        let mut years = (gregorian_year - start) as i64;
        if ordinal <= GregorianDate::ymd(gregorian_year, 3, 20).to_ordinal() {
            years -= 1;
        }
        let (major, cycle, year) = cycle_position(years);
        let days = ordinal - Self::from_parts(major, cycle, year, 1, 1).to_ordinal();
        let month = if ordinal >= Self::from_parts(major, cycle, year, 19, 1).to_ordinal() {
            19
        } else if ordinal
            >= Self::from_parts(major, cycle, year, AYYAM_I_HA, 1).to_ordinal()
        {
            AYYAM_I_HA
        } else {
            (1 + days.div_euclid(19)) as u8
        };
        let day = (ordinal + 1 - Self::from_parts(major, cycle, year, month, 1).to_ordinal()) as u8;
        Self { major, cycle, year, month, day }
    }
}

impl PartialOrd for WesternBahaiDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WesternBahaiDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Ayyám-i-Há sorts between months 18 and 19.
        let key = |d: &Self| {
            let month_rank = if d.month == AYYAM_I_HA { 37 } else { 2 * d.month as i32 };
            (d.major, d.cycle, d.year, month_rank, d.day)
        };
        key(self).cmp(&key(other))
    }
}

impl std::fmt::Display for WesternBahaiDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bahai {}-{}-{}-{}-{}",
            self.major, self.cycle, self.year, self.month, self.day
        )
    }
}

// ---------------------------------------------------------------------------
// Future variant
// ---------------------------------------------------------------------------

/// Universal time of sunset in Haifa on day `date`, when defined.
fn sunset_in_haifa(date: i64) -> Result<Moment, CalendarError> {
    HAIFA
        .sunset(date)
        .map(|t| HAIFA.universal_from_standard(t))
        .ok_or(CalendarError::TwilightUndefined { degrees: 0.0 })
}

/// Day of the future Bahá'í new year on or before `date`: the day whose
/// Haifa sunset first follows the spring equinox.
pub fn new_year_on_or_before(date: i64) -> Result<i64, CalendarError> {
    let approx =
        estimate_prior_solar_longitude(Season::Spring.degrees(), sunset_in_haifa(date)?);
    next_int(approx.ordinal() - 1, |day| {
        sunset_in_haifa(day)
            .map(|sunset| solar_longitude(sunset) <= Season::Spring.degrees() + 2.0)
            .unwrap_or(false)
    })
}

/// A date in the future (equinox-based) Bahá'í calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FutureBahaiDate {
    pub major: i32,
    pub cycle: i32,
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl FutureBahaiDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn from_parts(major: i32, cycle: i32, year: i32, month: u8, day: u8) -> Self {
        Self { major, cycle, year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(major: i32, cycle: i32, year: i32, month: u8, day: u8)
        -> Result<Self, CalendarError> {
        validate("future bahai", cycle, year, month, day)?;
        Ok(Self { major, cycle, year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> Result<i64, CalendarError> {
        let years =
            (361 * (self.major as i64 - 1) + 19 * (self.cycle as i64 - 1) + self.year as i64) as f64;
        let ordinal = if self.month == 19 {
            new_year_on_or_before(EPOCH + (MEAN_TROPICAL_YEAR * (years + 0.5)).floor() as i64)?
                - 20
                + self.day as i64
        } else if self.month == AYYAM_I_HA {
            new_year_on_or_before(EPOCH + (MEAN_TROPICAL_YEAR * (years - 0.5)).floor() as i64)?
                + 341
                + self.day as i64
        } else {
            new_year_on_or_before(EPOCH + (MEAN_TROPICAL_YEAR * (years - 0.5)).floor() as i64)?
                + 19 * (self.month as i64 - 1)
                + self.day as i64
                - 1
        };
        Ok(ordinal)
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        let year_start = new_year_on_or_before(ordinal)?;
        let years = ((year_start - EPOCH) as f64 / MEAN_TROPICAL_YEAR).round() as i64;
        let (major, cycle, year) = cycle_position(years);
        let days = ordinal - year_start;
        let month = if ordinal >= Self::from_parts(major, cycle, year, 19, 1).to_ordinal()? {
            19
        } else if ordinal
            >= Self::from_parts(major, cycle, year, AYYAM_I_HA, 1).to_ordinal()?
        {
            AYYAM_I_HA
        } else {
            (1 + days.div_euclid(19)) as u8
        };
        let day =
            (ordinal + 1 - Self::from_parts(major, cycle, year, month, 1).to_ordinal()?) as u8;
        Ok(Self { major, cycle, year, month, day })
    }
}

impl PartialOrd for FutureBahaiDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FutureBahaiDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let key = |d: &Self| {
            let month_rank = if d.month == AYYAM_I_HA { 37 } else { 2 * d.month as i32 };
            (d.major, d.cycle, d.year, month_rank, d.day)
        };
        key(self).cmp(&key(other))
    }
}

impl std::fmt::Display for FutureBahaiDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bahai (future) {}-{}-{}-{}-{}",
            self.major, self.cycle, self.year, self.month, self.day
        )
    }
}

/// Feast of Ridván (month 2, day 13 of the future calendar) in Gregorian
/// year `year`.
pub fn feast_of_ridvan(year: i32) -> Result<i64, CalendarError> {
    let years = (year - gregorian::year_from_ordinal(EPOCH)) as i64;
    let (major, cycle, year) = cycle_position(years);
    FutureBahaiDate::from_parts(major, cycle, year, 2, 13).to_ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn western_known_ordinals() {
        assert_eq!(
            WesternBahaiDate::from_parts(1, 1, 1, 1, 1).to_ordinal(),
            EPOCH
        );
        assert_eq!(
            WesternBahaiDate::from_parts(1, 10, 1, 1, 1).to_ordinal(),
            735_678
        );
        assert_eq!(
            WesternBahaiDate::from_ordinal(735_767),
            WesternBahaiDate::from_parts(1, 10, 1, 5, 14)
        );
    }

    #[test]
    fn western_roundtrip() {
        for ordinal in 735_400..735_900 {
            let date = WesternBahaiDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn future_known_ordinals() {
        assert_eq!(new_year_on_or_before(735_767).unwrap(), 735_678);
        assert_eq!(
            FutureBahaiDate::from_parts(1, 10, 1, 1, 1).to_ordinal().unwrap(),
            735_678
        );
        let date = FutureBahaiDate::from_ordinal(735_767).unwrap();
        assert_eq!(date, FutureBahaiDate::from_parts(1, 10, 1, 5, 14));
        assert_eq!(date.to_ordinal().unwrap(), 735_767);
    }

    #[test]
    fn feast_of_ridvan_2015() {
        // April 21.
        assert_eq!(feast_of_ridvan(2015).unwrap(), 735_709);
    }

    #[test]
    fn new_year_is_march_21() {
        assert_eq!(new_year(2015), 735_678);
    }

    #[test]
    fn ayyam_i_ha_sorts_before_the_final_month() {
        let ayyam = WesternBahaiDate::from_parts(1, 10, 1, AYYAM_I_HA, 1);
        let before = WesternBahaiDate::from_parts(1, 10, 1, 18, 19);
        let after = WesternBahaiDate::from_parts(1, 10, 1, 19, 1);
        assert!(before < ayyam && ayyam < after);
    }

    #[test]
    fn validation() {
        assert!(WesternBahaiDate::new(1, 10, 1, AYYAM_I_HA, 5).is_ok());
        assert!(WesternBahaiDate::new(1, 10, 1, AYYAM_I_HA, 6).is_err());
        assert!(WesternBahaiDate::new(1, 20, 1, 1, 1).is_err());
        assert!(WesternBahaiDate::new(1, 10, 1, 1, 20).is_err());
    }
}
