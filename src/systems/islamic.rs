// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Islamic calendar, arithmetic and observational.
//!
//! Both variants count lunar months from the Hijra (Julian July 16,
//! 622 CE). The arithmetic calendar alternates 30- and 29-day months on a
//! 30-year leap cycle; the observational calendar begins each month on the
//! evening the new crescent is first seen from Cairo.

use super::super::error::CalendarError;
use super::super::location::CAIRO;
use super::super::lunar::MEAN_SYNODIC_MONTH;
use super::super::visibility::phasis_on_or_before;
use super::gregorian;

/// R.D. ordinal of Islamic 0001-01-01 (the Hijra).
pub const EPOCH: i64 = 227_015;

/// True for leap years of the 30-year arithmetic cycle.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * year as i64).rem_euclid(30) < 11
}

/// A date in the arithmetic Islamic calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IslamicDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IslamicDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "islamic",
                reason: "month outside 1..=12",
            });
        }
        // Odd months have 30 days, even 29, plus the leap day on month 12.
        let limit = if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
            30
        } else {
            29
        };
        if day < 1 || day > limit {
            return Err(CalendarError::InvalidDate {
                system: "islamic",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        let year = self.year as i64;
        EPOCH - 1
            + 354 * (year - 1)
            + (3 + 11 * year).div_euclid(30)
            + 29 * (self.month as i64 - 1)
            + (self.month as i64).div_euclid(2)
            + self.day as i64
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let year = ((30 * (ordinal - EPOCH) + 10_646).div_euclid(10_631)) as i32;
        let prior_days = ordinal - Self::ymd(year, 1, 1).to_ordinal();
        let month = ((11 * prior_days + 330).div_euclid(325)) as u8;
        let day = (ordinal - Self::ymd(year, month, 1).to_ordinal() + 1) as u8;
        Self { year, month, day }
    }
}

impl PartialOrd for IslamicDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IslamicDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for IslamicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Islamic {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Ordinals of arithmetic Islamic `month`/`day` falling in Gregorian year
/// `year`. Lunar years are short, so there may be up to two.
pub fn in_gregorian(month: u8, day: u8, year: i32) -> Vec<i64> {
    let jan1 = gregorian::new_year(year);
    let islamic_year = IslamicDate::from_ordinal(jan1).year;
    let range = gregorian::year_range(year);
    [islamic_year, islamic_year + 1, islamic_year + 2]
        .into_iter()
        .map(|y| IslamicDate::ymd(y, month, day).to_ordinal())
        .filter(|ordinal| range.contains(ordinal))
        .collect()
}

/// Mawlid an-Nabi (Rabi al-Awwal 12) dates in Gregorian year `year`.
pub fn mawlid_an_nabi(year: i32) -> Vec<i64> {
    in_gregorian(3, 12, year)
}

// ---------------------------------------------------------------------------
// Observational variant
// ---------------------------------------------------------------------------

/// A date in the observational Islamic calendar (Cairo sightings).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationalIslamicDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl ObservationalIslamicDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the month and day ranges.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "observational islamic",
                reason: "month outside 1..=12",
            });
        }
        if !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDate {
                system: "observational islamic",
                reason: "day outside 1..=30",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> Result<i64, CalendarError> {
        let elapsed = (self.year as f64 - 1.0) * 12.0 + self.month as f64 - 0.5;
        let midmonth = EPOCH + (elapsed * MEAN_SYNODIC_MONTH).floor() as i64;
        Ok(phasis_on_or_before(midmonth, &CAIRO)? + self.day as i64 - 1)
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        let crescent = phasis_on_or_before(ordinal, &CAIRO)?;
        let elapsed_months = ((crescent - EPOCH) as f64 / MEAN_SYNODIC_MONTH).round() as i64;
        Ok(Self {
            year: (elapsed_months.div_euclid(12) + 1) as i32,
            month: (elapsed_months.rem_euclid(12) + 1) as u8,
            day: (ordinal - crescent + 1) as u8,
        })
    }
}

impl PartialOrd for ObservationalIslamicDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ObservationalIslamicDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for ObservationalIslamicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Islamic (observational) {}-{:02}-{:02}",
            self.year, self.month, self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ordinals() {
        assert_eq!(IslamicDate::ymd(1, 1, 1).to_ordinal(), EPOCH);
        // Ramadan 1, 1436 AH.
        assert_eq!(IslamicDate::ymd(1436, 9, 1).to_ordinal(), 735_767);
        assert_eq!(IslamicDate::from_ordinal(735_767), IslamicDate::ymd(1436, 9, 1));
    }

    #[test]
    fn leap_cycle() {
        assert!(is_leap_year(1436));
        assert!(is_leap_year(1439));
        assert!(!is_leap_year(1437));
    }

    #[test]
    fn roundtrip() {
        for ordinal in 735_000..735_500 {
            let date = IslamicDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn validation() {
        assert!(IslamicDate::new(1436, 12, 30).is_ok());
        assert!(IslamicDate::new(1437, 12, 30).is_err());
        assert!(IslamicDate::new(1436, 2, 30).is_err());
    }

    #[test]
    fn mawlid_2015() {
        assert_eq!(mawlid_an_nabi(2015), vec![735_601, 735_956]);
    }

    #[test]
    fn observational_ramadan_2015() {
        let date = ObservationalIslamicDate::ymd(1436, 9, 1);
        assert_eq!(date.to_ordinal().unwrap(), 735_767);
        let back = ObservationalIslamicDate::from_ordinal(735_767).unwrap();
        assert_eq!(back, date);
    }
}
