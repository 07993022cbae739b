// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew calendar, arithmetic and observational.
//!
//! Months are numbered biblically from Nisan (1) through Adar (12, with
//! Adar II as 13 in leap years), while the year number changes at Tishri
//! (7). The arithmetic calendar uses the fixed molad-and-postponement
//! rules; the observational variant reconstructs the classical practice of
//! crescent sightings from the hills near Haifa and a Nisan anchored to
//! the spring equinox.

use super::super::error::CalendarError;
use super::super::location::JAFFA;
use super::super::solar::{season_in_gregorian, Season};
use super::super::visibility::{phasis_on_or_after, phasis_on_or_before};
use super::super::weekday::{weekday_from_ordinal, DayOfWeek};
use super::gregorian;

/// R.D. ordinal of Hebrew 0001-07-01 (proleptic molad epoch).
pub const EPOCH: i64 = -1_373_427;

pub const NISAN: u8 = 1;
pub const IYYAR: u8 = 2;
pub const SIVAN: u8 = 3;
pub const TAMMUZ: u8 = 4;
pub const AV: u8 = 5;
pub const ELUL: u8 = 6;
pub const TISHRI: u8 = 7;
pub const MARHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const TEVET: u8 = 10;
pub const SHEVAT: u8 = 11;
pub const ADAR: u8 = 12;
pub const ADAR_II: u8 = 13;

/// True for leap years of the 19-year cycle.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

/// Number of months in `year` (12, or 13 in leap years).
#[inline]
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Days from the epoch to the mean new year of `year`, with the molad
/// postponed a day when it falls on a Sunday, Wednesday, or Friday.
fn elapsed_days(year: i32) -> i64 {
    let months = (235 * year as i64 - 234).div_euclid(19);
    let parts = 12_084 + 13_753 * months;
    let days = 29 * months + parts.div_euclid(25_920);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Further postponements keeping the year length legal.
fn year_length_correction(year: i32) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// R.D. ordinal of Tishri 1 of `year`.
pub fn new_year(year: i32) -> i64 {
    EPOCH + elapsed_days(year) + year_length_correction(year)
}

/// Number of days in `year` (353, 354, 355, 383, 384, or 385).
#[inline]
pub fn days_in_year(year: i32) -> i64 {
    new_year(year + 1) - new_year(year)
}

/// True when Marheshvan is extended to 30 days in `year`.
#[inline]
pub fn is_long_marheshvan(year: i32) -> bool {
    matches!(days_in_year(year), 355 | 385)
}

/// True when Kislev is shortened to 29 days in `year`.
#[inline]
pub fn is_short_kislev(year: i32) -> bool {
    matches!(days_in_year(year), 353 | 383)
}

/// Length of `month` in `year`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        IYYAR | TAMMUZ | ELUL | TEVET | ADAR_II => 29,
        ADAR if !is_leap_year(year) => 29,
        MARHESHVAN if !is_long_marheshvan(year) => 29,
        KISLEV if is_short_kislev(year) => 29,
        _ => 30,
    }
}

/// A date in the arithmetic Hebrew calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HebrewDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl HebrewDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the field combination.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if month < 1 || month > months_in_year(year) {
            return Err(CalendarError::InvalidDate {
                system: "hebrew",
                reason: "month outside the year's month count",
            });
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate {
                system: "hebrew",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> i64 {
        let mut ordinal = new_year(self.year) + self.day as i64 - 1;
        if self.month < TISHRI {
            // Months before Nisan have all passed, then Nisan onward.
            for m in TISHRI..=months_in_year(self.year) {
                ordinal += days_in_month(self.year, m) as i64;
            }
            for m in NISAN..self.month {
                ordinal += days_in_month(self.year, m) as i64;
            }
        } else {
            for m in TISHRI..self.month {
                ordinal += days_in_month(self.year, m) as i64;
            }
        }
        ordinal
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        // Mean year length is 35975351/98496 days.
        let approx = ((ordinal - EPOCH) as f64 / (35_975_351.0 / 98_496.0)).floor() as i32 + 1;
        let mut year = approx - 1;
        while new_year(year + 1) <= ordinal {
            year += 1;
        }
        let start = if ordinal < Self::ymd(year, NISAN, 1).to_ordinal() {
            TISHRI
        } else {
            NISAN
        };
        let mut month = start;
        while ordinal > Self::ymd(year, month, days_in_month(year, month)).to_ordinal() {
            month += 1;
        }
        let day = (ordinal - Self::ymd(year, month, 1).to_ordinal() + 1) as u8;
        Self { year, month, day }
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hebrew {}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Holidays and observances
// ---------------------------------------------------------------------------

/// Hebrew year beginning in Gregorian year `year`.
#[inline]
fn year_beginning_in(year: i32) -> i32 {
    year - gregorian::year_from_ordinal(EPOCH) + 1
}

/// Rosh ha-Shanah (Tishri 1) of the Hebrew year beginning in Gregorian
/// `year`.
pub fn rosh_hashanah(year: i32) -> i64 {
    HebrewDate::ymd(year_beginning_in(year), TISHRI, 1).to_ordinal()
}

/// Yom Kippur (Tishri 10) in Gregorian year `year`.
pub fn yom_kippur(year: i32) -> i64 {
    HebrewDate::ymd(year_beginning_in(year), TISHRI, 10).to_ordinal()
}

/// Passover (Nisan 15) in Gregorian year `year`.
pub fn passover(year: i32) -> i64 {
    HebrewDate::ymd(year_beginning_in(year) - 1, NISAN, 15).to_ordinal()
}

/// First day of Hanukkah (Kislev 25) in Gregorian year `year`.
pub fn hanukkah(year: i32) -> i64 {
    HebrewDate::ymd(year_beginning_in(year), KISLEV, 25).to_ordinal()
}

/// Purim (Adar 14, Adar II in leap years) in Gregorian year `year`.
pub fn purim(year: i32) -> i64 {
    let hebrew_year = year_beginning_in(year) - 1;
    HebrewDate::ymd(hebrew_year, months_in_year(hebrew_year), 14).to_ordinal()
}

/// Ta'anit Esther: the day before Purim, pulled back to Thursday when
/// Purim follows the sabbath.
pub fn ta_anit_esther(year: i32) -> i64 {
    let purim = purim(year);
    if weekday_from_ordinal(purim) == DayOfWeek::Sunday {
        purim - 3
    } else {
        purim - 1
    }
}

/// Tishah be-Av (Av 9, postponed off the sabbath) in Gregorian `year`.
pub fn tishah_be_av(year: i32) -> i64 {
    let av9 = HebrewDate::ymd(year_beginning_in(year) - 1, AV, 9).to_ordinal();
    if weekday_from_ordinal(av9) == DayOfWeek::Saturday {
        av9 + 1
    } else {
        av9
    }
}

/// Omer count of day `ordinal` as (weeks, days), when the day falls
/// within the 49 days following Passover.
pub fn omer(ordinal: i64) -> Option<(i64, i64)> {
    let year = HebrewDate::from_ordinal(ordinal).year;
    let count = ordinal - HebrewDate::ymd(year, NISAN, 15).to_ordinal();
    if (1..=49).contains(&count) {
        Some((count.div_euclid(7), count.rem_euclid(7)))
    } else {
        None
    }
}

/// Anniversary of a birth on `birth_date` in Hebrew year `year`.
///
/// A birth in the year's last month recurs in the last month, so Adar
/// birthdays track the leap cycle.
pub fn birthday(birth_date: HebrewDate, year: i32) -> i64 {
    if birth_date.month == months_in_year(birth_date.year) {
        HebrewDate::ymd(year, months_in_year(year), birth_date.day).to_ordinal()
    } else {
        HebrewDate::ymd(year, birth_date.month, 1).to_ordinal() + birth_date.day as i64 - 1
    }
}

/// Anniversary of a death on `death_date` in Hebrew year `year`,
/// following the customary rules for days that may not exist.
pub fn yahrzeit(death_date: HebrewDate, year: i32) -> i64 {
    let HebrewDate { year: dy, month, day } = death_date;
    if month == MARHESHVAN && day == 30 && !is_long_marheshvan(dy + 1) {
        HebrewDate::ymd(year, KISLEV, 1).to_ordinal() - 1
    } else if month == KISLEV && day == 30 && is_short_kislev(dy + 1) {
        HebrewDate::ymd(year, TEVET, 1).to_ordinal() - 1
    } else if month == ADAR_II {
        HebrewDate::ymd(year, months_in_year(year), day).to_ordinal()
    } else if month == ADAR && day == 30 && !is_leap_year(year) {
        HebrewDate::ymd(year, SHEVAT, 30).to_ordinal()
    } else {
        HebrewDate::ymd(year, month, 1).to_ordinal() + day as i64 - 1
    }
}

// ---------------------------------------------------------------------------
// Observational variant
// ---------------------------------------------------------------------------

/// Day of the observational Nisan 1 whose year begins in Gregorian
/// `year`: the first crescent visible from Jaffa on or after the day of
/// the spring equinox (or its eve, when the equinox falls after sunset).
pub fn first_of_nisan(year: i32) -> Result<i64, CalendarError> {
    let equinox = season_in_gregorian(Season::Spring, year)?;
    let day = equinox.ordinal();
    let sunset = JAFFA
        .sunset(day)
        .map(|t| JAFFA.universal_from_standard(t))
        .ok_or(CalendarError::TwilightUndefined { degrees: 0.0 })?;
    let offset = if equinox < sunset { 14 } else { 13 };
    phasis_on_or_after(day - offset, &JAFFA)
}

/// Eve of the classical Passover (Nisan 14) in Gregorian year `year`.
pub fn classical_passover_eve(year: i32) -> Result<i64, CalendarError> {
    Ok(first_of_nisan(year)? + 13)
}

/// A date in the observational Hebrew calendar (Jaffa sightings).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationalHebrewDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl ObservationalHebrewDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date, validating the month and day ranges.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "observational hebrew",
                reason: "month outside 1..=13",
            });
        }
        if !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDate {
                system: "observational hebrew",
                reason: "day outside 1..=30",
            });
        }
        Ok(Self { year, month, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> Result<i64, CalendarError> {
        let civil_year = if self.month >= TISHRI {
            self.year - 1
        } else {
            self.year
        };
        let start = HebrewDate::ymd(civil_year, NISAN, 1).to_ordinal();
        let gregorian_year = gregorian::year_from_ordinal(start + 60);
        let nisan1 = first_of_nisan(gregorian_year)?;
        let midmonth = nisan1 + (29.5 * (self.month as f64 - 1.0)).round() as i64 + 15;
        Ok(phasis_on_or_before(midmonth, &JAFFA)? + self.day as i64 - 1)
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        let crescent = phasis_on_or_before(ordinal, &JAFFA)?;
        let gregorian_year = gregorian::year_from_ordinal(ordinal);
        let nisan1 = first_of_nisan(gregorian_year)?;
        let year_start = if ordinal < nisan1 {
            first_of_nisan(gregorian_year - 1)?
        } else {
            nisan1
        };
        let month = (1 + ((crescent - year_start) as f64 / 29.5).round() as i64) as u8;
        let mut year = HebrewDate::from_ordinal(year_start).year;
        if month >= TISHRI {
            year += 1;
        }
        Ok(Self {
            year,
            month,
            day: (ordinal - crescent + 1) as u8,
        })
    }
}

impl PartialOrd for ObservationalHebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ObservationalHebrewDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for ObservationalHebrewDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Hebrew (observational) {}-{:02}-{:02}",
            self.year, self.month, self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn molad_arithmetic() {
        assert_eq!(elapsed_days(5775), 2_108_928);
        assert_eq!(new_year(5776), 735_855);
    }

    #[test]
    fn known_ordinals() {
        assert_eq!(HebrewDate::ymd(5775, NISAN, 15).to_ordinal(), 735_692);
        assert_eq!(HebrewDate::from_ordinal(735_767), HebrewDate::ymd(5775, TAMMUZ, 1));
    }

    #[test]
    fn leap_cycle_and_year_lengths() {
        assert!(is_leap_year(5774));
        assert!(!is_leap_year(5775));
        assert!(is_leap_year(5776));
        assert_eq!(days_in_year(5775), 354);
        assert_eq!(days_in_year(5776), 385);
        assert!(is_long_marheshvan(5776));
    }

    #[test]
    fn roundtrip() {
        for ordinal in 735_000..735_900 {
            let date = HebrewDate::from_ordinal(ordinal);
            assert_eq!(date.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn validation() {
        assert!(HebrewDate::new(5776, ADAR_II, 29).is_ok());
        assert!(HebrewDate::new(5775, ADAR_II, 1).is_err());
        assert!(HebrewDate::new(5775, MARHESHVAN, 30).is_err());
        assert!(HebrewDate::new(5776, MARHESHVAN, 30).is_ok());
    }

    #[test]
    fn holidays_2015() {
        assert_eq!(rosh_hashanah(2015), 735_855); // September 14
        assert_eq!(yom_kippur(2015), 735_864); // September 23
        assert_eq!(passover(2015), 735_692); // April 4
        assert_eq!(hanukkah(2015), 735_939); // December 7
        assert_eq!(purim(2015), 735_662); // March 5
        assert_eq!(ta_anit_esther(2015), 735_661); // March 4
        assert_eq!(tishah_be_av(2015), 735_805); // July 26
    }

    #[test]
    fn omer_count() {
        // 2015-05-07 was the 33rd day of the omer.
        assert_eq!(omer(735_725), Some((4, 5)));
        assert_eq!(omer(735_692), None);
        assert_eq!(omer(735_693), Some((0, 1)));
    }

    #[test]
    fn birthday_and_yahrzeit() {
        assert_eq!(birthday(HebrewDate::ymd(5735, MARHESHVAN, 10), 5776), 735_894);
        assert_eq!(yahrzeit(HebrewDate::ymd(5735, MARHESHVAN, 30), 5776), 735_914);
    }

    #[test]
    fn observational_nisan_2015() {
        assert_eq!(first_of_nisan(2015).unwrap(), 735_679);
        assert_eq!(classical_passover_eve(2015).unwrap(), 735_692);
    }

    #[test]
    fn observational_roundtrip() {
        let date = ObservationalHebrewDate::from_ordinal(735_767).unwrap();
        assert_eq!(date.to_ordinal().unwrap(), 735_767);
    }
}
