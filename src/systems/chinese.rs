// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chinese lunisolar calendar.
//!
//! Months begin at new moons and years at the second (or third) new moon
//! after the winter solstice, all reckoned by Beijing civil time. Years
//! are counted inside 60-year cycles from the epoch of 2637 BCE, and
//! years, months, and days also carry sexagesimal stem/branch names.

use super::super::error::CalendarError;
use super::super::location::Location;
use super::super::lunar::{new_moon_at_or_after, new_moon_before, MEAN_SYNODIC_MONTH};
use super::super::moment_ext::Moment;
use super::super::search::next_int;
use super::super::solar::{
    estimate_prior_solar_longitude, solar_longitude, solar_longitude_after, Season,
    MEAN_TROPICAL_YEAR,
};
use super::super::trig::{amod, angle};
use super::super::instant::days_from_hours;
use super::gregorian::{self, GregorianDate};

/// R.D. ordinal of Chinese cycle 1, year 1 (Gregorian February 15,
/// 2637 BCE).
pub const EPOCH: i64 = -963_099;

/// Location used for Chinese calendrical calculations: Beijing, whose
/// civil zone was local mean time before 1929.
pub fn chinese_location(date: i64) -> Location {
    let zone = if gregorian::year_from_ordinal(date) < 1929 {
        days_from_hours(1397.0 / 180.0)
    } else {
        days_from_hours(8.0)
    };
    Location::new(angle(39.0, 55.0, 0.0), angle(116.0, 25.0, 0.0), 43.5, zone)
}

/// Location used for the Japanese variant: Tokyo local mean time before
/// 1888, the 135° E zone after.
pub fn japanese_location(date: i64) -> Location {
    if gregorian::year_from_ordinal(date) < 1888 {
        Location::new(35.7, angle(139.0, 46.0, 0.0), 24.0, days_from_hours(9.0 + 143.0 / 450.0))
    } else {
        Location::new(35.0, 135.0, 0.0, days_from_hours(9.0))
    }
}

/// Universal time of civil midnight beginning day `date` in China.
fn midnight(date: i64) -> Moment {
    chinese_location(date).universal_from_standard(Moment::from_ordinal(date))
}

/// Beijing moment when the solar longitude first reaches `lambda` on or
/// after day `date`.
fn solar_longitude_on_or_after(lambda: f64, date: i64) -> Result<Moment, CalendarError> {
    let tee = solar_longitude_after(lambda, midnight(date))?;
    Ok(chinese_location(tee.ordinal()).standard_from_universal(tee))
}

/// Index (1..=12) of the last major solar term (zhongqi) before `date`.
pub fn major_solar_term(date: i64) -> i64 {
    let s = solar_longitude(midnight(date));
    amod(2 + (s / 30.0).floor() as i64, 12)
}

/// Index (1..=12) of the last minor solar term (jieqi) before `date`.
pub fn current_minor_solar_term(date: i64) -> i64 {
    let s = solar_longitude(midnight(date));
    amod(3 + ((s - 15.0) / 30.0).floor() as i64, 12)
}

/// Beijing moment of the first minor solar term on or after `date`.
/// Minor terms fall at odd multiples of 15° of solar longitude.
pub fn minor_solar_term_on_or_after(date: i64) -> Result<Moment, CalendarError> {
    let s = solar_longitude(midnight(date));
    let lambda = (30.0 * ((s - 15.0) / 30.0).ceil() + 15.0).rem_euclid(360.0);
    solar_longitude_on_or_after(lambda, date)
}

/// Beijing day of the first new moon before `date`.
fn chinese_new_moon_before(date: i64) -> Result<i64, CalendarError> {
    let tee = new_moon_before(midnight(date))?;
    Ok(chinese_location(tee.ordinal())
        .standard_from_universal(tee)
        .ordinal())
}

/// Beijing day of the first new moon on or after `date`.
fn chinese_new_moon_on_or_after(date: i64) -> Result<i64, CalendarError> {
    let tee = new_moon_at_or_after(midnight(date))?;
    Ok(chinese_location(tee.ordinal())
        .standard_from_universal(tee)
        .ordinal())
}

/// True when the lunar month starting on `date` contains no major solar
/// term, which marks it as a candidate leap month.
fn no_major_solar_term(date: i64) -> Result<bool, CalendarError> {
    Ok(major_solar_term(date) == major_solar_term(chinese_new_moon_on_or_after(date + 1)?))
}

/// True when some month starting in `m_prime..=m` is a leap month.
fn is_prior_leap_month(m_prime: i64, mut m: i64) -> Result<bool, CalendarError> {
    while m >= m_prime {
        if no_major_solar_term(m)? {
            return Ok(true);
        }
        m = chinese_new_moon_before(m)?;
    }
    Ok(false)
}

/// Beijing day of the winter solstice on or before `date`.
pub fn winter_solstice_on_or_before(date: i64) -> Result<i64, CalendarError> {
    let approx =
        estimate_prior_solar_longitude(Season::Winter.degrees(), midnight(date + 1));
    next_int(approx.ordinal() - 1, |day| {
        Season::Winter.degrees() < solar_longitude(midnight(day + 1))
    })
}

/// Chinese New Year of the sui (solstice-to-solstice year) containing
/// `date`.
pub fn new_year_in_sui(date: i64) -> Result<i64, CalendarError> {
    let s1 = winter_solstice_on_or_before(date)?;
    let s2 = winter_solstice_on_or_before(s1 + 370)?;
    let next_m11 = chinese_new_moon_before(s2 + 1)?;
    let m12 = chinese_new_moon_on_or_after(s1 + 1)?;
    let m13 = chinese_new_moon_on_or_after(m12 + 1)?;
    let leap_year = ((next_m11 - m12) as f64 / MEAN_SYNODIC_MONTH).round() as i64 == 12;
    if leap_year && (no_major_solar_term(m12)? || no_major_solar_term(m13)?) {
        chinese_new_moon_on_or_after(m13 + 1)
    } else {
        Ok(m13)
    }
}

/// Chinese New Year on or before `date`.
pub fn new_year_on_or_before(date: i64) -> Result<i64, CalendarError> {
    let new_year = new_year_in_sui(date)?;
    if date >= new_year {
        Ok(new_year)
    } else {
        new_year_in_sui(date - 180)
    }
}

/// Chinese New Year in Gregorian year `year`.
pub fn new_year(year: i32) -> Result<i64, CalendarError> {
    new_year_on_or_before(GregorianDate::ymd(year, 7, 1).to_ordinal())
}

/// A date in the Chinese calendar: year `year` of 60-year cycle `cycle`,
/// with `leap` marking the intercalary repetition of `month`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChineseDate {
    pub cycle: i32,
    pub year: i32,
    pub month: u8,
    pub leap: bool,
    pub day: u8,
}

impl ChineseDate {
    /// Unchecked constructor for internally computed dates.
    #[inline]
    pub(crate) const fn from_parts(cycle: i32, year: i32, month: u8, leap: bool, day: u8) -> Self {
        Self { cycle, year, month, leap, day }
    }

    /// Create a date, validating the field ranges.
    pub fn new(cycle: i32, year: i32, month: u8, leap: bool, day: u8)
        -> Result<Self, CalendarError> {
        if !(1..=60).contains(&year) {
            return Err(CalendarError::InvalidDate {
                system: "chinese",
                reason: "year outside 1..=60",
            });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "chinese",
                reason: "month outside 1..=12",
            });
        }
        if !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDate {
                system: "chinese",
                reason: "day outside 1..=30",
            });
        }
        Ok(Self { cycle, year, month, leap, day })
    }

    /// The R.D. ordinal of this date.
    pub fn to_ordinal(&self) -> Result<i64, CalendarError> {
        let elapsed = ((self.cycle as i64 - 1) * 60 + self.year as i64 - 1) as f64;
        let mid_year = (EPOCH as f64 + (elapsed + 0.5) * MEAN_TROPICAL_YEAR).floor() as i64;
        let new_year = new_year_on_or_before(mid_year)?;
        let p = chinese_new_moon_on_or_after(new_year + (self.month as i64 - 1) * 29)?;
        let d = Self::from_ordinal(p)?;
        let prior_new_moon = if self.month == d.month && self.leap == d.leap {
            p
        } else {
            chinese_new_moon_on_or_after(p + 1)?
        };
        Ok(prior_new_moon + self.day as i64 - 1)
    }

    /// The date containing R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        let s1 = winter_solstice_on_or_before(ordinal)?;
        let s2 = winter_solstice_on_or_before(s1 + 370)?;
        let next_m11 = chinese_new_moon_before(s2 + 1)?;
        let m12 = chinese_new_moon_on_or_after(s1 + 1)?;
        let leap_year = ((next_m11 - m12) as f64 / MEAN_SYNODIC_MONTH).round() as i64 == 12;
        let m = chinese_new_moon_before(ordinal + 1)?;
        let shift = if leap_year && is_prior_leap_month(m12, m)? {
            1
        } else {
            0
        };
        let month = amod(((m - m12) as f64 / MEAN_SYNODIC_MONTH).round() as i64 - shift, 12);
        let leap_month = leap_year
            && no_major_solar_term(m)?
            && !is_prior_leap_month(m12, chinese_new_moon_before(m)?)?;
        let elapsed_years = (1.5 - month as f64 / 12.0
            + (ordinal - EPOCH) as f64 / MEAN_TROPICAL_YEAR)
            .floor() as i64;
        Ok(Self {
            cycle: (1 + (elapsed_years - 1).div_euclid(60)) as i32,
            year: amod(elapsed_years, 60) as i32,
            month: month as u8,
            leap: leap_month,
            day: (1 + ordinal - m) as u8,
        })
    }

    /// Age at day `ordinal` by Chinese reckoning, where a newborn is one
    /// and everyone ages at New Year.
    pub fn age(&self, ordinal: i64) -> Result<i64, CalendarError> {
        let today = Self::from_ordinal(ordinal)?;
        if ordinal >= self.to_ordinal()? {
            Ok(60 * (today.cycle as i64 - self.cycle as i64) + today.year as i64
                - self.year as i64
                + 1)
        } else {
            Err(CalendarError::OutOfRange { system: "chinese" })
        }
    }
}

impl PartialOrd for ChineseDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChineseDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // A leap month follows the month it repeats.
        (self.cycle, self.year, self.month, self.leap, self.day).cmp(&(
            other.cycle,
            other.year,
            other.month,
            other.leap,
            other.day,
        ))
    }
}

impl std::fmt::Display for ChineseDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chinese {}-{}-{}{}-{}",
            self.cycle,
            self.year,
            self.month,
            if self.leap { "L" } else { "" },
            self.day
        )
    }
}

// ---------------------------------------------------------------------------
// Festivals and auguries
// ---------------------------------------------------------------------------

/// Dragon Festival (month 5, day 5) in Gregorian year `year`.
pub fn dragon_festival(year: i32) -> Result<i64, CalendarError> {
    let elapsed_years = (1 + year - gregorian::year_from_ordinal(EPOCH)) as i64;
    let cycle = (1 + (elapsed_years - 1).div_euclid(60)) as i32;
    let year = amod(elapsed_years, 60) as i32;
    ChineseDate::from_parts(cycle, year, 5, false, 5).to_ordinal()
}

/// Qingming (the day of the fifth minor solar term) in Gregorian year
/// `year`.
pub fn qing_ming(year: i32) -> Result<i64, CalendarError> {
    Ok(
        minor_solar_term_on_or_after(GregorianDate::ymd(year, 3, 30).to_ordinal())?
            .ordinal(),
    )
}

/// Marriage augury of a Chinese year, read from whether lichun (the
/// first minor term) falls inside it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarriageAugury {
    /// Lichun does not occur (widow or double-blind year).
    Widow,
    /// Lichun occurs only at the end (blind year).
    Blind,
    /// Lichun occurs only at the start (bright year).
    Bright,
    /// Lichun occurs twice (double-bright year).
    DoubleBright,
}

/// Marriage augury of `year` in `cycle`.
pub fn year_marriage_augury(cycle: i32, year: i32) -> Result<MarriageAugury, CalendarError> {
    let new_year = ChineseDate::from_parts(cycle, year, 1, false, 1).to_ordinal()?;
    let (next_cycle, next_year) = if year == 60 {
        (cycle + 1, 1)
    } else {
        (cycle, year + 1)
    };
    let next_new_year =
        ChineseDate::from_parts(next_cycle, next_year, 1, false, 1).to_ordinal()?;
    let first = current_minor_solar_term(new_year);
    let next_first = current_minor_solar_term(next_new_year);
    Ok(match (first == 1, next_first == 12) {
        (true, true) => MarriageAugury::Widow,
        (true, false) => MarriageAugury::Blind,
        (false, true) => MarriageAugury::Bright,
        (false, false) => MarriageAugury::DoubleBright,
    })
}

// ---------------------------------------------------------------------------
// Sexagesimal names
// ---------------------------------------------------------------------------

const MONTH_NAME_EPOCH: i64 = 57;
const DAY_NAME_EPOCH: i64 = 45;

/// A stem/branch name of the sexagesimal cycle. Only combinations with
/// matching parity occur.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChineseName {
    pub stem: u8,
    pub branch: u8,
}

impl ChineseName {
    /// Create a name, rejecting stem/branch pairs outside the cycle.
    pub fn new(stem: u8, branch: u8) -> Result<Self, CalendarError> {
        if !(1..=10).contains(&stem) || !(1..=12).contains(&branch) {
            return Err(CalendarError::InvalidDate {
                system: "chinese",
                reason: "stem outside 1..=10 or branch outside 1..=12",
            });
        }
        if stem % 2 != branch % 2 {
            return Err(CalendarError::ImpossibleCycleCombination);
        }
        Ok(Self { stem, branch })
    }

    /// The `n`th name of the sexagesimal cycle.
    pub fn sexagesimal(n: i64) -> Self {
        Self {
            stem: amod(n, 10) as u8,
            branch: amod(n, 12) as u8,
        }
    }

    /// Number of names from `self` to the next occurrence of `other`
    /// (1..=60).
    pub fn difference(&self, other: &Self) -> i64 {
        let stem_diff = other.stem as i64 - self.stem as i64;
        let branch_diff = other.branch as i64 - self.branch as i64;
        1 + (stem_diff - 1 + 25 * (branch_diff - stem_diff)).rem_euclid(60)
    }
}

impl std::fmt::Display for ChineseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.stem, self.branch)
    }
}

/// Sexagesimal name of Chinese year `year` of any cycle.
pub fn year_name(year: i32) -> ChineseName {
    ChineseName::sexagesimal(year as i64)
}

/// Sexagesimal name of `month` of Chinese year `year`.
pub fn month_name(month: u8, year: i32) -> ChineseName {
    let elapsed_months = 12 * (year as i64 - 1) + month as i64 - 1;
    ChineseName::sexagesimal(elapsed_months - MONTH_NAME_EPOCH)
}

/// Sexagesimal name of day `ordinal`.
pub fn day_name(ordinal: i64) -> ChineseName {
    ChineseName::sexagesimal(ordinal - DAY_NAME_EPOCH)
}

/// Latest day on or before `ordinal` bearing `name`.
pub fn day_name_on_or_before(name: ChineseName, ordinal: i64) -> i64 {
    ordinal - name.difference(&day_name(ordinal)).rem_euclid(60)
}
