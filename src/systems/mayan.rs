// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mayan calendars: long count, haab, and tzolkin.
//!
//! The long count is a pure day count in mixed radix (20/20/18/20) from
//! the epoch of creation (JD 584283, the Goodman-Martinez-Thompson
//! correlation). The haab is a 365-day civil cycle and the tzolkin a
//! 260-day ritual cycle; neither counts years, so only positions within
//! the cycle and searches for them are meaningful.

use super::super::error::CalendarError;
use super::super::trig::amod;

/// R.D. ordinal of long count 0.0.0.0.0.
pub const EPOCH: i64 = -1_137_142;

/// A Mayan long count: `baktun.katun.tun.uinal.kin`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MayanLongCount {
    pub baktun: i64,
    pub katun: i64,
    pub tun: i64,
    pub uinal: i64,
    pub kin: i64,
}

impl MayanLongCount {
    pub const fn new(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: i64) -> Self {
        Self { baktun, katun, tun, uinal, kin }
    }

    /// The R.D. ordinal of this count.
    pub fn to_ordinal(&self) -> i64 {
        EPOCH + self.baktun * 144_000 + self.katun * 7_200 + self.tun * 360 + self.uinal * 20
            + self.kin
    }

    /// The long count of R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let count = ordinal - EPOCH;
        let baktun = count.div_euclid(144_000);
        let rest = count.rem_euclid(144_000);
        let katun = rest / 7_200;
        let rest = rest % 7_200;
        let tun = rest / 360;
        let rest = rest % 360;
        Self {
            baktun,
            katun,
            tun,
            uinal: rest / 20,
            kin: rest % 20,
        }
    }
}

impl PartialOrd for MayanLongCount {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MayanLongCount {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.baktun, self.katun, self.tun, self.uinal, self.kin).cmp(&(
            other.baktun,
            other.katun,
            other.tun,
            other.uinal,
            other.kin,
        ))
    }
}

impl std::fmt::Display for MayanLongCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}

// ---------------------------------------------------------------------------
// Haab
// ---------------------------------------------------------------------------

/// Alignment of the haab cycle: the epoch fell on haab 18.8.
const HAAB_EPOCH: i64 = EPOCH - 348;

/// A position in the 365-day haab cycle: eighteen 20-day months (days
/// numbered from 0) plus the five-day uayeb (month 19).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MayanHaab {
    pub month: u8,
    pub day: u8,
}

impl MayanHaab {
    /// Unchecked constructor for internally computed positions.
    #[inline]
    pub(crate) const fn md(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Create a position, validating the field combination.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=19).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "mayan haab",
                reason: "month outside 1..=19",
            });
        }
        let limit = if month == 19 { 4 } else { 19 };
        if day > limit {
            return Err(CalendarError::InvalidDate {
                system: "mayan haab",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { month, day })
    }

    /// Days into the haab cycle of this position.
    pub fn cycle_ordinal(&self) -> i64 {
        (self.month as i64 - 1) * 20 + self.day as i64
    }

    /// The haab position of R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let count = (ordinal - HAAB_EPOCH).rem_euclid(365);
        Self {
            month: (count.div_euclid(20) + 1) as u8,
            day: count.rem_euclid(20) as u8,
        }
    }

    /// Latest day on or before `ordinal` with this haab position.
    pub fn on_or_before(&self, ordinal: i64) -> i64 {
        ordinal - (ordinal - HAAB_EPOCH - self.cycle_ordinal()).rem_euclid(365)
    }
}

impl std::fmt::Display for MayanHaab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "haab {}-{}", self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Tzolkin
// ---------------------------------------------------------------------------

/// Alignment of the tzolkin cycle: the epoch fell on tzolkin 4 Ahau.
const TZOLKIN_EPOCH: i64 = EPOCH - 159;

/// A position in the 260-day tzolkin cycle: a number 1..=13 running
/// concurrently with a name 1..=20.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MayanTzolkin {
    pub number: u8,
    pub name: u8,
}

impl MayanTzolkin {
    /// Unchecked constructor for internally computed positions.
    #[inline]
    pub(crate) const fn nn(number: u8, name: u8) -> Self {
        Self { number, name }
    }

    /// Create a position, validating the field ranges.
    pub fn new(number: u8, name: u8) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&number) {
            return Err(CalendarError::InvalidDate {
                system: "mayan tzolkin",
                reason: "number outside 1..=13",
            });
        }
        if !(1..=20).contains(&name) {
            return Err(CalendarError::InvalidDate {
                system: "mayan tzolkin",
                reason: "name outside 1..=20",
            });
        }
        Ok(Self { number, name })
    }

    /// Days into the tzolkin cycle of this position.
    pub fn cycle_ordinal(&self) -> i64 {
        let number = self.number as i64;
        let name = self.name as i64;
        (number - 1 + 39 * (number - name)).rem_euclid(260)
    }

    /// The tzolkin position of R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let count = ordinal - TZOLKIN_EPOCH + 1;
        Self {
            number: amod(count, 13) as u8,
            name: amod(count, 20) as u8,
        }
    }

    /// Latest day on or before `ordinal` with this tzolkin position.
    pub fn on_or_before(&self, ordinal: i64) -> i64 {
        ordinal - (ordinal - TZOLKIN_EPOCH - self.cycle_ordinal()).rem_euclid(260)
    }
}

impl std::fmt::Display for MayanTzolkin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tzolkin {}-{}", self.number, self.name)
    }
}

/// Tzolkin name governing the haab year containing `ordinal`. The five
/// uayeb days carry no bearer.
pub fn year_bearer(ordinal: i64) -> Result<u8, CalendarError> {
    if MayanHaab::from_ordinal(ordinal).month == 19 {
        return Err(CalendarError::InvalidDate {
            system: "mayan haab",
            reason: "uayeb days have no year bearer",
        });
    }
    let year_start = MayanHaab::md(1, 0).on_or_before(ordinal + 364);
    Ok(MayanTzolkin::from_ordinal(year_start).name)
}

/// Latest day on or before `ordinal` carrying both the given haab and
/// tzolkin positions. The cycles meet only when their positions agree
/// modulo 5; other pairings never occur.
pub fn calendar_round_on_or_before(
    haab: MayanHaab,
    tzolkin: MayanTzolkin,
    ordinal: i64,
) -> Result<i64, CalendarError> {
    let haab_count = haab.cycle_ordinal() + HAAB_EPOCH;
    let tzolkin_count = tzolkin.cycle_ordinal() + TZOLKIN_EPOCH;
    let diff = tzolkin_count - haab_count;
    if diff.rem_euclid(5) != 0 {
        return Err(CalendarError::ImpossibleCycleCombination);
    }
    Ok(ordinal - (ordinal - haab_count - 365 * diff).rem_euclid(18_980))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_count_known_values() {
        assert_eq!(MayanLongCount::new(0, 0, 0, 0, 0).to_ordinal(), EPOCH);
        // 2015-06-18.
        assert_eq!(
            MayanLongCount::from_ordinal(735_767),
            MayanLongCount::new(13, 0, 2, 9, 9)
        );
        assert_eq!(MayanLongCount::new(13, 0, 2, 9, 9).to_ordinal(), 735_767);
    }

    #[test]
    fn long_count_roundtrip() {
        for ordinal in (-1_137_500..-1_136_800).chain(735_000..735_200) {
            let count = MayanLongCount::from_ordinal(ordinal);
            assert_eq!(count.to_ordinal(), ordinal, "at ordinal {ordinal}");
        }
    }

    #[test]
    fn long_count_ordering() {
        assert!(MayanLongCount::new(12, 19, 19, 17, 19) < MayanLongCount::new(13, 0, 0, 0, 0));
    }

    #[test]
    fn haab_positions() {
        assert_eq!(MayanHaab::from_ordinal(735_767), MayanHaab::md(4, 17));
        assert_eq!(MayanHaab::from_ordinal(EPOCH), MayanHaab::md(18, 8));
        assert_eq!(MayanHaab::md(18, 8).on_or_before(735_767), 735_673);
    }

    #[test]
    fn tzolkin_positions() {
        assert_eq!(MayanTzolkin::from_ordinal(735_767), MayanTzolkin::nn(3, 9));
        assert_eq!(MayanTzolkin::from_ordinal(EPOCH), MayanTzolkin::nn(4, 20));
        assert_eq!(MayanTzolkin::nn(4, 20).on_or_before(735_767), 735_638);
    }

    #[test]
    fn year_bearer_of_2015() {
        assert_eq!(year_bearer(735_767).unwrap(), 17);
    }

    #[test]
    fn calendar_round() {
        let found =
            calendar_round_on_or_before(MayanHaab::md(18, 8), MayanTzolkin::nn(4, 20), 735_767)
                .unwrap();
        assert_eq!(found, 722_898);
        assert_eq!(MayanHaab::from_ordinal(found), MayanHaab::md(18, 8));
        assert_eq!(MayanTzolkin::from_ordinal(found), MayanTzolkin::nn(4, 20));
        assert!(matches!(
            calendar_round_on_or_before(MayanHaab::md(18, 8), MayanTzolkin::nn(4, 2), 735_767),
            Err(CalendarError::ImpossibleCycleCombination)
        ));
    }

    #[test]
    fn validation() {
        assert!(MayanHaab::new(19, 4).is_ok());
        assert!(MayanHaab::new(19, 5).is_err());
        assert!(MayanTzolkin::new(14, 1).is_err());
        assert!(MayanTzolkin::new(13, 21).is_err());
    }
}
