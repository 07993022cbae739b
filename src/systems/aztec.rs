// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Aztec cycles: xihuitl and tonalpohualli.
//!
//! Structurally the same pair as the Mayan haab and tzolkin, anchored to
//! the fall of Tenochtitlan (Julian August 13, 1521), when the xihuitl
//! read 2 Xocotlhuetzi and the tonalpohualli 1 Coatl. Xihuitl days are
//! numbered from 1, unlike the haab.

use super::super::error::CalendarError;
use super::super::trig::amod;

/// R.D. ordinal of the correlation date (Julian August 13, 1521).
pub const CORRELATION: i64 = 555_403;

/// Alignment of the xihuitl cycle: the correlation date was xihuitl 11.2.
const XIHUITL_EPOCH: i64 = CORRELATION - 201;

/// Alignment of the tonalpohualli cycle: the correlation date was
/// tonalpohualli 1 Coatl.
const TONALPOHUALLI_EPOCH: i64 = CORRELATION - 104;

/// A position in the 365-day xihuitl cycle: eighteen 20-day months (days
/// numbered from 1) plus the five nemontemi (month 19).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AztecXihuitl {
    pub month: u8,
    pub day: u8,
}

impl AztecXihuitl {
    /// Unchecked constructor for internally computed positions.
    #[inline]
    pub(crate) const fn md(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Create a position, validating the field combination.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=19).contains(&month) {
            return Err(CalendarError::InvalidDate {
                system: "aztec xihuitl",
                reason: "month outside 1..=19",
            });
        }
        let limit = if month == 19 { 5 } else { 20 };
        if day < 1 || day > limit {
            return Err(CalendarError::InvalidDate {
                system: "aztec xihuitl",
                reason: "day outside the month's length",
            });
        }
        Ok(Self { month, day })
    }

    /// Days into the xihuitl cycle of this position.
    pub fn cycle_ordinal(&self) -> i64 {
        (self.month as i64 - 1) * 20 + self.day as i64 - 1
    }

    /// The xihuitl position of R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let count = (ordinal - XIHUITL_EPOCH).rem_euclid(365);
        Self {
            month: (count.div_euclid(20) + 1) as u8,
            day: (count.rem_euclid(20) + 1) as u8,
        }
    }

    /// Latest day on or before `ordinal` with this xihuitl position.
    pub fn on_or_before(&self, ordinal: i64) -> i64 {
        ordinal - (ordinal - XIHUITL_EPOCH - self.cycle_ordinal()).rem_euclid(365)
    }
}

impl std::fmt::Display for AztecXihuitl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "xihuitl {}-{}", self.month, self.day)
    }
}

/// A position in the 260-day tonalpohualli cycle: a number 1..=13 running
/// concurrently with a name 1..=20.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AztecTonalpohualli {
    pub number: u8,
    pub name: u8,
}

impl AztecTonalpohualli {
    /// Unchecked constructor for internally computed positions.
    #[inline]
    pub(crate) const fn nn(number: u8, name: u8) -> Self {
        Self { number, name }
    }

    /// Create a position, validating the field ranges.
    pub fn new(number: u8, name: u8) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&number) {
            return Err(CalendarError::InvalidDate {
                system: "aztec tonalpohualli",
                reason: "number outside 1..=13",
            });
        }
        if !(1..=20).contains(&name) {
            return Err(CalendarError::InvalidDate {
                system: "aztec tonalpohualli",
                reason: "name outside 1..=20",
            });
        }
        Ok(Self { number, name })
    }

    /// Days into the tonalpohualli cycle of this position.
    pub fn cycle_ordinal(&self) -> i64 {
        let number = self.number as i64;
        let name = self.name as i64;
        (number - 1 + 39 * (number - name)).rem_euclid(260)
    }

    /// The tonalpohualli position of R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let count = ordinal - TONALPOHUALLI_EPOCH + 1;
        Self {
            number: amod(count, 13) as u8,
            name: amod(count, 20) as u8,
        }
    }

    /// Latest day on or before `ordinal` with this tonalpohualli position.
    pub fn on_or_before(&self, ordinal: i64) -> i64 {
        ordinal - (ordinal - TONALPOHUALLI_EPOCH - self.cycle_ordinal()).rem_euclid(260)
    }
}

impl std::fmt::Display for AztecTonalpohualli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tonalpohualli {}-{}", self.number, self.name)
    }
}

/// Tonalpohualli designation of the xihuitl year containing `ordinal`,
/// taken from the year's last month-18 day. The five nemontemi carry no
/// designation.
pub fn xiuhmolpilli(ordinal: i64) -> Result<AztecTonalpohualli, CalendarError> {
    if AztecXihuitl::from_ordinal(ordinal).month == 19 {
        return Err(CalendarError::InvalidDate {
            system: "aztec xihuitl",
            reason: "nemontemi days have no designation",
        });
    }
    let year_end = AztecXihuitl::md(18, 20).on_or_before(ordinal + 364);
    Ok(AztecTonalpohualli::from_ordinal(year_end))
}

/// Latest day on or before `ordinal` carrying both the given xihuitl and
/// tonalpohualli positions. The cycles meet only when their positions
/// agree modulo 5; other pairings never occur.
pub fn xihuitl_tonalpohualli_on_or_before(
    xihuitl: AztecXihuitl,
    tonalpohualli: AztecTonalpohualli,
    ordinal: i64,
) -> Result<i64, CalendarError> {
    let xihuitl_count = xihuitl.cycle_ordinal() + XIHUITL_EPOCH;
    let tonalpohualli_count = tonalpohualli.cycle_ordinal() + TONALPOHUALLI_EPOCH;
    let diff = tonalpohualli_count - xihuitl_count;
    if diff.rem_euclid(5) != 0 {
        return Err(CalendarError::ImpossibleCycleCombination);
    }
    Ok(ordinal - (ordinal - xihuitl_count - 365 * diff).rem_euclid(18_980))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_positions() {
        assert_eq!(AztecXihuitl::from_ordinal(CORRELATION), AztecXihuitl::md(11, 2));
        assert_eq!(
            AztecTonalpohualli::from_ordinal(CORRELATION),
            AztecTonalpohualli::nn(1, 5)
        );
    }

    #[test]
    fn xihuitl_positions() {
        assert_eq!(AztecXihuitl::from_ordinal(735_767), AztecXihuitl::md(13, 16));
        assert_eq!(AztecXihuitl::md(11, 2).on_or_before(735_767), 735_713);
    }

    #[test]
    fn tonalpohualli_positions() {
        assert_eq!(
            AztecTonalpohualli::from_ordinal(735_767),
            AztecTonalpohualli::nn(3, 9)
        );
        assert_eq!(AztecTonalpohualli::nn(1, 5).on_or_before(735_767), 735_583);
    }

    #[test]
    fn xiuhmolpilli_of_2015() {
        assert_eq!(xiuhmolpilli(735_767).unwrap(), AztecTonalpohualli::nn(3, 13));
    }

    #[test]
    fn combined_cycle() {
        let found = xihuitl_tonalpohualli_on_or_before(
            AztecXihuitl::md(11, 2),
            AztecTonalpohualli::nn(1, 5),
            735_767,
        )
        .unwrap();
        assert_eq!(found, 726_223);
        assert_eq!(AztecXihuitl::from_ordinal(found), AztecXihuitl::md(11, 2));
        assert_eq!(
            AztecTonalpohualli::from_ordinal(found),
            AztecTonalpohualli::nn(1, 5)
        );
        assert!(matches!(
            xihuitl_tonalpohualli_on_or_before(
                AztecXihuitl::md(11, 2),
                AztecTonalpohualli::nn(1, 6),
                735_767,
            ),
            Err(CalendarError::ImpossibleCycleCombination)
        ));
    }

    #[test]
    fn validation() {
        assert!(AztecXihuitl::new(19, 5).is_ok());
        assert!(AztecXihuitl::new(19, 6).is_err());
        assert!(AztecXihuitl::new(1, 0).is_err());
        assert!(AztecTonalpohualli::new(0, 1).is_err());
    }
}
