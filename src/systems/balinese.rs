// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Balinese Pawukon cycle.
//!
//! The Pawukon is a 210-day week-of-weeks: every day holds a position in
//! ten concurrent subcycles of lengths 1 through 10. The shorter cycles
//! run independently; the 4-, 8- and 10-day positions are derived from
//! the others by table and exception rules.

use std::ops::Range;

use super::super::trig::amod;
use super::gregorian;

/// R.D. ordinal of the start of a Pawukon cycle (JD 146).
pub const EPOCH: i64 = -1_721_279;

/// Position in the cycle of R.D. 0, used to phase searches.
const DELTA: i64 = (-EPOCH) % 210;

const PANCAWARA_VALUES: [i64; 5] = [5, 9, 7, 4, 8];
const SAPTAWARA_VALUES: [i64; 7] = [5, 4, 3, 7, 8, 6, 9];

/// Day number within the 210-day Pawukon cycle, 0..=209.
#[inline]
pub fn cycle_day(ordinal: i64) -> i64 {
    (ordinal - EPOCH).rem_euclid(210)
}

/// Week number within the cycle, 1..=30.
#[inline]
pub fn week(ordinal: i64) -> i64 {
    cycle_day(ordinal).div_euclid(7) + 1
}

/// The ten concurrent Pawukon subcycle positions of a day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalinesePawukon {
    pub luang: bool,
    pub dwiwara: u8,
    pub triwara: u8,
    pub caturwara: u8,
    pub pancawara: u8,
    pub sadwara: u8,
    pub saptawara: u8,
    pub asatawara: u8,
    pub sangawara: u8,
    pub dasawara: u8,
}

fn pancawara(day: i64) -> u8 {
    amod(day + 2, 5) as u8
}

fn saptawara(day: i64) -> u8 {
    (day.rem_euclid(7) + 1) as u8
}

fn dasawara(day: i64) -> u8 {
    let i = pancawara(day) as usize - 1;
    let j = saptawara(day) as usize - 1;
    ((1 + PANCAWARA_VALUES[i] + SAPTAWARA_VALUES[j]) % 10) as u8
}

fn asatawara(day: i64) -> u8 {
    ((4 + (day - 70).rem_euclid(210)).max(6) % 8 + 1) as u8
}

impl BalinesePawukon {
    /// The subcycle positions of R.D. day `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let day = cycle_day(ordinal);
        let dasa = dasawara(day);
        let asata = asatawara(day);
        Self {
            luang: dasa % 2 == 0,
            dwiwara: amod(dasa as i64, 2) as u8,
            triwara: (day.rem_euclid(3) + 1) as u8,
            caturwara: amod(asata as i64, 4) as u8,
            pancawara: pancawara(day),
            sadwara: (day.rem_euclid(6) + 1) as u8,
            saptawara: saptawara(day),
            asatawara: asata,
            sangawara: ((day - 3).max(0).rem_euclid(9) + 1) as u8,
            dasawara: dasa,
        }
    }

    /// Latest day on or before `ordinal` whose 5-, 6- and 7-day positions
    /// match this date's. Those three cycles determine the position in
    /// the full 210-day cycle.
    pub fn on_or_before(&self, ordinal: i64) -> i64 {
        let a5 = self.pancawara as i64 - 1;
        let a6 = self.sadwara as i64 - 1;
        let b7 = self.saptawara as i64 - 1;
        let b35 = (a5 + 14 + 15 * (b7 - a5)).rem_euclid(35);
        let days = a6 + 36 * (b35 - a6);
        ordinal - (ordinal + DELTA - days).rem_euclid(210)
    }
}

/// Every occurrence of the `n`-th day of the `c`-day subcycle within an
/// ordinal range.
pub fn positions_in_range(n: i64, c: i64, range: Range<i64>) -> Vec<i64> {
    let mut positions = Vec::new();
    let mut pos = range.start + (n - range.start - DELTA - 1).rem_euclid(c);
    while pos < range.end {
        positions.push(pos);
        pos += c;
    }
    positions
}

/// Occurrences of Kajeng Keliwon (9th day of each 15-day subcycle) in a
/// Gregorian year.
pub fn kajeng_keliwon(gregorian_year: i32) -> Vec<i64> {
    positions_in_range(9, 15, gregorian::year_range(gregorian_year))
}

/// Occurrences of Tumpek (14th day of the cycle and every 35th day after)
/// in a Gregorian year.
pub fn tumpek(gregorian_year: i32) -> Vec<i64> {
    positions_in_range(14, 35, gregorian::year_range(gregorian_year))
}
