// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Days of the week and weekday searches on the ordinal axis.
//!
//! R.D. day 1 (Gregorian 0001-01-01) is a Monday, so the weekday of any
//! ordinal is `(ordinal − 1) mod 7` with Monday numbered 0.

use super::error::CalendarError;

/// Day of the week, Monday = 0 through Sunday = 6.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayOfWeek {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl DayOfWeek {
    /// All seven days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// The day numbered `index mod 7`.
    #[inline]
    pub fn from_index(index: i64) -> DayOfWeek {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// The numeric value, Monday = 0.
    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }
}

/// The day of the week of an ordinal day.
#[inline]
pub fn weekday_from_ordinal(ordinal: i64) -> DayOfWeek {
    DayOfWeek::from_index(ordinal - 1)
}

/// The last ordinal on or before `ordinal` falling on `weekday`.
#[inline]
pub fn weekday_on_or_before(weekday: DayOfWeek, ordinal: i64) -> i64 {
    ordinal - (ordinal - 1 - weekday.index()).rem_euclid(7)
}

/// The first ordinal on or after `ordinal` falling on `weekday`.
#[inline]
pub fn weekday_on_or_after(weekday: DayOfWeek, ordinal: i64) -> i64 {
    weekday_on_or_before(weekday, ordinal + 6)
}

/// The ordinal falling on `weekday` closest to `ordinal`.
#[inline]
pub fn weekday_nearest(weekday: DayOfWeek, ordinal: i64) -> i64 {
    weekday_on_or_before(weekday, ordinal + 3)
}

/// The last ordinal strictly before `ordinal` falling on `weekday`.
#[inline]
pub fn weekday_before(weekday: DayOfWeek, ordinal: i64) -> i64 {
    weekday_on_or_before(weekday, ordinal - 1)
}

/// The first ordinal strictly after `ordinal` falling on `weekday`.
#[inline]
pub fn weekday_after(weekday: DayOfWeek, ordinal: i64) -> i64 {
    weekday_on_or_before(weekday, ordinal + 7)
}

/// The `n`-th `weekday` counted from `ordinal`: forward from (and
/// excluding) `ordinal` for positive `n`, backward for negative `n`.
/// `n = 0` does not name a day.
pub fn nth_weekday(n: i32, weekday: DayOfWeek, ordinal: i64) -> Result<i64, CalendarError> {
    match n.cmp(&0) {
        std::cmp::Ordering::Greater => Ok(7 * n as i64 + weekday_before(weekday, ordinal)),
        std::cmp::Ordering::Less => Ok(7 * n as i64 + weekday_after(weekday, ordinal)),
        std::cmp::Ordering::Equal => Err(CalendarError::InvalidDate {
            system: "weekday",
            reason: "the zeroth weekday from a date does not exist",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_weekdays() {
        assert_eq!(weekday_from_ordinal(1), DayOfWeek::Monday);
        assert_eq!(weekday_from_ordinal(-214_193), DayOfWeek::Sunday);
        assert_eq!(weekday_from_ordinal(764_652), DayOfWeek::Sunday);
        // 2015-06-18 was a Thursday.
        assert_eq!(weekday_from_ordinal(735_767), DayOfWeek::Thursday);
    }

    #[test]
    fn on_or_before_after() {
        // Day 735767 is a Thursday.
        assert_eq!(weekday_on_or_before(DayOfWeek::Thursday, 735_767), 735_767);
        assert_eq!(weekday_on_or_before(DayOfWeek::Wednesday, 735_767), 735_766);
        assert_eq!(weekday_on_or_after(DayOfWeek::Thursday, 735_767), 735_767);
        assert_eq!(weekday_on_or_after(DayOfWeek::Friday, 735_767), 735_768);
        assert_eq!(weekday_before(DayOfWeek::Thursday, 735_767), 735_760);
        assert_eq!(weekday_after(DayOfWeek::Thursday, 735_767), 735_774);
    }

    #[test]
    fn nearest_picks_the_closer_side() {
        // Thursday 735767: next Sunday is 3 ahead, previous Sunday 4 back.
        assert_eq!(weekday_nearest(DayOfWeek::Sunday, 735_767), 735_770);
        // Previous Monday is 3 back, next Monday 4 ahead.
        assert_eq!(weekday_nearest(DayOfWeek::Monday, 735_767), 735_764);
    }

    #[test]
    fn nth_counts_from_the_date() {
        // Second Friday after Thursday 735767.
        assert_eq!(
            nth_weekday(2, DayOfWeek::Friday, 735_767).unwrap(),
            735_775
        );
        // First Thursday counted forward from a Thursday is that Thursday.
        assert_eq!(
            nth_weekday(1, DayOfWeek::Thursday, 735_767).unwrap(),
            735_767
        );
        assert_eq!(
            nth_weekday(-1, DayOfWeek::Thursday, 735_767).unwrap(),
            735_767
        );
        assert!(nth_weekday(0, DayOfWeek::Monday, 735_767).is_err());
    }
}
