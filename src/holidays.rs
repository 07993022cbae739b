// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Holiday calendars as a capability.
//!
//! A [`HolidayCalendar`] answers three questions about an ordinal day:
//! weekend, holiday, business day.  Two providers cover the common cases:
//! a fixed list ([`SimpleCalendar`]) and a per-year computed table
//! ([`YearlyCalendar`]) that memoizes each year on first touch.  The memo
//! is owned by the provider — there is no global state — and lives behind
//! a mutex so a shared calendar stays consistent across threads.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

use super::systems::gregorian;
use super::weekday::{weekday_from_ordinal, DayOfWeek};

/// The usual Saturday/Sunday weekend.
pub const WEEKEND: [DayOfWeek; 2] = [DayOfWeek::Saturday, DayOfWeek::Sunday];

/// Weekend, holiday, and business-day classification of ordinal days.
pub trait HolidayCalendar {
    /// True when the day falls on the calendar's weekend.
    fn is_weekend(&self, ordinal: i64) -> bool;

    /// True when the day is a holiday.
    fn is_holiday(&self, ordinal: i64) -> bool;

    /// A business day is neither weekend nor holiday.
    fn is_business_day(&self, ordinal: i64) -> bool {
        !self.is_weekend(ordinal) && !self.is_holiday(ordinal)
    }
}

/// A calendar with a fixed weekend set and an explicit holiday list.
#[derive(Debug, Clone, Default)]
pub struct SimpleCalendar {
    weekends: Vec<DayOfWeek>,
    holidays: HashSet<i64>,
}

impl SimpleCalendar {
    pub fn new(
        weekends: impl IntoIterator<Item = DayOfWeek>,
        holidays: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            weekends: weekends.into_iter().collect(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Saturday/Sunday weekends, no holidays.
    pub fn weekends_only() -> Self {
        Self::new(WEEKEND, [])
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn is_weekend(&self, ordinal: i64) -> bool {
        self.weekends.contains(&weekday_from_ordinal(ordinal))
    }

    fn is_holiday(&self, ordinal: i64) -> bool {
        self.holidays.contains(&ordinal)
    }
}

/// A calendar whose holidays are computed per Gregorian year.
///
/// The supplied closure maps a year to that year's holiday ordinals; each
/// year is computed once and memoized inside the provider.
pub struct YearlyCalendar<F>
where
    F: Fn(i32) -> Vec<i64>,
{
    weekends: Vec<DayOfWeek>,
    fetch: F,
    cache: Mutex<HashMap<i32, HashSet<i64>>>,
}

impl<F> YearlyCalendar<F>
where
    F: Fn(i32) -> Vec<i64>,
{
    pub fn new(weekends: impl IntoIterator<Item = DayOfWeek>, fetch: F) -> Self {
        Self {
            weekends: weekends.into_iter().collect(),
            fetch,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of years currently memoized.
    pub fn cached_years(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<F> HolidayCalendar for YearlyCalendar<F>
where
    F: Fn(i32) -> Vec<i64>,
{
    fn is_weekend(&self, ordinal: i64) -> bool {
        self.weekends.contains(&weekday_from_ordinal(ordinal))
    }

    fn is_holiday(&self, ordinal: i64) -> bool {
        let year = gregorian::year_from_ordinal(ordinal);
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .entry(year)
            .or_insert_with(|| (self.fetch)(year).into_iter().collect())
            .contains(&ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_calendar_classification() {
        // 2015-06-18 (Thursday) = 735767; declare the 19th a holiday.
        let cal = SimpleCalendar::new(WEEKEND, [735_768]);
        assert!(cal.is_business_day(735_767));
        assert!(cal.is_holiday(735_768));
        assert!(!cal.is_business_day(735_768));
        // Saturday the 20th.
        assert!(cal.is_weekend(735_769));
        assert!(!cal.is_business_day(735_769));
    }

    #[test]
    fn yearly_calendar_memoizes() {
        let cal = YearlyCalendar::new(WEEKEND, |year| {
            vec![gregorian::christmas(year), gregorian::easter(year)]
        });
        assert_eq!(cal.cached_years(), 0);
        // Christmas 2015 (a Friday).
        let christmas = gregorian::christmas(2015);
        assert!(cal.is_holiday(christmas));
        assert!(!cal.is_business_day(christmas));
        assert_eq!(cal.cached_years(), 1);
        // Another probe into the same year does not grow the cache.
        assert!(!cal.is_holiday(735_767));
        assert_eq!(cal.cached_years(), 1);
        assert!(cal.is_holiday(gregorian::easter(2016)));
        assert_eq!(cal.cached_years(), 2);
    }
}
