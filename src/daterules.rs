// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Business-day arithmetic over a [`HolidayCalendar`].

use super::error::CalendarError;
use super::holidays::HolidayCalendar;
use super::search::SEARCH_HORIZON;
use super::systems::gregorian::GregorianDate;

/// How a date falling on a non-business day is moved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Leave the date untouched.
    None,
    /// Move to the nearest business day on either side.
    Nearest,
    /// Move back to the previous business day.
    Preceding,
    /// Move forward to the next business day.
    Following,
    /// Move back, unless that leaves the month, in which case forward.
    ModifiedPreceding,
    /// Move forward, unless that leaves the month, in which case back.
    ModifiedFollowing,
}

fn step_to_business_day<C: HolidayCalendar>(
    mut ordinal: i64,
    step: i64,
    calendar: &C,
) -> Result<i64, CalendarError> {
    let start = ordinal;
    while !calendar.is_business_day(ordinal) {
        ordinal += step;
        if (ordinal - start).abs() >= SEARCH_HORIZON {
            return Err(CalendarError::SearchExhausted {
                start,
                bound: SEARCH_HORIZON,
            });
        }
    }
    Ok(ordinal)
}

/// Add `count` business days to `ordinal` (negative counts move back).
pub fn add_business_days<C: HolidayCalendar>(
    ordinal: i64,
    count: i64,
    calendar: &C,
) -> Result<i64, CalendarError> {
    let step = if count >= 0 { 1 } else { -1 };
    let mut remaining = count.abs();
    let mut day = ordinal;
    while remaining != 0 {
        day = step_to_business_day(day + step, step, calendar)?;
        remaining -= 1;
    }
    Ok(day)
}

/// The business day nearest to `ordinal`; ties go forward when
/// `prefer_forward`.
pub fn nearest_business_day<C: HolidayCalendar>(
    ordinal: i64,
    prefer_forward: bool,
    calendar: &C,
) -> Result<i64, CalendarError> {
    if calendar.is_business_day(ordinal) {
        return Ok(ordinal);
    }
    for distance in 1..SEARCH_HORIZON {
        let forward_ok = calendar.is_business_day(ordinal + distance);
        let backward_ok = calendar.is_business_day(ordinal - distance);
        if forward_ok && (prefer_forward || !backward_ok) {
            return Ok(ordinal + distance);
        }
        if backward_ok {
            return Ok(ordinal - distance);
        }
    }
    Err(CalendarError::SearchExhausted {
        start: ordinal,
        bound: SEARCH_HORIZON,
    })
}

/// Adjust `ordinal` to a business day according to `convention`.
pub fn adjust<C: HolidayCalendar>(
    ordinal: i64,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Result<i64, CalendarError> {
    if convention == BusinessDayConvention::None || calendar.is_business_day(ordinal) {
        return Ok(ordinal);
    }
    match convention {
        BusinessDayConvention::None => Ok(ordinal),
        BusinessDayConvention::Nearest => nearest_business_day(ordinal, true, calendar),
        BusinessDayConvention::Following => step_to_business_day(ordinal, 1, calendar),
        BusinessDayConvention::Preceding => step_to_business_day(ordinal, -1, calendar),
        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = step_to_business_day(ordinal, 1, calendar)?;
            if same_month(adjusted, ordinal) {
                Ok(adjusted)
            } else {
                step_to_business_day(ordinal, -1, calendar)
            }
        }
        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = step_to_business_day(ordinal, -1, calendar)?;
            if same_month(adjusted, ordinal) {
                Ok(adjusted)
            } else {
                step_to_business_day(ordinal, 1, calendar)
            }
        }
    }
}

fn same_month(a: i64, b: i64) -> bool {
    let a = GregorianDate::from_ordinal(a);
    let b = GregorianDate::from_ordinal(b);
    (a.year, a.month) == (b.year, b.month)
}

#[cfg(test)]
mod tests {
    use super::super::holidays::SimpleCalendar;
    use super::*;

    // 2015-06-18 was a Thursday; 735769/735770 the following weekend.

    #[test]
    fn add_business_days_skips_weekends() {
        let cal = SimpleCalendar::weekends_only();
        // Thursday + 2 business days = Monday.
        assert_eq!(add_business_days(735_767, 2, &cal).unwrap(), 735_771);
        // Monday − 1 business day = Friday.
        assert_eq!(add_business_days(735_771, -1, &cal).unwrap(), 735_768);
        assert_eq!(add_business_days(735_767, 0, &cal).unwrap(), 735_767);
    }

    #[test]
    fn adjust_conventions() {
        let cal = SimpleCalendar::weekends_only();
        let saturday = 735_769;
        assert_eq!(
            adjust(saturday, BusinessDayConvention::None, &cal).unwrap(),
            saturday
        );
        assert_eq!(
            adjust(saturday, BusinessDayConvention::Following, &cal).unwrap(),
            735_771
        );
        assert_eq!(
            adjust(saturday, BusinessDayConvention::Preceding, &cal).unwrap(),
            735_768
        );
        assert_eq!(
            adjust(saturday, BusinessDayConvention::Nearest, &cal).unwrap(),
            735_768
        );
    }

    #[test]
    fn modified_conventions_stay_in_the_month() {
        let cal = SimpleCalendar::weekends_only();
        // Sunday 2015-05-31 = 735749: following leaves May, so modified
        // following backs up to Friday the 29th.
        let sunday = 735_749;
        assert_eq!(
            adjust(sunday, BusinessDayConvention::Following, &cal).unwrap(),
            735_750
        );
        assert_eq!(
            adjust(sunday, BusinessDayConvention::ModifiedFollowing, &cal).unwrap(),
            735_747
        );
        // Saturday 2015-08-01 = 735811: preceding leaves August, so
        // modified preceding rolls forward to Monday the 3rd.
        let saturday = 735_811;
        assert_eq!(
            adjust(saturday, BusinessDayConvention::ModifiedPreceding, &cal).unwrap(),
            735_813
        );
    }

    #[test]
    fn all_holiday_calendar_exhausts() {
        struct Never;
        impl HolidayCalendar for Never {
            fn is_weekend(&self, _: i64) -> bool {
                false
            }
            fn is_holiday(&self, _: i64) -> bool {
                true
            }
        }
        assert!(add_business_days(735_767, 1, &Never).is_err());
        assert!(nearest_business_day(735_767, true, &Never).is_err());
    }
}
