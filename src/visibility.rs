// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Crescent visibility and ritual observation times.
//!
//! The observational lunar calendars begin their months on the evening the
//! new crescent is first seen.  Visibility follows the Shaukat criterion:
//! a young moon, far enough from the sun in arc of light, high enough at
//! evening twilight.

use super::error::CalendarError;
use super::instant::days_from_hours;
use super::location::{Location, JERUSALEM, URBANA};
use super::lunar::{
    lunar_altitude, lunar_latitude, lunar_phase, lunar_phase_at_or_after, MoonPhase,
    MEAN_SYNODIC_MONTH,
};
use super::moment_ext::Moment;
use super::search::next_int;
use super::solar::{solar_longitude_after, Season};
use super::systems::gregorian;
use super::trig::{
    arccos_degrees, arctan_degrees, cos_degrees, normalized_degrees_signed, tan_degrees,
};
use super::ephemeris::declination;
use super::solar::solar_longitude;
use super::weekday::{weekday_after, DayOfWeek};

/// True when the new crescent is visible at `location` on the evening of
/// day `date` (Shaukat criterion, evaluated at 4.5° dusk of the previous
/// evening).  An undefined dusk counts as not visible.
pub fn visible_crescent(date: i64, location: &Location) -> bool {
    let dusk = match location.dusk(date - 1, 4.5) {
        Some(t) => location.universal_from_standard(t),
        None => return false,
    };
    let phase = lunar_phase(dusk);
    let altitude = lunar_altitude(dusk, location);
    let arc_of_light = normalized_degrees_signed(arccos_degrees(
        cos_degrees(lunar_latitude(dusk)) * cos_degrees(phase),
    ));
    phase > 0.0 && phase < 90.0 && (10.6..=90.0).contains(&arc_of_light) && altitude > 4.1
}

/// The day of the first crescent visibility at or before `date`.
pub fn phasis_on_or_before(date: i64, location: &Location) -> Result<i64, CalendarError> {
    let mean = date
        - (lunar_phase(Moment::from_ordinal(date + 1)) / 360.0 * MEAN_SYNODIC_MONTH).floor()
            as i64;
    let tau = if date - mean <= 3 && !visible_crescent(date, location) {
        mean - 30
    } else {
        mean - 2
    };
    next_int(tau, |d| visible_crescent(d, location))
}

/// The day of the first crescent visibility at or after `date`.
pub fn phasis_on_or_after(date: i64, location: &Location) -> Result<i64, CalendarError> {
    let mean = date
        - (lunar_phase(Moment::from_ordinal(date + 1)) / 360.0 * MEAN_SYNODIC_MONTH).floor()
            as i64;
    let tau = if date - mean <= 3 && !visible_crescent(date - 1, location) {
        date
    } else {
        mean + 29
    };
    next_int(tau, |d| visible_crescent(d, location))
}

// ---------------------------------------------------------------------------
// Ritual times of day
// ---------------------------------------------------------------------------

/// Standard time of Jewish dusk (sun 4°40′ below the horizon, per the
/// Vilna Gaon) on day `date`.
pub fn jewish_dusk(date: i64, location: &Location) -> Option<Moment> {
    location.dusk(date, 4.0 + 40.0 / 60.0)
}

/// Standard time the Jewish sabbath ends (sun 7°5′ below the horizon, per
/// Berthold Cohn) on day `date`.
pub fn jewish_sabbath_ends(date: i64, location: &Location) -> Option<Moment> {
    location.dusk(date, 7.0 + 5.0 / 60.0)
}

/// Standard time of the end of the Jewish morning: the fourth seasonal
/// hour of day `date`.
pub fn jewish_morning_end(date: i64, location: &Location) -> Option<Moment> {
    location.standard_from_sundial(Moment::from_ordinal(date) + days_from_hours(10.0))
}

/// Standard time of asr prayer on day `date` (Hanafi: shadow twice the
/// noon gnomon plus its length).
pub fn asr(date: i64, location: &Location) -> Option<Moment> {
    let noon = location.universal_from_standard(location.midday(date));
    let delta = declination(noon, 0.0, solar_longitude(noon));
    let altitude = delta - location.latitude - 90.0;
    let h = arctan_degrees(tan_degrees(altitude), 2.0 * tan_degrees(altitude) + 1.0);
    location.dusk(date, -h)
}

/// Date of the proposed astronomical Easter in Gregorian year `year`: the
/// Sunday after the first full moon after the spring equinox, reckoned in
/// Jerusalem apparent time.
pub fn astronomical_easter(year: i32) -> Result<i64, CalendarError> {
    let jan1 = Moment::from_ordinal(gregorian::new_year(year));
    let equinox = solar_longitude_after(Season::Spring.degrees(), jan1)?;
    let full_moon = lunar_phase_at_or_after(MoonPhase::Full.degrees(), equinox);
    let paschal_moon = JERUSALEM
        .apparent_from_local(JERUSALEM.local_from_universal(full_moon))
        .ordinal();
    Ok(weekday_after(DayOfWeek::Sunday, paschal_moon))
}

/// Standard time of the winter solstice in Urbana, Illinois.
pub fn urbana_winter(year: i32) -> Result<Moment, CalendarError> {
    let jan1 = Moment::from_ordinal(gregorian::new_year(year));
    let solstice = solar_longitude_after(Season::Winter.degrees(), jan1)?;
    Ok(URBANA.standard_from_universal(solstice))
}
