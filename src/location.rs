// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Terrestrial locations and local solar events.
//!
//! A [`Location`] fixes the geometry (latitude, longitude, elevation) and
//! the civil clock (zone offset) of an observer.  On top of it sit the
//! frame conversions between universal, local mean, standard, and apparent
//! solar time, and the depression-angle machinery behind dawn, dusk,
//! sunrise, and sunset.
//!
//! Dawn and dusk return `None` when the sun never reaches the requested
//! depression on that date (polar day or night); calendars that require
//! the event surface the failure as an error at their own layer.

use super::ephemeris::{equation_of_time, obliquity};
use super::instant::days_from_hours;
use super::moment_ext::Moment;
use super::solar::solar_longitude;
use super::trig::{
    angle, arcsin_degrees, arccos_degrees, cos_degrees, normalized_degrees_signed, sin_degrees,
    tan_degrees,
};
use qtty::Days;

/// Mean radius of the earth, in meters.
const EARTH_RADIUS: f64 = 6.372e6;

/// Convergence threshold for the depression iteration: 30 seconds of time.
const DEPRESSION_TOLERANCE: f64 = 30.0 / 86_400.0;

/// An observer's position and civil clock.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Geodetic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude: f64,
    /// Elevation above sea level, in meters.
    pub elevation: f64,
    /// Civil clock offset from Universal Time, as a fraction of a day.
    pub zone: Days,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64, elevation: f64, zone: Days) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
            zone,
        }
    }

    // ── time frame conversions ────────────────────────────────────────

    #[inline]
    pub fn universal_from_standard(&self, tee: Moment) -> Moment {
        tee - self.zone
    }

    #[inline]
    pub fn standard_from_universal(&self, tee: Moment) -> Moment {
        tee + self.zone
    }

    #[inline]
    pub fn local_from_universal(&self, tee: Moment) -> Moment {
        tee + Days::new(self.longitude / 360.0)
    }

    #[inline]
    pub fn universal_from_local(&self, tee: Moment) -> Moment {
        tee - Days::new(self.longitude / 360.0)
    }

    #[inline]
    pub fn standard_from_local(&self, tee: Moment) -> Moment {
        self.standard_from_universal(self.universal_from_local(tee))
    }

    #[inline]
    pub fn local_from_standard(&self, tee: Moment) -> Moment {
        self.local_from_universal(self.universal_from_standard(tee))
    }

    /// Apparent (sundial) time from local mean time.
    pub fn apparent_from_local(&self, tee: Moment) -> Moment {
        tee + equation_of_time(self.universal_from_local(tee))
    }

    /// Local mean time from apparent (sundial) time.
    pub fn local_from_apparent(&self, tee: Moment) -> Moment {
        tee - equation_of_time(self.universal_from_local(tee))
    }

    /// Standard-clock moment of true (apparent) midnight opening day
    /// `date`.
    pub fn midnight(&self, date: i64) -> Moment {
        self.standard_from_local(self.local_from_apparent(Moment::from_ordinal(date)))
    }

    /// Standard-clock moment of true (apparent) noon of day `date`.
    pub fn midday(&self, date: i64) -> Moment {
        self.standard_from_local(
            self.local_from_apparent(Moment::from_ordinal(date) + Days::new(0.5)),
        )
    }

    // ── depression angles ─────────────────────────────────────────────

    /// Sine of the offset angle for the sun reaching depression `alpha`
    /// below the horizon at local moment `tee`.  Magnitudes above 1 mean
    /// the sun does not reach that depression on that day.
    pub fn sine_offset(&self, tee: Moment, alpha: f64) -> f64 {
        let universal = self.universal_from_local(tee);
        let delta = normalized_degrees_signed(arcsin_degrees(
            sin_degrees(obliquity(universal)) * sin_degrees(solar_longitude(universal)),
        ));
        tan_degrees(self.latitude) * tan_degrees(delta)
            + sin_degrees(alpha) / (cos_degrees(delta) * cos_degrees(self.latitude))
    }

    /// One refinement step of the depression moment near local `tee`.
    fn approx_moment_of_depression(&self, tee: Moment, alpha: f64, early: bool) -> Option<Moment> {
        let ttry = self.sine_offset(tee, alpha);
        let date = tee.value().floor();

        let alt = if alpha >= 0.0 {
            if early {
                date
            } else {
                date + 1.0
            }
        } else {
            date + 0.5
        };
        let value = if ttry.abs() > 1.0 {
            self.sine_offset(Moment::new(alt), alpha)
        } else {
            ttry
        };

        if value.abs() <= 1.0 {
            let offset = (normalized_degrees_signed(arcsin_degrees(value)) / 360.0 + 0.5)
                .rem_euclid(1.0)
                - 0.5;
            let t = date + if early { 0.25 - offset } else { 0.75 + offset };
            Some(self.local_from_apparent(Moment::new(t)))
        } else {
            None
        }
    }

    /// The local moment near `approx` at which the sun is `alpha` degrees
    /// below the horizon (morning side when `early`), refined iteratively
    /// to within 30 seconds.  `None` when the depression is never reached.
    pub fn moment_of_depression(
        &self,
        approx: Moment,
        alpha: f64,
        early: bool,
    ) -> Option<Moment> {
        let mut guess = approx;
        loop {
            let t = self.approx_moment_of_depression(guess, alpha, early)?;
            if (guess - t).abs() < Days::new(DEPRESSION_TOLERANCE) {
                return Some(t);
            }
            guess = t;
        }
    }

    /// Standard-clock moment on day `date` when the rising sun is `alpha`
    /// degrees below the horizon.
    pub fn dawn(&self, date: i64, alpha: f64) -> Option<Moment> {
        let approx = Moment::from_ordinal(date) + Days::new(0.25);
        let t = self.moment_of_depression(approx, alpha, true)?;
        Some(self.standard_from_local(t))
    }

    /// Standard-clock moment on day `date` when the setting sun is `alpha`
    /// degrees below the horizon.
    pub fn dusk(&self, date: i64, alpha: f64) -> Option<Moment> {
        let approx = Moment::from_ordinal(date) + Days::new(0.75);
        let t = self.moment_of_depression(approx, alpha, false)?;
        Some(self.standard_from_local(t))
    }

    /// Atmospheric refraction plus horizon dip at this elevation, in
    /// degrees.
    pub fn refraction(&self) -> f64 {
        let h = self.elevation.max(0.0);
        let dip = normalized_degrees_signed(arccos_degrees(EARTH_RADIUS / (EARTH_RADIUS + h)));
        angle(0.0, 34.0, 0.0) + dip + angle(0.0, 0.0, 19.0) * h.sqrt()
    }

    /// Standard-clock sunrise on day `date`: the upper limb touches the
    /// horizon, accounting for refraction and the 16′ solar radius.
    pub fn sunrise(&self, date: i64) -> Option<Moment> {
        self.dawn(date, self.refraction() + angle(0.0, 16.0, 0.0))
    }

    /// Standard-clock sunset on day `date`.
    pub fn sunset(&self, date: i64) -> Option<Moment> {
        self.dusk(date, self.refraction() + angle(0.0, 16.0, 0.0))
    }

    // ── temporal (seasonal) hours ─────────────────────────────────────

    /// One twelfth of the daylight period of day `date`.
    pub fn daytime_temporal_hour(&self, date: i64) -> Option<Days> {
        Some((self.sunset(date)? - self.sunrise(date)?) / 12.0)
    }

    /// One twelfth of the night starting on day `date`.
    pub fn nighttime_temporal_hour(&self, date: i64) -> Option<Days> {
        Some((self.sunrise(date + 1)? - self.sunset(date)?) / 12.0)
    }

    /// Standard-clock moment matching sundial moment `tee`, where daytime
    /// runs in twelve seasonal hours from sunrise to sunset and night in
    /// twelve from sunset to sunrise.
    pub fn standard_from_sundial(&self, tee: Moment) -> Option<Moment> {
        let date = tee.ordinal();
        let hour = 24.0 * tee.time_of_day().value();
        if (6.0..=18.0).contains(&hour) {
            let h = self.daytime_temporal_hour(date)?;
            Some(self.sunrise(date)? + h * (hour - 6.0))
        } else if hour < 6.0 {
            let h = self.nighttime_temporal_hour(date - 1)?;
            Some(self.sunset(date - 1)? + h * (hour + 6.0))
        } else {
            let h = self.nighttime_temporal_hour(date)?;
            Some(self.sunset(date)? + h * (hour - 18.0))
        }
    }
}

// ---------------------------------------------------------------------------
// Named observers used by the calendar systems
// ---------------------------------------------------------------------------

pub const GREENWICH: Location = Location::new(51.477_781_5, 0.0, 46.9, Days::new(0.0));
pub const MECCA: Location = Location::new(
    21.0 + 25.0 / 60.0 + 24.0 / 3600.0,
    39.0 + 49.0 / 60.0 + 24.0 / 3600.0,
    298.0,
    Days::new(3.0 / 24.0),
);
pub const JERUSALEM: Location = Location::new(31.8, 35.2, 800.0, Days::new(2.0 / 24.0));
pub const ACRE: Location = Location::new(32.94, 35.09, 22.0, Days::new(2.0 / 24.0));
pub const JAFFA: Location = Location::new(
    32.0 + 1.0 / 60.0 + 60.0 / 3600.0,
    34.0 + 45.0 / 60.0,
    0.0,
    Days::new(2.0 / 24.0),
);
pub const CAIRO: Location = Location::new(30.1, 31.3, 200.0, Days::new(2.0 / 24.0));
pub const TEHRAN: Location = Location::new(35.68, 51.42, 1100.0, Days::new(3.5 / 24.0));
pub const HAIFA: Location = Location::new(32.82, 35.0, 0.0, Days::new(2.0 / 24.0));
pub const PARIS: Location = Location::new(
    48.0 + 50.0 / 60.0 + 11.0 / 3600.0,
    2.0 + 20.0 / 60.0 + 15.0 / 3600.0,
    27.0,
    Days::new(1.0 / 24.0),
);
pub const URBANA: Location = Location::new(40.1, -88.2, 225.0, Days::new(-6.0 / 24.0));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_conversions_invert() {
        let t = Moment::new(735_770.3);
        let loc = JERUSALEM;
        assert_eq!(loc.standard_from_universal(loc.universal_from_standard(t)), t);
        let back = loc.universal_from_local(loc.local_from_universal(t));
        assert!((back - t).abs() < Days::new(1e-12));
        let back = loc.local_from_apparent(loc.apparent_from_local(t));
        assert!((back - t).abs() < Days::new(1e-6));
    }

    #[test]
    fn jerusalem_sun_events_at_summer_solstice() {
        // 2015-06-21, standard clock (UT+2).
        let sunrise = JERUSALEM.sunrise(735_770).unwrap();
        assert!((sunrise.value() - 735_770.186_348_736_6).abs() < 2e-4);
        let sunset = JERUSALEM.sunset(735_770).unwrap();
        assert!((sunset.value() - 735_770.787_132_360_4).abs() < 2e-4);
    }

    #[test]
    fn refraction_grows_with_elevation() {
        let sea = Location::new(0.0, 0.0, 0.0, Days::new(0.0));
        assert!((sea.refraction() - 34.0 / 60.0).abs() < 1e-12);
        assert!(JERUSALEM.refraction() > sea.refraction());
    }

    #[test]
    fn polar_night_yields_none() {
        // Astronomical dawn cannot occur at 75°N around the June solstice.
        let arctic = Location::new(75.0, 0.0, 0.0, Days::new(0.0));
        assert!(arctic.dawn(735_770, 18.0).is_none());
        // In December the sun does dip 18° below the horizon there.
        assert!(arctic.dawn(735_585, 18.0).is_some());
    }

    #[test]
    fn sundial_morning_end() {
        // Four seasonal hours past sunrise on 2015-06-21 in Jerusalem.
        let t = JERUSALEM
            .standard_from_sundial(Moment::from_ordinal(735_770) + days_from_hours(10.0))
            .unwrap();
        assert!((t.value() - 735_770.386_609_944_5).abs() < 5e-4);
    }

    #[test]
    fn midday_in_tehran() {
        // Standard-clock apparent noon on 2015-03-21.
        let noon = TEHRAN.midday(735_678);
        assert!((noon.time_of_day().value() - 0.508_059_350_424_446_2).abs() < 1e-6);
    }
}
