// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar position model.
//!
//! The apparent longitude of the sun from a 49-term trigonometric fit
//! (Meeus, *Astronomical Algorithms*), with aberration and nutation folded
//! in, plus the mean-motion searches the solar calendars anchor on.

use super::ephemeris::{aberration, nutation};
use super::error::CalendarError;
use super::moment_ext::Moment;
use super::search::invert_angular;
use super::systems::gregorian;
use super::trig::{normalized_degrees, normalized_degrees_signed, sin_degrees};
use qtty::Days;

/// Mean length of the tropical year, in days.
pub const MEAN_TROPICAL_YEAR: f64 = 365.242_189;

// Amplitudes (×10⁷ degrees), phases (degrees), and rates (degrees per
// Julian century) of the periodic terms of the solar longitude fit.
#[rustfmt::skip]
const SOLAR_AMPLITUDE: [f64; 49] = [
    403406.0, 195207.0, 119433.0, 112392.0, 3891.0, 2819.0, 1721.0, 660.0,
    350.0, 334.0, 314.0, 268.0, 242.0, 234.0, 158.0, 132.0, 129.0, 114.0,
    99.0, 93.0, 86.0, 78.0, 72.0, 68.0, 64.0, 46.0, 38.0, 37.0, 32.0, 29.0,
    28.0, 27.0, 27.0, 25.0, 24.0, 21.0, 21.0, 20.0, 18.0, 17.0, 14.0, 13.0,
    13.0, 13.0, 12.0, 10.0, 10.0, 10.0, 10.0,
];

#[rustfmt::skip]
const SOLAR_PHASE: [f64; 49] = [
    270.54861, 340.19128, 63.91854, 331.26220, 317.843, 86.631, 240.052,
    310.26, 247.23, 260.87, 297.82, 343.14, 166.79, 81.53, 3.50, 132.75,
    182.95, 162.03, 29.8, 266.4, 249.2, 157.6, 257.8, 185.1, 69.9, 8.0,
    197.1, 250.4, 65.3, 162.7, 341.5, 291.6, 98.5, 146.7, 110.0, 5.2,
    342.6, 230.9, 256.1, 45.3, 242.9, 115.2, 151.8, 285.3, 53.3, 126.6,
    205.7, 85.9, 146.1,
];

#[rustfmt::skip]
const SOLAR_RATE: [f64; 49] = [
    0.9287892, 35999.1376958, 35999.4089666, 35998.7287385, 71998.20261,
    71998.4403, 36000.35726, 71997.4812, 32964.4678, -19.4410, 445267.1117,
    45036.8840, 3.1008, 22518.4434, -19.9739, 65928.9345, 9038.0293,
    3034.7684, 33718.148, 3034.448, -2280.773, 29929.992, 31556.493,
    149.588, 9037.750, 107997.405, -4444.176, 151.771, 67555.316,
    31556.080, -4561.540, 107996.706, 1221.655, 62894.167, 31437.369,
    14578.298, -31931.757, 34777.243, 1221.999, 62894.511, -4442.039,
    107997.909, 119.066, 16859.071, -4.578, 26895.292, -39.127, 12297.536,
    90073.778,
];

/// Apparent longitude of the sun at UT moment `tee`, in degrees [0, 360).
pub fn solar_longitude(tee: Moment) -> f64 {
    let c = tee.julian_centuries();
    let series: f64 = SOLAR_AMPLITUDE
        .iter()
        .zip(SOLAR_PHASE.iter())
        .zip(SOLAR_RATE.iter())
        .map(|((&x, &y), &z)| x * sin_degrees(y + z * c))
        .sum();
    let lambda =
        282.777_183_4 + 36_000.769_537_44 * c + 0.000_005_729_577_951_308_232 * series;
    normalized_degrees(lambda + aberration(tee) + nutation(tee))
}

/// A moment close to, and never after, the last time at or before `tee`
/// when the solar longitude was `lambda`.
///
/// Mean-motion estimate refined once; the result seeds integer-day scans
/// (new-year searches) that tolerate an error of a day or two.
pub fn estimate_prior_solar_longitude(lambda: f64, tee: Moment) -> Moment {
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let tau = tee - Days::new(rate * normalized_degrees(solar_longitude(tee) - lambda));
    let cap_delta = normalized_degrees_signed(solar_longitude(tau) - lambda);
    (tau - Days::new(rate * cap_delta)).min(tee)
}

/// The first moment at or after `tee` when the solar longitude is
/// `lambda`, to bisection tolerance.
pub fn solar_longitude_after(lambda: f64, tee: Moment) -> Result<Moment, CalendarError> {
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let tau = tee + Days::new(rate * normalized_degrees(lambda - solar_longitude(tee)));
    let a = tee.max(tau - Days::new(5.0));
    let b = tau + Days::new(5.0);
    let crossing = invert_angular(solar_longitude, lambda, a, b);
    if normalized_degrees_signed(solar_longitude(crossing) - lambda).abs() > 0.01 {
        return Err(CalendarError::NoCrossing { target: lambda });
    }
    Ok(crossing)
}

/// The four season points of the solar year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// The solar longitude at which the season begins, in degrees.
    #[inline]
    pub const fn degrees(self) -> f64 {
        match self {
            Season::Spring => 0.0,
            Season::Summer => 90.0,
            Season::Autumn => 180.0,
            Season::Winter => 270.0,
        }
    }
}

/// The UT moment in Gregorian year `year` at which `season` begins.
pub fn season_in_gregorian(season: Season, year: i32) -> Result<Moment, CalendarError> {
    let start = Moment::from_ordinal(gregorian::new_year(year));
    solar_longitude_after(season.degrees(), start)
}
