// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Standalone equinox and solstice estimator.
//!
//! Mean-event quartic fits plus a 24-term periodic correction from Meeus,
//! *Astronomical Algorithms* ch. 27, with that chapter's own ΔT table
//! (ch. 10) for the dynamical-to-universal shift.  Self-contained by
//! construction: it deliberately does not share the main ephemeris ΔT
//! model, matching the published tables it reproduces.
//!
//! The fits are valid for Gregorian years 1000–3000.

use super::instant::Time;
use super::moment_ext::Moment;
use super::scales::JD;
use super::solar::Season;
use super::trig::cos_degrees;
use qtty::Days;

// ---------------------------------------------------------------------------
// Periodic terms
// ---------------------------------------------------------------------------

#[rustfmt::skip]
const PERIODIC_AMPLITUDE: [f64; 24] = [
    485.0, 203.0, 199.0, 182.0, 156.0, 136.0, 77.0, 74.0, 70.0, 58.0, 52.0,
    50.0, 45.0, 44.0, 29.0, 18.0, 17.0, 16.0, 14.0, 12.0, 12.0, 12.0, 9.0,
    8.0,
];

#[rustfmt::skip]
const PERIODIC_PHASE: [f64; 24] = [
    324.96, 337.23, 342.08, 27.85, 73.14, 171.52, 222.54, 296.72, 243.58,
    119.81, 297.17, 21.02, 247.54, 325.15, 60.93, 155.12, 288.79, 198.04,
    199.76, 95.39, 287.11, 320.81, 227.73, 15.45,
];

#[rustfmt::skip]
const PERIODIC_RATE: [f64; 24] = [
    1934.136, 32964.467, 20.186, 445267.112, 45036.886, 22518.443,
    65928.934, 3034.906, 9037.513, 33718.147, 150.678, 2281.226, 29929.562,
    31555.956, 4443.417, 67555.328, 4562.452, 62894.029, 31436.921,
    14577.848, 31931.756, 34777.259, 1222.114, 16859.074,
];

fn periodic24(t: f64) -> f64 {
    PERIODIC_AMPLITUDE
        .iter()
        .enumerate()
        .map(|(i, &a)| a * cos_degrees(PERIODIC_PHASE[i] + PERIODIC_RATE[i] * t))
        .sum()
}

/// Mean (unperturbed) Julian ephemeris date of `season` in `year`.
fn estimate_event(year: i32, season: Season) -> f64 {
    let y = (year - 2000) as f64 / 1000.0;
    let (a, b, c, d, e) = match season {
        Season::Spring => (2_451_623.809_84, 365_242.374_04, 0.051_69, -0.004_11, -0.000_57),
        Season::Summer => (2_451_716.567_67, 365_241.626_03, 0.003_25, 0.008_88, -0.000_30),
        Season::Autumn => (2_451_810.217_15, 365_242.017_67, -0.115_75, 0.003_37, 0.000_78),
        Season::Winter => (2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23, 0.000_32),
    };
    a + y * (b + y * (c + y * (d + y * e)))
}

/// Julian ephemeris date (dynamical time) of `season` in Gregorian `year`.
pub fn equinox_jde(year: i32, season: Season) -> Time<JD> {
    let estimate = estimate_event(year, season);
    let t = (estimate - 2_451_545.0) / 36_525.0;
    let w = 35_999.373 * t - 2.47;
    let dl = 1.0 + 0.0334 * cos_degrees(w) + 0.0007 * cos_degrees(2.0 * w);
    Time::<JD>::new(estimate + 0.000_01 * periodic24(t) / dl)
}

/// Universal moment of `season` in Gregorian `year`.
pub fn equinox(year: i32, season: Season) -> Moment {
    let jde: Moment = equinox_jde(year, season).to();
    jde - Days::new(delta_t_seconds(year) / 86_400.0)
}

// ---------------------------------------------------------------------------
// ΔT (Meeus ch. 10)
// ---------------------------------------------------------------------------

const TABLE_FIRST_YEAR: i32 = 1620;
const TABLE_LAST_YEAR: i32 = 2002;

// ΔT in seconds for every even year 1620–2002.
#[rustfmt::skip]
const DELTA_T_TABLE: [f64; 192] = [
    121.0, 112.0, 103.0, 95.0, 88.0, 82.0, 77.0, 72.0, 68.0, 63.0, 60.0,
    56.0, 53.0, 51.0, 48.0, 46.0, 44.0, 42.0, 40.0, 38.0,            // 1620
    35.0, 33.0, 31.0, 29.0, 26.0, 24.0, 22.0, 20.0, 18.0, 16.0, 14.0,
    12.0, 11.0, 10.0, 9.0, 8.0, 7.0, 7.0, 7.0, 7.0,                  // 1660
    7.0, 7.0, 8.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 10.0, 10.0, 10.0,
    10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 11.0, 11.0,                  // 1700
    11.0, 11.0, 12.0, 12.0, 12.0, 12.0, 13.0, 13.0, 13.0, 14.0, 14.0,
    14.0, 14.0, 15.0, 15.0, 15.0, 15.0, 15.0, 16.0, 16.0,            // 1740
    16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 15.0, 15.0, 14.0, 13.0,      // 1780
    13.1, 12.5, 12.2, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 11.9, 11.6,
    11.0, 10.2, 9.2, 8.2,                                            // 1800
    7.1, 6.2, 5.6, 5.4, 5.3, 5.4, 5.6, 5.9, 6.2, 6.5, 6.8, 7.1, 7.3,
    7.5, 7.6,                                                        // 1830
    7.7, 7.3, 6.2, 5.2, 2.7, 1.4, -1.2, -2.8, -3.8, -4.8, -5.5, -5.3,
    -5.6, -5.7, -5.9,                                                // 1860
    -6.0, -6.3, -6.5, -6.2, -4.7, -2.8, -0.1, 2.6, 5.3, 7.7, 10.4,
    13.3, 16.0, 18.2, 20.2,                                          // 1890
    21.1, 22.4, 23.5, 23.8, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0, 24.3,
    25.3, 26.2, 27.3, 28.2,                                          // 1920
    29.1, 30.0, 30.7, 31.4, 32.2, 33.1, 34.0, 35.0, 36.5, 38.3, 40.2,
    42.2, 44.5, 46.5, 48.5,                                          // 1950
    50.5, 52.5, 53.8, 54.9, 55.8, 56.9, 58.3, 60.0, 61.6, 63.0, 63.8,
    64.3,                                                            // 1980–2002
];

/// ΔT (dynamical minus universal time) in seconds for `year`, per the
/// Meeus ch. 10 table and long-range quadratics.
pub fn delta_t_seconds(year: i32) -> f64 {
    if (TABLE_FIRST_YEAR..=TABLE_LAST_YEAR).contains(&year) {
        let offset = (year - TABLE_FIRST_YEAR) as usize;
        if offset % 2 == 1 {
            // Odd year: interpolate between the surrounding even years.
            (DELTA_T_TABLE[(offset - 1) / 2] + DELTA_T_TABLE[(offset + 1) / 2]) / 2.0
        } else {
            DELTA_T_TABLE[offset / 2]
        }
    } else {
        let t = (year - 2000) as f64 / 100.0;
        if year < 948 {
            2177.0 + 497.0 * t + 44.1 * t * t
        } else {
            let mut delta = 102.0 + 102.0 * t + 25.3 * t * t;
            if (2000..=2100).contains(&year) {
                // Blend toward the table value to avoid a step at 2000.
                delta += 0.37 * (year - 2100) as f64;
            }
            delta
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_jde_values_2000() {
        let cases = [
            (Season::Spring, 2_451_623.816_994_392_3),
            (Season::Summer, 2_451_716.575_548_049_5),
            (Season::Autumn, 2_451_810.228_405_633_5),
            (Season::Winter, 2_451_900.068_568_985),
        ];
        for (season, expected) in cases {
            let got = equinox_jde(2000, season).value();
            assert!((got - expected).abs() < 1e-6, "{season:?}: {got}");
        }
    }

    #[test]
    fn spring_2015_jde() {
        let got = equinox_jde(2015, Season::Spring).value();
        assert!((got - 2_457_102.448_850_454_3).abs() < 1e-6);
    }

    #[test]
    fn delta_t_table_lookup() {
        assert_eq!(delta_t_seconds(1620), 121.0);
        assert_eq!(delta_t_seconds(2000), 63.8);
        assert_eq!(delta_t_seconds(2002), 64.3);
        // Odd year interpolates.
        assert_eq!(delta_t_seconds(1999), (63.0 + 63.8) / 2.0);
    }

    #[test]
    fn delta_t_outside_the_table() {
        // 2003 uses the post-948 quadratic plus the 2000–2100 blend.
        let t: f64 = 0.03;
        let expected = 102.0 + 102.0 * t + 25.3 * t * t + 0.37 * (2003 - 2100) as f64;
        assert!((delta_t_seconds(2003) - expected).abs() < 1e-12);
        // Ancient years use the long quadratic.
        assert!(delta_t_seconds(0) > 3000.0);
    }

    #[test]
    fn universal_event_agrees_with_the_solar_series() {
        // Spring 2000 from the two independent models lands within a
        // minute.
        let here = equinox(2000, Season::Spring);
        assert!((here.value() - 730_199.315_916_611_7).abs() < 1.0 / 1440.0);
    }
}
