// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ephemeris quantities shared by the solar and lunar position series.
//!
//! The ΔT model and the auxiliary angles (obliquity, nutation, aberration,
//! precession, the equation of time, sidereal time) follow Meeus,
//! *Astronomical Algorithms* (1991).  Angles are plain `f64` degrees; day
//! and second quantities carry their `qtty` unit.

use super::instant::days_from_hours;
use super::moment_ext::Moment;
use super::systems::gregorian::{self, GregorianDate};
use super::trig::{
    angle, arcsin_degrees, arctan_degrees, cos_degrees, normalized_degrees, poly, sin_degrees,
    tan_degrees,
};
use qtty::{Days, Second, Seconds};

// ---------------------------------------------------------------------------
// ΔT — dynamical minus universal time
// ---------------------------------------------------------------------------

/// ΔT (dynamical time minus Universal Time) at moment `tee`.
///
/// Piecewise model indexed by the Gregorian year containing `tee`.  The
/// historical pieces are polynomial fits; years outside 1620–2019 fall to a
/// long-range parabola, so every year resolves to some branch.
pub fn ephemeris_correction(tee: Moment) -> Seconds {
    let year = gregorian::year_from_ordinal(tee.ordinal());
    let c = (GregorianDate::ymd(year, 7, 1).to_ordinal()
        - GregorianDate::ymd(1900, 1, 1).to_ordinal()) as f64
        / 36_525.0;

    let days = match year {
        1988..=2019 => (year as f64 - 1933.0) / 86_400.0,
        1900..=1987 => poly(
            c,
            &[
                -0.000_02, 0.000_297, 0.025_184, -0.181_133, 0.553_040, -0.861_938, 0.677_066,
                -0.212_591,
            ],
        ),
        1800..=1899 => poly(
            c,
            &[
                -0.000_009, 0.003_844, 0.083_563, 0.865_736, 4.867_575, 15.845_535, 31.332_267,
                38.291_999, 28.316_289, 11.636_204, 2.043_794,
            ],
        ),
        1700..=1799 => {
            poly(
                (year - 1700) as f64,
                &[8.118_780_842, -0.005_092_142, 0.003_336_121, -0.000_026_648_4],
            ) / 86_400.0
        }
        1620..=1699 => {
            poly((year - 1600) as f64, &[196.583_33, -4.0675, 0.021_916_7]) / 86_400.0
        }
        _ => {
            let x = 0.5
                + (GregorianDate::ymd(year, 1, 1).to_ordinal()
                    - GregorianDate::ymd(1810, 1, 1).to_ordinal()) as f64;
            (x * x / 41_048_480.0 - 15.0) / 86_400.0
        }
    };
    Days::new(days).to::<Second>()
}

// ---------------------------------------------------------------------------
// Auxiliary angles
// ---------------------------------------------------------------------------

/// Mean obliquity of the ecliptic at `tee`, in degrees.
pub fn obliquity(tee: Moment) -> f64 {
    let c = tee.julian_centuries();
    angle(23.0, 26.0, 21.448)
        + poly(
            c,
            &[
                0.0,
                angle(0.0, 0.0, -46.8150),
                angle(0.0, 0.0, -0.00059),
                angle(0.0, 0.0, 0.001813),
            ],
        )
}

/// Mean obliquity from the high-order Laskar series, valid for roughly
/// ±10 000 years around J2000.
pub fn precise_obliquity(tee: Moment) -> f64 {
    let u = tee.julian_centuries() / 100.0;
    poly(
        u,
        &[
            angle(23.0, 26.0, 21.448),
            angle(0.0, 0.0, -4680.93),
            angle(0.0, 0.0, -1.55),
            angle(0.0, 0.0, 1999.25),
            angle(0.0, 0.0, -51.38),
            angle(0.0, 0.0, -249.67),
            angle(0.0, 0.0, -39.05),
            angle(0.0, 0.0, 7.12),
            angle(0.0, 0.0, 27.87),
            angle(0.0, 0.0, 5.79),
            angle(0.0, 0.0, 2.45),
        ],
    )
}

/// Longitudinal nutation at `tee`, in degrees.
pub fn nutation(tee: Moment) -> f64 {
    let c = tee.julian_centuries();
    let a = poly(c, &[124.90, -1934.134, 0.002063]);
    let b = poly(c, &[201.11, 72_001.5377, 0.00057]);
    -0.004778 * sin_degrees(a) - 0.000_366_7 * sin_degrees(b)
}

/// Aberration of the sun at `tee`, in degrees.
pub fn aberration(tee: Moment) -> f64 {
    let c = tee.julian_centuries();
    0.000_097_4 * cos_degrees(177.63 + 35_999.018_48 * c) - 0.005_575
}

/// General precession in longitude since J2000, in degrees.
pub fn precession(tee: Moment) -> f64 {
    let c = tee.julian_centuries();
    let eta = normalized_degrees(poly(
        c,
        &[0.0, 47.0029 / 3600.0, -0.03302 / 3600.0, 0.000_060 / 3600.0],
    ));
    let cap_p = normalized_degrees(poly(
        c,
        &[174.876_384, -869.8089 / 3600.0, 0.03536 / 3600.0],
    ));
    let p = normalized_degrees(poly(
        c,
        &[0.0, 5029.0966 / 3600.0, 1.11113 / 3600.0, 0.000_006 / 3600.0],
    ));
    let cap_a = cos_degrees(eta) * sin_degrees(cap_p);
    let cap_b = cos_degrees(cap_p);
    let arg = arctan_degrees(cap_a, cap_b);
    normalized_degrees(p + cap_p - arg)
}

/// Equation of time at `tee`: apparent minus mean solar time, as a day
/// fraction, capped at ±12 hours.
pub fn equation_of_time(tee: Moment) -> Days {
    let c = tee.julian_centuries();
    let lambda = poly(c, &[280.46645, 36_000.76983, 0.000_303_2]);
    let anomaly = poly(c, &[357.52910, 35_999.05030, -0.000_155_9, -0.000_000_48]);
    let eccentricity = poly(c, &[0.016_708_617, -0.000_042_037, -0.000_000_123_6]);
    let varepsilon = obliquity(tee);
    let y = tan_degrees(varepsilon / 2.0).powi(2);
    let equation = (1.0 / (2.0 * std::f64::consts::PI))
        * (y * sin_degrees(2.0 * lambda) - 2.0 * eccentricity * sin_degrees(anomaly)
            + 4.0 * eccentricity * y * sin_degrees(anomaly) * cos_degrees(2.0 * lambda)
            - 0.5 * y * y * sin_degrees(4.0 * lambda)
            - 1.25 * eccentricity * eccentricity * sin_degrees(2.0 * anomaly));
    let cap = days_from_hours(12.0).value();
    Days::new(equation.signum() * equation.abs().min(cap))
}

/// Mean sidereal time at `tee` as a hour angle in degrees.
///
/// Unlike the series above this runs on the Universal axis directly, with
/// no dynamical shift.
pub fn sidereal_from_moment(tee: Moment) -> f64 {
    let c = (tee.value() - Moment::J2000.value()) / 36_525.0;
    normalized_degrees(poly(
        c,
        &[
            280.460_618_37,
            36_525.0 * 360.985_647_366_29,
            0.000_387_933,
            -1.0 / 38_710_000.0,
        ],
    ))
}

/// Declination at UT moment `tee` of a body at ecliptic latitude `beta`
/// and longitude `lambda`, in degrees.
pub fn declination(tee: Moment, beta: f64, lambda: f64) -> f64 {
    let varepsilon = obliquity(tee);
    arcsin_degrees(
        sin_degrees(beta) * cos_degrees(varepsilon)
            + cos_degrees(beta) * sin_degrees(varepsilon) * sin_degrees(lambda),
    )
}

/// Right ascension at UT moment `tee` of a body at ecliptic latitude
/// `beta` and longitude `lambda`, in degrees.
pub fn right_ascension(tee: Moment, beta: f64, lambda: f64) -> f64 {
    let varepsilon = obliquity(tee);
    arctan_degrees(
        sin_degrees(lambda) * cos_degrees(varepsilon)
            - tan_degrees(beta) * sin_degrees(varepsilon),
        cos_degrees(lambda),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction_secs(year: i32) -> f64 {
        let tee = Moment::from_ordinal(GregorianDate::ymd(year, 7, 1).to_ordinal());
        ephemeris_correction(tee).value()
    }

    #[test]
    fn delta_t_piecewise_values() {
        let cases = [
            (1500, 297.308_455_763_770_04),
            (1620, 124.000_01),
            (1700, 8.118_780_842),
            (1800, 13.623_308_745_551_757),
            (1900, -1.549_279_848_668_263_7),
            (1987, 55.560_112_699_040_01),
            (1988, 55.000_000_000_000_01),
            (2000, 67.0),
            (2019, 86.0),
            (2020, 128.321_265_543_815_5),
        ];
        for (year, expected) in cases {
            let got = correction_secs(year);
            assert!(
                (got - expected).abs() < 1e-6,
                "ΔT({year}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn delta_t_continuity_at_piece_boundaries() {
        for boundary in [1700, 1800, 1900, 1988] {
            let before = correction_secs(boundary - 1);
            let after = correction_secs(boundary);
            assert!(
                (after - before).abs() < 2.0,
                "ΔT jump of {} s at {boundary}",
                after - before
            );
        }
    }

    // Reference values computed from the Meeus series at four scattered
    // moments (R.D. 0, a 1945 date, J2000, and a 2094 date).
    const MOMENTS: [f64; 4] = [0.0, 710_347.25, 730_120.5, 764_652.75];

    #[test]
    fn obliquity_values() {
        let expected = [
            23.695_151_187_027_797,
            23.446_330_945_792_32,
            23.439_291_110_835_02,
            23.426_996_710_637_653,
        ];
        for (t, e) in MOMENTS.iter().zip(expected) {
            let got = obliquity(Moment::new(*t));
            assert!((got - e).abs() < 1e-9, "obliquity({t}) = {got}");
        }
    }

    #[test]
    fn precise_obliquity_tracks_the_short_series() {
        let expected = [
            23.694_753_224_829_526,
            23.446_330_115_828_367,
            23.439_291_110_835_054,
            23.426_998_359_197_338,
        ];
        for (t, e) in MOMENTS.iter().zip(expected) {
            let got = precise_obliquity(Moment::new(*t));
            assert!((got - e).abs() < 1e-9, "precise_obliquity({t}) = {got}");
            assert!((got - obliquity(Moment::new(*t))).abs() < 0.001);
        }
    }

    #[test]
    fn nutation_values() {
        let expected = [
            0.004_894_879_986_299_412,
            -0.005_133_590_383_113_882,
            -0.003_786_607_957_441_159_3,
            -0.004_451_224_534_943_592,
        ];
        for (t, e) in MOMENTS.iter().zip(expected) {
            let got = nutation(Moment::new(*t));
            assert!((got - e).abs() < 1e-12, "nutation({t}) = {got}");
        }
    }

    #[test]
    fn aberration_values() {
        let expected = [
            -0.005_658_121_089_904_534,
            -0.005_636_463_114_530_376,
            -0.005_672_316_739_627_474,
            -0.005_479_944_992_921_974,
        ];
        for (t, e) in MOMENTS.iter().zip(expected) {
            let got = aberration(Moment::new(*t));
            assert!((got - e).abs() < 1e-12, "aberration({t}) = {got}");
        }
    }

    #[test]
    fn precession_values() {
        let expected = [
            332.198_408_079_699_3,
            359.243_823_152_202_3,
            0.0,
            1.321_030_465_005_378_6,
        ];
        for (t, e) in MOMENTS.iter().zip(expected) {
            let got = precession(Moment::new(*t));
            let diff = (got - e + 180.0).rem_euclid(360.0) - 180.0;
            assert!(diff.abs() < 1e-7, "precession({t}) = {got}");
        }
    }

    #[test]
    fn equation_of_time_values() {
        let expected = [
            -0.005_470_026_367_888_511_5,
            0.011_030_178_098_303_249,
            -0.002_293_131_144_265_998_4,
            -0.004_502_027_193_872_5,
        ];
        for (t, e) in MOMENTS.iter().zip(expected) {
            let got = equation_of_time(Moment::new(*t)).value();
            assert!((got - e).abs() < 1e-12, "eot({t}) = {got}");
        }
    }

    #[test]
    fn sidereal_values() {
        // c = 0 at J2000, so the constant term comes back unchanged.
        assert!((sidereal_from_moment(Moment::J2000) - 280.460_618_37).abs() < 1e-9);
        let expected = [
            99.267_937_391_996_38,
            141.008_946_574_293_08,
            207.082_229_673_862_46,
        ];
        for (t, e) in [0.0, 710_347.25, 764_652.75].iter().zip(expected) {
            let got = sidereal_from_moment(Moment::new(*t));
            assert!((got - e).abs() < 1e-6, "sidereal({t}) = {got}");
        }
    }

    #[test]
    fn equatorial_coordinates_on_the_ecliptic() {
        let tee = Moment::J2000;
        // A body on the ecliptic at the equinox point has zero declination.
        assert!(declination(tee, 0.0, 0.0).abs() < 1e-12);
        // At λ = 90° the right ascension is exactly 90°.
        assert!((right_ascension(tee, 0.0, 90.0) - 90.0).abs() < 1e-9);
        // And the declination equals the obliquity.
        assert!((declination(tee, 0.0, 90.0) - obliquity(tee)).abs() < 1e-9);
    }
}
