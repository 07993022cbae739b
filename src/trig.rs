// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry and small numeric helpers shared by the
//! ephemeris, solar, and lunar series.
//!
//! Astronomical coefficient tables are published in degrees, so the series
//! evaluate in degrees throughout and convert to radians only at the `sin`/
//! `cos` call.

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_degrees(theta: f64) -> f64 {
    theta.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_degrees(theta: f64) -> f64 {
    theta.to_radians().cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_degrees(theta: f64) -> f64 {
    theta.to_radians().tan()
}

/// Arcsine in degrees.
#[inline]
pub fn arcsin_degrees(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees.
#[inline]
pub fn arccos_degrees(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Quadrant-correct arctangent of `y/x`, in degrees normalised to [0, 360).
#[inline]
pub fn arctan_degrees(y: f64, x: f64) -> f64 {
    normalized_degrees(y.atan2(x).to_degrees())
}

/// Normalise an angle to [0, 360).
#[inline]
pub fn normalized_degrees(theta: f64) -> f64 {
    theta.rem_euclid(360.0)
}

/// Normalise an angle to [-180, 180).
#[inline]
pub fn normalized_degrees_signed(theta: f64) -> f64 {
    normalized_degrees(theta + 180.0) - 180.0
}

/// An angle from degrees, arcminutes, and arcseconds.
#[inline]
pub fn angle(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Evaluate a polynomial with coefficients `a[0] + a[1] x + a[2] x² + …`
/// by Horner's rule.
#[inline]
pub fn poly(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}

/// Adjusted remainder: `x mod y` with `y` standing in for 0. Requires `y > 0`.
#[inline]
pub fn amod(x: i64, y: i64) -> i64 {
    let r = x.rem_euclid(y);
    if r == 0 {
        y
    } else {
        r
    }
}

/// Floor division quotient as `i64`.
#[inline]
pub fn quotient(numerator: f64, denominator: f64) -> i64 {
    (numerator / denominator).floor() as i64
}
