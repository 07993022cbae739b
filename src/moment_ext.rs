// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Moment-specific extensions.
//!
//! [`Moment`] is the canonical instant of the crate: a [`Time`] on the
//! [`RD`] scale, i.e. a possibly fractional day count on the Universal
//! Time axis whose day 1 is Gregorian 0001-01-01.  Calendar systems deal
//! in whole day numbers ([`Moment::ordinal`]); astronomical code deals in
//! the full fractional moment.

use super::instant::Time;
use super::scales::{RD, TD};
use qtty::Days;

/// A moment on the canonical Rata Die / Universal Time axis.
pub type Moment = Time<RD>;

impl Moment {
    /// Noon on 2000-01-01 (Gregorian), the epoch of the astronomical series.
    pub const J2000: Moment = Moment::new(730_120.5);

    /// The day number containing this moment (floor of the day count).
    #[inline]
    pub fn ordinal(&self) -> i64 {
        self.value().floor() as i64
    }

    /// The fraction of a day elapsed since the preceding midnight.
    #[inline]
    pub fn time_of_day(&self) -> Days {
        Days::new(self.value().rem_euclid(1.0))
    }

    /// The moment of midnight opening day `ordinal`.
    #[inline]
    pub fn from_ordinal(ordinal: i64) -> Moment {
        Moment::new(ordinal as f64)
    }

    /// Julian centuries of **dynamical** time elapsed since J2000.
    ///
    /// This is the abscissa of every trigonometric series in the crate:
    /// the moment is shifted onto the uniform dynamical axis (adding ΔT)
    /// before measuring from the epoch.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        (self.to::<TD>().value() - Self::J2000.value()) / 36_525.0
    }
}
