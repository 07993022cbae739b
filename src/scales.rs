// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day-count scale and encodes how values
//! in that scale relate to the canonical **Rata Die moment** — the real day
//! count on the Universal Time axis whose day 1 is Gregorian 0001-01-01.
//!
//! # Epoch counters
//!
//! | Marker | Description | Epoch (R.D.) |
//! |--------|-------------|--------------|
//! | [`RD`] | Rata Die moment | 0.0 |
//! | [`JD`] | Julian date | −1 721 424.5 |
//! | [`MJD`] | Modified Julian date | 678 576 |
//! | [`Unix`] | Days since 1970-01-01T00:00Z | 719 163 |
//!
//! # Dynamical time
//!
//! [`TD`] lives on the uniform dynamical (ephemeris) axis.  Converting to
//! the canonical moment subtracts the epoch-dependent ephemeris correction
//! ΔT, and the inverse adds it back.

use super::ephemeris;
use super::instant::{Time, TimeScale};
use qtty::{Day, Days};

// ---------------------------------------------------------------------------
// Epoch counters
// ---------------------------------------------------------------------------

/// Rata Die — the identity scale.
///
/// `to_rd(v) = v`, i.e. the quantity *is* the moment.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct RD;

impl TimeScale for RD {
    const LABEL: &'static str = "R.D.";

    #[inline(always)]
    fn to_rd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_rd(rd: Days) -> Days {
        rd
    }
}

/// Julian date — continuous day count from noon, 1 January 4713 BCE (Julian).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

/// R.D. moment of JD 0: `rd = jd + JD_EPOCH`.
const JD_EPOCH: Days = Days::new(-1_721_424.5);

impl TimeScale for JD {
    const LABEL: &'static str = "JD";

    #[inline(always)]
    fn to_rd(value: Days) -> Days {
        value + JD_EPOCH
    }

    #[inline(always)]
    fn from_rd(rd: Days) -> Days {
        rd - JD_EPOCH
    }
}

/// Modified Julian date — JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// R.D. moment of MJD 0 (1858-11-17).
const MJD_EPOCH: Days = Days::new(678_576.0);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_rd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_rd(rd: Days) -> Days {
        rd - MJD_EPOCH
    }
}

/// Unix time — seconds since 1970-01-01T00:00Z, stored as **days**.
///
/// POSIX time ignores leap seconds, so this is a plain epoch offset on the
/// civil (UT) axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Unix;

/// R.D. moment of the Unix epoch (1970-01-01T00:00Z).
pub(crate) const UNIX_EPOCH_RD: Days = Days::new(719_163.0);

impl TimeScale for Unix {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_rd(value: Days) -> Days {
        value + UNIX_EPOCH_RD
    }

    #[inline(always)]
    fn from_rd(rd: Days) -> Days {
        rd - UNIX_EPOCH_RD
    }
}

// ---------------------------------------------------------------------------
// Dynamical time
// ---------------------------------------------------------------------------

/// Dynamical (ephemeris) time — the uniform axis of the solar and lunar
/// position series.
///
/// Unlike the epoch counters, `TD` differs from the canonical moment by the
/// slowly varying **ΔT** correction of [`ephemeris::ephemeris_correction`]:
/// `rd = td − ΔT(td)` and `td = rd + ΔT(rd)`.  The correction changes by at
/// most seconds per year, so evaluating it at either endpoint of the
/// conversion is exact to well below the model's own uncertainty.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TD;

impl TimeScale for TD {
    const LABEL: &'static str = "TD";

    #[inline]
    fn to_rd(value: Days) -> Days {
        let correction = ephemeris::ephemeris_correction(Time::<RD>::from_days(value));
        value - correction.to::<Day>()
    }

    #[inline]
    fn from_rd(rd: Days) -> Days {
        let correction = ephemeris::ephemeris_correction(Time::<RD>::from_days(rd));
        rd + correction.to::<Day>()
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into and .to::<T>()  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    // Base case: single scale, nothing left.
    ($single:ty) => {};

    // Recursive: generate pairs between $first and every $rest, then recurse.
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(RD, JD, MJD, Unix, TD);
