// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendrical calculations.
//!
//! Conversions between day ordinals, typed moment scales, and a wide
//! range of calendar systems, with the astronomical machinery (solar
//! longitude, lunar phase, local sunrise and sunset) the lunisolar and
//! observational calendars need.
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`Moment`] — type alias for `Time<RD>`, the crate's canonical axis.
//! - [`CalendarError`] — every fallible operation's error type.
//! - [`DayOfWeek`] — ISO day of week with ordinal search helpers.
//! - [`Location`] — observer site for sunrise, sunset, and twilight.
//!
//! # Time scales
//!
//! The following markers implement [`TimeScale`]:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`RD`] | Rata Die (days from Gregorian December 31 of year 0, UT) |
//! | [`JD`] | Julian Date |
//! | [`MJD`] | Modified Julian Date |
//! | [`Unix`] | Unix / POSIX time, in days |
//! | [`TD`] | Dynamical (terrestrial) time |
//!
//! The dynamical offset **ΔT = TD − UT** is applied by the [`TD`] scale
//! through the piecewise fit in [`ephemeris`].
//!
//! # Calendar systems
//!
//! Each system lives in its own module under [`systems`] and converts
//! against the R.D. ordinal: [`systems::gregorian`], [`systems::julian`],
//! [`systems::iso`], [`systems::egyptian`], [`systems::armenian`],
//! [`systems::coptic`], [`systems::ethiopic`], [`systems::islamic`],
//! [`systems::hebrew`], [`systems::persian`], [`systems::french`],
//! [`systems::bahai`], [`systems::chinese`], [`systems::tibetan`],
//! [`systems::mayan`], [`systems::aztec`], and [`systems::balinese`].

pub mod daterules;
pub mod ephemeris;
mod error;
pub mod holidays;
pub(crate) mod instant;
pub mod location;
pub mod lunar;
mod moment_ext;
pub(crate) mod scales;
pub mod search;
pub mod seasons;
pub mod solar;
pub mod systems;
pub mod trig;
pub mod visibility;
pub mod weekday;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::CalendarError;
pub use instant::{days_from_hours, days_from_seconds, Clock, Time, TimeScale};
pub use location::Location;
pub use moment_ext::Moment;
pub use scales::{JD, MJD, RD, TD, Unix};
pub use weekday::DayOfWeek;

/// Julian day — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`]; the Julian *calendar* lives in
/// [`systems::julian`].
pub type JulianDay = Time<JD>;

/// Modified Julian day — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDay = Time<MJD>;
