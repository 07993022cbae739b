// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic scale-parameterised instant.
//!
//! [`Time<S>`] is the core type of the moment model.  It stores a scalar
//! quantity in [`Days`] whose *meaning* is determined by the compile-time
//! marker `S: TimeScale`.  All arithmetic (addition/subtraction of
//! durations, difference between instants), UTC conversion, serialisation,
//! and display are implemented generically — no code duplication.
//!
//! Domain-specific methods that only make sense for a particular scale
//! (e.g. [`Time::<RD>::julian_centuries()`]) are placed in inherent `impl`
//! blocks gated on the concrete marker type.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for day-count scales.
///
/// A **scale** defines:
///
/// 1. A human-readable **label** (e.g. `"R.D."`, `"JD"`, `"MJD"`).
/// 2. A pair of conversion functions between the scale's native quantity
///    (in [`Days`]) and the **Rata Die moment** — the canonical internal
///    representation used throughout the crate.
///
/// For pure *epoch counters* (JD, MJD, Unix) the conversions are trivial
/// constant offsets that the compiler will inline and fold away.  The
/// dynamical scale applies the ΔT ephemeris correction.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to a Rata Die moment.
    fn to_rd(value: Days) -> Days;

    /// Convert a Rata Die moment back to this scale's native quantity.
    fn from_rd(rd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S> — the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on scale `S`.
///
/// Internally stores a single `Days` quantity whose interpretation depends on
/// `S: TimeScale`.  The struct is `Copy` and zero-cost: `PhantomData` is
/// zero-sized, so `Time<S>` is layout-identical to `Days` (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// The Rata Die moment corresponding to this instant.
    #[inline]
    pub fn rata_die(&self) -> Days {
        S::to_rd(self.quantity)
    }

    /// Build an instant from a Rata Die moment.
    #[inline]
    pub fn from_rata_die(rd: Days) -> Self {
        Self::from_days(S::from_rd(rd))
    }

    // ── cross-scale conversion (mirroring qtty's .to::<T>()) ─────────

    /// Convert this instant to another scale.
    ///
    /// The conversion routes through the canonical Rata Die intermediate:
    ///
    /// ```text
    /// self → R.D. → target
    /// ```
    ///
    /// For pure epoch-offset scales this compiles down to a single
    /// addition/subtraction.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_rata_die(S::to_rd(self.quantity))
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// The canonical moment axis is Universal Time, so this is a plain
    /// epoch shift.  Returns `None` if the value falls outside chrono's
    /// representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        use super::scales::UNIX_EPOCH_RD;
        let rd = S::to_rd(self.quantity);
        let seconds_since_epoch = (rd - UNIX_EPOCH_RD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        use super::scales::UNIX_EPOCH_RD;
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        let rd = UNIX_EPOCH_RD + (seconds_since_epoch + nanos).to::<Day>();
        Self::from_rata_die(rd)
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Clock time and day-fraction helpers
// ═══════════════════════════════════════════════════════════════════════════

/// The number of days in `hours` hours.
#[inline]
pub fn days_from_hours(hours: f64) -> Days {
    Days::new(hours / 24.0)
}

/// The number of days in `seconds` seconds.
#[inline]
pub fn days_from_seconds(seconds: f64) -> Days {
    Seconds::new(seconds).to::<Day>()
}

/// Civil clock time, hour:minute:second.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clock {
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl Clock {
    /// Fraction of a day since midnight.
    pub fn to_time(&self) -> Days {
        days_from_hours(self.hour as f64 + (self.minute as f64 + self.second / 60.0) / 60.0)
    }

    /// Clock time of the fractional part of a moment.
    pub fn from_moment<S: TimeScale>(tee: Time<S>) -> Self {
        let time = tee.value().rem_euclid(1.0);
        Clock {
            hour: (time * 24.0).floor() as u8,
            minute: ((time * 24.0 * 60.0) % 60.0).floor() as u8,
            second: (time * 24.0 * 60.0 * 60.0) % 60.0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{JD, MJD, RD};
    use super::*;

    #[test]
    fn moment_creation() {
        let m = Time::<RD>::new(730_120.5);
        assert_eq!(m.quantity(), Days::new(730_120.5));
    }

    #[test]
    fn utc_roundtrip() {
        let datetime = DateTime::from_timestamp(946_684_800, 0).unwrap(); // 2000-01-01T00:00Z
        let m = Time::<RD>::from_utc(datetime);
        assert!((m.quantity() - Days::new(730_120.0)).abs() < Days::new(1e-9));
        let back = m.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 1_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn jd_utc_matches_unix_epoch() {
        // Unix epoch = JD 2 440 587.5
        let datetime = DateTime::from_timestamp(0, 0).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        assert!((jd.quantity() - Days::new(2_440_587.5)).abs() < Days::new(1e-9));
    }

    #[test]
    fn add_sub_days() {
        let mut m = Time::<MJD>::new(59_000.0);
        assert_eq!((m + Days::new(1.5)).quantity(), Days::new(59_001.5));
        assert_eq!((m - Days::new(1.5)).quantity(), Days::new(58_998.5));
        m += Days::new(1.0);
        m -= Days::new(0.25);
        assert_eq!(m.quantity(), Days::new(59_000.75));
        let diff = m - Time::<MJD>::new(59_000.0);
        assert_eq!(diff, Days::new(0.75));
    }

    #[test]
    fn display_contains_label() {
        let m = Time::<RD>::new(1.0);
        assert!(format!("{m}").contains("R.D."));
    }

    #[test]
    fn into_days_roundtrip() {
        let m = Time::<RD>::new(710_347.25);
        let days: Days = m.into();
        assert_eq!(days, 710_347.25);
        assert_eq!(Time::<RD>::from(days), m);
    }

    #[test]
    fn clock_conversions() {
        let c = Clock {
            hour: 12,
            minute: 30,
            second: 0.0,
        };
        assert!((c.to_time() - Days::new(0.520_833_333_333_333_3)).abs() < Days::new(1e-15));

        let back = Clock::from_moment(Time::<RD>::new(5.0) + c.to_time());
        assert_eq!(back.hour, 12);
        assert_eq!(back.minute, 30);
        assert!(back.second.abs() < 1e-6);
    }

    #[test]
    fn day_fraction_helpers() {
        assert_eq!(days_from_hours(6.0), Days::new(0.25));
        assert!((days_from_seconds(86_400.0) - Days::new(1.0)).abs() < Days::new(1e-15));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let m = Time::<RD>::new(730_120.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "730120.5");
        let back: Time<RD> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
