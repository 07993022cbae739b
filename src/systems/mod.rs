// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar systems.
//!
//! Every system converts between its own date representation and the
//! common day ordinal (R.D., Rata Die: days counted from Gregorian
//! December 31 of year 0). Arithmetic calendars convert in closed form;
//! astronomical ones locate equinoxes, new moons, or first crescent
//! visibility and so return `Result`.

pub mod armenian;
pub mod aztec;
pub mod bahai;
pub mod balinese;
pub mod chinese;
pub mod coptic;
pub mod egyptian;
pub mod ethiopic;
pub mod french;
pub mod gregorian;
pub mod hebrew;
pub mod islamic;
pub mod iso;
pub mod julian;
pub mod mayan;
pub mod persian;
pub mod tibetan;
