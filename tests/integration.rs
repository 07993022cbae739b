// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Cross-system checks: one civil day read through every calendar, plus
//! the anchor dates the individual modules do not cover on their own.

use kalends::seasons;
use kalends::solar::Season;
use kalends::systems::{
    armenian, aztec, bahai, balinese, chinese, coptic, egyptian, ethiopic, french, gregorian,
    hebrew, islamic, iso, julian, mayan, persian, tibetan,
};
use kalends::weekday::weekday_from_ordinal;
use kalends::{CalendarError, DayOfWeek};

/// Gregorian 2015-06-18.
const SAMPLE: i64 = 735_767;

#[test]
fn one_day_through_every_system() {
    assert_eq!(
        gregorian::GregorianDate::from_ordinal(SAMPLE),
        gregorian::GregorianDate::new(2015, 6, 18).unwrap()
    );
    assert_eq!(
        julian::JulianDate::from_ordinal(SAMPLE),
        julian::JulianDate::new(2015, 6, 5).unwrap()
    );
    assert_eq!(
        iso::IsoDate::from_ordinal(SAMPLE),
        iso::IsoDate::new(2015, 25, 4).unwrap()
    );
    assert_eq!(
        egyptian::EgyptianDate::from_ordinal(SAMPLE),
        egyptian::EgyptianDate::new(2764, 2, 30).unwrap()
    );
    assert_eq!(
        armenian::ArmenianDate::from_ordinal(SAMPLE),
        armenian::ArmenianDate::new(1464, 11, 30).unwrap()
    );
    assert_eq!(
        coptic::CopticDate::from_ordinal(SAMPLE),
        coptic::CopticDate::new(1731, 10, 11).unwrap()
    );
    assert_eq!(
        ethiopic::EthiopicDate::from_ordinal(SAMPLE),
        ethiopic::EthiopicDate::new(2007, 10, 11).unwrap()
    );
    assert_eq!(
        islamic::IslamicDate::from_ordinal(SAMPLE),
        islamic::IslamicDate::new(1436, 9, 1).unwrap()
    );
    assert_eq!(
        hebrew::HebrewDate::from_ordinal(SAMPLE),
        hebrew::HebrewDate::new(5775, 4, 1).unwrap()
    );
    assert_eq!(
        persian::PersianDate::from_ordinal(SAMPLE).unwrap(),
        persian::PersianDate::new(1394, 3, 28).unwrap()
    );
    assert_eq!(
        french::FrenchDate::from_ordinal_arithmetic(SAMPLE),
        french::FrenchDate::new(223, 9, 30).unwrap()
    );
    assert_eq!(
        chinese::ChineseDate::from_ordinal(SAMPLE).unwrap(),
        chinese::ChineseDate::new(78, 32, 5, false, 3).unwrap()
    );
    assert_eq!(
        tibetan::TibetanDate::from_ordinal(SAMPLE).unwrap(),
        tibetan::TibetanDate::new(2142, 5, false, 2, false)
    );
    assert_eq!(
        mayan::MayanLongCount::from_ordinal(SAMPLE),
        mayan::MayanLongCount::new(13, 0, 2, 9, 9)
    );
    assert_eq!(
        aztec::AztecXihuitl::from_ordinal(SAMPLE),
        aztec::AztecXihuitl::new(13, 16).unwrap()
    );
    assert_eq!(balinese::cycle_day(SAMPLE), 46);
}

#[test]
fn weekday_anchors() {
    // The two extremes of the classical sample data are both Sundays.
    assert_eq!(weekday_from_ordinal(-214_193), DayOfWeek::Sunday);
    assert_eq!(weekday_from_ordinal(764_652), DayOfWeek::Sunday);
    assert_eq!(weekday_from_ordinal(SAMPLE), DayOfWeek::Thursday);
}

#[test]
fn gregorian_fixed_point_and_leap_vector() {
    let date = gregorian::GregorianDate::new(2017, 12, 19).unwrap();
    assert_eq!(date.to_ordinal(), 736_682);
    assert_eq!(gregorian::GregorianDate::from_ordinal(736_682), date);

    assert!(!gregorian::is_leap_year(1900));
    assert!(gregorian::is_leap_year(2000));
    assert!(gregorian::is_leap_year(2016));
}

#[test]
fn chinese_new_year_sequence() {
    assert_eq!(chinese::new_year(2015).unwrap(), 735_648); // 2015-02-19
    assert_eq!(chinese::new_year(2016).unwrap(), 736_002); // 2016-02-08
    assert_eq!(chinese::new_year(2017).unwrap(), 736_357); // 2017-01-28
    assert_eq!(chinese::new_year(2018).unwrap(), 736_741); // 2018-02-16
}

#[test]
fn new_year_festivals_of_2015() {
    // Naw-Ruz and the Bahai new year both fall on the March equinox day.
    assert_eq!(persian::naw_ruz(2015).unwrap(), 735_678);
    assert_eq!(bahai::new_year(2015), 735_678);
    assert_eq!(
        gregorian::GregorianDate::from_ordinal(735_678),
        gregorian::GregorianDate::new(2015, 3, 21).unwrap()
    );
    assert_eq!(hebrew::passover(2015), 735_692); // 2015-04-04
    assert_eq!(tibetan::new_year(2015).unwrap(), vec![735_648]);
}

#[test]
fn eighteen_brumaire() {
    let coup = french::FrenchDate::new(8, 2, 18).unwrap();
    assert_eq!(
        gregorian::GregorianDate::from_ordinal(coup.to_ordinal().unwrap()),
        gregorian::GregorianDate::new(1799, 11, 9).unwrap()
    );
}

#[test]
fn spring_equinox_2000() {
    let jde = seasons::equinox_jde(2000, Season::Spring);
    assert!((jde.value() - 2_451_623.817).abs() < 0.005, "jde = {}", jde.value());
}

#[test]
fn arithmetic_systems_roundtrip_together() {
    for ordinal in (SAMPLE - 400..SAMPLE + 400).step_by(17) {
        assert_eq!(
            gregorian::GregorianDate::from_ordinal(ordinal).to_ordinal(),
            ordinal
        );
        assert_eq!(julian::JulianDate::from_ordinal(ordinal).to_ordinal(), ordinal);
        assert_eq!(iso::IsoDate::from_ordinal(ordinal).to_ordinal(), ordinal);
        assert_eq!(coptic::CopticDate::from_ordinal(ordinal).to_ordinal(), ordinal);
        assert_eq!(
            islamic::IslamicDate::from_ordinal(ordinal).to_ordinal(),
            ordinal
        );
        assert_eq!(hebrew::HebrewDate::from_ordinal(ordinal).to_ordinal(), ordinal);
        assert_eq!(
            mayan::MayanLongCount::from_ordinal(ordinal).to_ordinal(),
            ordinal
        );
    }
}

#[test]
fn errors_name_the_offending_system() {
    let err = gregorian::GregorianDate::new(2015, 2, 29).unwrap_err();
    assert!(matches!(
        err,
        CalendarError::InvalidDate { system: "gregorian", .. }
    ));

    let err = mayan::calendar_round_on_or_before(
        mayan::MayanHaab::new(18, 8).unwrap(),
        mayan::MayanTzolkin::new(4, 2).unwrap(),
        SAMPLE,
    )
    .unwrap_err();
    assert_eq!(err, CalendarError::ImpossibleCycleCombination);
}

#[cfg(feature = "serde")]
#[test]
fn serde_dates_use_field_names() {
    let date = gregorian::GregorianDate::new(2015, 6, 18).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, r#"{"year":2015,"month":6,"day":18}"#);
    let back: gregorian::GregorianDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
}
