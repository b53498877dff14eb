// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsing and formatting through the public API.

use isoperiod::{Duration, Error, parse};

#[test]
fn round_trips_canonical_strings() {
    let cases = [
        "P12Y10M",
        "PT12H34M56S",
        "P12Y10M3W",
        "-P12Y10M",
        "P1Y2M3W4DT5H6M7.8S",
        "P3W",
        "PT0.000000001S",
        "P1DT1S",
        "PT0S",
    ];
    for src in cases {
        let d = parse(src).unwrap();
        assert_eq!(d.to_string(), src, "round trip {src}");
    }
}

#[test]
fn reports_time_part() {
    #[rustfmt::skip]
    let cases = [
        ("P12Y10M",             false),
        ("P12Y10M3W",           false),
        ("-P12Y10M",            false),
        ("PT12H34M56S",         true),
        ("PT12.34H56.78M9.01S", true),
        ("P0.5D",               true),
        ("P0.5Y",               false),
    ];
    for (src, time_part) in cases {
        assert_eq!(parse(src).unwrap().has_time_part(), time_part, "{src}");
    }
}

#[test]
fn formats_after_fraction_cascade() {
    #[rustfmt::skip]
    let cases = [
        ("P0.5Y",               "P6M"),
        ("P0.5D",               "PT12H"),
        ("PT12.34H56.78M9.01S", "PT12H77M19.81S"),
        ("PT12,34H56,78M9,01S", "PT12H77M19.81S"),
        ("P1.5DT1H",            "P1DT13H"),
        ("PT1.000000000500S",   "PT1S"),
        ("-P0D",                "PT0S"),
        ("P0Y0M0W0DT0H0M0S",    "PT0S"),
        ("PT90M",               "PT90M"),
    ];
    for (src, expected) in cases {
        assert_eq!(parse(src).unwrap().to_string(), expected, "format of {src}");
    }
}

#[test]
fn parses_with_from_str() {
    let d: Duration = "-P1W".parse().unwrap();
    assert!(d.negative);
    assert_eq!(d.weeks, 1);
    assert!("P1Q".parse::<Duration>().is_err());
}

#[test]
fn rejects_month_fraction() {
    let err = parse("P0.5M").unwrap_err();
    match err {
        Error::BadFormat { input, reason } => {
            assert_eq!(input, "P0.5M");
            assert!(reason.contains("month"), "reason: {reason}");
        }
        other => panic!("expected BadFormat, got {other:?}"),
    }
}

#[test]
fn rejects_malformed_input() {
    let fail_cases = [
        "12Y10M",   // missing 'P' designator
        "P",        // no components
        "PT",       // 'T' without components
        "P1Y2Y",    // repeated component
        "P1D2M",    // wrong order
        "P1,5W",    // fractional weeks
        "PT1D",     // day in the time part
        "P1Y-2M",   // sign inside
        "P1Y ",     // trailing text
    ];
    for src in fail_cases {
        assert!(
            matches!(parse(src), Err(Error::BadFormat { .. })),
            "Parse {src:?} should fail"
        );
    }
}

#[test]
fn negates_through_parse() {
    let d = parse("P1DT2H").unwrap();
    assert_eq!((-d).to_string(), "-P1DT2H");
    assert_eq!(d.negate().abs(), d);
    assert_eq!(parse("-P1DT2H").unwrap(), -d);
}
