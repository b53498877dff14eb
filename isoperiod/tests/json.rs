// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Durations embedded in JSON documents.

#![cfg(feature = "serde")]

use isoperiod::{Duration, parse};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Contract {
    name: String,
    term: Duration,
}

#[test]
fn serializes_as_string() {
    let d = parse("P1Y2M").unwrap();
    assert_eq!(serde_json::to_string(&d).unwrap(), r#""P1Y2M""#);
    assert_eq!(serde_json::to_string(&Duration::ZERO).unwrap(), r#""PT0S""#);
    assert_eq!(
        serde_json::to_string(&parse("-PT1.5S").unwrap()).unwrap(),
        r#""-PT1.5S""#
    );
}

#[test]
fn deserializes_from_string() {
    let d: Duration = serde_json::from_str(r#""PT12,34H56,78M9,01S""#).unwrap();
    assert_eq!(d.to_string(), "PT12H77M19.81S");

    let contract: Contract =
        serde_json::from_str(r#"{"name":"lease","term":"P2Y6M"}"#).unwrap();
    assert_eq!(contract.term, parse("P2Y6M").unwrap());

    let json = serde_json::to_string(&contract).unwrap();
    assert_eq!(json, r#"{"name":"lease","term":"P2Y6M"}"#);
}

#[test]
fn rejects_invalid_json() {
    let fail_cases = [
        r#""P0.5M""#,          // fractional month
        r#""P""#,              // no components
        r#"{"years":1}"#,      // not a string
        "12",                  // not a string
        "null",                // not a string
    ];
    for src in fail_cases {
        assert!(
            serde_json::from_str::<Duration>(src).is_err(),
            "Deserialize {src} should fail"
        );
    }

    let err = serde_json::from_str::<Duration>(r#""P0.5M""#).unwrap_err();
    assert!(err.to_string().contains("bad format string"), "{err}");
}
