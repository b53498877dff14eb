// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recognizer for the ISO-8601 duration notation.
//!
//! ```txt
//! duration = ["-"] "P" [dur-date] ["T" dur-time]
//! dur-date = [number "Y"] [number "M"] [1*DIGIT "W"] [number "D"]
//! dur-time = [number "H"] [number "M"] [number "S"]
//! number   = 1*DIGIT [("." / ",") 1*DIGIT]
//! ```
//!
//! At least one component must be present, and a `T` must be followed by
//! at least one time component.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

// case-sensitive, ASCII digits only
const RE: &str = concat!(
    r"^(?<negative>-)?P",
    r"(?:(?<year>[0-9]+(?:[.,][0-9]+)?)Y)?",
    r"(?:(?<month>[0-9]+(?:[.,][0-9]+)?)M)?",
    r"(?:(?<week>[0-9]+)W)?",
    r"(?:(?<day>[0-9]+(?:[.,][0-9]+)?)D)?",
    r"(?<time>T",
    r"(?:(?<hour>[0-9]+(?:[.,][0-9]+)?)H)?",
    r"(?:(?<minute>[0-9]+(?:[.,][0-9]+)?)M)?",
    r"(?:(?<second>[0-9]+(?:[.,][0-9]+)?)S)?",
    r")?$",
);

static REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(RE).unwrap()); // SAFETY: constant pattern

/// Raw component text captured from a duration string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields<'a> {
    pub negative: bool,
    pub year: Option<&'a str>,
    pub month: Option<&'a str>,
    pub week: Option<&'a str>,
    pub day: Option<&'a str>,
    pub hour: Option<&'a str>,
    pub minute: Option<&'a str>,
    pub second: Option<&'a str>,
}

impl Fields<'_> {
    fn has_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.week.is_some() || self.day.is_some()
    }

    fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }
}

/// Matches `s` against the duration grammar and extracts its components.
pub(crate) fn match_fields(s: &str) -> Result<Fields<'_>, Error> {
    let Some(caps) = REGEX.captures(s) else {
        return Err(Error::bad_format(s, "not an ISO-8601 duration"));
    };

    let group = |name| caps.name(name).map(|m| m.as_str());
    let fields = Fields {
        negative: caps.name("negative").is_some(),
        year: group("year"),
        month: group("month"),
        week: group("week"),
        day: group("day"),
        hour: group("hour"),
        minute: group("minute"),
        second: group("second"),
    };

    if caps.name("time").is_some() && !fields.has_time() {
        return Err(Error::bad_format(s, "time designator without components"));
    }
    if !fields.has_date() && !fields.has_time() {
        return Err(Error::bad_format(s, "no duration components"));
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_components() {
        let f = match_fields("-P1Y2,5M3W4.5DT5H6M7.8S").unwrap();
        assert_eq!(
            f,
            Fields {
                negative: true,
                year: Some("1"),
                month: Some("2,5"),
                week: Some("3"),
                day: Some("4.5"),
                hour: Some("5"),
                minute: Some("6"),
                second: Some("7.8"),
            }
        );

        let f = match_fields("PT15M").unwrap();
        assert_eq!(f.minute, Some("15"));
        assert_eq!(f.month, None);
        assert!(!f.negative);
    }

    #[test]
    fn rejects_malformed() {
        let fail_cases = [
            "",          // empty string
            "P",         // missing duration value
            "-P",        // missing duration value
            "PT",        // missing time value
            "P1YT",      // missing time value
            "12Y10M",    // missing 'P' designator
            "P1M1Y",     // wrong order
            "PT1S1M",    // wrong order
            "P3X",       // invalid designator
            "P1.5W",     // fractional weeks
            "p1y",       // lower case
            "+P1D",      // explicit plus
            "P-1D",      // sign inside
            " P1D",      // leading text
            "P1D ",      // trailing text
            "P1H",       // hour without 'T'
            "P.5D",      // missing integer digits
            "P1.D",      // missing fraction digits
            "P١D",       // non-ASCII digit
        ];
        for src in fail_cases {
            assert!(
                matches!(match_fields(src), Err(Error::BadFormat { .. })),
                "Match {src:?} should fail"
            );
        }
    }
}
