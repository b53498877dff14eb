// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::Error;
use crate::formatter::write_duration;
use crate::parser::parse;

/// Largest value a field may hold and still be considered valid.
///
/// Fields are unsigned, but the ceiling is the signed range so every field
/// converts losslessly into the signed arithmetic of date-time libraries.
pub const MAX_FIELD: u32 = i32::MAX.unsigned_abs();

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// ISO-8601 duration `PnYnMnWnDTnHnMnS`.
///
/// All fields are magnitudes; the sign is carried by [`Duration::negative`]
/// alone. Fractions in the textual form are carried down into smaller units
/// when parsing, so the struct only holds whole numbers plus nanoseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    /// Whether the duration points backwards in time.
    pub negative: bool,
    /// Years
    pub years: u32,
    /// Months
    pub months: u32,
    /// Weeks, never folded into days.
    pub weeks: u32,
    /// Days
    pub days: u32,
    /// Hours
    pub hours: u32,
    /// Minutes
    pub minutes: u32,
    /// Seconds
    pub seconds: u32,
    /// Sub-second part in nanoseconds.
    pub nanoseconds: u32,
}

impl Duration {
    /// The zero duration, `PT0S`.
    pub const ZERO: Self = Self {
        negative: false,
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        nanoseconds: 0,
    };

    /// Whether every magnitude is zero, regardless of the sign.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        !self.has_date_part() && !self.has_time_part()
    }

    /// Whether no field exceeds [`MAX_FIELD`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.years <= MAX_FIELD
            && self.months <= MAX_FIELD
            && self.weeks <= MAX_FIELD
            && self.days <= MAX_FIELD
            && self.hours <= MAX_FIELD
            && self.minutes <= MAX_FIELD
            && self.seconds <= MAX_FIELD
            && self.nanoseconds <= MAX_FIELD
    }

    /// Whether any of years, months, weeks or days is non-zero.
    #[must_use]
    pub const fn has_date_part(&self) -> bool {
        self.years > 0 || self.months > 0 || self.weeks > 0 || self.days > 0
    }

    /// Whether any of hours, minutes, seconds or nanoseconds is non-zero.
    #[must_use]
    pub const fn has_time_part(&self) -> bool {
        self.hours > 0 || self.minutes > 0 || self.seconds > 0 || self.nanoseconds > 0
    }

    /// The same magnitudes with the sign flipped.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self {
            negative: !self.negative,
            ..self
        }
    }

    /// The same magnitudes, positive.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self {
            negative: false,
            ..self
        }
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_duration(f, self)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
