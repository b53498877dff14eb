// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Duration component, used to point at the offending part of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    /// `nY`
    Year,
    /// `nM` in the date part
    Month,
    /// `nW`
    Week,
    /// `nD`
    Day,
    /// `nH`
    Hour,
    /// `nM` in the time part
    Minute,
    /// `nS`
    Second,
}

/// Errors raised while parsing durations or applying them to points in time.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text is not an ISO-8601 duration this crate accepts.
    #[error("bad format string {input:?}: {reason}")]
    BadFormat {
        /// The rejected input.
        input: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The digits of a component could not be parsed.
    #[error("invalid {unit} value")]
    InvalidNumber {
        /// The component holding the digits.
        unit: Unit,
        /// Underlying number parser error.
        #[source]
        source: lexical::Error,
    },

    /// A component does not fit the field it is stored in.
    #[error("{unit} value out of range")]
    Overflow {
        /// The component that overflowed.
        unit: Unit,
    },

    /// Legal-calendar arithmetic is undefined for negative durations.
    #[error("unsupported negative duration")]
    UnsupportedNegative,

    /// Calendar arithmetic left the supported range of dates.
    #[error("date out of supported range")]
    DateOutOfRange,

    /// Error raised by the date-time library.
    #[cfg(feature = "jiff")]
    #[error(transparent)]
    DateTime(#[from] jiff::Error),
}

impl Error {
    pub(crate) fn bad_format(input: &str, reason: &'static str) -> Self {
        Self::BadFormat {
            input: input.to_owned(),
            reason,
        }
    }
}
