// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-point decimal used for the fractional carry between units.
//!
//! Values are stored as an integer count of 10^-18 units, so multiplying a
//! fraction by 12, 24, 60 or 10^9 stays exact where `f64` would drift.

const FRACTION_DIGITS: usize = 18;
const SCALE: u128 = 1_000_000_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub(crate) struct Decimal(u128);

#[derive(Debug)]
pub(crate) enum DecimalError {
    Number(lexical::Error),
    Overflow,
}

fn number_error(e: lexical::Error) -> DecimalError {
    match e {
        lexical::Error::Overflow(_) => DecimalError::Overflow,
        e => DecimalError::Number(e),
    }
}

impl Decimal {
    pub(crate) const ZERO: Self = Self(0);

    /// Parses `digits` or `digits.digits`. Fraction digits past 10^-18 are dropped.
    pub(crate) fn parse(s: &str) -> Result<Self, DecimalError> {
        let (int, frac) = match s.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (s, None),
        };

        let whole = lexical::parse::<u128, _>(int).map_err(number_error)?;
        let mut raw = whole.checked_mul(SCALE).ok_or(DecimalError::Overflow)?;

        if let Some(frac) = frac {
            let digits = frac.get(..FRACTION_DIGITS).unwrap_or(frac);
            let n = lexical::parse::<u128, _>(digits).map_err(number_error)?;
            let pad = FRACTION_DIGITS.saturating_sub(digits.len());
            let factor = (0..pad).fold(1_u128, |f, _| f * 10);
            raw = raw.checked_add(n * factor).ok_or(DecimalError::Overflow)?;
        }

        Ok(Self(raw))
    }

    pub(crate) fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub(crate) fn checked_mul(self, factor: u32) -> Option<Self> {
        self.0.checked_mul(u128::from(factor)).map(Self)
    }

    /// Integer part.
    pub(crate) const fn trunc(self) -> u128 {
        self.0 / SCALE
    }

    /// Fractional part, always below one.
    pub(crate) const fn fract(self) -> Self {
        Self(self.0 % SCALE)
    }

    pub(crate) const fn is_integer(self) -> bool {
        self.0 % SCALE == 0
    }
}
