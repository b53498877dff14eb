// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Carrying overflow between units.
//!
//! Both operations report overflow through a `bool` next to the value
//! instead of an error: on failure the value is the untouched input, so
//! the caller can see what did not fit.

use crate::duration::{Duration, MAX_FIELD, NANOS_PER_SECOND};

impl Duration {
    /// Carries overflow upwards so that `months < 12`, `hours < 24`,
    /// `minutes < 60`, `seconds < 60` and `nanoseconds < 10^9`.
    ///
    /// Hours carry into days, but days never carry into weeks or months and
    /// weeks are left as they are.
    ///
    /// Returns `(self, false)` if a carry would push a field past
    /// [`MAX_FIELD`].
    #[must_use]
    pub fn normalize(self) -> (Self, bool) {
        let mut d = self;
        let ok = carry(&mut d.nanoseconds, &mut d.seconds, NANOS_PER_SECOND)
            && carry(&mut d.seconds, &mut d.minutes, 60)
            && carry(&mut d.minutes, &mut d.hours, 60)
            && carry(&mut d.hours, &mut d.days, 24)
            && carry(&mut d.months, &mut d.years, 12);

        if ok {
            (d, true)
        } else {
            tracing::debug!(duration = %self, "duration overflows while normalizing");
            (self, false)
        }
    }

    /// Sums two durations field by field and normalizes the result.
    ///
    /// Both operands must carry the same sign; a zero operand counts as
    /// either sign. Returns `(self, false)` on mixed signs or overflow.
    ///
    /// Mixed signs are refused even when the difference is representable,
    /// so `d.add(other.negate())` does not subtract: `P1DT2H` plus `-PT1H`
    /// fails rather than yielding `P1DT1H`. Use [`Duration::negate`] only to
    /// flip the direction of a whole sum.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> (Self, bool) {
        let failed = (self, false);

        let (a, ok) = self.normalize();
        if !ok {
            return failed;
        }
        let (b, ok) = other.normalize();
        if !ok {
            return failed;
        }

        if b.is_zero() {
            return (a, true);
        }
        if a.is_zero() {
            return (b, true);
        }
        if a.negative != b.negative {
            tracing::debug!(lhs = %self, rhs = %other, "cannot add durations of mixed signs");
            return failed;
        }

        // cheap range checks on the fields that never shrink when normalizing
        let (Some(years), Some(weeks), Some(days)) = (
            checked_sum(a.years, b.years),
            checked_sum(a.weeks, b.weeks),
            checked_sum(a.days, b.days),
        ) else {
            return failed;
        };

        // normalized fields are small, so these cannot wrap
        let sum = Self {
            negative: a.negative,
            years,
            months: a.months + b.months,
            weeks,
            days,
            hours: a.hours + b.hours,
            minutes: a.minutes + b.minutes,
            seconds: a.seconds + b.seconds,
            nanoseconds: a.nanoseconds + b.nanoseconds,
        };
        match sum.normalize() {
            (sum, true) => (sum, true),
            (_, false) => failed,
        }
    }
}

/// Moves whole multiples of `modulus` from `child` into `parent`.
fn carry(child: &mut u32, parent: &mut u32, modulus: u32) -> bool {
    let amount = *child / modulus;
    if amount > 0 {
        match checked_sum(*parent, amount) {
            Some(sum) => *parent = sum,
            None => return false,
        }
    }
    *child %= modulus;
    true
}

fn checked_sum(a: u32, b: u32) -> Option<u32> {
    a.checked_add(b).filter(|sum| *sum <= MAX_FIELD)
}
