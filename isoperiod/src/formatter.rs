// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Write};

use crate::duration::{Duration, NANOS_PER_SECOND};

/// Format a duration as `[-]P[nY][nM][nW][nD][T[nH][nM][nS]]`.
///
/// Zero components are omitted, and the zero duration is written as `PT0S`.
/// Nanoseconds are written as a fraction of the seconds with trailing zeros
/// trimmed; whole seconds hidden in the nanoseconds field are carried over.
///
/// # Errors
///
/// Only errors raised by the underlying writer.
pub fn write_duration<W: Write>(f: &mut W, duration: &Duration) -> fmt::Result {
    if duration.is_zero() {
        return f.write_str("PT0S");
    }

    if duration.negative {
        f.write_char('-')?;
    }
    f.write_char('P')?;

    let date = [
        (duration.years, 'Y'),
        (duration.months, 'M'),
        (duration.weeks, 'W'),
        (duration.days, 'D'),
    ];
    for (value, designator) in date {
        if value != 0 {
            write!(f, "{value}{designator}")?;
        }
    }

    if !duration.has_time_part() {
        return Ok(());
    }

    f.write_char('T')?;
    for (value, designator) in [(duration.hours, 'H'), (duration.minutes, 'M')] {
        if value != 0 {
            write!(f, "{value}{designator}")?;
        }
    }

    let seconds =
        u64::from(duration.seconds) + u64::from(duration.nanoseconds / NANOS_PER_SECOND);
    let mut fraction = duration.nanoseconds % NANOS_PER_SECOND;
    if fraction != 0 {
        let mut width = 9;
        while fraction % 10 == 0 {
            fraction /= 10;
            width -= 1;
        }
        write!(f, "{seconds}.{fraction:0width$}S")
    } else if seconds != 0 {
        write!(f, "{seconds}S")
    } else {
        Ok(())
    }
}
