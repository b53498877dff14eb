// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::decimal::{Decimal, DecimalError};
use crate::duration::{Duration, NANOS_PER_SECOND};
use crate::error::{Error, Unit};
use crate::grammar::match_fields;

/// Parses an ISO-8601 duration such as `P1Y2M3W4DT5H6M7.8S`.
///
/// Both `.` and `,` are accepted as decimal separators. Fractions are
/// carried into the next smaller unit: years into months, days into hours,
/// hours into minutes, minutes into seconds and seconds into nanoseconds.
/// Months have no fixed length in days, so a fractional month total is
/// rejected, whether written directly (`P0.5M`) or produced by a year
/// fraction (`P0.1Y`).
///
/// # Errors
///
/// - [`Error::BadFormat`] if the text does not follow the grammar or ends up
///   with a fractional month.
/// - [`Error::InvalidNumber`] if the digits of a component cannot be parsed.
/// - [`Error::Overflow`] if a component does not fit its `u32` field.
///
/// Fields are accepted up to `u32::MAX`, so the result may be above
/// [`MAX_FIELD`](crate::MAX_FIELD) and fail [`Duration::is_valid`]; check it
/// before feeding the value into arithmetic that needs the signed range.
pub fn parse(s: &str) -> Result<Duration, Error> {
    let fields = match_fields(s).inspect_err(|e| tracing::trace!(%e, "rejected duration"))?;

    let years = component(Unit::Year, fields.year)?;
    let months = carry(Unit::Month, component(Unit::Month, fields.month)?, years, 12)?;
    if !months.is_integer() {
        return Err(Error::bad_format(s, "fractional months cannot be converted exactly"));
    }

    let weeks = component(Unit::Week, fields.week)?;
    let days = component(Unit::Day, fields.day)?;
    let hours = carry(Unit::Hour, component(Unit::Hour, fields.hour)?, days, 24)?;
    let minutes = carry(Unit::Minute, component(Unit::Minute, fields.minute)?, hours, 60)?;
    let seconds = carry(Unit::Second, component(Unit::Second, fields.second)?, minutes, 60)?;
    let nanoseconds = seconds
        .fract()
        .checked_mul(NANOS_PER_SECOND)
        .ok_or(Error::Overflow { unit: Unit::Second })?;

    Ok(Duration {
        negative: fields.negative,
        years: whole(Unit::Year, years)?,
        months: whole(Unit::Month, months)?,
        weeks: whole(Unit::Week, weeks)?,
        days: whole(Unit::Day, days)?,
        hours: whole(Unit::Hour, hours)?,
        minutes: whole(Unit::Minute, minutes)?,
        seconds: whole(Unit::Second, seconds)?,
        nanoseconds: whole(Unit::Second, nanoseconds)?,
    })
}

fn component(unit: Unit, text: Option<&str>) -> Result<Decimal, Error> {
    let Some(text) = text else {
        return Ok(Decimal::ZERO);
    };

    Decimal::parse(&text.replace(',', ".")).map_err(|e| match e {
        DecimalError::Number(source) => Error::InvalidNumber { unit, source },
        DecimalError::Overflow => Error::Overflow { unit },
    })
}

/// Adds the fraction of the larger unit `from`, scaled by `factor`, to `value`.
fn carry(unit: Unit, value: Decimal, from: Decimal, factor: u32) -> Result<Decimal, Error> {
    from.fract()
        .checked_mul(factor)
        .and_then(|c| value.checked_add(c))
        .ok_or(Error::Overflow { unit })
}

fn whole(unit: Unit, value: Decimal) -> Result<u32, Error> {
    u32::try_from(value.trunc()).map_err(|_| Error::Overflow { unit })
}
