// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Applying durations to points in time.

use jiff::civil::{Date, DateTime, Time};
use jiff::{SignedDuration, Span, Zoned};

use crate::duration::Duration;
use crate::error::Error;

/// A point in time that durations can be added to.
///
/// Calendar additions follow carry-over semantics rather than clamping: the
/// year and month are advanced first, then the day of month is applied as an
/// offset from the first of that month, so `01-31` plus one month lands in
/// March when February is shorter.
pub trait PointInTime: Sized {
    /// Adds calendar years, months and days, keeping the wall-clock time.
    ///
    /// # Errors
    ///
    /// If the result leaves the supported range of dates.
    fn add_calendar(&self, years: i64, months: i64, days: i64) -> Result<Self, Error>;

    /// Adds an exact amount of elapsed time.
    ///
    /// # Errors
    ///
    /// If the result leaves the supported range of dates.
    fn add_clock_time(&self, duration: SignedDuration) -> Result<Self, Error>;

    /// Day of month, 1-31.
    fn day_of_month(&self) -> i8;

    /// Whether the wall-clock time is exactly 00:00:00.000000000.
    fn is_start_of_day(&self) -> bool;

    /// 00:00:00 of the following day.
    ///
    /// # Errors
    ///
    /// If the result leaves the supported range of dates.
    fn start_of_next_day(&self) -> Result<Self, Error>;

    /// Same wall-clock time on day 1 of the month.
    ///
    /// # Errors
    ///
    /// If the result cannot be represented, e.g. in a time zone gap.
    fn with_first_day_of_month(&self) -> Result<Self, Error>;
}

impl PointInTime for DateTime {
    fn add_calendar(&self, years: i64, months: i64, days: i64) -> Result<Self, Error> {
        Ok(shift_date(self.date(), years, months, days)?.to_datetime(self.time()))
    }

    fn add_clock_time(&self, duration: SignedDuration) -> Result<Self, Error> {
        Ok(self.checked_add(duration)?)
    }

    fn day_of_month(&self) -> i8 {
        self.day()
    }

    fn is_start_of_day(&self) -> bool {
        self.time() == Time::midnight()
    }

    fn start_of_next_day(&self) -> Result<Self, Error> {
        Ok(shift_date(self.date(), 0, 0, 1)?.to_datetime(Time::midnight()))
    }

    fn with_first_day_of_month(&self) -> Result<Self, Error> {
        Ok(self.first_of_month())
    }
}

/// Calendar fields are computed on the wall clock of the zone, elapsed time
/// on the timeline.
impl PointInTime for Zoned {
    fn add_calendar(&self, years: i64, months: i64, days: i64) -> Result<Self, Error> {
        let dt = self.datetime().add_calendar(years, months, days)?;
        Ok(dt.to_zoned(self.time_zone().clone())?)
    }

    fn add_clock_time(&self, duration: SignedDuration) -> Result<Self, Error> {
        Ok(self.checked_add(duration)?)
    }

    fn day_of_month(&self) -> i8 {
        self.day()
    }

    fn is_start_of_day(&self) -> bool {
        self.time() == Time::midnight()
    }

    fn start_of_next_day(&self) -> Result<Self, Error> {
        let dt = self.datetime().start_of_next_day()?;
        Ok(dt.to_zoned(self.time_zone().clone())?)
    }

    fn with_first_day_of_month(&self) -> Result<Self, Error> {
        let dt = self.datetime().first_of_month();
        Ok(dt.to_zoned(self.time_zone().clone())?)
    }
}

/// Moves `date` by whole months, then by days counted from the first of the
/// resulting month, so a day of month past its end rolls into the next one.
fn shift_date(date: Date, years: i64, months: i64, days: i64) -> Result<Date, Error> {
    let month_index = i64::from(date.year()) * 12 + i64::from(date.month()) - 1;
    let month_index = years
        .checked_mul(12)
        .and_then(|m| m.checked_add(months))
        .and_then(|m| m.checked_add(month_index))
        .ok_or(Error::DateOutOfRange)?;

    let year = i16::try_from(month_index.div_euclid(12)).map_err(|_| Error::DateOutOfRange)?;
    let month = i8::try_from(month_index.rem_euclid(12) + 1).map_err(|_| Error::DateOutOfRange)?;
    let offset = days
        .checked_add(i64::from(date.day()) - 1)
        .ok_or(Error::DateOutOfRange)?;

    let first = Date::new(year, month, 1)?;
    Ok(first.checked_add(Span::new().try_days(offset)?)?)
}

impl Duration {
    /// Adds the duration using plain calendar arithmetic.
    ///
    /// Years, months and `weeks * 7 + days` are added as calendar fields,
    /// then hours, minutes, seconds and nanoseconds as elapsed time. A
    /// negative duration subtracts every part.
    ///
    /// # Errors
    ///
    /// If the result leaves the supported range of dates.
    pub fn add_naive<P: PointInTime>(&self, point: &P) -> Result<P, Error> {
        let sign = if self.negative { -1 } else { 1 };
        let clock = self.clock_time();
        point
            .add_calendar(
                sign * i64::from(self.years),
                sign * i64::from(self.months),
                sign * self.total_days(),
            )?
            .add_clock_time(if self.negative { -clock } else { clock })
    }

    /// Adds the duration following the civil-code rules for computing
    /// periods (Japanese Civil Code, Articles 139 to 143).
    ///
    /// - A period with a time part starts immediately.
    /// - Otherwise the initial day is not counted unless the point is exactly
    ///   at midnight, so counting starts at 00:00 of the next day.
    /// - Years and months follow the calendar. When the last month has no day
    ///   corresponding to the day counting started on, the period expires at
    ///   the end of that month, i.e. 00:00 of the first of the next month.
    /// - Weeks and days are added afterwards, then the time part.
    ///
    /// The result is the instant the period expires.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedNegative`] for negative durations, which the
    ///   rules leave undefined.
    /// - Range errors from the calendar arithmetic.
    #[tracing::instrument(level = "debug", skip_all, fields(duration = %self))]
    pub fn add_legal<P: PointInTime>(&self, point: &P) -> Result<P, Error> {
        if self.negative {
            return Err(Error::UnsupportedNegative);
        }

        let next_day = if !self.has_time_part() && !point.is_start_of_day() {
            tracing::debug!("initial day excluded, counting from the next day");
            Some(point.start_of_next_day()?)
        } else {
            None
        };
        let start = next_day.as_ref().unwrap_or(point);

        let mut target = start.add_calendar(i64::from(self.years), i64::from(self.months), 0)?;
        if target.day_of_month() != start.day_of_month() {
            tracing::debug!("no corresponding day in the last month, expiring at its end");
            target = target.with_first_day_of_month()?;
        }

        if self.days > 0 || self.weeks > 0 {
            target = target.add_calendar(0, 0, self.total_days())?;
        }
        target.add_clock_time(self.clock_time())
    }

    fn total_days(&self) -> i64 {
        i64::from(self.weeks) * 7 + i64::from(self.days)
    }

    /// Hours, minutes, seconds and nanoseconds as elapsed time, unsigned.
    fn clock_time(&self) -> SignedDuration {
        let secs = i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60;
        SignedDuration::from_secs(secs + i64::from(self.seconds))
            + SignedDuration::from_nanos(i64::from(self.nanoseconds))
    }
}
