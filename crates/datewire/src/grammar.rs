// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Lexical scanners for the textual date grammars.
//!
//! The scanners only check the shape of the input and extract its numeric components. Range
//! and calendar validation is left to `jiff`.

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::Offset;
use jiff::{SignedDuration, Timestamp};

/// Components of an internet date-time such as `1996-12-19T16:39:57.538-08:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateTimeParts {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    pub separator: u8,
    pub hour: i8,
    pub minute: i8,
    pub second: i8,
    /// Fractional seconds in nanoseconds, if a fraction was written.
    pub fraction: Option<i32>,
    pub zone: Zone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Zone {
    /// `Z` or `z`; the byte records the spelling.
    Utc(u8),
    /// `+HH:MM` or `-HH:MM`, in seconds east of UTC.
    Offset(i32),
}

impl DateTimeParts {
    /// Resolves the parts into a timestamp.
    ///
    /// A leap second (`:60`) is clamped to `:59`.
    pub fn to_timestamp(self) -> Result<Timestamp, jiff::Error> {
        let second = self.second.min(59);
        let nanosecond = self.fraction.unwrap_or(0);

        let date = Date::new(self.year, self.month, self.day)?;
        let time = Time::new(self.hour, self.minute, second, nanosecond)?;
        let offset = match self.zone {
            Zone::Utc(_) => Offset::UTC,
            Zone::Offset(seconds) => Offset::from_seconds(seconds)?,
        };

        offset.to_timestamp(DateTime::from_parts(date, time))
    }
}

/// Scans `YYYY-MM-DD<sep>HH:MM:SS[.F{1,9}]<zone>` where `<zone>` is `Z`, `z` or `±HH:MM`.
pub(crate) fn scan_date_time(input: &str) -> Option<DateTimeParts> {
    let mut cursor = Cursor::new(input);

    let year = cursor.number(4)?;
    cursor.expect(b'-')?;
    let month = cursor.number(2)?;
    cursor.expect(b'-')?;
    let day = cursor.number(2)?;
    let separator = cursor.bump()?;
    let hour = cursor.number(2)?;
    cursor.expect(b':')?;
    let minute = cursor.number(2)?;
    cursor.expect(b':')?;
    let second = cursor.number(2)?;

    let fraction = if cursor.eat(b'.') { Some(cursor.fraction()?) } else { None };

    let zone = match cursor.bump()? {
        designator @ (b'Z' | b'z') => Zone::Utc(designator),
        sign @ (b'+' | b'-') => {
            let hours = cursor.number(2)?;
            cursor.expect(b':')?;
            let minutes = cursor.number(2)?;
            let seconds = hours * 3600 + minutes * 60;
            Zone::Offset(if sign == b'-' { -seconds } else { seconds })
        }
        _ => return None,
    };

    cursor.finish()?;

    Some(DateTimeParts {
        year: i16::try_from(year).ok()?,
        month: i8::try_from(month).ok()?,
        day: i8::try_from(day).ok()?,
        separator,
        hour: i8::try_from(hour).ok()?,
        minute: i8::try_from(minute).ok()?,
        second: i8::try_from(second).ok()?,
        fraction,
        zone,
    })
}

/// Scans `y-MM-dd`, a year of one to four digits followed by a two-digit month and day.
pub(crate) fn scan_year_month_day(input: &str) -> Option<(i16, i8, i8)> {
    let mut cursor = Cursor::new(input);

    let year = cursor.number_between(1, 4)?;
    cursor.expect(b'-')?;
    let month = cursor.number(2)?;
    cursor.expect(b'-')?;
    let day = cursor.number(2)?;
    cursor.finish()?;

    Some((
        i16::try_from(year).ok()?,
        i8::try_from(month).ok()?,
        i8::try_from(day).ok()?,
    ))
}

/// Splits a finite number of seconds into whole seconds and microseconds, rounding to the
/// nearest microsecond, and offsets it from `origin`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "both values are range checked before the cast"
)]
pub(crate) fn seconds_from(origin: Timestamp, seconds: f64) -> Option<Timestamp> {
    // Well beyond the ±12,000 years a timestamp can represent.
    const LIMIT: f64 = 1e15;

    if !seconds.is_finite() || seconds.abs() > LIMIT {
        return None;
    }

    let whole = seconds.floor();
    let micros = ((seconds - whole) * 1e6).round();
    let offset = SignedDuration::from_secs(whole as i64) + SignedDuration::from_micros(micros as i64);

    origin.checked_add(offset).ok()
}

/// The inverse of [`seconds_from`].
#[expect(clippy::cast_precision_loss, reason = "numeric timestamps are carried as f64")]
pub(crate) fn seconds_since(origin: Timestamp, timestamp: Timestamp) -> f64 {
    let elapsed = timestamp.duration_since(origin);
    let micros = elapsed.subsec_micros();

    elapsed.as_secs() as f64 + f64::from(micros) / 1e6
}

struct Cursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            position: 0,
        }
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    fn eat(&mut self, expected: u8) -> bool {
        let matches = self.bytes.get(self.position) == Some(&expected);
        if matches {
            self.position += 1;
        }
        matches
    }

    fn expect(&mut self, expected: u8) -> Option<()> {
        self.eat(expected).then_some(())
    }

    fn finish(&self) -> Option<()> {
        (self.position == self.bytes.len()).then_some(())
    }

    /// Reads exactly `digits` ASCII digits.
    fn number(&mut self, digits: usize) -> Option<i32> {
        self.number_between(digits, digits)
    }

    /// Reads between `min` and `max` ASCII digits, as many as are available.
    fn number_between(&mut self, min: usize, max: usize) -> Option<i32> {
        let mut value = 0_i32;
        let mut count = 0;

        while count < max {
            match self.bytes.get(self.position) {
                Some(byte) if byte.is_ascii_digit() => {
                    value = value * 10 + i32::from(byte - b'0');
                    self.position += 1;
                    count += 1;
                }
                _ => break,
            }
        }

        (count >= min).then_some(value)
    }

    /// Reads one to nine fraction digits and scales them to nanoseconds.
    fn fraction(&mut self) -> Option<i32> {
        let start = self.position;
        let value = self.number_between(1, 9)?;
        let digits = u8::try_from(self.position - start).ok()?;

        // More than nine digits is not a fraction we can carry.
        if self.bytes.get(self.position).is_some_and(u8::is_ascii_digit) {
            return None;
        }

        Some(value * 10_i32.pow(9 - u32::from(digits)))
    }
}
