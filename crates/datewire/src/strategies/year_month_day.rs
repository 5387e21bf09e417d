// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Timestamp;
use jiff::civil::{Date, Time};
use jiff::tz::Offset;

use super::utc;
use crate::grammar;
use crate::{DateStrategy, Error, Result};

/// A calendar date without a time of day, e.g. `1996-12-19`.
///
/// # Grammar
///
/// `y-MM-dd`: a year of one to four digits, then a two-digit month and day.
///
/// # Decoding
///
/// The date is interpreted as midnight UTC.
///
/// # Encoding
///
/// Only the UTC calendar date of the timestamp is kept; the time of day is dropped. The year is
/// written without padding, so year 7 encodes as `7-01-02`.
///
/// # Examples
///
/// ```
/// use datewire::{DateStrategy, YearMonthDay};
///
/// let timestamp = YearMonthDay::decode(&"1996-12-19".to_owned())?;
/// assert_eq!(timestamp.as_second(), 850_953_600);
/// assert_eq!(YearMonthDay::encode(timestamp), "1996-12-19");
/// # Ok::<(), datewire::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct YearMonthDay;

impl DateStrategy for YearMonthDay {
    type Raw = String;

    const NAME: &'static str = "YearMonthDay";

    fn decode(raw: &String) -> Result<Timestamp> {
        let (year, month, day) = grammar::scan_year_month_day(raw).ok_or_else(|| Error::malformed::<Self>(raw))?;

        Date::new(year, month, day)
            .and_then(|date| Offset::UTC.to_timestamp(date.to_datetime(Time::midnight())))
            .map_err(|error| Error::malformed_with::<Self>(raw, error))
    }

    fn encode(timestamp: Timestamp) -> String {
        utc(timestamp).date().strftime("%-Y-%m-%d").to_string()
    }
}
