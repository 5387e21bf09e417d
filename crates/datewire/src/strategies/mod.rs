// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The built-in wire formats.
//!
//! Text formats always encode in UTC. The numeric formats share one implementation,
//! [`EpochSeconds`], and differ only in their [`Epoch`].

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::Offset;

use crate::grammar::{self, DateTimeParts, Zone};
use crate::{DateStrategy, Error, Result};

mod epoch_seconds;
mod iso_8601;
mod rfc_2822;
mod rfc_3339;
mod year_month_day;

pub use epoch_seconds::{Epoch, EpochSeconds, ReferenceEpoch, ReferenceTimestamp, UnixEpoch, UnixTimestamp};
pub use iso_8601::{Iso8601, Iso8601Fractional};
pub use rfc_2822::Rfc2822;
pub use rfc_3339::Rfc3339;
pub use year_month_day::YearMonthDay;

/// `YYYY-MM-DDTHH:MM:SS` without a zone designator.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn utc(timestamp: Timestamp) -> DateTime {
    Offset::UTC.to_datetime(timestamp)
}

/// Formats `timestamp` as `YYYY-MM-DDTHH:MM:SSZ`, dropping fractional seconds.
fn internet_date_time(timestamp: Timestamp) -> String {
    format!("{}Z", utc(timestamp).strftime(DATE_TIME_FORMAT))
}

/// Decodes `YYYY-MM-DDTHH:MM:SS[.F]` followed by `Z` or `±HH:MM`, with an upper-case `T` and,
/// for UTC, an upper-case `Z`. `accept` decides whether a fraction is allowed.
fn decode_date_time<S>(raw: &S::Raw, accept: impl FnOnce(&DateTimeParts) -> bool) -> Result<Timestamp>
where
    S: DateStrategy<Raw = String>,
{
    let parts = grammar::scan_date_time(raw)
        .filter(|parts| parts.separator == b'T' && parts.zone != Zone::Utc(b'z'))
        .filter(accept)
        .ok_or_else(|| Error::malformed::<S>(raw))?;

    parts.to_timestamp().map_err(|error| Error::malformed_with::<S>(raw, error))
}
