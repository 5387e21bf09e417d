// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Timestamp;

use super::{DATE_TIME_FORMAT, decode_date_time, internet_date_time, utc};
use crate::{DateStrategy, Result};

/// ISO 8601 text with whole seconds, e.g. `1996-12-19T16:39:57-08:00`.
///
/// # Grammar
///
/// `YYYY-MM-DD'T'HH:mm:ss` followed by `Z` or a `±HH:MM` offset. A fractional second is
/// rejected; use [`Iso8601Fractional`] for those.
///
/// # Encoding
///
/// Timestamps are encoded in UTC with a `Z` designator. Fractional seconds are truncated.
///
/// # Leap seconds
///
/// A leap second (`:60`) is accepted and trimmed to `:59`.
///
/// # Examples
///
/// ```
/// use datewire::{DateStrategy, Iso8601};
///
/// let timestamp = Iso8601::decode(&"1996-12-19T16:39:57-08:00".to_owned())?;
/// assert_eq!(timestamp.as_second(), 851_042_397);
/// assert_eq!(Iso8601::encode(timestamp), "1996-12-20T00:39:57Z");
///
/// Iso8601::decode(&"1996-12-19T16:39:57.538-08:00".to_owned()).unwrap_err();
/// # Ok::<(), datewire::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Iso8601;

impl DateStrategy for Iso8601 {
    type Raw = String;

    const NAME: &'static str = "ISO8601";

    fn decode(raw: &String) -> Result<Timestamp> {
        decode_date_time::<Self>(raw, |parts| parts.fraction.is_none())
    }

    fn encode(timestamp: Timestamp) -> String {
        internet_date_time(timestamp)
    }
}

/// ISO 8601 text with fractional seconds, e.g. `1996-12-19T16:39:57.538-08:00`.
///
/// # Grammar
///
/// `YYYY-MM-DD'T'HH:mm:ss.SSS` followed by `Z` or a `±HH:MM` offset. The fraction is mandatory
/// and may have one to nine digits.
///
/// # Encoding
///
/// Timestamps are encoded in UTC with a `Z` designator and exactly three fraction digits.
/// Precision below milliseconds is truncated.
///
/// # Examples
///
/// ```
/// use datewire::{DateStrategy, Iso8601Fractional};
///
/// let timestamp = Iso8601Fractional::decode(&"1996-12-19T16:39:57.538-08:00".to_owned())?;
/// assert_eq!(timestamp.as_millisecond(), 851_042_397_538);
/// assert_eq!(Iso8601Fractional::encode(timestamp), "1996-12-20T00:39:57.538Z");
///
/// Iso8601Fractional::decode(&"1996-12-19T16:39:57-08:00".to_owned()).unwrap_err();
/// # Ok::<(), datewire::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Iso8601Fractional;

impl DateStrategy for Iso8601Fractional {
    type Raw = String;

    const NAME: &'static str = "ISO8601Fractional";

    fn decode(raw: &String) -> Result<Timestamp> {
        decode_date_time::<Self>(raw, |parts| parts.fraction.is_some())
    }

    fn encode(timestamp: Timestamp) -> String {
        let datetime = utc(timestamp);
        format!("{}.{:03}Z", datetime.strftime(DATE_TIME_FORMAT), datetime.millisecond())
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn decode<S: DateStrategy<Raw = String>>(raw: &str) -> Result<Timestamp> {
        S::decode(&raw.to_owned())
    }

    #[test]
    fn decode_with_offset() {
        let timestamp = decode::<Iso8601>("1996-12-19T16:39:57-08:00").unwrap();
        assert_eq!(timestamp.as_second(), 851_042_397);
    }

    #[test]
    fn decode_utc() {
        let timestamp = decode::<Iso8601>("1996-12-20T11:39:57Z").unwrap();
        assert_eq!(Iso8601::encode(timestamp), "1996-12-20T11:39:57Z");
    }

    #[test]
    fn decode_rejects_fraction() {
        decode::<Iso8601>("1996-12-19T16:39:57.538-08:00").unwrap_err();
    }

    #[test]
    fn decode_rejects_date_only() {
        let error = decode::<Iso8601>("1996-12-19").unwrap_err();

        assert!(matches!(error.kind(), ErrorKind::Malformed { strategy: "ISO8601", .. }));
        assert_eq!(error.to_string(), "invalid ISO8601 date format: \"1996-12-19\"");
    }

    #[test]
    fn decode_rejects_lowercase_designators() {
        decode::<Iso8601>("1996-12-19t16:39:57Z").unwrap_err();
        decode::<Iso8601>("1996-12-19T16:39:57z").unwrap_err();
        decode::<Iso8601>("1996-12-19 16:39:57Z").unwrap_err();
    }

    #[test]
    fn decode_rejects_invalid_calendar_date() {
        let error = decode::<Iso8601>("1996-02-30T16:39:57Z").unwrap_err();

        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn decode_leap_second() {
        let timestamp = decode::<Iso8601>("1990-12-31T23:59:60Z").unwrap();
        assert_eq!(Iso8601::encode(timestamp), "1990-12-31T23:59:59Z");
    }

    #[test]
    fn encode_truncates_fraction() {
        let timestamp = Timestamp::new(851_042_397, 999_999_999).unwrap();
        assert_eq!(Iso8601::encode(timestamp), "1996-12-20T00:39:57Z");
    }

    #[test]
    fn fractional_decode() {
        let timestamp = decode::<Iso8601Fractional>("1996-12-19T16:39:57.538-08:00").unwrap();
        assert_eq!(timestamp, Timestamp::new(851_042_397, 538_000_000).unwrap());
    }

    #[test]
    fn fractional_decode_any_precision() {
        let timestamp = decode::<Iso8601Fractional>("1970-01-01T00:00:08.999999999Z").unwrap();
        assert_eq!(timestamp, Timestamp::new(8, 999_999_999).unwrap());

        let timestamp = decode::<Iso8601Fractional>("1970-01-01T00:00:08.5Z").unwrap();
        assert_eq!(timestamp, Timestamp::new(8, 500_000_000).unwrap());
    }

    #[test]
    fn fractional_decode_requires_fraction() {
        let error = decode::<Iso8601Fractional>("1996-12-19T16:39:57-08:00").unwrap_err();
        assert!(matches!(
            error.kind(),
            ErrorKind::Malformed {
                strategy: "ISO8601Fractional",
                ..
            }
        ));
    }

    #[test]
    fn fractional_encode() {
        let timestamp = decode::<Iso8601Fractional>("1996-12-20T11:39:57.538+11:00").unwrap();
        assert_eq!(Iso8601Fractional::encode(timestamp), "1996-12-20T00:39:57.538Z");
    }

    #[test]
    fn fractional_encode_pads_and_truncates() {
        assert_eq!(Iso8601Fractional::encode(Timestamp::UNIX_EPOCH), "1970-01-01T00:00:00.000Z");

        let timestamp = Timestamp::new(8, 999_999_999).unwrap();
        assert_eq!(Iso8601Fractional::encode(timestamp), "1970-01-01T00:00:08.999Z");
    }

    #[test]
    fn fractional_encode_before_epoch() {
        let timestamp = Timestamp::new(-1, -500_000_000).unwrap();
        assert_eq!(Iso8601Fractional::encode(timestamp), "1969-12-31T23:59:58.500Z");
    }
}
