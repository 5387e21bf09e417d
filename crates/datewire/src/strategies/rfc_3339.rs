// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Timestamp;

use super::{decode_date_time, internet_date_time};
use crate::{DateStrategy, Result};

/// RFC 3339 text with whole seconds, e.g. `1996-12-19T16:39:57-08:00`.
///
/// # Grammar
///
/// `yyyy-MM-dd'T'HH:mm:ss` followed by `Z` or a `±HH:MM` offset: the internet date-time of
/// [RFC 3339](https://tools.ietf.org/html/rfc3339#section-5.6) without fractional seconds. The
/// separator must be an upper-case `T` and UTC an upper-case `Z`; the lower-case and space
/// spellings that RFC 3339 tolerates are rejected.
///
/// # Encoding
///
/// Timestamps are encoded in UTC as `YYYY-MM-DDTHH:MM:SSZ`. Fractional seconds are truncated.
///
/// # Examples
///
/// ```
/// use datewire::{DateStrategy, Rfc3339};
///
/// let timestamp = Rfc3339::decode(&"1996-12-19T16:39:57-08:00".to_owned())?;
/// assert_eq!(Rfc3339::encode(timestamp), "1996-12-20T00:39:57Z");
/// # Ok::<(), datewire::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rfc3339;

impl DateStrategy for Rfc3339 {
    type Raw = String;

    const NAME: &'static str = "RFC3339";

    fn decode(raw: &String) -> Result<Timestamp> {
        decode_date_time::<Self>(raw, |parts| parts.fraction.is_none())
    }

    fn encode(timestamp: Timestamp) -> String {
        internet_date_time(timestamp)
    }
}
