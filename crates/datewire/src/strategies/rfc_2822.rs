// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Timestamp;
use jiff::fmt::rfc2822;

use super::utc;
use crate::{DateStrategy, Error, Result};

static RFC2822_PARSER: rfc2822::DateTimeParser = rfc2822::DateTimeParser::new();

/// `Thu, 1 Jan 1970 00:00:00 GMT`, always in UTC.
const RFC2822_FORMAT: &str = "%a, %-d %b %Y %T GMT";

/// RFC 2822 text, as found in e-mail and HTTP headers.
///
/// Examples:
///
/// - `Fri, 27 Dec 2019 22:43:52 -0000` (UTC)
/// - `Thu, 08 Aug 2024 11:45:00 GMT` (UTC)
/// - `Tue, 06 Aug 2024 14:30:00 -0700` (UTC offset)
///
/// The format is defined in [RFC 2822](https://tools.ietf.org/html/rfc2822#section-3.3). The
/// day of the week is optional when decoding; if present it must match the date.
///
/// # Encoding
///
/// Timestamps are encoded in UTC with a `GMT` zone and an unpadded day of the month.
///
/// # Leap seconds
///
/// A leap second is accepted and trimmed to `:59`.
///
/// # Examples
///
/// ```
/// use datewire::{DateStrategy, Rfc2822};
///
/// let timestamp = Rfc2822::decode(&"Tue, 06 Aug 2024 14:30:00 -0700".to_owned())?;
/// assert_eq!(Rfc2822::encode(timestamp), "Tue, 6 Aug 2024 21:30:00 GMT");
/// # Ok::<(), datewire::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rfc2822;

impl DateStrategy for Rfc2822 {
    type Raw = String;

    const NAME: &'static str = "RFC2822";

    fn decode(raw: &String) -> Result<Timestamp> {
        RFC2822_PARSER
            .parse_timestamp(raw)
            .map_err(|error| Error::malformed_with::<Self>(raw, error))
    }

    fn encode(timestamp: Timestamp) -> String {
        utc(timestamp).strftime(RFC2822_FORMAT).to_string()
    }
}
