// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use jiff::Timestamp;

use crate::grammar;
use crate::{DateStrategy, Error, Result};

/// The origin of a numeric timestamp.
///
/// Implement this trait to read and write seconds relative to an epoch other than the built-in
/// ones; see the crate documentation for an example.
pub trait Epoch {
    /// Name of the resulting strategy, used in diagnostics.
    const NAME: &'static str;

    /// The instant represented by zero seconds.
    const ORIGIN: Timestamp;
}

/// Seconds since `1 January 1970 00:00:00 UTC`.
#[derive(Debug, Clone, Copy)]
pub struct UnixEpoch;

impl Epoch for UnixEpoch {
    const NAME: &'static str = "UnixTimestamp";
    const ORIGIN: Timestamp = Timestamp::UNIX_EPOCH;
}

/// Seconds since the reference date `1 January 2001 00:00:00 UTC`.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceEpoch;

impl Epoch for ReferenceEpoch {
    const NAME: &'static str = "ReferenceTimestamp";
    const ORIGIN: Timestamp = Timestamp::constant(978_307_200, 0);
}

/// A timestamp written as a number of seconds since the epoch `E`.
///
/// Supports both positive and negative values to represent times after and before the epoch.
///
/// # Decoding
///
/// The number may carry a fraction, which is rounded to the nearest microsecond. Values that are
/// not finite or fall outside the range of a timestamp are rejected.
///
/// # Encoding
///
/// The timestamp is written with microsecond precision. Whole values are serialized as integers.
///
/// # Leap seconds
///
/// This value represents the number of non-leap seconds since the epoch.
pub struct EpochSeconds<E> {
    _epoch: PhantomData<fn() -> E>,
}

impl<E: Epoch> Debug for EpochSeconds<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(E::NAME)
    }
}

impl<E: Epoch> DateStrategy for EpochSeconds<E> {
    type Raw = f64;

    const NAME: &'static str = E::NAME;

    fn decode(raw: &f64) -> Result<Timestamp> {
        grammar::seconds_from(E::ORIGIN, *raw).ok_or_else(|| Error::malformed::<Self>(raw))
    }

    fn encode(timestamp: Timestamp) -> f64 {
        grammar::seconds_since(E::ORIGIN, timestamp)
    }
}

/// Seconds since the Unix epoch, e.g. `851042397` or `851042397.538`.
///
/// # Examples
///
/// ```
/// use datewire::{DateStrategy, UnixTimestamp};
///
/// let timestamp = UnixTimestamp::decode(&851_042_397.538)?;
/// assert_eq!(timestamp.to_string(), "1996-12-20T00:39:57.538Z");
/// assert_eq!(UnixTimestamp::encode(timestamp), 851_042_397.538);
/// # Ok::<(), datewire::Error>(())
/// ```
pub type UnixTimestamp = EpochSeconds<UnixEpoch>;

/// Seconds since `1 January 2001 00:00:00 UTC`.
///
/// # Examples
///
/// ```
/// use datewire::{DateStrategy, ReferenceTimestamp};
///
/// let timestamp = ReferenceTimestamp::decode(&604_548_113.0)?;
/// assert_eq!(timestamp.to_string(), "2020-02-28T02:01:53Z");
/// assert_eq!(timestamp.as_second(), 1_582_855_313);
/// # Ok::<(), datewire::Error>(())
/// ```
pub type ReferenceTimestamp = EpochSeconds<ReferenceEpoch>;

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    static_assertions::assert_impl_all!(UnixTimestamp: Debug, Send, Sync);
    static_assertions::assert_impl_all!(ReferenceTimestamp: Debug, Send, Sync);

    #[test]
    fn unix_decode() {
        let timestamp = UnixTimestamp::decode(&851_042_397.0).unwrap();
        assert_eq!(timestamp.to_string(), "1996-12-20T00:39:57Z");
    }

    #[test]
    fn unix_decode_fraction() {
        let timestamp = UnixTimestamp::decode(&851_042_397.538).unwrap();
        assert_eq!(timestamp, Timestamp::new(851_042_397, 538_000_000).unwrap());
    }

    #[test]
    fn unix_decode_negative() {
        let timestamp = UnixTimestamp::decode(&-62_135_596_800.0).unwrap();
        assert_eq!(timestamp.to_string(), "0001-01-01T00:00:00Z");
    }

    #[test]
    fn unix_encode() {
        let timestamp = Timestamp::from_second(851_042_397).unwrap();
        assert_eq!(UnixTimestamp::encode(timestamp), 851_042_397.0);
    }

    #[test]
    fn unix_encode_keeps_microseconds() {
        let timestamp = Timestamp::new(1, 500_000_999).unwrap();
        assert_eq!(UnixTimestamp::encode(timestamp), 1.5);
    }

    #[test]
    fn reference_decode() {
        let timestamp = ReferenceTimestamp::decode(&604_548_113.0).unwrap();
        assert_eq!(timestamp.as_second(), 1_582_855_313);
    }

    #[test]
    fn reference_origin() {
        let timestamp = ReferenceTimestamp::decode(&0.0).unwrap();
        assert_eq!(timestamp.to_string(), "2001-01-01T00:00:00Z");
        assert_eq!(ReferenceTimestamp::encode(Timestamp::UNIX_EPOCH), -978_307_200.0);
    }

    #[test]
    fn decode_rejects_non_finite() {
        for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let error = UnixTimestamp::decode(&raw).unwrap_err();
            assert!(matches!(error.kind(), ErrorKind::Malformed { strategy: "UnixTimestamp", .. }));
        }
    }

    #[test]
    fn decode_rejects_out_of_range() {
        let error = ReferenceTimestamp::decode(&1e13).unwrap_err();

        assert!(matches!(
            error.kind(),
            ErrorKind::Malformed {
                strategy: "ReferenceTimestamp",
                ..
            }
        ));
        assert_eq!(error.to_string(), "invalid ReferenceTimestamp date format: 10000000000000");
    }

    #[test]
    fn debug_names_the_epoch() {
        let strategy = EpochSeconds::<UnixEpoch> { _epoch: PhantomData };
        assert_eq!(format!("{strategy:?}"), "UnixTimestamp");
    }
}
