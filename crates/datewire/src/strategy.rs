// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Timestamp;

use crate::Result;
use crate::raw::RawValue;

/// A wire format for timestamps: a pure decode/encode pair over one raw kind.
///
/// Strategies are marker types that are never instantiated. They are used as the type parameter
/// of [`DateField`][crate::DateField] and [`OptionalDateField`][crate::OptionalDateField], which
/// guarantees that a field is decoded and encoded with the same format.
///
/// Implementing this trait is all it takes to add a new wire format; the field wrappers need no
/// changes.
///
/// # Contract
///
/// - [`encode`][DateStrategy::encode] is total.
/// - [`decode`][DateStrategy::decode] fails with [`ErrorKind::Malformed`][crate::ErrorKind::Malformed]
///   when the raw value does not follow the grammar of the strategy.
/// - `encode(decode(raw))` yields the normalized form of `raw` produced by the strategy's own
///   formatter. It need not be byte-identical to `raw`.
/// - Both functions are pure and may be called from any thread.
///
/// # Examples
///
/// ```
/// use datewire::{DateField, DateStrategy, Error};
/// use jiff::Timestamp;
///
/// /// Milliseconds since the Unix epoch, written as text.
/// struct UnixMillisText;
///
/// impl DateStrategy for UnixMillisText {
///     type Raw = String;
///     const NAME: &'static str = "UnixMillisText";
///
///     fn decode(raw: &String) -> datewire::Result<Timestamp> {
///         raw.parse::<i64>()
///             .ok()
///             .and_then(|millis| Timestamp::from_millisecond(millis).ok())
///             .ok_or_else(|| Error::malformed::<Self>(raw))
///     }
///
///     fn encode(timestamp: Timestamp) -> String {
///         timestamp.as_millisecond().to_string()
///     }
/// }
///
/// let field = DateField::<UnixMillisText>::decode("1500".to_owned())?;
/// assert_eq!(field.value().as_millisecond(), 1500);
/// # Ok::<(), Error>(())
/// ```
pub trait DateStrategy {
    /// The raw value read from and written to the wire.
    type Raw: RawValue;

    /// Name of the strategy, used in diagnostics.
    const NAME: &'static str;

    /// Decodes a raw value into a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Malformed`][crate::ErrorKind::Malformed] if `raw` does not follow the
    /// grammar of this strategy.
    fn decode(raw: &Self::Raw) -> Result<Timestamp>;

    /// Encodes a timestamp into a raw value.
    fn encode(timestamp: Timestamp) -> Self::Raw;
}
