// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;
use std::time::SystemTime;

use jiff::Timestamp;
use serde_core::de::{self, Deserializer};
use serde_core::{Deserialize, Serialize, Serializer};

use crate::raw::{OptionalScalarVisitor, RawScalar, RawValue};
use crate::{DateStrategy, DecodeContainer, EncodeContainer, Error, Result, telemetry};

/// A required timestamp field with a fixed wire format `S`.
///
/// The field holds the timestamp together with the raw value it is written as. After decoding,
/// the raw value is exactly what was read; after any mutation it is re-derived with
/// [`S::encode`][DateStrategy::encode] before the mutating call returns. Encoding never
/// formats anything, it writes the cached raw value.
///
/// # Serialization and deserialization
///
/// `DateField` implements `Serialize` and `Deserialize` from `serde`. Deserialization fails when
/// the value is null or the key is missing, when the scalar has the wrong kind (a number for a
/// text format or vice versa), and when the text does not follow the format.
///
/// The kind of the raw value is taken from the input, not from `S`, so deserialization goes
/// through `deserialize_any` and needs a self-describing format such as JSON. Formats that only
/// decode what the type asks for, such as `bincode` or `postcard`, are not supported.
///
/// # Examples
///
/// ```
/// use datewire::{DateField, Iso8601};
/// use jiff::Timestamp;
///
/// let mut field: DateField<Iso8601> = "1996-12-19T16:39:57-08:00".parse()?;
/// assert_eq!(field.as_second(), 851_042_397);
/// assert_eq!(field.raw(), "1996-12-19T16:39:57-08:00");
///
/// let previous = field.replace(Timestamp::UNIX_EPOCH);
/// assert_eq!(previous.as_second(), 851_042_397);
/// assert_eq!(field.to_string(), "1970-01-01T00:00:00Z");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DateField<S: DateStrategy> {
    value: Timestamp,
    raw: S::Raw,
    _strategy: PhantomData<fn() -> S>,
}

impl<S: DateStrategy> DateField<S> {
    /// Creates a field holding `value`, deriving its raw value.
    #[must_use]
    pub fn new(value: Timestamp) -> Self {
        Self {
            value,
            raw: S::encode(value),
            _strategy: PhantomData,
        }
    }

    /// Decodes a field from its raw value, which is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Malformed`][crate::ErrorKind::Malformed] if `raw` does not follow the
    /// format of `S`.
    pub fn decode(raw: S::Raw) -> Result<Self> {
        Self::try_decode(raw).inspect_err(|error| telemetry::decode_failed(S::NAME, None, error))
    }

    /// Decodes a field from a tagged scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::WrongRawKind`][crate::ErrorKind::WrongRawKind] if the scalar is not
    /// of the kind `S` reads, and [`ErrorKind::Malformed`][crate::ErrorKind::Malformed] if it
    /// does not follow the format of `S`.
    ///
    /// # Examples
    ///
    /// ```
    /// use datewire::{DateField, ErrorKind, RawScalar, UnixTimestamp};
    ///
    /// let field = DateField::<UnixTimestamp>::decode_scalar(RawScalar::Number(0.0))?;
    /// assert_eq!(field.value().as_second(), 0);
    ///
    /// let error = DateField::<UnixTimestamp>::decode_scalar(RawScalar::from("0")).unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::WrongRawKind { .. }));
    /// # Ok::<(), datewire::Error>(())
    /// ```
    pub fn decode_scalar(scalar: RawScalar) -> Result<Self> {
        Self::decode_entry(Some(scalar), None)
    }

    /// Decodes a field from whatever a container or deserializer found, `None` meaning absent
    /// or null. Failures are reported with the field name, when known.
    pub(crate) fn decode_entry(scalar: Option<RawScalar>, field: Option<&str>) -> Result<Self> {
        scalar
            .ok_or_else(|| Error::missing_required_value(S::NAME, field))
            .and_then(Self::try_decode_scalar)
            .inspect_err(|error| telemetry::decode_failed(S::NAME, field, error))
    }

    fn try_decode_scalar(scalar: RawScalar) -> Result<Self> {
        let raw = S::Raw::from_scalar(scalar)
            .map_err(|found| Error::wrong_raw_kind(S::NAME, S::Raw::KIND, format!("{} {found}", found.kind())))?;

        Self::try_decode(raw)
    }

    fn try_decode(raw: S::Raw) -> Result<Self> {
        let value = S::decode(&raw)?;

        Ok(Self {
            value,
            raw,
            _strategy: PhantomData,
        })
    }

    /// Decodes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Fails like [`DecodeContainer::decode_required`].
    pub fn decode_from<C: DecodeContainer>(container: &C, key: &str) -> Result<Self> {
        container.decode_required::<S>(key)
    }

    /// Writes the cached raw value under `key`.
    pub fn encode_into<C: EncodeContainer>(&self, container: &mut C, key: &str) {
        container.set_value(key, self.to_scalar());
    }

    /// Returns the timestamp.
    #[must_use]
    pub const fn value(&self) -> Timestamp {
        self.value
    }

    /// Returns the raw value the field is encoded as.
    #[must_use]
    pub const fn raw(&self) -> &S::Raw {
        &self.raw
    }

    /// Returns the raw value as a tagged scalar.
    #[must_use]
    pub fn to_scalar(&self) -> RawScalar {
        self.raw.to_scalar()
    }

    /// Sets the timestamp and re-derives the raw value.
    pub fn set(&mut self, value: Timestamp) {
        *self = Self::new(value);
    }

    /// Sets the timestamp, re-derives the raw value and returns the previous timestamp.
    pub fn replace(&mut self, value: Timestamp) -> Timestamp {
        std::mem::replace(self, Self::new(value)).value
    }

    /// Consumes the field, returning the timestamp.
    #[must_use]
    pub fn into_inner(self) -> Timestamp {
        self.value
    }

    /// Consumes the field, returning the raw value.
    #[must_use]
    pub fn into_raw(self) -> S::Raw {
        self.raw
    }
}

impl<S: DateStrategy> Clone for DateField<S> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            raw: self.raw.clone(),
            _strategy: PhantomData,
        }
    }
}

impl<S: DateStrategy> Debug for DateField<S> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateField")
            .field("strategy", &S::NAME)
            .field("value", &self.value)
            .field("raw", &self.raw)
            .finish()
    }
}

impl<S: DateStrategy> PartialEq for DateField<S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.raw == other.raw
    }
}

impl<S: DateStrategy> Deref for DateField<S> {
    type Target = Timestamp;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

/// Prints the raw value.
impl<S: DateStrategy> Display for DateField<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.raw, f)
    }
}

impl<S: DateStrategy<Raw = String>> FromStr for DateField<S> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s.to_owned())
    }
}

impl<S: DateStrategy> From<Timestamp> for DateField<S> {
    fn from(value: Timestamp) -> Self {
        Self::new(value)
    }
}

impl<S: DateStrategy> From<DateField<S>> for Timestamp {
    fn from(field: DateField<S>) -> Self {
        field.value
    }
}

impl<S: DateStrategy> TryFrom<SystemTime> for DateField<S> {
    type Error = jiff::Error;

    fn try_from(value: SystemTime) -> std::result::Result<Self, Self::Error> {
        Timestamp::try_from(value).map(Self::new)
    }
}

impl<S: DateStrategy> From<DateField<S>> for SystemTime {
    fn from(field: DateField<S>) -> Self {
        field.value.into()
    }
}

impl<S: DateStrategy> Serialize for DateField<S> {
    fn serialize<T>(&self, serializer: T) -> std::result::Result<T::Ok, T::Error>
    where
        T: Serializer,
    {
        self.raw.serialize_raw(serializer)
    }
}

impl<'de, S: DateStrategy> Deserialize<'de> for DateField<S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let scalar = deserializer.deserialize_option(OptionalScalarVisitor)?;

        Self::decode_entry(scalar, None).map_err(de::Error::custom)
    }
}
