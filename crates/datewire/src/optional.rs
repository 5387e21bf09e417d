// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Debug, Formatter};

use jiff::Timestamp;
use serde_core::de::{self, Deserializer};
use serde_core::{Deserialize, Serialize, Serializer};

use crate::raw::{OptionalScalarVisitor, RawScalar};
use crate::{DateField, DateStrategy, DecodeContainer, EncodeContainer, Result};

/// An optional timestamp field with a fixed wire format `S`.
///
/// Either empty, or a [`DateField<S>`] with both a timestamp and its raw value. A missing key
/// and an explicit null both decode to an empty field without error. An empty field always
/// encodes as an explicit null; the key is never omitted.
///
/// A present value still has to be valid: malformed text or a scalar of the wrong kind fails
/// the decode like it does for [`DateField`].
///
/// Like [`DateField`], deserialization needs a self-describing format such as JSON.
///
/// # Examples
///
/// ```
/// use datewire::{OptionalDateField, Rfc3339};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Shipment {
///     delivered: OptionalDateField<Rfc3339>,
/// }
///
/// let shipment: Shipment = serde_json::from_str("{}")?;
/// assert!(shipment.delivered.is_none());
/// assert_eq!(serde_json::to_string(&shipment)?, r#"{"delivered":null}"#);
///
/// let shipment: Shipment = serde_json::from_str(r#"{"delivered": "1996-12-19T16:39:57-08:00"}"#)?;
/// assert_eq!(shipment.delivered.value().map(|t| t.as_second()), Some(851_042_397));
///
/// serde_json::from_str::<Shipment>(r#"{"delivered": "yesterday"}"#).unwrap_err();
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct OptionalDateField<S: DateStrategy> {
    field: Option<DateField<S>>,
}

impl<S: DateStrategy> OptionalDateField<S> {
    /// Creates a field holding `value`, deriving its raw value if present.
    #[must_use]
    pub fn new(value: Option<Timestamp>) -> Self {
        Self {
            field: value.map(DateField::new),
        }
    }

    /// Creates an empty field.
    #[must_use]
    pub const fn empty() -> Self {
        Self { field: None }
    }

    /// Decodes a field from an optional raw value. `None` yields an empty field.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Malformed`][crate::ErrorKind::Malformed] if `raw` is present and does
    /// not follow the format of `S`.
    pub fn decode(raw: Option<S::Raw>) -> Result<Self> {
        Ok(Self {
            field: raw.map(DateField::decode).transpose()?,
        })
    }

    /// Decodes the value stored under `key`, yielding an empty field when the key is missing or
    /// holds an explicit null.
    ///
    /// # Errors
    ///
    /// Fails like [`DecodeContainer::decode_optional_or_else`].
    pub fn decode_from<C: DecodeContainer>(container: &C, key: &str) -> Result<Self> {
        container.decode_optional_or_else::<S, _>(key, Self::empty)
    }

    /// Writes the cached raw value under `key`, or an explicit null if the field is empty.
    pub fn encode_into<C: EncodeContainer>(&self, container: &mut C, key: &str) {
        match &self.field {
            Some(field) => field.encode_into(container, key),
            None => container.set_null(key),
        }
    }

    /// Returns the timestamp, if any.
    #[must_use]
    pub fn value(&self) -> Option<Timestamp> {
        self.field.as_ref().map(DateField::value)
    }

    /// Returns the raw value the field is encoded as, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&S::Raw> {
        self.field.as_ref().map(DateField::raw)
    }

    /// Returns the raw value as a tagged scalar, if any.
    #[must_use]
    pub fn to_scalar(&self) -> Option<RawScalar> {
        self.field.as_ref().map(DateField::to_scalar)
    }

    /// Returns the inner required field, if any.
    #[must_use]
    pub const fn as_field(&self) -> Option<&DateField<S>> {
        self.field.as_ref()
    }

    /// Sets the timestamp, re-deriving the raw value, or empties the field.
    pub fn set(&mut self, value: Option<Timestamp>) {
        *self = Self::new(value);
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.field = None;
    }

    /// Takes the inner field out, leaving the field empty.
    pub const fn take(&mut self) -> Option<DateField<S>> {
        self.field.take()
    }

    /// Returns `true` if the field holds a timestamp.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        self.field.is_some()
    }

    /// Returns `true` if the field is empty.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.field.is_none()
    }

    /// Consumes the field, returning the inner required field, if any.
    #[must_use]
    pub fn into_field(self) -> Option<DateField<S>> {
        self.field
    }
}

impl<S: DateStrategy> Default for OptionalDateField<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: DateStrategy> Clone for OptionalDateField<S> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
        }
    }
}

impl<S: DateStrategy> Debug for OptionalDateField<S> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionalDateField").field(&self.field).finish()
    }
}

impl<S: DateStrategy> PartialEq for OptionalDateField<S> {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
    }
}

impl<S: DateStrategy> From<Option<Timestamp>> for OptionalDateField<S> {
    fn from(value: Option<Timestamp>) -> Self {
        Self::new(value)
    }
}

impl<S: DateStrategy> From<Timestamp> for OptionalDateField<S> {
    fn from(value: Timestamp) -> Self {
        Self::new(Some(value))
    }
}

impl<S: DateStrategy> From<DateField<S>> for OptionalDateField<S> {
    fn from(field: DateField<S>) -> Self {
        Self { field: Some(field) }
    }
}

impl<S: DateStrategy> From<OptionalDateField<S>> for Option<Timestamp> {
    fn from(field: OptionalDateField<S>) -> Self {
        field.value()
    }
}

impl<S: DateStrategy> Serialize for OptionalDateField<S> {
    fn serialize<T>(&self, serializer: T) -> std::result::Result<T::Ok, T::Error>
    where
        T: Serializer,
    {
        match &self.field {
            Some(field) => serializer.serialize_some(field),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, S: DateStrategy> Deserialize<'de> for OptionalDateField<S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(scalar) = deserializer.deserialize_option(OptionalScalarVisitor)? else {
            return Ok(Self::empty());
        };

        DateField::<S>::decode_entry(Some(scalar), None)
            .map(Self::from)
            .map_err(de::Error::custom)
    }
}
