// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Debug, Display, Formatter};

use serde_core::de::{self, Deserializer, Visitor};
use serde_core::{Deserialize, Serialize, Serializer};

/// The kind of scalar a [`DateStrategy`][crate::DateStrategy] reads from and writes to the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// A character string, e.g. `"1996-12-19"`.
    Text,

    /// A signed floating-point number, e.g. `851042397.0`.
    Number,
}

impl Display for RawKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Number => f.write_str("number"),
        }
    }
}

/// A scalar exchanged with a container, tagged with its [`RawKind`].
///
/// # Serialization
///
/// `Text` is serialized as a string. `Number` is serialized as an integer when it is finite,
/// whole and fits into `i64`, and as a float otherwise, so `851042397.0` is written as
/// `851042397`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawScalar {
    /// A text scalar.
    Text(String),

    /// A numeric scalar.
    Number(f64),
}

impl RawScalar {
    /// Returns the kind of this scalar.
    #[must_use]
    pub const fn kind(&self) -> RawKind {
        match self {
            Self::Text(_) => RawKind::Text,
            Self::Number(_) => RawKind::Number,
        }
    }
}

impl Display for RawScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<String> for RawScalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RawScalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for RawScalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl Serialize for RawScalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(number) => serialize_number(*number, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RawScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for f64 {}
}

/// A Rust type that holds a raw wire value of one [`RawKind`].
///
/// Implemented for [`String`] (text) and [`f64`] (number). This trait is sealed.
pub trait RawValue: private::Sealed + Debug + Display + Clone + PartialEq + Send + Sync + 'static {
    /// The kind of scalar this type holds.
    const KIND: RawKind;

    /// Converts a tagged scalar into this type, handing the scalar back if its kind differs.
    ///
    /// # Errors
    ///
    /// Returns the original scalar when it is not of kind [`Self::KIND`].
    fn from_scalar(scalar: RawScalar) -> Result<Self, RawScalar>;

    /// Converts this value into a tagged scalar.
    fn to_scalar(&self) -> RawScalar;

    /// Serializes this value the same way the equivalent [`RawScalar`] would be serialized.
    ///
    /// # Errors
    ///
    /// Returns whatever error the serializer reports.
    fn serialize_raw<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;
}

impl RawValue for String {
    const KIND: RawKind = RawKind::Text;

    fn from_scalar(scalar: RawScalar) -> Result<Self, RawScalar> {
        match scalar {
            RawScalar::Text(text) => Ok(text),
            other @ RawScalar::Number(_) => Err(other),
        }
    }

    fn to_scalar(&self) -> RawScalar {
        RawScalar::Text(self.clone())
    }

    fn serialize_raw<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }
}

impl RawValue for f64 {
    const KIND: RawKind = RawKind::Number;

    fn from_scalar(scalar: RawScalar) -> Result<Self, RawScalar> {
        match scalar {
            RawScalar::Number(number) => Ok(number),
            other @ RawScalar::Text(_) => Err(other),
        }
    }

    fn to_scalar(&self) -> RawScalar {
        RawScalar::Number(*self)
    }

    fn serialize_raw<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(*self, serializer)
    }
}

/// Returns `number` as an `i64` if it is finite, whole and in range.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "the value is checked to be whole and within the i64 range before the cast"
)]
pub(crate) fn as_whole_number(number: f64) -> Option<i64> {
    // 2^63 is exactly representable, everything below it converts without saturation.
    const LIMIT: f64 = i64::MAX as f64;

    (number.is_finite() && number.fract() == 0.0 && (-LIMIT..LIMIT).contains(&number)).then_some(number as i64)
}

fn serialize_number<S: Serializer>(number: f64, serializer: S) -> Result<S::Ok, S::Error> {
    match as_whole_number(number) {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_f64(number),
    }
}

/// Accepts an optional text or numeric scalar.
///
/// `None` stands for an explicit null or, when driven through `deserialize_option` by a
/// derived `Deserialize`, for a missing key.
pub(crate) struct OptionalScalarVisitor;

impl<'de> Visitor<'de> for OptionalScalarVisitor {
    type Value = Option<RawScalar>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a date as text, a number or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor).map(Some)
    }

    // Formats without a native option forward straight to the scalar.

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        ScalarVisitor.visit_str(v).map(Some)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        ScalarVisitor.visit_string(v).map(Some)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        ScalarVisitor.visit_f64(v).map(Some)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        ScalarVisitor.visit_i64(v).map(Some)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        ScalarVisitor.visit_u64(v).map(Some)
    }
}

struct ScalarVisitor;

impl Visitor<'_> for ScalarVisitor {
    type Value = RawScalar;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a date as text or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RawScalar::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(RawScalar::Text(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(RawScalar::Number(v))
    }

    #[expect(clippy::cast_precision_loss, reason = "numeric timestamps are carried as f64")]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(RawScalar::Number(v as f64))
    }

    #[expect(clippy::cast_precision_loss, reason = "numeric timestamps are carried as f64")]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(RawScalar::Number(v as f64))
    }
}
