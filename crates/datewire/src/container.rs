// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Keyed access to a record for decoding and encoding date fields without `serde`.

use crate::raw::{RawScalar, RawValue};
use crate::{DateField, DateStrategy, Error, OptionalDateField, Result, telemetry};

/// Description used when a key holds something that is neither text nor a number.
const UNSUPPORTED_VALUE: &str = "a value that is neither text nor a number";

/// Read access to a keyed record, such as a JSON object.
///
/// Implementors answer three questions about a key; the provided methods build the decoding
/// rules for required and optional fields on top of them.
pub trait DecodeContainer {
    /// Returns the scalar stored under `key`.
    ///
    /// Returns `None` when the key is missing, holds an explicit null or holds a value that is
    /// neither text nor a number.
    fn get_value(&self, key: &str) -> Option<RawScalar>;

    /// Returns `true` if `key` is present, even if its value is null.
    fn key_exists(&self, key: &str) -> bool;

    /// Returns `true` if `key` is present and holds an explicit null.
    fn is_explicit_null(&self, key: &str) -> bool;

    /// Decodes a required field stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::MissingRequiredValue`][crate::ErrorKind::MissingRequiredValue] if the key is
    ///   missing or null.
    /// - [`ErrorKind::WrongRawKind`][crate::ErrorKind::WrongRawKind] if the value is not of the
    ///   kind `S` reads.
    /// - [`ErrorKind::Malformed`][crate::ErrorKind::Malformed] if the value does not follow the
    ///   format of `S`.
    fn decode_required<S: DateStrategy>(&self, key: &str) -> Result<DateField<S>> {
        let scalar = self.get_value(key);

        if scalar.is_none() && self.key_exists(key) && !self.is_explicit_null(key) {
            return Err(unsupported_value::<S>(key));
        }

        DateField::<S>::decode_entry(scalar, Some(key))
    }

    /// Decodes an optional field stored under `key`.
    ///
    /// A missing key yields `default()`. An explicit null yields an empty field.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::WrongRawKind`][crate::ErrorKind::WrongRawKind] if the value is not of the
    ///   kind `S` reads.
    /// - [`ErrorKind::Malformed`][crate::ErrorKind::Malformed] if the value does not follow the
    ///   format of `S`.
    fn decode_optional_or_else<S, F>(&self, key: &str, default: F) -> Result<OptionalDateField<S>>
    where
        S: DateStrategy,
        F: FnOnce() -> OptionalDateField<S>,
    {
        if !self.key_exists(key) {
            return Ok(default());
        }

        if self.is_explicit_null(key) {
            return Ok(OptionalDateField::empty());
        }

        match self.get_value(key) {
            Some(scalar) => DateField::<S>::decode_entry(Some(scalar), Some(key)).map(OptionalDateField::from),
            None => Err(unsupported_value::<S>(key)),
        }
    }
}

/// Write access to a keyed record, such as a JSON object.
pub trait EncodeContainer {
    /// Stores `value` under `key`, replacing any previous value.
    fn set_value(&mut self, key: &str, value: RawScalar);

    /// Stores an explicit null under `key`, replacing any previous value.
    fn set_null(&mut self, key: &str);
}

fn unsupported_value<S: DateStrategy>(key: &str) -> Error {
    let error = Error::wrong_raw_kind(S::NAME, S::Raw::KIND, UNSUPPORTED_VALUE);
    telemetry::decode_failed(S::NAME, Some(key), &error);
    error
}

#[cfg(any(feature = "json", test))]
mod json {
    use serde_json::{Map, Number, Value};

    use super::{DecodeContainer, EncodeContainer};
    use crate::raw::{RawScalar, as_whole_number};

    impl DecodeContainer for Map<String, Value> {
        fn get_value(&self, key: &str) -> Option<RawScalar> {
            match self.get(key)? {
                Value::String(text) => Some(RawScalar::Text(text.clone())),
                Value::Number(number) => number.as_f64().map(RawScalar::Number),
                Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
            }
        }

        fn key_exists(&self, key: &str) -> bool {
            self.contains_key(key)
        }

        fn is_explicit_null(&self, key: &str) -> bool {
            self.get(key).is_some_and(Value::is_null)
        }
    }

    impl EncodeContainer for Map<String, Value> {
        fn set_value(&mut self, key: &str, value: RawScalar) {
            let value = match value {
                RawScalar::Text(text) => Value::String(text),
                RawScalar::Number(number) => match as_whole_number(number) {
                    Some(whole) => Value::from(whole),
                    None => Number::from_f64(number).map_or(Value::Null, Value::Number),
                },
            };

            self.insert(key.to_owned(), value);
        }

        fn set_null(&mut self, key: &str) {
            self.insert(key.to_owned(), Value::Null);
        }
    }
}
