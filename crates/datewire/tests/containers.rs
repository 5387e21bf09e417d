// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(feature = "json")]

//! Integration tests for decoding and encoding through `serde_json` objects using only public API.

use datewire::{
    DateField, DecodeContainer, EncodeContainer, ErrorKind, OptionalDateField, RawScalar, ReferenceTimestamp, Rfc2822,
    UnixTimestamp, YearMonthDay,
};
use jiff::Timestamp;
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    serde_json::from_value(value).unwrap()
}

#[derive(Debug)]
struct Account {
    opened: DateField<YearMonthDay>,
    last_login: OptionalDateField<UnixTimestamp>,
    closed: OptionalDateField<Rfc2822>,
}

impl Account {
    fn decode(map: &Map<String, Value>) -> datewire::Result<Self> {
        Ok(Self {
            opened: DateField::decode_from(map, "opened")?,
            last_login: OptionalDateField::decode_from(map, "last_login")?,
            closed: OptionalDateField::decode_from(map, "closed")?,
        })
    }

    fn encode(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.opened.encode_into(&mut map, "opened");
        self.last_login.encode_into(&mut map, "last_login");
        self.closed.encode_into(&mut map, "closed");
        map
    }
}

#[test]
fn decode_and_encode_record() {
    let map = object(json!({
        "opened": "1996-12-19",
        "last_login": 851042397,
        "closed": null,
    }));

    let account = Account::decode(&map).unwrap();

    assert_eq!(account.opened.value().as_second(), 850_953_600);
    assert_eq!(account.last_login.value().map(Timestamp::as_second), Some(851_042_397));
    assert!(account.closed.is_none());
    assert_eq!(account.encode(), map);
}

#[test]
fn missing_optional_key_is_encoded_as_null() {
    let map = object(json!({"opened": "1996-12-19"}));

    let account = Account::decode(&map).unwrap();

    assert_eq!(
        Value::Object(account.encode()),
        json!({"opened": "1996-12-19", "last_login": null, "closed": null})
    );
}

#[test]
fn missing_required_key_names_the_field() {
    let map = object(json!({"last_login": 1}));

    let error = Account::decode(&map).unwrap_err();

    assert!(matches!(
        error.kind(),
        ErrorKind::MissingRequiredValue { field: Some(field), .. } if field == "opened"
    ));
    assert_eq!(
        error.to_string(),
        "missing required YearMonthDay date value for field `opened`"
    );
}

#[test]
fn optional_default_thunk_only_for_missing_key() {
    let fallback = || OptionalDateField::<ReferenceTimestamp>::from(Timestamp::UNIX_EPOCH);

    let missing = object(json!({}));
    let field = missing.decode_optional_or_else("synced", fallback).unwrap();
    assert_eq!(field.value(), Some(Timestamp::UNIX_EPOCH));

    let present = object(json!({"synced": 604548113}));
    let field = present.decode_optional_or_else("synced", fallback).unwrap();
    assert_eq!(field.value().map(Timestamp::as_second), Some(1_582_855_313));
}

#[test]
fn wrong_kind_in_optional_fails() {
    let map = object(json!({"opened": "1996-12-19", "last_login": "yesterday"}));

    let error = Account::decode(&map).unwrap_err();

    assert!(matches!(error.kind(), ErrorKind::WrongRawKind { .. }));
}

/// A container that stores scalars only, to check the traits work outside of JSON.
#[derive(Default)]
struct Scalars(Vec<(String, Option<RawScalar>)>);

impl DecodeContainer for Scalars {
    fn get_value(&self, key: &str) -> Option<RawScalar> {
        self.0.iter().find(|(k, _)| k == key).and_then(|(_, v)| v.clone())
    }

    fn key_exists(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    fn is_explicit_null(&self, key: &str) -> bool {
        self.0.iter().any(|(k, v)| k == key && v.is_none())
    }
}

impl EncodeContainer for Scalars {
    fn set_value(&mut self, key: &str, value: RawScalar) {
        self.0.retain(|(k, _)| k != key);
        self.0.push((key.to_owned(), Some(value)));
    }

    fn set_null(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
        self.0.push((key.to_owned(), None));
    }
}

#[test]
fn custom_container() {
    let mut scalars = Scalars::default();

    DateField::<Rfc2822>::new(Timestamp::UNIX_EPOCH).encode_into(&mut scalars, "sent");
    OptionalDateField::<Rfc2822>::empty().encode_into(&mut scalars, "read");

    assert_eq!(
        scalars.get_value("sent"),
        Some(RawScalar::from("Thu, 1 Jan 1970 00:00:00 GMT"))
    );
    assert!(scalars.is_explicit_null("read"));

    let sent = DateField::<Rfc2822>::decode_from(&scalars, "sent").unwrap();
    assert_eq!(sent.value(), Timestamp::UNIX_EPOCH);

    let read = OptionalDateField::<Rfc2822>::decode_from(&scalars, "read").unwrap();
    assert!(read.is_none());

    let error = DateField::<Rfc2822>::decode_from(&scalars, "read").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::MissingRequiredValue { .. }));
}
