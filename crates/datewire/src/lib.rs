// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::unreadable_literal,
        reason = "allow these lints in tests to improve the readability of the tests"
    )
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Field wrappers that carry a timestamp through serialized records using a
//! per-field wire representation.
//!
//! A record field is declared as [`DateField<S>`] or [`OptionalDateField<S>`], where `S` is a
//! [`DateStrategy`] that fixes the wire format of that field. The program always works with a
//! [`jiff::Timestamp`], while the serialized form is whatever the strategy says it is:
//!
//! - [`Iso8601`] - `1996-12-19T16:39:57-08:00`
//! - [`Iso8601Fractional`] - `1996-12-19T16:39:57.538-08:00`
//! - [`Rfc2822`] - `Fri, 27 Dec 2019 22:43:52 -0000`
//! - [`Rfc3339`] - `1996-12-19T16:39:57-08:00`
//! - [`YearMonthDay`] - `1996-12-19`
//! - [`UnixTimestamp`] - `851042397.0`
//! - [`ReferenceTimestamp`] - `604548113.0`, seconds since `2001-01-01T00:00:00Z`
//!
//! # Raw values
//!
//! Each field keeps the raw value it was decoded from next to the timestamp. Encoding a field
//! writes that raw value back untouched, so formatting details that the strategy does not
//! normalize (such as the spelling of a UTC offset) survive a decode/encode round trip. Setting
//! a new timestamp re-derives the raw value immediately.
//!
//! ```
//! use datewire::{DateField, Rfc2822};
//!
//! let mut field: DateField<Rfc2822> = "Fri, 27 Dec 2019 22:43:52 GMT".parse()?;
//! assert_eq!(field.value().as_second(), 1_577_486_632);
//! assert_eq!(field.raw(), "Fri, 27 Dec 2019 22:43:52 GMT");
//!
//! field.set(jiff::Timestamp::from_second(0)?);
//! assert_eq!(field.raw(), "Thu, 1 Jan 1970 00:00:00 GMT");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Required and optional fields
//!
//! [`DateField`] refuses to decode from an explicit null or a missing key. [`OptionalDateField`]
//! treats both as "no value" and always encodes an empty value as an explicit null.
//!
//! ```
//! use datewire::{DateField, OptionalDateField, UnixTimestamp, YearMonthDay};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Invoice {
//!     issued: DateField<YearMonthDay>,
//!     paid: OptionalDateField<UnixTimestamp>,
//! }
//!
//! let invoice: Invoice = serde_json::from_str(r#"{"issued": "1996-12-19"}"#)?;
//! assert!(invoice.paid.is_none());
//! assert_eq!(
//!     serde_json::to_string(&invoice)?,
//!     r#"{"issued":"1996-12-19","paid":null}"#
//! );
//!
//! serde_json::from_str::<Invoice>(r#"{"paid": 0}"#).unwrap_err();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Custom formats
//!
//! A new wire format is one [`DateStrategy`] implementation. Numeric timestamps with a
//! different zero point only need an [`Epoch`]:
//!
//! ```
//! use datewire::{DateField, Epoch, EpochSeconds};
//! use jiff::Timestamp;
//!
//! struct GpsEpoch;
//!
//! impl Epoch for GpsEpoch {
//!     const NAME: &'static str = "GpsTimestamp";
//!     const ORIGIN: Timestamp = Timestamp::constant(315_964_800, 0);
//! }
//!
//! let field = DateField::<EpochSeconds<GpsEpoch>>::decode(10.0)?;
//! assert_eq!(field.value().as_second(), 315_964_810);
//! # Ok::<(), datewire::Error>(())
//! ```
//!
//! # Features
//!
//! - **`json`** - Implements [`DecodeContainer`] and [`EncodeContainer`] for
//!   `serde_json::Map<String, serde_json::Value>`.
//! - **`logs`** - Emits a `tracing` event named `datewire.decode` whenever a field fails to
//!   decode.

mod container;
mod error;
mod field;
mod grammar;
mod optional;
mod raw;
mod strategies;
mod strategy;
mod telemetry;

pub use container::{DecodeContainer, EncodeContainer};
pub use error::{Error, ErrorKind, Result};
pub use field::DateField;
pub use optional::OptionalDateField;
pub use raw::{RawKind, RawScalar, RawValue};
pub use strategies::{
    Epoch, EpochSeconds, Iso8601, Iso8601Fractional, ReferenceEpoch, ReferenceTimestamp, Rfc2822, Rfc3339, UnixEpoch,
    UnixTimestamp, YearMonthDay,
};
pub use strategy::DateStrategy;
