// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::DateStrategy;
use crate::raw::{RawKind, RawValue};

/// The result type for fallible operations that use the [`Error`] type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur when decoding a date field.
///
/// Use [`Error::kind`] to find out what went wrong:
///
/// * [`ErrorKind::Malformed`] - the raw value does not follow the grammar of the strategy.
/// * [`ErrorKind::MissingRequiredValue`] - a required field was absent or null.
/// * [`ErrorKind::WrongRawKind`] - a number was found where text was expected, or vice versa.
///
/// Decoding is deterministic, so none of these errors is worth retrying.
///
/// # Examples
///
/// ```
/// use datewire::{DateField, ErrorKind, Iso8601};
///
/// let error = "invalid date".parse::<DateField<Iso8601>>().unwrap_err();
/// assert!(matches!(error.kind(), ErrorKind::Malformed { .. }));
/// ```
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] ErrorKind);

/// The reason a date field failed to decode.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The raw value does not match the grammar of the strategy.
    #[error("invalid {strategy} date format: {raw}")]
    Malformed {
        /// Name of the strategy that rejected the value.
        strategy: &'static str,
        /// Description of the rejected raw value.
        raw: String,
        /// The underlying calendar error, when the grammar matched but the value did not.
        #[source]
        source: Option<jiff::Error>,
    },

    /// A required field was absent or explicitly null.
    #[error("missing required {strategy} date value{}", field_suffix(.field.as_deref()))]
    MissingRequiredValue {
        /// Name of the strategy of the field.
        strategy: &'static str,
        /// Name of the field, when known.
        field: Option<String>,
    },

    /// The container returned a scalar of a kind the strategy does not accept.
    #[error("invalid {strategy} date: expected {expected}, found {found}")]
    WrongRawKind {
        /// Name of the strategy of the field.
        strategy: &'static str,
        /// The raw kind the strategy reads.
        expected: RawKind,
        /// Description of what was found instead.
        found: String,
    },
}

impl Error {
    /// Returns the reason for this error.
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Creates an [`ErrorKind::Malformed`] error for a raw value that strategy `S` rejects.
    ///
    /// This is meant for custom [`DateStrategy`] implementations.
    #[must_use]
    pub fn malformed<S: DateStrategy>(raw: &S::Raw) -> Self {
        Self(ErrorKind::Malformed {
            strategy: S::NAME,
            raw: raw.to_scalar().to_string(),
            source: None,
        })
    }

    pub(crate) fn malformed_with<S: DateStrategy>(raw: &S::Raw, source: jiff::Error) -> Self {
        Self(ErrorKind::Malformed {
            strategy: S::NAME,
            raw: raw.to_scalar().to_string(),
            source: Some(source),
        })
    }

    pub(crate) fn missing_required_value(strategy: &'static str, field: Option<&str>) -> Self {
        Self(ErrorKind::MissingRequiredValue {
            strategy,
            field: field.map(str::to_owned),
        })
    }

    pub(crate) fn wrong_raw_kind(strategy: &'static str, expected: RawKind, found: impl ToString) -> Self {
        Self(ErrorKind::WrongRawKind {
            strategy,
            expected,
            found: found.to_string(),
        })
    }

    /// Short, stable label of the error kind, used in telemetry.
    #[cfg(any(feature = "logs", test))]
    pub(crate) const fn label(&self) -> &'static str {
        match &self.0 {
            ErrorKind::Malformed { .. } => "malformed",
            ErrorKind::MissingRequiredValue { .. } => "missing_required_value",
            ErrorKind::WrongRawKind { .. } => "wrong_raw_kind",
        }
    }
}

fn field_suffix(field: Option<&str>) -> String {
    field.map(|name| format!(" for field `{name}`")).unwrap_or_default()
}
