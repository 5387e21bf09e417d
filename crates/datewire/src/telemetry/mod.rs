// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Structured events for decode failures.
//!
//! When the `logs` feature is enabled, every failed field decode emits one `tracing` event
//! named `datewire.decode` at `DEBUG` level. Without the feature this module compiles to nothing.

use crate::Error;

#[cfg(test)]
pub(crate) mod testing;

/// Reports a failed decode of a field using `strategy`.
///
/// `field` is the container key, when the caller knows it.
#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "events are only emitted with the logs feature")
)]
pub(crate) fn decode_failed(strategy: &'static str, field: Option<&str>, error: &Error) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "datewire.decode",
        tracing::Level::DEBUG,
        strategy.name = strategy,
        error.kind = error.label(),
        field.name = field,
        error.message = %error,
    );
}
