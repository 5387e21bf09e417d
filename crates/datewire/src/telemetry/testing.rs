// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! In-memory capture of decode events for tests.

use std::io::Write;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

/// Collects the formatted events of a thread-local subscriber, one event per line.
///
/// ```ignore
/// let capture = LogCapture::new();
/// let _guard = tracing::subscriber::set_default(capture.subscriber());
/// ```
#[derive(Debug, Clone, Default)]
pub(crate) struct LogCapture {
    events: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber that formats every event, without colors, into this capture.
    #[must_use]
    pub fn subscriber(&self) -> impl tracing::Subscriber {
        tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_writer(self.clone()).with_ansi(false))
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.events.lock().unwrap())
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Asserts that one event line holds every fragment.
    pub fn assert_logged(&self, fragments: &[&str]) {
        let lines = self.lines();

        assert!(
            lines.iter().any(|line| fragments.iter().all(|fragment| line.contains(fragment))),
            "no event holds all of {fragments:?}, captured:\n{}",
            lines.join("\n")
        );
    }

    /// Asserts that no event line holds `fragment`.
    pub fn assert_not_logged(&self, fragment: &str) {
        let lines = self.lines();

        assert!(
            lines.iter().all(|line| !line.contains(fragment)),
            "an event holds {fragment:?}, captured:\n{}",
            lines.join("\n")
        );
    }

    pub fn assert_silent(&self) {
        let lines = self.lines();
        assert!(lines.is_empty(), "expected no events, captured:\n{}", lines.join("\n"));
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter(Arc::clone(&self.events))
    }
}

pub(crate) struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
