//! Terminal notice rendering.

use std::time::Duration;

use headfake_core::traits::{Notifier, NoticePosition};

/// Renders notices as stderr lines.
///
/// A terminal has no transient overlay, so the duration and position hints
/// are recorded at debug level and the message is simply printed. Stderr
/// keeps notices out of any piped game output.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn show(&self, message: &str, duration: Duration, position: NoticePosition) {
        tracing::debug!(?duration, ?position, "notice");
        eprintln!("{message}");
    }
}
