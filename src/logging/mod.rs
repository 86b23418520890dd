//! Diagnostic output. Messages are accumulated into a Report and forwarded
//! to the tracing subscriber in one piece when emitted.

use std::fmt;

use tracing::Level;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message under construction.
#[derive(Debug)]
pub struct Report {
    severity: Severity,
    buffer: String,
}

impl Report {
    pub fn new(severity: Severity) -> Report {
        Report {
            severity,
            buffer: String::new(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn text(&self) -> &str {
        self.buffer
            .trim_end()
    }

    /// Send the accumulated text to the log, consuming the report.
    pub fn emit(self) {
        let text = self.text();
        if text.is_empty() {
            return;
        }

        match self.severity {
            Severity::Info => tracing::info!("{}", text),
            Severity::Warning => tracing::warn!("{}", text),
            Severity::Error => tracing::error!("{}", text),
        }
    }
}

impl fmt::Write for Report {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer
            .push_str(s);
        Ok(())
    }
}

/// Compose a message with the given closure and emit it when the closure
/// returns, whatever the closure's outcome. Returns the emitted text.
pub fn scoped<F>(severity: Severity, compose: F) -> String
where
    F: FnOnce(&mut Report) -> fmt::Result,
{
    let mut report = Report::new(severity);

    // a formatting failure still emits whatever was written so far
    let _ = compose(&mut report);

    let text = report
        .text()
        .to_string();
    report.emit();
    text
}

pub fn info<F>(compose: F) -> String
where
    F: FnOnce(&mut Report) -> fmt::Result,
{
    scoped(Severity::Info, compose)
}

pub fn warning<F>(compose: F) -> String
where
    F: FnOnce(&mut Report) -> fmt::Result,
{
    scoped(Severity::Warning, compose)
}

pub fn error<F>(compose: F) -> String
where
    F: FnOnce(&mut Report) -> fmt::Result,
{
    scoped(Severity::Error, compose)
}

/// Install the process wide subscriber, writing to stderr.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
