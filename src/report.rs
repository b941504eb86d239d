//! Diagnostic side channel between the scanner and its host.
//!
//! The scanner never stops on a malformed lexeme. It hands each problem to a
//! [`Reporter`] and carries on; what to do about it is up to the host.

use std::io::{self, Write};

/// Receives one diagnostic per call. `location` is empty for scan errors.
pub trait Reporter {
    fn report(&mut self, line: usize, location: &str, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str, &str),
{
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self(line, location, message)
    }
}

/// `[line N] Error <location>: <message>`
pub fn format_diagnostic(line: usize, location: &str, message: &str) -> String {
    format!("[line {line}] Error {location}: {message}")
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _line: usize, _location: &str, _message: &str) {}
}

/// Writes each diagnostic as one line to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{}", format_diagnostic(line, location, message)) {
            tracing::warn!(error = %e, "failed to write diagnostic to stderr");
        }
    }
}

/// Keeps formatted diagnostics in memory, in the order they were reported.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    lines: Vec<String>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.lines.push(format_diagnostic(line, location, message));
    }
}
