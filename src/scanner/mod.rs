pub mod classify;
pub mod lexer;
pub mod token;

use crate::error::ScanError;
use crate::report::{Reporter, SilentReporter};
use lexer::Scanner;
use token::Token;

/// Result of one scan. `tokens` always ends with exactly one EOF token, even
/// when errors were reported.
#[derive(Debug)]
pub struct ScanOutcome {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanOutcome {
    /// True when at least one diagnostic was reported during the scan.
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan source code into a list of tokens, keeping diagnostics only in the
/// returned outcome.
pub fn scan(source: &str) -> ScanOutcome {
    scan_with(source, &mut SilentReporter)
}

/// Scan source code, handing every diagnostic to `reporter` as it happens.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_with(source: &str, reporter: &mut dyn Reporter) -> ScanOutcome {
    Scanner::new(source, reporter).scan_tokens()
}
