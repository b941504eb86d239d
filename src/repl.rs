use std::io::{self, Write};

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::render::{self, Format};
use crate::report::{Reporter, StderrReporter};
use crate::scanner;

const PROMPT: &str = "> ";

/// Run the interactive REPL. Each line is scanned on its own, so an error on
/// one line never carries over to the next.
pub fn run_repl(format: Format) -> Result<()> {
    let mut editor = DefaultEditor::new().context("initialize line editor")?;
    let mut reporter = StderrReporter;
    let mut stdout = io::stdout();

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue, // Ctrl-C clears the line
            Err(ReadlineError::Eof) => break,            // Ctrl-D
            Err(e) => return Err(e).context("read line"),
        };

        if !line.trim().is_empty() {
            if let Err(e) = editor.add_history_entry(line.as_str()) {
                tracing::debug!(error = %e, "history entry not recorded");
            }
        }

        let output = scan_line(&line, format, &mut reporter)?;
        stdout
            .write_all(output.as_bytes())
            .and_then(|()| stdout.flush())
            .context("write tokens to stdout")?;
    }

    Ok(())
}

/// Scan one line of input and render its tokens.
pub fn scan_line(line: &str, format: Format, reporter: &mut dyn Reporter) -> Result<String> {
    let outcome = scanner::scan_with(line, reporter);
    render::render(&outcome.tokens, format).context("render tokens")
}
