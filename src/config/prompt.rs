//! Operator prompts for the first-run bootstrap.

use std::io::{self, BufRead, Write};

/// Source of answers for interactively collected configuration fields.
///
/// Production uses [`StdinPrompter`]; tests supply canned answers.
pub trait Prompter {
    /// Shows `label` to the operator and returns the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the answer cannot be read (including EOF).
    fn ask(&mut self, label: &str) -> io::Result<String>;
}

/// Prompts on stdout and reads answers line by line from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{label}: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before an answer was given",
            ));
        }

        Ok(line.trim().to_string())
    }
}
