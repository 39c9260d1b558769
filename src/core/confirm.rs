//! Confirmation gate for destructive operations

use std::io::{self, BufRead, Write};

/// Prompt shown before every product is deleted
pub const DELETE_ALL_PROMPT: &str =
    "This will DELETE ALL PRODUCTS from your database. Are you sure? (yes/no): ";

/// Answers a yes/no question. Anything but an explicit yes is a no.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationProvider {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// `yes` or `y`, any case, surrounding whitespace ignored
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "yes" || answer == "y"
}

/// Prompts on a writer and blocks on one line from a reader
pub struct TerminalConfirmation<R, W> {
    input: R,
    output: W,
}

impl TerminalConfirmation<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout and read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConfirmation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmationProvider for TerminalConfirmation<R, W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        // End of input reads zero bytes and leaves `answer` empty
        self.input.read_line(&mut answer)?;

        Ok(is_affirmative(&answer))
    }
}

/// Fixed answer, for non-interactive runs (`--yes`)
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl ConfirmationProvider for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}
