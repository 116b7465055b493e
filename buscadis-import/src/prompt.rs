//! The single yes/no gate before an import writes anything.

use std::io;

/// Asks the operator to approve a batch.
pub trait Prompter {
    /// Show `message` and return whether the operator approved.
    fn confirm(&mut self, message: &str) -> io::Result<bool>;
}

/// Approves (or rejects) every prompt without asking. Useful for tests and
/// non-interactive callers.
pub struct FixedAnswer(pub bool);

impl Prompter for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}
