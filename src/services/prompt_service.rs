//! User confirmation prompts for linkdeck.
//!
//! Destructive operations (playlist delete, link delete, note delete) are
//! gated behind a blocking confirmation. The prompt is a port so each
//! frontend supplies its own dialog: the RPC frontend runs a modal and
//! forwards the answer, the console binary asks on stdin, tests use a fixed
//! answer. A declined prompt aborts the operation with no state mutated.

use std::io::{self, BufRead, Write};

/// Trait defining the confirmation prompt port.
pub trait PromptServiceTrait {
    /// Asks the user to confirm a destructive action. `false` aborts it.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt with a fixed answer, used by tests and by frontends that have
/// already shown their own dialog.
pub struct StaticPrompt {
    answer: bool,
}

impl StaticPrompt {
    pub fn approving() -> Self {
        Self { answer: true }
    }

    pub fn declining() -> Self {
        Self { answer: false }
    }
}

impl PromptServiceTrait for StaticPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }
}

/// Interactive y/N prompt on stdin/stdout for the console binary.
pub struct ConsolePrompt;

impl PromptServiceTrait for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => matches!(line.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}
