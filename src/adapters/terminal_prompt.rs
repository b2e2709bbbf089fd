use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use console::Term;
use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::CredentialPrompt;

/// Prompts on the controlling terminal, or reads lines from piped stdin.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialPrompt for TerminalPrompt {
    fn ask(&self, question: &str) -> Result<String, AppError> {
        let term = Term::stdout();
        if use_interactive_input(io::stdin().is_terminal(), term.is_term()) {
            return match Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text_on(&term)
            {
                Ok(value) => Ok(value),
                Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                    Err(AppError::Prompt(format!("{} (interrupted)", question)))
                }
                Err(err) => Err(AppError::Prompt(err.to_string())),
            };
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        read_answer(&mut stdin.lock(), &mut stdout.lock(), question)
    }
}

/// Interactive input draws on stdout, so both ends must be a terminal.
/// Redirecting stderr does not matter.
fn use_interactive_input(stdin_is_tty: bool, stdout_is_tty: bool) -> bool {
    stdin_is_tty && stdout_is_tty
}

/// Print `question` and read one line from `input`.
pub(crate) fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, AppError> {
    write!(output, "{}: ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Prompt(format!("input closed before answering '{}'", question)));
    }

    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(trimmed.to_string())
}
