use crate::domain::AppError;

/// Port for asking the user a single line of input.
pub trait CredentialPrompt {
    /// Show `question` and block until a line is entered.
    ///
    /// The answer is returned without validation; empty answers are allowed.
    fn ask(&self, question: &str) -> Result<String, AppError>;
}
