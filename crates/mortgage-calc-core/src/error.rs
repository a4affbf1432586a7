use thiserror::Error;

/// One or more loan inputs broke their rules.
///
/// Every violated rule is reported, not just the first, so a caller can show
/// the user everything wrong with their input in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join("\n"))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Human-readable messages, in the order the rules were checked.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// `Ok(())` when nothing was collected, otherwise an error carrying
    /// everything that was.
    pub fn check(messages: Vec<String>) -> Result<(), ValidationError> {
        if messages.is_empty() {
            Ok(())
        } else {
            Err(Self::new(messages))
        }
    }
}

#[derive(Debug, Error)]
pub enum MortgageCalcError {
    #[error("Invalid loan terms:\n{0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MortgageCalcError {
    fn from(e: serde_json::Error) -> Self {
        MortgageCalcError::SerializationError(e.to_string())
    }
}
