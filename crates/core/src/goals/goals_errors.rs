use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoalError {
    #[error("Savings goal not found: {0}")]
    NotFound(String),

    #[error("Invalid goal data: {0}")]
    InvalidData(String),

    #[error("Stored goals document is corrupted: {0}")]
    CorruptedDocument(String),
}
