//! Quiz error types.
//!
//! Only `InvalidInput` is recoverable inside a session (the console re-prompts).
//! The others abort the run or the bank load.

use thiserror::Error;

use crate::model::Difficulty;

/// Errors that can occur while loading a bank or running a session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// An answer string could not be turned into a set of option indices.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// No questions matched the requested filter.
    #[error("no questions found for {filter}")]
    EmptySelection { filter: String },

    /// The user interrupted the run or closed input.
    #[error("quiz cancelled")]
    UserCancelled,

    /// Every question in the session already has an answer.
    #[error("session already completed")]
    SessionComplete,

    /// A question in a bank file breaks the model invariants. `index` is 1-based.
    #[error("question {index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// Why a raw answer string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("please enter an answer")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{number} is out of range, enter numbers between 1 and {max}")]
    OutOfRange { number: String, max: usize },
}

impl QuizError {
    /// Build an `EmptySelection` for an optional difficulty filter.
    pub fn empty_selection(difficulty: Option<Difficulty>) -> Self {
        let filter = match difficulty {
            Some(d) => format!("difficulty level: {d}"),
            None => "an empty question bank".to_string(),
        };
        QuizError::EmptySelection { filter }
    }

    /// Returns `true` if the console should re-prompt instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuizError::InvalidInput(_))
    }
}
