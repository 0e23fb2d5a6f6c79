//! Core data model types for quizrun.
//!
//! These are the types the rest of the system uses to represent questions,
//! difficulty levels, and question banks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the user.
    pub prompt: String,
    /// Answer options in presentation order.
    pub options: Vec<String>,
    /// Zero-based indices into `options` that make up the correct answer.
    pub correct: BTreeSet<usize>,
    /// Shown after the question is answered and in the final review.
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Question {
    /// Whether more than one option must be selected.
    pub fn is_multi_select(&self) -> bool {
        self.correct.len() > 1
    }

    /// Number of options the user can choose from.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Check the model invariants: options and correct set are non-empty and
    /// every correct index points at an option.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.options.is_empty() {
            return Err("has no options".into());
        }
        if self.correct.is_empty() {
            return Err("has no correct option".into());
        }
        if let Some(&bad) = self.correct.iter().find(|&&i| i >= self.options.len()) {
            return Err(format!(
                "correct index {bad} is out of range for {} options",
                self.options.len()
            ));
        }
        Ok(())
    }
}

/// Difficulty tag attached to every question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A named collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Questions tagged with `difficulty`, in bank order.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.difficulty == difficulty)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
