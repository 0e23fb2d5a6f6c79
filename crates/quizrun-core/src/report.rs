//! End-of-session report and grade bands.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Difficulty;
use crate::session::MissedQuestion;

/// Immutable summary of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    /// Questions answered with exactly the correct set.
    pub correct: usize,
    /// Questions answered.
    pub total: usize,
    /// `correct / total * 100`, or 0 when nothing was answered.
    pub percentage: f64,
    pub grade: Grade,
    /// Misses in the order they happened.
    pub missed: Vec<MissedQuestion>,
    pub by_difficulty: BTreeMap<Difficulty, DifficultyStats>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Correct/total counts for one difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyStats {
    pub correct: usize,
    pub total: usize,
}

impl DifficultyStats {
    pub fn percentage(&self) -> f64 {
        percentage(self.correct, self.total)
    }
}

impl SessionReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session_id: Uuid,
        correct: usize,
        total: usize,
        missed: Vec<MissedQuestion>,
        by_difficulty: BTreeMap<Difficulty, DifficultyStats>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let percentage = percentage(correct, total);
        Self {
            session_id,
            correct,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
            missed,
            by_difficulty,
            started_at,
            finished_at,
        }
    }

    /// Score line in the form `X/Y (Z.Z%)`.
    pub fn score_line(&self) -> String {
        format!("{}/{} ({:.1}%)", self.correct, self.total, self.percentage)
    }

    /// Wall-clock time between session creation and the last answer.
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// `correct / total * 100`, defined as 0 for an empty total.
pub fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

/// Qualitative band derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    NeedsWork,
    Fair,
    Good,
    Great,
    Excellent,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage {
            p if p >= 90.0 => Grade::Excellent,
            p if p >= 80.0 => Grade::Great,
            p if p >= 70.0 => Grade::Good,
            p if p >= 60.0 => Grade::Fair,
            _ => Grade::NeedsWork,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! You're well prepared.",
            Grade::Great => "Great job! Keep up the good work!",
            Grade::Good => "Good work. Review the missed questions to close the gaps.",
            Grade::Fair => "Fair effort. Review the incorrect answers to improve.",
            Grade::NeedsWork => "Keep studying! Review the material and try again.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Excellent => write!(f, "Excellent"),
            Grade::Great => write!(f, "Great"),
            Grade::Good => write!(f, "Good"),
            Grade::Fair => write!(f, "Fair"),
            Grade::NeedsWork => write!(f, "Needs work"),
        }
    }
}
