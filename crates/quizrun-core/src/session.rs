//! Quiz session state and answer scoring.
//!
//! A session walks its selected questions in order. Each question is scored
//! exactly once through [`QuizSession::record_answer`], which moves the cursor
//! forward; the session is `Completed` once every question has an answer.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answer::AnswerSet;
use crate::error::QuizError;
use crate::model::{Difficulty, Question};
use crate::report::{DifficultyStats, SessionReport};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }
}

/// A question the user got wrong, kept for the end-of-run review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissedQuestion {
    /// 1-based position of the question within the session.
    pub position: usize,
    pub question: Question,
    pub submitted: AnswerSet,
    pub correct: AnswerSet,
}

/// Compare a submitted selection against the question's correct set.
///
/// Order and duplicates in `submitted` do not matter; only exact set equality
/// is `Correct`.
pub fn check_answer<I>(question: &Question, submitted: I) -> Outcome
where
    I: IntoIterator<Item = usize>,
{
    let submitted: AnswerSet = submitted.into_iter().collect();
    if submitted == question.correct {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    }
}

/// One run of the quiz over a fixed list of questions.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    id: Uuid,
    questions: Vec<&'a Question>,
    cursor: usize,
    score: usize,
    missed: Vec<MissedQuestion>,
    per_difficulty: BTreeMap<Difficulty, DifficultyStats>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl<'a> QuizSession<'a> {
    pub fn new(questions: Vec<&'a Question>) -> Self {
        let started_at = Utc::now();
        let finished_at = questions.is_empty().then_some(started_at);
        Self {
            id: Uuid::new_v4(),
            questions,
            cursor: 0,
            score: 0,
            missed: Vec::new(),
            per_difficulty: BTreeMap::new(),
            started_at,
            finished_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        if self.cursor >= self.questions.len() {
            SessionState::Completed
        } else if self.cursor == 0 {
            SessionState::NotStarted
        } else {
            SessionState::InProgress
        }
    }

    /// The question awaiting an answer, if any.
    pub fn current(&self) -> Option<&'a Question> {
        self.questions.get(self.cursor).copied()
    }

    /// 1-based position of the current question.
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    /// Number of questions selected for this session.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.cursor
    }

    pub fn missed(&self) -> &[MissedQuestion] {
        &self.missed
    }

    /// Score `submitted` against the current question and advance.
    pub fn record_answer<I>(&mut self, submitted: I) -> Result<Outcome, QuizError>
    where
        I: IntoIterator<Item = usize>,
    {
        let question = self.current().ok_or(QuizError::SessionComplete)?;
        let position = self.position();
        let submitted: AnswerSet = submitted.into_iter().collect();
        let outcome = check_answer(question, submitted.iter().copied());

        let stats = self.per_difficulty.entry(question.difficulty).or_default();
        stats.total += 1;

        match outcome {
            Outcome::Correct => {
                self.score += 1;
                stats.correct += 1;
            }
            Outcome::Incorrect => self.missed.push(MissedQuestion {
                position,
                question: question.clone(),
                submitted,
                correct: question.correct.clone(),
            }),
        }

        tracing::debug!(
            session = %self.id,
            position,
            ?outcome,
            "recorded answer"
        );

        self.cursor += 1;
        if self.state() == SessionState::Completed {
            self.finished_at = Some(Utc::now());
            tracing::info!(
                session = %self.id,
                score = self.score,
                total = self.questions.len(),
                "session completed"
            );
        }

        Ok(outcome)
    }

    /// Snapshot of the results so far. `total` counts answered questions.
    pub fn report(&self) -> SessionReport {
        SessionReport::new(
            self.id,
            self.score,
            self.answered(),
            self.missed.clone(),
            self.per_difficulty.clone(),
            self.started_at,
            self.finished_at.unwrap_or_else(Utc::now),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], correct: &[usize], difficulty: Difficulty) -> Question {
        Question {
            prompt: format!("Pick {correct:?}"),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct: correct.iter().copied().collect(),
            explanation: Some("Because.".into()),
            difficulty,
        }
    }

    fn abc() -> Question {
        question(&["A", "B", "C"], &[0, 2], Difficulty::Medium)
    }

    #[test]
    fn comparison_ignores_order() {
        let q = abc();
        assert_eq!(check_answer(&q, [2, 0]), check_answer(&q, [0, 2]));
        assert_eq!(check_answer(&q, [2, 0]), Outcome::Correct);
        assert_eq!(check_answer(&q, [2, 0, 2]), Outcome::Correct);
    }

    #[test]
    fn subset_superset_and_disjoint_are_incorrect() {
        let q = question(&["A", "B", "C", "D"], &[0, 2], Difficulty::Hard);
        assert_eq!(check_answer(&q, [0]), Outcome::Incorrect);
        assert_eq!(check_answer(&q, [0, 1, 2]), Outcome::Incorrect);
        assert_eq!(check_answer(&q, [1, 3]), Outcome::Incorrect);
        assert_eq!(check_answer(&q, Vec::new()), Outcome::Incorrect);
    }

    #[test]
    fn correct_answer_scores() {
        let q = abc();
        let mut session = QuizSession::new(vec![&q]);
        assert_eq!(session.state(), SessionState::NotStarted);

        let outcome = session.record_answer([0, 2]).unwrap();
        assert!(outcome.is_correct());

        let report = session.report();
        assert_eq!(report.correct, 1);
        assert_eq!(report.total, 1);
        assert_eq!(report.percentage, 100.0);
        assert!(report.missed.is_empty());
        assert_eq!(session.state(), SessionState::Completed);
    }

    #[test]
    fn incorrect_answer_is_recorded_as_missed() {
        let q = abc();
        let mut session = QuizSession::new(vec![&q]);

        assert_eq!(session.record_answer([0]).unwrap(), Outcome::Incorrect);

        let missed = &session.report().missed;
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].position, 1);
        assert_eq!(missed[0].submitted, AnswerSet::from([0]));
        assert_eq!(missed[0].correct, AnswerSet::from([0, 2]));
        assert_eq!(missed[0].question.prompt, q.prompt);
    }

    #[test]
    fn lifecycle_and_one_answer_per_question() {
        let q1 = abc();
        let q2 = question(&["T", "F"], &[1], Difficulty::Easy);
        let mut session = QuizSession::new(vec![&q1, &q2]);

        assert_eq!(session.current(), Some(&q1));
        session.record_answer([1]).unwrap();
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.position(), 2);
        assert_eq!(session.current(), Some(&q2));

        session.record_answer([1]).unwrap();
        assert_eq!(session.state(), SessionState::Completed);
        assert!(session.current().is_none());
        assert!(matches!(
            session.record_answer([0]),
            Err(QuizError::SessionComplete)
        ));

        assert_eq!(session.score(), 1);
        assert_eq!(session.answered(), 2);
        assert_eq!(session.missed()[0].position, 1);
    }

    #[test]
    fn empty_session_reports_zero_percent() {
        let session = QuizSession::new(Vec::new());
        assert_eq!(session.state(), SessionState::Completed);

        let report = session.report();
        assert_eq!(report.total, 0);
        assert_eq!(report.percentage, 0.0);
    }

    #[test]
    fn per_difficulty_breakdown() {
        let easy = question(&["A", "B"], &[0], Difficulty::Easy);
        let hard = question(&["A", "B"], &[1], Difficulty::Hard);
        let mut session = QuizSession::new(vec![&easy, &hard, &easy]);

        session.record_answer([0]).unwrap();
        session.record_answer([0]).unwrap();
        session.record_answer([1]).unwrap();

        let report = session.report();
        assert_eq!(report.by_difficulty[&Difficulty::Easy].total, 2);
        assert_eq!(report.by_difficulty[&Difficulty::Easy].correct, 1);
        assert_eq!(report.by_difficulty[&Difficulty::Hard].correct, 0);
        assert!(!report.by_difficulty.contains_key(&Difficulty::Medium));
    }
}
