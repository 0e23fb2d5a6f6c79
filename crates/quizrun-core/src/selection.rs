//! Random question selection.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{Difficulty, Question, QuestionBank};

/// Draw up to `count` distinct questions from `bank` in random order.
///
/// With a `difficulty`, only matching questions are eligible. An empty pool is
/// `EmptySelection`; a `count` larger than the pool is clamped to the pool size.
pub fn select<'a, R>(
    bank: &'a QuestionBank,
    count: usize,
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> Result<Vec<&'a Question>, QuizError>
where
    R: Rng + ?Sized,
{
    let mut pool: Vec<&Question> = match difficulty {
        Some(d) => bank.by_difficulty(d).collect(),
        None => bank.questions.iter().collect(),
    };

    if pool.is_empty() {
        return Err(QuizError::empty_selection(difficulty));
    }

    let take = count.min(pool.len());
    if take < count {
        tracing::debug!(
            requested = count,
            available = pool.len(),
            "clamping question count to pool size"
        );
    }

    let (chosen, _) = pool.partial_shuffle(rng, take);
    let chosen = chosen.to_vec();

    tracing::debug!(selected = chosen.len(), ?difficulty, "selected questions");
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn bank_with(difficulties: &[Difficulty]) -> QuestionBank {
        QuestionBank {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            questions: difficulties
                .iter()
                .enumerate()
                .map(|(i, &difficulty)| Question {
                    prompt: format!("Question {i}"),
                    options: vec!["A".into(), "B".into()],
                    correct: [0].into_iter().collect(),
                    explanation: None,
                    difficulty,
                })
                .collect(),
        }
    }

    #[test]
    fn returns_min_of_count_and_bank_size() {
        let bank = bank_with(&[Difficulty::Easy; 10]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(select(&bank, 4, None, &mut rng).unwrap().len(), 4);
        assert_eq!(select(&bank, 10, None, &mut rng).unwrap().len(), 10);
        assert_eq!(select(&bank, 25, None, &mut rng).unwrap().len(), 10);
        assert!(select(&bank, 0, None, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn five_from_three_returns_three() {
        let bank = bank_with(&[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = select(&bank, 5, None, &mut rng).unwrap();
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn no_duplicates_and_all_from_bank() {
        let bank = bank_with(&[Difficulty::Medium; 30]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select(&bank, 15, None, &mut rng).unwrap();
            let prompts: HashSet<_> = picked.iter().map(|q| q.prompt.as_str()).collect();
            assert_eq!(prompts.len(), 15);
            assert!(picked
                .iter()
                .all(|q| bank.questions.iter().any(|b| std::ptr::eq(b, *q))));
        }
    }

    #[test]
    fn difficulty_filter_applies() {
        let bank = bank_with(&[
            Difficulty::Easy,
            Difficulty::Hard,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Easy,
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let picked = select(&bank, 10, Some(Difficulty::Hard), &mut rng).unwrap();
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|q| q.difficulty == Difficulty::Hard));
    }

    #[test]
    fn empty_filtered_pool_is_an_error() {
        let bank = bank_with(&[Difficulty::Easy, Difficulty::Medium]);
        let mut rng = StdRng::seed_from_u64(3);
        let err = select(&bank, 5, Some(Difficulty::Hard), &mut rng).unwrap_err();
        assert!(matches!(err, QuizError::EmptySelection { .. }));
    }

    #[test]
    fn empty_bank_is_an_error() {
        let bank = bank_with(&[]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            select(&bank, 5, None, &mut rng),
            Err(QuizError::EmptySelection { .. })
        ));
    }

    #[test]
    fn same_seed_same_selection() {
        let bank = bank_with(&[Difficulty::Medium; 50]);
        let prompts = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            select(&bank, 10, None, &mut rng)
                .unwrap()
                .iter()
                .map(|q| q.prompt.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(prompts(42), prompts(42));
    }

    #[test]
    fn presentation_order_is_shuffled() {
        let bank = bank_with(&[Difficulty::Medium; 20]);
        let in_bank_order = (0..20)
            .map(|i| format!("Question {i}"))
            .collect::<Vec<_>>();
        let shuffled = (0..10).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let order: Vec<_> = select(&bank, 20, None, &mut rng)
                .unwrap()
                .iter()
                .map(|q| q.prompt.clone())
                .collect();
            order != in_bank_order
        });
        assert!(shuffled);
    }
}
