//! Question bank resolution: explicit path, configured path, or the bundled bank.

use std::path::Path;

use anyhow::Result;

use quizrun_core::model::QuestionBank;
use quizrun_core::parser;

/// The bank compiled into the binary.
const BUNDLED_BANK: &str = include_str!("../../../question-banks/mgt-656.toml");

pub fn load(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => parser::load_bank(path),
        None => bundled(),
    }
}

pub fn bundled() -> Result<QuestionBank> {
    parser::parse_bank_str(BUNDLED_BANK, Path::new("mgt-656.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizrun_core::model::Difficulty;

    #[test]
    fn bundled_bank_upholds_invariants() {
        let bank = bundled().unwrap();
        assert_eq!(bank.id, "mgt-656");
        assert!(!bank.is_empty());
        for q in &bank.questions {
            assert!(!q.options.is_empty());
            assert!(!q.correct.is_empty());
            assert!(q.correct.iter().all(|&i| i < q.options.len()));
        }
    }

    #[test]
    fn bundled_bank_covers_every_difficulty() {
        let bank = bundled().unwrap();
        for d in Difficulty::ALL {
            assert!(bank.by_difficulty(d).count() > 0, "no {d} questions");
        }
    }

    #[test]
    fn bundled_bank_validates_clean() {
        let bank = bundled().unwrap();
        let warnings = parser::validate_bank(&bank);
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn bundled_design_sprint_questions_are_distinct() {
        let bank = bundled().unwrap();
        let sprint_goals: Vec<_> = bank
            .questions
            .iter()
            .filter(|q| {
                q.prompt
                    .to_lowercase()
                    .starts_with("what is the primary goal of a design sprint")
            })
            .collect();
        assert_eq!(sprint_goals.len(), 2);
        assert_ne!(
            sprint_goals[0].prompt.to_lowercase(),
            sprint_goals[1].prompt.to_lowercase()
        );
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.toml");
        std::fs::write(
            &path,
            "[bank]\nid = \"tiny\"\nname = \"Tiny\"\n\n[[questions]]\nprompt = \"Q\"\noptions = [\"a\", \"b\"]\ncorrect = [0]\n",
        )
        .unwrap();

        let bank = load(Some(path.as_path())).unwrap();
        assert_eq!(bank.id, "tiny");
        assert!(load(Some(dir.path().join("missing.toml").as_path())).is_err());
    }
}
