//! Question bank parser.
//!
//! Loads banks from TOML (or JSON) files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::QuizError;
use crate::model::{Difficulty, Question, QuestionBank};

/// Intermediate structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct RawBankFile {
    bank: RawBankHeader,
    #[serde(default)]
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    prompt: String,
    options: Vec<String>,
    correct: Vec<usize>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
}

/// Parse a single bank file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse bank file contents. `source_path` picks the format (`.json` is read
/// as JSON, anything else as TOML) and names the source in errors.
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let is_json = source_path.extension().is_some_and(|ext| ext == "json");
    let parsed: RawBankFile = if is_json {
        serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?
    } else {
        toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?
    };

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| build_question(index + 1, q))
        .collect::<Result<Vec<_>, QuizError>>()
        .with_context(|| format!("invalid question bank: {}", source_path.display()))?;

    tracing::info!(
        bank = %parsed.bank.id,
        questions = questions.len(),
        "loaded question bank from {}",
        source_path.display()
    );

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions,
    })
}

fn build_question(index: usize, raw: RawQuestion) -> Result<Question, QuizError> {
    let difficulty = raw
        .difficulty
        .map(|d| d.parse::<Difficulty>())
        .transpose()
        .map_err(|reason| QuizError::InvalidQuestion { index, reason })?
        .unwrap_or_default();

    let question = Question {
        prompt: raw.prompt,
        options: raw.options,
        correct: raw.correct.into_iter().collect(),
        explanation: raw.explanation.filter(|e| !e.trim().is_empty()),
        difficulty,
    };

    question
        .check_invariants()
        .map_err(|reason| QuizError::InvalidQuestion { index, reason })?;

    Ok(question)
}

/// Recursively load all `.toml` and `.json` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path
            .extension()
            .is_some_and(|ext| ext == "toml" || ext == "json")
        {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// Load a bank from a file, or merge every bank found under a directory.
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    if !path.is_dir() {
        return parse_bank(path);
    }

    let banks = load_bank_directory(path)?;
    anyhow::ensure!(
        !banks.is_empty(),
        "no question banks found in {}",
        path.display()
    );
    Ok(merge_banks(banks))
}

/// Concatenate several banks into one, keeping the first bank's header.
pub fn merge_banks(banks: Vec<QuestionBank>) -> QuestionBank {
    let mut iter = banks.into_iter();
    let Some(mut merged) = iter.next() else {
        return QuestionBank {
            id: "empty".into(),
            name: "Empty".into(),
            description: String::new(),
            questions: Vec::new(),
        };
    };

    for bank in iter {
        merged.id = format!("{}+{}", merged.id, bank.id);
        merged.questions.extend(bank.questions);
    }
    merged
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number, if the warning is about one question.
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for issues that do not prevent loading.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "bank has no questions".into(),
        });
    }

    let mut seen_prompts = HashSet::new();
    for (i, q) in bank.questions.iter().enumerate() {
        let number = Some(i + 1);
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question: number,
                message,
            })
        };

        if q.prompt.trim().is_empty() {
            warn("prompt is empty".into());
        } else if !seen_prompts.insert(q.prompt.trim().to_lowercase()) {
            warn(format!("duplicate prompt: {}", q.prompt.trim()));
        }

        if q.options.len() < 2 {
            warn("fewer than two options".into());
        }

        if q.options.iter().any(|o| o.trim().is_empty()) {
            warn("has an empty option".into());
        }

        let distinct: HashSet<_> = q.options.iter().map(|o| o.trim().to_lowercase()).collect();
        if distinct.len() != q.options.len() {
            warn("has duplicate options".into());
        }

        if q.prompt.to_lowercase().contains("select all") && !q.is_multi_select() {
            warn("asks to select all but has a single correct option".into());
        }
    }

    warnings
}
