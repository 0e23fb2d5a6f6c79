//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizrun_core::parser;

use crate::bank;

pub fn execute(bank_path: Option<PathBuf>) -> Result<()> {
    let banks = match &bank_path {
        Some(path) if path.is_dir() => parser::load_bank_directory(path)?,
        Some(path) => vec![parser::parse_bank(path)?],
        None => vec![bank::bundled()?],
    };

    anyhow::ensure!(!banks.is_empty(), "no question banks found");

    let mut total_warnings = 0;

    for bank in &banks {
        println!("Question bank: {} ({} questions)", bank.name, bank.len());

        let warnings = parser::validate_bank(bank);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [question {n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
