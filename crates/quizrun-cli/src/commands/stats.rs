//! The `quizrun stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizrun_core::model::{Difficulty, Question, QuestionBank};

use crate::bank;

pub fn execute(bank_path: Option<PathBuf>) -> Result<()> {
    let bank = bank::load(bank_path.as_deref())?;

    println!("Question bank: {} ({})", bank.name, bank.id);
    println!("{}", stats_table(&bank));

    Ok(())
}

fn stats_table(bank: &QuestionBank) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Difficulty", "Questions", "Single-select", "Multi-select"]);

    for difficulty in Difficulty::ALL {
        let (single, multi) = split_by_kind(bank.by_difficulty(difficulty));
        table.add_row(vec![
            Cell::new(difficulty),
            Cell::new(single + multi),
            Cell::new(single),
            Cell::new(multi),
        ]);
    }

    let (single, multi) = split_by_kind(bank.questions.iter());
    table.add_row(vec![
        Cell::new("total"),
        Cell::new(single + multi),
        Cell::new(single),
        Cell::new(multi),
    ]);

    table
}

fn split_by_kind<'a>(
    questions: impl Iterator<Item = &'a Question>,
) -> (usize, usize) {
    questions.fold((0, 0), |(single, multi), q| {
        if q.is_multi_select() {
            (single, multi + 1)
        } else {
            (single + 1, multi)
        }
    })
}
