//! Console rendering for questions, feedback, and the final report.

use std::io::Write;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizrun_core::answer::format_option_numbers;
use quizrun_core::model::{Question, QuestionBank};
use quizrun_core::report::SessionReport;
use quizrun_core::session::Outcome;

use crate::menu::RunPlan;

const RULE_WIDTH: usize = 80;
const REVIEW_RULE_WIDTH: usize = 50;

fn rule(width: usize, ch: char) -> String {
    ch.to_string().repeat(width)
}

pub fn banner(
    out: &mut impl Write,
    bank: &QuestionBank,
    plan: &RunPlan,
    selected: usize,
) -> Result<()> {
    writeln!(out, "{}", rule(RULE_WIDTH, '='))?;
    writeln!(out, "{}", bank.name.to_uppercase())?;
    writeln!(out, "{}", rule(RULE_WIDTH, '='))?;
    if !bank.description.is_empty() {
        writeln!(out, "{}", bank.description)?;
    }

    let difficulty = plan
        .difficulty
        .map(|d| d.to_string())
        .unwrap_or_else(|| "All levels".to_string());
    writeln!(out, "\nQuiz configuration:")?;
    writeln!(out, "  Total questions: {selected}")?;
    writeln!(out, "  Difficulty filter: {difficulty}")?;
    writeln!(out, "  Time limit: none (take your time!)")?;
    writeln!(out, "\n{}", rule(RULE_WIDTH, '='))?;
    Ok(())
}

pub fn question(out: &mut impl Write, q: &Question, position: usize, total: usize) -> Result<()> {
    writeln!(out, "\n{}", rule(RULE_WIDTH, '='))?;
    writeln!(
        out,
        "Question {position} of {total} | Difficulty: {}",
        q.difficulty.to_string().to_uppercase()
    )?;
    writeln!(out, "{}", rule(RULE_WIDTH, '='))?;
    writeln!(out, "\n{}", q.prompt)?;

    if q.is_multi_select() {
        writeln!(
            out,
            "\n(Select ALL correct answers - separate multiple choices with commas)"
        )?;
    }

    writeln!(out, "\nOptions:")?;
    for (i, option) in q.options.iter().enumerate() {
        writeln!(out, "  {}. {option}", i + 1)?;
    }
    Ok(())
}

pub fn feedback(
    out: &mut impl Write,
    q: &Question,
    outcome: Outcome,
    show_explanation: bool,
) -> Result<()> {
    match outcome {
        Outcome::Correct => writeln!(out, "\nCORRECT!")?,
        Outcome::Incorrect => writeln!(out, "\nINCORRECT!")?,
    }

    if show_explanation {
        if let Some(explanation) = &q.explanation {
            writeln!(out, "\nExplanation: {explanation}")?;
        }
    }

    writeln!(
        out,
        "\nCorrect answer(s): {}",
        format_option_numbers(&q.correct)
    )?;
    Ok(())
}

pub fn report(
    out: &mut impl Write,
    report: &SessionReport,
    show_explanations: bool,
) -> Result<()> {
    writeln!(out, "\n{}", rule(RULE_WIDTH, '='))?;
    writeln!(out, "QUIZ COMPLETE!")?;
    writeln!(out, "{}", rule(RULE_WIDTH, '='))?;

    writeln!(out, "\nFINAL SCORE: {}", report.score_line())?;
    writeln!(out, "\n{}: {}", report.grade, report.grade.message())?;

    if !report.by_difficulty.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Difficulty", "Correct", "Total", "Score"]);
        for (difficulty, stats) in &report.by_difficulty {
            table.add_row(vec![
                Cell::new(difficulty),
                Cell::new(stats.correct),
                Cell::new(stats.total),
                Cell::new(format!("{:.1}%", stats.percentage())),
            ]);
        }
        writeln!(out, "\n{table}")?;
    }

    let elapsed = report.elapsed().num_seconds().max(0);
    writeln!(out, "\nTime taken: {}m {:02}s", elapsed / 60, elapsed % 60)?;

    if !report.missed.is_empty() {
        writeln!(out, "\nINCORRECT ANSWERS TO REVIEW:")?;
        writeln!(out, "{}", rule(REVIEW_RULE_WIDTH, '='))?;

        for miss in &report.missed {
            writeln!(out, "\nQuestion {}: {}", miss.position, miss.question.prompt)?;
            writeln!(
                out,
                "Your answer(s): {}",
                format_option_numbers(&miss.submitted)
            )?;
            writeln!(
                out,
                "Correct answer(s): {}",
                format_option_numbers(&miss.correct)
            )?;
            if show_explanations {
                if let Some(explanation) = &miss.question.explanation {
                    writeln!(out, "Explanation: {explanation}")?;
                }
            }
            writeln!(out, "{}", rule(REVIEW_RULE_WIDTH, '-'))?;
        }
    }

    writeln!(out, "\nWant to retake the quiz? Run quizrun again!")?;
    writeln!(out, "{}", rule(RULE_WIDTH, '='))?;
    Ok(())
}
