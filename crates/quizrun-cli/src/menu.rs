//! Startup menu and run presets.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::ValueEnum;

use quizrun_core::model::Difficulty;

use crate::console::Console;

/// Fixed runs offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 50 questions, all difficulties
    Full,
    /// 20 easy questions
    Easy,
    /// 30 medium questions
    Medium,
    /// 25 hard questions
    Hard,
}

/// How many questions to ask and which difficulty to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub count: usize,
    pub difficulty: Option<Difficulty>,
}

impl Preset {
    pub fn plan(self) -> RunPlan {
        let (count, difficulty) = match self {
            Preset::Full => (50, None),
            Preset::Easy => (20, Some(Difficulty::Easy)),
            Preset::Medium => (30, Some(Difficulty::Medium)),
            Preset::Hard => (25, Some(Difficulty::Hard)),
        };
        RunPlan { count, difficulty }
    }
}

const MENU: &str = "\
Quiz options:
1. Take full quiz (50 questions, all difficulties)
2. Take easy quiz (20 questions, easy difficulty)
3. Take medium quiz (30 questions, medium difficulty)
4. Take hard quiz (25 questions, hard difficulty)
5. Custom quiz";

/// Show the menu and read choices until one is valid.
pub fn choose_plan<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<RunPlan> {
    writeln!(console.out(), "{MENU}")?;

    loop {
        let choice = console.ask("\nEnter your choice (1-5): ")?;
        let preset = match choice.as_str() {
            "1" => Preset::Full,
            "2" => Preset::Easy,
            "3" => Preset::Medium,
            "4" => Preset::Hard,
            "5" => return custom_plan(console),
            _ => {
                writeln!(console.out(), "Please enter a number between 1 and 5.")?;
                continue;
            }
        };
        return Ok(preset.plan());
    }
}

/// Prompt for a question count and an optional difficulty.
///
/// A count that is not a positive integer falls back to the full run. The
/// difficulty must be one of the lowercase level names; anything else falls
/// back to all difficulties.
fn custom_plan<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<RunPlan> {
    let raw_count = console.ask("Number of questions (1-100): ")?;
    let count = match raw_count.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            writeln!(console.out(), "Invalid number. Using default settings.")?;
            return Ok(Preset::Full.plan());
        }
    };

    let raw_difficulty =
        console.ask("Difficulty (easy/medium/hard or press Enter for all): ")?;
    let difficulty = match raw_difficulty.as_str() {
        "" => None,
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        other => {
            tracing::warn!(input = other, "unknown difficulty");
            writeln!(console.out(), "Invalid difficulty. Using all difficulties.")?;
            None
        }
    };

    Ok(RunPlan { count, difficulty })
}
