//! The `quizrun play` command.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quizrun_core::model::QuestionBank;
use quizrun_core::report::SessionReport;
use quizrun_core::selection::select;
use quizrun_core::session::QuizSession;

use crate::config::{load_config_from, QuizrunConfig};
use crate::console::Console;
use crate::menu::{choose_plan, RunPlan};
use crate::{bank, render, PlayArgs};

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let bank_path = args.bank.or_else(|| config.bank.clone());
    let bank = bank::load(bank_path.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "seeding question selection");
    let mut rng = StdRng::seed_from_u64(seed);

    // Stdout stays unlocked between writes so the Ctrl-C handler can print.
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    writeln!(console.out(), "Welcome to quizrun: {}", bank.name)?;
    writeln!(console.out(), "{}", "=".repeat(40))?;

    let plan = match args.preset {
        Some(preset) => preset.plan(),
        None => choose_plan(&mut console)?,
    };

    run(&mut console, &bank, plan, &config, &mut rng)?;
    Ok(())
}

/// Select questions for `plan`, ask each one, and print the final report.
pub fn run<R, W, G>(
    console: &mut Console<R, W>,
    bank: &QuestionBank,
    plan: RunPlan,
    config: &QuizrunConfig,
    rng: &mut G,
) -> Result<SessionReport>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let questions = select(bank, plan.count, plan.difficulty, rng)?;
    let mut session = QuizSession::new(questions);
    tracing::info!(
        session = %session.id(),
        questions = session.len(),
        difficulty = ?plan.difficulty,
        "starting quiz"
    );

    render::banner(console.out(), bank, &plan, session.len())?;
    console.pause("Press Enter to start the quiz...")?;

    while let Some(question) = session.current() {
        render::question(console.out(), question, session.position(), session.len())?;
        let answer = console.read_answer(question)?;
        let outcome = session.record_answer(answer)?;
        render::feedback(console.out(), question, outcome, config.show_explanations)?;

        if config.pause_after_answer {
            console.pause("\nPress Enter to continue...")?;
        }
    }

    let report = session.report();
    render::report(console.out(), &report, config.show_explanations)?;
    Ok(report)
}
