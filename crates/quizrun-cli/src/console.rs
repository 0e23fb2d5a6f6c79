//! Line-oriented terminal I/O.
//!
//! Generic over reader and writer so the interactive flow can be driven from
//! in-memory buffers in tests.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizrun_core::answer::{parse_answer, AnswerSet};
use quizrun_core::error::QuizError;
use quizrun_core::model::Question;

pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Print `prompt` without a newline and read one trimmed line.
    ///
    /// End of input is reported as `QuizError::UserCancelled`.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::UserCancelled.into());
        }
        Ok(line.trim().to_string())
    }

    /// Wait for the user to press Enter.
    pub fn pause(&mut self, prompt: &str) -> Result<()> {
        self.ask(prompt).map(|_| ())
    }

    /// Keep asking until the user enters a valid answer for `question`.
    pub fn read_answer(&mut self, question: &Question) -> Result<AnswerSet> {
        let prompt = format!("\nYour answer(s) (1-{}): ", question.option_count());
        loop {
            let raw = self.ask(&prompt)?;
            match parse_answer(&raw, question.option_count()).map_err(QuizError::from) {
                Ok(answer) => return Ok(answer),
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(input = %raw, "rejected answer: {e}");
                    writeln!(self.out, "Invalid answer: {e}.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
