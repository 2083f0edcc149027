//! Line-oriented terminal prompts
//!
//! A [`Prompter`] owns an input and an output so the same code drives
//! the real terminal and scripted input in tests.

use crate::constants::{NOT_AN_OPTION, NOT_A_NUMBER, PROMPT};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before an answer was given")]
    InputClosed,
    #[error("nothing to select from")]
    NoChoices,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// **Asks the user to pick one of `choices`.**
    ///
    /// Accepts the 1-based position or the label itself, ignoring case.
    /// Returns the 0-based index of the chosen item.
    pub fn select<S: AsRef<str>>(
        &mut self,
        message: &str,
        choices: &[S],
    ) -> Result<usize, PromptError> {
        if choices.is_empty() {
            return Err(PromptError::NoChoices);
        }

        loop {
            writeln!(self.output, "{message}")?;
            for (i, choice) in choices.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, choice.as_ref())?;
            }

            let line = self.read_answer()?;
            match parse_selection(&line, choices) {
                Some(index) => return Ok(index),
                None => {
                    debug!("Rejected selection {:?}", line);
                    writeln!(self.output, "{NOT_AN_OPTION}")?;
                }
            }
        }
    }

    /// **Asks for a number, re-prompting until the answer parses.**
    pub fn input_number(&mut self, message: &str) -> Result<f64, PromptError> {
        loop {
            writeln!(self.output, "{message}")?;
            let line = self.read_answer()?;
            match parse_number(&line) {
                Some(value) => return Ok(value),
                None => {
                    debug!("Rejected amount {:?}", line);
                    writeln!(self.output, "{NOT_A_NUMBER}")?;
                }
            }
        }
    }

    /// Writes a line of program output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }
}

fn parse_selection<S: AsRef<str>>(answer: &str, choices: &[S]) -> Option<usize> {
    if let Ok(position) = answer.parse::<usize>() {
        return (1..=choices.len())
            .contains(&position)
            .then(|| position - 1);
    }

    choices
        .iter()
        .position(|choice| choice.as_ref().eq_ignore_ascii_case(answer))
}

/// Only finite numbers are amounts
fn parse_number(answer: &str) -> Option<f64> {
    answer.parse::<f64>().ok().filter(|value| value.is_finite())
}
