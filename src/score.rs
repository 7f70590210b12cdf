use std::fmt;
use std::io::Write;

use crate::engine::SessionResult;
use crate::ui::{self, Tone};

/// Elapsed time is never taken as less than this when computing WPM
pub const MIN_ELAPSED_MILLIS: u64 = 1;

/// Number of non-empty whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Words per minute over `elapsed_millis`, floored at [`MIN_ELAPSED_MILLIS`]
pub fn wpm(words: usize, elapsed_millis: u64) -> f64 {
    let minutes = elapsed_millis.max(MIN_ELAPSED_MILLIS) as f64 / 60_000.0;
    words as f64 / minutes
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub matched: bool,
    pub completed_before_deadline: bool,
    pub elapsed_secs: f64,
    pub word_count: usize,
    pub wpm: f64,
    pub submitted_text: String,
    pub reference_text: String,
}

pub fn score(result: &SessionResult, reference_text: &str) -> ScoreReport {
    let words = word_count(&result.submitted_text);
    ScoreReport {
        matched: result.submitted_text == reference_text,
        completed_before_deadline: result.completed_before_deadline,
        elapsed_secs: result.elapsed_secs(),
        word_count: words,
        wpm: wpm(words, result.elapsed_millis),
        submitted_text: result.submitted_text.clone(),
        reference_text: reference_text.to_string(),
    }
}

impl ScoreReport {
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        ui::blank(out)?;
        if self.matched {
            ui::line(
                out,
                Tone::Success,
                &format!(
                    "You typed the text correctly in {:.2} seconds.",
                    self.elapsed_secs
                ),
            )?;
            ui::line(
                out,
                Tone::Success,
                &format!("Your typing speed is {:.2} words per minute.", self.wpm),
            )?;
        } else {
            ui::line(out, Tone::Failure, "Your input did not match the sample text.")?;
            ui::line(
                out,
                Tone::Failure,
                &format!("You typed: \"{}\"", self.submitted_text),
            )?;
            ui::line(
                out,
                Tone::Failure,
                &format!("Expected: \"{}\"", self.reference_text),
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | WPM: {:.2} | Words: {} | Elapsed Time: {:.2}s",
            if self.matched { "matched" } else { "mismatch" },
            self.wpm,
            self.word_count,
            self.elapsed_secs
        )
    }
}
