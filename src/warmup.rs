use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::input::InputProvider;
use crate::ui::{self, Tone};

pub const WARMUP_PHRASE: &str = "asdf jkl;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarmupOutcome {
    pub passed: bool,
}

/// Exact match after trimming the surrounding whitespace
pub fn check(typed: &str) -> WarmupOutcome {
    WarmupOutcome {
        passed: typed.trim() == WARMUP_PHRASE,
    }
}

/// Show the home-row phrase and read exactly one line.
pub fn run_warmup<I, W>(input: &mut I, out: &mut W) -> Result<WarmupOutcome>
where
    I: InputProvider + ?Sized,
    W: Write + ?Sized,
{
    ui::line(out, Tone::Highlight, &format!("\"{}\"", WARMUP_PHRASE))?;
    ui::blank(out)?;
    out.flush()?;

    let typed = input.read_line("Type here:")?;
    let outcome = check(&typed);

    if outcome.passed {
        ui::blank(out)?;
        ui::line(out, Tone::Success, "Warm-up complete!")?;
    } else {
        ui::blank(out)?;
        ui::line(
            out,
            Tone::Failure,
            "Your input did not match the warm-up text. Please try again.",
        )?;
    }
    info!(passed = outcome.passed, "warm-up checked");

    Ok(outcome)
}
