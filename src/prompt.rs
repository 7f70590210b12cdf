use std::io::Write;

use crossterm::style::Stylize;
use itertools::Itertools;
use tracing::debug;

use crate::error::Result;
use crate::input::InputProvider;
use crate::ui::{self, Tone};

/// Validator for free-text answers; `Err` carries the message shown to the user
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// Accepts anything non-empty
pub fn required(answer: &str) -> std::result::Result<(), String> {
    if answer.trim().is_empty() {
        Err("This field cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Resolve a menu answer to a choice index: a 1-based number, the label
/// itself (case-insensitive), or an empty answer for the default.
fn pick(answer: &str, choices: &[&str], default: usize) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(default);
    }
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&n).then(|| n - 1);
    }
    choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(answer))
}

/// Show a numbered list and keep asking until one of the choices is picked.
pub fn select<I, W>(
    input: &mut I,
    out: &mut W,
    message: &str,
    choices: &[&str],
    default: usize,
) -> Result<usize>
where
    I: InputProvider + ?Sized,
    W: Write + ?Sized,
{
    let default = default.min(choices.len().saturating_sub(1));
    let menu = choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            if i == default {
                format!("  {}) {} {}", i + 1, choice, "(default)".dark_grey())
            } else {
                format!("  {}) {}", i + 1, choice)
            }
        })
        .join("\n");

    loop {
        writeln!(out, "{} {}", "?".green(), message.bold())?;
        writeln!(out, "{}", menu)?;
        out.flush()?;

        let answer = input.read_line(&format!("Choose 1-{}:", choices.len()))?;
        match pick(&answer, choices, default) {
            Some(idx) => {
                debug!(menu = message, choice = choices[idx], "menu selection");
                return Ok(idx);
            }
            None => ui::line(
                out,
                Tone::Failure,
                &format!("Please pick a number from 1 to {}.", choices.len()),
            )?,
        }
    }
}

/// Ask for free text, re-prompting with the validator's message until it passes.
/// The answer is trimmed before it is validated.
pub fn ask<I, W>(input: &mut I, out: &mut W, message: &str, validate: Validator) -> Result<String>
where
    I: InputProvider + ?Sized,
    W: Write + ?Sized,
{
    ask_with(input, out, message, validate, true)
}

/// Like [`ask`], but the answer is validated and returned exactly as typed.
pub fn ask_secret<I, W>(
    input: &mut I,
    out: &mut W,
    message: &str,
    validate: Validator,
) -> Result<String>
where
    I: InputProvider + ?Sized,
    W: Write + ?Sized,
{
    ask_with(input, out, message, validate, false)
}

fn ask_with<I, W>(
    input: &mut I,
    out: &mut W,
    message: &str,
    validate: Validator,
    trim: bool,
) -> Result<String>
where
    I: InputProvider + ?Sized,
    W: Write + ?Sized,
{
    loop {
        out.flush()?;
        let line = input.read_line(&format!("{} {}", "?".green(), message))?;
        let answer = if trim { line.trim().to_string() } else { line };
        match validate(&answer) {
            Ok(()) => return Ok(answer),
            Err(reason) => ui::line(out, Tone::Failure, &format!(">> {}", reason))?,
        }
    }
}

/// Wait for Enter; whatever was typed is ignored.
pub fn pause<I, W>(input: &mut I, out: &mut W, message: &str) -> Result<()>
where
    I: InputProvider + ?Sized,
    W: Write + ?Sized,
{
    out.flush()?;
    input.read_line(message)?;
    Ok(())
}
