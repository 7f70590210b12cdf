use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};
use unicode_width::UnicodeWidthStr;

const TITLE: &str = "Typing Test";
const TAGLINE: &str = "Improve your WPM speed with our free online typing tests.";

/// How a line of output should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Info,
    Success,
    Failure,
    Muted,
    Highlight,
}

fn styled(tone: Tone, text: &str) -> StyledContent<&str> {
    match tone {
        Tone::Heading => text.green().bold(),
        Tone::Info => text.blue(),
        Tone::Success => text.green(),
        Tone::Failure => text.red(),
        Tone::Muted => text.grey(),
        Tone::Highlight => text.yellow(),
    }
}

pub fn line<W: Write + ?Sized>(out: &mut W, tone: Tone, text: &str) -> io::Result<()> {
    writeln!(out, "{}", styled(tone, text))
}

pub fn blank<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)
}

pub fn banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let spaced = TITLE
        .chars()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let rule = "═".repeat(spaced.width());

    writeln!(out, "{}", rule.as_str().yellow())?;
    writeln!(out, "{}", spaced.as_str().yellow().bold())?;
    writeln!(out, "{}", rule.as_str().yellow())?;
    line(out, Tone::Heading, TAGLINE)
}
