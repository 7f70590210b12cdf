use std::io::Write;

use crate::error::Result;
use crate::input::InputProvider;
use crate::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Repeat,
    Exit,
}

const CHOICES: [&str; 2] = ["Continue typing test", "Exit"];

pub fn ask_to_continue<I, W>(input: &mut I, out: &mut W) -> Result<Continuation>
where
    I: InputProvider + ?Sized,
    W: Write + ?Sized,
{
    let idx = prompt::select(input, out, "What would you like to do next?", &CHOICES, 0)?;
    Ok(if idx == 0 {
        Continuation::Repeat
    } else {
        Continuation::Exit
    })
}
