use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("no line was submitted before the timeout")]
    TimedOut,
    #[error("input closed")]
    Closed,
}

/// Source of submitted lines (one per Enter press)
pub trait InputProvider {
    /// Show `prompt` and block until a line is submitted.
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError>;

    /// Show `prompt` and wait at most `timeout` for a line.
    /// A zero timeout still returns a line that was already submitted.
    fn read_line_timeout(&mut self, prompt: &str, timeout: Duration) -> Result<String, ReadError>;
}

fn recv_with_timeout(rx: &Receiver<String>, timeout: Duration) -> Result<String, ReadError> {
    match rx.recv_timeout(timeout) {
        Ok(line) => Ok(line),
        Err(RecvTimeoutError::Timeout) => Err(ReadError::TimedOut),
        Err(RecvTimeoutError::Disconnected) => Err(ReadError::Closed),
    }
}

/// Production input reading lines from stdin.
///
/// A reader thread forwards every submitted line over a channel so callers
/// can stop waiting without abandoning a blocked `read`. A line submitted
/// after its caller gave up is handed to the next prompt.
pub struct StdinInput {
    rx: Receiver<String>,
}

impl StdinInput {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        Self { rx }
    }

    fn show(prompt: &str) {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{} ", prompt);
        let _ = stdout.flush();
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        Self::show(prompt);
        self.rx.recv().map_err(|_| ReadError::Closed)
    }

    fn read_line_timeout(&mut self, prompt: &str, timeout: Duration) -> Result<String, ReadError> {
        Self::show(prompt);
        recv_with_timeout(&self.rx, timeout)
    }
}

/// Input fed by the caller, for tests and headless runs.
///
/// Every prompt shown is recorded so tests can check what was asked and how
/// many reads were requested.
pub struct ScriptedInput {
    rx: Receiver<String>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(rx: Receiver<String>) -> Self {
        Self {
            rx,
            prompts: Vec::new(),
        }
    }

    /// All lines are available up front; input is closed once they run out.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            // receiver is alive until the end of this function
            let _ = tx.send(line.into());
        }
        Self::new(rx)
    }

    /// Drains the lines that were never read.
    pub fn remaining(&self) -> Vec<String> {
        self.rx.try_iter().collect()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        self.prompts.push(prompt.to_string());
        self.rx.recv().map_err(|_| ReadError::Closed)
    }

    fn read_line_timeout(&mut self, prompt: &str, timeout: Duration) -> Result<String, ReadError> {
        self.prompts.push(prompt.to_string());
        recv_with_timeout(&self.rx, timeout)
    }
}
