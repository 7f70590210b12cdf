use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::clock::{Clock, Deadline, MonotonicClock};
use crate::input::{InputProvider, ReadError};
use crate::session::SessionConfig;

/// Outcome of one timed run; produced once, consumed once by scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub elapsed_millis: u64,
    pub submitted_text: String,
    pub completed_before_deadline: bool,
}

impl SessionResult {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_millis as f64 / 1000.0
    }
}

/// Races submitted lines against the session deadline.
///
/// Lines are appended (with a separating space) to a transcript that is
/// compared as a whole against the reference text, so the text may be typed
/// across several submissions. The first of "transcript matches" and
/// "deadline passed" decides the result; nothing is read after that.
///
/// The wait itself is bounded in real time, so `C` must advance at the rate
/// of the wall clock; it exists to pin where time is read, not to fake it.
#[derive(Debug)]
pub struct TypingSession<'a, C: Clock = MonotonicClock> {
    reference_text: &'a str,
    time_limit: Duration,
    clock: C,
}

impl<'a> TypingSession<'a, MonotonicClock> {
    pub fn new(config: &'a SessionConfig) -> Self {
        Self::with_clock(&config.reference_text, config.time_limit(), MonotonicClock)
    }
}

impl<'a, C: Clock> TypingSession<'a, C> {
    pub fn with_clock(reference_text: &'a str, time_limit: Duration, clock: C) -> Self {
        Self {
            reference_text,
            time_limit,
            clock,
        }
    }

    pub fn prompt(&self) -> String {
        format!("Sample Text: {}\n\nType here:", self.reference_text)
    }

    pub fn run<I: InputProvider + ?Sized>(&self, input: &mut I) -> SessionResult {
        let deadline = Deadline::arm(&self.clock, self.time_limit);
        let prompt = self.prompt();
        let mut transcript = String::new();

        info!(
            time_limit_ms = self.time_limit.as_millis() as u64,
            "typing session started"
        );

        loop {
            match input.read_line_timeout(&prompt, deadline.remaining(&self.clock)) {
                Ok(line) => {
                    transcript.push_str(&line);
                    transcript.push(' ');
                    if transcript.trim() == self.reference_text {
                        return self.finish(deadline.elapsed(&self.clock), &transcript, true);
                    }
                    debug!(chars = transcript.len(), "transcript does not match yet");
                }
                Err(ReadError::TimedOut) => {
                    return self.finish(self.time_limit, &transcript, false);
                }
                Err(ReadError::Closed) => {
                    // no more lines can arrive; the deadline still decides
                    debug!("input closed mid-session, waiting out the deadline");
                    if !deadline.is_expired(&self.clock) {
                        thread::sleep(deadline.remaining(&self.clock));
                    }
                    return self.finish(self.time_limit, &transcript, false);
                }
            }
        }
    }

    fn finish(&self, elapsed: Duration, transcript: &str, completed: bool) -> SessionResult {
        let result = SessionResult {
            elapsed_millis: elapsed.as_millis() as u64,
            submitted_text: transcript.trim().to_string(),
            completed_before_deadline: completed,
        };
        info!(
            elapsed_ms = result.elapsed_millis,
            completed, "typing session finished"
        );
        result
    }
}
