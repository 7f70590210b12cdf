// Library surface for the binary and for headless/integration tests.
pub mod accounts;
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod continuation;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod prompt;
pub mod score;
pub mod session;
pub mod ui;
pub mod warmup;

pub use error::{DrillError, Result};
