use clap::Parser;
use std::{error::Error, io, path::PathBuf};
use tracing::info;

use wpm_drill::{
    app::App,
    app_dirs::AppDirs,
    config::FileConfigStore,
    history::ResultLog,
    input::StdinInput,
    logging,
};

/// timed typing drill: warm up, race the clock, get your words per minute
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Sign up or log in, pick a duration and a difficulty, pass the warm-up, \
                  then type the sample text before the time runs out."
)]
pub struct Cli {
    /// test duration ("30 seconds", "1 minute" or "2 minutes"); skips the menu
    #[clap(short = 'd', long)]
    duration: Option<String>,

    /// test difficulty ("Basic sentences", "Random words" or "Technical text"); skips the menu
    #[clap(short = 'l', long = "difficulty")]
    difficulty: Option<String>,

    /// configuration file to read defaults from and remember choices in
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// do not append results to the history file
    #[clap(long)]
    no_history: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_path) = AppDirs::log_path() {
        // the drill works fine without a log
        let _ = logging::init(&log_path);
    }

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let history = if cli.no_history {
        None
    } else {
        AppDirs::history_path().map(ResultLog::with_path)
    };
    info!(config = %store.path().display(), history = history.is_some(), "starting");

    let mut app = App::new(store, history);
    app.preset_duration = cli.duration;
    app.preset_difficulty = cli.difficulty;

    let mut input = StdinInput::new();
    let mut stdout = io::stdout();
    app.run(&mut input, &mut stdout)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_presets() {
        let cli = Cli::parse_from([
            "wpm-drill",
            "--duration",
            "2 minutes",
            "-l",
            "Random words",
            "--no-history",
        ]);
        assert_eq!(cli.duration.as_deref(), Some("2 minutes"));
        assert_eq!(cli.difficulty.as_deref(), Some("Random words"));
        assert!(cli.no_history);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wpm-drill"]);
        assert!(cli.duration.is_none());
        assert!(cli.difficulty.is_none());
        assert!(!cli.no_history);
    }
}
