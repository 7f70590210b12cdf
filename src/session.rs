use std::io::Write;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::Result;
use crate::input::InputProvider;
use crate::prompt;

/// Test length offered in the duration menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TestDuration {
    #[strum(to_string = "30 seconds")]
    HalfMinute,
    #[strum(to_string = "1 minute")]
    OneMinute,
    #[strum(to_string = "2 minutes")]
    TwoMinutes,
}

impl TestDuration {
    pub const ALL: [TestDuration; 3] = [Self::HalfMinute, Self::OneMinute, Self::TwoMinutes];

    /// Unknown labels fall back to one minute.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|d| d.to_string() == label)
            .unwrap_or_else(|| {
                warn!(label, "unknown duration label, using 1 minute");
                Self::OneMinute
            })
    }

    pub fn seconds(self) -> u64 {
        match self {
            Self::HalfMinute => 30,
            Self::OneMinute => 60,
            Self::TwoMinutes => 120,
        }
    }
}

/// Which reference text to type
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Difficulty {
    #[strum(to_string = "Basic sentences")]
    BasicSentences,
    #[strum(to_string = "Random words")]
    RandomWords,
    #[strum(to_string = "Technical text")]
    TechnicalText,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Self::BasicSentences,
        Self::RandomWords,
        Self::TechnicalText,
    ];

    /// Unknown labels fall back to basic sentences.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|d| d.to_string() == label)
            .unwrap_or_else(|| {
                warn!(label, "unknown difficulty label, using basic sentences");
                Self::BasicSentences
            })
    }

    pub fn reference_text(self) -> &'static str {
        match self {
            Self::BasicSentences => "The quick brown fox jumps over the lazy dog",
            Self::RandomWords => "Lorem ipsum dolor sit amet consectetur adipiscing elit",
            Self::TechnicalText => "Asynchronous programming is a form of parallel programming",
        }
    }
}

/// Everything one timed run needs; fixed once resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub duration_secs: u64,
    pub reference_text: String,
    pub duration: TestDuration,
    pub difficulty: Difficulty,
}

impl SessionConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

/// Map menu labels to a session. Never fails: unknown labels take the defaults.
pub fn resolve(duration_label: &str, difficulty_label: &str) -> SessionConfig {
    let duration = TestDuration::from_label(duration_label);
    let difficulty = Difficulty::from_label(difficulty_label);
    SessionConfig {
        duration_secs: duration.seconds(),
        reference_text: difficulty.reference_text().to_string(),
        duration,
        difficulty,
    }
}

/// Asks for duration and difficulty (unless preset) and resolves them.
#[derive(Debug, Clone, Default)]
pub struct SessionConfigurator {
    pub preset_duration: Option<String>,
    pub preset_difficulty: Option<String>,
    pub default_duration: String,
    pub default_difficulty: String,
}

fn default_index(choices: &[String], label: &str) -> usize {
    choices.iter().position(|c| c == label).unwrap_or(0)
}

impl SessionConfigurator {
    pub fn configure<I, W>(&self, input: &mut I, out: &mut W) -> Result<SessionConfig>
    where
        I: InputProvider + ?Sized,
        W: Write + ?Sized,
    {
        let duration_label = match &self.preset_duration {
            Some(label) => label.clone(),
            None => {
                let labels: Vec<String> =
                    TestDuration::ALL.iter().map(|d| d.to_string()).collect();
                let choices: Vec<&str> = labels.iter().map(String::as_str).collect();
                let idx = prompt::select(
                    input,
                    out,
                    "Select Your Test Duration",
                    &choices,
                    default_index(&labels, &self.default_duration),
                )?;
                labels[idx].clone()
            }
        };

        let difficulty_label = match &self.preset_difficulty {
            Some(label) => label.clone(),
            None => {
                let labels: Vec<String> =
                    Difficulty::ALL.iter().map(|d| d.to_string()).collect();
                let choices: Vec<&str> = labels.iter().map(String::as_str).collect();
                let idx = prompt::select(
                    input,
                    out,
                    "Please Select Your Test Difficulty",
                    &choices,
                    default_index(&labels, &self.default_difficulty),
                )?;
                labels[idx].clone()
            }
        };

        let config = resolve(&duration_label, &difficulty_label);
        info!(
            duration_secs = config.duration_secs,
            difficulty = %config.difficulty,
            "session configured"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;

    #[test]
    fn test_duration_labels() {
        assert_eq!(resolve("30 seconds", "Basic sentences").duration_secs, 30);
        assert_eq!(resolve("1 minute", "Basic sentences").duration_secs, 60);
        assert_eq!(resolve("2 minutes", "Basic sentences").duration_secs, 120);
    }

    #[test]
    fn test_unknown_duration_falls_back_to_a_minute() {
        let config = resolve("90 seconds", "Basic sentences");
        assert_eq!(config.duration_secs, 60);
        assert_eq!(config.duration, TestDuration::OneMinute);
    }

    #[test]
    fn test_difficulty_texts() {
        assert_eq!(
            resolve("1 minute", "Random words").reference_text,
            "Lorem ipsum dolor sit amet consectetur adipiscing elit"
        );
        assert_eq!(
            resolve("1 minute", "Technical text").reference_text,
            "Asynchronous programming is a form of parallel programming"
        );
    }

    #[test]
    fn test_unknown_difficulty_falls_back_to_basic() {
        let config = resolve("1 minute", "Poetry");
        assert_eq!(
            config.reference_text,
            "The quick brown fox jumps over the lazy dog"
        );
        assert_eq!(config.difficulty, Difficulty::BasicSentences);
    }

    #[test]
    fn test_labels_are_exact() {
        assert_eq!(resolve("30 Seconds", "basic sentences").duration_secs, 60);
    }

    #[test]
    fn test_display_matches_menu_labels() {
        assert_eq!(TestDuration::TwoMinutes.to_string(), "2 minutes");
        assert_eq!(Difficulty::TechnicalText.to_string(), "Technical text");
    }

    #[test]
    fn test_time_limit() {
        let config = resolve("30 seconds", "Basic sentences");
        assert_eq!(config.time_limit(), Duration::from_secs(30));
    }

    #[test]
    fn test_configure_from_menus() {
        let mut input = ScriptedInput::from_lines(["3", "2"]);
        let mut out = Vec::new();
        let configurator = SessionConfigurator::default();

        let config = configurator.configure(&mut input, &mut out).unwrap();

        assert_eq!(config.duration_secs, 120);
        assert_eq!(config.difficulty, Difficulty::RandomWords);
    }

    #[test]
    fn test_configure_uses_defaults_on_enter() {
        let mut input = ScriptedInput::from_lines(["", ""]);
        let mut out = Vec::new();
        let configurator = SessionConfigurator {
            default_duration: "2 minutes".into(),
            default_difficulty: "Technical text".into(),
            ..Default::default()
        };

        let config = configurator.configure(&mut input, &mut out).unwrap();

        assert_eq!(config.duration, TestDuration::TwoMinutes);
        assert_eq!(config.difficulty, Difficulty::TechnicalText);
    }

    #[test]
    fn test_configure_presets_skip_menus() {
        let mut input = ScriptedInput::from_lines(Vec::<String>::new());
        let mut out = Vec::new();
        let configurator = SessionConfigurator {
            preset_duration: Some("90 seconds".into()),
            preset_difficulty: Some("Random words".into()),
            ..Default::default()
        };

        let config = configurator.configure(&mut input, &mut out).unwrap();

        assert!(input.prompts.is_empty());
        assert_eq!(config.duration_secs, 60);
        assert_eq!(config.difficulty, Difficulty::RandomWords);
    }
}
