use std::io::Write;

use tracing::{info, warn};

use crate::accounts::{self, AccountStore};
use crate::config::{Config, ConfigStore};
use crate::continuation::{ask_to_continue, Continuation};
use crate::engine::TypingSession;
use crate::error::{DrillError, Result};
use crate::history::{HistoryRecord, ResultLog};
use crate::input::{InputProvider, ReadError};
use crate::prompt;
use crate::score::{score, ScoreReport};
use crate::session::{SessionConfig, SessionConfigurator};
use crate::ui::{self, Tone};
use crate::warmup::run_warmup;

const ENTRY_CHOICES: [&str; 2] = ["Signup", "Login"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The whole interactive program: accounts, then the drill loop.
pub struct App<S: ConfigStore> {
    accounts: AccountStore,
    config_store: S,
    config: Config,
    history: Option<ResultLog>,
    pub preset_duration: Option<String>,
    pub preset_difficulty: Option<String>,
}

impl<S: ConfigStore> App<S> {
    pub fn new(config_store: S, history: Option<ResultLog>) -> Self {
        let config = config_store.load();
        let history = history.filter(|_| config.record_history);
        Self {
            accounts: AccountStore::with_cost(config.password_cost),
            config_store,
            config,
            history,
            preset_duration: None,
            preset_difficulty: None,
        }
    }

    /// Runs until the user exits the drill or input ends.
    pub fn run<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<()>
    where
        I: InputProvider + ?Sized,
        W: Write + ?Sized,
    {
        match self.run_menu(input, out) {
            Err(DrillError::Input(ReadError::Closed)) => {
                info!("input closed, leaving");
                out.flush()?;
                Ok(())
            }
            other => other,
        }
    }

    fn run_menu<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<()>
    where
        I: InputProvider + ?Sized,
        W: Write + ?Sized,
    {
        ui::banner(out)?;
        loop {
            let choice = prompt::select(
                input,
                out,
                "Do you want to sign up or login?",
                &ENTRY_CHOICES,
                0,
            )?;
            let flow = if choice == 0 {
                self.signup(input, out)?
            } else {
                self.login(input, out)?
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn signup<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<Flow>
    where
        I: InputProvider + ?Sized,
        W: Write + ?Sized,
    {
        let name = prompt::ask(input, out, "Enter your name:", accounts::validate_name)?;
        let email = prompt::ask(input, out, "Enter your email:", accounts::validate_email)?;
        let password = prompt::ask_secret(
            input,
            out,
            "Enter your password:",
            accounts::validate_password,
        )?;

        match self.accounts.register(&name, &email, &password) {
            Ok(account) => ui::line(
                out,
                Tone::Success,
                &format!(
                    "Dear {}, signup successful! Now you can login.",
                    account.name
                ),
            )?,
            Err(DrillError::Account(e)) => {
                warn!(error = %e, "signup refused");
                ui::line(out, Tone::Failure, &e.to_string())?
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn login<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<Flow>
    where
        I: InputProvider + ?Sized,
        W: Write + ?Sized,
    {
        let email = prompt::ask(input, out, "Enter your email:", accounts::validate_email)?;
        let password = prompt::ask_secret(
            input,
            out,
            "Enter your password:",
            accounts::validate_password_present,
        )?;

        let name = match self.accounts.authenticate(&email, &password) {
            Ok(account) => account.name.clone(),
            Err(e) => {
                ui::line(out, Tone::Failure, &e.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        ui::line(
            out,
            Tone::Muted,
            &format!("Hi, {}! \nWelcome to the typing test.\n", name),
        )?;
        ui::line(out, Tone::Heading, "Customize Your Own Typing Test")?;
        self.drill(input, out)?;
        Ok(Flow::Exit)
    }

    /// Configure, warm up, race, score; repeat until the user exits.
    pub fn drill<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<()>
    where
        I: InputProvider + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            let session = self.configure_until_warm(input, out)?;

            ui::blank(out)?;
            ui::line(
                out,
                Tone::Info,
                "Your typing test will start now. Press Enter to start.",
            )?;
            ui::blank(out)?;
            prompt::pause(input, out, "Press Enter to start...")?;

            let result = TypingSession::new(&session).run(input);
            if !result.completed_before_deadline {
                ui::blank(out)?;
                ui::line(out, Tone::Failure, "Time's up!")?;
            }

            let report = score(&result, &session.reference_text);
            report.render(out)?;
            info!(%report, "session scored");
            self.record(&session, &report);

            match ask_to_continue(input, out)? {
                Continuation::Repeat => {
                    ui::blank(out)?;
                    ui::line(out, Tone::Heading, "Customize Your Own Typing Test")?;
                }
                Continuation::Exit => {
                    ui::line(
                        out,
                        Tone::Highlight,
                        "Exiting the typing test. Have a great day!",
                    )?;
                    return Ok(());
                }
            }
        }
    }

    /// Repeat configuration and warm-up until the warm-up passes.
    /// Every retry builds a fresh configuration.
    pub fn configure_until_warm<I, W>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> Result<SessionConfig>
    where
        I: InputProvider + ?Sized,
        W: Write + ?Sized,
    {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            let configurator = SessionConfigurator {
                preset_duration: self.preset_duration.clone(),
                preset_difficulty: self.preset_difficulty.clone(),
                default_duration: self.config.duration.clone(),
                default_difficulty: self.config.difficulty.clone(),
            };
            let session = configurator.configure(input, out)?;

            ui::blank(out)?;
            ui::line(
                out,
                Tone::Info,
                "Warm-up Exercise: Press Enter to start the warm-up exercise.",
            )?;
            ui::blank(out)?;
            prompt::pause(input, out, "Press Enter to start...")?;

            if run_warmup(input, out)?.passed {
                self.config.remember(&session);
                if let Err(e) = self.config_store.save(&self.config) {
                    warn!(error = %e, "could not save config");
                }
                return Ok(session);
            }
            warn!(attempt, "warm-up failed, restarting setup");
        }
    }

    fn record(&self, session: &SessionConfig, report: &ScoreReport) {
        if let Some(log) = &self.history {
            if let Err(e) = log.append(&HistoryRecord::new(session, report)) {
                warn!(path = %log.path().display(), error = %e, "could not record result");
            }
        }
    }
}
