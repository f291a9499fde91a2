//! Memory Match console runner (default binary).
//!
//! Reads one command per line from stdin while the session ticks the
//! countdown in the background. Expiry is reported as soon as it happens,
//! even while the player is still typing.

use std::io::IsTerminal;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use memory_match::core::GameSnapshot;
use memory_match::engine::{EngineConfig, GameSession};
use memory_match::input::parse_command;
use memory_match::observe::{ObserveConfig, Observer};
use memory_match::term::{
    flip_error_message, outcome_message, summary_lines, GameView, Line, TerminalRenderer, PROMPT,
};
use memory_match::types::{GameAction, GameOutcome, TurnOutcome};

fn main() -> Result<()> {
    init_tracing();

    let config = EngineConfig::from_env();
    let observe = ObserveConfig::from_env();

    let rt = Runtime::new()?;
    rt.block_on(run(config, observe))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(config: EngineConfig, observe: ObserveConfig) -> Result<()> {
    let mut session = GameSession::start(&config);
    let mut outcome_rx = session.subscribe();
    let mut console = Console::new(observe);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    console.show(&session, None, None)?;
    console.prompt()?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("stdin closed");
                    session.quit();
                    break;
                };

                match parse_command(&line) {
                    Ok(GameAction::Quit) => {
                        session.quit();
                        console.message("Quitting the game. Goodbye!")?;
                        break;
                    }
                    Ok(GameAction::Restart) => {
                        console.message("Restarting the game...")?;
                        session.restart();
                        console.show(&session, None, None)?;
                    }
                    Ok(GameAction::Flip(index)) => match session.flip(index) {
                        Ok(outcome) => {
                            console.show(&session, Some(outcome), None)?;
                            console.message(&outcome_message(&outcome))?;
                        }
                        Err(err) => {
                            console.show_rejection(&session, err.to_string())?;
                            console.message(&flip_error_message(&err))?;
                        }
                    },
                    Err(err) => {
                        console.show_rejection(&session, err.to_string())?;
                        console.message("Invalid input. Please enter a tile number.")?;
                    }
                }

                if outcome_rx.has_changed().unwrap_or(false) {
                    let outcome = *outcome_rx.borrow_and_update();
                    console.game_over(&session, outcome)?;
                }
                console.prompt()?;
            }
            changed = outcome_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let outcome = *outcome_rx.borrow_and_update();
                if outcome.is_over() {
                    console.message("")?;
                    console.game_over(&session, outcome)?;
                    console.prompt()?;
                }
            }
        }
    }

    Ok(())
}

/// Board output for humans, or JSON lines when observing.
struct Console {
    renderer: TerminalRenderer,
    view: GameView,
    lines: Vec<Line>,
    snapshot: GameSnapshot,
    observer: Option<Observer>,
}

impl Console {
    fn new(observe: ObserveConfig) -> Self {
        let color = std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none()
            && !observe.enabled;
        Self {
            renderer: TerminalRenderer::stdout(color),
            view: GameView::default(),
            lines: Vec::new(),
            snapshot: GameSnapshot::default(),
            observer: observe.enabled.then(Observer::new),
        }
    }

    fn show(
        &mut self,
        session: &GameSession,
        event: Option<TurnOutcome>,
        error: Option<String>,
    ) -> Result<()> {
        session.snapshot_into(&mut self.snapshot);
        match self.observer.as_mut() {
            Some(observer) => {
                let line = observer.line(&self.snapshot, event, error)?;
                self.renderer.message(&line)
            }
            None => {
                self.view.render_into(&self.snapshot, &mut self.lines);
                self.renderer.draw(&self.lines)
            }
        }
    }

    /// A rejected command leaves the board as it was; only observers hear about it.
    fn show_rejection(&mut self, session: &GameSession, error: String) -> Result<()> {
        if self.observer.is_some() {
            self.show(session, None, Some(error))?;
        }
        Ok(())
    }

    fn game_over(&mut self, session: &GameSession, outcome: GameOutcome) -> Result<()> {
        if !outcome.is_over() {
            return Ok(());
        }
        if self.observer.is_some() {
            return self.show(session, None, None);
        }
        session.snapshot_into(&mut self.snapshot);
        for line in summary_lines(&self.snapshot) {
            self.renderer.message(&line)?;
        }
        self.renderer
            .message("Enter 'r' to play again or 'q' to quit.")
    }

    fn message(&mut self, text: &str) -> Result<()> {
        if self.observer.is_some() {
            return Ok(());
        }
        self.renderer.message(text)
    }

    fn prompt(&mut self) -> Result<()> {
        if self.observer.is_some() {
            return Ok(());
        }
        self.renderer.prompt(PROMPT)
    }
}
