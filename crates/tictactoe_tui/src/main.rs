//! Tic-tac-toe - local two-player game in the terminal.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::Parser;
use cli::{Cli, Command};
use config::Settings;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_core::Position;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(settings),
        Command::Replay { positions, json } => run_replay(&settings, &positions, json),
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Run the interactive terminal game.
fn run_tui(settings: Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe");

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(rounds = app.session().tally().rounds(), "Exiting");

    res
}

/// Enters raw mode and the alternate screen, undoing both if setup fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    or_restore(terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Runs `restore` when `result` is an error, then hands the result back.
fn or_restore<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if let Err(err) = &result {
        error!(error = %err, "Terminal setup failed, restoring");
        restore();
    }
    result
}

/// Draw, read one key, apply it. Repeat until the player quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}

/// Replay cells non-interactively and print the result.
fn run_replay(settings: &Settings, positions: &[Position], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(io::stderr)
        .init();

    let report = replay::replay(positions);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", out);
    } else {
        println!("{}", replay::render_text(&report, settings));
    }

    Ok(())
}
