use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use crossterm::event::{self, Event};
use grid_snake::config::THEME_CLASSIC;
use grid_snake::game::GameState;
use grid_snake::input::GameInput;
use grid_snake::logging::init_file_logger;
use grid_snake::random::RngSource;
use grid_snake::renderer;
use grid_snake::session::{Session, SessionControl};
use grid_snake::settings::{LogLevel, Settings};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Settings file; defaults to grid-snake/settings.json in the config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a log to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = resolve_settings(cli)?;

    if let Some(path) = &settings.log_file {
        init_file_logger(path, settings.log_level.into()).map_err(io::Error::other)?;
    }
    log::info!(
        "starting grid-snake (seed {:?}, tick {} ms)",
        settings.seed,
        settings.tick_interval().as_millis()
    );

    let source = match settings.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let state = GameState::new(source).map_err(io::Error::other)?;
    let session = Session::new(state, settings.tick_interval());

    install_panic_hook();
    run(session)
}

/// Settings file values with command-line flags applied on top.
fn resolve_settings(cli: Cli) -> io::Result<Settings> {
    let mut settings = match cli.config {
        Some(path) => Settings::load(&path, false),
        None => match Settings::default_path() {
            Some(path) => Settings::load(&path, true),
            None => Ok(Settings::default()),
        },
    }
    .map_err(io::Error::other)?;

    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }
    if let Some(log_file) = cli.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = cli.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}

fn run(mut session: Session) -> io::Result<()> {
    let mut terminal = TerminalSession::enter()?;
    session.start(Instant::now());

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, session.state(), &THEME_CLASSIC))?;

        if event::poll(session.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = GameInput::from_key_event(key) {
                    match session.handle_input(input, Instant::now()) {
                        Ok(SessionControl::Quit) => break,
                        Ok(SessionControl::Continue) => {}
                        Err(error) => log::error!("could not start a new game: {error}"),
                    }
                }
            }
        }

        if let Err(error) = session.tick(Instant::now()) {
            log::warn!("{error}");
        }
    }

    log::info!("quitting with score {}", session.state().score());
    Ok(())
}
