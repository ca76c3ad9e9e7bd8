//! Rewind - tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_cli::{Cli, CliConfig, Command, SessionView, render_session, run};
use rewind_tictactoe::GameSession;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            descending,
            no_highlight,
        } => run_play(config.with_overrides(descending, no_highlight)),
        Command::Replay { json, cells } => run_replay(&config, json, &cells),
    }
}

/// Run the interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: CliConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut session = GameSession::with_move_order(*config.move_order());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(
        &mut session,
        stdin.lock(),
        &mut stdout,
        *config.highlight_winning_line(),
    )
    .context("Terminal I/O failed")?;
    info!(moves = session.history().len() - 1, "Game closed");
    Ok(())
}

/// Replay cells from an empty board and print the result
#[instrument(skip(config))]
fn run_replay(config: &CliConfig, json: bool, cells: &[usize]) -> Result<()> {
    let mut session = GameSession::replay(cells).context("Replay failed")?;
    if *config.move_order() != session.move_order() {
        session.toggle_move_order();
    }

    if json {
        let view = SessionView::from(&session);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render_session(&session, *config.highlight_winning_line()));
    }
    Ok(())
}
