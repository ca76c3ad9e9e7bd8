//! Terminal front end for rewind tic-tac-toe.
//!
//! Turns typed commands into [`rewind_tictactoe::GameSession`] calls and
//! prints the board, status, and move list after each one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod render;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use render::{SessionView, render_board, render_move_list, render_session};
pub use repl::{CommandError, HELP, run};
