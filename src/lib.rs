//! pomo - A Pomodoro session timer
//!
//! The [`timer`] module holds the timer core: a single countdown that moves
//! through work, short break and long break segments. The remaining modules
//! put it behind a command-line and terminal UI surface.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use timer::{Mode, SessionState, SessionTimer, TimerConfig};
