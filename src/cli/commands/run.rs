//! Real-time countdown in the terminal.

use std::io::Write;
use std::time::Instant;

use colored::Colorize;
use tracing::{info, warn};

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::output::{format_state, format_update_line};
use crate::timer::{SessionTimer, TimerConfig, TimerObserver, TimerUpdate, UpdateKind};

/// Redraws a single status line on each tick.
struct LineObserver;

impl TimerObserver for LineObserver {
    fn on_update(&mut self, update: &TimerUpdate) {
        let mut stdout = std::io::stdout();
        let result = match update.kind {
            UpdateKind::Started | UpdateKind::Resumed | UpdateKind::Tick => {
                write!(stdout, "\r{}", format_update_line(update)).and_then(|()| stdout.flush())
            }
            UpdateKind::Completed { finished } => writeln!(
                stdout,
                "\n{} {} complete. Next up: {}",
                "✓".green(),
                finished,
                update.mode
            ),
            UpdateKind::Paused | UpdateKind::Reset | UpdateKind::StreakCleared => Ok(()),
        };
        if let Err(e) = result {
            warn!(error = %e, "failed to draw update");
        }
    }
}

/// Run `segments` segments back to back, starting each one as the previous
/// one completes.
///
/// With JSON output nothing is drawn while counting down; stdout carries only
/// the final state document.
///
/// # Errors
///
/// Returns an error if the final summary cannot be formatted.
pub fn run(config: TimerConfig, segments: u32, format: OutputFormat) -> Result<String, PomoError> {
    let mut timer = SessionTimer::new(config);
    if format == OutputFormat::Pretty {
        timer.subscribe(Box::new(LineObserver));
    }

    for segment in 1..=segments {
        info!(segment, mode = %timer.mode(), "starting segment");
        timer.start();
        drive(&mut timer);
    }

    format_state(&timer.state(), timer.elapsed_fraction(), format)
}

/// Sleep-and-poll until the current segment completes.
fn drive(timer: &mut SessionTimer) {
    while timer.is_running() {
        timer.poll(Instant::now());
        if let Some(wait) = timer.time_until_next_tick(Instant::now()) {
            std::thread::sleep(wait);
        }
    }
}
