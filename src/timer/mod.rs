//! Pomodoro timer core.
//!
//! - [`SessionTimer`]: countdown state and mode sequencing
//! - [`TimerConfig`]: per-mode durations
//! - [`TickSchedule`]: the single pending tick
//! - [`TimerObserver`]: display updates

pub mod config;
pub mod display;
pub mod mode;
pub mod schedule;
pub mod session;

pub use config::TimerConfig;
pub use display::{
    format_duration, format_mmss, render_progress_bar, status_label, TimerObserver, TimerUpdate,
    UpdateKind,
};
pub use mode::Mode;
pub use schedule::{TickSchedule, TICK_INTERVAL};
pub use session::{SessionState, SessionTimer};
