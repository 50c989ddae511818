//! # Focusdeck Core
//!
//! State engines behind the Focusdeck productivity dashboard.
//!
//! Each widget owns its state in memory with no persistence and no
//! cross-widget coordination: a pomodoro timer driven by a cancellable
//! Tokio interval, a kanban board with two-phase drag-and-drop moves, a
//! daily goals checklist, a notes editor, a calendar and a music playlist.
//! Rendering and routing are left to the presentation layer.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod runtime;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use domain::{
    board::{Board, BoardConfig, Column, PendingMove},
    task::{Task, TaskId},
    timer::{Mode, PomodoroTimer, TimerPhase, TimerSnapshot},
};
pub use error::{DeckError, Result};
pub use runtime::{TickerConfig, TimerDriver};
