pub mod board;
pub mod calendar;
pub mod goals;
pub mod notes;
pub mod playlist;
pub mod task;
pub mod timer;

pub use board::{Board, BoardConfig, Column, ColumnSeed, PendingMove};
pub use calendar::{format_long_date, Calendar, Event};
pub use goals::{DailyGoals, Goal};
pub use notes::{format_note_date, Note, Notebook};
pub use playlist::{MusicPlayer, Track, PLAYLIST};
pub use task::{Task, TaskId};
pub use timer::{format_clock, Mode, PomodoroTimer, TimerPhase, TimerSnapshot};
