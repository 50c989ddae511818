use crate::config::DashboardConfig;
use crate::domain::{Board, Calendar, DailyGoals, MusicPlayer, Notebook, TimerSnapshot};
use crate::error::Result;
use crate::runtime::TimerDriver;
use log::info;
use serde::Serialize;

/// One view's worth of widget state.
///
/// Each widget is independent; the presentation layer routes input to the
/// matching field and renders from [`Dashboard::snapshot`].
pub struct Dashboard {
    pub timer: TimerDriver,
    pub board: Board,
    pub goals: DailyGoals,
    pub notes: Notebook,
    pub calendar: Calendar,
    pub music: MusicPlayer,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "building dashboard with board '{}' ({} columns)",
            config.board.name,
            config.board.columns.len()
        );

        Ok(Self {
            timer: TimerDriver::new(&config.ticker),
            board: Board::new(config.board)?,
            goals: DailyGoals::default(),
            notes: Notebook::default(),
            calendar: Calendar::default(),
            music: MusicPlayer::default(),
        })
    }

    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        DashboardSnapshot {
            timer: self.timer.snapshot(),
            board: &self.board,
            goals: &self.goals,
            goal_progress: self.goals.progress(),
            notes: &self.notes,
            calendar: &self.calendar,
            music: &self.music,
        }
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

/// Serializable view of every widget
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub timer: TimerSnapshot,
    pub board: &'a Board,
    pub goals: &'a DailyGoals,
    pub goal_progress: f64,
    pub notes: &'a Notebook,
    pub calendar: &'a Calendar,
    pub music: &'a MusicPlayer,
}
