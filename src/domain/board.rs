use crate::domain::task::{Task, TaskId};
use crate::error::{DeckError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered holding area for tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == task_id)
    }
}

/// Column layout and starting cards for a fresh board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSeed {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl ColumnSeed {
    pub fn new(id: &str, title: &str, tasks: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnSeed>,
}

impl BoardConfig {
    /// Rejects boards without columns, blank or repeated column ids and
    /// blank seed tasks
    pub fn validate(&self) -> Result<()> {
        check_column_ids(self.columns.iter().map(|col| col.id.as_str()))?;

        for column in &self.columns {
            if column.tasks.iter().any(|task| task.trim().is_empty()) {
                return Err(DeckError::ConfigError(format!(
                    "column '{}' has a blank seed task",
                    column.id
                )));
            }
        }
        Ok(())
    }
}

fn check_column_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(DeckError::ConfigError(
                "column id must not be blank".to_string(),
            ));
        }
        if !seen.insert(id) {
            return Err(DeckError::ConfigError(format!(
                "duplicate column id '{}'",
                id
            )));
        }
    }
    if seen.is_empty() {
        return Err(DeckError::ConfigError(
            "board needs at least one column".to_string(),
        ));
    }
    Ok(())
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Tasks".to_string(),
            columns: vec![
                ColumnSeed::new(
                    "todo",
                    "To Do",
                    &["Complete project proposal", "Research competitors"],
                ),
                ColumnSeed::new("in-progress", "In Progress", &["Design mockups"]),
                ColumnSeed::new("done", "Done", &["Project kickoff meeting"]),
            ],
        }
    }
}

/// A task picked up for relocation but not yet dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    pub task_id: TaskId,
    pub source_column: String,
}

/// Kanban board state.
///
/// Every task id lives in exactly one column. All mutations either keep
/// that partition intact or leave the board untouched and return an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    pub name: String,
    columns: Vec<Column>,
    pending_move: Option<PendingMove>,
    next_task_number: u32,
}

/// Unchecked board as read from JSON
#[derive(Deserialize)]
struct BoardRecord {
    #[serde(default)]
    name: String,
    columns: Vec<Column>,
    #[serde(default)]
    pending_move: Option<PendingMove>,
    #[serde(default)]
    next_task_number: u32,
}

impl TryFrom<BoardRecord> for Board {
    type Error = DeckError;

    /// Checks columns and the task partition, drops a pending move that no
    /// longer matches the board and moves the id counter past every
    /// existing id.
    fn try_from(record: BoardRecord) -> Result<Self> {
        check_column_ids(record.columns.iter().map(|col| col.id.as_str()))?;

        let mut board = Self {
            name: record.name,
            columns: record.columns,
            pending_move: None,
            next_task_number: record.next_task_number.max(1),
        };
        if !board.is_partition() {
            return Err(DeckError::ConfigError(
                "a task appears more than once on the board".to_string(),
            ));
        }

        let highest = board
            .columns
            .iter()
            .flat_map(|col| col.tasks.iter())
            .filter_map(|task| task.id.counter())
            .max();
        if let Some(highest) = highest {
            board.next_task_number = board.next_task_number.max(highest.saturating_add(1));
        }

        board.pending_move = record.pending_move.filter(|pending| {
            board
                .column(&pending.source_column)
                .is_some_and(|col| col.position_of(&pending.task_id).is_some())
        });
        Ok(board)
    }
}

impl Board {
    /// Builds a board from `config`, seeding its starting tasks
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::seeded(config))
    }

    fn seeded(config: BoardConfig) -> Self {
        let mut board = Self {
            name: config.name,
            columns: Vec::with_capacity(config.columns.len()),
            pending_move: None,
            next_task_number: 1,
        };

        for seed in config.columns {
            let mut column = Column::new(seed.id, seed.title);
            for content in seed.tasks {
                let id = board.next_task_id();
                column.tasks.push(Task::new(id, content.trim().to_string()));
            }
            board.columns.push(column);
        }
        board
    }

    /// Generates the next task ID
    fn next_task_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_task_number);
        self.next_task_number += 1;
        id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == column_id)
    }

    fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.id == column_id)
    }

    /// Returns the id of the column currently holding `task_id`
    pub fn find_task(&self, task_id: &TaskId) -> Option<&str> {
        self.columns
            .iter()
            .find(|col| col.position_of(task_id).is_some())
            .map(|col| col.id.as_str())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|col| col.tasks.len()).sum()
    }

    pub fn pending_move(&self) -> Option<&PendingMove> {
        self.pending_move.as_ref()
    }

    /// Appends a new task to the end of `column_id`
    pub fn add_task(&mut self, column_id: &str, content: &str) -> Result<TaskId> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DeckError::EmptyContent);
        }

        let index = self
            .column_index(column_id)
            .ok_or_else(|| DeckError::ColumnNotFound(column_id.to_string()))?;

        let id = self.next_task_id();
        self.columns[index]
            .tasks
            .push(Task::new(id.clone(), content.to_string()));
        debug!("added {} to column {}", id, column_id);

        debug_assert!(self.is_partition());
        Ok(id)
    }

    /// Removes a task from the named column and hands it back
    pub fn remove_task(&mut self, task_id: &TaskId, column_id: &str) -> Result<Task> {
        let index = self
            .column_index(column_id)
            .ok_or_else(|| DeckError::ColumnNotFound(column_id.to_string()))?;

        let column = &mut self.columns[index];
        let position = column
            .position_of(task_id)
            .ok_or_else(|| DeckError::TaskNotFound {
                task: task_id.to_string(),
                column: column_id.to_string(),
            })?;

        let task = column.tasks.remove(position);
        debug!("removed {} from column {}", task_id, column_id);
        Ok(task)
    }

    /// Picks up a task for relocation, replacing any move already in flight.
    ///
    /// The board itself is not touched. A task that is not in the stated
    /// source column is rejected and leaves no move pending.
    pub fn begin_move(&mut self, task_id: &TaskId, source_column_id: &str) -> Result<()> {
        if let Some(previous) = self.pending_move.take() {
            debug!("dropping pending move of {}", previous.task_id);
        }

        let column = self
            .column(source_column_id)
            .ok_or_else(|| DeckError::ColumnNotFound(source_column_id.to_string()))?;
        if column.position_of(task_id).is_none() {
            return Err(DeckError::TaskNotFound {
                task: task_id.to_string(),
                column: source_column_id.to_string(),
            });
        }

        self.pending_move = Some(PendingMove {
            task_id: task_id.clone(),
            source_column: source_column_id.to_string(),
        });
        Ok(())
    }

    /// Drops the pending task at the tail of `target_column_id`.
    ///
    /// Dropping onto the source column moves the task to its end. The pending
    /// move is always consumed; when the source, the target or the task
    /// itself can no longer be found the board is left unchanged.
    pub fn complete_move(&mut self, target_column_id: &str) -> Result<()> {
        let pending = self.pending_move.take().ok_or(DeckError::NoPendingMove)?;

        let source = self.column_index(&pending.source_column).ok_or_else(|| {
            warn!(
                "discarding move of {}: source column {} is gone",
                pending.task_id, pending.source_column
            );
            DeckError::ColumnNotFound(pending.source_column.clone())
        })?;

        let target = self.column_index(target_column_id).ok_or_else(|| {
            debug!(
                "discarding move of {}: no column {}",
                pending.task_id, target_column_id
            );
            DeckError::ColumnNotFound(target_column_id.to_string())
        })?;

        let position = self.columns[source]
            .position_of(&pending.task_id)
            .ok_or_else(|| {
                warn!(
                    "discarding move of {}: no longer in column {}",
                    pending.task_id, pending.source_column
                );
                DeckError::TaskNotFound {
                    task: pending.task_id.to_string(),
                    column: pending.source_column.clone(),
                }
            })?;

        let task = self.columns[source].tasks.remove(position);
        self.columns[target].tasks.push(task);
        debug!(
            "moved {} from {} to {}",
            pending.task_id, pending.source_column, target_column_id
        );

        debug_assert!(self.is_partition());
        Ok(())
    }

    /// Abandons the pending move, if any, without touching the board
    pub fn cancel_move(&mut self) -> Option<PendingMove> {
        self.pending_move.take()
    }

    /// Checks that no task id appears more than once across the columns
    pub fn is_partition(&self) -> bool {
        let mut seen = HashSet::new();
        self.columns
            .iter()
            .flat_map(|col| col.tasks.iter())
            .all(|task| seen.insert(&task.id))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seeded(BoardConfig::default())
    }
}
