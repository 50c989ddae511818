use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a board task (e.g., task-1, task-2, task-100)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    const PREFIX: &'static str = "task-";

    /// Creates a new TaskId from a counter
    pub fn new(counter: u32) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Counter this id was generated from, if it is in canonical form
    pub fn counter(&self) -> Option<u32> {
        let counter = self.0.strip_prefix(Self::PREFIX)?.parse::<u32>().ok()?;
        (Self::new(counter) == *self).then_some(counter)
    }
}

impl FromStr for TaskId {
    type Err = crate::error::DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        normalized
            .strip_prefix(Self::PREFIX)
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(Self::new)
            .ok_or_else(|| crate::error::DeckError::InvalidTaskId(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

impl Task {
    pub fn new(id: TaskId, content: String) -> Self {
        Self { id, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_creation() {
        assert_eq!(TaskId::new(1).as_str(), "task-1");
        assert_eq!(TaskId::new(42).as_str(), "task-42");
        assert_eq!(TaskId::new(1000).to_string(), "task-1000");
    }

    #[test]
    fn test_task_id_parsing() {
        let id = TaskId::from_str("task-7").unwrap();
        assert_eq!(id, TaskId::new(7));

        assert!(TaskId::from_str("task-").is_err());
        assert!(TaskId::from_str("task-abc").is_err());
        assert!(TaskId::from_str("todo-1").is_err());
        assert!(TaskId::from_str("").is_err());
    }

    #[test]
    fn test_task_id_parsing_case_insensitive() {
        assert_eq!(TaskId::from_str("TASK-3").unwrap(), TaskId::new(3));
        assert_eq!(TaskId::from_str("Task-3").unwrap(), TaskId::new(3));
        assert_eq!(TaskId::from_str(" task-3 ").unwrap(), TaskId::new(3));
    }

    #[test]
    fn test_task_id_parsing_is_canonical() {
        assert_eq!(TaskId::from_str("task-007").unwrap(), TaskId::new(7));
        assert_eq!(TaskId::from_str("task-+5").unwrap(), TaskId::new(5));
        assert_eq!(TaskId::from_str("task-007").unwrap().as_str(), "task-7");
    }

    #[test]
    fn test_task_id_counter() {
        assert_eq!(TaskId::new(12).counter(), Some(12));

        let padded: TaskId = serde_json::from_str(r#""task-012""#).unwrap();
        assert_eq!(padded.counter(), None);
        let foreign: TaskId = serde_json::from_str(r#""card-3""#).unwrap();
        assert_eq!(foreign.counter(), None);
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new(TaskId::new(1), "Write report".to_string());
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":"task-1","content":"Write report"}"#);
    }
}
