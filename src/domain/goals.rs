use crate::error::{DeckError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A checklist item for the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl Goal {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Daily goals checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyGoals {
    goals: Vec<Goal>,
}

impl DailyGoals {
    pub fn empty() -> Self {
        Self { goals: Vec::new() }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Appends a goal; blank text is rejected
    pub fn add_goal(&mut self, text: &str) -> Result<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DeckError::EmptyContent);
        }

        let goal = Goal::new(text.to_string());
        let id = goal.id;
        self.goals.push(goal);
        debug!("added goal {}", id);
        Ok(id)
    }

    pub fn toggle_goal(&mut self, id: Uuid) -> Result<bool> {
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| DeckError::GoalNotFound(id.to_string()))?;
        goal.toggle();
        Ok(goal.completed)
    }

    pub fn remove_goal(&mut self, id: Uuid) -> Result<Goal> {
        let position = self
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or_else(|| DeckError::GoalNotFound(id.to_string()))?;
        Ok(self.goals.remove(position))
    }

    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|goal| goal.completed).count()
    }

    /// Share of goals completed, `0.0` for an empty list
    pub fn progress(&self) -> f64 {
        if self.goals.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.goals.len() as f64
    }
}

impl Default for DailyGoals {
    fn default() -> Self {
        let mut goals = vec![
            Goal::new("Complete pomodoro session".to_string()),
            Goal::new("Review today's tasks".to_string()),
            Goal::new("Prepare for tomorrow".to_string()),
        ];
        goals[1].completed = true;
        Self { goals }
    }
}
