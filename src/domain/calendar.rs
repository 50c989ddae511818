use crate::error::{DeckError, Result};
use chrono::{Days, Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Event {
    pub fn new(title: String, description: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            date,
        }
    }
}

/// Formats a day as e.g. `Friday, October 16, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Event list with a selected day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    events: Vec<Event>,
    selected_date: Option<NaiveDate>,
}

impl Calendar {
    /// Stock calendar relative to `today`: a meeting today and a deadline
    /// three days out, with today selected.
    pub fn seeded(today: NaiveDate) -> Self {
        let deadline = today.checked_add_days(Days::new(3)).unwrap_or(today);
        Self {
            events: vec![
                Event::new(
                    "Team Meeting".to_string(),
                    "Weekly sync up with the team".to_string(),
                    today,
                ),
                Event::new(
                    "Project Deadline".to_string(),
                    "Final submission of the project".to_string(),
                    deadline,
                ),
            ],
            selected_date: Some(today),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    /// Adds an event on the selected day
    pub fn add_event(&mut self, title: &str, description: &str) -> Result<Uuid> {
        let date = self.selected_date.ok_or(DeckError::NoDateSelected)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(DeckError::EmptyContent);
        }

        let event = Event::new(title.to_string(), description.trim().to_string(), date);
        let id = event.id;
        self.events.push(event);
        debug!("added event {} on {}", id, date);
        Ok(id)
    }

    pub fn delete_event(&mut self, id: Uuid) -> Result<Event> {
        let position = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| DeckError::EventNotFound(id.to_string()))?;
        Ok(self.events.remove(position))
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.date == date).collect()
    }

    pub fn events_for_selected(&self) -> Vec<&Event> {
        match self.selected_date {
            Some(date) => self.events_on(date),
            None => Vec::new(),
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::seeded(Local::now().date_naive())
    }
}
