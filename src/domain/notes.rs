use crate::error::{DeckError, Result};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-form note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Formats a note timestamp as e.g. `Oct 16, 2026`
pub fn format_note_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Note list with a single note open for editing.
///
/// Edits go to a draft and only reach the note on [`Notebook::save_active`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    notes: Vec<Note>,
    active: Option<Uuid>,
    draft_title: String,
    draft_content: String,
}

impl Notebook {
    pub fn empty() -> Self {
        Self {
            notes: Vec::new(),
            active: None,
            draft_title: String::new(),
            draft_content: String::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn active_note(&self) -> Option<&Note> {
        let id = self.active?;
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_content(&self) -> &str {
        &self.draft_content
    }

    fn open(&mut self, note: Option<(Uuid, String, String)>) {
        match note {
            Some((id, title, content)) => {
                self.active = Some(id);
                self.draft_title = title;
                self.draft_content = content;
            }
            None => {
                self.active = None;
                self.draft_title.clear();
                self.draft_content.clear();
            }
        }
    }

    /// Puts a blank "New Note" at the top of the list and opens it
    pub fn add_note(&mut self) -> Uuid {
        let note = Note::new("New Note".to_string(), String::new());
        let id = note.id;
        self.open(Some((id, note.title.clone(), note.content.clone())));
        self.notes.insert(0, note);
        debug!("created note {}", id);
        id
    }

    pub fn select_note(&mut self, id: Uuid) -> Result<()> {
        let note = self
            .notes
            .iter()
            .find(|note| note.id == id)
            .ok_or_else(|| DeckError::NoteNotFound(id.to_string()))?;
        let opened = (note.id, note.title.clone(), note.content.clone());
        self.open(Some(opened));
        Ok(())
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft_content = content.into();
    }

    /// Writes the draft back into the open note
    pub fn save_active(&mut self) -> Result<()> {
        let id = self.active.ok_or(DeckError::NoActiveNote)?;
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| DeckError::NoteNotFound(id.to_string()))?;

        note.title = self.draft_title.clone();
        note.content = self.draft_content.clone();
        debug!("saved note {}", id);
        Ok(())
    }

    /// Deletes a note. Deleting the open note opens the first remaining one.
    pub fn delete_note(&mut self, id: Uuid) -> Result<Note> {
        let position = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| DeckError::NoteNotFound(id.to_string()))?;
        let removed = self.notes.remove(position);

        if self.active == Some(id) {
            let next = self
                .notes
                .first()
                .map(|note| (note.id, note.title.clone(), note.content.clone()));
            self.open(next);
        }
        Ok(removed)
    }
}

impl Default for Notebook {
    fn default() -> Self {
        let mut notebook = Self::empty();
        notebook.notes = vec![
            Note::new(
                "Meeting notes".to_string(),
                "Discuss project timeline and deliverables with team.".to_string(),
            ),
            Note::new(
                "Ideas for new feature".to_string(),
                "Add dark mode support and user preferences.".to_string(),
            ),
        ];
        notebook
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_notebook() {
        let notebook = Notebook::default();
        assert_eq!(notebook.notes().len(), 2);
        assert!(notebook.active_note().is_none());
        assert_eq!(notebook.draft_title(), "");
    }

    #[test]
    fn test_add_note_prepends_and_opens() {
        let mut notebook = Notebook::default();
        let id = notebook.add_note();

        assert_eq!(notebook.notes().len(), 3);
        assert_eq!(notebook.notes()[0].id, id);
        assert_eq!(notebook.active_note().unwrap().id, id);
        assert_eq!(notebook.draft_title(), "New Note");
        assert_eq!(notebook.draft_content(), "");
    }

    #[test]
    fn test_edits_apply_only_on_save() {
        let mut notebook = Notebook::default();
        let id = notebook.notes()[1].id;
        notebook.select_note(id).unwrap();
        assert_eq!(notebook.draft_title(), "Ideas for new feature");

        notebook.set_draft_title("Roadmap");
        notebook.set_draft_content("Ship it");
        assert_eq!(notebook.notes()[1].title, "Ideas for new feature");

        notebook.save_active().unwrap();
        assert_eq!(notebook.notes()[1].title, "Roadmap");
        assert_eq!(notebook.notes()[1].content, "Ship it");
    }

    #[test]
    fn test_save_without_active_note() {
        let mut notebook = Notebook::default();
        assert!(matches!(
            notebook.save_active(),
            Err(DeckError::NoActiveNote)
        ));
    }

    #[test]
    fn test_select_unknown_note() {
        let mut notebook = Notebook::default();
        assert!(matches!(
            notebook.select_note(Uuid::new_v4()),
            Err(DeckError::NoteNotFound(_))
        ));
    }

    #[test]
    fn test_delete_active_note_opens_first() {
        let mut notebook = Notebook::default();
        let first = notebook.notes()[0].id;
        let second = notebook.notes()[1].id;

        notebook.select_note(second).unwrap();
        notebook.delete_note(second).unwrap();
        assert_eq!(notebook.active_note().unwrap().id, first);
        assert_eq!(notebook.draft_title(), "Meeting notes");

        notebook.delete_note(first).unwrap();
        assert!(notebook.active_note().is_none());
        assert_eq!(notebook.draft_title(), "");
        assert!(notebook.notes().is_empty());
    }

    #[test]
    fn test_delete_other_note_keeps_draft() {
        let mut notebook = Notebook::default();
        let first = notebook.notes()[0].id;
        let second = notebook.notes()[1].id;

        notebook.select_note(first).unwrap();
        notebook.set_draft_content("unsaved");
        notebook.delete_note(second).unwrap();

        assert_eq!(notebook.active_note().unwrap().id, first);
        assert_eq!(notebook.draft_content(), "unsaved");
    }

    #[test]
    fn test_format_note_date() {
        let date = Utc.with_ymd_and_hms(2026, 10, 6, 9, 30, 0).unwrap();
        assert_eq!(format_note_date(&date), "Oct 6, 2026");
    }
}
