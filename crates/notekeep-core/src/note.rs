//! Note records as exchanged with clients and the store.

use serde::{Deserialize, Serialize};

use crate::error::{NotekeepError, Result};

/// A stored note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Client payload for create and update.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteInput {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteInput {
    /// Reject inputs the store should never see. Trims the title in place.
    pub fn validate(mut self) -> Result<Self> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(NotekeepError::BadRequest("title must not be empty".into()));
        }
        self.title = title.to_string();
        Ok(self)
    }
}

/// Parse a path segment into a note id.
pub fn parse_note_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(NotekeepError::BadRequest(format!("invalid note id: {raw}"))),
    }
}
