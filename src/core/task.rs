use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Server-assigned task identifier.
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled Task"
        } else {
            &self.title
        }
    }
}

/// A task candidate as entered in the creation form. Has no id; the
/// service assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub completed: bool,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date,
            completed: false,
        }
    }

    /// Presence checks only. Values are sent as entered, untrimmed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.date.is_none() {
            return Err(ValidationError::MissingDate);
        }
        Ok(())
    }
}
