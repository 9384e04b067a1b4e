use super::enums::Priority;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, stable for the task's lifetime
    pub id: Uuid,
    /// Task title (non-empty after trimming)
    pub title: String,
    /// Calendar date the task is scheduled for
    pub date: NaiveDate,
    /// Priority level
    pub priority: Priority,
    /// Estimated minutes of work; sizes a focus-timer run
    pub time_required: u32,
    /// Whether the task has been completed
    pub completed: bool,
}

impl Task {
    pub fn new(title: String, date: Option<NaiveDate>, priority: Priority, time_required: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
            priority,
            time_required: time_required.max(1),
            completed: false,
        }
    }

    /// Case-insensitive substring match against the title
    pub fn title_matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}
