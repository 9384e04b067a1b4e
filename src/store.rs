use crate::domain::{FilterTab, Priority, Task};
use chrono::NaiveDate;
use uuid::Uuid;

/// Aggregate counts over the full (unfiltered) task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub high_priority: usize,
}

/// Owns the task list and all mutation/query operations.
///
/// Every mutation that changes state sets `needs_save` so the main loop can
/// persist the snapshot. Mutations referencing an unknown id are silent
/// no-ops: ids are store-internal and never user-supplied directly.
pub struct TaskStore {
    tasks: Vec<Task>,
    pub needs_save: bool,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            needs_save: false,
        }
    }

    /// Add a new task at the front of the list (newest-first ordering).
    ///
    /// Rejected silently if the trimmed title is empty. Returns the new
    /// task's id when one was created.
    pub fn add(
        &mut self,
        title: &str,
        date: Option<NaiveDate>,
        priority: Priority,
        time_required: u32,
    ) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let task = Task::new(title.to_string(), date, priority, time_required);
        let id = task.id;
        self.tasks.insert(0, task);
        self.needs_save = true;
        Some(id)
    }

    /// Flip the completed flag on the matching task
    pub fn toggle_complete(&mut self, id: Uuid) {
        if let Some(task) = self.find_mut(id) {
            task.completed = !task.completed;
            self.needs_save = true;
        }
    }

    /// Remove the matching task
    pub fn delete(&mut self, id: Uuid) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.needs_save = true;
        }
    }

    pub fn set_priority(&mut self, id: Uuid, priority: Priority) {
        if let Some(task) = self.find_mut(id) {
            task.priority = priority;
            self.needs_save = true;
        }
    }

    pub fn set_date(&mut self, id: Uuid, date: NaiveDate) {
        if let Some(task) = self.find_mut(id) {
            task.date = date;
            self.needs_save = true;
        }
    }

    /// Set the minute estimate (minimum 1)
    pub fn set_time_required(&mut self, id: Uuid, minutes: u32) {
        if let Some(task) = self.find_mut(id) {
            task.time_required = minutes.max(1);
            self.needs_save = true;
        }
    }

    /// Replace the title; rejected silently if blank after trimming
    pub fn set_title(&mut self, id: Uuid, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        if let Some(task) = self.find_mut(id) {
            task.title = title.to_string();
            self.needs_save = true;
        }
    }

    /// Remove every task with completed = true, preserving the relative
    /// order of the remaining tasks
    pub fn clear_completed(&mut self) {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        if self.tasks.len() != before {
            self.needs_save = true;
        }
    }

    /// Derived view: filter by tab, then case-insensitive title search, then
    /// stable sort by priority rank (high first). Never mutates the list.
    pub fn query(&self, tab: FilterTab, search: &str, today: NaiveDate) -> Vec<&Task> {
        let mut result: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| match tab {
                FilterTab::All => true,
                FilterTab::Pending => !t.completed,
                FilterTab::Completed => t.completed,
                FilterTab::High => t.priority == Priority::High,
                FilterTab::Today => t.date == today,
            })
            .filter(|t| t.title_matches(search))
            .collect();

        // sort_by_key is stable, so equal-priority tasks keep list order
        result.sort_by_key(|t| t.priority.rank());
        result
    }

    /// Counts over the full list (ignores the active filter and search)
    pub fn stats(&self) -> Stats {
        Stats {
            total: self.tasks.len(),
            pending: self.tasks.iter().filter(|t| !t.completed).count(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
            high_priority: self
                .tasks
                .iter()
                .filter(|t| t.priority == Priority::High)
                .count(),
        }
    }

    /// Number of tasks dated today that are completed (for the daily goal)
    pub fn completed_today(&self, today: NaiveDate) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.date == today && t.completed)
            .count()
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}
