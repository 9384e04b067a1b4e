use crate::domain::{FilterTab, Priority, Task, UiMode};
use crate::persistence::{self, AppMetadata};
use crate::store::{Stats, TaskStore};
use crate::ticker;
use crate::timer::FocusTimer;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::time::Instant;
use uuid::Uuid;

/// Maximum configurable daily goal
pub const MAX_DAILY_GOAL: u32 = 20;

/// Maximum minute estimate offered by the UI
pub const MAX_TIME_REQUIRED: u32 = 4;

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub date: String, // YYYY-MM-DD, empty means today
    pub priority: Priority,
    pub time_required: u32,
    pub editing_field: usize, // 0 = title, 1 = date, 2 = priority, 3 = estimate
}

impl InputFormState {
    pub const FIELD_COUNT: usize = 4;

    pub fn new() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            priority: Priority::default(),
            time_required: 1,
            editing_field: 0,
        }
    }
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub timer: FocusTimer,
    pub active_tab: FilterTab,
    pub search: String,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub input_form: Option<InputFormState>,
    /// Task currently in inline title edit (view-local, never persisted)
    pub editing_id: Option<Uuid>,
    pub edit_buffer: String,
    pub daily_goal: u32,
    pub meta_needs_save: bool,
    last_timer_tick: Instant,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, metadata: AppMetadata) -> Self {
        Self {
            store: TaskStore::new(tasks),
            timer: FocusTimer::new(),
            active_tab: FilterTab::All,
            search: String::new(),
            ui_mode: UiMode::Normal,
            selected_index: 0,
            input_form: None,
            editing_id: None,
            edit_buffer: String::new(),
            daily_goal: metadata.daily_goal.clamp(1, MAX_DAILY_GOAL),
            meta_needs_save: false,
            last_timer_tick: Instant::now(),
        }
    }

    /// The calendar date used for the Today tab and the daily goal
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Tasks under the active tab and search, priority-sorted
    pub fn visible(&self) -> Vec<&Task> {
        self.store.query(self.active_tab, &self.search, self.today())
    }

    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    pub fn completed_today(&self) -> usize {
        self.store.completed_today(self.today())
    }

    /// Id of the task under the cursor, if any
    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.visible().get(self.selected_index).map(|t| t.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible().len() {
            self.selected_index += 1;
        }
    }

    pub fn toggle_selected_complete(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.toggle_complete(id);
            self.clamp_selection();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.delete(id);
            self.clamp_selection();
        }
    }

    /// Cycle the selected task's priority (disabled for completed tasks)
    pub fn cycle_selected_priority(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(task) = self.store.task(id) {
                if !task.completed {
                    let next = task.priority.next();
                    self.store.set_priority(id, next);
                }
            }
        }
    }

    /// Adjust the selected task's minute estimate (disabled for completed
    /// tasks, clamped to 1..=4 like the estimate picker)
    pub fn adjust_selected_time(&mut self, delta: i32) {
        if let Some(id) = self.selected_task_id() {
            if let Some(task) = self.store.task(id) {
                if !task.completed {
                    let minutes = (task.time_required as i32 + delta)
                        .clamp(1, MAX_TIME_REQUIRED as i32) as u32;
                    self.store.set_time_required(id, minutes);
                }
            }
        }
    }

    /// Shift the selected task's date by whole days
    pub fn shift_selected_date(&mut self, days: i64) {
        if let Some(id) = self.selected_task_id() {
            if let Some(task) = self.store.task(id) {
                let date = task.date + chrono::Duration::days(days);
                self.store.set_date(id, date);
            }
        }
    }

    /// Bind the focus timer to the selected task and start it. Starting over
    /// an existing session discards that session's progress.
    pub fn start_focus_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(task) = self.store.task(id) {
                if !task.completed {
                    self.timer.start(id, task.time_required);
                }
            }
        }
    }

    pub fn clear_completed(&mut self) {
        self.store.clear_completed();
        self.clamp_selection();
    }

    pub fn set_tab(&mut self, tab: FilterTab) {
        self.active_tab = tab;
        self.selected_index = 0;
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_tab(self.active_tab.prev());
    }

    // --- Add-task form ---

    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::new());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Submit the add form. Returns false (form stays open) when the title
    /// is blank or the date doesn't parse.
    pub fn submit_input_form(&mut self) -> bool {
        let Some(form) = &self.input_form else {
            return true;
        };

        let date = if form.date.trim().is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => return false,
            }
        };

        let added = self
            .store
            .add(&form.title, date, form.priority, form.time_required);
        if added.is_none() {
            return false;
        }

        self.input_form = None;
        self.ui_mode = UiMode::Normal;
        self.selected_index = 0; // new task sits at the front
        true
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- Inline title edit (view-local edit mode) ---

    pub fn start_edit_title(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(task) = self.store.task(id) {
                self.editing_id = Some(id);
                self.edit_buffer = task.title.clone();
                self.ui_mode = UiMode::EditingTitle;
            }
        }
    }

    pub fn is_editing(&self, id: Uuid) -> bool {
        self.editing_id == Some(id)
    }

    pub fn commit_edit_title(&mut self) {
        if let Some(id) = self.editing_id.take() {
            self.store.set_title(id, &self.edit_buffer);
        }
        self.edit_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_edit_title(&mut self) {
        self.editing_id = None;
        self.edit_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    // --- Search ---

    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::Searching;
    }

    pub fn finish_search(&mut self) {
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    // --- Daily goal ---

    pub fn adjust_daily_goal(&mut self, delta: i32) {
        let goal = (self.daily_goal as i32 + delta).clamp(1, MAX_DAILY_GOAL as i32) as u32;
        if goal != self.daily_goal {
            self.daily_goal = goal;
            self.meta_needs_save = true;
        }
    }

    // --- Ticking and persistence ---

    /// Advance the focus timer by however many whole seconds have elapsed
    /// since the last call. When a session completes, the bound task is
    /// marked complete through the store.
    pub fn tick(&mut self) {
        let step = ticker::timer_tick();
        while self.last_timer_tick.elapsed() >= step {
            self.last_timer_tick += step;
            if let Some(finished) = self.timer.tick() {
                self.store.toggle_complete(finished);
            }
        }
    }

    pub fn save(&mut self) -> Result<()> {
        let path = persistence::tasks_file()?;
        persistence::save_tasks(path, self.store.tasks())?;
        self.store.needs_save = false;
        Ok(())
    }

    pub fn save_metadata(&mut self) -> Result<()> {
        let path = persistence::meta_file()?;
        persistence::save_metadata(
            path,
            &AppMetadata {
                daily_goal: self.daily_goal,
            },
        )?;
        self.meta_needs_save = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Phase;

    fn app_with(titles: &[&str]) -> AppState {
        let mut app = AppState::new(Vec::new(), AppMetadata::default());
        for title in titles {
            app.store.add(title, None, Priority::Medium, 1);
        }
        app
    }

    #[test]
    fn test_selection_follows_visible_list() {
        let mut app = app_with(&["a", "b", "c"]);
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index, 2);
        app.move_selection_down();
        assert_eq!(app.selected_index, 2);

        app.delete_selected();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_toggle_selected_complete() {
        let mut app = app_with(&["only"]);
        app.toggle_selected_complete();
        assert!(app.store.tasks()[0].completed);
    }

    #[test]
    fn test_completed_task_locks_priority_and_estimate() {
        let mut app = app_with(&["done soon"]);
        app.toggle_selected_complete();
        app.cycle_selected_priority();
        app.adjust_selected_time(1);

        assert_eq!(app.store.tasks()[0].priority, Priority::Medium);
        assert_eq!(app.store.tasks()[0].time_required, 1);
    }

    #[test]
    fn test_adjust_time_clamps() {
        let mut app = app_with(&["task"]);
        app.adjust_selected_time(10);
        assert_eq!(app.store.tasks()[0].time_required, MAX_TIME_REQUIRED);
        app.adjust_selected_time(-10);
        assert_eq!(app.store.tasks()[0].time_required, 1);
    }

    #[test]
    fn test_shift_selected_date() {
        let mut app = app_with(&["task"]);
        let original = app.store.tasks()[0].date;

        app.shift_selected_date(1);
        assert_eq!(app.store.tasks()[0].date, original + chrono::Duration::days(1));

        app.shift_selected_date(-2);
        assert_eq!(app.store.tasks()[0].date, original - chrono::Duration::days(1));
    }

    #[test]
    fn test_start_focus_selected_binds_timer() {
        let mut app = app_with(&["focus me"]);
        app.adjust_selected_time(1); // 2 minutes
        app.start_focus_selected();

        assert_eq!(app.timer.phase, Phase::Working);
        assert_eq!(app.timer.sessions_left, 10);
        assert_eq!(app.timer.bound_task_id, Some(app.store.tasks()[0].id));
    }

    #[test]
    fn test_start_focus_skips_completed() {
        let mut app = app_with(&["done"]);
        app.toggle_selected_complete();
        // completed task still visible under All
        app.start_focus_selected();
        assert_eq!(app.timer.phase, Phase::Idle);
    }

    #[test]
    fn test_session_completion_marks_task_done() {
        let mut app = app_with(&["one minute"]);
        let id = app.store.tasks()[0].id;
        app.start_focus_selected();
        app.timer.sessions_left = 1;

        for _ in 0..25 {
            app.timer.tick();
        }
        app.timer.resume();
        let mut finished = None;
        for _ in 0..5 {
            if let Some(done) = app.timer.tick() {
                finished = Some(done);
            }
        }

        assert_eq!(finished, Some(id));
        app.store.toggle_complete(finished.unwrap());
        assert!(app.store.tasks()[0].completed);
        assert_eq!(app.timer.phase, Phase::Idle);
    }

    #[test]
    fn test_submit_form_rejects_blank_title() {
        let mut app = app_with(&[]);
        app.start_add_task();
        assert!(!app.submit_input_form());
        assert!(app.input_form.is_some());
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_submit_form_rejects_bad_date() {
        let mut app = app_with(&[]);
        app.start_add_task();
        let form = app.input_form.as_mut().unwrap();
        form.title = "task".to_string();
        form.date = "tomorrow-ish".to_string();

        assert!(!app.submit_input_form());
        assert!(app.input_form.is_some());
    }

    #[test]
    fn test_submit_form_adds_task() {
        let mut app = app_with(&[]);
        app.start_add_task();
        let form = app.input_form.as_mut().unwrap();
        form.title = "new task".to_string();
        form.date = "2026-09-01".to_string();
        form.priority = Priority::High;
        form.time_required = 3;

        assert!(app.submit_input_form());
        assert!(app.input_form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);

        let task = &app.store.tasks()[0];
        assert_eq!(task.title, "new task");
        assert_eq!(task.date, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.time_required, 3);
    }

    #[test]
    fn test_edit_title_commit_and_cancel() {
        let mut app = app_with(&["old name"]);
        let id = app.store.tasks()[0].id;

        app.start_edit_title();
        assert!(app.is_editing(id));
        assert_eq!(app.edit_buffer, "old name");

        app.edit_buffer = "new name".to_string();
        app.commit_edit_title();
        assert_eq!(app.store.tasks()[0].title, "new name");
        assert!(!app.is_editing(id));

        app.start_edit_title();
        app.edit_buffer = "discarded".to_string();
        app.cancel_edit_title();
        assert_eq!(app.store.tasks()[0].title, "new name");
    }

    #[test]
    fn test_edit_mode_never_touches_the_snapshot() {
        let mut app = app_with(&["task"]);
        app.start_edit_title();

        let json = serde_json::to_string(app.store.tasks()).unwrap();
        assert!(!json.contains("edit"));
    }

    #[test]
    fn test_tab_switch_resets_selection() {
        let mut app = app_with(&["a", "b"]);
        app.move_selection_down();
        app.next_tab();
        assert_eq!(app.active_tab, FilterTab::Pending);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_daily_goal_clamps() {
        let mut app = app_with(&[]);
        app.adjust_daily_goal(100);
        assert_eq!(app.daily_goal, MAX_DAILY_GOAL);
        app.adjust_daily_goal(-100);
        assert_eq!(app.daily_goal, 1);
        assert!(app.meta_needs_save);
    }

    #[test]
    fn test_search_narrows_visible() {
        let mut app = app_with(&["write report", "read book"]);
        app.search = "report".to_string();
        let titles: Vec<&str> = app.visible().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["write report"]);
    }
}
