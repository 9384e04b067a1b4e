use crate::app::{AppState, InputFormState};
use crate::domain::{FilterTab, UiMode};
use crate::timer::Phase;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::EditingTitle => handle_edit_title_mode(app, key),
        UiMode::Searching => handle_search_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completed
        KeyCode::Enter => {
            app.toggle_selected_complete();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') => {
            app.start_add_task();
            Ok(false)
        }

        // Edit title inline
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_title();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Clear all completed tasks
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.clear_completed();
            Ok(false)
        }

        // Cycle priority
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.cycle_selected_priority();
            Ok(false)
        }

        // Adjust minute estimate
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_selected_time(1);
            Ok(false)
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.adjust_selected_time(-1);
            Ok(false)
        }

        // Shift scheduled date
        KeyCode::Char('d') => {
            app.shift_selected_date(1);
            Ok(false)
        }
        KeyCode::Char('D') => {
            app.shift_selected_date(-1);
            Ok(false)
        }

        // Daily goal
        KeyCode::Char('g') => {
            app.adjust_daily_goal(1);
            Ok(false)
        }
        KeyCode::Char('G') => {
            app.adjust_daily_goal(-1);
            Ok(false)
        }

        // Focus timer
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.start_focus_selected();
            Ok(false)
        }
        KeyCode::Char(' ') => {
            if app.timer.phase != Phase::Idle {
                app.timer.toggle_running();
            }
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.timer.reset();
            Ok(false)
        }

        // Filter tabs
        KeyCode::Tab => {
            app.next_tab();
            Ok(false)
        }
        KeyCode::BackTab => {
            app.prev_tab();
            Ok(false)
        }
        KeyCode::Char('1') => {
            app.set_tab(FilterTab::All);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_tab(FilterTab::Pending);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_tab(FilterTab::Completed);
            Ok(false)
        }
        KeyCode::Char('4') => {
            app.set_tab(FilterTab::High);
            Ok(false)
        }
        KeyCode::Char('5') => {
            app.set_tab(FilterTab::Today);
            Ok(false)
        }

        // Search
        KeyCode::Char('/') => {
            app.start_search();
            Ok(false)
        }
        KeyCode::Esc => {
            app.clear_search();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add-task form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_input_form();
        }
        KeyCode::Enter => {
            // Keeps the form open on blank title or unparseable date
            app.submit_input_form();
        }
        KeyCode::Tab => {
            if let Some(form) = app.input_form.as_mut() {
                form.editing_field = (form.editing_field + 1) % InputFormState::FIELD_COUNT;
            }
        }
        KeyCode::BackTab => {
            if let Some(form) = app.input_form.as_mut() {
                form.editing_field =
                    (form.editing_field + InputFormState::FIELD_COUNT - 1)
                        % InputFormState::FIELD_COUNT;
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.input_form.as_mut() {
                match form.editing_field {
                    0 => form.title.push(c),
                    1 => form.date.push(c),
                    _ => {}
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.input_form.as_mut() {
                match form.editing_field {
                    0 => {
                        form.title.pop();
                    }
                    1 => {
                        form.date.pop();
                    }
                    _ => {}
                }
            }
        }
        KeyCode::Left | KeyCode::Right => {
            if let Some(form) = app.input_form.as_mut() {
                let forward = key.code == KeyCode::Right;
                match form.editing_field {
                    2 => {
                        // next() cycles, so going left is two steps forward
                        form.priority = if forward {
                            form.priority.next()
                        } else {
                            form.priority.next().next()
                        };
                    }
                    3 => {
                        form.time_required = if forward {
                            (form.time_required + 1).min(crate::app::MAX_TIME_REQUIRED)
                        } else {
                            form.time_required.saturating_sub(1).max(1)
                        };
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Handle keys during inline title editing
fn handle_edit_title_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.commit_edit_title(),
        KeyCode::Esc => app.cancel_edit_title(),
        KeyCode::Char(c) => app.edit_buffer.push(c),
        KeyCode::Backspace => {
            app.edit_buffer.pop();
        }
        _ => {}
    }
    Ok(false)
}

/// Handle keys while typing a search
fn handle_search_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.finish_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Char(c) => app.search.push(c),
        KeyCode::Backspace => {
            app.search.pop();
        }
        _ => {}
    }
    Ok(false)
}
