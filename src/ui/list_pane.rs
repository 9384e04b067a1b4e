use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, done_style, modal_title_style, priority_style, search_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible();

    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new(Line::raw("  No tasks found"))]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let line = create_task_line(app, task);
                let style = if idx == app.selected_index {
                    selected_style()
                } else if task.completed {
                    done_style()
                } else {
                    default_style()
                };

                ListItem::new(line).style(style)
            })
            .collect()
    };

    let title = if app.search.is_empty() {
        format!(" Tasks — {} ", app.active_tab.label())
    } else {
        format!(" Tasks — {} /{} ", app.active_tab.label(), app.search)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a task
/// Format: ● Write proposal  2026-08-30 [High] ⏰ 2m
fn create_task_line(app: &AppState, task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let checkbox = if task.completed { "✔ " } else { "○ " };
    spans.push(Span::raw(checkbox.to_string()));

    // Title, with the inline edit buffer shown while editing
    if app.is_editing(task.id) {
        spans.push(Span::styled(
            format!("{}█", app.edit_buffer),
            modal_title_style(),
        ));
    } else {
        spans.push(Span::raw(task.title.clone()));
    }

    spans.push(Span::raw("  ".to_string()));
    spans.push(Span::raw(task.date.format("%Y-%m-%d").to_string()));

    spans.push(Span::raw(" ".to_string()));
    spans.push(Span::styled(
        format!("[{}]", task.priority.label()),
        priority_style(task.priority),
    ));

    spans.push(Span::raw(format!(" ⏰ {}m", task.time_required)));

    // Mark the task the focus timer is bound to
    if app.timer.bound_task_id == Some(task.id) {
        spans.push(Span::styled(" ▶ focus".to_string(), search_style()));
    }

    Line::from(spans)
}
