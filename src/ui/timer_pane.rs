use crate::app::AppState;
use crate::timer::Phase;
use crate::ui::styles::{
    border_style, hint_style, timer_break_style, timer_idle_style, timer_working_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the focus timer bar at the top of the screen
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = &app.timer;

    let clock_style = match timer.phase {
        Phase::Working if timer.running => timer_working_style(),
        Phase::Break if timer.running => timer_break_style(),
        _ => timer_idle_style(),
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", timer.clock()), clock_style),
        Span::raw("· "),
        Span::raw(timer.phase.label()),
    ];

    match timer.phase {
        Phase::Idle => {
            spans.push(Span::styled(
                "   (select a task and press f to focus)",
                hint_style(),
            ));
        }
        _ => {
            let bound_title = timer
                .bound_task_id
                .and_then(|id| app.store.task(id))
                .map(|t| t.title.as_str())
                .unwrap_or("(task removed)");
            spans.push(Span::raw(format!("  {}", bound_title)));
            spans.push(Span::raw(format!(
                "   sessions left: {}",
                timer.sessions_left
            )));
            if !timer.running {
                spans.push(Span::styled("   ⏸ paused (space to resume)", hint_style()));
            }
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" TaskFlow Timer ", title_style())),
    );

    f.render_widget(paragraph, area);
}
