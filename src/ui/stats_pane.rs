use crate::app::AppState;
use crate::ui::styles::{border_style, gauge_style, hint_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the stats sidebar: counts over the whole list plus the daily goal
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Overview ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Counts
            Constraint::Length(3), // Daily goal gauge
        ])
        .split(inner);

    let stats = app.stats();
    let lines = vec![
        stat_line("Pending", stats.pending),
        stat_line("Completed", stats.completed),
        stat_line("Urgent", stats.high_priority),
        stat_line("Total", stats.total),
        Line::raw(""),
        Line::from(Span::styled("g/G adjust daily goal", hint_style())),
    ];
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let completed_today = app.completed_today();
    let ratio = (completed_today as f64 / app.daily_goal as f64).min(1.0);
    let gauge = Gauge::default()
        .block(Block::default().title(Span::styled("Daily Goal", title_style())))
        .gauge_style(gauge_style())
        .ratio(ratio)
        .label(format!("{}/{}", completed_today, app.daily_goal));
    f.render_widget(gauge, chunks[1]);
}

fn stat_line(label: &str, value: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<12}", label)),
        Span::raw(value.to_string()),
    ])
}
