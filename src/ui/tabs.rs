use crate::app::AppState;
use crate::domain::FilterTab;
use crate::ui::styles::{active_tab_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the filter tab bar
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for (i, tab) in FilterTab::all().iter().enumerate() {
        let label = format!("{} {}", i + 1, tab.label());
        if *tab == app.active_tab {
            spans.push(Span::styled(format!("[{}]", label), active_tab_style()));
        } else {
            spans.push(Span::styled(format!(" {} ", label), hint_style()));
        }
        spans.push(Span::raw("  "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
