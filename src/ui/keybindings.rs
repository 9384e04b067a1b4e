use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{hint_style, search_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar (shows the search prompt while typing)
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode == UiMode::Searching {
        let prompt = Line::from(vec![
            Span::styled(" search: ", search_style()),
            Span::styled(format!("{}█", app.search), search_style()),
        ]);
        f.render_widget(Paragraph::new(prompt), area);
        return;
    }

    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Enter done   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("x delete   "),
        Span::raw("p priority   "),
        Span::raw("d/D date   "),
        Span::raw("+/- est   "),
        Span::raw("c clear done   "),
        Span::raw("f focus   "),
        Span::raw("space pause   "),
        Span::raw("r reset   "),
        Span::raw("Tab/1-5 filter   "),
        Span::raw("/ search   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
