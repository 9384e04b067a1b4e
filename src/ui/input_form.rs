use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add-task form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(field_label("Title:", form.editing_field == 0));
        lines.push(text_field(&form.title, form.editing_field == 0));
        lines.push(Line::raw(""));

        lines.push(field_label(
            "Date (YYYY-MM-DD, empty = today):",
            form.editing_field == 1,
        ));
        lines.push(text_field(&form.date, form.editing_field == 1));
        lines.push(Line::raw(""));

        lines.push(field_label("Priority (←/→):", form.editing_field == 2));
        lines.push(choice_field(form.priority.label(), form.editing_field == 2));
        lines.push(Line::raw(""));

        lines.push(field_label("Estimate (←/→):", form.editing_field == 3));
        lines.push(choice_field(
            &format!("{} minute(s)", form.time_required),
            form.editing_field == 3,
        ));
        lines.push(Line::raw(""));

        lines.push(Line::raw(
            "Tab to switch fields  ·  Enter to add  ·  Esc to cancel",
        ));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

fn field_label(label: &str, active: bool) -> Line<'static> {
    if active {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label.to_string())
    }
}

fn text_field(value: &str, active: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
    ];
    if active {
        spans.push(Span::styled("█", modal_title_style())); // Cursor
    }
    Line::from(spans)
}

fn choice_field(value: &str, active: bool) -> Line<'static> {
    let text = if active {
        format!("> ◂ {} ▸", value)
    } else {
        format!(">   {}", value)
    };
    Line::from(Span::styled(text, modal_title_style()))
}
