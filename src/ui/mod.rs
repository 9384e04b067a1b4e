pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod stats_pane;
pub mod styles;
pub mod tabs;
pub mod timer_pane;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use stats_pane::render_stats_pane;
use tabs::render_tabs;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_timer_pane(f, app, layout.timer_area);
    render_list_pane(f, app, layout.list_area);
    render_stats_pane(f, app, layout.stats_area);
    render_tabs(f, app, layout.tabs_area);
    render_keybindings(f, app, layout.keybindings_area);

    // The add-task form floats over everything else
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
