use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub timer_area: Rect,
    pub list_area: Rect,
    pub stats_area: Rect,
    pub tabs_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top bar: focus timer (3 rows)
/// - Main area: task list (70%) | stats sidebar (30%)
/// - Bottom: filter tab bar (1 row) above keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Timer bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Filter tabs
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Task list
            Constraint::Percentage(30), // Stats sidebar
        ])
        .split(vertical[1]);

    MainLayout {
        timer_area: vertical[0],
        list_area: horizontal[0],
        stats_area: horizontal[1],
        tabs_area: vertical[2],
        keybindings_area: vertical[3],
    }
}

/// Create a centered modal area (for the add-task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
