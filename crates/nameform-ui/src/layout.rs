use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the "Add name" button column.
pub const BUTTON_WIDTH: u16 = 14;

#[derive(Debug, Clone, Copy)]
pub struct FormRects {
    pub top: Rect,
    pub input: Rect,
    pub button: Rect,
    pub messages: Rect,
    pub status: Rect,
}

/// Split `area` into title bar, input row, message list and status bar.
pub fn form_layout(area: Rect, button_width: u16) -> FormRects {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(3), // input row
            Constraint::Min(1),    // messages
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let row = chunks[1];
    let button_width = button_width.min(row.width / 2);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(button_width)])
        .split(row);

    FormRects {
        top: chunks[0],
        input: cols[0],
        button: cols[1],
        messages: chunks[2],
        status: chunks[3],
    }
}
