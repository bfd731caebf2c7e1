use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use nameform_core::input::InputField;

/// Draw the text-entry box and the submit button beside it.
///
/// The terminal cursor is placed inside the box when `show_cursor` is set.
/// Text wider than the box scrolls so the cursor stays visible.
pub fn render_input_row(
    f: &mut Frame,
    input_area: Rect,
    button_area: Rect,
    field: &InputField,
    show_cursor: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Name ");
    let inner = block.inner(input_area);

    let cursor_col = field.before_cursor().width() as u16;
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));

    let text = if field.buffer.is_empty() {
        Line::from(Span::styled(
            "type a name",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(field.buffer.as_str())
    };

    f.render_widget(
        Paragraph::new(text).block(block).scroll((0, scroll)),
        input_area,
    );

    let button = Paragraph::new(Line::from("Add name"))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick),
        );
    f.render_widget(button, button_area);

    if show_cursor && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position((inner.x + cursor_col - scroll, inner.y));
    }
}
