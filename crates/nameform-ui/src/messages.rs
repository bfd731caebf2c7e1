use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthChar;

use nameform_core::render::MessageCard;

/// Scroll position of the message list.
///
/// `offset` counts cards hidden below the view; `0` keeps the newest
/// message in sight as new ones arrive.
#[derive(Debug, Default)]
pub struct MessageListState {
    offset: usize,
}

impl MessageListState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll towards older messages, stopping at the first one.
    pub fn scroll_up(&mut self, amount: usize, total: usize) {
        let max_offset = total.saturating_sub(1);
        self.offset = (self.offset + amount).min(max_offset);
    }

    /// Scroll towards newer messages.
    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Pin the list to the newest message.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Break `text` into rows no wider than `width` columns.
///
/// Wrapping is per character so row count, and therefore card height, is
/// exact for any input.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if row_width + w > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(c);
        row_width += w;
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Rows a card occupies at `width`, borders included.
pub fn card_height(card: &MessageCard, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    (wrap_text(&card.text, inner).len() as u16).saturating_add(2)
}

/// Draw the message list, one bordered card per message.
///
/// Cards are chosen from the newest end (minus the scroll offset) until the
/// area is full, then laid out top to bottom in list order.
pub fn render_messages(f: &mut Frame, area: Rect, cards: &[MessageCard], state: &MessageListState) {
    if area.width < 3 || area.height == 0 {
        return;
    }

    if cards.is_empty() {
        let hint = Paragraph::new(Line::from("No messages yet. Type a name and press Enter."))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, area);
        return;
    }

    let mut visible = Vec::new();
    let mut used: u16 = 0;
    for card in cards.iter().rev().skip(state.offset()) {
        let height = card_height(card, area.width);
        if used + height > area.height {
            break;
        }
        used += height;
        visible.push((card, height));
    }

    let mut y = area.y;
    for (card, height) in visible.into_iter().rev() {
        let rect = Rect::new(area.x, y, area.width, height);
        let lines: Vec<Line> = wrap_text(&card.text, area.width - 2)
            .into_iter()
            .map(Line::from)
            .collect();
        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(widget, rect);
        y += height;
    }
}
