use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::layout::FormRects;

pub struct ShellView<'a> {
    pub title: &'a str,
    pub status_line: &'a str,
    /// Accepted submits since the screen was created.
    pub accepted: u32,
    /// Accepted submits whose message has not landed yet.
    pub in_flight: usize,
    pub message_count: usize,
}

/// Draw the title and status bars, then hand the remaining regions to `body`.
pub fn render_shell(
    f: &mut Frame,
    rects: FormRects,
    view: ShellView<'_>,
    body: impl FnOnce(&mut Frame, &FormRects),
) {
    let top = Line::from(vec![
        Span::styled(
            format!(" {} ", view.title),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Enter: add  Ctrl-R: recreate  Esc: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(top), rects.top);

    body(f, &rects);

    let status = Line::from(vec![
        Span::raw(format!(
            " accepted: {}  pending: {}  messages: {} ",
            view.accepted, view.in_flight, view.message_count
        )),
        Span::styled(
            view.status_line.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(status).style(Style::default().bg(Color::Black).fg(Color::White)),
        rects.status,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{form_layout, BUTTON_WIDTH};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn shows_title_counts_and_status() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut body_called = false;
        terminal
            .draw(|f| {
                let rects = form_layout(f.area(), BUTTON_WIDTH);
                let view = ShellView {
                    title: "NAMEFORM",
                    status_line: "INFO name accepted",
                    accepted: 2,
                    in_flight: 1,
                    message_count: 1,
                };
                render_shell(f, rects, view, |_, _| body_called = true);
            })
            .unwrap();

        assert!(body_called);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol().to_string())
            .collect();
        assert!(text.contains("NAMEFORM"));
        assert!(text.contains("accepted: 2"));
        assert!(text.contains("pending: 1"));
        assert!(text.contains("INFO name accepted"));
    }
}
