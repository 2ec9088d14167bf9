use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode};

/// Render the search line under the tab bar
pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let view = &app.list.view;

    let (mut spans, hint) = if app.mode == Mode::Search {
        let (before, after) = app.prompt.buffer.split_at(app.prompt.cursor);
        let spans = vec![
            Span::styled(
                format!(" /{}", before),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(
                after.to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ];
        (spans, "Enter keep  Esc clear")
    } else if view.search_term.is_empty() {
        let spans = vec![Span::styled(
            " / to search",
            Style::default().fg(app.theme.dim).bg(bg),
        )];
        (spans, "")
    } else if view.search_applied(app.list.composition) {
        let spans = vec![Span::styled(
            format!(" /{}", view.search_term),
            Style::default().fg(app.theme.text).bg(bg),
        )];
        (spans, "Esc clear")
    } else {
        let spans = vec![Span::styled(
            format!(" /{} (not applied)", view.search_term),
            Style::default().fg(app.theme.dim).bg(bg),
        )];
        (spans, "")
    };

    let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let hint_width = hint.width();
    if !hint.is_empty() && content_width + hint_width + 1 < width {
        let padding = width - content_width - hint_width - 1;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
