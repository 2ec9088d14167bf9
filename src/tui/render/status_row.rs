use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode};

const NAVIGATE_HINTS: &str = "a add  e edit  x toggle  d del  s sort  ? keys  q quit";
const PROMPT_HINTS: &str = "Enter save  Esc cancel";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (mut spans, hint) = match app.mode {
        Mode::Add | Mode::Edit(_) => {
            let label = if app.mode == Mode::Add { " add: " } else { " edit: " };
            let (before, after) = app.prompt.buffer.split_at(app.prompt.cursor);
            let spans = vec![
                Span::styled(label, Style::default().fg(app.theme.purple).bg(bg)),
                Span::styled(
                    before.to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(
                    after.to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
            ];
            (spans, PROMPT_HINTS)
        }
        Mode::Navigate | Mode::Search => {
            let view = &app.list.view;
            let mut spans = vec![Span::styled(
                format!(" sort {}", view.sort_option.label()),
                Style::default().fg(app.theme.text).bg(bg),
            )];
            if !view.sort_applied {
                spans.push(Span::styled(
                    " (off)",
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            let hint = if app.mode == Mode::Navigate && app.show_key_hints {
                NAVIGATE_HINTS
            } else {
                ""
            };
            (spans, hint)
        }
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
