use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::view_ops::active_matcher;
use crate::tui::app::App;

use super::{push_highlighted_spans, truncate_to_width};

/// Render the visible items, one per row, keeping the cursor row on screen
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let width = area.width as usize;

    app.clamp_cursor();
    app.scroll_to_cursor(height);

    let items = app.visible_items();
    if items.is_empty() {
        let message = if app.list.is_empty() {
            "  Nothing to do. Press a to add an item."
        } else {
            "  No items match."
        };
        let paragraph = Paragraph::new(Span::styled(
            message,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
        .style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let matcher = active_matcher(&app.list);
    let highlight = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    let mut lines: Vec<Line> = Vec::with_capacity(height);
    for (idx, item) in items.iter().enumerate().skip(app.scroll_offset).take(height) {
        let is_cursor = idx == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let mut base = Style::default().fg(app.theme.item_color(item.completed)).bg(row_bg);
        if item.completed {
            base = base.add_modifier(Modifier::CROSSED_OUT);
        }

        let mut spans = vec![
            Span::styled(
                if is_cursor { " \u{25B8}" } else { "  " },
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ),
            Span::styled(
                format!(" [{}] ", item.checkbox_char()),
                Style::default()
                    .fg(if item.completed { app.theme.green } else { app.theme.text })
                    .bg(row_bg),
            ),
        ];
        let prefix_width = 7;
        let text = truncate_to_width(&item.text, width.saturating_sub(prefix_width));
        push_highlighted_spans(&mut spans, &text, base, highlight, matcher.as_ref());

        if is_cursor {
            // Extend the selection background to the right edge
            let used: usize = prefix_width + unicode_width::UnicodeWidthStr::width(text.as_str());
            if used < width {
                spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{item_ops, view_ops};
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render(app: &mut App, h: u16) -> String {
        render_to_string(TERM_W, h, |frame, area| render_list_view(frame, app, area))
    }

    #[test]
    fn test_empty_list_message() {
        let mut app = app_with_items(&[]);
        assert_eq!(render(&mut app, 3), "  Nothing to do. Press a to add an item.");
    }

    #[test]
    fn test_no_match_message() {
        let mut app = app_with_items(&["milk"]);
        view_ops::set_search_term(&mut app.list, "bread");
        assert_eq!(render(&mut app, 3), "  No items match.");
    }

    #[test]
    fn test_rows_with_cursor_and_checkboxes() {
        let mut app = app_with_items(&["Buy milk", "Walk dog"]);
        let id = app.list.items[1].id;
        item_ops::toggle(&mut app.list, id);
        app.cursor = 1;
        let output = render(&mut app, TERM_H);
        assert_eq!(
            output,
            "   [ ] Buy milk\n \u{25B8} [x] Walk dog"
        );
    }

    #[test]
    fn test_scrolls_to_cursor() {
        let texts: Vec<String> = (1..=10).map(|n| format!("item {}", n)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut app = app_with_items(&refs);
        app.cursor = 9;
        let output = render(&mut app, 3);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("item 8"));
        assert!(lines[2].ends_with("item 10"));
        assert_eq!(app.scroll_offset, 7);
    }

    #[test]
    fn test_search_hits_highlighted() {
        let mut app = app_with_items(&["Buy milk"]);
        view_ops::set_search_term(&mut app.list, "MILK");
        let theme = app.theme.clone();
        let buf = render_to_buffer(TERM_W, 1, |frame, area| {
            render_list_view(frame, &mut app, area)
        });
        // "  " + " [ ] " + "Buy " puts the hit at column 11
        assert_eq!(buf[(11, 0)].symbol(), "m");
        assert_eq!(buf[(11, 0)].bg, theme.search_match_bg);
        assert_eq!(buf[(10, 0)].bg, theme.selection_bg);
    }

    #[test]
    fn test_long_text_truncated() {
        let long = "x".repeat(100);
        let mut app = app_with_items(&[long.as_str()]);
        let output = render(&mut app, 1);
        assert!(output.ends_with('\u{2026}'));
        assert_eq!(output.chars().count(), TERM_W as usize);
    }
}
