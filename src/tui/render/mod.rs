pub mod list_view;
pub mod search_bar;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthChar;

use crate::ops::search::TermMatcher;

use super::app::App;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | search (1 row) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    search_bar::render_search_bar(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}

/// Push spans for text with search-hit highlighting. With no matcher or no
/// hits, pushes a single span with `base_style`.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    matcher: Option<&TermMatcher>,
) {
    let hits = matcher.map(|m| m.find_matches(text)).unwrap_or_default();
    let mut last_end = 0;
    for hit in hits {
        if hit.start > last_end {
            spans.push(Span::styled(
                text[last_end..hit.start].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(text[hit.clone()].to_string(), highlight_style));
        last_end = hit.end;
    }
    if last_end < text.len() || text.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Cut `s` to at most `max_cells` terminal cells, ending in `…` when cut.
pub(super) fn truncate_to_width(s: &str, max_cells: usize) -> String {
    let cell_width = |c: char| c.width().unwrap_or(0);
    if s.chars().map(cell_width).sum::<usize>() <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = cell_width(c);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('\u{2026}');
    out
}
