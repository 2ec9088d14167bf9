use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::StatusFilter;
use crate::tui::app::App;

/// Render the tab bar: one tab per status filter with counts, separator below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.push(Span::styled(
        "\u{25B6}",
        Style::default().fg(app.theme.purple).bg(bg),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let counts = app.list.counts();
    let effective = app.list.view.effective_status(app.list.composition);
    for tab in StatusFilter::TABS {
        let count = match tab {
            StatusFilter::All => counts.all,
            StatusFilter::Active => counts.active,
            StatusFilter::Completed => counts.completed,
        };
        let is_current = app.list.view.status_filter == tab;
        let style = tab_style(app, is_current, is_current && effective == tab);
        spans.push(Span::styled(format!(" {} {} ", tab.label(), count), style));
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    let line = Line::from(spans);
    let tabs = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let line: String = (0..width)
        .map(|col| {
            if sep_cols.contains(&col) {
                '\u{2534}'
            } else {
                '\u{2500}'
            }
        })
        .collect();
    let sep_widget =
        Paragraph::new(line).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(sep_widget, area);
}

/// Selected tab is highlighted; a selected tab shadowed by the search
/// (exclusive composition) keeps the selection background but dims.
fn tab_style(app: &App, is_current: bool, in_effect: bool) -> Style {
    match (is_current, in_effect) {
        (true, true) => Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default()
            .fg(app.theme.dim)
            .bg(app.theme.selection_bg),
        _ => Style::default().fg(app.theme.text).bg(app.theme.background),
    }
}
