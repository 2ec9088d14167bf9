use crossterm::event::{KeyCode, KeyEvent};

use crate::model::StatusFilter;
use crate::ops::{item_ops, view_ops};
use crate::tui::app::{App, Mode};
use crate::tui::prompt::Prompt;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_key_hints = !app.show_key_hints,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.cursor = app.cursor.saturating_add(1),
        KeyCode::Char('k') | KeyCode::Up => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = usize::MAX,

        // Prompts
        KeyCode::Char('a') => {
            app.prompt = Prompt::default();
            app.mode = Mode::Add;
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_id()
                && let Some(item) = app.list.find(id)
            {
                app.prompt = Prompt::new(&item.text);
                app.mode = Mode::Edit(id);
            }
        }
        KeyCode::Char('/') => {
            app.prompt = Prompt::new(&app.list.view.search_term);
            app.mode = Mode::Search;
        }
        KeyCode::Esc => {
            if !app.list.view.search_term.is_empty() {
                view_ops::set_search_term(&mut app.list, "");
            }
        }

        // Item operations
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id() {
                item_ops::toggle(&mut app.list, id);
                app.select_id(id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_id() {
                item_ops::delete(&mut app.list, id);
            }
        }
        KeyCode::Char('A') => {
            item_ops::select_all(&mut app.list);
        }
        KeyCode::Char('D') => {
            item_ops::deselect_all(&mut app.list);
        }
        KeyCode::Char('X') => {
            item_ops::delete_selected(&mut app.list);
        }

        // View knobs
        KeyCode::Char(c @ '1'..='3') => {
            let tab = StatusFilter::TABS[(c as u8 - b'1') as usize];
            switch_tab(app, tab);
        }
        KeyCode::Tab => switch_tab(app, app.list.view.status_filter.next()),
        KeyCode::BackTab => switch_tab(app, app.list.view.status_filter.prev()),
        KeyCode::Char('s') => {
            // First press applies the displayed option, later presses cycle
            let option = if app.list.view.sort_applied {
                app.list.view.sort_option.next()
            } else {
                app.list.view.sort_option
            };
            view_ops::set_sort_option(&mut app.list, option);
        }
        _ => {}
    }
}

fn switch_tab(app: &mut App, tab: StatusFilter) {
    view_ops::set_status_filter(&mut app.list, tab);
    app.cursor = 0;
    app.scroll_offset = 0;
}
