use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::{item_ops, view_ops};
use crate::tui::app::{App, Mode};
use crate::tui::prompt::Prompt;

/// Keys while a prompt (search, add, edit) is open
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            commit(app);
            return;
        }
        KeyCode::Esc => {
            cancel(app);
            return;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.prompt.insert_char(c);
        }
        KeyCode::Backspace => {
            app.prompt.backspace();
        }
        KeyCode::Delete => {
            app.prompt.delete();
        }
        KeyCode::Left => app.prompt.move_left(),
        KeyCode::Right => app.prompt.move_right(),
        KeyCode::Home => app.prompt.home(),
        KeyCode::End => app.prompt.end(),
        _ => return,
    }

    // Search is live: every buffer change re-filters
    if app.mode == Mode::Search {
        let term = app.prompt.buffer.clone();
        view_ops::set_search_term(&mut app.list, &term);
        app.cursor = 0;
        app.scroll_offset = 0;
    }
}

fn commit(app: &mut App) {
    let prompt = std::mem::take(&mut app.prompt);
    match app.mode {
        Mode::Add => {
            if let Some(id) = item_ops::add(&mut app.list, &prompt.buffer) {
                app.select_id(id);
            }
        }
        Mode::Edit(id) => {
            item_ops::edit(&mut app.list, id, Some(&prompt.buffer));
            app.select_id(id);
        }
        Mode::Search | Mode::Navigate => {}
    }
    app.mode = Mode::Navigate;
}

fn cancel(app: &mut App) {
    app.prompt = Prompt::default();
    match app.mode {
        Mode::Edit(id) => {
            item_ops::edit(&mut app.list, id, None);
        }
        Mode::Search => {
            view_ops::set_search_term(&mut app.list, "");
        }
        Mode::Add | Mode::Navigate => {}
    }
    app.mode = Mode::Navigate;
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use crate::model::{Composition, Config, StatusFilter};
    use crate::ops::item_ops;
    use crate::tui::app::{App, Mode};
    use crate::tui::input::test_keys::*;

    fn app_with(texts: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for text in texts {
            item_ops::add(&mut app.list, text);
        }
        app
    }

    fn shown(app: &App) -> Vec<String> {
        app.visible_items().iter().map(|i| i.text.clone()).collect()
    }

    #[test]
    fn test_add_via_prompt() {
        let mut app = app_with(&["A"]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "  Buy milk ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(shown(&app), vec!["A", "Buy milk"]);
        assert_eq!(app.cursor, 1);
        assert!(app.prompt.buffer.is_empty());
    }

    #[test]
    fn test_blank_add_is_noop() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_esc_discards_add() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_edit_via_prompt() {
        let mut app = app_with(&["Buy milk"]);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Home);
        type_str(&mut app, "Please ");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "bread");
        press(&mut app, KeyCode::Enter);
        assert_eq!(shown(&app), vec!["Please Buy bread"]);
    }

    #[test]
    fn test_cancelled_edit_keeps_text() {
        let mut app = app_with(&["Buy milk"]);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, " and eggs");
        press(&mut app, KeyCode::Esc);
        assert_eq!(shown(&app), vec!["Buy milk"]);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn test_live_search() {
        let mut app = app_with(&["milk", "more milk", "bread"]);
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "mi");
        assert_eq!(shown(&app), vec!["milk", "more milk"]);
        type_str(&mut app, "lkx");
        assert!(shown(&app).is_empty());
        press(&mut app, KeyCode::Backspace);
        assert_eq!(shown(&app), vec!["milk", "more milk"]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.list.view.search_term, "milk");
    }

    #[test]
    fn test_esc_in_search_clears_term() {
        let mut app = app_with(&["milk", "bread"]);
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "bread");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.list.view.search_term, "");
        assert_eq!(shown(&app), vec!["milk", "bread"]);
    }

    #[test]
    fn test_exclusive_tab_switch_drops_search() {
        let mut config = Config::default();
        config.view.composition = Composition::Exclusive;
        let mut app = App::new(&config);
        item_ops::add(&mut app.list, "milk");
        let bread = item_ops::add(&mut app.list, "bread").unwrap();
        item_ops::toggle(&mut app.list, bread);

        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "milk");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.list.view.status_filter, StatusFilter::Completed);
        assert_eq!(shown(&app), vec!["bread"]);
    }
}
