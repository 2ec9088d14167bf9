use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, Item, ItemId, TodoList};
use crate::ops::view_ops::visible;

use super::input;
use super::prompt::Prompt;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a search term; every keystroke re-filters
    Search,
    /// Typing the text of a new item
    Add,
    /// Editing the text of an existing item
    Edit(ItemId),
}

/// Main application state
pub struct App {
    pub list: TodoList,
    pub mode: Mode,
    /// Transient buffer for the search, add and edit prompts
    pub prompt: Prompt,
    /// Cursor index into the visible view
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            list: TodoList::with_config(&config.view),
            mode: Mode::Navigate,
            prompt: Prompt::default(),
            cursor: 0,
            scroll_offset: 0,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
        }
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        visible(&self.list)
    }

    /// Id of the item under the cursor
    pub fn selected_id(&self) -> Option<ItemId> {
        self.visible_items().get(self.cursor).map(|item| item.id)
    }

    /// Keep the cursor inside the visible view after it changes
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Put the cursor on `id` if it is visible, otherwise just clamp
    pub fn select_id(&mut self, id: ItemId) {
        match self.visible_items().iter().position(|item| item.id == id) {
            Some(pos) => self.cursor = pos,
            None => self.clamp_cursor(),
        }
    }

    /// Adjust scroll so the cursor row is within `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }
}

/// Run the TUI application
pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if something panics mid-frame
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatusFilter;
    use crate::ops::{item_ops, view_ops};

    fn app_with(texts: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for text in texts {
            item_ops::add(&mut app.list, text);
        }
        app
    }

    #[test]
    fn test_selected_id_follows_cursor() {
        let mut app = app_with(&["A", "B"]);
        assert_eq!(app.selected_id(), Some(app.list.items[0].id));
        app.cursor = 1;
        assert_eq!(app.selected_id(), Some(app.list.items[1].id));
    }

    #[test]
    fn test_clamp_cursor_after_filter() {
        let mut app = app_with(&["A", "B", "C"]);
        app.cursor = 2;
        let first = app.list.items[0].id;
        item_ops::toggle(&mut app.list, first);
        view_ops::set_status_filter(&mut app.list, StatusFilter::Completed);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected_id(), Some(first));
    }

    #[test]
    fn test_clamp_cursor_on_empty_view() {
        let mut app = app_with(&[]);
        app.cursor = 5;
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected_id(), None);
    }

    #[test]
    fn test_scroll_to_cursor() {
        let mut app = app_with(&[]);
        app.cursor = 12;
        app.scroll_to_cursor(5);
        assert_eq!(app.scroll_offset, 8);
        app.cursor = 3;
        app.scroll_to_cursor(5);
        assert_eq!(app.scroll_offset, 3);
    }
}
