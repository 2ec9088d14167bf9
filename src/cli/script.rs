use tracing::trace;

use crate::model::item::ItemId;
use crate::model::list::TodoList;
use crate::model::view::{SortOption, StatusFilter, UnknownOption};
use crate::ops::{item_ops, view_ops};

/// Error type for script parsing and execution
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs {what}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        what: &'static str,
    },
    #[error("line {line}: invalid item reference '{value}' (use #N or a numeric id)")]
    InvalidRef { line: usize, value: String },
    #[error("line {line}: {source}")]
    InvalidOption { line: usize, source: UnknownOption },
    #[error("could not read script: {0}")]
    IoError(#[from] std::io::Error),
}

/// How a script names an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    /// `#N`: 1-based position in the base collection
    Position(usize),
    /// Raw numeric id
    Id(ItemId),
}

impl ItemRef {
    fn parse(line: usize, s: &str) -> Result<ItemRef, ScriptError> {
        let invalid = || ScriptError::InvalidRef {
            line,
            value: s.to_string(),
        };
        match s.strip_prefix('#') {
            Some(pos) => pos.parse().map(ItemRef::Position).map_err(|_| invalid()),
            None => s.parse().map(|n| ItemRef::Id(ItemId(n))).map_err(|_| invalid()),
        }
    }

    fn resolve(self, list: &TodoList) -> Option<ItemId> {
        match self {
            ItemRef::Position(pos) => list.id_at(pos),
            ItemRef::Id(id) => Some(id),
        }
    }
}

/// One script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(String),
    Toggle(ItemRef),
    /// `None` text is a cancelled edit
    Edit(ItemRef, Option<String>),
    Delete(ItemRef),
    SelectAll,
    DeselectAll,
    DeleteSelected,
    Search(String),
    Filter(StatusFilter),
    Sort(SortOption),
    Show,
}

/// Parse a single line. Blank lines and `//` comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with("//") {
        return Ok(None);
    }
    let (word, rest) = match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    };

    let need = |command: &'static str, what: &'static str| {
        if rest.is_empty() {
            Err(ScriptError::MissingArgument {
                line,
                command,
                what,
            })
        } else {
            Ok(rest)
        }
    };
    let option_err = |source: UnknownOption| ScriptError::InvalidOption { line, source };

    let command = match word {
        "add" => ScriptCommand::Add(need("add", "text")?.to_string()),
        "toggle" => ScriptCommand::Toggle(ItemRef::parse(line, need("toggle", "an item")?)?),
        "edit" => {
            let arg = need("edit", "an item")?;
            let (item, new_text) = match arg.split_once(char::is_whitespace) {
                Some((item, new_text)) => (item, Some(new_text.trim().to_string())),
                None => (arg, None),
            };
            ScriptCommand::Edit(ItemRef::parse(line, item)?, new_text)
        }
        "delete" => ScriptCommand::Delete(ItemRef::parse(line, need("delete", "an item")?)?),
        "select-all" => ScriptCommand::SelectAll,
        "deselect-all" => ScriptCommand::DeselectAll,
        "delete-selected" => ScriptCommand::DeleteSelected,
        "search" => ScriptCommand::Search(rest.to_string()),
        "filter" => ScriptCommand::Filter(
            need("filter", "a status tab")?
                .parse()
                .map_err(option_err)?,
        ),
        "sort" => ScriptCommand::Sort(need("sort", "a sort option")?.parse().map_err(option_err)?),
        "show" => ScriptCommand::Show,
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(command))
}

/// Parse a whole script up front so a typo late in the file doesn't leave a
/// half-applied run.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        if let Some(cmd) = parse_line(idx + 1, text)? {
            commands.push(cmd);
        }
    }
    Ok(commands)
}

/// Apply one command to the list
pub fn apply(list: &mut TodoList, command: &ScriptCommand) {
    let resolve = |list: &TodoList, item: ItemRef| {
        let id = item.resolve(list);
        if id.is_none() {
            trace!(?item, "reference matches no item");
        }
        id
    };

    match command {
        ScriptCommand::Add(text) => {
            item_ops::add(list, text);
        }
        ScriptCommand::Toggle(item) => {
            if let Some(id) = resolve(list, *item) {
                item_ops::toggle(list, id);
            }
        }
        ScriptCommand::Edit(item, new_text) => {
            if let Some(id) = resolve(list, *item) {
                item_ops::edit(list, id, new_text.as_deref());
            }
        }
        ScriptCommand::Delete(item) => {
            if let Some(id) = resolve(list, *item) {
                item_ops::delete(list, id);
            }
        }
        ScriptCommand::SelectAll => {
            item_ops::select_all(list);
        }
        ScriptCommand::DeselectAll => {
            item_ops::deselect_all(list);
        }
        ScriptCommand::DeleteSelected => {
            item_ops::delete_selected(list);
        }
        ScriptCommand::Search(term) => view_ops::set_search_term(list, term),
        ScriptCommand::Filter(filter) => view_ops::set_status_filter(list, *filter),
        ScriptCommand::Sort(option) => view_ops::set_sort_option(list, *option),
        ScriptCommand::Show => {}
    }
}

/// Run a script. `on_show` sees the list at every `show` and once more at
/// the end, unless the script already ended on `show`.
pub fn run_script<F>(list: &mut TodoList, source: &str, mut on_show: F) -> Result<(), ScriptError>
where
    F: FnMut(&TodoList),
{
    let commands = parse_script(source)?;
    for command in &commands {
        apply(list, command);
        if *command == ScriptCommand::Show {
            on_show(list);
        }
    }
    if commands.last() != Some(&ScriptCommand::Show) {
        on_show(list);
    }
    Ok(())
}
