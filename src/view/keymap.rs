use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::view::contact_list::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Table,
    Search,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Perform(Action),
    SelectNext,
    SelectPrev,
    Deselect,
    FocusSearch,
    FocusTable,
    EditSearch,
    Quit,
}

/// Hotkeys shown next to the table, one per button.
pub const BUTTONS: [(&str, &str); 5] = [
    ("/", "Search"),
    ("a", "Add"),
    ("e", "Edit"),
    ("d", "Delete"),
    ("c", "Clear All"),
];

pub fn command_for(focus: Focus, key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(Command::Quit);
    }

    match focus {
        Focus::Search => match key.code {
            KeyCode::Enter => Some(Command::Perform(Action::Search)),
            KeyCode::Esc | KeyCode::Tab => Some(Command::FocusTable),
            _ => Some(Command::EditSearch),
        },
        Focus::Table => match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Tab => Some(Command::FocusSearch),
            KeyCode::Char('a') | KeyCode::Insert => Some(Command::Perform(Action::Add)),
            KeyCode::Char('e') | KeyCode::Enter => Some(Command::Perform(Action::Edit)),
            KeyCode::Char('d') | KeyCode::Delete => Some(Command::Perform(Action::Delete)),
            KeyCode::Char('c') => Some(Command::Perform(Action::ClearAll)),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectPrev),
            KeyCode::Esc => Some(Command::Deselect),
            _ => None,
        },
    }
}
