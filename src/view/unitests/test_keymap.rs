use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::view::contact_list::Action;
use crate::view::keymap::{command_for, Command, Focus};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_table_hotkeys() {
    let cases = [
        (KeyCode::Char('a'), Command::Perform(Action::Add)),
        (KeyCode::Char('e'), Command::Perform(Action::Edit)),
        (KeyCode::Char('d'), Command::Perform(Action::Delete)),
        (KeyCode::Delete, Command::Perform(Action::Delete)),
        (KeyCode::Char('c'), Command::Perform(Action::ClearAll)),
        (KeyCode::Char('/'), Command::FocusSearch),
        (KeyCode::Down, Command::SelectNext),
        (KeyCode::Char('k'), Command::SelectPrev),
        (KeyCode::Esc, Command::Deselect),
        (KeyCode::Char('q'), Command::Quit),
    ];
    for (code, expected) in cases {
        assert_eq!(command_for(Focus::Table, &key(code)), Some(expected), "{:?}", code);
    }
    assert_eq!(command_for(Focus::Table, &key(KeyCode::Char('z'))), None);
}

#[test]
fn test_search_field_keys() {
    assert_eq!(
        command_for(Focus::Search, &key(KeyCode::Enter)),
        Some(Command::Perform(Action::Search))
    );
    assert_eq!(command_for(Focus::Search, &key(KeyCode::Esc)), Some(Command::FocusTable));
    // Letters that are hotkeys on the table are plain text in the search field.
    assert_eq!(command_for(Focus::Search, &key(KeyCode::Char('q'))), Some(Command::EditSearch));
    assert_eq!(command_for(Focus::Search, &key(KeyCode::Char('a'))), Some(Command::EditSearch));
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(command_for(Focus::Table, &ctrl_c), Some(Command::Quit));
    assert_eq!(command_for(Focus::Search, &ctrl_c), Some(Command::Quit));
}

#[test]
fn test_key_release_ignored() {
    let mut release = key(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;
    assert_eq!(command_for(Focus::Table, &release), None);
}
