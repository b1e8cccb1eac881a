use crate::core::contact::{Contact, ContactFields};
use crate::view::table::{
    row_shade,
    ContactTable,
    RowShade,
    TableMode,
};

fn contacts(names: &[&str]) -> Vec<Contact> {
    names.iter().enumerate().map(|(i, name)| {
        Contact::new(i as i64 + 1, ContactFields::new(name, "", "", ""))
    }).collect()
}

#[test]
fn test_starts_idle_without_selection() {
    let table = ContactTable::new();
    assert_eq!(table.mode(), TableMode::Idle);
    assert!(table.is_empty());
    assert_eq!(table.selected(), None);
    assert!(table.selected_row().is_none());
}

#[test]
fn test_modes() {
    let mut table = ContactTable::new();
    table.show_all(contacts(&["Ada", "Bob"]));
    assert_eq!(table.mode(), TableMode::ShowingAll);
    assert_eq!(table.len(), 2);

    table.show_filtered(contacts(&["Ada"]));
    assert_eq!(table.mode(), TableMode::ShowingFiltered);

    table.clear();
    assert_eq!(table.mode(), TableMode::ShowingAll);
    assert!(table.is_empty());
}

#[test]
fn test_selection_moves_and_clamps() {
    let mut table = ContactTable::new();
    table.select_next();
    assert_eq!(table.selected(), None);

    table.show_all(contacts(&["Ada", "Bob", "Cy"]));
    table.select_next();
    assert_eq!(table.selected(), Some(0));
    table.select_next();
    table.select_next();
    table.select_next();
    assert_eq!(table.selected(), Some(2));
    table.select_prev();
    assert_eq!(table.selected_row().map(|v| v.name()), Some("Bob"));

    table.select(Some(2));
    table.show_filtered(contacts(&["Ada"]));
    assert_eq!(table.selected(), Some(0));

    table.show_all(Vec::new());
    assert_eq!(table.selected(), None);
}

#[test]
fn test_reload_keeps_missing_selection() {
    let mut table = ContactTable::new();
    table.show_all(contacts(&["Ada", "Bob"]));
    assert_eq!(table.selected(), None);
}

#[test]
fn test_remove_row() {
    let mut table = ContactTable::new();
    table.show_all(contacts(&["Ada", "Bob", "Cy"]));
    table.select(Some(2));

    let removed = table.remove_row(2).expect("row");
    assert_eq!(removed.name(), "Cy");
    assert_eq!(table.len(), 2);
    assert_eq!(table.selected(), Some(1));
    assert!(table.remove_row(5).is_none());
}

#[test]
fn test_row_shade_alternates() {
    assert_eq!(row_shade(0), RowShade::Gray);
    assert_eq!(row_shade(1), RowShade::White);
    assert_eq!(row_shade(2), RowShade::Gray);
    assert_eq!(row_shade(7), RowShade::White);
}
