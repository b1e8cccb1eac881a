use ratatui::{backend::TestBackend, layout::Rect, style::Color, Terminal};
use tui_input::Input;

use crate::core::contact::{Contact, ContactFields};
use crate::view::{
    draw::{centered_rect, render_confirm, render_main, shade_color},
    keymap::Focus,
    prompt::Backdrop,
    table::{row_shade, ContactTable},
};

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal.backend().buffer().content().iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_shade_colors() {
    assert_eq!(shade_color(row_shade(0)), Color::Rgb(0xB8, 0xB8, 0xB8));
    assert_eq!(shade_color(row_shade(1)), Color::White);
}

#[test]
fn test_centered_rect() {
    let area = Rect::new(0, 0, 100, 40);
    assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
    // Never larger than the screen.
    assert_eq!(centered_rect(200, 80, area), area);
}

#[test]
fn test_main_window_shows_headers_rows_and_buttons() {
    let mut table = ContactTable::new();
    table.show_all(vec![
        Contact::new(1, ContactFields::new("Ada", "111", "Engineer", "ada@x.com")),
        Contact::new(2, ContactFields::new("Bob", "222", "Writer", "bob@x.com")),
    ]);
    let search = Input::default();
    let backdrop = Backdrop { table: &table, search: &search, status: Some("ready") };

    let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
    terminal.draw(|f| render_main(f, &backdrop, Focus::Table)).unwrap();

    let text = screen_text(&terminal);
    for expected in ["Name", "Number", "Job", "Email", "Ada", "bob@x.com", "Clear All", "ready"] {
        assert!(text.contains(expected), "missing {expected}");
    }
}

#[test]
fn test_confirm_dialog() {
    let table = ContactTable::new();
    let search = Input::default();
    let backdrop = Backdrop { table: &table, search: &search, status: None };

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| {
        render_main(f, &backdrop, Focus::Table);
        render_confirm(f, "Clear All Contacts", "Sure?", false);
    }).unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Clear All Contacts"));
    assert!(text.contains("Yes"));
    assert!(text.contains("No"));
}
