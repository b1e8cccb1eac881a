use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::contact::ContactFields;
use crate::view::form::{ContactForm, FormEvent};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(form: &mut ContactForm, text: &str) {
    for c in text.chars() {
        assert_eq!(form.handle_key(key(KeyCode::Char(c))), FormEvent::Changed);
    }
}

#[test]
fn test_prefilled_values() {
    let fields = ContactFields::new("Ada", "111", "Engineer", "ada@x.com");
    let form = ContactForm::new(&fields);
    assert_eq!(form.fields(), fields);
    assert_eq!(form.focused(), 0);
}

#[test]
fn test_typing_fills_focused_field() {
    let mut form = ContactForm::blank();
    type_text(&mut form, "Bob");
    form.handle_key(key(KeyCode::Tab));
    type_text(&mut form, "222");
    form.handle_key(key(KeyCode::Down));
    form.handle_key(key(KeyCode::Tab));
    type_text(&mut form, " bob@x.com ");

    // Values are kept verbatim, surrounding spaces included.
    assert_eq!(form.fields(), ContactFields::new("Bob", "222", "", " bob@x.com "));
}

#[test]
fn test_focus_wraps() {
    let mut form = ContactForm::blank();
    form.handle_key(key(KeyCode::BackTab));
    assert_eq!(form.focused(), 3);
    form.handle_key(key(KeyCode::Tab));
    assert_eq!(form.focused(), 0);
    form.handle_key(key(KeyCode::Up));
    assert_eq!(form.focused(), 3);
}

#[test]
fn test_submit_cancel_and_clear() {
    let mut form = ContactForm::new(&ContactFields::new("Ada", "1", "2", "3"));
    form.handle_key(key(KeyCode::Tab));
    assert_eq!(form.handle_key(key(KeyCode::Enter)), FormEvent::Submit);
    assert_eq!(form.handle_key(key(KeyCode::Esc)), FormEvent::Cancel);

    form.clear();
    assert_eq!(form.fields(), ContactFields::default());
    assert_eq!(form.focused(), 0);
}

#[test]
fn test_backspace_edits() {
    let mut form = ContactForm::new(&ContactFields::new("Adam", "", "", ""));
    assert_eq!(form.handle_key(key(KeyCode::Backspace)), FormEvent::Changed);
    assert_eq!(form.fields().name, "Ada");
}
