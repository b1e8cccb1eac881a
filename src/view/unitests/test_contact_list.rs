use std::collections::VecDeque;
use tui_input::Input;

use crate::core::{
    contact::{Contact, ContactFields},
    Error,
    Result,
};
use crate::store::{ContactStore, SqliteStore};
use crate::view::{
    contact_list::{Action, ContactListView, ADD_TITLE, EDIT_TITLE},
    form::ContactForm,
    prompt::{Backdrop, FormOutcome, Prompter},
    table::TableMode,
};

/// Answers prompts from a script and records what was asked.
#[derive(Default)]
struct ScriptedPrompter {
    forms       : VecDeque<FormOutcome>,
    confirms    : VecDeque<bool>,
    opened      : Vec<(String, ContactFields)>,
    questions   : usize,
    notices     : Vec<String>,
}

impl ScriptedPrompter {
    fn with_forms(forms: Vec<FormOutcome>) -> Self {
        Self { forms: forms.into(), ..Default::default() }
    }

    fn with_confirm(answer: bool) -> Self {
        Self { confirms: vec![answer].into(), ..Default::default() }
    }
}

impl Prompter for ScriptedPrompter {
    fn contact_form(&mut self, _: &Backdrop, title: &str, form: &mut ContactForm) -> Result<FormOutcome> {
        self.opened.push((title.to_string(), form.fields()));
        Ok(self.forms.pop_front().unwrap_or(FormOutcome::Cancelled))
    }

    fn confirm(&mut self, _: &Backdrop, _: &str, _: &str) -> Result<bool> {
        self.questions += 1;
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn notify(&mut self, _: &Backdrop, message: &str) -> Result<()> {
        self.notices.push(message.to_string());
        Ok(())
    }
}

/// A store whose disk has gone away.
struct BrokenStore;

impl ContactStore for BrokenStore {
    fn initialize(&mut self, _: &str) -> Result<()> { Ok(()) }
    fn shutdown(&mut self) {}
    fn list_all(&mut self) -> Result<Vec<Contact>> { Err(broken()) }
    fn search(&mut self, _: &str) -> Result<Vec<Contact>> { Err(broken()) }
    fn find_by_name(&mut self, _: &str) -> Result<Option<Contact>> { Err(broken()) }
    fn insert(&mut self, _: &ContactFields) -> Result<i64> { Err(broken()) }
    fn update_by_name(&mut self, _: &str, _: &ContactFields) -> Result<usize> { Err(broken()) }
    fn delete_by_name(&mut self, _: &str) -> Result<usize> { Err(broken()) }
    fn clear_all(&mut self) -> Result<usize> { Err(broken()) }
}

fn broken() -> Error {
    Error::Db(format!("disk I/O error"))
}

fn fields(name: &str, number: &str) -> ContactFields {
    ContactFields::new(name, number, "", "")
}

fn seeded_store(names: &[&str]) -> SqliteStore {
    let mut store = SqliteStore::new();
    store.initialize(":memory:").expect("open");
    for (i, name) in names.iter().enumerate() {
        store.insert(&fields(name, &i.to_string())).expect("insert");
    }
    store
}

fn set_search(view: &mut ContactListView, text: &str) {
    *view.search_input_mut() = Input::new(text.to_string());
}

fn names(view: &ContactListView) -> Vec<String> {
    view.table().rows().iter().map(|v| v.name().to_string()).collect()
}

#[test]
fn test_load_shows_all() {
    let mut store = seeded_store(&["Ada", "Bob"]);
    let mut view = ContactListView::new(&mut store);
    assert_eq!(view.table().mode(), TableMode::Idle);

    view.load().unwrap();
    assert_eq!(view.table().mode(), TableMode::ShowingAll);
    assert_eq!(names(&view), vec!["Ada", "Bob"]);
}

#[test]
fn test_search_filters_and_clears_input() {
    let mut store = seeded_store(&["Ada", "Bob", "Adam"]);
    let mut view = ContactListView::new(&mut store);
    let mut prompter = ScriptedPrompter::default();
    view.load().unwrap();

    set_search(&mut view, "ada");
    view.perform(Action::Search, &mut prompter).unwrap();
    assert_eq!(view.table().mode(), TableMode::ShowingFiltered);
    assert_eq!(names(&view), vec!["Ada", "Adam"]);
    assert_eq!(view.search_input().value(), "");

    // Empty search text falls back to the full list.
    view.perform(Action::Search, &mut prompter).unwrap();
    assert_eq!(view.table().mode(), TableMode::ShowingAll);
    assert_eq!(names(&view), vec!["Ada", "Bob", "Adam"]);
}

#[test]
fn test_search_clears_input_on_failure() {
    let mut store = BrokenStore;
    let mut view = ContactListView::new(&mut store);
    let mut prompter = ScriptedPrompter::default();

    set_search(&mut view, "ada");
    view.perform(Action::Search, &mut prompter).unwrap();
    assert_eq!(view.search_input().value(), "");
    assert_eq!(prompter.notices, vec!["disk I/O error".to_string()]);
}

#[test]
fn test_add_keeps_form_open_until_closed() {
    let mut store = seeded_store(&[]);
    {
        let mut view = ContactListView::new(&mut store);
        let mut prompter = ScriptedPrompter::with_forms(vec![
            FormOutcome::Submitted(fields("Ada", "111")),
            FormOutcome::Submitted(ContactFields::default()),
            FormOutcome::Cancelled,
        ]);
        view.load().unwrap();
        view.perform(Action::Add, &mut prompter).unwrap();

        // Opened three times, blank each time.
        assert_eq!(prompter.opened.len(), 3);
        assert!(prompter.opened.iter().all(|(title, form)| {
            title == ADD_TITLE && form == &ContactFields::default()
        }));
        assert_eq!(names(&view), vec!["Ada", ""]);
        assert_eq!(view.table().mode(), TableMode::ShowingAll);
    }
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn test_add_after_search_reloads_everything() {
    let mut store = seeded_store(&["Ada", "Bob"]);
    let mut view = ContactListView::new(&mut store);
    let mut prompter = ScriptedPrompter::with_forms(vec![
        FormOutcome::Submitted(fields("Cy", "3")),
    ]);
    view.load().unwrap();
    set_search(&mut view, "Bob");
    view.perform(Action::Search, &mut prompter).unwrap();
    assert_eq!(names(&view), vec!["Bob"]);

    view.perform(Action::Add, &mut prompter).unwrap();
    assert_eq!(names(&view), vec!["Ada", "Bob", "Cy"]);
    assert_eq!(view.table().mode(), TableMode::ShowingAll);
}

#[test]
fn test_edit_without_selection_is_noop() {
    let mut store = seeded_store(&["Ada"]);
    let mut view = ContactListView::new(&mut store);
    let mut prompter = ScriptedPrompter::default();
    view.load().unwrap();

    view.perform(Action::Edit, &mut prompter).unwrap();
    assert!(prompter.opened.is_empty());
}

#[test]
fn test_edit_renames_selected_contact() {
    let mut store = seeded_store(&["Ada", "Bob"]);
    let ada_id = store.find_by_name("Ada").unwrap().unwrap().id();
    {
        let mut view = ContactListView::new(&mut store);
        let mut prompter = ScriptedPrompter::with_forms(vec![
            FormOutcome::Submitted(ContactFields::new("Adam", "999", "Architect", "adam@x.com")),
        ]);
        view.load().unwrap();
        view.table_mut().select(Some(0));

        view.perform(Action::Edit, &mut prompter).unwrap();

        // The form stays open after the save, cleared like Add's.
        assert_eq!(prompter.opened.len(), 2);
        assert_eq!(prompter.opened[0].0, EDIT_TITLE);
        assert_eq!(prompter.opened[0].1, fields("Ada", "0"));
        assert_eq!(prompter.opened[1].1, ContactFields::default());
        assert_eq!(names(&view), vec!["Adam", "Bob"]);
        assert_eq!(view.status(), Some("Updated Ada"));
    }

    let adam = store.find_by_name("Adam").unwrap().expect("renamed");
    assert_eq!(adam.id(), ada_id);
    assert_eq!(adam.email(), "adam@x.com");
    assert_eq!(store.search("Ada").unwrap().len(), 1);
}

#[test]
fn test_edit_saves_again_under_new_name() {
    let mut store = seeded_store(&["Ada", "Bob"]);
    let ada_id = store.find_by_name("Ada").unwrap().unwrap().id();
    {
        let mut view = ContactListView::new(&mut store);
        let mut prompter = ScriptedPrompter::with_forms(vec![
            FormOutcome::Submitted(fields("Adam", "1")),
            FormOutcome::Submitted(fields("Adele", "2")),
        ]);
        view.load().unwrap();
        view.table_mut().select(Some(0));

        view.perform(Action::Edit, &mut prompter).unwrap();
        assert_eq!(prompter.opened.len(), 3);
        assert_eq!(names(&view), vec!["Adele", "Bob"]);
        assert_eq!(view.status(), Some("Updated Adam"));
    }

    let adele = store.find_by_name("Adele").unwrap().expect("renamed twice");
    assert_eq!(adele.id(), ada_id);
    assert_eq!(adele.number(), "2");
    assert!(store.find_by_name("Adam").unwrap().is_none());
    assert_eq!(store.find_by_name("Bob").unwrap().unwrap().number(), "1");
}

#[test]
fn test_edit_cancelled_changes_nothing() {
    let mut store = seeded_store(&["Ada"]);
    {
        let mut view = ContactListView::new(&mut store);
        let mut prompter = ScriptedPrompter::default();
        view.load().unwrap();
        view.table_mut().select(Some(0));
        view.perform(Action::Edit, &mut prompter).unwrap();
        assert_eq!(prompter.opened.len(), 1);
    }
    assert_eq!(store.list_all().unwrap()[0].fields(), &fields("Ada", "0"));
}

#[test]
fn test_edit_of_vanished_contact_is_noop() {
    let mut store = seeded_store(&["Ada"]);
    let mut view = ContactListView::new(&mut store);
    let mut prompter = ScriptedPrompter::default();
    view.load().unwrap();
    view.table_mut().show_all(vec![Contact::new(42, fields("Ghost", ""))]);
    view.table_mut().select(Some(0));

    view.perform(Action::Edit, &mut prompter).unwrap();
    assert!(prompter.opened.is_empty());
}

#[test]
fn test_edit_reports_duplicate_names() {
    let mut store = seeded_store(&["Dup", "Dup"]);
    let mut view = ContactListView::new(&mut store);
    let mut prompter = ScriptedPrompter::with_forms(vec![
        FormOutcome::Submitted(fields("Dup", "7")),
    ]);
    view.load().unwrap();
    view.table_mut().select(Some(1));

    view.perform(Action::Edit, &mut prompter).unwrap();
    assert_eq!(view.status(), Some("Updated 2 contacts named \"Dup\""));
}

#[test]
fn test_delete_removes_visual_row_only() {
    let mut store = seeded_store(&["Dup", "Bob", "Dup"]);
    {
        let mut view = ContactListView::new(&mut store);
        let mut prompter = ScriptedPrompter::default();
        view.load().unwrap();

        // Nothing selected: nothing happens.
        view.perform(Action::Delete, &mut prompter).unwrap();
        assert_eq!(view.table().len(), 3);

        view.table_mut().select(Some(0));
        view.perform(Action::Delete, &mut prompter).unwrap();

        // Both stored rows are gone, the table only dropped the selected one.
        assert_eq!(names(&view), vec!["Bob", "Dup"]);
        assert_eq!(view.status(), Some("Deleted 2 contacts named \"Dup\""));
    }
    let left = store.list_all().unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].name(), "Bob");
}

#[test]
fn test_clear_all_requires_confirmation() {
    let mut store = seeded_store(&["Ada", "Bob"]);
    {
        let mut view = ContactListView::new(&mut store);
        view.load().unwrap();

        let mut declined = ScriptedPrompter::with_confirm(false);
        view.perform(Action::ClearAll, &mut declined).unwrap();
        assert_eq!(declined.questions, 1);
        assert_eq!(view.table().len(), 2);

        let mut accepted = ScriptedPrompter::with_confirm(true);
        view.perform(Action::ClearAll, &mut accepted).unwrap();
        assert!(view.table().is_empty());
    }
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_storage_errors_become_notifications() {
    let mut store = BrokenStore;
    let mut view = ContactListView::new(&mut store);
    let mut prompter = ScriptedPrompter {
        forms: vec![FormOutcome::Submitted(fields("Ada", "1"))].into(),
        confirms: vec![true].into(),
        ..Default::default()
    };

    view.perform(Action::Add, &mut prompter).unwrap();
    view.perform(Action::ClearAll, &mut prompter).unwrap();
    assert_eq!(prompter.notices.len(), 2);
    assert_eq!(view.status(), Some("ClearAll failed"));
}

#[test]
fn test_non_storage_errors_propagate() {
    struct FailingPrompter;
    impl Prompter for FailingPrompter {
        fn contact_form(&mut self, _: &Backdrop, _: &str, _: &mut ContactForm) -> Result<FormOutcome> {
            Err(Error::Io(format!("terminal gone")))
        }
        fn confirm(&mut self, _: &Backdrop, _: &str, _: &str) -> Result<bool> {
            Err(Error::Io(format!("terminal gone")))
        }
        fn notify(&mut self, _: &Backdrop, _: &str) -> Result<()> {
            Ok(())
        }
    }

    let mut store = seeded_store(&["Ada"]);
    let mut view = ContactListView::new(&mut store);
    assert!(matches!(view.perform(Action::Add, &mut FailingPrompter), Err(Error::Io(_))));
}
