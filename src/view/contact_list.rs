use log::{debug, error, info, warn};
use tui_input::Input;

use crate::core::{
    Error,
    Result,
};
use crate::store::ContactStore;
use crate::view::{
    form::ContactForm,
    prompt::{Backdrop, FormOutcome, Prompter},
    table::ContactTable,
};

pub const ADD_TITLE: &str = "Add Contact";
pub const EDIT_TITLE: &str = "Edit Contact";
pub const CLEAR_TITLE: &str = "Clear All Contacts";
pub const CLEAR_QUESTION: &str = "Are you sure you want to clear all contacts?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Search,
    Add,
    Edit,
    Delete,
    ClearAll,
}

/// The contact list window: table, search field and the actions that
/// tie them to the store. Each action runs one store operation and then
/// brings the table back in sync.
pub struct ContactListView<'a> {
    store   : &'a mut dyn ContactStore,
    table   : ContactTable,
    search  : Input,
    status  : Option<String>,
}

impl<'a> ContactListView<'a> {
    pub fn new(store: &'a mut dyn ContactStore) -> Self {
        Self {
            store,
            table   : ContactTable::new(),
            search  : Input::default(),
            status  : None,
        }
    }

    pub fn table(&self) -> &ContactTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ContactTable {
        &mut self.table
    }

    pub fn search_input(&self) -> &Input {
        &self.search
    }

    pub fn search_input_mut(&mut self) -> &mut Input {
        &mut self.search
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn backdrop(&self) -> Backdrop<'_> {
        Backdrop {
            table   : &self.table,
            search  : &self.search,
            status  : self.status.as_deref(),
        }
    }

    /// Full reload of the table from the store.
    pub fn load(&mut self) -> Result<()> {
        let contacts = self.store.list_all()?;
        debug!("Loaded {} contacts", contacts.len());
        self.table.show_all(contacts);
        Ok(())
    }

    /// Runs one user action. Storage failures are reported to the user and
    /// leave the view running; anything else is returned.
    pub fn perform(&mut self, action: Action, prompter: &mut dyn Prompter) -> Result<()> {
        let result = match action {
            Action::Search  => self.search(),
            Action::Add     => self.add(prompter),
            Action::Edit    => self.edit(prompter),
            Action::Delete  => self.delete(),
            Action::ClearAll=> self.clear_all(prompter),
        };

        match result {
            Err(Error::Db(msg)) => {
                error!("{:?} failed: {}", action, msg);
                self.status = Some(format!("{:?} failed", action));
                prompter.notify(&self.backdrop(), &msg)
            },
            other => other,
        }
    }

    fn search(&mut self) -> Result<()> {
        let text = self.search.value().to_string();
        self.search.reset();

        if text.is_empty() {
            return self.load();
        }

        let found = self.store.search(&text)?;
        self.status = Some(format!("{} contacts match {:?}", found.len(), text));
        self.table.show_filtered(found);
        Ok(())
    }

    fn add(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        let mut form = ContactForm::blank();
        loop {
            let outcome = prompter.contact_form(&self.backdrop(), ADD_TITLE, &mut form)?;
            let FormOutcome::Submitted(fields) = outcome else {
                return Ok(());
            };

            let id = self.store.insert(&fields)?;
            info!("Added contact #{} {:?}", id, fields.name);
            self.status = Some(format!("Added {}", fields.name));
            self.load()?;
            form.clear();
        }
    }

    fn edit(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        let Some(row) = self.table.selected_row() else {
            return Ok(());
        };

        let selected_name = row.name().to_string();
        let Some(contact) = self.store.find_by_name(&selected_name)? else {
            debug!("No stored contact named {:?}, edit skipped", selected_name);
            return Ok(());
        };

        // Like Add, the form stays open and is cleared after each save. Later
        // saves are keyed by the name the previous save wrote.
        let mut key = selected_name;
        let mut form = ContactForm::new(contact.fields());
        loop {
            let outcome = prompter.contact_form(&self.backdrop(), EDIT_TITLE, &mut form)?;
            let FormOutcome::Submitted(fields) = outcome else {
                return Ok(());
            };

            let updated = self.store.update_by_name(&key, &fields)?;
            self.report_matches("Updated", &key, updated);
            self.load()?;
            form.clear();
            key = fields.name;
        }
    }

    fn delete(&mut self) -> Result<()> {
        let Some(index) = self.table.selected() else {
            return Ok(());
        };
        let Some(name) = self.table.selected_row().map(|v| v.name().to_string()) else {
            return Ok(());
        };

        let deleted = self.store.delete_by_name(&name)?;
        self.report_matches("Deleted", &name, deleted);
        self.table.remove_row(index);
        Ok(())
    }

    fn clear_all(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        if !prompter.confirm(&self.backdrop(), CLEAR_TITLE, CLEAR_QUESTION)? {
            debug!("Clear all declined");
            return Ok(());
        }

        self.store.clear_all()?;
        self.table.clear();
        self.status = Some(format!("All contacts cleared"));
        Ok(())
    }

    // Names are not unique, so a name-keyed change may touch zero or many rows.
    fn report_matches(&mut self, verb: &str, name: &str, affected: usize) {
        self.status = Some(match affected {
            1 => format!("{} {}", verb, name),
            n => {
                warn!("{} {} contacts matching name {:?}", verb, n, name);
                format!("{} {} contacts named {:?}", verb, n, name)
            }
        });
    }
}
