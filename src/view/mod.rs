pub mod contact_list;
pub mod draw;
pub mod form;
pub mod keymap;
pub mod prompt;
pub mod table;
pub mod terminal;

pub use crate::view::{
    contact_list::{Action, ContactListView},
    form::ContactForm,
    prompt::{Backdrop, FormOutcome, Prompter},
    table::{ContactTable, TableMode},
    terminal::TerminalUi,
};

#[cfg(test)]
mod unitests {
    mod test_contact_list;
    mod test_draw;
    mod test_form;
    mod test_keymap;
    mod test_table;
}
