use tui_input::Input;

use crate::core::{
    contact::ContactFields,
    Result,
};
use crate::view::{
    form::ContactForm,
    table::ContactTable,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted(ContactFields),
    Cancelled,
}

/// What stays visible behind a modal prompt.
pub struct Backdrop<'a> {
    pub table   : &'a ContactTable,
    pub search  : &'a Input,
    pub status  : Option<&'a str>,
}

/// Blocking request/response boundary for modal interaction: each call
/// returns only once the user has answered.
pub trait Prompter {
    /// Runs the contact form until it is submitted or closed. The form is
    /// borrowed so that its state survives across consecutive prompts.
    fn contact_form(&mut self,
        backdrop: &Backdrop,
        title: &str,
        form: &mut ContactForm
    ) -> Result<FormOutcome>;

    fn confirm(&mut self,
        backdrop: &Backdrop,
        title: &str,
        message: &str
    ) -> Result<bool>;

    fn notify(&mut self,
        backdrop: &Backdrop,
        message: &str
    ) -> Result<()>;
}
