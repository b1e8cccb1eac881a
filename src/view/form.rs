use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::core::contact::ContactFields;

pub const FIELD_LABELS: [&str; 4] = ["Name", "Number", "Job", "Email"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Cancel,
    Changed,
    Ignored,
}

/// Four labelled text inputs with one of them focused.
#[derive(Debug)]
pub struct ContactForm {
    inputs  : [Input; 4],
    focused : usize,
}

impl ContactForm {
    pub fn new(initial: &ContactFields) -> Self {
        let [name, number, job, email] = initial.columns();
        Self {
            inputs: [
                Input::new(name.to_string()),
                Input::new(number.to_string()),
                Input::new(job.to_string()),
                Input::new(email.to_string()),
            ],
            focused: 0,
        }
    }

    pub fn blank() -> Self {
        Self::new(&ContactFields::default())
    }

    /// Current values, verbatim.
    pub fn fields(&self) -> ContactFields {
        let [name, number, job, email] = &self.inputs;
        ContactFields::new(name.value(), number.value(), job.value(), email.value())
    }

    pub fn clear(&mut self) {
        self.inputs.iter_mut().for_each(|v| v.reset());
        self.focused = 0;
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn inputs(&self) -> &[Input; 4] {
        &self.inputs
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.inputs.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.inputs.len() - 1) % self.inputs.len();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Enter => FormEvent::Submit,
            KeyCode::Esc => FormEvent::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormEvent::Changed
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                FormEvent::Changed
            }
            _ => match self.inputs[self.focused].handle_event(&Event::Key(key)) {
                Some(_) => FormEvent::Changed,
                None => FormEvent::Ignored,
            }
        }
    }
}
