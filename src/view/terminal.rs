use std::io::{stdout, Stdout};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_input::backend::crossterm::EventHandler;
use log::debug;

use crate::core::Result;
use crate::view::{
    contact_list::{Action, ContactListView},
    draw,
    form::{ContactForm, FormEvent},
    keymap::{self, Command, Focus},
    prompt::{Backdrop, FormOutcome, Prompter},
};

/// Full-screen terminal front end. Owns raw mode and the alternate screen
/// for as long as it lives.
pub struct TerminalUi {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalUi {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        out.execute(EnterAlternateScreen)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(out))?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    pub fn run(&mut self, view: &mut ContactListView) -> Result<()> {
        let mut focus = Focus::Table;
        loop {
            self.terminal.draw(|f| draw::render_main(f, &view.backdrop(), focus))?;

            let Some(key) = self.next_key()? else {
                continue;
            };
            let Some(command) = keymap::command_for(focus, &key) else {
                continue;
            };

            match command {
                Command::Quit => break,
                Command::Perform(action) => {
                    if action == Action::Search {
                        focus = Focus::Table;
                    }
                    view.perform(action, &mut *self)?;
                }
                Command::SelectNext => view.table_mut().select_next(),
                Command::SelectPrev => view.table_mut().select_prev(),
                Command::Deselect => view.table_mut().select(None),
                Command::FocusSearch => focus = Focus::Search,
                Command::FocusTable => focus = Focus::Table,
                Command::EditSearch => {
                    view.search_input_mut().handle_event(&Event::Key(key));
                }
            }
        }

        debug!("Leaving contact list");
        Ok(())
    }

    // None means the screen needs a redraw (resize and other non-key events).
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

impl Prompter for TerminalUi {
    fn contact_form(&mut self,
        backdrop: &Backdrop,
        title: &str,
        form: &mut ContactForm
    ) -> Result<FormOutcome> {
        loop {
            self.terminal.draw(|f| {
                draw::render_main(f, backdrop, Focus::Table);
                draw::render_form(f, title, form);
            })?;

            let Some(key) = self.next_key()? else {
                continue;
            };
            match form.handle_key(key) {
                FormEvent::Submit => return Ok(FormOutcome::Submitted(form.fields())),
                FormEvent::Cancel => return Ok(FormOutcome::Cancelled),
                FormEvent::Changed | FormEvent::Ignored => {}
            }
        }
    }

    fn confirm(&mut self,
        backdrop: &Backdrop,
        title: &str,
        message: &str
    ) -> Result<bool> {
        let mut yes = false;
        loop {
            self.terminal.draw(|f| {
                draw::render_main(f, backdrop, Focus::Table);
                draw::render_confirm(f, title, message, yes);
            })?;

            let Some(key) = self.next_key()? else {
                continue;
            };
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
                KeyCode::Enter => return Ok(yes),
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => yes = !yes,
                _ => {}
            }
        }
    }

    fn notify(&mut self,
        backdrop: &Backdrop,
        message: &str
    ) -> Result<()> {
        loop {
            self.terminal.draw(|f| {
                draw::render_main(f, backdrop, Focus::Table);
                draw::render_notice(f, message);
            })?;

            if self.next_key()?.is_some() {
                return Ok(());
            }
        }
    }
}

impl Drop for TerminalUi {
    fn drop(&mut self) {
        _ = disable_raw_mode();
        _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
        _ = self.terminal.show_cursor();
    }
}
