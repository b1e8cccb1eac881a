use crate::core::contact::Contact;

pub const COLUMN_TITLES: [&str; 4] = ["Name", "Number", "Job", "Email"];

/// What the table currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableMode {
    Idle,
    ShowingAll,
    ShowingFiltered,
}

/// Background shading of a displayed row, decided by its index only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowShade {
    Gray,
    White,
}

pub fn row_shade(index: usize) -> RowShade {
    match index % 2 {
        0 => RowShade::Gray,
        _ => RowShade::White,
    }
}

/// In-memory model behind the table widget. Each row keeps the stored
/// contact, id included, next to what is displayed.
#[derive(Debug)]
pub struct ContactTable {
    rows    : Vec<Contact>,
    selected: Option<usize>,
    mode    : TableMode,
}

impl ContactTable {
    pub fn new() -> Self {
        Self {
            rows    : Vec::new(),
            selected: None,
            mode    : TableMode::Idle,
        }
    }

    pub fn rows(&self) -> &[Contact] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn mode(&self) -> TableMode {
        self.mode
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&Contact> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    pub fn show_all(&mut self, contacts: Vec<Contact>) {
        self.replace(contacts, TableMode::ShowingAll);
    }

    pub fn show_filtered(&mut self, contacts: Vec<Contact>) {
        self.replace(contacts, TableMode::ShowingFiltered);
    }

    fn replace(&mut self, contacts: Vec<Contact>, mode: TableMode) {
        self.rows = contacts;
        self.mode = mode;
        self.clamp_selection();
    }

    /// Drops one displayed row without consulting the store.
    pub fn remove_row(&mut self, index: usize) -> Option<Contact> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);
        self.clamp_selection();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.selected = None;
        self.mode = TableMode::ShowingAll;
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.rows.len() - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    fn clamp_selection(&mut self) {
        self.selected = match self.selected {
            _ if self.rows.is_empty() => None,
            Some(i) => Some(i.min(self.rows.len() - 1)),
            None => None,
        };
    }
}

impl Default for ContactTable {
    fn default() -> Self {
        Self::new()
    }
}
