use diesel::prelude::*;
use log::{debug, info};

use crate::core::{
    contact::{Contact, ContactFields},
    Error,
    Result,
};

use crate::store::{
    contact_store::ContactStore,
    sqlite3::{
        models::NewContact,
        create_tbs,
        all_contacts,
        search_contacts,
        get_contact_by_name,
        put_contact,
        update_contacts_by_name,
        remove_contacts_by_name,
        remove_all_contacts,
    },
};

pub struct SqliteStore {
    connection: Option<SqliteConnection>,
}

impl SqliteStore {
    pub fn new() -> Self {
        Self { connection: None }
    }

    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    fn conn(&mut self) -> Result<&mut SqliteConnection> {
        self.connection.as_mut().ok_or_else(|| {
            Error::State(format!("Contact store is not open"))
        })
    }
}

impl Default for SqliteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for SqliteStore {
    fn initialize(&mut self, path: &str) -> Result<()> {
        let mut connection = SqliteConnection::establish(path)?;
        create_tbs(&mut connection).map_err(|e| {
            Error::Db(format!("Failed to create contacts table in {}: {e}", path))
        })?;

        info!("Contact store opened at {}", path);
        self.connection = Some(connection);
        Ok(())
    }

    fn shutdown(&mut self) {
        if self.connection.take().is_some() {
            info!("Contact store closed");
        }
    }

    fn list_all(&mut self) -> Result<Vec<Contact>> {
        let rows = all_contacts(self.conn()?)?;
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    fn search(&mut self, substring: &str) -> Result<Vec<Contact>> {
        let rows = search_contacts(self.conn()?, substring)?;
        debug!("Search for {:?} matched {} contacts", substring, rows.len());
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    fn find_by_name(&mut self, name: &str) -> Result<Option<Contact>> {
        get_contact_by_name(self.conn()?, name)
            .map(|v| v.map(Contact::from))
            .map_err(Error::from)
    }

    fn insert(&mut self, fields: &ContactFields) -> Result<i64> {
        let id = put_contact(self.conn()?, NewContact::from(fields))?;
        debug!("Inserted contact #{} ({})", id, fields.name);
        Ok(id)
    }

    fn update_by_name(&mut self, old_name: &str, fields: &ContactFields) -> Result<usize> {
        let updated = update_contacts_by_name(self.conn()?, old_name, NewContact::from(fields))?;
        debug!("Updated {} contacts named {:?}", updated, old_name);
        Ok(updated)
    }

    fn delete_by_name(&mut self, name: &str) -> Result<usize> {
        let deleted = remove_contacts_by_name(self.conn()?, name)?;
        debug!("Deleted {} contacts named {:?}", deleted, name);
        Ok(deleted)
    }

    fn clear_all(&mut self) -> Result<usize> {
        let deleted = remove_all_contacts(self.conn()?)?;
        info!("Cleared {} contacts", deleted);
        Ok(deleted)
    }
}
