use diesel::prelude::*;
use super::schema::contacts;

use crate::core::contact::{
    Contact,
    ContactFields,
};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ContactRow {
    pub(crate) id: i64,
    pub(crate) name: Option<String>,
    pub(crate) number: Option<String>,
    pub(crate) job: Option<String>,
    pub(crate) email: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact::new(row.id, ContactFields {
            name    : row.name.unwrap_or_default(),
            number  : row.number.unwrap_or_default(),
            job     : row.job.unwrap_or_default(),
            email   : row.email.unwrap_or_default(),
        })
    }
}

// Used for both INSERT values and UPDATE change sets.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContact<'a> {
    pub(crate) name: &'a str,
    pub(crate) number: &'a str,
    pub(crate) job: &'a str,
    pub(crate) email: &'a str,
}

impl<'a> From<&'a ContactFields> for NewContact<'a> {
    fn from(fields: &'a ContactFields) -> Self {
        Self {
            name    : &fields.name,
            number  : &fields.number,
            job     : &fields.job,
            email   : &fields.email,
        }
    }
}
