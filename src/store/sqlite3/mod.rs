pub(crate) mod models;
pub(crate) mod schema;
mod sql;

use crate::store::sqlite3::models::{
    ContactRow,
    NewContact,
};

use crate::store::sqlite3::schema::contacts::{
    dsl::contacts,
    name    as contact_name,
};

use diesel::prelude::*;
use diesel::expression_methods::EscapeExpressionMethods;
use diesel::result::Error;
use diesel::sql_types::BigInt;

pub(crate) fn create_tbs(
    conn: &mut SqliteConnection
) -> Result<(), Error> {
    diesel::sql_query(sql::CREATE_CONTACTS_TABLE)
        .execute(conn)
        .map(|_| ())
}

// -------------------------------------------------
// "SELECT id, name, number, job, email FROM contacts"
// -------------------------------------------------
pub(crate) fn all_contacts(
    conn: &mut SqliteConnection
) -> Result<Vec<ContactRow>, Error> {
    contacts.select(ContactRow::as_select())
        .load(conn)
}

// --------------------------------------------------------------------
// "SELECT id, name, number, job, email FROM contacts
//        WHERE name LIKE '%' || ? || '%' ESCAPE '\'"
// --------------------------------------------------------------------
pub(crate) fn search_contacts(
    conn: &mut SqliteConnection,
    pattern: &str
) -> Result<Vec<ContactRow>, Error> {
    // NULL LIKE '%%' is not true, so rows without a name would drop out.
    if pattern.is_empty() {
        return all_contacts(conn);
    }
    contacts.filter(contact_name.like(like_pattern(pattern)).escape(sql::LIKE_ESCAPE))
        .select(ContactRow::as_select())
        .load(conn)
}

// --------------------------------------------------------------------
// "SELECT id, name, number, job, email FROM contacts WHERE name = ?"
// --------------------------------------------------------------------
pub(crate) fn get_contact_by_name(
    conn: &mut SqliteConnection,
    name: &str
) -> Result<Option<ContactRow>, Error> {
    contacts.filter(contact_name.eq(name))
        .select(ContactRow::as_select())
        .first(conn)
        .optional()
}

// ---------------------------------------------------------------
// "INSERT INTO contacts (name, number, job, email) VALUES (?, ?, ?, ?)"
// ---------------------------------------------------------------
pub(crate) fn put_contact(
    conn: &mut SqliteConnection,
    c: NewContact
) -> Result<i64, Error> {
    use crate::store::sqlite3::schema::contacts;
    conn.transaction(|conn| {
        diesel::insert_into(contacts::table)
            .values(&c)
            .execute(conn)?;
        diesel::select(diesel::dsl::sql::<BigInt>("last_insert_rowid()")).get_result::<i64>(conn)
    })
}

// ---------------------------------------------------------------------
// "UPDATE contacts SET name=?, number=?, job=?, email=? WHERE name=?"
// ---------------------------------------------------------------------
pub(crate) fn update_contacts_by_name(
    conn: &mut SqliteConnection,
    old_name: &str,
    c: NewContact
) -> Result<usize, Error> {
    diesel::update(contacts.filter(contact_name.eq(old_name)))
        .set(&c)
        .execute(conn)
}

// -------------------------------------
// "DELETE FROM contacts WHERE name = ?"
// -------------------------------------
pub(crate) fn remove_contacts_by_name(
    conn: &mut SqliteConnection,
    name: &str
) -> Result<usize, Error> {
    diesel::delete(contacts.filter(contact_name.eq(name)))
        .execute(conn)
}

// ------------------------
// "DELETE FROM contacts"
// ------------------------
pub(crate) fn remove_all_contacts(
    conn: &mut SqliteConnection
) -> Result<usize, Error> {
    diesel::delete(contacts)
        .execute(conn)
}

/// Wraps the search text in `%...%`, escaping LIKE metacharacters so
/// `%` and `_` typed by the user match literally.
pub(crate) fn like_pattern(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() + 2);
    pattern.push('%');
    for c in input.chars() {
        if c == '%' || c == '_' || c == sql::LIKE_ESCAPE {
            pattern.push(sql::LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
