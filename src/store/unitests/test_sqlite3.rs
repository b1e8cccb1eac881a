use diesel::prelude::*;

use crate::core::contact::Contact;
use crate::store::sqlite3::{
    all_contacts,
    create_tbs,
    search_contacts,
};

fn memory_conn() -> SqliteConnection {
    let mut conn = match SqliteConnection::establish(":memory:") {
        Ok(v) => v,
        Err(e) => panic!("opening db error: {}", e),
    };
    create_tbs(&mut conn).expect("create table");
    conn
}

// Databases written by other tools may hold rows with a NULL name.
fn insert_raw(conn: &mut SqliteConnection, sql: &str) {
    diesel::sql_query(sql).execute(conn).expect("raw insert");
}

#[test]
fn test_empty_search_keeps_null_names() {
    let mut conn = memory_conn();
    insert_raw(&mut conn, "INSERT INTO contacts (name, number) VALUES ('Ada', '1')");
    insert_raw(&mut conn, "INSERT INTO contacts (name, number) VALUES (NULL, '5')");

    let all = all_contacts(&mut conn).unwrap();
    let found = search_contacts(&mut conn, "").unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(
        found.iter().map(|v| v.id).collect::<Vec<_>>(),
        all.iter().map(|v| v.id).collect::<Vec<_>>()
    );

    let nameless = Contact::from(found.into_iter().nth(1).unwrap());
    assert_eq!(nameless.name(), "");
    assert_eq!(nameless.number(), "5");
}

#[test]
fn test_substring_search_skips_null_names() {
    let mut conn = memory_conn();
    insert_raw(&mut conn, "INSERT INTO contacts (name, number) VALUES ('Ada', '1')");
    insert_raw(&mut conn, "INSERT INTO contacts (name, number) VALUES (NULL, '5')");

    let found = search_contacts(&mut conn, "a").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name.as_deref(), Some("Ada"));
}
