pub(crate) mod sqlite3;

pub mod contact_store;
pub mod sqlite_store;

pub use crate::store::{
    contact_store::ContactStore,
    sqlite_store::SqliteStore,
};

#[cfg(test)]
mod unitests {
    mod test_like_pattern;
    mod test_sqlite3;
    mod test_sqlite_store;
}
