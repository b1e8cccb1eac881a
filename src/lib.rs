pub mod core;
pub mod store;
pub mod view;

pub use crate::core::{
    error::{self, Error},
    contact::{self, Contact, ContactFields},
    config,
    logger,
    default_configuration as configuration,
};

pub use crate::store::{
    ContactStore,
    SqliteStore,
};

pub use crate::view::{
    Action,
    ContactListView,
    TerminalUi,
};
