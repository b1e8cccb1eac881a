use crate::core::{
    contact::{Contact, ContactFields},
    Result,
};

/// Persistence of the contact set.
///
/// Name-keyed operations touch every row carrying that name and report how
/// many rows were affected; callers decide whether anything other than one
/// is worth reporting.
pub trait ContactStore {
    fn initialize(&mut self,
        path: &str
    ) -> Result<()>;

    fn shutdown(&mut self);

    fn list_all(&mut self) -> Result<Vec<Contact>>;

    fn search(&mut self,
        substring: &str
    ) -> Result<Vec<Contact>>;

    fn find_by_name(&mut self,
        name: &str
    ) -> Result<Option<Contact>>;

    fn insert(&mut self,
        fields: &ContactFields
    ) -> Result<i64>;

    fn update_by_name(&mut self,
        old_name: &str,
        fields: &ContactFields
    ) -> Result<usize>;

    fn delete_by_name(&mut self,
        name: &str
    ) -> Result<usize>;

    fn clear_all(&mut self) -> Result<usize>;
}
