use crate::core::contact::{Contact, ContactFields};

#[test]
fn test_accessors() {
    let fields = ContactFields::new("Ada", "111", "Engineer", "ada@x.com");
    let contact = Contact::new(7, fields.clone());
    assert_eq!(contact.id(), 7);
    assert_eq!(contact.name(), "Ada");
    assert_eq!(contact.number(), "111");
    assert_eq!(contact.job(), "Engineer");
    assert_eq!(contact.email(), "ada@x.com");
    assert_eq!(contact.fields(), &fields);
    assert_eq!(fields.columns(), ["Ada", "111", "Engineer", "ada@x.com"]);
}

#[test]
fn test_display() {
    let contact = Contact::new(1, ContactFields::new("Bob", "222", "", "bob@x.com"));
    assert_eq!(contact.to_string(), "#1[name:Bob,number:222,job:,email:bob@x.com]");
}
