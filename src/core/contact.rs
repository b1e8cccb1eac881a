use std::fmt;

/// The four user-editable values of a contact, stored verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name    : String,
    pub number  : String,
    pub job     : String,
    pub email   : String,
}

impl ContactFields {
    pub fn new(name: &str, number: &str, job: &str, email: &str) -> Self {
        Self {
            name    : name.to_string(),
            number  : number.to_string(),
            job     : job.to_string(),
            email   : email.to_string(),
        }
    }

    /// Field values in display column order.
    pub fn columns(&self) -> [&str; 4] {
        [&self.name, &self.number, &self.job, &self.email]
    }
}

/// A stored contact: editable fields plus the id assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    id      : i64,
    fields  : ContactFields,
}

impl Contact {
    pub fn new(id: i64, fields: ContactFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn number(&self) -> &str {
        &self.fields.number
    }

    pub fn job(&self) -> &str {
        &self.fields.job
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
            "#{}[name:{},number:{},job:{},email:{}]",
            self.id,
            self.fields.name,
            self.fields.number,
            self.fields.job,
            self.fields.email
        )
    }
}
