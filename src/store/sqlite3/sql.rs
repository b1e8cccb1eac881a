pub(crate) const CREATE_CONTACTS_TABLE: &str = "
        CREATE TABLE IF NOT EXISTS contacts(\
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        name TEXT, \
        number TEXT, \
        job TEXT, \
        email TEXT\
        )
    ";

pub(crate) const LIKE_ESCAPE: char = '\\';
