use super::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Id,
    pub name: String,

    /// Not checked against the author collection.
    pub author_id: Id,
}

impl Book {
    pub fn new(id: Id, name: impl Into<String>, author_id: Id) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_by(&self, author_id: Id) -> bool {
        self.author_id == author_id
    }
}
