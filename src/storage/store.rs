use super::fixtures::{seed_authors, seed_books};
use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book, Id},
};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct Shelves {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// Append-only author and book collections.
///
/// Ids are `len + 1` of the collection at insert time. Computing the id and
/// pushing the record happen under the same write guard, so concurrent
/// inserts never hand out the same id.
#[derive(Debug, Default)]
pub struct Store {
    shelves: RwLock<Shelves>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the fixture authors and books.
    pub fn seeded() -> Self {
        Self::with_records(seed_authors(), seed_books())
    }

    pub fn with_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self {
            shelves: RwLock::new(Shelves { authors, books }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Shelves>> {
        self.shelves.read().map_err(|_| BookshelfError::StorePoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Shelves>> {
        self.shelves.write().map_err(|_| BookshelfError::StorePoisoned)
    }

    pub fn find_author(&self, id: Id) -> Result<Option<Author>> {
        Ok(self.read()?.authors.iter().find(|a| a.id == id).cloned())
    }

    pub fn find_book(&self, id: Id) -> Result<Option<Book>> {
        Ok(self.read()?.books.iter().find(|b| b.id == id).cloned())
    }

    /// Snapshot of all authors in insertion order.
    pub fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.read()?.authors.clone())
    }

    /// Snapshot of all books in insertion order.
    pub fn books(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    pub fn books_by_author(&self, author_id: Id) -> Result<Vec<Book>> {
        Ok(self
            .read()?
            .books
            .iter()
            .filter(|b| b.is_by(author_id))
            .cloned()
            .collect())
    }

    pub fn add_author(&self, name: String) -> Result<Author> {
        let mut shelves = self.write()?;
        let id = next_id(shelves.authors.len(), "author")?;
        let author = Author::new(id, name);
        shelves.authors.push(author.clone());
        debug!(id, "appended author");
        Ok(author)
    }

    /// `author_id` is stored as given, even if no such author exists.
    pub fn add_book(&self, name: String, author_id: Id) -> Result<Book> {
        let mut shelves = self.write()?;
        let id = next_id(shelves.books.len(), "book")?;
        let book = Book::new(id, name, author_id);
        shelves.books.push(book.clone());
        debug!(id, author_id, "appended book");
        Ok(book)
    }
}

fn next_id(len: usize, kind: &'static str) -> Result<Id> {
    len.checked_add(1)
        .and_then(|n| Id::try_from(n).ok())
        .ok_or(BookshelfError::IdSpaceExhausted(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_seeded_store_counts() {
        let store = Store::seeded();
        assert_eq!(store.authors().unwrap().len(), 3);
        assert_eq!(store.books().unwrap().len(), 8);
    }

    #[test]
    fn test_find_author_by_id() {
        let store = Store::seeded();
        let author = store.find_author(1).unwrap().unwrap();
        assert_eq!(author.name, "J. K. Rowling");
        assert!(store.find_author(42).unwrap().is_none());
    }

    #[test]
    fn test_find_book_by_id() {
        let store = Store::seeded();
        let book = store.find_book(4).unwrap().unwrap();
        assert_eq!(book.name, "The Fellowship of the Ring");
        assert_eq!(book.author_id, 2);
        assert!(store.find_book(0).unwrap().is_none());
    }

    #[test]
    fn test_books_by_author_preserves_order() {
        let store = Store::seeded();
        let ids: Vec<Id> = store
            .books_by_author(2)
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![4, 5, 6]);
        assert!(store.books_by_author(99).unwrap().is_empty());
    }

    #[test]
    fn test_add_author_assigns_next_id() {
        let store = Store::seeded();
        let author = store.add_author("Test".to_string()).unwrap();
        assert_eq!(author, Author::new(4, "Test"));
        assert_eq!(store.authors().unwrap().last(), Some(&author));
    }

    #[test]
    fn test_add_book_accepts_unknown_author() {
        let store = Store::seeded();
        let book = store.add_book("X".to_string(), 999).unwrap();
        assert_eq!(book, Book::new(9, "X", 999));
        assert!(store.find_author(book.author_id).unwrap().is_none());
        assert_eq!(store.find_book(9).unwrap(), Some(book));
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let store = Store::new();
        assert_eq!(store.add_author("First".to_string()).unwrap().id, 1);
        assert_eq!(store.add_book("Solo".to_string(), 1).unwrap().id, 1);
    }

    #[test]
    fn test_reads_are_stable_without_writes() {
        let store = Store::seeded();
        assert_eq!(store.books().unwrap(), store.books().unwrap());
        assert_eq!(store.authors().unwrap(), store.authors().unwrap());
    }

    #[test]
    fn test_concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(Store::seeded());
        let per_thread = 25;
        let threads = 8;

        std::thread::scope(|s| {
            for t in 0..threads {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    for i in 0..per_thread {
                        store.add_author(format!("writer-{t}-{i}")).unwrap();
                    }
                });
            }
        });

        let ids: Vec<Id> = store.authors().unwrap().iter().map(|a| a.id).collect();
        let unique: HashSet<Id> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 3 + per_thread * threads);
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids, (1..=ids.len() as Id).collect::<Vec<_>>());
    }

    #[test]
    fn test_next_id_rejects_overflow() {
        assert_eq!(next_id(0, "author").unwrap(), 1);
        assert!(next_id(Id::MAX as usize, "author").is_err());
    }
}
