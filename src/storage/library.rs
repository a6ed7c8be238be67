use crate::config::SeedSettings;
use crate::error::{BookshelfError, Result};
use crate::model::{Author, Book, EntityId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Both collections plus the indexes derived from them.
///
/// Vectors hold insertion order; the maps point into them by position.
#[derive(Default)]
struct Shelves {
    authors: Vec<Author>,
    books: Vec<Book>,
    author_index: HashMap<EntityId, usize>,
    book_index: HashMap<EntityId, usize>,
    books_by_author: HashMap<EntityId, Vec<usize>>,
}

/// Id for the entry appended after `len` existing ones.
fn next_id(len: usize, kind: &'static str) -> Result<EntityId> {
    len.checked_add(1)
        .and_then(|next| EntityId::try_from(next).ok())
        .ok_or(BookshelfError::IdsExhausted(kind))
}

impl Shelves {
    fn push_author(&mut self, name: String) -> Result<Author> {
        let author = Author::new(next_id(self.authors.len(), "authors")?, name);
        self.author_index.insert(author.id, self.authors.len());
        self.authors.push(author.clone());
        Ok(author)
    }

    fn push_book(&mut self, name: String, author_id: EntityId) -> Result<Book> {
        let book = Book::new(next_id(self.books.len(), "books")?, name, author_id);
        let position = self.books.len();
        self.book_index.insert(book.id, position);
        self.books_by_author
            .entry(author_id)
            .or_default()
            .push(position);
        self.books.push(book.clone());
        Ok(book)
    }
}

/// Process-wide store of authors and books.
///
/// Reads share the lock. Each append holds the write lock across id
/// assignment and insertion, so ids stay unique and gap-free under
/// concurrent mutations.
pub struct Library {
    shelves: RwLock<Shelves>,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Self {
            shelves: RwLock::new(Shelves::default()),
        }
    }

    pub fn from_seed(seed: &SeedSettings) -> Result<Self> {
        let mut shelves = Shelves::default();
        for author in &seed.authors {
            shelves.push_author(author.name.clone())?;
        }
        for book in &seed.books {
            shelves.push_book(book.name.clone(), book.author_id)?;
        }
        tracing::debug!(
            authors = shelves.authors.len(),
            books = shelves.books.len(),
            "Seeded library"
        );
        Ok(Self {
            shelves: RwLock::new(shelves),
        })
    }

    pub async fn author(&self, id: EntityId) -> Option<Author> {
        let shelves = self.shelves.read().await;
        shelves
            .author_index
            .get(&id)
            .map(|&position| shelves.authors[position].clone())
    }

    pub async fn book(&self, id: EntityId) -> Option<Book> {
        let shelves = self.shelves.read().await;
        shelves
            .book_index
            .get(&id)
            .map(|&position| shelves.books[position].clone())
    }

    /// All authors in insertion order.
    pub async fn authors(&self) -> Vec<Author> {
        self.shelves.read().await.authors.clone()
    }

    /// All books in insertion order.
    pub async fn books(&self) -> Vec<Book> {
        self.shelves.read().await.books.clone()
    }

    /// Books whose `author_id` is `author_id`, in insertion order.
    pub async fn books_by(&self, author_id: EntityId) -> Vec<Book> {
        let shelves = self.shelves.read().await;
        shelves
            .books_by_author
            .get(&author_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| shelves.books[position].clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub async fn add_author(&self, name: String) -> Result<Author> {
        let author = self.shelves.write().await.push_author(name)?;
        tracing::info!(id = author.id, name = %author.name, "Added author");
        Ok(author)
    }

    /// Append a book. `author_id` is stored as given, whether or not such an
    /// author exists.
    pub async fn add_book(&self, name: String, author_id: EntityId) -> Result<Book> {
        let book = self.shelves.write().await.push_book(name, author_id)?;
        tracing::info!(id = book.id, name = %book.name, author_id, "Added book");
        Ok(book)
    }

    pub async fn author_count(&self) -> usize {
        self.shelves.read().await.authors.len()
    }

    pub async fn book_count(&self) -> usize {
        self.shelves.read().await.books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SeedAuthor, SeedBook};
    use std::sync::Arc;

    fn seed() -> SeedSettings {
        SeedSettings {
            authors: vec![
                SeedAuthor {
                    name: "Author 1".to_string(),
                },
                SeedAuthor {
                    name: "Author 2".to_string(),
                },
            ],
            books: vec![
                SeedBook {
                    name: "Book 1".to_string(),
                    author_id: 1,
                },
                SeedBook {
                    name: "Book 2".to_string(),
                    author_id: 2,
                },
                SeedBook {
                    name: "Book 3".to_string(),
                    author_id: 1,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_seed_assigns_sequential_ids() {
        let library = Library::from_seed(&seed()).unwrap();

        let authors = library.authors().await;
        assert_eq!(authors, vec![Author::new(1, "Author 1"), Author::new(2, "Author 2")]);

        let ids: Vec<_> = library.books().await.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_lookup_hit_and_miss() {
        let library = Library::from_seed(&seed()).unwrap();

        assert_eq!(library.book(2).await, Some(Book::new(2, "Book 2", 2)));
        assert_eq!(library.author(1).await, Some(Author::new(1, "Author 1")));
        assert_eq!(library.book(999).await, None);
        assert_eq!(library.author(0).await, None);
        assert_eq!(library.author(-1).await, None);
    }

    #[tokio::test]
    async fn test_books_by_author_keeps_insertion_order() {
        let library = Library::from_seed(&seed()).unwrap();

        let names: Vec<_> = library
            .books_by(1)
            .await
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Book 1", "Book 3"]);
        assert!(library.books_by(42).await.is_empty());
    }

    #[tokio::test]
    async fn test_add_author_uses_count_plus_one() {
        let library = Library::from_seed(&seed()).unwrap();

        let author = library.add_author("X".to_string()).await.unwrap();
        assert_eq!(author.id, 3);
        assert_eq!(library.authors().await.last(), Some(&author));
        assert_eq!(library.author_count().await, 3);
    }

    #[tokio::test]
    async fn test_add_book_links_to_author() {
        let library = Library::from_seed(&seed()).unwrap();

        let book = library.add_book("Y".to_string(), 2).await.unwrap();
        assert_eq!(book, Book::new(4, "Y", 2));
        assert!(library.books_by(2).await.contains(&book));
    }

    #[tokio::test]
    async fn test_add_book_with_unknown_author_is_accepted() {
        let library = Library::new();

        let book = library.add_book("Orphan".to_string(), 7).await.unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(library.author(book.author_id).await, None);
        assert_eq!(library.books_by(7).await, vec![book]);
    }

    #[test]
    fn test_next_id_is_count_plus_one() {
        assert_eq!(next_id(0, "books").unwrap(), 1);
        assert_eq!(next_id(41, "books").unwrap(), 42);
    }

    #[test]
    fn test_next_id_refuses_to_overflow() {
        let last = EntityId::MAX as usize - 1;
        assert_eq!(next_id(last, "authors").unwrap(), EntityId::MAX);

        let err = next_id(EntityId::MAX as usize, "authors").unwrap_err();
        assert!(matches!(err, BookshelfError::IdsExhausted("authors")));
        assert!(next_id(usize::MAX, "books").is_err());
    }

    #[tokio::test]
    async fn test_empty_library() {
        let library = Library::new();
        assert!(library.authors().await.is_empty());
        assert!(library.books().await.is_empty());
        assert_eq!(library.book_count().await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_never_share_an_id() {
        let library = Arc::new(Library::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let library = Arc::clone(&library);
                tokio::spawn(async move { library.add_author(format!("Author {}", i)).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=64).collect::<Vec<_>>());
        assert_eq!(library.author_count().await, 64);
    }
}
