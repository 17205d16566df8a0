pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::CatalogResult;

// BookRepository is the single storage contract for catalog records. Every backend
// reports a missing isbn as NotFound and a second insert of the same isbn as DuplicateKey.
#[async_trait]
pub trait BookRepository: Sync + Send {
    // inserts the book unless its isbn is already stored; the check and the write are atomic
    async fn insert(&self, entity: &BookEntity) -> CatalogResult<BookEntity>;

    // point lookup without side effects
    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<BookEntity>;

    // snapshot of all stored books in no particular order
    async fn list_all(&self) -> CatalogResult<Vec<BookEntity>>;

    // atomically bumps the views counter and returns the updated book
    async fn increment_views(&self, isbn: &str) -> CatalogResult<BookEntity>;
}
