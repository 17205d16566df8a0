pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::CatalogResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto>;
    async fn list_books(&self) -> CatalogResult<Vec<BookDto>>;
    // returns the book with its views counter already incremented for this read
    async fn find_book_by_isbn(&self, isbn: &str) -> CatalogResult<BookDto>;
}
