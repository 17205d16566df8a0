use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::CatalogResult;

// IsbnChecker asks an external authority whether an isbn is valid. Ok(false) means the
// isbn was rejected, an error means the authority could not answer.
#[async_trait]
pub trait IsbnChecker: Sync + Send {
    async fn check_isbn(&self, isbn: &str) -> CatalogResult<bool>;
}

// Notifier delivers the notice that a book has been added to the catalog
#[async_trait]
pub trait Notifier: Sync + Send {
    async fn send_creation_notice(&self, recipient: &str, book: &BookDto) -> CatalogResult<()>;
}
