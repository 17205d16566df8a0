use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{CatalogError, CatalogResult};
use crate::gateway::clients::{IsbnChecker, Notifier};

// Collaborators are decided once by the factory; None means the step is skipped.
pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    isbn_checker: Option<Box<dyn IsbnChecker>>,
    notifier: Option<Box<dyn Notifier>>,
    notification_recipient: String,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               isbn_checker: Option<Box<dyn IsbnChecker>>,
               notifier: Option<Box<dyn Notifier>>) -> Self {
        Self {
            book_repository,
            isbn_checker,
            notifier,
            notification_recipient: config.notification_recipient.to_string(),
        }
    }

    async fn validate_isbn(&self, isbn: &str) -> CatalogResult<()> {
        if let Some(checker) = &self.isbn_checker {
            if !checker.check_isbn(isbn).await? {
                warn!(isbn, "isbn rejected by checker");
                return Err(CatalogError::validation_rejected(
                    format!("isbn {} is not valid based on external service", isbn).as_str()));
            }
        }
        Ok(())
    }

    async fn notify(&self, book: &BookDto) -> CatalogResult<()> {
        if let Some(notifier) = &self.notifier {
            // the book stays stored, the caller still learns the notice was lost
            notifier.send_creation_notice(self.notification_recipient.as_str(), book).await.map_err(|err| {
                warn!(isbn = book.isbn.as_str(), error = %err, "creation notice failed");
                CatalogError::notification_failed(
                    format!("book {} stored but notification failed: {}", book.isbn, err).as_str())
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto> {
        self.validate_isbn(book.isbn.as_str()).await?;
        match self.book_repository.find_by_isbn(book.isbn.as_str()).await {
            Ok(_) => {
                return Err(CatalogError::duplicate_key(
                    format!("book already exists for {}", book.isbn).as_str()));
            }
            Err(CatalogError::NotFound { .. }) => {}
            Err(err) => return Err(err),
        }
        // insert re-checks atomically, a concurrent create may still win here
        let stored = BookDto::from(&self.book_repository.insert(&BookEntity::from(book)).await?);
        info!(isbn = stored.isbn.as_str(), title = stored.title.as_str(), "book added");
        self.notify(&stored).await?;
        Ok(stored)
    }

    async fn list_books(&self) -> CatalogResult<Vec<BookDto>> {
        let res = self.book_repository.list_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> CatalogResult<BookDto> {
        let _ = self.book_repository.find_by_isbn(isbn).await?;
        let book = self.book_repository.increment_views(isbn).await?;
        debug!(isbn, views = book.views, "book viewed");
        Ok(BookDto::from(&book))
    }
}
