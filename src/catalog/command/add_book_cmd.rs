use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub total_pages: u32,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, total_pages: u32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            total_pages,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.total_pages)
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use uuid::Uuid;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new(RepositoryStore::Memory)).await
                    .expect("should create catalog service");
                AddBookCommand::new(Arc::from(svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = SUT_CMD.get().await;

        let isbn = Uuid::new_v4().to_string();
        let res = cmd.execute(AddBookCommandRequest::new(isbn.as_str(), "test book", 120))
            .await.expect("should add book");
        assert_eq!(isbn, res.book.isbn);
        assert_eq!(120, res.book.total_pages);
        assert_eq!(0, res.book.views);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_add_book() {
        let cmd = SUT_CMD.get().await;

        let isbn = Uuid::new_v4().to_string();
        let _ = cmd.execute(AddBookCommandRequest::new(isbn.as_str(), "test book", 120))
            .await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new(isbn.as_str(), "test book", 120)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_parse_add_book_request() {
        let req: AddBookCommandRequest = serde_json::from_str(r#"{"isbn": "978-0-13", "title": "Systems Design"}"#)
            .expect("should parse request");
        assert_eq!(0, req.total_pages);
        assert_eq!("978-0-13", req.build_book().isbn.as_str());
    }
}
