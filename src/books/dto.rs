use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is the data transfer object handed out by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub views: u64,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, total_pages: u32) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            total_pages,
            views: 0,
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            total_pages: other.total_pages,
            views: other.views,
        }
    }
}

// a new entity always starts with zero views regardless of what the dto carries
impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.isbn.as_str(), other.title.as_str(), other.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("isbn", "title", 300);
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!(0, book.views);
    }

    #[tokio::test]
    async fn test_should_reset_views_for_new_entity() {
        let mut book = BookDto::new("isbn", "title", 300);
        book.views = 7;
        let entity = BookEntity::from(&book);
        assert_eq!(0, entity.views);
        assert_eq!(300, entity.total_pages);
    }

    #[tokio::test]
    async fn test_should_default_missing_fields() {
        let book: BookDto = serde_json::from_str(r#"{"isbn": "978-0-13", "title": "Systems Design"}"#)
            .expect("should parse book");
        assert_eq!(0, book.total_pages);
        assert_eq!(0, book.views);
    }
}
