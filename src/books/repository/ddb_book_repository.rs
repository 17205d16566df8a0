use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{CatalogError, CatalogResult};
use crate::utils::ddb::{is_conditional_check_failed, parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, string_date};

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn insert(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        match self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(isbn)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await {
            Ok(_) => Ok(entity.clone()),
            Err(err) if is_conditional_check_failed(&err) => {
                Err(CatalogError::duplicate_key(format!("book already exists for {}", entity.isbn).as_str()))
            }
            Err(err) => Err(CatalogError::from(err)),
        }
    }

    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .get_item()
            .table_name(table_name)
            .key("isbn", AttributeValue::S(isbn.to_string()))
            .consistent_read(true)
            .send()
            .await?;
        res.item().map(map_to_book).transpose()?
            .ok_or_else(|| CatalogError::not_found(format!("book not found for {}", isbn).as_str()))
    }

    async fn list_all(&self) -> CatalogResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut books = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let res = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;
            for item in res.items().unwrap_or_default() {
                books.push(map_to_book(item)?);
            }
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        Ok(books)
    }

    async fn increment_views(&self, isbn: &str) -> CatalogResult<BookEntity> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();
        match self.client
            .update_item()
            .table_name(table_name)
            .key("isbn", AttributeValue::S(isbn.to_string()))
            .update_expression("ADD #views :one SET updated_at = :updated_at")
            .expression_attribute_names("#views", "views")
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(isbn)")
            .return_values(ReturnValue::AllNew)
            .send()
            .await {
            Ok(res) => res.attributes().map(map_to_book).transpose()?
                .ok_or_else(|| CatalogError::database(format!("no attributes returned for {}", isbn).as_str(), None, false)),
            Err(err) if is_conditional_check_failed(&err) => {
                Err(CatalogError::not_found(format!("book not found for {}", isbn).as_str()))
            }
            Err(err) => Err(CatalogError::from(err)),
        }
    }
}

// an item without its isbn key is corrupt and never surfaces as a book
fn map_to_book(map: &HashMap<String, AttributeValue>) -> CatalogResult<BookEntity> {
    let isbn = parse_string_attribute("isbn", map)
        .filter(|isbn| !isbn.is_empty())
        .ok_or_else(|| CatalogError::database(format!("stored book item without isbn: {:?}", map.keys()).as_str(), None, false))?;
    Ok(BookEntity {
        isbn,
        title: parse_string_attribute("title", map).unwrap_or(String::from("")),
        total_pages: parse_number_attribute("total_pages", map),
        views: parse_number_attribute("views", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or(Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or(Utc::now().naive_utc()),
    })
}
