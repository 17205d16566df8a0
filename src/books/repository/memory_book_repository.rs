use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{CatalogError, CatalogResult};

// MemoryBookRepository keeps books in a process-local map. Clones share the same map,
// a fresh instance starts empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookRepository {
    storage: Arc<RwLock<HashMap<String, BookEntity>>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn poisoned(op: &str) -> CatalogError {
    CatalogError::runtime(format!("book storage lock poisoned on {}", op).as_str(), None)
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn insert(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let mut storage = self.storage.write().map_err(|_| poisoned("insert"))?;
        let id = entity.id();
        if storage.contains_key(&id) {
            return Err(CatalogError::duplicate_key(format!("book already exists for {}", id).as_str()));
        }
        storage.insert(id, entity.clone());
        Ok(entity.clone())
    }

    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<BookEntity> {
        let storage = self.storage.read().map_err(|_| poisoned("find"))?;
        storage.get(isbn).cloned()
            .ok_or_else(|| CatalogError::not_found(format!("book not found for {}", isbn).as_str()))
    }

    async fn list_all(&self) -> CatalogResult<Vec<BookEntity>> {
        let storage = self.storage.read().map_err(|_| poisoned("list"))?;
        Ok(storage.values().cloned().collect())
    }

    async fn increment_views(&self, isbn: &str) -> CatalogResult<BookEntity> {
        let mut storage = self.storage.write().map_err(|_| poisoned("increment"))?;
        match storage.get_mut(isbn) {
            Some(book) => {
                book.views += 1;
                book.updated_at = Utc::now().naive_utc();
                Ok(book.clone())
            }
            None => Err(CatalogError::not_found(format!("book not found for {}", isbn).as_str())),
        }
    }
}
