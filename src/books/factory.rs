use tracing::warn;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table};

pub async fn create_book_repository(store: RepositoryStore, table_name: &str) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store).await;
            Box::new(DDBBookRepository::new(client, table_name))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store).await;
            if let Err(err) = create_table(&client, table_name, "isbn").await {
                warn!(table = table_name, error = %err, "failed to create table on local dynamodb");
            }
            Box::new(DDBBookRepository::new(client, table_name))
        }
    }
}
