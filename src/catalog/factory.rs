use tracing::info;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::CatalogResult;
use crate::gateway::factory::{create_isbn_checker, create_notifier};

pub async fn create_catalog_service(config: &Configuration) -> CatalogResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config.store, config.table_name.as_str()).await;
    let isbn_checker = create_isbn_checker(config)?;
    let notifier = create_notifier(config).await?;
    info!(store = ?config.store,
        dynamodb = config.store.is_dynamodb(),
        isbn_checker = isbn_checker.is_some(),
        notifier = notifier.is_some(),
        "catalog service created");
    Ok(Box::new(CatalogServiceImpl::new(config, book_repo, isbn_checker, notifier)))
}
