use serde::{Deserialize, Serialize};
use crate::core::library::CatalogResult;
use crate::core::repository::RepositoryStore;

const ENV_PREFIX: &str = "CATALOG";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    #[serde(default = "Configuration::default_store")]
    pub store: RepositoryStore,
    #[serde(default = "Configuration::default_table_name")]
    pub table_name: String,
    // isbn validation is skipped entirely when no checker host is configured
    #[serde(default)]
    pub isbn_checker_host: Option<String>,
    #[serde(default)]
    pub email_service_host: Option<String>,
    #[serde(default)]
    pub notification_topic_arn: Option<String>,
    #[serde(default = "Configuration::default_notification_recipient")]
    pub notification_recipient: String,
    #[serde(default = "Configuration::default_collaborator_timeout_secs")]
    pub collaborator_timeout_secs: u64,
    #[serde(default = "Configuration::default_dev_mode")]
    pub dev_mode: bool,
}

impl Configuration {
    pub fn new(store: RepositoryStore) -> Self {
        Configuration {
            store,
            table_name: Self::default_table_name(),
            isbn_checker_host: None,
            email_service_host: None,
            notification_topic_arn: None,
            notification_recipient: Self::default_notification_recipient(),
            collaborator_timeout_secs: Self::default_collaborator_timeout_secs(),
            dev_mode: Self::default_dev_mode(),
        }
    }

    /// Loads the configuration from an optional `.env` file and `CATALOG_*` environment
    /// variables, e.g. `CATALOG_STORE=dynamodb` or `CATALOG_ISBN_CHECKER_HOST=http://isbn:8080`.
    pub fn load() -> CatalogResult<Self> {
        let _ = dotenvy::dotenv();

        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }

    fn default_store() -> RepositoryStore {
        RepositoryStore::Memory
    }

    fn default_table_name() -> String {
        "books".to_string()
    }

    fn default_notification_recipient() -> String {
        "catalog@example.com".to_string()
    }

    fn default_collaborator_timeout_secs() -> u64 {
        5
    }

    fn default_dev_mode() -> bool {
        true
    }
}
