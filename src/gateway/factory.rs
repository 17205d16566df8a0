use std::time::Duration;
use crate::core::domain::Configuration;
use crate::core::library::CatalogResult;
use crate::gateway::clients::{IsbnChecker, Notifier};
use crate::gateway::http::email_client::HttpEmailNotifier;
use crate::gateway::http::isbn_client::HttpIsbnChecker;
use crate::gateway::NotifierVia;
use crate::gateway::sns::publisher::SnsNotifier;
use crate::utils::ddb::build_sns_client;

pub fn notifier_via(config: &Configuration) -> Option<NotifierVia> {
    if config.notification_topic_arn.is_some() {
        Some(NotifierVia::Sns)
    } else if config.email_service_host.is_some() {
        Some(NotifierVia::Http)
    } else {
        None
    }
}

pub fn create_isbn_checker(config: &Configuration) -> CatalogResult<Option<Box<dyn IsbnChecker>>> {
    match &config.isbn_checker_host {
        Some(host) => {
            let checker = HttpIsbnChecker::new(host, Duration::from_secs(config.collaborator_timeout_secs))?;
            Ok(Some(Box::new(checker)))
        }
        None => Ok(None),
    }
}

pub async fn create_notifier(config: &Configuration) -> CatalogResult<Option<Box<dyn Notifier>>> {
    match (notifier_via(config), &config.notification_topic_arn, &config.email_service_host) {
        (Some(NotifierVia::Sns), Some(topic_arn), _) => {
            let client = build_sns_client().await;
            let timeout = Duration::from_secs(config.collaborator_timeout_secs);
            Ok(Some(Box::new(SnsNotifier::new(client, topic_arn, timeout))))
        }
        (Some(NotifierVia::Http), _, Some(host)) => {
            let notifier = HttpEmailNotifier::new(host, Duration::from_secs(config.collaborator_timeout_secs))?;
            Ok(Some(Box::new(notifier)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::factory::{create_isbn_checker, create_notifier, notifier_via};
    use crate::gateway::NotifierVia;

    #[tokio::test]
    async fn test_should_skip_unconfigured_collaborators() {
        let config = Configuration::new(RepositoryStore::Memory);
        assert!(create_isbn_checker(&config).expect("should build checker").is_none());
        assert!(create_notifier(&config).await.expect("should build notifier").is_none());
    }

    #[tokio::test]
    async fn test_should_create_http_collaborators() {
        let mut config = Configuration::new(RepositoryStore::Memory);
        config.isbn_checker_host = Some("http://localhost:9090".to_string());
        config.email_service_host = Some("http://localhost:9091".to_string());
        assert!(create_isbn_checker(&config).expect("should build checker").is_some());
        assert_eq!(Some(NotifierVia::Http), notifier_via(&config));
        assert!(create_notifier(&config).await.expect("should build notifier").is_some());
    }

    #[tokio::test]
    async fn test_should_prefer_sns_notifier() {
        let mut config = Configuration::new(RepositoryStore::Memory);
        config.email_service_host = Some("http://localhost:9091".to_string());
        config.notification_topic_arn = Some("arn:aws:sns:us-east-1:000000000000:books".to_string());
        assert_eq!(Some(NotifierVia::Sns), notifier_via(&config));
    }
}
