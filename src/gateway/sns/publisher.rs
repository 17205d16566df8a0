use std::time::Duration;
use aws_sdk_sns::Client;
use async_trait::async_trait;
use aws_sdk_sns::error::SdkError;
use aws_sdk_sns::operation::publish::PublishError;
use tracing::{info, warn};
use crate::books::dto::BookDto;
use crate::core::library::{CatalogError, CatalogResult};
use crate::gateway::clients::Notifier;
use crate::gateway::CreationNotice;

const NOTICE_SUBJECT: &str = "Book added to catalog";

// SnsNotifier publishes creation notices to a topic that the mail service subscribes to.
// Each publish is bounded by timeout, including retries done by the sdk.
#[derive(Debug)]
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
    timeout: Duration,
}

impl SnsNotifier {
    pub fn new(client: Client, topic_arn: &str, timeout: Duration) -> Self {
        Self {
            client,
            topic_arn: topic_arn.to_string(),
            timeout,
        }
    }
}

fn build_message(recipient: &str, book: &BookDto) -> CatalogResult<String> {
    Ok(serde_json::to_string(&CreationNotice::new(recipient, book))?)
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn send_creation_notice(&self, recipient: &str, book: &BookDto) -> CatalogResult<()> {
        let json = build_message(recipient, book)?;
        let publish = self.client.publish()
            .topic_arn(self.topic_arn.as_str())
            .subject(NOTICE_SUBJECT)
            .message(json)
            .send();
        let resp = tokio::time::timeout(self.timeout, publish).await.map_err(|_| {
            warn!(isbn = book.isbn.as_str(), timeout_ms = self.timeout.as_millis() as u64, "creation notice publish timed out");
            CatalogError::notification_failed(
                format!("publishing creation notice for {} timed out after {:?}", book.isbn, self.timeout).as_str())
        })??;
        info!(isbn = book.isbn.as_str(), message_id = resp.message_id().unwrap_or_default(), "published creation notice");
        Ok(())
    }
}

impl From<SdkError<PublishError>> for CatalogError {
    fn from(err: SdkError<PublishError>) -> Self {
        let retryable = matches!(err, SdkError::TimeoutError(_) | SdkError::DispatchFailure(_));
        CatalogError::unavailable(format!("{:?}", err).as_str(), Some("sns".to_string()), retryable)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use aws_sdk_sns::config::{Credentials, Region};
    use aws_sdk_sns::config::retry::RetryConfig;
    use axum::http::StatusCode;
    use axum::Router;
    use crate::books::dto::BookDto;
    use crate::core::library::CatalogError;
    use crate::gateway::clients::Notifier;
    use crate::gateway::CreationNotice;
    use crate::gateway::http::test_server::spawn_server;
    use crate::gateway::sns::publisher::{build_message, SnsNotifier};
    use crate::utils::ddb::build_sns_client;

    async fn hang() -> StatusCode {
        tokio::time::sleep(Duration::from_secs(10)).await;
        StatusCode::OK
    }

    // sns client pointed at a local endpoint that never answers in time
    async fn hanging_sns_client() -> aws_sdk_sns::Client {
        let host = spawn_server(Router::new().fallback(hang)).await;
        let config = aws_sdk_sns::Config::builder()
            .region(Region::new("local"))
            .credentials_provider(Credentials::new("AKIDLOCAL", "localsecret", None, None, "faked"))
            .endpoint_url(host)
            .retry_config(RetryConfig::disabled())
            .build();
        aws_sdk_sns::Client::from_conf(config)
    }

    #[tokio::test]
    async fn test_should_time_out_hanging_publish() {
        let notifier = SnsNotifier::new(hanging_sns_client().await,
                                        "arn:aws:sns:local:000000000000:books", Duration::from_millis(300));
        let started = Instant::now();
        let res = notifier.send_creation_notice("reader@example.com",
                                                &BookDto::new("978-0-13", "Systems Design", 300)).await;
        assert!(matches!(res, Err(CatalogError::NotificationFailed { .. })));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_should_build_notice_message() {
        let book = BookDto::new("978-0-13", "Systems Design", 300);
        let json = build_message("reader@example.com", &book).expect("should build message");
        let notice: CreationNotice = serde_json::from_str(json.as_str()).expect("should parse message");
        assert_eq!(CreationNotice::new("reader@example.com", &book), notice);
    }

    #[tokio::test]
    #[ignore = "requires AWS credentials and CATALOG_NOTIFICATION_TOPIC_ARN"]
    async fn test_should_publish_to_sns() {
        let topic_arn = std::env::var("CATALOG_NOTIFICATION_TOPIC_ARN").expect("topic arn");
        let notifier = SnsNotifier::new(build_sns_client().await, topic_arn.as_str(), Duration::from_secs(5));
        let book = BookDto::new("978-0-13", "Systems Design", 300);
        notifier.send_creation_notice("reader@example.com", &book).await.expect("should publish");
    }
}
