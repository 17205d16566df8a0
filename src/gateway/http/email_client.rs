use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

use crate::books::dto::BookDto;
use crate::core::library::{CatalogError, CatalogResult};
use crate::gateway::clients::Notifier;
use crate::gateway::CreationNotice;

const SEND_EMAIL_PATH: &str = "/send-email";

/// Posts creation notices as JSON to an external mail service.
#[derive(Debug, Clone)]
pub struct HttpEmailNotifier {
    client: Client,
    host: String,
}

impl HttpEmailNotifier {
    pub fn new(host: &str, timeout: Duration) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Notifier for HttpEmailNotifier {
    async fn send_creation_notice(&self, recipient: &str, book: &BookDto) -> CatalogResult<()> {
        let url = format!("{}{}", self.host, SEND_EMAIL_PATH);
        let notice = CreationNotice::new(recipient, book);
        let res = self.client.post(&url).json(&notice).send().await?;
        if res.status() == StatusCode::OK {
            info!(isbn = book.isbn.as_str(), recipient, "creation notice sent");
            Ok(())
        } else {
            warn!(isbn = book.isbn.as_str(), status = %res.status(), "mail service refused creation notice");
            Err(CatalogError::notification_failed(
                format!("mail service answered {} for {}", res.status(), book.isbn).as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};

    use crate::books::dto::BookDto;
    use crate::core::library::CatalogError;
    use crate::gateway::clients::Notifier;
    use crate::gateway::http::email_client::HttpEmailNotifier;
    use crate::gateway::http::test_server::spawn_server;
    use crate::gateway::CreationNotice;

    type Inbox = Arc<Mutex<Vec<CreationNotice>>>;

    async fn send_email(State(inbox): State<Inbox>, Json(notice): Json<CreationNotice>) -> StatusCode {
        if notice.email.is_empty() {
            return StatusCode::BAD_REQUEST;
        }
        if notice.book.isbn == "slow" {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
        inbox.lock().expect("inbox lock").push(notice);
        StatusCode::OK
    }

    async fn notifier(inbox: Inbox) -> HttpEmailNotifier {
        let app = Router::new().route("/send-email", post(send_email)).with_state(inbox);
        let host = spawn_server(app).await;
        HttpEmailNotifier::new(host.as_str(), Duration::from_millis(500)).expect("should build notifier")
    }

    #[tokio::test]
    async fn test_should_send_creation_notice() {
        let inbox: Inbox = Arc::new(Mutex::new(vec![]));
        let notifier = notifier(inbox.clone()).await;
        let book = BookDto::new("978-0-13", "Systems Design", 300);
        notifier.send_creation_notice("reader@example.com", &book).await.expect("should send notice");

        let received = inbox.lock().expect("inbox lock").clone();
        assert_eq!(vec![CreationNotice::new("reader@example.com", &book)], received);
    }

    #[tokio::test]
    async fn test_should_fail_when_mail_service_refuses() {
        let inbox: Inbox = Arc::new(Mutex::new(vec![]));
        let notifier = notifier(inbox.clone()).await;
        let res = notifier.send_creation_notice("", &BookDto::new("978-0-13", "Systems Design", 300)).await;
        assert!(matches!(res, Err(CatalogError::NotificationFailed { .. })));
        assert!(inbox.lock().expect("inbox lock").is_empty());
    }

    #[tokio::test]
    async fn test_should_time_out_slow_mail_service() {
        let inbox: Inbox = Arc::new(Mutex::new(vec![]));
        let notifier = notifier(inbox.clone()).await;
        let started = Instant::now();
        let res = notifier.send_creation_notice("reader@example.com", &BookDto::new("slow", "Systems Design", 300)).await;
        assert!(matches!(res, Err(CatalogError::CollaboratorUnavailable { .. })));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_should_fail_on_unreachable_mail_service() {
        let notifier = HttpEmailNotifier::new("http://127.0.0.1:1", Duration::from_millis(500)).expect("should build notifier");
        let res = notifier.send_creation_notice("reader@example.com", &BookDto::new("978-0-13", "Systems Design", 300)).await;
        assert!(matches!(res, Err(CatalogError::CollaboratorUnavailable { .. })));
    }
}
