use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use crate::core::library::{CatalogError, CatalogResult};
use crate::gateway::clients::IsbnChecker;

const CHECK_ISBN_SEGMENT: &str = "isbn";

/// Checks isbns against an external HTTP service: `GET {host}/isbn/{isbn}` answering
/// 200 means valid, any other status means invalid.
#[derive(Debug, Clone)]
pub struct HttpIsbnChecker {
    client: Client,
    host: Url,
}

impl HttpIsbnChecker {
    pub fn new(host: &str, timeout: Duration) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;
        let host = Url::parse(host).map_err(|err| CatalogError::runtime(
            format!("invalid isbn checker host {}: {}", host, err).as_str(), None))?;
        Ok(Self {
            client,
            host,
        })
    }

    // the isbn is percent-encoded as a single path segment
    fn check_url(&self, isbn: &str) -> CatalogResult<Url> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::runtime(
                format!("isbn checker host {} cannot carry a path", self.host).as_str(), None))?
            .pop_if_empty()
            .push(CHECK_ISBN_SEGMENT)
            .push(isbn);
        Ok(url)
    }
}

#[async_trait]
impl IsbnChecker for HttpIsbnChecker {
    async fn check_isbn(&self, isbn: &str) -> CatalogResult<bool> {
        let url = self.check_url(isbn)?;
        let res = self.client.get(url).send().await.map_err(|err| {
            warn!(isbn, error = %err, "isbn checker unavailable");
            err
        })?;
        debug!(isbn, status = %res.status(), "isbn checked");
        Ok(res.status() == StatusCode::OK)
    }
}
