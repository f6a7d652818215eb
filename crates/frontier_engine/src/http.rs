use std::time::Duration;

use frontier_core::ContentItem;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::{FallibleContentStore, HttpFailure, StoreError, SubscribeError, Subscriber};

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, HttpFailure> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| HttpFailure::Network(err.to_string()))
}

fn parse_url(url: &str) -> Result<reqwest::Url, HttpFailure> {
    reqwest::Url::parse(url).map_err(|err| HttpFailure::InvalidUrl(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> HttpFailure {
    if err.is_timeout() {
        return HttpFailure::Timeout;
    }
    HttpFailure::Network(err.to_string())
}

/// Fetches the catalog as a JSON array from a remote endpoint.
#[derive(Debug, Clone)]
pub struct HttpContentStore {
    url: reqwest::Url,
    settings: HttpSettings,
    client: reqwest::Client,
}

impl HttpContentStore {
    pub fn new(url: &str, settings: HttpSettings) -> Result<Self, HttpFailure> {
        Ok(Self {
            url: parse_url(url)?,
            client: build_client(&settings)?,
            settings,
        })
    }

    async fn download(&self) -> Result<Vec<u8>, HttpFailure> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpFailure::Status(status.as_u16()));
        }
        let max_bytes = self.settings.max_bytes;
        if response.content_length().is_some_and(|len| len > max_bytes) {
            return Err(HttpFailure::TooLarge { max_bytes });
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if bytes.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(HttpFailure::TooLarge { max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl FallibleContentStore for HttpContentStore {
    async fn fetch_items(&self) -> Result<Vec<ContentItem>, StoreError> {
        let bytes = self.download().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// Posts `{"email": ...}` to a newsletter endpoint; any non-2xx status is a failure.
#[derive(Debug, Clone)]
pub struct HttpSubscriber {
    url: reqwest::Url,
    client: reqwest::Client,
}

impl HttpSubscriber {
    pub fn new(url: &str, settings: HttpSettings) -> Result<Self, HttpFailure> {
        Ok(Self {
            url: parse_url(url)?,
            client: build_client(&settings)?,
        })
    }
}

#[async_trait::async_trait]
impl Subscriber for HttpSubscriber {
    async fn subscribe(&self, email: &str) -> Result<(), SubscribeError> {
        let body = serde_json::to_vec(&SubscribeRequest { email })?;
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpFailure::Status(status.as_u16()).into());
        }
        Ok(())
    }
}
