//! Network side of record loading.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Record, protocol::decode_records};
use tracing::debug;
use url::Url;

use crate::{config::Settings, error::FetchError};

/// Issues one request and decodes the returned records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError>;
}

pub struct HttpRecordSource {
    http: Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpRecordSource {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::new(settings.endpoint()?, settings.request_timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                timeout: self.timeout,
            }
        } else {
            FetchError::Transport(err)
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting records");
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = res.bytes().await.map_err(|err| self.classify(err))?;
        let records = decode_records(&body)?;
        debug!(count = records.len(), "decoded records payload");
        Ok(records)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
