use std::time::Duration;

use shared::domain::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid records endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("failed to reach records endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("records endpoint returned status {status}")]
    Status { status: u16 },
    #[error("records request timed out after {timeout:?}")]
    Timeout { timeout: Duration },
    #[error("records payload is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {record_id} has malformed name {name:?}: expected a 5-character prefix followed by digits")]
pub struct MalformedNameError {
    pub record_id: RecordId,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    MalformedName(#[from] MalformedNameError),
}
