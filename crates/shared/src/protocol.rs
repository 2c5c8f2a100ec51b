//! Wire shape of the records endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::{GroupId, Record, RecordId};

pub const DEFAULT_BASE_URL: &str = "https://fetch-hiring.s3.amazonaws.com/";
pub const RECORDS_PATH: &str = "hiring.json";

pub fn default_endpoint() -> String {
    format!("{DEFAULT_BASE_URL}{RECORDS_PATH}")
}

/// One element of the JSON array served at [`RECORDS_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub id: i64,
    #[serde(rename = "listId")]
    pub list_id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<RecordPayload> for Record {
    fn from(value: RecordPayload) -> Self {
        Self {
            id: RecordId(value.id),
            group_id: GroupId(value.list_id),
            name: value.name,
        }
    }
}

impl From<&Record> for RecordPayload {
    fn from(value: &Record) -> Self {
        Self {
            id: value.id.0,
            list_id: value.group_id.0,
            name: value.name.clone(),
        }
    }
}

pub fn decode_records(body: &[u8]) -> Result<Vec<Record>, serde_json::Error> {
    let payloads: Vec<RecordPayload> = serde_json::from_slice(body)?;
    Ok(payloads.into_iter().map(Record::from).collect())
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
