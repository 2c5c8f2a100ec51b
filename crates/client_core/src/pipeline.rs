//! Pure shaping of fetched records into display order.
//!
//! Stages run in a fixed sequence: drop unnamed records, bucket by group id,
//! order buckets ascending, order each bucket by the numeric suffix of the
//! name, then concatenate. Nothing here performs I/O.

use std::{collections::BTreeMap, str::FromStr};

use shared::domain::{GroupId, Record};
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::MalformedNameError;

/// Names look like `"item 123"`; the sort key starts after this many characters.
pub const NAME_PREFIX_LEN: usize = 5;

/// What to do with a record whose name has no numeric suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Order after every well-formed record of the same group.
    #[default]
    SortLast,
    /// Drop the record and keep going.
    Skip,
    /// Fail the whole batch.
    Abort,
}

impl NamePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SortLast => "sort-last",
            Self::Skip => "skip",
            Self::Abort => "abort",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown name policy {0:?}; expected one of sort-last, skip, abort")]
pub struct UnknownNamePolicy(pub String);

impl FromStr for NamePolicy {
    type Err = UnknownNamePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "sort-last" => Ok(Self::SortLast),
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(UnknownNamePolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Numeric(u64),
    Malformed,
}

/// Parses everything after the first [`NAME_PREFIX_LEN`] characters as an
/// unsigned integer. `None` when the suffix is empty or has a non-digit.
pub fn name_sort_key(name: &str) -> Option<u64> {
    let (offset, _) = name.char_indices().nth(NAME_PREFIX_LEN)?;
    let suffix = &name[offset..];
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

pub fn record_sort_key(record: &Record) -> Result<u64, MalformedNameError> {
    record
        .name
        .as_deref()
        .and_then(name_sort_key)
        .ok_or_else(|| MalformedNameError {
            record_id: record.id,
            name: record.name.clone().unwrap_or_default(),
        })
}

pub fn filter_named(records: impl IntoIterator<Item = Record>) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| record.display_name().is_some())
        .collect()
}

/// Buckets records by group id. Iterating the map yields groups in ascending id order.
pub fn group_by_list(records: Vec<Record>) -> BTreeMap<GroupId, Vec<Record>> {
    let mut groups: BTreeMap<GroupId, Vec<Record>> = BTreeMap::new();
    for record in records {
        groups.entry(record.group_id).or_default().push(record);
    }
    groups
}

/// Stable sort by name suffix, so equal keys keep their incoming order.
pub fn sort_group(
    group: Vec<Record>,
    policy: NamePolicy,
) -> Result<Vec<Record>, MalformedNameError> {
    let mut keyed = Vec::with_capacity(group.len());
    for record in group {
        let key = match record_sort_key(&record) {
            Ok(key) => SortKey::Numeric(key),
            Err(err) => match policy {
                NamePolicy::SortLast => {
                    debug!(
                        record_id = %err.record_id,
                        name = %err.name,
                        "malformed name sorted last"
                    );
                    SortKey::Malformed
                }
                NamePolicy::Skip => {
                    warn!(
                        record_id = %err.record_id,
                        name = %err.name,
                        "skipping record with malformed name"
                    );
                    continue;
                }
                NamePolicy::Abort => return Err(err),
            },
        };
        keyed.push((key, record));
    }

    keyed.sort_by_key(|(key, _)| *key);
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

pub fn flatten(groups: BTreeMap<GroupId, Vec<Record>>) -> Vec<Record> {
    groups.into_values().flatten().collect()
}

/// Filter, group and sort, keeping the grouped shape.
pub fn transform_grouped(
    records: impl IntoIterator<Item = Record>,
    policy: NamePolicy,
) -> Result<BTreeMap<GroupId, Vec<Record>>, MalformedNameError> {
    let mut sorted = BTreeMap::new();
    for (group_id, group) in group_by_list(filter_named(records)) {
        let group = sort_group(group, policy)?;
        if !group.is_empty() {
            sorted.insert(group_id, group);
        }
    }
    Ok(sorted)
}

pub fn transform(
    records: impl IntoIterator<Item = Record>,
    policy: NamePolicy,
) -> Result<Vec<Record>, MalformedNameError> {
    transform_grouped(records, policy).map(flatten)
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
