use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(RecordId);
id_newtype!(GroupId);

/// One fetched item. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub group_id: GroupId,
    #[serde(default)]
    pub name: Option<String>,
}

impl Record {
    pub fn new(id: i64, group_id: i64, name: Option<&str>) -> Self {
        Self {
            id: RecordId(id),
            group_id: GroupId(group_id),
            name: name.map(str::to_string),
        }
    }

    /// The name, if it has at least one non-whitespace character.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
