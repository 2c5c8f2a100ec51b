//! Framework-neutral pieces of the grouped table: sections, expand/collapse
//! state and a plain-text rendering.

use std::{
    collections::{HashMap, HashSet},
    fmt::Write as _,
};

use shared::domain::{GroupId, Record};

use crate::controller::DisplayState;

pub const COLUMN_HEADERS: [&str; 3] = ["listId", "id", "name"];
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSection {
    pub group_id: GroupId,
    pub records: Vec<Record>,
}

impl GroupSection {
    pub fn header_label(&self) -> String {
        format!("List ID: {}", self.group_id)
    }

    pub fn count_label(&self) -> String {
        format!("Count: {}", self.records.len())
    }
}

/// Cell text for one row, in [`COLUMN_HEADERS`] order.
pub fn row_cells(record: &Record) -> [String; 3] {
    [
        record.group_id.to_string(),
        record.id.to_string(),
        record.name.clone().unwrap_or_else(|| "null".to_string()),
    ]
}

/// Re-derives groups from a flattened sequence. Sections appear in order of
/// each group's first record; later records with the same id join that section.
pub fn group_sections(records: &[Record]) -> Vec<GroupSection> {
    let mut sections: Vec<GroupSection> = Vec::new();
    let mut index: HashMap<GroupId, usize> = HashMap::new();
    for record in records {
        let slot = *index.entry(record.group_id).or_insert_with(|| {
            sections.push(GroupSection {
                group_id: record.group_id,
                records: Vec::new(),
            });
            sections.len() - 1
        });
        sections[slot].records.push(record.clone());
    }
    sections
}

/// Which groups are open. Every group starts collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<GroupId>,
}

impl ExpansionState {
    pub fn is_expanded(&self, group_id: GroupId) -> bool {
        self.expanded.contains(&group_id)
    }

    /// Returns the new expanded flag.
    pub fn toggle(&mut self, group_id: GroupId) -> bool {
        if self.expanded.remove(&group_id) {
            false
        } else {
            self.expanded.insert(group_id);
            true
        }
    }

    pub fn expand(&mut self, group_id: GroupId) {
        self.expanded.insert(group_id);
    }

    pub fn expand_all(&mut self, sections: &[GroupSection]) {
        self.expanded
            .extend(sections.iter().map(|section| section.group_id));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

pub fn expansion_marker(expanded: bool) -> &'static str {
    if expanded {
        "▲"
    } else {
        "▼"
    }
}

/// Text rendering of the whole view. The loading line and the table are
/// drawn together, so an in-flight load shows the line above an empty table.
pub fn render_plain(
    state: &DisplayState,
    sections: &[GroupSection],
    expansion: &ExpansionState,
) -> String {
    let mut out = String::new();
    if state.is_loading() {
        let _ = writeln!(out, "{LOADING_LABEL}");
    }
    if let Some(failure) = state.failure() {
        let _ = writeln!(out, "Could not load items: {}", failure.message);
    }

    for section in sections {
        let expanded = expansion.is_expanded(section.group_id);
        let _ = writeln!(
            out,
            "{:<16}{:<16}{}",
            section.header_label(),
            section.count_label(),
            expansion_marker(expanded)
        );
        let _ = writeln!(out, "{}", "=".repeat(40));
        if !expanded {
            continue;
        }
        let [list_id, id, name] = COLUMN_HEADERS;
        let _ = writeln!(out, "  | {list_id:>8} | {id:>8} | {name:<16} |");
        for record in &section.records {
            let [list_id, id, name] = row_cells(record);
            let _ = writeln!(out, "  | {list_id:>8} | {id:>8} | {name:<16} |");
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
