use super::*;
use crate::controller::{FailureKind, FailureReason, LoadPhase};

fn loaded(records: Vec<Record>) -> DisplayState {
    DisplayState {
        phase: LoadPhase::Loaded,
        records,
    }
}

#[test]
fn sections_follow_first_appearance_and_merge_repeats() {
    let records = vec![
        Record::new(1, 3, Some("item 1")),
        Record::new(2, 1, Some("item 2")),
        Record::new(3, 3, Some("item 3")),
    ];

    let sections = group_sections(&records);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].group_id, GroupId(3));
    assert_eq!(sections[0].records.len(), 2);
    assert_eq!(sections[1].group_id, GroupId(1));
    assert_eq!(sections[0].header_label(), "List ID: 3");
    assert_eq!(sections[0].count_label(), "Count: 2");
}

#[test]
fn no_records_means_no_sections() {
    assert!(group_sections(&[]).is_empty());
}

#[test]
fn groups_start_collapsed_and_toggle() {
    let mut expansion = ExpansionState::default();

    assert!(!expansion.is_expanded(GroupId(1)));
    assert!(expansion.toggle(GroupId(1)));
    assert!(expansion.is_expanded(GroupId(1)));
    assert!(!expansion.is_expanded(GroupId(2)));
    assert!(!expansion.toggle(GroupId(1)));
    assert!(!expansion.is_expanded(GroupId(1)));
}

#[test]
fn expand_all_and_collapse_all() {
    let sections = group_sections(&[
        Record::new(1, 1, Some("item 1")),
        Record::new(2, 2, Some("item 2")),
    ]);
    let mut expansion = ExpansionState::default();

    expansion.expand_all(&sections);
    assert!(expansion.is_expanded(GroupId(1)) && expansion.is_expanded(GroupId(2)));

    expansion.collapse_all();
    assert_eq!(expansion, ExpansionState::default());
}

#[test]
fn loading_state_renders_indicator_above_empty_table() {
    let text = render_plain(&DisplayState::default(), &[], &ExpansionState::default());
    assert_eq!(text, format!("{LOADING_LABEL}\n"));
}

#[test]
fn collapsed_groups_render_headers_only() {
    let state = loaded(vec![
        Record::new(2, 1, Some("item 5")),
        Record::new(1, 2, Some("item 20")),
    ]);
    let sections = group_sections(&state.records);

    let text = render_plain(&state, &sections, &ExpansionState::default());

    assert!(!text.contains(LOADING_LABEL));
    assert!(text.contains("List ID: 1"));
    assert!(text.contains("List ID: 2"));
    assert!(!text.contains("item 5"));
    assert!(text.find("List ID: 1") < text.find("List ID: 2"));
}

#[test]
fn expanded_group_renders_column_headers_and_rows() {
    let state = loaded(vec![
        Record::new(2, 1, Some("item 5")),
        Record::new(1, 2, Some("item 20")),
    ]);
    let sections = group_sections(&state.records);
    let mut expansion = ExpansionState::default();
    expansion.expand(GroupId(2));

    let text = render_plain(&state, &sections, &expansion);

    assert!(text.contains("listId"));
    assert!(text.contains("item 20"));
    assert!(!text.contains("item 5"));
    assert_eq!(
        row_cells(&state.records[1]),
        ["2".to_string(), "1".to_string(), "item 20".to_string()]
    );
}

#[test]
fn failure_renders_notice_without_loading_line() {
    let state = DisplayState {
        phase: LoadPhase::Failed(FailureReason {
            kind: FailureKind::Transport,
            message: "connection refused".to_string(),
        }),
        records: Vec::new(),
    };

    let text = render_plain(&state, &[], &ExpansionState::default());

    assert_eq!(text, "Could not load items: connection refused\n");
}
