use super::*;
use shared::domain::RecordId;

fn ids(records: &[Record]) -> Vec<i64> {
    records.iter().map(|record| record.id.0).collect()
}

#[test]
fn drops_null_name_and_orders_groups_ascending() {
    let input = vec![
        Record::new(1, 2, Some("item 20")),
        Record::new(2, 1, Some("item 5")),
        Record::new(3, 1, None),
    ];

    let output = transform(input, NamePolicy::default()).expect("transform");

    assert_eq!(
        output,
        vec![Record::new(2, 1, Some("item 5")), Record::new(1, 2, Some("item 20"))]
    );
}

#[test]
fn orders_within_group_by_numeric_suffix_with_leading_zeros() {
    let input = vec![
        Record::new(1, 1, Some("item 002")),
        Record::new(2, 1, Some("item 001")),
    ];

    let output = transform(input, NamePolicy::default()).expect("transform");

    assert_eq!(
        output,
        vec![Record::new(2, 1, Some("item 001")), Record::new(1, 1, Some("item 002"))]
    );
}

#[test]
fn suffix_ordering_is_numeric_not_lexicographic() {
    let input = vec![
        Record::new(1, 1, Some("item 100")),
        Record::new(2, 1, Some("item 9")),
        Record::new(3, 1, Some("item 28")),
    ];

    let output = transform(input, NamePolicy::default()).expect("transform");

    assert_eq!(ids(&output), vec![2, 3, 1]);
}

#[test]
fn drops_empty_and_whitespace_only_names() {
    let input = vec![
        Record::new(1, 1, Some("")),
        Record::new(2, 1, Some("   ")),
        Record::new(3, 1, Some("\t")),
        Record::new(4, 1, Some("item 4")),
    ];

    let output = transform(input, NamePolicy::default()).expect("transform");

    assert_eq!(ids(&output), vec![4]);
    assert!(output.iter().all(|record| record.display_name().is_some()));
}

#[test]
fn no_named_records_yields_empty_output() {
    let input = vec![Record::new(1, 1, None), Record::new(2, 3, Some(" "))];
    assert!(transform(input, NamePolicy::Abort).expect("transform").is_empty());
    assert!(transform(Vec::new(), NamePolicy::Abort).expect("transform").is_empty());
}

#[test]
fn groups_then_suffixes_are_ascending_across_mixed_input() {
    let input = vec![
        Record::new(684, 1, Some("item 684")),
        Record::new(276, 1, Some("item 276")),
        Record::new(808, 4, Some("item 808")),
        Record::new(680, 3, Some("item 680")),
        Record::new(534, 4, Some("item 534")),
        Record::new(906, 2, Some("item 906")),
        Record::new(735, 1, Some("item 735")),
        Record::new(907, 2, None),
    ];

    let output = transform(input, NamePolicy::default()).expect("transform");

    assert_eq!(ids(&output), vec![276, 684, 735, 906, 680, 534, 808]);
    for pair in output.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.group_id <= b.group_id);
        if a.group_id == b.group_id {
            assert!(record_sort_key(a).expect("key") <= record_sort_key(b).expect("key"));
        }
    }
}

#[test]
fn rerunning_on_same_input_is_identical() {
    let input = vec![
        Record::new(5, 3, Some("item 5")),
        Record::new(1, 3, Some("item 1")),
        Record::new(9, 1, Some("oops")),
        Record::new(2, 2, Some("item 2")),
    ];

    let first = transform(input.clone(), NamePolicy::SortLast).expect("first");
    let second = transform(input, NamePolicy::SortLast).expect("second");

    assert_eq!(first, second);
}

#[test]
fn equal_suffixes_keep_input_order() {
    let input = vec![
        Record::new(30, 1, Some("item 7")),
        Record::new(10, 1, Some("itam 7")),
        Record::new(20, 1, Some("item 07")),
    ];

    let output = transform(input, NamePolicy::default()).expect("transform");

    assert_eq!(ids(&output), vec![30, 10, 20]);
}

#[test]
fn exactly_five_character_name_is_malformed_not_a_panic() {
    assert_eq!(name_sort_key("item "), None);

    let input = vec![Record::new(1, 1, Some("item ")), Record::new(2, 1, Some("item 3"))];

    let sorted_last = transform(input.clone(), NamePolicy::SortLast).expect("sort last");
    assert_eq!(ids(&sorted_last), vec![2, 1]);

    let skipped = transform(input.clone(), NamePolicy::Skip).expect("skip");
    assert_eq!(ids(&skipped), vec![2]);

    let err = transform(input, NamePolicy::Abort).expect_err("abort");
    assert_eq!(err.record_id, RecordId(1));
    assert_eq!(err.name, "item ");
}

#[test]
fn short_and_non_numeric_names_are_malformed() {
    assert_eq!(name_sort_key("abc"), None);
    assert_eq!(name_sort_key("item x1"), None);
    assert_eq!(name_sort_key("item 1 "), None);
    assert_eq!(name_sort_key("item -4"), None);
    assert_eq!(name_sort_key("item +4"), None);
    assert_eq!(name_sort_key("item 99999999999999999999999"), None);
}

#[test]
fn prefix_is_counted_in_characters() {
    assert_eq!(name_sort_key("ítem 42"), Some(42));
    assert_eq!(name_sort_key("12345678"), Some(678));
}

#[test]
fn sort_last_places_malformed_after_every_numeric_in_group_only() {
    let input = vec![
        Record::new(1, 1, Some("broken")),
        Record::new(2, 1, Some("item 900")),
        Record::new(3, 2, Some("item 1")),
        Record::new(4, 1, Some("also broken")),
        Record::new(5, 1, Some("item 3")),
    ];

    let output = transform(input, NamePolicy::SortLast).expect("transform");

    assert_eq!(ids(&output), vec![5, 2, 1, 4, 3]);
}

#[test]
fn abort_reports_first_malformed_record_in_group_order() {
    let input = vec![
        Record::new(1, 9, Some("bad one")),
        Record::new(2, 3, Some("item 2")),
        Record::new(3, 3, Some("bad two")),
    ];

    let err = transform(input, NamePolicy::Abort).expect_err("abort");

    assert_eq!(err.record_id, RecordId(3));
}

#[test]
fn skip_drops_groups_left_empty() {
    let input = vec![Record::new(1, 4, Some("bad")), Record::new(2, 5, Some("item 2"))];

    let grouped = transform_grouped(input, NamePolicy::Skip).expect("transform");

    assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![GroupId(5)]);
}

#[test]
fn grouped_output_matches_flattened_output() {
    let input = vec![
        Record::new(1, 2, Some("item 1")),
        Record::new(2, 1, Some("item 2")),
        Record::new(3, 2, Some("item 0")),
    ];

    let grouped = transform_grouped(input.clone(), NamePolicy::default()).expect("grouped");
    let flat = transform(input, NamePolicy::default()).expect("flat");

    assert_eq!(ids(&grouped[&GroupId(2)]), vec![3, 1]);
    assert_eq!(flatten(grouped), flat);
}

#[test]
fn group_by_list_keeps_insertion_order_inside_buckets() {
    let groups = group_by_list(vec![
        Record::new(1, 2, Some("b")),
        Record::new(2, 1, Some("a")),
        Record::new(3, 2, Some("c")),
    ]);

    assert_eq!(ids(&groups[&GroupId(2)]), vec![1, 3]);
    assert_eq!(ids(&groups[&GroupId(1)]), vec![2]);
}

#[test]
fn parses_policy_names() {
    assert_eq!("sort-last".parse::<NamePolicy>(), Ok(NamePolicy::SortLast));
    assert_eq!("SORT_LAST".parse::<NamePolicy>(), Ok(NamePolicy::SortLast));
    assert_eq!(" skip ".parse::<NamePolicy>(), Ok(NamePolicy::Skip));
    assert_eq!("abort".parse::<NamePolicy>(), Ok(NamePolicy::Abort));
    assert!("retry".parse::<NamePolicy>().is_err());
    assert_eq!(NamePolicy::default().as_str(), "sort-last");
}
