use crate::tests::helpers::from_reference;
use crate::{ParseOptions, StrSource, Value, items, kvitems};

fn collect_items(input: &str, prefix: &str) -> Vec<Value> {
    items(StrSource::new(input), prefix, ParseOptions::default())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn collect_kvitems(input: &str, prefix: &str) -> Vec<(String, Value)> {
    kvitems(StrSource::new(input), prefix, ParseOptions::default())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn items_in_document_order() {
    let input = r#"{"rows": [{"id": 1}, {"id": 2}, {"id": 3}], "total": 3}"#;
    let rows = collect_items(input, "rows.item");
    let ids: Vec<_> = rows
        .iter()
        .map(|r| r.as_object().unwrap()["id"].clone())
        .collect();
    assert_eq!(ids, vec![Value::from(1), Value::from(2), Value::from(3)]);
}

#[test]
fn items_matches_manual_event_walk() {
    let input = r#"{"a": [1, [2], {"b": null}], "c": [true]}"#;
    let found = collect_items(input, "a.item");
    let reference: serde_json::Value = serde_json::from_str(input).unwrap();
    let expected: Vec<Value> = reference["a"]
        .as_array()
        .unwrap()
        .iter()
        .map(from_reference)
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn items_scalars_at_prefix() {
    let input = r#"{"rows": [{"v": 1}, {"v": "x"}, {"v": null}]}"#;
    assert_eq!(
        collect_items(input, "rows.item.v"),
        vec![Value::from(1), Value::from("x"), Value::Null]
    );
}

#[test]
fn items_whole_document() {
    let input = r#"{"a": 1}"#;
    let all = collect_items(input, "");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].as_object().unwrap()["a"], Value::from(1));
}

#[test]
fn items_empty_match_set() {
    assert_eq!(collect_items(r#"{"a": 1}"#, "nope"), Vec::<Value>::new());
}

#[test]
fn items_sibling_structures_not_retained() {
    // A sibling subtree with the same shape but a different prefix must not
    // leak into the results.
    let input = r#"{"keep": [1], "skip": [2]}"#;
    assert_eq!(collect_items(input, "keep.item"), vec![Value::from(1)]);
}

#[test]
fn duplicate_key_asymmetry() {
    // The builder collapses duplicates last-write-wins; kvitems preserves
    // every occurrence.
    let input = r#"{"a":1,"a":2}"#;

    let whole = collect_items(input, "");
    assert_eq!(whole.len(), 1);
    let map = whole[0].as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["a"], Value::from(2));

    assert_eq!(
        collect_kvitems(input, ""),
        vec![
            ("a".to_string(), Value::from(1)),
            ("a".to_string(), Value::from(2)),
        ]
    );
}

#[test]
fn kvitems_at_nested_prefix() {
    let input = r#"{"meta": {"name": "x", "tags": ["a", "b"], "extra": {"deep": 1}}}"#;
    let pairs = collect_kvitems(input, "meta");
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], ("name".to_string(), Value::from("x")));
    assert_eq!(
        pairs[1],
        (
            "tags".to_string(),
            Value::Array(vec![Value::from("a"), Value::from("b")])
        )
    );
    assert_eq!(pairs[2].0, "extra");
    assert_eq!(pairs[2].1.as_object().unwrap()["deep"], Value::from(1));
}

#[test]
fn kvitems_over_repeated_objects_in_array() {
    // The prefix matches each element object in turn; pairs stream out in
    // document order across elements.
    let input = r#"[{"k": 1}, {"k": 2, "j": 3}]"#;
    assert_eq!(
        collect_kvitems(input, "item"),
        vec![
            ("k".to_string(), Value::from(1)),
            ("k".to_string(), Value::from(2)),
            ("j".to_string(), Value::from(3)),
        ]
    );
}

#[test]
fn items_multiple_roots() {
    let options = ParseOptions {
        multiple_values: true,
        ..Default::default()
    };
    let found: Vec<Value> = items(StrSource::new(r#"{"a":1}{"b":2}"#), "", options)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].as_object().unwrap()["a"], Value::from(1));
    assert_eq!(found[1].as_object().unwrap()["b"], Value::from(2));
}
