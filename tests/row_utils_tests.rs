//! Row identity, keys map, membership toggle, and tree walk tests for
//! sticktable
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use serde_json::{json, Value};
use sticktable::error::SticktableError;
use sticktable::rows::{
    find_row_by_key, get_keys_map, get_row_identity, toggle_row_status, RowKey,
};
use sticktable::tree::{walk_tree, TreeNode};

// ============================================================================
// Row identity
// ============================================================================

#[test]
fn identity_by_plain_key() {
    let row = json!({"id": 7, "name": "alice"});
    let id = get_row_identity(&row, &RowKey::path("id")).unwrap();
    assert_eq!(id, json!(7));
}

#[test]
fn identity_by_dotted_path() {
    let row = json!({"meta": {"key": "r-42"}});
    let id = get_row_identity(&row, &RowKey::path("meta.key")).unwrap();
    assert_eq!(id, json!("r-42"));
}

#[test]
fn identity_by_extractor() {
    let row = json!({"a": 1, "b": 2});
    let key = RowKey::extract(|row| json!(format!("{}-{}", row["a"], row["b"])));
    let id = get_row_identity(&row, &key).unwrap();
    assert_eq!(id, json!("1-2"));
}

#[test]
fn null_row_is_an_error() {
    let err = get_row_identity(&Value::Null, &RowKey::path("id")).unwrap_err();
    assert!(matches!(err, SticktableError::MissingRow));
}

#[test]
fn missing_intermediate_segment_is_an_error() {
    let row = json!({"meta": {"key": "x"}});
    let err = get_row_identity(&row, &RowKey::path("missing.key")).unwrap_err();
    match err {
        SticktableError::RowKeyPath { path, segment } => {
            assert_eq!(path, "missing.key");
            assert_eq!(segment, "missing");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_final_segment_resolves_to_null() {
    let row = json!({"meta": {}});
    let id = get_row_identity(&row, &RowKey::path("meta.key")).unwrap();
    assert_eq!(id, Value::Null);

    let id = get_row_identity(&row, &RowKey::path("absent")).unwrap();
    assert_eq!(id, Value::Null);
}

// ============================================================================
// Keys map and lookup
// ============================================================================

#[test]
fn keys_map_indexes_rows_by_identity() {
    let rows = vec![
        json!({"id": "a", "n": 1}),
        json!({"id": "b", "n": 2}),
        json!({"id": "c", "n": 3}),
    ];
    let map = get_keys_map(&rows, &RowKey::path("id")).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["b"].index, 1);
    assert_eq!(map["b"].row, &rows[1]);
}

#[test]
fn duplicate_identities_keep_the_last_row() {
    let rows = vec![
        json!({"id": "a", "n": 1}),
        json!({"id": "a", "n": 2}),
    ];
    let map = get_keys_map(&rows, &RowKey::path("id")).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["a"].index, 1);
    assert_eq!(map["a"].row["n"], json!(2));
}

#[test]
fn numeric_identities_key_by_rendering() {
    let rows = vec![json!({"id": 10}), json!({"id": 20})];
    let map = get_keys_map(&rows, &RowKey::path("id")).unwrap();
    assert!(map.contains_key("10"));
    assert!(map.contains_key("20"));
}

#[test]
fn find_row_by_key_returns_first_match() {
    let rows = vec![
        json!({"id": "a", "n": 1}),
        json!({"id": "b", "n": 2}),
        json!({"id": "b", "n": 3}),
    ];
    let found = find_row_by_key(&rows, &RowKey::path("id"), "b").unwrap();
    assert_eq!(found["n"], json!(2));
    assert!(find_row_by_key(&rows, &RowKey::path("id"), "z").is_none());
}

// ============================================================================
// Membership toggle
// ============================================================================

#[test]
fn toggle_forced_and_flip_semantics() {
    let row_a = json!({"id": "a"});
    let row_b = json!({"id": "b"});
    let mut selection: Vec<Value> = Vec::new();

    // Forcing an absent row in adds it.
    assert!(toggle_row_status(&mut selection, &row_a, Some(true)));
    assert_eq!(selection.len(), 1);

    // Forcing a present row in is a no-op.
    assert!(!toggle_row_status(&mut selection, &row_a, Some(true)));
    assert_eq!(selection.len(), 1);

    // No flag always flips.
    assert!(toggle_row_status(&mut selection, &row_b, None));
    assert!(toggle_row_status(&mut selection, &row_b, None));
    assert_eq!(selection.len(), 1);

    // Forcing an absent row out is a no-op.
    assert!(!toggle_row_status(&mut selection, &row_b, Some(false)));

    // Forcing a present row out removes it.
    assert!(toggle_row_status(&mut selection, &row_a, Some(false)));
    assert!(selection.is_empty());
}

// ============================================================================
// Tree walk
// ============================================================================

#[test]
fn forest_with_lazy_and_expanded_nodes() {
    // One lazy node and one node with two children.
    let forest = vec![
        TreeNode::Lazy(json!({"id": "lazy"})),
        TreeNode::Branch(
            json!({"id": "parent"}),
            vec![
                TreeNode::Leaf(json!({"id": "child-1"})),
                TreeNode::Leaf(json!({"id": "child-2"})),
            ],
        ),
    ];

    let mut visits = Vec::new();
    walk_tree(&forest, |value, children, depth| {
        visits.push((
            value["id"].as_str().unwrap().to_string(),
            children.map(<[TreeNode<Value>]>::len),
            depth,
        ));
    });

    assert_eq!(
        visits,
        vec![
            ("lazy".to_string(), None, 0),
            ("parent".to_string(), Some(2), 0),
            ("child-1".to_string(), None, 1),
            ("child-2".to_string(), None, 1),
        ]
    );
}

#[test]
fn depth_grows_by_one_per_level() {
    let forest = vec![TreeNode::Branch(
        0,
        vec![TreeNode::Branch(1, vec![TreeNode::Leaf(2)])],
    )];
    walk_tree(&forest, |value, _, depth| {
        assert_eq!(*value, depth);
    });
}
