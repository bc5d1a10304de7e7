//! Unit tests for TreeState.
//!
//! These tests exercise the public path access API across module
//! boundaries: reads, copy-on-write writes, subtree grafting, bulk
//! updates and the derived views.

use rstest::{fixture, rstest};
use std::collections::HashMap;
use treestate::TreeError;
use treestate::persistent::{PathAccess, TreeState};

// =============================================================================
// Fixtures
// =============================================================================

#[fixture]
fn nested_state() -> TreeState<String> {
    let mut key_values = HashMap::new();
    key_values.insert("a.b.c", "1".to_string());
    key_values.insert("a.b.c.d", "2".to_string());
    key_values.insert("a.b.c.d.e", "3".to_string());
    TreeState::new().update_values(key_values)
}

// =============================================================================
// Bulk updates
// =============================================================================

#[rstest]
#[case("a.b.c", "1")]
#[case("a.b.c.d", "2")]
#[case("a.b.c.d.e", "3")]
fn test_update_values_stores_every_entry(
    nested_state: TreeState<String>,
    #[case] path: &str,
    #[case] expected: &str,
) {
    assert_eq!(nested_state.value_at(path).unwrap(), expected);
}

#[rstest]
fn test_nested_values_set_nesting_level(nested_state: TreeState<String>) {
    assert_eq!(nested_state.nesting_level(), 5);
}

#[rstest]
fn test_remove_values_in_bulk(nested_state: TreeState<String>) {
    let removed = nested_state.remove_values(["a.b.c", "a.b.c.d.e"]);

    assert!(removed.value_at("a.b.c").is_err());
    assert!(removed.value_at("a.b.c.d.e").is_err());
    assert_eq!(removed.value_at("a.b.c.d").unwrap(), "2");
    assert_eq!(removed.nesting_level(), 4);
}

// =============================================================================
// Round trip and deletion
// =============================================================================

#[rstest]
#[case("a")]
#[case("a.b")]
#[case("a.b.c")]
#[case("long_segment.with-dashes.and spaces")]
fn test_round_trip(#[case] path: &str) {
    let state = TreeState::new().update_value(path, 42);
    assert_eq!(state.value_at(path), Ok(&42));
}

#[rstest]
fn test_deletion_of_only_content_leaves_empty_tree() {
    let state = TreeState::new().update_value("a.b.c", 1);
    let removed = state.remove_value("a.b.c");

    assert!(removed.value_at("a.b.c").is_err());
    assert!(removed.is_empty());
    assert_eq!(removed.nesting_level(), 1);
}

#[rstest]
fn test_removal_result_must_be_used_to_observe_removal() {
    let state = TreeState::new().update_value("a.b", 1);
    let removed = state.remove_value("a.b");

    assert_eq!(state.value_at("a.b"), Ok(&1));
    assert!(removed.value_at("a.b").is_err());
}

#[rstest]
fn test_none_deletes_like_remove() {
    let state = TreeState::new()
        .update_value("a.b", 1)
        .update_value("a.c", 2);

    assert_eq!(state.update_value("a.b", None), state.remove_value("a.b"));
}

// =============================================================================
// Degenerate paths
// =============================================================================

#[rstest]
#[case("")]
#[case(".")]
#[case("..")]
#[case(".a")]
#[case("a.")]
#[case("a..b")]
fn test_degenerate_write_is_noop(#[case] path: &str) {
    let state = TreeState::new().update_value(path, 1);
    assert!(state.is_empty());
    assert_eq!(state.value_at(path), Err(TreeError::degenerate_path(path)));
}

#[rstest]
fn test_degenerate_path_never_creates_partial_children() {
    let state = TreeState::new().update_value("a.b..c", 1);
    assert!(state.child_at("a").is_err());
    assert!(state.child_at("a.b").is_err());
}

// =============================================================================
// Immutability
// =============================================================================

#[rstest]
fn test_write_leaves_receiver_unchanged() {
    let first = TreeState::new().update_value("a.b", 1);
    let second = first.update_value("a.b", 2);

    assert_eq!(first.value_at("a.b"), Ok(&1));
    assert_eq!(second.value_at("a.b"), Ok(&2));
}

#[rstest]
fn test_source_collection_mutation_does_not_leak() {
    let mut entries = vec![("a.b".to_string(), 1), ("c".to_string(), 2)];
    let state: TreeState<i32> = entries.clone().into_iter().collect();

    entries[0].1 = 100;
    entries.push(("d".to_string(), 3));

    assert_eq!(state.value_at("a.b"), Ok(&1));
    assert!(state.value_at("d").is_err());
}

// =============================================================================
// Sibling independence and subtree grafting
// =============================================================================

#[rstest]
fn test_value_and_deeper_value_coexist() {
    let state = TreeState::new()
        .update_value("a.b.c", 1)
        .update_value("a.b.c.d", 2);

    assert_eq!(state.value_at("a.b.c"), Ok(&1));
    assert_eq!(state.value_at("a.b.c.d"), Ok(&2));
}

#[rstest]
fn test_update_child_grafts_and_isolates() {
    let first: TreeState<i32> = TreeState::new();
    let second = TreeState::new().update_value("c.d", 1);
    let third = first.update_child("a.b", second.clone());

    assert_eq!(third.value_at("a.b.c.d"), Ok(&1));

    let second = second.update_value("c.d", 2).update_value("c.e", 3);
    assert_eq!(second.value_at("c.d"), Ok(&2));
    assert_eq!(third.value_at("a.b.c.d"), Ok(&1));
    assert!(third.value_at("a.b.c.e").is_err());
    assert!(first.is_empty());
}

#[rstest]
fn test_child_at_missing_segment() {
    let state = TreeState::new().update_value("a.b.c", 1);
    assert_eq!(
        state.child_at("a.x.c"),
        Err(TreeError::child_not_found("a.x.c", "x"))
    );
}

// =============================================================================
// Nesting level and flatten
// =============================================================================

#[rstest]
#[case(&[], 1)]
#[case(&["a"], 1)]
#[case(&["a.b"], 2)]
#[case(&["a.b.c"], 3)]
#[case(&["a.b.c", "x"], 3)]
#[case(&["a.b", "x.y.z.w"], 4)]
fn test_nesting_level(#[case] paths: &[&str], #[case] expected: usize) {
    let state: TreeState<i32> = paths.iter().map(|path| (*path, 0)).collect();
    assert_eq!(state.nesting_level(), expected);
}

#[rstest]
fn test_flatten_reproduces_entries() {
    let entries = HashMap::from([
        ("a.b".to_string(), 1),
        ("a.c.d".to_string(), 2),
        ("e".to_string(), 3),
    ]);
    let state: TreeState<i32> = entries.clone().into_iter().collect();

    assert_eq!(state.flatten(), entries);
}

#[rstest]
fn test_flatten_uses_tree_separator() {
    let state = TreeState::with_separator('/')
        .update_value("a/b", 1)
        .update_value("a.b", 2);

    assert_eq!(
        state.flatten(),
        HashMap::from([("a/b".to_string(), 1), ("a.b".to_string(), 2)])
    );
}

// =============================================================================
// Clear
// =============================================================================

#[rstest]
fn test_clear_returns_empty_tree(nested_state: TreeState<String>) {
    let cleared = nested_state.clear();

    assert!(cleared.is_empty());
    assert_eq!(cleared, TreeState::new());
    assert!(!nested_state.is_empty());
}

// =============================================================================
// Result chaining
// =============================================================================

#[rstest]
fn test_lookup_results_chain() {
    let state = TreeState::new()
        .update_value("limits.max", 10)
        .update_value("limits.min", 2);

    let span = state
        .value_at("limits.max")
        .and_then(|max| state.value_at("limits.min").map(|min| max - min));
    assert_eq!(span, Ok(8));

    let fallback = state.value_at("limits.avg").copied().unwrap_or(5);
    assert_eq!(fallback, 5);
}
