use super::*;

fn options() -> SelectionStore {
    SelectionStore::new(["One", "Two", "Three"])
}

fn selected(store: &SelectionStore) -> Vec<&str> {
    store
        .selected_labels()
        .into_iter()
        .map(OptionLabel::as_str)
        .collect()
}

#[test]
fn new_store_starts_with_nothing_selected() {
    let store = options();
    assert!(store.selected_labels().is_empty());
    assert!(store.none_selected());
    assert!(!store.all_selected());
    assert_eq!(store.len(), 3);
    assert!(store.state().iter().all(|(_, selected)| !selected));
}

#[test]
fn empty_store_is_legal() {
    let mut store = SelectionStore::new(Vec::<String>::new());
    assert!(store.is_empty());
    store.select_all();
    assert!(store.selected_labels().is_empty());
    assert!(store.toggle("One").is_err());
}

#[test]
fn toggle_flips_only_the_named_label() {
    let mut store = options();
    store.toggle("Two").expect("toggle");
    assert_eq!(selected(&store), ["Two"]);
    assert_eq!(store.is_selected("One"), Ok(false));
    assert_eq!(store.is_selected("Two"), Ok(true));
    assert_eq!(store.is_selected("Three"), Ok(false));
}

#[test]
fn toggle_twice_restores_previous_state() {
    let mut store = options();
    store.toggle("One").expect("toggle");
    store.toggle("Three").expect("toggle");
    let before = store.state().clone();

    for label in ["One", "Two", "Three"] {
        store.toggle(label).expect("first toggle");
        store.toggle(label).expect("second toggle");
        assert_eq!(store.state(), &before, "label {label}");
    }
}

#[test]
fn set_all_overrides_every_flag() {
    let mut store = options();
    store.toggle("Two").expect("toggle");

    store.set_all(true);
    assert_eq!(selected(&store), ["One", "Two", "Three"]);
    assert!(store.all_selected());

    store.set_all(false);
    assert!(store.selected_labels().is_empty());
    assert!(store.none_selected());
}

#[test]
fn select_and_deselect_all_delegate_to_set_all() {
    let mut store = options();
    let expected = store.state().with_all(true);
    assert_eq!(store.select_all(), &expected);
    assert_eq!(store.deselect_all().selected().count(), 0);
}

#[test]
fn unknown_label_is_rejected_without_touching_state() {
    let mut store = options();
    store.toggle("One").expect("toggle");
    let before = store.state().clone();

    let err = store.toggle("Four").expect_err("unknown label");
    assert_eq!(err, SelectionError::UnknownLabel("Four".into()));
    assert_eq!(store.state(), &before);
    assert_eq!(selected(&store), ["One"]);
}

#[test]
fn labels_are_case_sensitive() {
    let mut store = options();
    assert!(store.toggle("one").is_err());
    assert!(matches!(
        store.is_selected("TWO"),
        Err(SelectionError::UnknownLabel(_))
    ));
}

#[test]
fn key_set_never_changes_across_mutations() {
    let mut store = options();
    let keys: Vec<OptionLabel> = store.labels().cloned().collect();

    store.toggle("Two").expect("toggle");
    store.select_all();
    let _ = store.toggle("Missing");
    store.toggle("One").expect("toggle");
    store.deselect_all();

    let after: Vec<OptionLabel> = store.state().keys().cloned().collect();
    assert_eq!(after, keys);
}

#[test]
fn selected_labels_follow_configured_order() {
    let mut store = SelectionStore::new(["Gamma", "Alpha", "Beta"]);
    store.toggle("Beta").expect("toggle");
    store.toggle("Gamma").expect("toggle");
    assert_eq!(selected(&store), ["Gamma", "Beta"]);
}

#[test]
fn duplicate_labels_collapse_to_first_position() {
    let mut store = SelectionStore::new(["One", "Two", "One", "Three"]);
    assert_eq!(store.len(), 3);
    let labels: Vec<&str> = store.labels().map(OptionLabel::as_str).collect();
    assert_eq!(labels, ["One", "Two", "Three"]);

    store.toggle("One").expect("toggle");
    assert_eq!(selected(&store), ["One"]);
}

#[test]
fn pure_updates_leave_the_source_snapshot_alone() {
    let store = options();
    let original = store.state().clone();
    let flipped = original.toggled("Two").expect("toggle");

    assert_eq!(original.get("Two"), Some(false));
    assert_eq!(flipped.get("Two"), Some(true));
    assert_eq!(original.with_all(true).selected().count(), 3);
    assert_eq!(original, *store.state());
}

#[test]
fn checkboxes_mirror_the_state() {
    let mut store = options();
    store.toggle("Three").expect("toggle");
    let views = store.state().checkboxes();
    assert_eq!(views.len(), 3);
    assert_eq!(views[2].label, "Three");
    assert!(views[2].is_selected);
    assert!(!views[0].is_selected);
}

#[test]
fn state_serializes_in_configured_order() {
    let mut store = SelectionStore::new(["B", "A"]);
    store.toggle("A").expect("toggle");
    let json = serde_json::to_string(store.state()).expect("serialize");
    assert_eq!(json, r#"{"entries":[["B",false],["A",true]]}"#);
}
