use kururi_core::{EntryError, EntryList, CLEARED_ENTRIES, DEFAULT_ENTRIES, MAX_ENTRIES};

fn build_list(labels: &[&str]) -> EntryList {
    EntryList::from_labels(labels.iter().copied())
}

fn full_list() -> EntryList {
    EntryList::from_labels((0..MAX_ENTRIES).map(|index| format!("Entry {index}")))
}

#[test]
fn new_list_holds_defaults() {
    let list = EntryList::new();
    assert_eq!(list.len(), DEFAULT_ENTRIES.len());
    assert_eq!(list.labels(), DEFAULT_ENTRIES);
}

#[test]
fn add_appends_trimmed_text() {
    let mut list = build_list(&["A", "B"]);
    list.add("  Carrot  ").unwrap();
    assert_eq!(list.labels(), ["A", "B", "Carrot"]);
}

#[test]
fn add_rejects_empty_and_whitespace() {
    let mut list = build_list(&["A", "B"]);
    assert_eq!(list.add(""), Err(EntryError::Empty));
    assert_eq!(list.add("   "), Err(EntryError::Empty));
    assert_eq!(list.labels(), ["A", "B"]);
    assert_eq!(EntryError::Empty.to_string(), "Please enter a valid entry");
}

#[test]
fn add_rejects_duplicate_after_trim() {
    let mut list = build_list(&["Yes", "No"]);
    assert_eq!(list.add(" Yes "), Err(EntryError::Duplicate));
    assert_eq!(list.labels(), ["Yes", "No"]);
    assert_eq!(
        EntryError::Duplicate.to_string(),
        "This entry already exists"
    );
}

#[test]
fn add_is_case_sensitive() {
    let mut list = build_list(&["Yes", "No"]);
    list.add("yes").unwrap();
    assert_eq!(list.len(), 3);
}

#[test]
fn add_rejects_at_capacity() {
    let mut list = full_list();
    assert_eq!(list.add("one more"), Err(EntryError::Full));
    assert_eq!(list.len(), MAX_ENTRIES);
    assert_eq!(EntryError::Full.to_string(), "Maximum 20 entries allowed");
}

#[test]
fn add_rejects_over_length() {
    let mut list = build_list(&["A", "B"]);
    let long = "x".repeat(51);
    assert_eq!(list.add(&long), Err(EntryError::TooLong));
    let exactly = "y".repeat(50);
    list.add(&exactly).unwrap();
    assert_eq!(list.len(), 3);
}

#[test]
fn remove_shifts_later_entries_down() {
    let mut list = build_list(&["A", "B", "C", "D"]);
    let removed = list.remove(1).unwrap();
    assert_eq!(removed, "B");
    assert_eq!(list.labels(), ["A", "C", "D"]);
}

#[test]
fn remove_refused_at_minimum_size() {
    let mut list = build_list(&["A", "B"]);
    assert_eq!(list.remove(0), Err(EntryError::AtMinimum));
    assert_eq!(list.labels(), ["A", "B"]);
}

#[test]
fn remove_rejects_bad_index() {
    let mut list = build_list(&["A", "B", "C"]);
    assert_eq!(
        list.remove(3),
        Err(EntryError::BadIndex { index: 3, len: 3 })
    );
    assert_eq!(list.len(), 3);
}

#[test]
fn update_replaces_in_place() {
    let mut list = build_list(&["A", "B", "C"]);
    list.update(1, "Banana").unwrap();
    assert_eq!(list.labels(), ["A", "Banana", "C"]);
}

#[test]
fn update_trims_surrounding_whitespace() {
    let mut list = build_list(&["A", "B"]);
    list.update(0, "  Plan A  ").unwrap();
    assert_eq!(list.get(0), Some("Plan A"));
}

#[test]
fn update_with_empty_text_is_noop() {
    let mut list = build_list(&["A", "B"]);
    list.update(0, "   ").unwrap();
    assert_eq!(list.labels(), ["A", "B"]);
}

#[test]
fn update_rejects_bad_index() {
    let mut list = build_list(&["A", "B"]);
    assert_eq!(
        list.update(5, "X"),
        Err(EntryError::BadIndex { index: 5, len: 2 })
    );
}

#[test]
fn clear_resets_to_two_options() {
    let mut list = full_list();
    list.clear();
    assert_eq!(list.labels(), CLEARED_ENTRIES);
    assert_eq!(list.len(), 2);
}

#[test]
fn shuffle_preserves_the_multiset() {
    let mut list = build_list(&["A", "B", "C", "D", "E", "F", "G"]);
    let mut before: Vec<String> = list.labels().to_vec();
    list.shuffle(0x5EED);
    let mut after: Vec<String> = list.labels().to_vec();
    assert_eq!(after.len(), before.len());
    before.sort();
    after.sort();
    assert_eq!(before, after);
}
