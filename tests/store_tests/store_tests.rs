//! Tests for Store
//!
//! These tests verify:
//! - Open, rebind and lifecycle state
//! - Append and insert, including duplicate rejection
//! - next_id, list_all, records, search, get
//! - delete_by on identifier and non-identifier fields
//! - clear and copy_out
//! - Command execution

use std::fs;
use std::path::PathBuf;

use rosterdb::config::{Config, SyncStrategy};
use rosterdb::protocol::{Command, Outcome};
use rosterdb::store::{Store, StoreState};
use rosterdb::{Field, RecordDraft, RosterError, ValidationError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .path(temp_dir.path().join("database.txt"))
        .sync_strategy(SyncStrategy::EveryWrite) // Sync every write for test reliability
        .build();
    let store = Store::open(config).unwrap();
    (temp_dir, store)
}

fn setup_temp_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("database.txt");
    (temp_dir, path)
}

fn add(store: &mut Store, identifier: &str, name: &str, age: &str) {
    store
        .insert(&RecordDraft::new(identifier, name, age, "01.01.1990"))
        .unwrap();
}

/// Every indexed offset points at the line carrying that identifier, and
/// every line in the file is indexed exactly once
fn assert_index_consistent(store: &Store) {
    let bytes = fs::read(store.path()).unwrap();

    for key in store.identifiers() {
        let offset = store.offset_of(key.clone()).unwrap() as usize;
        let rest = &bytes[offset..];
        let end = rest.iter().position(|b| *b == b'\n').unwrap_or(rest.len());
        let line = std::str::from_utf8(&rest[..end]).unwrap();
        assert_eq!(line.split(',').nth(1), Some(key.as_str()), "offset {}", offset);
    }

    let lines = store.list_all().unwrap();
    assert_eq!(lines.len(), store.len());
    for line in &lines {
        let identifier = line.split(',').nth(1).unwrap();
        assert!(store.identifier_exists(identifier));
    }
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_creates_file() {
    let (_temp, path) = setup_temp_path();

    let store = Store::open_path(&path).unwrap();

    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.state().unwrap(), StoreState::Empty);
    assert!(store.is_empty());
}

#[test]
fn test_open_existing_file_builds_index() {
    let (_temp, path) = setup_temp_path();
    fs::write(
        &path,
        "1,10,Alice,30,01.01.1990\n2,20,Bob,25,02.02.1992\n",
    )
    .unwrap();

    let store = Store::open_path(&path).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.offset_of("10"), Some(0));
    assert_eq!(store.offset_of("20"), Some(25));
    assert_eq!(store.state().unwrap(), StoreState::Populated);
}

#[test]
fn test_open_in_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing_dir").join("x.txt");

    assert!(matches!(Store::open_path(&path), Err(RosterError::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_open_rejects_empty_path() {
    let config = Config::builder().path("").build();

    assert!(matches!(Store::open(config), Err(RosterError::Config(_))));
}

#[test]
fn test_open_corrupt_file_fails() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, "1,10,Alice,30,01.01.1990\nno-commas-here\n").unwrap();

    assert!(matches!(
        Store::open_path(&path),
        Err(RosterError::CorruptRecord { offset: 25, .. })
    ));
}

#[test]
fn test_open_file_with_duplicate_identifiers_fails() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, "1,10,Alice,30,01.01.1990\n2,10,Bob,25,02.02.1992\n").unwrap();

    // Reported at the second occurrence
    assert!(matches!(
        Store::open_path(&path),
        Err(RosterError::CorruptRecord { offset: 25, .. })
    ));
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.path, PathBuf::from("database.txt"));
    assert_eq!(config.sync_strategy, SyncStrategy::OnClose);
}

// =============================================================================
// Rebind Tests
// =============================================================================

#[test]
fn test_open_file_switches_binding() {
    let (temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");

    let other = temp.path().join("other.txt");
    fs::write(&other, "1,77,Zed,40,03.03.1983\n").unwrap();
    store.open_file(&other).unwrap();

    assert_eq!(store.path(), other.as_path());
    assert_eq!(store.config().path, other);
    assert!(store.identifier_exists("77"));
    assert!(!store.identifier_exists("1"));
    assert_eq!(store.list_all().unwrap(), vec!["1,77,Zed,40,03.03.1983"]);
}

#[test]
fn test_open_file_creates_missing_file() {
    let (temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");

    let fresh = temp.path().join("fresh.txt");
    store.open_file(&fresh).unwrap();

    assert!(fresh.exists());
    assert!(store.is_empty());
    assert_eq!(store.state().unwrap(), StoreState::Empty);
}

#[test]
fn test_failed_open_file_keeps_binding() {
    let (temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    let original = store.path().to_path_buf();

    let corrupt = temp.path().join("corrupt.txt");
    fs::write(&corrupt, "garbage\n").unwrap();

    assert!(store.open_file(&corrupt).is_err());
    assert_eq!(store.path(), original.as_path());
    assert!(store.identifier_exists("1"));
}

#[test]
fn test_open_file_on_directory_is_io_error() {
    let (temp, mut store) = setup_temp_store();

    let result = store.open_file(temp.path());

    assert!(matches!(result, Err(RosterError::Io(_))));
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_indexes_pre_write_offset() {
    let (_temp, mut store) = setup_temp_store();

    let first = store.append("10", "1,10,Alice,30,01.01.1990").unwrap();
    let second = store.append(20u64, "2,20,Bob,25,02.02.1992").unwrap();

    assert_eq!(first, 0);
    assert_eq!(second, 25);
    assert_eq!(store.offset_of("10"), Some(0));
    assert_eq!(store.offset_of(20u64), Some(25));
    assert_index_consistent(&store);
}

#[test]
fn test_append_duplicate_leaves_file_unchanged() {
    let (_temp, mut store) = setup_temp_store();
    store.append("10", "1,10,Alice,30,01.01.1990").unwrap();
    let before = fs::read(store.path()).unwrap();

    match store.append("10", "2,10,Bob,25,02.02.1992") {
        Err(RosterError::DuplicateIdentifier(identifier)) => assert_eq!(identifier, "10"),
        other => panic!("Expected DuplicateIdentifier, got {:?}", other),
    }

    assert_eq!(fs::read(store.path()).unwrap(), before);
    assert_eq!(store.offset_of("10"), Some(0));
}

#[test]
fn test_append_does_not_validate_line() {
    let (_temp, mut store) = setup_temp_store();

    store.append("5", "whatever the caller wrote").unwrap();

    assert_eq!(store.list_all().unwrap(), vec!["whatever the caller wrote"]);
    assert!(store.identifier_exists("5"));
}

#[test]
fn test_append_moves_state_to_populated() {
    let (_temp, mut store) = setup_temp_store();
    assert_eq!(store.state().unwrap(), StoreState::Empty);

    store.append("10", "1,10,Alice,30,01.01.1990").unwrap();

    assert_eq!(store.state().unwrap(), StoreState::Populated);
}

// =============================================================================
// Insert Tests
// =============================================================================

#[test]
fn test_insert_assigns_increasing_ids() {
    let (_temp, mut store) = setup_temp_store();

    let first = store
        .insert(&RecordDraft::new("42", "Alice", "30", "01.01.1990"))
        .unwrap();
    let second = store
        .insert(&RecordDraft::new("7", "Bob", "25", "02.02.1992"))
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(
        store.list_all().unwrap(),
        vec!["1,42,Alice,30,01.01.1990", "2,7,Bob,25,02.02.1992"]
    );
}

#[test]
fn test_insert_continues_after_highest_id() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, "9,1,Alice,30,01.01.1990\n3,2,Bob,25,02.02.1992\n").unwrap();
    let mut store = Store::open_path(&path).unwrap();

    let record = store
        .insert(&RecordDraft::new("3", "Carol", "40", "03.03.1983"))
        .unwrap();

    assert_eq!(record.id, 10);
}

#[test]
fn test_insert_rejects_invalid_draft() {
    let (_temp, mut store) = setup_temp_store();

    let result = store.insert(&RecordDraft::new("42", "", "30", "01.01.1990"));

    assert!(matches!(
        result,
        Err(RosterError::Validation(ValidationError::EmptyName))
    ));
    assert_eq!(fs::metadata(store.path()).unwrap().len(), 0);
}

#[test]
fn test_insert_rejects_duplicate_identifier() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "42", "Alice", "30");

    let result = store.insert(&RecordDraft::new(" 42", "Bob", "25", "02.02.1992"));

    assert!(matches!(result, Err(RosterError::DuplicateIdentifier(_))));
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_next_id_on_empty_store() {
    let (_temp, store) = setup_temp_store();
    assert_eq!(store.next_id().unwrap(), 1);
}

#[test]
fn test_next_id_with_corrupt_id() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, "x,10,Alice,30,01.01.1990\n").unwrap();
    let store = Store::open_path(&path).unwrap();

    assert!(matches!(
        store.next_id(),
        Err(RosterError::CorruptRecord { offset: 0, .. })
    ));
}

#[test]
fn test_next_id_with_exhausted_id_space() {
    let (_temp, path) = setup_temp_path();
    fs::write(
        &path,
        "1,1,Alice,30,01.01.1990\n18446744073709551615,2,Bob,25,02.02.1992\n",
    )
    .unwrap();
    let mut store = Store::open_path(&path).unwrap();

    assert!(matches!(
        store.next_id(),
        Err(RosterError::CorruptRecord { offset: 24, .. })
    ));

    // insert goes through next_id and must fail without touching the file
    let before = fs::read(&path).unwrap();
    assert!(matches!(
        store.insert(&RecordDraft::new("3", "Carol", "40", "03.03.1983")),
        Err(RosterError::CorruptRecord { .. })
    ));
    assert_eq!(fs::read(&path).unwrap(), before);
    assert!(!store.identifier_exists("3"));
}

#[test]
fn test_identifier_exists_accepts_integers_and_text() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "42", "Alice", "30");

    assert!(store.identifier_exists(42u64));
    assert!(store.identifier_exists("42"));
    assert!(store.identifier_exists("42".to_string()));
    assert!(!store.identifier_exists("042"));
    assert!(!store.identifier_exists(43u64));
}

#[test]
fn test_list_all_tolerates_missing_final_newline() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, "1,10,Alice,30,01.01.1990\n2,20,Bob,25,02.02.1992").unwrap();
    let store = Store::open_path(&path).unwrap();

    assert_eq!(
        store.list_all().unwrap(),
        vec!["1,10,Alice,30,01.01.1990", "2,20,Bob,25,02.02.1992"]
    );
}

#[test]
fn test_records_are_parsed() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "42", "Alice", "30");
    add(&mut store, "7", "Bob", "25");

    let records = store.records().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].identifier, 42);
    assert_eq!(records[1].name, "Bob");
    assert_eq!(records[1].id, 2);
}

#[test]
fn test_records_with_short_line_is_corrupt() {
    let (_temp, mut store) = setup_temp_store();
    store.append("1", "1,1,OnlyThree").unwrap();

    assert!(matches!(
        store.records(),
        Err(RosterError::CorruptRecord { .. })
    ));
}

#[test]
fn test_get_reads_line_at_offset() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "10", "Alice", "30");
    add(&mut store, "20", "Bob", "25");

    assert_eq!(
        store.get("20").unwrap(),
        Some("2,20,Bob,25,01.01.1990".to_string())
    );
    assert_eq!(store.get(10u64).unwrap(), Some("1,10,Alice,30,01.01.1990".to_string()));
    assert_eq!(store.get("30").unwrap(), None);
}

#[test]
fn test_get_detects_file_changed_underneath() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "10", "Alice", "30");
    add(&mut store, "20", "Bob", "25");

    // Rewrite the file behind the store's back
    fs::write(store.path(), "2,20,Bob,25,01.01.1990\n").unwrap();

    assert!(matches!(
        store.get("10"),
        Err(RosterError::CorruptRecord { .. })
    ));
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_each_field() {
    let (_temp, mut store) = setup_temp_store();
    store.append("10", "1,10,Alice,30,01.01.1990").unwrap();
    store.append("20", "2,20,Bob,25,02.02.1992").unwrap();

    assert_eq!(store.search("ID", "2").unwrap(), vec!["2,20,Bob,25,02.02.1992"]);
    assert_eq!(store.search("identifier", "10").unwrap(), vec!["1,10,Alice,30,01.01.1990"]);
    assert_eq!(store.search("Name", "bob").unwrap(), vec!["2,20,Bob,25,02.02.1992"]);
    assert_eq!(store.search("AGE", "30").unwrap(), vec!["1,10,Alice,30,01.01.1990"]);
    assert_eq!(
        store.search("date of birth", "02.02.1992").unwrap(),
        vec!["2,20,Bob,25,02.02.1992"]
    );
}

#[test]
fn test_search_returns_all_matches_in_file_order() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Eve", "20");
    add(&mut store, "2", "Dan", "21");
    add(&mut store, "3", "EVE", "22");

    let results = store.search_field(Field::Name, "eve").unwrap();

    assert_eq!(
        results,
        vec!["1,1,Eve,20,01.01.1990", "3,3,EVE,22,01.01.1990"]
    );
}

#[test]
fn test_search_numeric_fields_compare_lexically() {
    let (_temp, mut store) = setup_temp_store();
    store.append("7", "1,7,Alice,30,01.01.1990").unwrap();

    assert!(store.search("identifier", "07").unwrap().is_empty());
    assert_eq!(store.search("identifier", "7").unwrap().len(), 1);
}

#[test]
fn test_search_unknown_field() {
    let (_temp, store) = setup_temp_store();

    assert!(matches!(
        store.search("email", "x"),
        Err(RosterError::UnknownField(_))
    ));
}

#[test]
fn test_search_short_line_is_corrupt() {
    let (_temp, mut store) = setup_temp_store();
    store.append("1", "1,1,Alice").unwrap();

    assert!(matches!(
        store.search("age", "30"),
        Err(RosterError::CorruptRecord { offset: 0, .. })
    ));
    // Fields that are present are still searchable
    assert_eq!(store.search("name", "alice").unwrap(), vec!["1,1,Alice"]);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_by_identifier_relocates_survivors() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "10", "Alice", "30");
    add(&mut store, "20", "Bob", "25");
    add(&mut store, "30", "Carol", "40");
    let offset_30_before = store.offset_of("30").unwrap();

    let removed = store.delete_by("identifier", "20").unwrap();

    assert_eq!(removed, 1);
    assert!(!store.identifier_exists("20"));
    assert!(store.offset_of("30").unwrap() < offset_30_before);
    assert_index_consistent(&store);
}

#[test]
fn test_delete_by_name_rebuilds_index() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "10", "Alice", "30");
    add(&mut store, "20", "Bob", "25");
    add(&mut store, "30", "Alice", "40");

    let removed = store.delete_by("name", "ALICE").unwrap();

    assert_eq!(removed, 2);
    assert_eq!(store.offset_of("20"), Some(0));
    assert_eq!(store.len(), 1);
    assert_index_consistent(&store);
}

#[test]
fn test_delete_by_age_removes_all_matches() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    add(&mut store, "2", "Bob", "30");
    add(&mut store, "3", "Carol", "31");

    assert_eq!(store.delete_where(Field::Age, "30").unwrap(), 2);
    assert_eq!(store.list_all().unwrap(), vec!["3,3,Carol,31,01.01.1990"]);
    assert_index_consistent(&store);
}

#[test]
fn test_delete_no_match_keeps_everything() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    let before = store.list_all().unwrap();

    assert_eq!(store.delete_by("name", "nobody").unwrap(), 0);

    assert_eq!(store.list_all().unwrap(), before);
    assert_index_consistent(&store);
}

#[test]
fn test_delete_everything_returns_to_empty() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    add(&mut store, "2", "Alice", "31");

    store.delete_by("name", "alice").unwrap();

    assert_eq!(store.state().unwrap(), StoreState::Empty);
    assert!(store.is_empty());
    assert_eq!(store.next_id().unwrap(), 1);
}

#[test]
fn test_delete_unknown_field_changes_nothing() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    let before = fs::read(store.path()).unwrap();

    assert!(matches!(
        store.delete_by("email", "x"),
        Err(RosterError::UnknownField(_))
    ));
    assert_eq!(fs::read(store.path()).unwrap(), before);
    assert!(!store.temp_path().exists());
}

#[test]
fn test_delete_on_corrupt_line_leaves_file_intact() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    store.append("2", "2,2,Bob").unwrap();
    let before = fs::read(store.path()).unwrap();

    assert!(matches!(
        store.delete_by("age", "30"),
        Err(RosterError::CorruptRecord { .. })
    ));

    assert_eq!(fs::read(store.path()).unwrap(), before);
    assert!(!store.temp_path().exists());
    assert!(store.identifier_exists("1"));
    assert!(store.identifier_exists("2"));
}

#[test]
fn test_delete_then_append_uses_correct_offset() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    add(&mut store, "2", "Bob", "25");

    store.delete_by("identifier", "1").unwrap();
    add(&mut store, "3", "Carol", "40");

    assert_eq!(store.offset_of("2"), Some(0));
    assert_eq!(store.get("3").unwrap(), Some("3,3,Carol,40,01.01.1990".to_string()));
    assert_index_consistent(&store);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[test]
fn test_clear() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    add(&mut store, "2", "Bob", "25");

    store.clear().unwrap();

    assert!(store.list_all().unwrap().is_empty());
    assert!(!store.identifier_exists("1"));
    assert!(!store.identifier_exists("2"));
    assert_eq!(store.state().unwrap(), StoreState::Empty);
    assert_eq!(fs::metadata(store.path()).unwrap().len(), 0);
}

#[test]
fn test_clear_then_reuse_identifier() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");

    store.clear().unwrap();
    add(&mut store, "1", "Alice", "30");

    assert_eq!(store.offset_of("1"), Some(0));
    assert_eq!(store.next_id().unwrap(), 2);
}

// =============================================================================
// Copy Out Tests
// =============================================================================

#[test]
fn test_copy_out() {
    let (temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    let destination = temp.path().join("backup.txt");

    let bytes = store.copy_out(&destination).unwrap();

    assert_eq!(bytes, fs::metadata(store.path()).unwrap().len());
    assert_eq!(fs::read(&destination).unwrap(), fs::read(store.path()).unwrap());
    // The store stays bound to its own file
    assert_ne!(store.path(), destination.as_path());
}

#[test]
fn test_copy_out_of_empty_store() {
    let (temp, store) = setup_temp_store();
    let destination = temp.path().join("empty.txt");

    assert_eq!(store.copy_out(&destination).unwrap(), 0);
    assert!(destination.exists());
}

// =============================================================================
// Command Execution Tests
// =============================================================================

#[test]
fn test_execute_insert_and_list() {
    let (_temp, mut store) = setup_temp_store();

    let outcome = store
        .execute(Command::Insert {
            draft: RecordDraft::new("42", "Alice", "30", "01.01.1990"),
        })
        .unwrap();
    assert!(matches!(outcome, Outcome::Inserted(ref record) if record.id == 1));

    let outcome = store.execute(Command::ListAll).unwrap();
    assert_eq!(
        outcome,
        Outcome::Lines(vec!["1,42,Alice,30,01.01.1990".to_string()])
    );
}

#[test]
fn test_execute_append_returns_offset() {
    let (_temp, mut store) = setup_temp_store();

    let outcome = store
        .execute(Command::Append {
            identifier: "10".to_string(),
            line: "1,10,Alice,30,01.01.1990".to_string(),
        })
        .unwrap();

    assert_eq!(outcome, Outcome::Offset(0));
}

#[test]
fn test_execute_reads() {
    let (_temp, mut store) = setup_temp_store();
    add(&mut store, "42", "Alice", "30");

    assert_eq!(store.execute(Command::NextId).unwrap(), Outcome::NextId(2));
    assert_eq!(
        store
            .execute(Command::IdentifierExists {
                identifier: "42".to_string()
            })
            .unwrap(),
        Outcome::Exists(true)
    );
    assert_eq!(
        store
            .execute(Command::Get {
                identifier: "41".to_string()
            })
            .unwrap(),
        Outcome::Line(None)
    );
    assert_eq!(
        store
            .execute(Command::Search {
                field: "name".to_string(),
                value: "ALICE".to_string()
            })
            .unwrap(),
        Outcome::Lines(vec!["1,42,Alice,30,01.01.1990".to_string()])
    );
}

#[test]
fn test_execute_delete_clear_copy_open() {
    let (temp, mut store) = setup_temp_store();
    add(&mut store, "1", "Alice", "30");
    add(&mut store, "2", "Bob", "25");

    let outcome = store
        .execute(Command::DeleteBy {
            field: "Identifier".to_string(),
            value: "1".to_string(),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Removed(1));

    let destination = temp.path().join("copy.txt");
    let outcome = store
        .execute(Command::CopyOut {
            destination: destination.clone(),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Copied(22));

    assert_eq!(store.execute(Command::Clear).unwrap(), Outcome::Done);
    assert!(store.is_empty());

    let outcome = store
        .execute(Command::OpenFile {
            path: destination.clone(),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Done);
    assert!(store.identifier_exists("2"));
}

#[test]
fn test_execute_propagates_errors() {
    let (_temp, mut store) = setup_temp_store();

    let result = store.execute(Command::Search {
        field: "email".to_string(),
        value: "x".to_string(),
    });

    assert!(matches!(result, Err(RosterError::UnknownField(_))));
}
