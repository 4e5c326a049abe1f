use roster_manager::{Console, CsvRosterStore, RosterStore, Session};
use std::fs;
use tempfile::TempDir;

fn run_session(store: &CsvRosterStore, input: &str) -> String {
    let mut output = Vec::new();
    {
        let console = Console::new(input.as_bytes(), &mut output);
        let mut session = Session::new(store, console).unwrap();
        session.run().unwrap();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_end_to_end_session_with_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("players.csv");
    let store = CsvRosterStore::new(&path);

    let input = "2\nSam Lee\nss\n10\n3\n1\n6\n1\n12\n3\n1\n7\n";
    let output = run_session(&store, input);

    assert!(output.contains("Baseball Team Manager"));
    assert!(output.contains("Sam Lee was added."));
    assert!(output.contains("1  Sam                  SS        10      3   0.300"));
    assert!(output.contains("Sam Lee was updated."));
    assert!(output.contains("1  Sam                  SS        12      3   0.250"));
    assert!(output.trim_end().ends_with("Bye!"));

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end(), "Sam Lee,SS,12,3");
}

#[test]
fn test_roster_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("players.csv");
    fs::write(&path, "Alice Smith,C,20,5\nBob,1B,30,9\nCarol,P,12,2\n").unwrap();
    let store = CsvRosterStore::new(&path);

    let output = run_session(&store, "4\n1\n3\n3\n2\n7\n");
    assert!(output.contains("Alice Smith was selected."));
    assert!(output.contains("Alice Smith was moved."));
    assert!(output.contains("Carol was deleted."));

    let players = store.load().unwrap();
    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice Smith"]);
}

#[test]
fn test_rejected_operations_keep_roster() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("players.csv");
    fs::write(&path, "Alice,C,20,5\nBob,1B,30,9\nCarol,P,12,2\n").unwrap();
    let store = CsvRosterStore::new(&path);

    // 打序 99 不存在、安打多於打數、守備位置無效後重新輸入
    let input = "4\n1\n99\n2\nX\n1B\n5\n9\n5\n2\nDH\nrf\n9\n7\n";
    let output = run_session(&store, input);

    assert!(output.contains("Alice was selected."));
    assert!(output.contains("Invalid integer. Please try again."));
    assert!(output.contains("Hits can't be greater than at bats."));
    assert!(output.contains("You selected Bob POS=1B"));
    assert!(output.contains("Invalid position. Please try again."));
    assert!(output.contains("Bob was updated."));
    assert!(output.contains("Invalid menu option. Please try again."));

    let players = store.load().unwrap();
    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(players[1].position, "RF");
}

#[test]
fn test_missing_file_starts_empty_and_eof_ends_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("players.csv");
    let store = CsvRosterStore::new(&path);

    let output = run_session(&store, "1\n");

    assert!(output.contains("  Player                 POS     AB      H    AVG"));
    assert!(!output.contains("Bye!"));
    assert!(!path.exists());
}

#[test]
fn test_legacy_negative_stats_kept_after_edit() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("players.csv");
    fs::write(&path, "Legacy Guy,C,-3,-5\nBob,1B,30,9\n").unwrap();
    let store = CsvRosterStore::new(&path);

    let output = run_session(&store, "5\n2\nlf\n7\n");
    assert!(output.contains("Bob was updated."));

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["Legacy Guy,C,-3,-5", "Bob,LF,30,9"]);
}
