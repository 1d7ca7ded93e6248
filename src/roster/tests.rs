use super::*;
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn test_normalize_name() {
    assert_eq!(normalize_name("ada lovelace"), "Ada Lovelace");
    assert_eq!(normalize_name("  GRACE   hopper\t"), "Grace Hopper");
    assert_eq!(normalize_name("o'neil"), "O'neil");
    assert_eq!(normalize_name("   "), "");
}

#[test]
fn test_parse_one_name_per_line() {
    let roster = Roster::parse("alice\nbob\ncarol\ndave\n").unwrap();
    assert_eq!(roster.len(), 4);
    assert_eq!(roster.names(), vec!["Alice", "Bob", "Carol", "Dave"]);
    assert!(!roster.has_exclusions());
}

#[test]
fn test_parse_skips_blank_lines_and_crlf() {
    let roster = Roster::parse("alice\r\n\r\n   \nbob\r\n").unwrap();
    assert_eq!(roster.names(), vec!["Alice", "Bob"]);
}

#[test]
fn test_parse_exclusions() {
    let roster = Roster::parse("player one !!cant match this !!or this\nplain\n").unwrap();

    let first = &roster.players()[0];
    assert_eq!(first.name, "Player One");
    assert_eq!(first.excludes, vec!["Cant Match This", "Or This"]);
    assert!(roster.players()[1].excludes.is_empty());
    assert!(roster.has_exclusions());
}

#[test]
fn test_parse_ignores_empty_exclusion_segments() {
    let roster = Roster::parse("alice !! !!bob").unwrap();
    assert_eq!(roster.players()[0].excludes, vec!["Bob"]);
}

#[test]
fn test_parse_rejects_missing_name() {
    let result = Roster::parse("alice\n  !!bob\n");
    match result {
        Err(BracketError::MalformedLine { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MalformedLine, got {:?}", other),
    }
}

#[test]
fn test_exclusions_are_symmetric() {
    let roster = Roster::parse("alice !!bob\nbob\ncarol\n").unwrap();
    let map = roster.exclusions();

    assert!(map.forbids("Alice", "Bob"));
    assert!(map.forbids("Bob", "Alice"));
    assert!(!map.forbids("Alice", "Carol"));
    assert!(map.is_restricted("Bob"));
    assert!(!map.is_restricted("Carol"));
}

#[test]
fn test_push_and_remove() {
    let mut roster = Roster::parse("alice\nbob\ncarol").unwrap();
    roster.push("  dave  smith ");
    assert_eq!(roster.len(), 4);
    assert_eq!(roster.names()[3], "Dave Smith");

    let removed = roster.remove_at(0);
    assert_eq!(removed.name, "Alice");
    assert_eq!(roster.names(), vec!["Bob", "Carol", "Dave Smith"]);
}

#[test]
fn test_numbered_listing() {
    let roster = Roster::parse("alice\nbob\ncarol").unwrap();
    assert_eq!(roster.numbered_listing(), "1. Alice\n2. Bob\n3. Carol");
}

#[test]
fn test_load_from_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("bracket_planner_roster_{suffix}.txt"));
    fs::write(&path, "alice\nbob !!alice\n").expect("write roster");

    let roster = Roster::load(&path).unwrap();
    assert_eq!(roster.names(), vec!["Alice", "Bob"]);

    fs::remove_file(&path).expect("cleanup");
}

#[test]
fn test_load_missing_file() {
    let result = Roster::load("/definitely/not/here/roster.txt");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to read roster"));
}
