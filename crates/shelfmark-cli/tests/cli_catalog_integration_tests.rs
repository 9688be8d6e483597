//! CLI integration tests
//!
//! These tests drive the compiled binary end-to-end against a scratch
//! database and assert both the printed output and the resulting rows.

use rusqlite::Connection;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run(db_path: &Path, args: &[&str]) -> std::process::Output {
    let cli_bin = env!("CARGO_BIN_EXE_shelfmark");
    let mut full_args = vec!["--db", db_path.to_str().unwrap()];
    full_args.extend_from_slice(args);

    Command::new(cli_bin)
        .args(&full_args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_add_borrow_list_happy_path() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    let output = run(&db_path, &["book", "add", "Dune", "Frank Herbert", "111"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Book added!"));

    let output = run(&db_path, &["user", "register", "Alice", "U1"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("User registered!"));

    let output = run(&db_path, &["loan", "borrow", "111", "U1"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Book borrowed!"));

    let output = run(&db_path, &["book", "list"]);
    assert!(output.status.success());
    assert!(stdout_of(&output)
        .contains("Title: Dune, Author: Frank Herbert, ISBN: 111, Status: Borrowed"));

    // The loan row landed in the database
    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM loans WHERE user_id = 'U1' AND isbn = '111'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_cli_business_refusals_exit_zero() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    run(&db_path, &["book", "add", "Dune", "Frank Herbert", "111"]);

    // Duplicate ISBN: refused, but not an error
    let output = run(&db_path, &["book", "add", "Other", "Author", "111"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Book already exists."));

    // Borrowing for an unknown user: refused, but not an error
    let output = run(&db_path, &["loan", "borrow", "111", "ghost"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Borrow failed."));
}

#[test]
fn test_cli_loan_list_reports_missing_user() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    run(&db_path, &["user", "register", "Alice", "U1"]);

    let output = run(&db_path, &["loan", "list", "U1"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("No borrowed books."));

    let output = run(&db_path, &["loan", "list", "ghost"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("User not found."));
}

#[test]
fn test_cli_search_and_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    run(
        &db_path,
        &["book", "add", "The Hobbit", "J.R.R. Tolkien", "333"],
    );
    run(&db_path, &["book", "add", "Dune", "Frank Herbert", "111"]);

    let output = run(&db_path, &["book", "search", "tolkien"]);
    assert!(output.status.success());
    let text = stdout_of(&output);
    assert!(text.contains("The Hobbit"));
    assert!(!text.contains("Dune"));

    let output = run(&db_path, &["book", "search", "nothing-here"]);
    assert!(stdout_of(&output).contains("No matches found."));

    let output = run(&db_path, &["book", "list", "--json"]);
    assert!(output.status.success());
    let books: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(books.as_array().unwrap().len(), 2);
}
