use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

const BASE_CONFIG: &str = r#"
[[catalog.books]]
title = "Dune"
author = "Frank Herbert"
genre = "Science Fiction"
price = 9.99

[[catalog.books]]
title = "The Hobbit"
author = "J.R.R. Tolkien"
genre = "Fantasy"
price = 12.5

[[accounts.users]]
username = "jane_doe"
password = "password456"
email = "jane@example.com"
balance = 10.0
purchased = ["The Hobbit"]
"#;

fn config_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("base.toml"), BASE_CONFIG).unwrap();
    dir
}

fn bookstore(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookstore").unwrap();
    cmd.env("BOOKSTORE_CONFIG_DIR", config)
        .env("BOOKSTORE_ENV", "local")
        .env("RUST_LOG", "off");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn search_lists_matches_in_catalog_order() {
    let config = config_dir();
    let out = stdout_of(bookstore(config.path()).args(["search", "e"]));

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Dune by Frank Herbert [Science Fiction] 9.99",
            "The Hobbit by J.R.R. Tolkien [Fantasy] 12.50",
        ]
    );
}

#[test]
fn search_json_output() {
    let config = config_dir();
    let out = stdout_of(bookstore(config.path()).args(["--json", "search", "Tolkien"]));

    let books: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(books.as_array().unwrap().len(), 1);
    assert_eq!(books[0]["title"], "The Hobbit");
}

#[test]
fn purchase_within_balance() {
    let config = config_dir();
    let out = stdout_of(bookstore(config.path()).args([
        "purchase",
        "--username",
        "jane_doe",
        "--password",
        "password456",
        "Dune",
    ]));

    assert_eq!(out.trim(), "purchased 'Dune', balance 0.01");
}

#[test]
fn purchase_over_balance_fails() {
    let config = config_dir();
    bookstore(config.path())
        .args([
            "purchase",
            "--username",
            "jane_doe",
            "--password",
            "password456",
            "The Hobbit",
        ])
        .assert()
        .failure();
}

#[test]
fn review_of_owned_book() {
    let config = config_dir();
    let out = stdout_of(bookstore(config.path()).args([
        "review",
        "--username",
        "jane_doe",
        "--password",
        "password456",
        "The Hobbit",
        "Second breakfast, anyone?",
    ]));

    assert_eq!(out.trim(), "reviewed 'The Hobbit' (1 reviews)");
}

#[test]
fn review_of_unowned_book_fails() {
    let config = config_dir();
    bookstore(config.path())
        .args([
            "review",
            "--username",
            "jane_doe",
            "--password",
            "password456",
            "Dune",
            "Spice!",
        ])
        .assert()
        .failure();
}

#[test]
fn login_with_wrong_password_fails() {
    let config = config_dir();
    bookstore(config.path())
        .args(["login", "--username", "jane_doe", "--password", "nope"])
        .assert()
        .failure();

    let out = stdout_of(bookstore(config.path()).args([
        "login",
        "--username",
        "jane_doe",
        "--password",
        "password456",
    ]));
    assert!(out.starts_with("welcome jane_doe"));
}

#[test]
fn register_taken_username_fails() {
    let config = config_dir();
    bookstore(config.path())
        .args([
            "register",
            "--username",
            "jane_doe",
            "--password",
            "x",
            "--email",
            "x@example.com",
        ])
        .assert()
        .failure();
}

#[test]
fn adding_seeded_book_again_fails() {
    let config = config_dir();
    bookstore(config.path())
        .args([
            "add-book",
            "--title",
            "Dune",
            "--author",
            "Frank Herbert",
            "--genre",
            "Science Fiction",
            "--price",
            "9.99",
        ])
        .assert()
        .failure();
}
