#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn contacts_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("contacts").unwrap();
    cmd.current_dir(home)
        .env("CONTACTS_CONFIG_DIR", home.join("config"))
        .env_remove("CONTACTS_FILE")
        .env("NO_COLOR", "1");
    cmd
}

fn add(home: &Path, name: &str, phone: &str, email: &str) {
    contacts_cmd(home)
        .args(["add", name, phone, email])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully."));
}

#[test]
fn add_and_list() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "5551234567", "alice@example.com");
    add(temp.path(), "Bob", "5559876543", "bob@example.com");

    assert!(temp.path().join("contacts.json").exists());

    contacts_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1."))
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("5559876543"));
}

#[test]
fn empty_list() {
    let temp = TempDir::new().unwrap();
    contacts_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn duplicate_names_are_numbered() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "5551234567", "a@b.co");
    add(temp.path(), "Alice", "5551234567", "a@b.co");
    add(temp.path(), "Alice", "5551234567", "a@b.co");

    let raw = fs::read_to_string(temp.path().join("contacts.json")).unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    let names: Vec<_> = stored.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Alice", "Alice (1)", "Alice (2)"]);
}

#[test]
fn rejects_invalid_phone() {
    let temp = TempDir::new().unwrap();
    contacts_cmd(temp.path())
        .args(["add", "Alice", "123-456-7890", "a@b.co"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone number should have 10 digits"));

    assert!(!temp.path().join("contacts.json").exists());
}

#[test]
fn rejects_missing_email() {
    let temp = TempDir::new().unwrap();
    contacts_cmd(temp.path())
        .args(["add", "Alice", "5551234567"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email address."));
}

#[test]
fn search_by_name_and_phone() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice Smith", "5551234567", "a@b.co");
    add(temp.path(), "Bob", "5559876543", "b@b.co");

    contacts_cmd(temp.path())
        .args(["search", "smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Smith"))
        .stdout(predicate::str::contains("Bob").not());

    contacts_cmd(temp.path())
        .args(["search", "9876"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2."))
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn delete_and_view() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "5551234567", "a@b.co");
    add(temp.path(), "Bob", "5559876543", "b@b.co");

    contacts_cmd(temp.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    contacts_cmd(temp.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Bob"))
        .stdout(predicate::str::contains("Phone: 5559876543"))
        .stdout(predicate::str::contains("Email: b@b.co"));
}

#[test]
fn delete_without_selection_fails() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "5551234567", "a@b.co");

    contacts_cmd(temp.path())
        .arg("delete")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select a contact to delete."));

    contacts_cmd(temp.path())
        .args(["view", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 5 not found"));
}

#[test]
fn update_replaces_contact() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "5551234567", "a@b.co");

    contacts_cmd(temp.path())
        .args(["update", "1", "Alicia", "5550000000", "alicia@b.co"])
        .assert()
        .success();

    contacts_cmd(temp.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Alicia"))
        .stdout(predicate::str::contains("Phone: 5550000000"));
}

#[test]
fn update_cannot_duplicate_another_contact() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "5551234567", "a@b.co");
    add(temp.path(), "Bob", "5559876543", "b@b.co");

    contacts_cmd(temp.path())
        .args(["update", "2", "Alice", "5551234567", "x@y.z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact already exists: Alice"));

    contacts_cmd(temp.path())
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Bob"));
}

#[test]
fn malformed_file_surfaces_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("contacts.json"), "{ broken").unwrap();

    contacts_cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON data"));

    assert_eq!(
        fs::read_to_string(temp.path().join("contacts.json")).unwrap(),
        "{ broken"
    );
}

#[test]
fn file_flag_and_env_select_backing_file() {
    let temp = TempDir::new().unwrap();

    contacts_cmd(temp.path())
        .args(["--file", "flag.json", "add", "Alice", "5551234567", "a@b.co"])
        .assert()
        .success();
    assert!(temp.path().join("flag.json").exists());

    contacts_cmd(temp.path())
        .env("CONTACTS_FILE", temp.path().join("env.json"))
        .args(["add", "Bob", "5559876543", "b@b.co"])
        .assert()
        .success();
    assert!(temp.path().join("env.json").exists());
    assert!(!temp.path().join("contacts.json").exists());
}

#[test]
fn config_sets_data_file() {
    let temp = TempDir::new().unwrap();

    contacts_cmd(temp.path())
        .args(["config", "data-file", "book.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to book.json"));

    add(temp.path(), "Alice", "5551234567", "a@b.co");
    assert!(temp.path().join("book.json").exists());

    contacts_cmd(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = book.json"))
        .stdout(predicate::str::contains("log-level = warn"));
}

#[test]
fn config_works_with_malformed_contacts_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("contacts.json"), "[oops").unwrap();

    contacts_cmd(temp.path())
        .args(["config", "log-level"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log-level = warn"));
}
