use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn seedgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seedgen"))
}

#[test]
fn test_writes_under_current_directory() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = seedgen()
        .current_dir(temp.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let file_path = temp.path().join("storage").join("app").join("users_orders.json");
    assert!(file_path.is_file());

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    assert!(stdout.starts_with("JSON data saved to "));
    assert!(stdout.trim_end().ends_with("users_orders.json"));
    assert_eq!(stdout.lines().count(), 1);

    let json = fs::read_to_string(&file_path).expect("Failed to read output");
    let value: Value = serde_json::from_str(&json).expect("Invalid JSON");
    let users = value["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "Alice");
    assert_eq!(users[1]["orders"].as_array().unwrap().len(), 50);
    assert_eq!(users[1]["orders"][49]["order_id"], 250);
    assert_eq!(users[1]["orders"][49]["status"], "delivered");
}

#[test]
fn test_root_option_and_verify() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path().join("project");

    let output = seedgen()
        .args(["--root", root.to_str().unwrap(), "--verify"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(root.join("storage/app/users_orders.json").is_file());

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    assert!(stdout.contains(root.to_str().unwrap()));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp.path().join("storage/app/users_orders.json");

    assert!(seedgen().current_dir(temp.path()).status().unwrap().success());
    let first = fs::read(&file_path).unwrap();

    assert!(seedgen().current_dir(temp.path()).status().unwrap().success());
    let second = fs::read(&file_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unwritable_target_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("storage"), "not a directory").unwrap();

    let output = seedgen()
        .current_dir(temp.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).expect("Invalid UTF-8");
    assert!(stderr.contains("Failed to create directory"));
}
