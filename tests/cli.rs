use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASSWORD: &str = "StrongTestPassword123!";

/// A temporary ENCRYPTX_HOME configured with a cheap key derivation
fn test_home() -> TempDir {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{"schema_version": 1, "kdf": {"memory_cost": 64, "time_cost": 1, "parallelism": 1}}"#,
    )
    .unwrap();
    home
}

fn encryptx(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("encryptx").unwrap();
    cmd.env("ENCRYPTX_HOME", home)
        .env("ENCRYPTX_PASSWORD", PASSWORD)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn encrypt_then_decrypt_round_trips() {
    let home = test_home();
    let input = home.path().join("input.txt");
    let encrypted = home.path().join("input.txt.enc");
    let output = home.path().join("output.txt");
    fs::write(&input, "🚀🔒🔥 Unicode text").unwrap();

    encryptx(home.path())
        .args(["encrypt"])
        .arg(&input)
        .arg(&encrypted)
        .assert()
        .success()
        .stdout(predicate::str::contains("Encryption complete."));

    assert_eq!(
        fs::metadata(&encrypted).unwrap().len(),
        "🚀🔒🔥 Unicode text".len() as u64 + 44
    );

    encryptx(home.path())
        .args(["decrypt"])
        .arg(&encrypted)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Decryption complete."));

    assert_eq!(fs::read_to_string(&output).unwrap(), "🚀🔒🔥 Unicode text");
}

#[test]
fn decrypt_with_wrong_password_fails() {
    let home = test_home();
    let input = home.path().join("in.txt");
    let encrypted = home.path().join("in.enc");
    let output = home.path().join("out.txt");
    fs::write(&input, b"Secret data").unwrap();

    encryptx(home.path())
        .arg("encrypt")
        .arg(&input)
        .arg(&encrypted)
        .assert()
        .success();

    encryptx(home.path())
        .env("ENCRYPTX_PASSWORD", "WrongPassword")
        .arg("decrypt")
        .arg(&encrypted)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));

    assert!(!output.exists());
}

#[test]
fn decrypt_short_file_is_format_error() {
    let home = test_home();
    let encrypted = home.path().join("short.enc");
    fs::write(&encrypted, [0u8; 20]).unwrap();

    encryptx(home.path())
        .arg("decrypt")
        .arg(&encrypted)
        .arg(home.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format error"));
}

#[test]
fn encrypt_missing_input_fails_before_prompting() {
    let home = test_home();

    encryptx(home.path())
        .env_remove("ENCRYPTX_PASSWORD")
        .arg("encrypt")
        .arg(home.path().join("missing.txt"))
        .arg(home.path().join("out.enc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file does not exist"));
}

#[test]
fn missing_password_without_terminal_fails() {
    let home = test_home();
    let input = home.path().join("in.txt");
    fs::write(&input, b"data").unwrap();

    encryptx(home.path())
        .env_remove("ENCRYPTX_PASSWORD")
        .arg("encrypt")
        .arg(&input)
        .arg(home.path().join("out.enc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password provided"));
}

#[test]
fn vault_list_on_fresh_home_is_empty() {
    let home = test_home();

    encryptx(home.path())
        .args(["vault", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));

    assert!(!home.path().join("vault.json.enc").exists());
}

#[test]
fn vault_add_get_remove_flow() {
    let home = test_home();

    encryptx(home.path())
        .args([
            "vault", "add", "Gmail", "me@gmail.com", "--password", "hunter2", "--notes",
            "Personal email account",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry 'Gmail'."));

    encryptx(home.path())
        .args(["vault", "add", "GitHub", "octocat", "--password", "ghp_exampletoken"])
        .assert()
        .success();

    assert!(home.path().join("vault.json.enc").exists());
    assert!(!home.path().join("vault.json").exists());

    encryptx(home.path())
        .args(["vault", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Gmail")
                .and(predicate::str::contains("GitHub"))
                .and(predicate::str::contains("hunter2").not()),
        );

    encryptx(home.path())
        .args(["vault", "get", "gmail", "--show-password"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password: hunter2"));

    encryptx(home.path())
        .args(["vault", "remove", "Gmail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 entry titled 'Gmail'."));

    encryptx(home.path())
        .args(["vault", "get", "Gmail"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found: Gmail"));

    encryptx(home.path())
        .args(["vault", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub").and(predicate::str::contains("1 entry")));

    assert!(!home.path().join("vault.json").exists());
}

#[test]
fn vault_remove_is_case_sensitive() {
    let home = test_home();

    encryptx(home.path())
        .args(["vault", "add", "Gmail", "me", "--password", "pw"])
        .assert()
        .success();

    encryptx(home.path())
        .args(["vault", "remove", "gmail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry titled 'gmail'."));

    encryptx(home.path())
        .args(["vault", "get", "GMAIL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:    Gmail"));
}

#[test]
fn vault_with_wrong_password_fails_and_leaves_no_plaintext() {
    let home = test_home();

    encryptx(home.path())
        .args(["vault", "add", "Gmail", "me", "--password", "pw"])
        .assert()
        .success();

    encryptx(home.path())
        .env("ENCRYPTX_PASSWORD", "WrongPassword")
        .args(["vault", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));

    assert!(!home.path().join("vault.json").exists());
}

#[test]
fn config_shows_paths_and_kdf() {
    let home = test_home();

    encryptx(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("vault.json.enc")
                .and(predicate::str::contains("Memory cost: 64 KiB")),
        );
}

#[test]
fn home_flag_overrides_environment() {
    let home = test_home();
    let other = TempDir::new().unwrap();

    encryptx(other.path())
        .arg("--home")
        .arg(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Memory cost: 64 KiB"));
}

#[test]
fn vault_command_creates_missing_home() {
    let parent = TempDir::new().unwrap();
    let home = parent.path().join("fresh").join("home");

    encryptx(&home)
        .args(["vault", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));

    assert!(home.is_dir());
    assert!(!home.join("vault.json.enc").exists());
}
