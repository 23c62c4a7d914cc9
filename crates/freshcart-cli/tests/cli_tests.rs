//! End-to-end tests for the `freshcart` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config and environment.
fn freshcart(dir: &TempDir) -> Command {
    let config = config_file(dir);
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = cargo_bin_cmd!("freshcart");
    cmd.env_remove("RUST_LOG")
        .env_remove("FRESHCART__VALIDATION__TODAY")
        .env_remove("FRESHCART__OUTPUT__FORMAT")
        .arg("--no-color")
        .arg("-c")
        .arg(&config);
    cmd
}

fn config_file(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

const CHECKOUT_CONTACT: [&str; 8] = [
    "first_name=Grace",
    "last_name=Hopper",
    "address=1 Compiler Way",
    "city=Arlington",
    "state=Virginia",
    "zip=22201-1234",
    "phone=+1 (703) 555-0143",
    "email=grace@example.com",
];

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("freshcart")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_help() {
    cargo_bin_cmd!("freshcart")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

// ── check ─────────────────────────────────────────────────────────────────────

#[test]
fn test_check_valid_email() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["check", "email", "user@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid email"));
}

#[test]
fn test_check_invalid_email_exits_two() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["check", "email", "user@@example"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Please enter a valid email address"))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn test_check_explain_names_the_rule() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["check", "card-number", "4532015112830367", "--explain"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid card number"))
        .stdout(predicate::str::contains("rule: card-number."));
}

#[test]
fn test_check_label_shows_in_message() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["check", "name", "B", "--label", "Last Name"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Last Name must be at least 2 characters long",
        ));
}

#[test]
fn test_check_expiry_uses_today_flag() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["check", "expiry-date", "03/25", "--today", "2025-03"])
        .assert()
        .success();
    freshcart(&dir)
        .args(["check", "expiry-date", "02/25", "--today", "2025-03"])
        .assert()
        .code(2);
}

#[test]
fn test_check_expiry_uses_configured_month() {
    let dir = TempDir::new().unwrap();
    fs::write(config_file(&dir), "[validation]\ntoday = \"2025-03\"\n").unwrap();
    freshcart(&dir)
        .args(["check", "expiry-date", "02/25"])
        .assert()
        .code(2);
}

#[test]
fn test_check_unknown_kind_is_not_found() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["check", "iban", "DE89"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown field kind"));
}

#[test]
fn test_check_bad_today_is_user_error() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["check", "cvv", "123", "--today", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--today"));
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    let out = freshcart(&dir)
        .args(["--output-format", "json", "check", "zip", "1234"])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["kind"], "zip-code");
    assert_eq!(json["isValid"], false);
    assert_eq!(
        json["message"],
        "Please enter a valid ZIP code (12345 or 12345-6789)"
    );
    assert!(json["rule"].as_str().unwrap().starts_with("zip-code."));
}

// ── form ──────────────────────────────────────────────────────────────────────

#[test]
fn test_registration_reports_first_failing_field() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args([
            "form",
            "registration",
            "--set",
            "first_name=Al",
            "--set",
            "last_name=B",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Last Name must be at least 2 characters long",
        ))
        .stdout(predicate::str::contains("field: last_name"));
}

#[test]
fn test_checkout_cash_skips_card_fields() {
    let dir = TempDir::new().unwrap();
    let mut cmd = freshcart(&dir);
    cmd.args(["form", "checkout", "--set", "payment_method=cash"]);
    for entry in CHECKOUT_CONTACT {
        cmd.args(["--set", entry]);
    }
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Order Placed"));
}

#[test]
fn test_checkout_defaults_to_configured_payment_method() {
    let dir = TempDir::new().unwrap();
    fs::write(
        config_file(&dir),
        "[forms]\ndefault_payment_method = \"cash\"\n",
    )
    .unwrap();

    let mut cmd = freshcart(&dir);
    cmd.args(["form", "checkout"]);
    for entry in CHECKOUT_CONTACT {
        cmd.args(["--set", entry]);
    }
    cmd.assert().success();
}

#[test]
fn test_form_from_file_with_override() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("login.json");
    fs::write(&file, r#"{"email": "user@example", "password": "x"}"#).unwrap();

    freshcart(&dir)
        .args(["form", "login", "--file"])
        .arg(&file)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Please enter a valid email address"));

    freshcart(&dir)
        .args(["form", "login", "--set", "email=user@example.com", "--file"])
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn test_form_batch_directory() {
    let dir = TempDir::new().unwrap();
    let orders = dir.path().join("orders");
    fs::create_dir(&orders).unwrap();

    let contact: String = CHECKOUT_CONTACT
        .iter()
        .map(|entry| {
            let (key, value) = entry.split_once('=').unwrap();
            format!("{key} = \"{value}\"\n")
        })
        .collect();
    fs::write(
        orders.join("a-cash.toml"),
        format!("{contact}payment_method = \"cash\"\n"),
    )
    .unwrap();
    fs::write(
        orders.join("b-card.toml"),
        format!(
            "{contact}card_number = \"4532015112830366\"\nexpiry = \"02/25\"\ncvv = \"123\"\ncard_name = \"G. Hopper\"\n"
        ),
    )
    .unwrap();
    fs::write(orders.join("notes.txt"), "ignored").unwrap();

    freshcart(&dir)
        .args(["form", "checkout", "--today", "2025-03", "--dir"])
        .arg(&orders)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("a-cash.toml"))
        .stdout(predicate::str::contains("b-card.toml"))
        .stdout(predicate::str::contains("1 accepted, 1 rejected"));
}

#[test]
fn test_unknown_form_is_not_found() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["form", "wishlist"])
        .assert()
        .code(3);
}

#[test]
fn test_malformed_set_entry_is_user_error() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["form", "login", "--set", "novalue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("key=value"));
}

// ── rules ─────────────────────────────────────────────────────────────────────

#[test]
fn test_rules_lists_password_rules_in_order() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["rules", "password"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password.required"))
        .stdout(predicate::str::contains("Password is required"));
}

#[test]
fn test_rules_json_covers_every_kind() {
    let dir = TempDir::new().unwrap();
    let out = freshcart(&dir)
        .args(["--output-format", "json", "rules"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 12);
}

// ── init / config ─────────────────────────────────────────────────────────────

#[test]
fn test_init_then_config_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("freshcart.toml");

    cargo_bin_cmd!("freshcart")
        .arg("--no-color")
        .arg("-c")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    assert!(config.exists());

    cargo_bin_cmd!("freshcart")
        .env_remove("FRESHCART__FORMS__DEFAULT_PAYMENT_METHOD")
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "forms.default_payment_method"])
        .assert()
        .success()
        .stdout(predicate::str::diff("card\n"));
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    fs::write(config_file(&dir), "# mine\n").unwrap();

    freshcart(&dir).arg("init").assert().success();
    assert_eq!(fs::read_to_string(config_file(&dir)).unwrap(), "# mine\n");

    freshcart(&dir).args(["init", "--force"]).assert().success();
    assert!(
        fs::read_to_string(config_file(&dir))
            .unwrap()
            .contains("default_payment_method")
    );
}

#[test]
fn test_config_path_prints_explicit_file() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_missing_explicit_config_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("freshcart")
        .arg("-c")
        .arg(dir.path().join("absent.toml"))
        .args(["rules"])
        .assert()
        .code(4);
}

#[test]
fn test_config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    freshcart(&dir)
        .args(["config", "get", "nope"])
        .assert()
        .code(4);
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn test_bash_completions() {
    cargo_bin_cmd!("freshcart")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("freshcart"));
}
