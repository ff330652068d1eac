//! Drives the `moneyreport` binary through stdin

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moneyreport(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moneyreport").unwrap();
    cmd.env("MONEY_REPORT_DIR", temp_dir.path())
        .env_remove("MONEY_REPORT_LANG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn shell_records_and_reports() {
    let temp_dir = TempDir::new().unwrap();

    moneyreport(&temp_dir)
        .args(["--lang", "en"])
        .write_stdin(
            "expense Coffee 5.5 --at \"2025-01-15 09:30\"\n\
             income Salary 1500 -C USD --at 2025-01-31\n\
             report --print\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added!"))
        .stdout(predicate::str::contains("Income added!"))
        .stdout(predicate::str::contains(
            "<li>Coffee (Food) - 5.5 AZN | 1/15/2025, 9:30:00 AM</li>",
        ))
        .stdout(predicate::str::contains(
            "<li>Salary (Salary) - 1500 USD | 1/31/2025, 12:00:00 AM</li>",
        ));
}

#[test]
fn shell_defaults_to_russian() {
    let temp_dir = TempDir::new().unwrap();

    moneyreport(&temp_dir)
        .write_stdin("report --print\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<h1>История</h1><p>Нет транзакций для отображения.</p>",
        ));
}

#[test]
fn shell_exports_report_file() {
    let temp_dir = TempDir::new().unwrap();

    moneyreport(&temp_dir)
        .args(["--lang", "en"])
        .write_stdin("expense Tea 2 --at 2025-02-01\nreport\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated!"));

    let report =
        std::fs::read_to_string(temp_dir.path().join("reports").join("TransactionReport.html"))
            .unwrap();
    assert!(report.contains("Tea (Food) - 2 AZN"));
}

#[test]
fn config_persists_language() {
    let temp_dir = TempDir::new().unwrap();

    moneyreport(&temp_dir)
        .args(["config", "--language", "en", "--currency", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language:         en"))
        .stdout(predicate::str::contains("Default currency: USD"));

    moneyreport(&temp_dir)
        .write_stdin("expense Tea 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea 2 USD"))
        .stdout(predicate::str::contains("Expense added!"));
}

#[test]
fn categories_command_lists_labels() {
    let temp_dir = TempDir::new().unwrap();

    moneyreport(&temp_dir)
        .args(["categories", "--lang", "ru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Зарплата"))
        .stdout(predicate::str::contains("food"));
}

#[test]
fn invalid_language_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    moneyreport(&temp_dir)
        .args(["--lang", "fr", "categories"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn invalid_timestamp_format_in_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"timestamp_format": "%Q"}"#,
    )
    .unwrap();

    moneyreport(&temp_dir)
        .write_stdin("expense Tea 1\nreport --print\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid timestamp format"));
}
