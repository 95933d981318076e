use assert_cmd::{Command, cargo_bin};
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("patterns-demo"));
    cmd.write_stdin("2\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DESIGN PATTERNS SHOWCASE"))
        // Scripted payments
        .stdout(predicate::str::contains(
            "Paid 100.0 USD by bank card (number: 1234-5678-****-****).",
        ))
        .stdout(predicate::str::contains(
            "Paid 100.0 USD via wallet (email: user@example.com).",
        ))
        // Menu choice "2" selects the crypto strategy for half the amount
        .stdout(predicate::str::contains(
            "Paid 50.00 USD in cryptocurrency (wallet address: 0xABC123...).",
        ))
        // Exchange section
        .stdout(predicate::str::contains(
            "Rate change: USD_TO_EUR from 0.92 to 0.90",
        ))
        .stdout(predicate::str::contains("Time to buy euros!"))
        .stdout(predicate::str::contains("Observer UserNotifier detached."))
        .stdout(predicate::str::contains("USD_TO_EUR at 0.93. Watching."))
        // Command section
        .stdout(predicate::str::contains("[Light] Kitchen: ON"))
        .stdout(predicate::str::contains("History is empty. Nothing to undo."));

    Ok(())
}

#[test]
fn test_cli_malformed_stdin_falls_back_to_default() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("patterns-demo"));
    cmd.write_stdin("whatever\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."))
        .stdout(predicate::str::contains(
            "Paid 50.00 USD by bank card (number: 0000-****-****-0000).",
        ));

    Ok(())
}

#[test]
fn test_cli_preselected_choice_skips_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("patterns-demo"));
    cmd.args(["--choice", "3", "--amount", "80.0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Amount due: 80.0 USD."))
        .stdout(predicate::str::contains(
            "Paid 40.00 USD via wallet (email: another@example.com).",
        ));

    Ok(())
}

#[test]
fn test_cli_rates_file_gates_the_first_update() -> Result<(), Box<dyn std::error::Error>> {
    // Seed USD_TO_EUR at the value of the script's first update, so that
    // update must log "unchanged" and notify nobody.
    let mut rates = tempfile::NamedTempFile::new()?;
    write!(rates, r#"{{"USD_TO_EUR": 0.90, "USD_TO_KZT": 470.5}}"#)?;

    let mut cmd = Command::new(cargo_bin!("patterns-demo"));
    cmd.args(["--choice", "1"])
        .arg("--rates")
        .arg(rates.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rate USD_TO_EUR is unchanged."))
        .stdout(predicate::str::contains(
            "Rate change: USD_TO_KZT from 470.5 to 465.2",
        ));

    Ok(())
}

#[test]
fn test_cli_missing_rates_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("patterns-demo"));
    cmd.args(["--choice", "1", "--rates", "no/such/rates.json"]);

    cmd.assert().failure();

    Ok(())
}
