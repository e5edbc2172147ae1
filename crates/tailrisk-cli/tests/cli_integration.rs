//! End-to-end tests for the tailrisk binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_prices(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("prices.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "date,SPY,IEF").unwrap();
    // Enough rows for a stable sigma estimate; simple oscillation.
    for day in 0..60 {
        let spy = 400.0 + 4.0 * ((day as f64) * 0.7).sin();
        let ief = 95.0 + 0.4 * ((day as f64) * 0.3).cos();
        writeln!(
            file,
            "2024-{:02}-{:02},{spy},{ief}",
            day / 28 + 1,
            day % 28 + 1
        )
        .unwrap();
    }
    path
}

fn write_portfolio(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("portfolio.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "obligor,exposure,rating").unwrap();
    writeln!(file, "Bond_A,1000000,BBB").unwrap();
    writeln!(file, "Bond_B,750000,BB").unwrap();
    writeln!(file, "Bond_C,500000,B").unwrap();
    path
}

#[test]
fn market_var_prints_all_methods() {
    let dir = tempfile::tempdir().unwrap();
    let prices = write_prices(&dir);

    Command::cargo_bin("tailrisk")
        .unwrap()
        .args([
            "market-var",
            "--prices",
            prices.to_str().unwrap(),
            "--weights",
            "SPY=0.7,IEF=0.3",
            "--sims",
            "5000",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Historical"))
        .stdout(predicate::str::contains("Parametric"))
        .stdout(predicate::str::contains("Monte Carlo"));
}

#[test]
fn market_var_json_output_is_reproducible_under_seed() {
    let dir = tempfile::tempdir().unwrap();
    let prices = write_prices(&dir);

    let run = || {
        Command::cargo_bin("tailrisk")
            .unwrap()
            .args([
                "--format",
                "json",
                "--quiet",
                "market-var",
                "--prices",
                prices.to_str().unwrap(),
                "--weights",
                "SPY=0.7,IEF=0.3",
                "--sims",
                "2000",
                "--seed",
                "7",
            ])
            .output()
            .unwrap()
    };

    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn market_var_rejects_bad_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let prices = write_prices(&dir);

    Command::cargo_bin("tailrisk")
        .unwrap()
        .args([
            "market-var",
            "--prices",
            prices.to_str().unwrap(),
            "--weights",
            "SPY=1.0",
            "--alpha",
            "1.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alpha"));
}

#[test]
fn credit_sim_reports_expected_loss_and_var() {
    let dir = tempfile::tempdir().unwrap();
    let portfolio = write_portfolio(&dir);

    Command::cargo_bin("tailrisk")
        .unwrap()
        .args([
            "credit-sim",
            "--portfolio",
            portfolio.to_str().unwrap(),
            "--sims",
            "10000",
            "--seed",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected loss"))
        .stdout(predicate::str::contains("VaR 95%"));
}

#[test]
fn credit_sim_fails_on_unknown_rating() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.csv");
    std::fs::write(&path, "obligor,exposure,rating\nBond_A,1000,ZZZ\n").unwrap();

    Command::cargo_bin("tailrisk")
        .unwrap()
        .args(["credit-sim", "--portfolio", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ZZZ"));
}
