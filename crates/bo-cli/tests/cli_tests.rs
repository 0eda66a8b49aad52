// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use assert_cmd::Command;
use bo_cli::config_commands::ConfigCommands;
use bo_cli::fee::FeeCommands;
use bo_cli::{Cli, Commands, Parser};
use bo_test_utils::{logged_assert, logged_assert_eq, TestLogger};
use serde_json::{json, Value};

/// `bo` with user and project config pointed at an empty directory
fn bo(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bo").unwrap();
    cmd.current_dir(home.path())
        .env("BO_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: std::process::Output) -> Value {
    assert!(
        output.status.success(),
        "bo failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_parse_fee_quote_with_coupon() {
    let cli = Cli::try_parse_from([
        "bo",
        "fee",
        "quote",
        "--founders",
        "2",
        "--paid",
        "50000",
        "--coupon-code",
        "HALF",
        "--discount",
        "50",
    ])
    .unwrap();

    match cli.command {
        Commands::Fee {
            subcommand: FeeCommands::Quote(args),
        } => {
            let snapshot = args.snapshot();
            assert_eq!(snapshot.billing_founders_count, 2);
            assert_eq!(snapshot.paid_fee, 50_000);
            assert_eq!(snapshot.applied_coupon.unwrap().discount_percentage, 50);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_rejects_incomplete_or_out_of_range_coupon() {
    assert!(Cli::try_parse_from(["bo", "fee", "quote", "--founders", "1", "--coupon-code", "X"]).is_err());
    assert!(Cli::try_parse_from(["bo", "fee", "quote", "--founders", "1", "--discount", "10"]).is_err());
    assert!(Cli::try_parse_from([
        "bo",
        "fee",
        "quote",
        "--founders",
        "1",
        "--coupon-code",
        "X",
        "--discount",
        "101"
    ])
    .is_err());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "bo",
        "config",
        "show",
        "--origin",
        "--set",
        "billing.base-fee=150000",
        "--set",
        "log-level=debug",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.set, vec!["billing.base-fee=150000", "log-level=debug"]);
    assert_eq!(cli.logging.log_format, Some(bo_logging::LogFormat::Json));
    assert!(matches!(
        cli.command,
        Commands::Config {
            subcommand: ConfigCommands::Show { origin: true }
        }
    ));
}

#[test]
fn test_parse_sessions_tags_and_now() {
    let cli = Cli::try_parse_from([
        "bo",
        "sessions",
        "--tag",
        "cohort",
        "--tag",
        "mentors",
        "--now",
        "2026-05-12T09:00:00+02:00",
    ])
    .unwrap();

    let Commands::Sessions(args) = cli.command else {
        panic!("expected sessions command");
    };
    assert_eq!(args.tags, vec!["cohort", "mentors"]);
    assert_eq!(args.now.unwrap().to_rfc3339(), "2026-05-12T07:00:00+00:00");

    assert!(Cli::try_parse_from(["bo", "sessions", "--now", "yesterday"]).is_err());
}

#[test]
fn test_fee_quote_prints_props() {
    let mut logger = TestLogger::new("test_fee_quote_prints_props").unwrap();
    let home = tempfile::TempDir::new().unwrap();

    let output = bo(&home)
        .args(["fee", "quote", "--founders", "1", "--paid", "49999"])
        .args(["--coupon-code", "HALF", "--discount", "50"])
        .output()
        .unwrap();
    let value = stdout_json(output);
    logger.log_json("output", &value).unwrap();

    logged_assert_eq!(
        logger,
        value,
        json!({
            "fee": { "payableFee": 50000, "emiUndiscounted": 16667, "emi": 1 },
            "coupon": { "code": "HALF", "discount": 50, "instructions": null }
        })
    );
    logger.finish_success().unwrap();
}

#[test]
fn test_fee_quote_without_coupon_has_no_coupon_key() {
    let mut logger = TestLogger::new("test_fee_quote_without_coupon_has_no_coupon_key").unwrap();
    let home = tempfile::TempDir::new().unwrap();

    let value = stdout_json(bo(&home).args(["fee", "quote", "--founders", "2"]).output().unwrap());
    logger.log_json("output", &value).unwrap();

    logged_assert!(logger, value.get("coupon").is_none());
    logged_assert_eq!(logger, value["fee"]["emi"], 33333);
    logger.finish_success().unwrap();
}

#[test]
fn test_base_fee_from_flags_and_env() {
    let home = tempfile::TempDir::new().unwrap();

    let value = stdout_json(
        bo(&home)
            .args(["--set", "billing.base-fee=60000", "fee", "quote", "--founders", "1"])
            .output()
            .unwrap(),
    );
    assert_eq!(value["fee"]["payableFee"], 60000);
    assert_eq!(value["fee"]["emiUndiscounted"], 10000);

    let value = stdout_json(
        bo(&home)
            .env("BO_BILLING__BASE_FEE", "120000")
            .args(["fee", "quote", "--founders", "1"])
            .output()
            .unwrap(),
    );
    assert_eq!(value["fee"]["payableFee"], 120000);
}

#[test]
fn test_fee_show_reads_ledger_from_project_config() {
    let home = tempfile::TempDir::new().unwrap();
    std::fs::write(
        home.path().join("ledger.toml"),
        r#"
[[coupon]]
code = "SEED"
discount-percentage = 80
instructions = "Seed cohort rate"

[[startup]]
id = "northwind"
billing-founders-count = 1
applied-coupon = "SEED"

[[startup.payment]]
amount = 10000
status = "paid"
"#,
    )
    .unwrap();
    std::fs::create_dir_all(home.path().join(".backoffice")).unwrap();
    std::fs::write(
        home.path().join(".backoffice").join("config.toml"),
        format!(
            "[ledger]\npath = {:?}\n",
            home.path().join("ledger.toml").display().to_string()
        ),
    )
    .unwrap();

    let value = stdout_json(bo(&home).args(["fee", "show", "northwind"]).output().unwrap());
    assert_eq!(
        value,
        json!({
            "fee": { "payableFee": 80000, "emiUndiscounted": 16667, "emi": 13333 },
            "coupon": { "code": "SEED", "discount": 80, "instructions": "Seed cohort rate" }
        })
    );

    bo(&home).args(["fee", "show", "nobody"]).assert().failure();
}

#[test]
fn test_fee_show_without_ledger_fails() {
    let home = tempfile::TempDir::new().unwrap();
    bo(&home).args(["fee", "show", "northwind"]).assert().failure();
}

#[test]
fn test_sessions_command_partitions_file() {
    let home = tempfile::TempDir::new().unwrap();
    let file = home.path().join("sessions.json");
    std::fs::write(
        &file,
        json!([
            { "id": 1, "title": "Kickoff", "session_at": "2026-05-01T09:00:00Z",
              "taggings": [{ "tag": { "name": "cohort" } }] },
            { "id": 2, "title": "Legal 101", "session_at": "2026-05-05T09:00:00Z",
              "taggings": [{ "tag": { "name": "legal" } }] },
            { "id": 3, "title": "Demo day", "session_at": "2026-05-25T09:00:00Z",
              "taggings": [{ "tag": { "name": "cohort" } }] }
        ])
        .to_string(),
    )
    .unwrap();

    let value = stdout_json(
        bo(&home)
            .args(["sessions", "--file"])
            .arg(&file)
            .args(["--tag", "cohort", "--now", "2026-05-10T00:00:00Z"])
            .output()
            .unwrap(),
    );

    assert_eq!(value["sessionTags"], json!(["cohort", "legal"]));
    assert_eq!(value["upcoming"][0]["id"], 3);
    assert_eq!(value["past"].as_array().unwrap().len(), 1);
    assert_eq!(value["past"][0]["title"], "Kickoff");
}

#[test]
fn test_config_show_origin_reports_flag_scope() {
    let home = tempfile::TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "[billing]\nemi-installments = 12\n").unwrap();

    let value = stdout_json(
        bo(&home)
            .args(["--set", "billing.base-fee=90000", "config", "show", "--origin"])
            .output()
            .unwrap(),
    );

    assert_eq!(value["config"]["billing"]["base-fee"], 90000);
    assert_eq!(value["config"]["billing"]["emi-installments"], 12);
    assert_eq!(value["origin"]["billing.base-fee"], "flags");
    assert_eq!(value["origin"]["billing.emi-installments"], "user");
}

#[test]
fn test_misspelled_billing_key_is_rejected() {
    let home = tempfile::TempDir::new().unwrap();

    bo(&home)
        .args(["--set", "billing.base_fee=5", "fee", "quote", "--founders", "1"])
        .assert()
        .failure();

    std::fs::write(home.path().join("config.toml"), "[billing]\nbase_fee = 5\n").unwrap();
    bo(&home).args(["fee", "quote", "--founders", "1"]).assert().failure();
}
