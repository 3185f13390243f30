use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "dompet";

fn dompet(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DOMPET_DATA_DIR", data_dir.path())
        .env_remove("DOMPET_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn ledger_contents(data_dir: &TempDir) -> String {
    fs::read_to_string(data_dir.path().join("data").join("transaksi.csv")).unwrap()
}

#[test]
fn add_list_and_report() {
    let data_dir = TempDir::new().unwrap();

    dompet(&data_dir)
        .args(["add", "--kind", "Pemasukan", "--category", "Salary", "--amount", "5000000"])
        .args(["--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Transaction added."));

    dompet(&data_dir)
        .args(["add", "-k", "Pengeluaran", "-c", "Food", "-a", "200000", "-d", "lunch"])
        .args(["--date", "2024-01-01"])
        .assert()
        .success();

    dompet(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Salary").and(contains("Food")).and(contains("lunch")));

    dompet(&data_dir)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("Rp5000000").and(contains("Rp200000")).and(contains("Rp4800000")));

    assert_eq!(
        ledger_contents(&data_dir),
        "date,kind,category,amount,description\n\
         2024-01-01,Pemasukan,Salary,5000000,\n\
         2024-01-01,Pengeluaran,Food,200000,lunch\n"
    );
}

#[test]
fn invalid_amount_is_rejected_without_writing() {
    let data_dir = TempDir::new().unwrap();

    dompet(&data_dir)
        .args(["add", "--kind", "Pemasukan", "--category", "Salary", "--amount", "-5"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    assert!(!data_dir.path().join("data").join("transaksi.csv").exists());
}

#[test]
fn edit_keeps_date_and_delete_reports_row() {
    let data_dir = TempDir::new().unwrap();

    dompet(&data_dir)
        .args(["add", "-k", "income", "-c", "Salary", "-a", "10", "--date", "2023-12-31"])
        .assert()
        .success();

    dompet(&data_dir)
        .args(["edit", "1", "--category", "Bonus", "--amount", "15"])
        .assert()
        .success()
        .stdout(contains("Changes saved."));

    assert!(ledger_contents(&data_dir).contains("2023-12-31,Pemasukan,Bonus,15,"));

    dompet(&data_dir)
        .args(["delete", "2"])
        .assert()
        .failure()
        .stderr(contains("out of range"));

    dompet(&data_dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted row 1"));
}

#[test]
fn list_json() {
    let data_dir = TempDir::new().unwrap();

    dompet(&data_dir)
        .args(["add", "-k", "expense", "-c", "Food", "-a", "7", "--date", "2024-05-06"])
        .assert()
        .success();

    dompet(&data_dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"kind\": \"Pengeluaran\"").and(contains("\"date\": \"2024-05-06\"")));
}

#[test]
fn file_flag_overrides_location() {
    let data_dir = TempDir::new().unwrap();
    let custom = data_dir.path().join("books.csv");

    dompet(&data_dir)
        .args(["add", "-k", "income", "-c", "Gift", "-a", "3"])
        .arg("--file")
        .arg(&custom)
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!data_dir.path().join("data").join("transaksi.csv").exists());
}

#[test]
fn shell_session_with_undo_and_today_queue() {
    let data_dir = TempDir::new().unwrap();
    let script = "\
add Pemasukan Salary 5000000
add Pengeluaran Food 200000 \"lunch with team\"
today
delete 1
undo
undo
list
select 2
add Pemasukan Extra 1
commit Pemasukan Bonus 6000000
report
exit
";

    dompet(&data_dir)
        .arg("shell")
        .env("DOMPET_SCRIPT", "1")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Pemasukan - Salary - Rp5000000")
                .and(contains("Pengeluaran - Food - Rp200000"))
                .and(contains("Restored: Pemasukan - Salary"))
                .and(contains("Nothing to undo."))
                .and(contains("Changes saved."))
                .and(contains("Rp6000000")),
        )
        .stderr(contains("use commit"));

    let contents = ledger_contents(&data_dir);
    let rows: Vec<&str> = contents.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains(",Pengeluaran,Food,200000,lunch with team"));
    assert!(rows[1].contains(",Pemasukan,Bonus,6000000,"));
}

#[test]
fn shell_reports_usage_and_unknown_commands() {
    let data_dir = TempDir::new().unwrap();

    dompet(&data_dir)
        .arg("shell")
        .env("DOMPET_SCRIPT", "1")
        .write_stdin("commit Pemasukan x 1\nselect\nfrobnicate\nquit\n")
        .assert()
        .success()
        .stderr(
            contains("no row is selected")
                .and(contains("usage: select <row>"))
                .and(contains("unknown command 'frobnicate'")),
        );
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    dompet(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("transaksi.csv").and(contains("Currency symbol: Rp")));
}

#[test]
fn init_writes_settings_and_empty_ledger() {
    let data_dir = TempDir::new().unwrap();

    dompet(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Created ledger"));

    let settings = fs::read_to_string(data_dir.path().join("config.json")).unwrap();
    assert!(settings.contains("\"currency_symbol\": \"Rp\""));
    assert!(settings.contains("\"default_kind\": \"Pemasukan\""));
    assert_eq!(ledger_contents(&data_dir), "date,kind,category,amount,description\n");

    dompet(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Keeping existing ledger"));
}

#[test]
fn shell_short_add_uses_configured_kind() {
    let data_dir = TempDir::new().unwrap();
    fs::write(
        data_dir.path().join("config.json"),
        r#"{"default_kind": "Pengeluaran"}"#,
    )
    .unwrap();

    dompet(&data_dir)
        .arg("shell")
        .env("DOMPET_SCRIPT", "1")
        .write_stdin("cancel\nadd Fuel 30\nselect 1\ncancel\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("Nothing is selected.")
                .and(contains("Pengeluaran - Fuel - Rp30"))
                .and(contains("form reset to Pengeluaran")),
        );

    assert!(ledger_contents(&data_dir).contains(",Pengeluaran,Fuel,30,"));
}
